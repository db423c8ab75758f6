#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchError {
    UnknownField(String),
    UnknownModifier(String),
    MissingArchivePrefix,
    InvalidConfig(String),
}

impl From<serde_json::Error> for SearchError {
    fn from(error: serde_json::Error) -> Self {
        SearchError::InvalidConfig(error.to_string())
    }
}

impl From<SearchError> for String {
    fn from(error: SearchError) -> Self {
        error.to_string()
    }
}

impl std::fmt::Display for SearchError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SearchError::UnknownField(field) => write!(f, "Unknown filter field: {}", field),
            SearchError::UnknownModifier(modifier) => {
                write!(f, "Unknown filter modifier: {}", modifier)
            }
            SearchError::MissingArchivePrefix => write!(
                f,
                "Archive prefix is not set. Provide archive_prefix in the config or set wb_prefix on the host page."
            ),
            SearchError::InvalidConfig(err) => write!(f, "Invalid search config: {}", err),
        }
    }
}

impl std::error::Error for SearchError {}

/// Failures of the browsing-context side of a dispatch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavigationError {
    OpenFailed(String),
    NoWindowHandle,
    FocusFailed(String),
    NavigateFailed(String),
}

impl From<NavigationError> for String {
    fn from(error: NavigationError) -> Self {
        error.to_string()
    }
}

impl std::fmt::Display for NavigationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            NavigationError::OpenFailed(err) => write!(f, "Failed to open new window: {}", err),
            NavigationError::NoWindowHandle => write!(f, "New window returned no handle"),
            NavigationError::FocusFailed(err) => write!(f, "Failed to focus new window: {}", err),
            NavigationError::NavigateFailed(err) => write!(f, "Failed to navigate: {}", err),
        }
    }
}

impl std::error::Error for NavigationError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_search_error_display() {
        assert_eq!(
            SearchError::UnknownField("color".to_string()).to_string(),
            "Unknown filter field: color"
        );
        assert_eq!(
            SearchError::UnknownModifier("<>".to_string()).to_string(),
            "Unknown filter modifier: <>"
        );
        let msg = SearchError::MissingArchivePrefix.to_string();
        assert!(msg.contains("archive_prefix"));
        assert!(msg.contains("wb_prefix"));
    }

    #[test]
    fn test_search_error_from_serde_json() {
        let err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let search_err: SearchError = err.into();
        assert!(matches!(search_err, SearchError::InvalidConfig(_)));
        assert!(search_err.to_string().starts_with("Invalid search config:"));
    }

    #[test]
    fn test_navigation_error_into_string() {
        let msg: String = NavigationError::NoWindowHandle.into();
        assert_eq!(msg, "New window returned no handle");
        let msg: String = NavigationError::NavigateFailed("blocked".to_string()).into();
        assert_eq!(msg, "Failed to navigate: blocked");
    }

    #[test]
    fn test_errors_implement_std_error() {
        let error: Box<dyn std::error::Error> = SearchError::MissingArchivePrefix.into();
        assert!(error.source().is_none());
        let error: Box<dyn std::error::Error> = NavigationError::NoWindowHandle.into();
        assert!(error.source().is_none());
    }
}
