use crate::SearchError;
use serde::{Deserialize, Serialize};
use std::env;

/// Environment variable read by native tooling for the archive prefix
pub const PREFIX_ENV_VAR: &str = "WB_SEARCH_PREFIX";

/// Ids of the host-page elements the search form is wired to
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ElementIds {
    pub filter_by: String,
    pub filter_modifier: String,
    pub filter_expression: String,
    pub filter_list: String,
    pub filter_nothing: String,
    pub add_filter: String,
    pub clear_filters: String,
    pub date_from: String,
    pub date_from_bad: String,
    pub date_to: String,
    pub date_to_bad: String,
    pub match_type: String,
    pub url: String,
    pub form: String,
    pub results_new_window: String,
}

impl Default for ElementIds {
    fn default() -> Self {
        Self {
            filter_by: "filter-by".to_string(),
            filter_modifier: "filter-modifier".to_string(),
            filter_expression: "filter-expression".to_string(),
            filter_list: "filter-list".to_string(),
            filter_nothing: "filtering-nothing".to_string(),
            add_filter: "add-filter".to_string(),
            clear_filters: "clear-filters".to_string(),
            date_from: "dt-from".to_string(),
            date_from_bad: "dt-from-bad".to_string(),
            date_to: "dt-to".to_string(),
            date_to_bad: "dt-to-bad".to_string(),
            match_type: "match-type-select".to_string(),
            url: "search-url".to_string(),
            form: "search-form".to_string(),
            results_new_window: "open-results-new-window".to_string(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchConfig {
    /// Collection prefix the listing endpoint lives under, e.g. `/pywb/`
    #[serde(default)]
    pub archive_prefix: String,
    #[serde(default)]
    pub element_ids: ElementIds,
}

impl SearchConfig {
    pub fn new(archive_prefix: impl Into<String>) -> Result<Self, SearchError> {
        let config = Self {
            archive_prefix: archive_prefix.into(),
            element_ids: ElementIds::default(),
        };
        config.validate()?;
        Ok(config)
    }

    pub fn from_json(json: &str) -> Result<Self, SearchError> {
        let config: SearchConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Reads the prefix from `WB_SEARCH_PREFIX`
    pub fn from_env() -> Result<Self, SearchError> {
        let prefix = env::var(PREFIX_ENV_VAR).unwrap_or_default();
        Self::new(prefix)
    }

    /// Fills an empty prefix from the host page's fallback value
    pub fn with_fallback_prefix(mut self, fallback: Option<String>) -> Result<Self, SearchError> {
        if self.archive_prefix.is_empty() {
            self.archive_prefix = fallback.unwrap_or_default();
        }
        self.validate()?;
        Ok(self)
    }

    pub fn validate(&self) -> Result<(), SearchError> {
        if self.archive_prefix.trim().is_empty() {
            return Err(SearchError::MissingArchivePrefix);
        }
        Ok(())
    }

    /// Listing endpoint up to and including `url=`
    pub fn listing_base(&self) -> String {
        if self.archive_prefix.ends_with('/') {
            format!("{}*?url=", self.archive_prefix)
        } else {
            format!("{}/*?url=", self.archive_prefix)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_listing_base_adds_single_slash() {
        let config = SearchConfig::new("http://localhost:8080/pywb").unwrap();
        assert_eq!(config.listing_base(), "http://localhost:8080/pywb/*?url=");
        let config = SearchConfig::new("/pywb/").unwrap();
        assert_eq!(config.listing_base(), "/pywb/*?url=");
    }

    #[test]
    fn test_empty_prefix_rejected() {
        assert_eq!(SearchConfig::new(""), Err(SearchError::MissingArchivePrefix));
        assert_eq!(SearchConfig::new("  "), Err(SearchError::MissingArchivePrefix));
    }

    #[test]
    fn test_from_json_defaults_element_ids() {
        let config = SearchConfig::from_json(r#"{"archive_prefix": "/my-web-archive/"}"#).unwrap();
        assert_eq!(config.archive_prefix, "/my-web-archive/");
        assert_eq!(config.element_ids, ElementIds::default());
        assert_eq!(config.element_ids.filter_nothing, "filtering-nothing");
    }

    #[test]
    fn test_from_json_overrides_some_ids() {
        let config = SearchConfig::from_json(
            r#"{"archive_prefix": "/coll/", "element_ids": {"url": "q", "form": "f"}}"#,
        )
        .unwrap();
        assert_eq!(config.element_ids.url, "q");
        assert_eq!(config.element_ids.form, "f");
        assert_eq!(config.element_ids.date_from, "dt-from");
    }

    #[test]
    fn test_from_json_errors() {
        assert_eq!(
            SearchConfig::from_json("{}"),
            Err(SearchError::MissingArchivePrefix)
        );
        assert!(matches!(
            SearchConfig::from_json("not json"),
            Err(SearchError::InvalidConfig(_))
        ));
    }

    #[test]
    fn test_fallback_prefix() {
        let config = SearchConfig::default()
            .with_fallback_prefix(Some("/fallback/".to_string()))
            .unwrap();
        assert_eq!(config.archive_prefix, "/fallback/");

        let config = SearchConfig::from_json(r#"{"archive_prefix": "/own/"}"#)
            .unwrap()
            .with_fallback_prefix(Some("/fallback/".to_string()))
            .unwrap();
        assert_eq!(config.archive_prefix, "/own/");

        assert_eq!(
            SearchConfig::default().with_fallback_prefix(None),
            Err(SearchError::MissingArchivePrefix)
        );
    }
}
