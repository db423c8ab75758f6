use crate::NavigationError;
use log::debug;

/// Browsing-context operations a built query is dispatched through
pub trait Navigator {
    /// Opens `url` in a new browsing context and focuses it
    fn open_new_window(&self, url: &str) -> Result<(), NavigationError>;

    /// Navigates the current browsing context to `url`
    fn navigate(&self, url: &str) -> Result<(), NavigationError>;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DispatchOutcome {
    NewWindow,
    SameContext,
    FellBackToSameContext(NavigationError),
}

/// Sends the browser to `url`. A failed new-window open falls back to the
/// current context once; there are no retries.
pub fn dispatch<N: Navigator + ?Sized>(
    navigator: &N,
    url: &str,
    new_window: bool,
) -> Result<DispatchOutcome, NavigationError> {
    if !new_window {
        navigator.navigate(url)?;
        return Ok(DispatchOutcome::SameContext);
    }
    match navigator.open_new_window(url) {
        Ok(()) => Ok(DispatchOutcome::NewWindow),
        Err(e) => {
            debug!("{}, navigating current context instead", e);
            navigator.navigate(url)?;
            Ok(DispatchOutcome::FellBackToSameContext(e))
        }
    }
}

#[cfg(test)]
pub(crate) mod testing {
    use super::*;
    use std::cell::RefCell;

    #[derive(Debug, Clone, PartialEq, Eq)]
    pub enum Call {
        Open(String),
        Navigate(String),
    }

    /// Records every call; the open and navigate results are scripted
    #[derive(Default)]
    pub struct RecordingNavigator {
        pub calls: RefCell<Vec<Call>>,
        pub open_error: Option<NavigationError>,
        pub navigate_error: Option<NavigationError>,
    }

    impl RecordingNavigator {
        pub fn failing_open(error: NavigationError) -> Self {
            Self {
                open_error: Some(error),
                ..Default::default()
            }
        }

        pub fn calls(&self) -> Vec<Call> {
            self.calls.borrow().clone()
        }
    }

    impl Navigator for RecordingNavigator {
        fn open_new_window(&self, url: &str) -> Result<(), NavigationError> {
            self.calls.borrow_mut().push(Call::Open(url.to_string()));
            match &self.open_error {
                Some(e) => Err(e.clone()),
                None => Ok(()),
            }
        }

        fn navigate(&self, url: &str) -> Result<(), NavigationError> {
            self.calls.borrow_mut().push(Call::Navigate(url.to_string()));
            match &self.navigate_error {
                Some(e) => Err(e.clone()),
                None => Ok(()),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::testing::{Call, RecordingNavigator};
    use super::*;

    #[test]
    fn test_same_context() {
        let nav = RecordingNavigator::default();
        assert_eq!(dispatch(&nav, "/a", false), Ok(DispatchOutcome::SameContext));
        assert_eq!(nav.calls(), vec![Call::Navigate("/a".to_string())]);
    }

    #[test]
    fn test_new_window() {
        let nav = RecordingNavigator::default();
        assert_eq!(dispatch(&nav, "/a", true), Ok(DispatchOutcome::NewWindow));
        assert_eq!(nav.calls(), vec![Call::Open("/a".to_string())]);
    }

    #[test]
    fn test_new_window_failure_falls_back_once() {
        let nav = RecordingNavigator::failing_open(NavigationError::NoWindowHandle);
        assert_eq!(
            dispatch(&nav, "/a", true),
            Ok(DispatchOutcome::FellBackToSameContext(
                NavigationError::NoWindowHandle
            ))
        );
        assert_eq!(
            nav.calls(),
            vec![Call::Open("/a".to_string()), Call::Navigate("/a".to_string())]
        );
    }

    #[test]
    fn test_fallback_failure_not_retried() {
        let nav = RecordingNavigator {
            open_error: Some(NavigationError::FocusFailed("blocked".to_string())),
            navigate_error: Some(NavigationError::NavigateFailed("denied".to_string())),
            ..Default::default()
        };
        assert_eq!(
            dispatch(&nav, "/a", true),
            Err(NavigationError::NavigateFailed("denied".to_string()))
        );
        assert_eq!(nav.calls().len(), 2);
    }
}
