use archive_search_common::{NavigationError, Navigator};
use wasm_bindgen::JsValue;
use web_sys::Window;

pub(crate) fn js_error_string(value: &JsValue) -> String {
    value.as_string().unwrap_or_else(|| format!("{:?}", value))
}

/// Navigates through the page's `window`
pub struct BrowserNavigator {
    window: Window,
}

impl BrowserNavigator {
    pub fn new(window: Window) -> Self {
        Self { window }
    }
}

impl Navigator for BrowserNavigator {
    fn open_new_window(&self, url: &str) -> Result<(), NavigationError> {
        let opened = self
            .window
            .open_with_url(url)
            .map_err(|e| NavigationError::OpenFailed(js_error_string(&e)))?
            .ok_or(NavigationError::NoWindowHandle)?;
        opened
            .focus()
            .map_err(|e| NavigationError::FocusFailed(js_error_string(&e)))
    }

    fn navigate(&self, url: &str) -> Result<(), NavigationError> {
        self.window
            .location()
            .set_href(url)
            .map_err(|e| NavigationError::NavigateFailed(js_error_string(&e)))
    }
}
