pub mod dom;
mod logger;
pub mod navigator;
mod page;
pub mod render;

pub use logger::init_logger;
pub use navigator::BrowserNavigator;
pub use page::SearchPage;

use archive_search_common::{build_query, FilterList, QueryInputs, SearchConfig};
use dom::HostElements;
use log::info;
use serde::Deserialize;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;

thread_local! {
    static SEARCH_PAGE: RefCell<Option<Rc<SearchPage>>> = const { RefCell::new(None) };
}

/// Options accepted by [`init`]: the search config plus logging verbosity
#[derive(Deserialize, Default)]
struct InitOptions {
    #[serde(flatten)]
    config: SearchConfig,
    #[serde(default)]
    verbose: bool,
}

fn host_prefix(window: &web_sys::Window) -> Option<String> {
    js_sys::Reflect::get(window, &JsValue::from_str("wb_prefix"))
        .ok()
        .and_then(|value| value.as_string())
}

/// Wires the search form of the current document. Only the first successful
/// call binds; later calls fail without touching the page.
///
/// `options` may be `undefined`; the archive prefix then comes from the
/// page's global `wb_prefix`.
#[wasm_bindgen]
pub fn init(options: JsValue) -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    if SEARCH_PAGE.with(|slot| slot.borrow().is_some()) {
        return Err(JsValue::from_str("Search form is already initialised"));
    }

    let options: InitOptions = if options.is_undefined() || options.is_null() {
        InitOptions::default()
    } else {
        serde_wasm_bindgen::from_value(options)?
    };
    init_logger(options.verbose);

    let window = web_sys::window().ok_or_else(|| JsValue::from_str("No window available"))?;
    let document = window
        .document()
        .ok_or_else(|| JsValue::from_str("No document available"))?;
    let config = options
        .config
        .with_fallback_prefix(host_prefix(&window))
        .map_err(|e| JsValue::from_str(&e.to_string()))?;
    let elements = HostElements::lookup(&document, &config.element_ids)?;

    info!("Search form bound to prefix {}", config.archive_prefix);
    let page = Rc::new(SearchPage::new(
        config,
        document,
        elements,
        BrowserNavigator::new(window),
    ));
    page.attach()?;
    SEARCH_PAGE.with(|slot| *slot.borrow_mut() = Some(page));
    Ok(())
}

/// Builds a listing target without touching the document. Useful for links
/// rendered outside the search form.
#[wasm_bindgen]
pub fn listing_url(
    archive_prefix: &str,
    raw_url: &str,
    match_type: Option<String>,
) -> Result<String, String> {
    let config = SearchConfig::new(archive_prefix)?;
    Ok(build_query(
        &config,
        QueryInputs {
            raw_url,
            filters: &FilterList::new(),
            match_type: match_type.as_deref().unwrap_or_default(),
            from: "",
            to: "",
        },
    ))
}
