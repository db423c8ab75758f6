use archive_search_common::{ElementIds, NativeValidity};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element, HtmlInputElement, HtmlSelectElement, ValidityState};

/// Handles to the host-page elements the search form is wired to
pub struct HostElements {
    pub filter_by: HtmlSelectElement,
    pub filter_modifier: HtmlSelectElement,
    pub filter_expression: HtmlInputElement,
    pub filter_list: Element,
    pub add_filter: Element,
    pub clear_filters: Element,
    pub date_from: HtmlInputElement,
    pub date_from_bad: Element,
    pub date_to: HtmlInputElement,
    pub date_to_bad: Element,
    pub match_type: HtmlSelectElement,
    pub url: HtmlInputElement,
    pub form: Element,
    pub results_new_window: HtmlInputElement,
}

fn element(document: &Document, id: &str) -> Result<Element, JsValue> {
    document
        .get_element_by_id(id)
        .ok_or_else(|| JsValue::from_str(&format!("Missing host element #{}", id)))
}

fn typed<T: JsCast>(document: &Document, id: &str) -> Result<T, JsValue> {
    element(document, id)?
        .dyn_into::<T>()
        .map_err(|_| JsValue::from_str(&format!("Host element #{} has an unexpected type", id)))
}

impl HostElements {
    pub fn lookup(document: &Document, ids: &ElementIds) -> Result<Self, JsValue> {
        Ok(Self {
            filter_by: typed(document, &ids.filter_by)?,
            filter_modifier: typed(document, &ids.filter_modifier)?,
            filter_expression: typed(document, &ids.filter_expression)?,
            filter_list: element(document, &ids.filter_list)?,
            add_filter: element(document, &ids.add_filter)?,
            clear_filters: element(document, &ids.clear_filters)?,
            date_from: typed(document, &ids.date_from)?,
            date_from_bad: element(document, &ids.date_from_bad)?,
            date_to: typed(document, &ids.date_to)?,
            date_to_bad: element(document, &ids.date_to_bad)?,
            match_type: typed(document, &ids.match_type)?,
            url: typed(document, &ids.url)?,
            form: element(document, &ids.form)?,
            results_new_window: typed(document, &ids.results_new_window)?,
        })
    }
}

pub fn native_validity(validity: &ValidityState) -> NativeValidity {
    NativeValidity {
        valid: validity.valid(),
        value_missing: validity.value_missing(),
        bad_input: validity.bad_input(),
    }
}
