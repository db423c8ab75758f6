//! Projection of the typed form state onto the host document.

use archive_search_common::{FilterChip, FilterList, NO_FILTER_LABEL, SHOW_BAD_INPUT_CLASS};
use wasm_bindgen::JsValue;
use web_sys::{Document, Element};

/// Attribute carrying the chip id on each remove button
pub const CHIP_ID_ATTR: &str = "data-chip-id";
/// Attribute carrying the stored filter token on each chip
pub const FILTER_ATTR: &str = "data-filter";

/// Rebuilds the list container: one `li` per chip, or the sentinel alone
pub fn render_filter_list(
    document: &Document,
    list: &Element,
    sentinel_id: &str,
    filters: &FilterList,
) -> Result<(), JsValue> {
    while let Some(child) = list.first_child() {
        list.remove_child(&child)?;
    }
    if filters.has_sentinel() {
        let nothing = document.create_element("li")?;
        nothing.set_id(sentinel_id);
        nothing.set_text_content(Some(NO_FILTER_LABEL));
        list.append_child(&nothing)?;
        return Ok(());
    }
    for chip in filters.chips() {
        let item = render_chip(document, chip)?;
        list.append_child(&item)?;
    }
    Ok(())
}

fn render_chip(document: &Document, chip: &FilterChip) -> Result<Element, JsValue> {
    let li = document.create_element("li")?;
    li.set_text_content(Some(&chip.label));
    li.set_attribute(FILTER_ATTR, &chip.token)?;

    let button = document.create_element("button")?;
    button.set_attribute("type", "button")?;
    button.set_attribute("role", "button")?;
    button.set_attribute("class", "btn btn-outline-danger close")?;
    button.set_attribute("aria-label", "Remove Filter")?;
    button.set_attribute(CHIP_ID_ATTR, &chip.id.to_string())?;

    let x = document.create_element("span")?;
    x.set_attribute("class", "px-2")?;
    x.set_attribute("aria-hidden", "true")?;
    x.set_text_content(Some("\u{00d7}"));

    button.append_child(&x)?;
    li.append_child(&button)?;
    Ok(li)
}

pub fn set_indicator(indicator: &Element, shown: bool) -> Result<(), JsValue> {
    indicator
        .class_list()
        .toggle_with_force(SHOW_BAD_INPUT_CLASS, shown)
        .map(|_| ())
}
