use crate::dom::{native_validity, HostElements};
use crate::navigator::BrowserNavigator;
use crate::render::{render_filter_list, set_indicator, CHIP_ID_ATTR};
use archive_search_common::{
    finish_submit, AddFilterOutcome, ChipId, ClearOutcome, DateField, RemoveFilterOutcome,
    SearchConfig, SearchForm, SubmitStep, WAS_VALIDATED_CLASS,
};
use log::{debug, warn};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, Event, EventTarget, HtmlInputElement};

#[derive(Copy, Clone)]
enum DateSide {
    From,
    To,
}

/// The search form bound to one host document
pub struct SearchPage {
    config: SearchConfig,
    document: Document,
    elements: HostElements,
    navigator: BrowserNavigator,
    state: RefCell<SearchForm>,
}

impl SearchPage {
    pub fn new(
        config: SearchConfig,
        document: Document,
        elements: HostElements,
        navigator: BrowserNavigator,
    ) -> Self {
        Self {
            config,
            document,
            elements,
            navigator,
            state: RefCell::new(SearchForm::new()),
        }
    }

    /// Renders the initial projection and attaches every event handler
    pub fn attach(self: &Rc<Self>) -> Result<(), JsValue> {
        self.render_filters()?;

        let page = Rc::clone(self);
        listen(&self.elements.add_filter, "click", move |_| page.on_add_filter())?;
        let page = Rc::clone(self);
        listen(&self.elements.clear_filters, "click", move |_| page.on_clear_filters())?;
        let page = Rc::clone(self);
        listen(&self.elements.filter_list, "click", move |event| page.on_list_click(&event))?;

        for side in [DateSide::From, DateSide::To] {
            let page = Rc::clone(self);
            listen(self.date_input(side), "blur", move |_| page.on_date_blur(side))?;
        }

        let page = Rc::clone(self);
        listen(&self.elements.form, "submit", move |event| page.on_submit(&event))?;
        Ok(())
    }

    fn date_input(&self, side: DateSide) -> &HtmlInputElement {
        match side {
            DateSide::From => &self.elements.date_from,
            DateSide::To => &self.elements.date_to,
        }
    }

    fn date_indicator(&self, side: DateSide) -> &Element {
        match side {
            DateSide::From => &self.elements.date_from_bad,
            DateSide::To => &self.elements.date_to_bad,
        }
    }

    fn render_filters(&self) -> Result<(), JsValue> {
        render_filter_list(
            &self.document,
            &self.elements.filter_list,
            &self.config.element_ids.filter_nothing,
            &self.state.borrow().filters,
        )
    }

    fn on_add_filter(&self) -> Result<(), JsValue> {
        let outcome = self.state.borrow_mut().filters.add_filter(
            &self.elements.filter_by.value(),
            &self.elements.filter_modifier.value(),
            &self.elements.filter_expression.value(),
        );
        match outcome {
            AddFilterOutcome::Applied(_) => self.render_filters(),
            rejected => {
                debug!("Add filter ignored: {:?}", rejected);
                Ok(())
            }
        }
    }

    fn on_clear_filters(&self) -> Result<(), JsValue> {
        let outcome = self.state.borrow_mut().filters.clear_all();
        match outcome {
            ClearOutcome::Cleared(_) => self.render_filters(),
            ClearOutcome::AlreadyEmpty => Ok(()),
        }
    }

    /// Delegated handler for the remove buttons of every chip
    fn on_list_click(&self, event: &Event) -> Result<(), JsValue> {
        let Some(button) = event
            .target()
            .and_then(|target| target.dyn_into::<Element>().ok())
            .map(|element| element.closest(&format!("button[{}]", CHIP_ID_ATTR)))
            .transpose()?
            .flatten()
        else {
            return Ok(());
        };
        let Some(id) = button
            .get_attribute(CHIP_ID_ATTR)
            .and_then(|raw| raw.parse::<u64>().ok())
            .map(ChipId::from)
        else {
            return Ok(());
        };
        let outcome = self.state.borrow_mut().filters.remove_filter(id);
        match outcome {
            RemoveFilterOutcome::Removed { .. } => self.render_filters(),
            RemoveFilterOutcome::NotFound => Ok(()),
        }
    }

    fn on_date_blur(&self, side: DateSide) -> Result<(), JsValue> {
        let input = self.date_input(side);
        let shown = {
            let mut state = self.state.borrow_mut();
            let field: &mut DateField = match side {
                DateSide::From => &mut state.from,
                DateSide::To => &mut state.to,
            };
            field.set_value(input.value());
            field.on_blur(native_validity(&input.validity()));
            field.indicator_shown()
        };
        set_indicator(self.date_indicator(side), shown)
    }

    /// Copies the fields read at submission time into the form state
    fn sync_submit_fields(&self) {
        let mut state = self.state.borrow_mut();
        state.url = self.elements.url.value();
        state.match_type = self.elements.match_type.value();
        state.from.set_value(self.elements.date_from.value());
        state.to.set_value(self.elements.date_to.value());
        state.open_in_new_window = self.elements.results_new_window.checked();
    }

    fn on_submit(&self, event: &Event) -> Result<(), JsValue> {
        event.prevent_default();
        event.stop_propagation();
        self.sync_submit_fields();

        // The state borrow ends here; navigation may re-enter the handlers
        let step = self.state.borrow_mut().begin_submit(&self.config);
        match step {
            SubmitStep::MissingUrl { newly_flagged: true } => self
                .elements
                .form
                .class_list()
                .add_1(WAS_VALIDATED_CLASS),
            SubmitStep::MissingUrl { newly_flagged: false } => Ok(()),
            SubmitStep::Ready { target, new_window } => {
                finish_submit(&self.navigator, target, new_window)
                    .map_err(|e| JsValue::from_str(&e.to_string()))?;
                Ok(())
            }
        }
    }
}

/// Attaches `handler` for the lifetime of the page; handler errors are logged
fn listen<F>(target: &EventTarget, event_type: &'static str, mut handler: F) -> Result<(), JsValue>
where
    F: FnMut(Event) -> Result<(), JsValue> + 'static,
{
    let closure = Closure::<dyn FnMut(Event)>::new(move |event: Event| {
        if let Err(e) = handler(event) {
            warn!(
                "{} handler failed: {}",
                event_type,
                crate::navigator::js_error_string(&e)
            );
        }
    });
    target.add_event_listener_with_callback(event_type, closure.as_ref().unchecked_ref())?;
    closure.forget();
    Ok(())
}
