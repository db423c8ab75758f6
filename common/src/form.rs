use crate::{
    build_query, dispatch, DateField, DispatchOutcome, FilterList, NavigationError, Navigator,
    QueryInputs, SearchConfig,
};
use log::debug;

/// CSS class applied to the form after the first submission without a URL
pub const WAS_VALIDATED_CLASS: &str = "was-validated";

/// First half of a submission, computed without touching the browser
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitStep {
    /// The URL field was empty. `newly_flagged` is true only the first time.
    MissingUrl { newly_flagged: bool },
    Ready { target: String, new_window: bool },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// The URL field was empty. `newly_flagged` is true only the first time.
    MissingUrl { newly_flagged: bool },
    Dispatched {
        target: String,
        via: DispatchOutcome,
    },
}

/// Complete state of the search form. Rendering surfaces project from it and
/// feed user events back as mutations.
#[derive(Debug, Clone, Default)]
pub struct SearchForm {
    pub filters: FilterList,
    pub match_type: String,
    pub from: DateField,
    pub to: DateField,
    pub url: String,
    pub open_in_new_window: bool,
    was_validated: bool,
}

impl SearchForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn was_validated(&self) -> bool {
        self.was_validated
    }

    /// Listing target for the current state and the given raw URL
    pub fn build_target(&self, config: &SearchConfig, raw_url: &str) -> String {
        build_query(
            config,
            QueryInputs {
                raw_url,
                filters: &self.filters,
                match_type: &self.match_type,
                from: self.from.value(),
                to: self.to.value(),
            },
        )
    }

    /// Builds the listing target for `raw_url` and sends the browser there
    pub fn perform_query<N: Navigator + ?Sized>(
        &self,
        config: &SearchConfig,
        navigator: &N,
        raw_url: &str,
    ) -> Result<SubmitOutcome, NavigationError> {
        finish_submit(
            navigator,
            self.build_target(config, raw_url),
            self.open_in_new_window,
        )
    }

    /// Checks the URL field and builds the target. Callers holding the
    /// state behind a `RefCell` release it before dispatching.
    pub fn begin_submit(&mut self, config: &SearchConfig) -> SubmitStep {
        if self.url.is_empty() {
            let newly_flagged = !self.was_validated;
            self.was_validated = true;
            debug!("Search not submitted: URL is empty");
            return SubmitStep::MissingUrl { newly_flagged };
        }
        SubmitStep::Ready {
            target: self.build_target(config, &self.url),
            new_window: self.open_in_new_window,
        }
    }

    /// Handles a form submission. An empty URL field aborts without
    /// navigating; date indicators never block.
    pub fn submit<N: Navigator + ?Sized>(
        &mut self,
        config: &SearchConfig,
        navigator: &N,
    ) -> Result<SubmitOutcome, NavigationError> {
        match self.begin_submit(config) {
            SubmitStep::MissingUrl { newly_flagged } => {
                Ok(SubmitOutcome::MissingUrl { newly_flagged })
            }
            SubmitStep::Ready { target, new_window } => {
                finish_submit(navigator, target, new_window)
            }
        }
    }
}

/// Dispatches a target produced by [`SearchForm::begin_submit`]
pub fn finish_submit<N: Navigator + ?Sized>(
    navigator: &N,
    target: String,
    new_window: bool,
) -> Result<SubmitOutcome, NavigationError> {
    let via = dispatch(navigator, &target, new_window)?;
    debug!("Dispatched search to {} via {:?}", target, via);
    Ok(SubmitOutcome::Dispatched { target, via })
}
