pub mod config;
pub mod date_range;
pub mod errors;
pub mod filters;
pub mod form;
pub mod navigation;
pub mod query;

pub use config::{ElementIds, SearchConfig, PREFIX_ENV_VAR};
pub use date_range::{
    is_canonical_timestamp, DateCheck, DateField, NativeValidity, SHOW_BAD_INPUT_CLASS,
};
pub use errors::{NavigationError, SearchError};
pub use filters::{
    AddFilterOutcome, ChipId, ClearOutcome, FilterChip, FilterField, FilterList, FilterModifier,
    FilterSpec, RemoveFilterOutcome, NO_FILTER_LABEL,
};
pub use form::{finish_submit, SearchForm, SubmitOutcome, SubmitStep, WAS_VALIDATED_CLASS};
pub use navigation::{dispatch, DispatchOutcome, Navigator};
pub use query::{build_query, QueryInputs, QueryState};
