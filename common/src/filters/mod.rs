mod list;
mod types;

pub use list::{AddFilterOutcome, ChipId, ClearOutcome, FilterChip, FilterList, RemoveFilterOutcome};
pub use types::{FilterField, FilterModifier, FilterSpec, NO_FILTER_LABEL};
