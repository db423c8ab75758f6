use super::types::{FilterField, FilterModifier, FilterSpec};
use log::debug;
use serde::Serialize;

/// Identifier of one chip in a [`FilterList`]. Never reused within a list.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct ChipId(u64);

impl From<u64> for ChipId {
    fn from(value: u64) -> Self {
        ChipId(value)
    }
}

impl std::fmt::Display for ChipId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One removable entry of the filter list, with the data a renderer needs
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FilterChip {
    pub id: ChipId,
    pub spec: FilterSpec,
    pub token: String,
    pub label: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AddFilterOutcome {
    Applied(ChipId),
    RejectedMissingField,
    RejectedUnknownField(String),
    RejectedUnknownModifier(String),
    RejectedEmptyExpression,
}

impl AddFilterOutcome {
    pub fn is_applied(&self) -> bool {
        matches!(self, AddFilterOutcome::Applied(_))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RemoveFilterOutcome {
    Removed { now_empty: bool },
    NotFound,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClearOutcome {
    AlreadyEmpty,
    Cleared(usize),
}

/// Ordered, append-only list of filter chips.
///
/// The "No Filter" placeholder is not stored: it is present exactly when the
/// list holds no chips, so the two can never coexist.
#[derive(Debug, Clone, Default)]
pub struct FilterList {
    chips: Vec<FilterChip>,
    next_id: u64,
}

impl FilterList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a filter from the raw values of the filter-by, modifier and
    /// expression inputs. Missing or unknown input leaves the list untouched.
    pub fn add_filter(&mut self, field: &str, modifier: &str, expression: &str) -> AddFilterOutcome {
        if field.is_empty() {
            debug!("Filter not added: no field selected");
            return AddFilterOutcome::RejectedMissingField;
        }
        let field = match FilterField::from_raw(field) {
            Ok(field) => field,
            Err(e) => {
                debug!("Filter not added: {}", e);
                return AddFilterOutcome::RejectedUnknownField(field.to_string());
            }
        };
        let modifier = match modifier.parse::<FilterModifier>() {
            Ok(modifier) => modifier,
            Err(e) => {
                debug!("Filter not added: {}", e);
                return AddFilterOutcome::RejectedUnknownModifier(modifier.to_string());
            }
        };
        if expression.is_empty() {
            debug!("Filter not added: empty expression");
            return AddFilterOutcome::RejectedEmptyExpression;
        }
        AddFilterOutcome::Applied(self.push(FilterSpec::new(field, modifier, expression)))
    }

    /// Appends an already typed filter and returns its chip id
    pub fn push(&mut self, spec: FilterSpec) -> ChipId {
        let id = ChipId(self.next_id);
        self.next_id += 1;
        let chip = FilterChip {
            id,
            token: spec.token(),
            label: spec.label(),
            spec,
        };
        debug!("Added filter chip {}: {}", id, chip.token);
        self.chips.push(chip);
        id
    }

    pub fn remove_filter(&mut self, id: ChipId) -> RemoveFilterOutcome {
        let Some(pos) = self.chips.iter().position(|chip| chip.id == id) else {
            return RemoveFilterOutcome::NotFound;
        };
        let chip = self.chips.remove(pos);
        debug!("Removed filter chip {}: {}", id, chip.token);
        RemoveFilterOutcome::Removed {
            now_empty: self.chips.is_empty(),
        }
    }

    pub fn clear_all(&mut self) -> ClearOutcome {
        if self.chips.is_empty() {
            return ClearOutcome::AlreadyEmpty;
        }
        let count = self.chips.len();
        self.chips.clear();
        debug!("Cleared {} filter chips", count);
        ClearOutcome::Cleared(count)
    }

    /// Whether the "No Filter" placeholder should be shown
    pub fn has_sentinel(&self) -> bool {
        self.chips.is_empty()
    }

    pub fn is_empty(&self) -> bool {
        self.chips.is_empty()
    }

    pub fn len(&self) -> usize {
        self.chips.len()
    }

    pub fn chips(&self) -> &[FilterChip] {
        &self.chips
    }

    /// Stored tokens in display order
    pub fn tokens(&self) -> impl Iterator<Item = &str> {
        self.chips.iter().map(|chip| chip.token.as_str())
    }
}
