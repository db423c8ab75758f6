use log::debug;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::OnceLock;

/// CSS class that makes a "bad format" indicator visible
pub const SHOW_BAD_INPUT_CLASS: &str = "show-optional-bad-input";

static TIMESTAMP_REGEX: OnceLock<Regex> = OnceLock::new();

/// Truncated `YYYYMMDDHHMMSS` timestamp: 4 to 14 ASCII digits
fn timestamp_regex() -> &'static Regex {
    TIMESTAMP_REGEX.get_or_init(|| Regex::new(r"^[0-9]{4,14}$").unwrap())
}

pub fn is_canonical_timestamp(value: &str) -> bool {
    timestamp_regex().is_match(value)
}

/// Snapshot of an input's native constraint-validation state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct NativeValidity {
    pub valid: bool,
    pub value_missing: bool,
    pub bad_input: bool,
}

impl NativeValidity {
    pub fn valid() -> Self {
        Self {
            valid: true,
            value_missing: false,
            bad_input: false,
        }
    }

    pub fn bad_input() -> Self {
        Self {
            valid: false,
            value_missing: false,
            bad_input: true,
        }
    }
}

impl Default for NativeValidity {
    fn default() -> Self {
        Self::valid()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateCheck {
    Valid,
    Empty,
    BadInput,
    BadFormat,
}

impl DateCheck {
    pub fn shows_indicator(&self) -> bool {
        matches!(self, DateCheck::BadInput | DateCheck::BadFormat)
    }
}

/// One date input of the range plus the visibility of its paired indicator
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DateField {
    value: String,
    indicator_shown: bool,
}

impl DateField {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn set_value(&mut self, value: impl Into<String>) {
        self.value = value.into();
    }

    pub fn indicator_shown(&self) -> bool {
        self.indicator_shown
    }

    /// Re-evaluates the indicator when the input loses focus.
    ///
    /// The indicator is advisory: it never blocks a submission.
    pub fn on_blur(&mut self, validity: NativeValidity) -> DateCheck {
        let check = self.check(validity);
        let shown = check.shows_indicator();
        if shown != self.indicator_shown {
            debug!(
                "Date indicator for {:?} {}",
                self.value,
                if shown { "shown" } else { "hidden" }
            );
        }
        self.indicator_shown = shown;
        check
    }

    fn check(&self, validity: NativeValidity) -> DateCheck {
        if validity.valid && self.indicator_shown {
            return DateCheck::Valid;
        }
        if validity.value_missing || self.value.is_empty() {
            return DateCheck::Empty;
        }
        if validity.bad_input {
            return DateCheck::BadInput;
        }
        if is_canonical_timestamp(&self.value) {
            DateCheck::Valid
        } else {
            DateCheck::BadFormat
        }
    }
}
