use crate::SearchError;
use serde::{Deserialize, Serialize};
use strum_macros::{AsRefStr, EnumIter, EnumString};

/// Text of the placeholder entry shown while the filter list is empty
pub const NO_FILTER_LABEL: &str = "No Filter";

/// Capture-index fields the archive listing accepts as filter keys
#[derive(
    Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize, AsRefStr, EnumIter, EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum FilterField {
    Url,
    Urlkey,
    Mime,
    Status,
    Digest,
    Length,
    Offset,
    Filename,
    Timestamp,
}

impl FilterField {
    /// Parses the raw value of the filter-by selection
    pub fn from_raw(raw: &str) -> Result<Self, SearchError> {
        raw.parse()
            .map_err(|_| SearchError::UnknownField(raw.to_string()))
    }

    pub fn as_str(&self) -> &str {
        self.as_ref()
    }

    /// Field name with its first character upper-cased, as shown on a chip
    pub fn display_name(&self) -> String {
        let name = self.as_str();
        let mut chars = name.chars();
        match chars.next() {
            Some(first) => first.to_uppercase().chain(chars).collect(),
            None => String::new(),
        }
    }
}

impl std::fmt::Display for FilterField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Comparison operator between a field and an expression
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize, EnumIter)]
pub enum FilterModifier {
    #[serde(rename = "=")]
    Contains,
    #[serde(rename = "==")]
    MatchesExactly,
    #[serde(rename = "=~")]
    MatchesRegex,
    #[serde(rename = "=!")]
    DoesNotContain,
    #[serde(rename = "=!=")]
    IsNot,
    #[serde(rename = "=!~")]
    DoesNotMatchRegex,
}

impl FilterModifier {
    pub fn token(&self) -> &'static str {
        match self {
            FilterModifier::Contains => "=",
            FilterModifier::MatchesExactly => "==",
            FilterModifier::MatchesRegex => "=~",
            FilterModifier::DoesNotContain => "=!",
            FilterModifier::IsNot => "=!=",
            FilterModifier::DoesNotMatchRegex => "=!~",
        }
    }

    /// Human label shown on chips. The `=!~` label is kept as the search page
    /// has always shown it, even though it reads differently from the operator.
    pub fn label(&self) -> &'static str {
        match self {
            FilterModifier::Contains => "Contains",
            FilterModifier::MatchesExactly => "Matches Exactly",
            FilterModifier::MatchesRegex => "Matches Regex",
            FilterModifier::DoesNotContain => "Does Not Contains",
            FilterModifier::IsNot => "Is Not",
            FilterModifier::DoesNotMatchRegex => "Does Not Begins With",
        }
    }
}

impl std::fmt::Display for FilterModifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.token())
    }
}

impl std::str::FromStr for FilterModifier {
    type Err = SearchError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "=" => Ok(FilterModifier::Contains),
            "==" => Ok(FilterModifier::MatchesExactly),
            "=~" => Ok(FilterModifier::MatchesRegex),
            "=!" => Ok(FilterModifier::DoesNotContain),
            "=!=" => Ok(FilterModifier::IsNot),
            "=!~" => Ok(FilterModifier::DoesNotMatchRegex),
            _ => Err(SearchError::UnknownModifier(s.to_string())),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterSpec {
    pub field: FilterField,
    pub modifier: FilterModifier,
    pub expression: String,
}

impl FilterSpec {
    pub fn new(field: FilterField, modifier: FilterModifier, expression: impl Into<String>) -> Self {
        Self {
            field,
            modifier,
            expression: expression.into(),
        }
    }

    /// Query fragment for this filter: `filter<modifier><field>:<expression>`
    pub fn token(&self) -> String {
        format!(
            "filter{}{}:{}",
            self.modifier.token(),
            self.field.as_str(),
            self.expression
        )
    }

    /// Chip text: `By <Field> <ModifierLabel> <expression>`
    pub fn label(&self) -> String {
        format!(
            "By {} {} {}",
            self.field.display_name(),
            self.modifier.label(),
            self.expression
        )
    }
}
