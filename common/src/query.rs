use crate::{FilterList, SearchConfig};
use log::debug;

/// Fragments of one navigation target, assembled in their fixed order:
/// listing base, filters, `matchType`, `from`, `to`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryState {
    fragments: Vec<String>,
}

impl QueryState {
    /// Starts a query for `raw_url`, percent-encoding everything outside
    /// the unreserved set.
    pub fn new(config: &SearchConfig, raw_url: &str) -> Self {
        Self {
            fragments: vec![format!(
                "{}{}",
                config.listing_base(),
                urlencoding::encode(raw_url)
            )],
        }
    }

    pub fn push_filters(&mut self, filters: &FilterList) {
        for token in filters.tokens() {
            let token = token.trim();
            if !token.is_empty() {
                self.fragments.push(token.to_string());
            }
        }
    }

    /// Appends `name=value` unless the trimmed value is empty
    pub fn push_param(&mut self, name: &str, value: &str) {
        let value = value.trim();
        if !value.is_empty() {
            self.fragments.push(format!("{}={}", name, value));
        }
    }

    pub fn build(self) -> String {
        self.fragments.join("&")
    }
}

/// The parts of the form state the listing query is built from
#[derive(Debug, Clone, Copy)]
pub struct QueryInputs<'a> {
    pub raw_url: &'a str,
    pub filters: &'a FilterList,
    pub match_type: &'a str,
    pub from: &'a str,
    pub to: &'a str,
}

pub fn build_query(config: &SearchConfig, inputs: QueryInputs<'_>) -> String {
    let mut query = QueryState::new(config, inputs.raw_url);
    query.push_filters(inputs.filters);
    query.push_param("matchType", inputs.match_type);
    query.push_param("from", inputs.from);
    query.push_param("to", inputs.to);
    let built = query.build();
    debug!("Built listing query: {}", built);
    built
}
