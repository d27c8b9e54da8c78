use std::collections::BTreeSet;

use super::parser::ParsedUrl;

/// One `(name, values)` pair of a parameter shape. Values keep their order.
pub type ParamShape = (String, Vec<String>);

/// Duplicate-detection identity of a URL
///
/// Two keys are equal when their base URLs are byte-identical and their
/// parameter shapes are equal as sets. Parameter order in the query string
/// does not matter; value order within one parameter does.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CanonicalKey {
    base_url: String,
    params: BTreeSet<ParamShape>,
}

impl CanonicalKey {
    pub fn from_parsed(parsed: &ParsedUrl) -> Self {
        CanonicalKey {
            base_url: parsed.base_url(),
            params: parsed.query_params.iter().cloned().collect(),
        }
    }

    pub fn from_raw(raw: &str) -> Self {
        Self::from_parsed(&ParsedUrl::parse(raw))
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn params(&self) -> &BTreeSet<ParamShape> {
        &self.params
    }
}

impl From<&str> for CanonicalKey {
    fn from(raw: &str) -> Self {
        CanonicalKey::from_raw(raw)
    }
}
