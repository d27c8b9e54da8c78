//! Duplicate removal strategies applied after loading.

use std::collections::HashSet;

use tracing::{debug, info};

use crate::url_parser::CanonicalKey;

/// Which family of filtering a tool uses
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StrategyKind {
    Simple,
    Set,
}

/// Surviving entries, in their original string form
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FilteredResult {
    Ordered(Vec<String>),       // First occurrences, in input order
    Unordered(HashSet<String>), // Exact-string set, no order guarantee
}

impl FilteredResult {
    pub fn len(&self) -> usize {
        match self {
            FilteredResult::Ordered(entries) => entries.len(),
            FilteredResult::Unordered(entries) => entries.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn is_ordered(&self) -> bool {
        matches!(self, FilteredResult::Ordered(_))
    }

    pub fn contains(&self, entry: &str) -> bool {
        match self {
            FilteredResult::Ordered(entries) => entries.iter().any(|e| e == entry),
            FilteredResult::Unordered(entries) => entries.contains(entry),
        }
    }

    pub fn iter(&self) -> Box<dyn Iterator<Item = &str> + '_> {
        match self {
            FilteredResult::Ordered(entries) => Box::new(entries.iter().map(String::as_str)),
            FilteredResult::Unordered(entries) => Box::new(entries.iter().map(String::as_str)),
        }
    }

    pub fn into_vec(self) -> Vec<String> {
        match self {
            FilteredResult::Ordered(entries) => entries,
            FilteredResult::Unordered(entries) => entries.into_iter().collect(),
        }
    }
}

/// A way of collapsing duplicate raw entries
pub trait FilterStrategy: Send + Sync {
    fn kind(&self) -> StrategyKind;

    fn filter(&self, entries: Vec<String>) -> FilteredResult;
}

/// Stable dedup by `CanonicalKey`: base URL plus query parameter shape.
/// The first occurrence of each key wins.
#[derive(Debug, Default, Clone, Copy)]
pub struct SimpleFilter;

impl FilterStrategy for SimpleFilter {
    fn kind(&self) -> StrategyKind {
        StrategyKind::Simple
    }

    fn filter(&self, entries: Vec<String>) -> FilteredResult {
        let total = entries.len();
        let mut seen: HashSet<CanonicalKey> = HashSet::with_capacity(total);
        let mut kept = Vec::with_capacity(total);

        for entry in entries {
            let key = CanonicalKey::from_raw(&entry);
            if seen.insert(key) {
                kept.push(entry);
            } else {
                debug!("Dropping duplicate entry: {}", entry);
            }
        }

        info!("Simple filter kept {} of {} entries", kept.len(), total);
        FilteredResult::Ordered(kept)
    }
}

/// Exact string dedup with no parsing at all
#[derive(Debug, Default, Clone, Copy)]
pub struct SetFilter;

impl FilterStrategy for SetFilter {
    fn kind(&self) -> StrategyKind {
        StrategyKind::Set
    }

    fn filter(&self, entries: Vec<String>) -> FilteredResult {
        let total = entries.len();
        let unique: HashSet<String> = entries.into_iter().collect();
        info!("Set filter kept {} of {} entries", unique.len(), total);
        FilteredResult::Unordered(unique)
    }
}
