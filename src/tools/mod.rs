//! The recognized enumeration tools and how each one is loaded and filtered.
//!
//! Adding a tool means adding a `ToolKind` variant and one `ToolAdapter`
//! implementation; `adapter()` is the only place both are tied together.

use std::fmt;
use std::path::Path;
use std::str::FromStr;

use crate::error::{FilterError, Result};
use crate::filter::{FilterStrategy, FilteredResult, SetFilter, SimpleFilter, StrategyKind};
use crate::loader;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ToolKind {
    Amass,
    Subfinder,
    Sublist3r,
    Aquatone,
    Knockpy,
}

impl ToolKind {
    pub const ALL: [ToolKind; 5] = [
        ToolKind::Amass,
        ToolKind::Subfinder,
        ToolKind::Sublist3r,
        ToolKind::Aquatone,
        ToolKind::Knockpy,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ToolKind::Amass => "amass",
            ToolKind::Subfinder => "subfinder",
            ToolKind::Sublist3r => "sublist3r",
            ToolKind::Aquatone => "aquatone",
            ToolKind::Knockpy => "knockpy",
        }
    }

    /// Loader and filter for this tool
    pub fn adapter(&self) -> &'static dyn ToolAdapter {
        match self {
            ToolKind::Amass => &AmassAdapter,
            ToolKind::Subfinder | ToolKind::Sublist3r | ToolKind::Knockpy => &PlainTextAdapter,
            ToolKind::Aquatone => &AquatoneAdapter,
        }
    }

    pub fn strategy_kind(&self) -> StrategyKind {
        self.adapter().strategy().kind()
    }
}

impl fmt::Display for ToolKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ToolKind {
    type Err = FilterError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        ToolKind::ALL
            .into_iter()
            .find(|tool| tool.as_str() == s)
            .ok_or_else(|| FilterError::UnsupportedTool { name: s.to_string() })
    }
}

/// Everything the pipeline needs to know about one tool's output
pub trait ToolAdapter: Send + Sync {
    /// Reads raw entries (hostnames or URLs) from a result file
    fn load(&self, path: &Path) -> Result<Vec<String>>;

    /// Strategy used to drop duplicates from the loaded entries
    fn strategy(&self) -> &'static dyn FilterStrategy;

    fn filter(&self, entries: Vec<String>) -> FilteredResult {
        self.strategy().filter(entries)
    }
}

/// subfinder, sublist3r and knockpy: one URL or hostname per line
struct PlainTextAdapter;

impl ToolAdapter for PlainTextAdapter {
    fn load(&self, path: &Path) -> Result<Vec<String>> {
        loader::load_lines(path)
    }

    fn strategy(&self) -> &'static dyn FilterStrategy {
        &SimpleFilter
    }
}

/// amass JSON export; hostnames only, so nothing to canonicalize
struct AmassAdapter;

impl ToolAdapter for AmassAdapter {
    fn load(&self, path: &Path) -> Result<Vec<String>> {
        loader::load_amass(path)
    }

    fn strategy(&self) -> &'static dyn FilterStrategy {
        &SetFilter
    }
}

struct AquatoneAdapter;

impl ToolAdapter for AquatoneAdapter {
    fn load(&self, path: &Path) -> Result<Vec<String>> {
        loader::load_aquatone(path)
    }

    fn strategy(&self) -> &'static dyn FilterStrategy {
        &SetFilter
    }
}

/// Loads a result file for a tool given by name
pub fn load_tool_results(path: &Path, tool: &str) -> Result<Vec<String>> {
    tool.parse::<ToolKind>()?.adapter().load(path)
}

/// Filters raw entries for a tool given by name
pub fn filter_urls(entries: Vec<String>, tool: &str) -> Result<FilteredResult> {
    Ok(tool.parse::<ToolKind>()?.adapter().filter(entries))
}
