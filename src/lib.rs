//! Deduplicates subdomain and URL enumeration results from recon tools
//! (amass, subfinder, sublist3r, aquatone, knockpy).
//!
//! Entries are loaded per tool, collapsed with the tool's filter strategy
//! and written one per line.

pub mod config;
pub mod error;
pub mod filter;
pub mod loader;
pub mod output;
pub mod pipeline;
pub mod tools;
pub mod url_parser;
pub mod utils;

pub use error::{FilterError, Result};
pub use filter::{FilterStrategy, FilteredResult, SetFilter, SimpleFilter, StrategyKind};
pub use pipeline::{run, run_named, RunSummary};
pub use tools::{filter_urls, load_tool_results, ToolAdapter, ToolKind};
pub use url_parser::{CanonicalKey, ParsedUrl};
