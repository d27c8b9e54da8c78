use std::path::{Path, PathBuf};

use tracing::{info, instrument};

use crate::error::Result;
use crate::output::save_filtered_urls;
use crate::tools::ToolKind;

/// What a completed run did
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunSummary {
    pub tool: ToolKind,
    pub loaded: usize,   // Raw entries read from the input
    pub kept: usize,     // Entries written after filtering
    pub output: PathBuf,
}

impl RunSummary {
    pub fn dropped(&self) -> usize {
        self.loaded - self.kept
    }
}

/// Loads `input` with the tool's loader, filters it and writes the result
/// to `output`
///
/// Fails fast: the output file is only touched once loading and filtering
/// have succeeded.
#[instrument(level = "info", skip_all, fields(tool = %tool, input = %input.display()))]
pub fn run(input: &Path, tool: ToolKind, output: &Path) -> Result<RunSummary> {
    let adapter = tool.adapter();

    let entries = adapter.load(input)?;
    let loaded = entries.len();

    let filtered = adapter.filter(entries);
    save_filtered_urls(&filtered, output)?;

    let summary = RunSummary {
        tool,
        loaded,
        kept: filtered.len(),
        output: output.to_path_buf(),
    };
    info!(
        "Run complete: {} loaded, {} kept, {} dropped",
        summary.loaded,
        summary.kept,
        summary.dropped()
    );
    Ok(summary)
}

/// Same as `run`, with the tool given by name
pub fn run_named(input: &Path, tool: &str, output: &Path) -> Result<RunSummary> {
    run(input, tool.parse()?, output)
}
