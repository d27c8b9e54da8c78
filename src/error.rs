//! Error types for loading, filtering and saving tool results.

use std::path::PathBuf;

use thiserror::Error;

use crate::tools::ToolKind;

/// Errors raised anywhere in the load → filter → save pipeline.
///
/// None of these are recovered internally; every variant aborts the run.
#[derive(Error, Debug)]
pub enum FilterError {
    /// The tool name is not one of the recognized tools.
    #[error("Unsupported tool type: {name} (expected one of amass, subfinder, sublist3r, aquatone, knockpy)")]
    UnsupportedTool { name: String },

    /// The input file could not be opened or read.
    #[error("Failed to read input file {}: {source}", path.display())]
    InputRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A structured loader got input it could not decode.
    #[error("Malformed input in {}: {reason}", path.display())]
    MalformedInput { path: PathBuf, reason: String },

    /// The tool is recognized but its loader is not implemented yet.
    #[error("Loading results for {tool} is not implemented yet")]
    LoaderUnavailable { tool: ToolKind },

    /// The output file could not be created or written.
    #[error("Failed to write output file {}: {source}", path.display())]
    OutputWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

pub type Result<T> = std::result::Result<T, FilterError>;
