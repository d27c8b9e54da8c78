//! Readers for the result files written by each enumeration tool.

use std::fs;
use std::path::Path;

use serde::Deserialize;
use tracing::{debug, info, instrument, warn};

use crate::error::{FilterError, Result};
use crate::tools::ToolKind;

/// Top-level shape of an amass JSON export
#[derive(Debug, Deserialize)]
struct AmassOutput {
    hostnames: Vec<AmassHostname>,
}

#[derive(Debug, Deserialize)]
struct AmassHostname {
    name: String,
}

fn read_input(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(|source| FilterError::InputRead {
        path: path.to_path_buf(),
        source,
    })
}

/// Loads a newline-delimited result file (subfinder, sublist3r, knockpy)
///
/// Each line is trimmed and blank lines are skipped. Every other line is
/// an entry, including ones starting with `#`.
///
/// # Arguments
/// * `path` - File containing one hostname or URL per line
///
/// # Returns
/// * `Result<Vec<String>>` - Entries in file order
#[instrument(level = "debug", skip_all, fields(path = %path.display()))]
pub fn load_lines(path: &Path) -> Result<Vec<String>> {
    let content = read_input(path)?;

    let entries: Vec<String> = content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(String::from)
        .collect();

    info!("Loaded {} entries from {}", entries.len(), path.display());
    Ok(entries)
}

/// Loads the `name` of every element of the `hostnames` array of an
/// amass JSON export
#[instrument(level = "debug", skip_all, fields(path = %path.display()))]
pub fn load_amass(path: &Path) -> Result<Vec<String>> {
    let content = read_input(path)?;

    let output: AmassOutput = serde_json::from_str(&content).map_err(|e| {
        warn!("Could not decode amass output {}: {}", path.display(), e);
        FilterError::MalformedInput {
            path: path.to_path_buf(),
            reason: e.to_string(),
        }
    })?;

    let entries: Vec<String> = output.hostnames.into_iter().map(|h| h.name).collect();
    info!("Loaded {} hostnames from {}", entries.len(), path.display());
    Ok(entries)
}

/// Aquatone reports (HTML/CSV) are not parsed yet. Always returns
/// `LoaderUnavailable` without touching the file, so an empty run is never
/// mistaken for "no subdomains found".
// TODO: parse aquatone_urls.txt / aquatone_session.json once a sample export is available
pub fn load_aquatone(path: &Path) -> Result<Vec<String>> {
    debug!("Refusing to load aquatone results from {}", path.display());
    Err(FilterError::LoaderUnavailable {
        tool: ToolKind::Aquatone,
    })
}
