use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use tracing::{info, instrument};

use crate::error::{FilterError, Result};
use crate::filter::FilteredResult;

/// Writes surviving entries to `path`, one per line, truncating any
/// existing file
#[instrument(level = "debug", skip_all, fields(path = %path.display(), count = result.len()))]
pub fn save_filtered_urls(result: &FilteredResult, path: &Path) -> Result<()> {
    let write_err = |source| FilterError::OutputWrite {
        path: path.to_path_buf(),
        source,
    };

    let file = File::create(path).map_err(write_err)?;
    let mut writer = BufWriter::new(file);
    for entry in result.iter() {
        writeln!(writer, "{}", entry).map_err(write_err)?;
    }
    writer.flush().map_err(write_err)?;

    info!("Wrote {} entries to {}", result.len(), path.display());
    Ok(())
}
