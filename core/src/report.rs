use std::fs;
use std::path::Path;

use scanrun_common::scan::summary::ScanSummary;
use tracing::debug;

use crate::error::{Result, ScanError};

/// Serializes `summary` and replaces whatever is at `path`.
///
/// Plain truncate-and-write, no temp file or rename.
pub fn write_summary(summary: &ScanSummary, path: &Path) -> Result<()> {
    let json = summary.to_pretty_json()?;

    fs::write(path, json.as_bytes()).map_err(|source| ScanError::WriteSummary {
        path: path.to_path_buf(),
        source,
    })?;

    debug!(path = %path.display(), "summary written");
    Ok(())
}
