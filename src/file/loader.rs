//! History file loading.

use super::HistoryFile;
use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

/// Loads the history file at `path`.
///
/// A missing file is an empty history, not an error: it is what every first
/// run looks like.
///
/// # Errors
///
/// Returns an error if the file exists but cannot be read or is not a valid
/// history document.
pub fn load_history<P: AsRef<Path>>(path: P) -> Result<HistoryFile> {
    let path = path.as_ref();

    if !path.exists() {
        log::info!("no history at {}, starting empty", path.display());
        return Ok(HistoryFile::default());
    }

    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read history file {}", path.display()))?;

    toml::from_str(&content)
        .with_context(|| format!("Failed to parse history file {}", path.display()))
}
