//! History file saving.
//!
//! Writes go to a temporary file next to the target which is then renamed
//! over it, so a crash never leaves a half-written history behind.

use super::HistoryFile;
use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

/// Saves `history` to `path`, creating parent directories as needed.
///
/// # Errors
///
/// Returns an error if:
/// - The parent directory cannot be created
/// - Serializing or writing the temp file fails
/// - Renaming the temp file to the target fails
pub fn save_history<P: AsRef<Path>>(path: P, history: &HistoryFile) -> Result<()> {
    let path = path.as_ref();

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create history directory {}", parent.display())
            })?;
        }
    }

    let toml_string = toml::to_string_pretty(history).context("Failed to serialize history")?;
    write_file_atomic(path, toml_string.as_bytes())
}

/// Writes data to a temporary file, then renames it to `path`.
fn write_file_atomic(path: &Path, data: &[u8]) -> Result<()> {
    let temp_path = path.with_extension("tmp");

    fs::write(&temp_path, data).context("Failed to write temp file")?;
    fs::rename(&temp_path, path).context("Failed to rename temp file")?;

    Ok(())
}
