//! Bookmark files on disk as a navigation backend.
//!
//! A bookmark file holds one bookmark per line; blank lines and lines starting
//! with `#` are skipped. Loading a file makes it the current bookmark file.

use crate::jump::Navigator;
use crate::path::NormalizedPaths;
use anyhow::{bail, Context, Result};
use std::fs;
use std::path::PathBuf;

/// Identifies one bookmark file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookmarkRecord {
    /// History key, e.g. `~/notes/bookmarks`
    pub key: String,
    /// Expanded filesystem path
    pub path: PathBuf,
}

/// The bookmark file currently loaded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadedBookmarks {
    pub record: BookmarkRecord,
    pub bookmarks: Vec<String>,
}

/// Loads bookmark files from the filesystem.
#[derive(Debug, Clone)]
pub struct BookmarkFiles {
    paths: NormalizedPaths,
    current: Option<LoadedBookmarks>,
}

impl BookmarkFiles {
    pub fn new(paths: NormalizedPaths) -> Self {
        Self {
            paths,
            current: None,
        }
    }

    /// Returns the most recently loaded bookmark file.
    pub fn current(&self) -> Option<&LoadedBookmarks> {
        self.current.as_ref()
    }
}

impl Navigator for BookmarkFiles {
    type Record = BookmarkRecord;

    fn build_identity(&self, key: &str) -> BookmarkRecord {
        BookmarkRecord {
            key: key.to_string(),
            path: self.paths.expand(key),
        }
    }

    fn navigate(&mut self, record: &BookmarkRecord) -> Result<()> {
        if record.path.is_dir() {
            bail!("{} is a directory, not a bookmark file", record.key);
        }

        let content = fs::read_to_string(&record.path)
            .with_context(|| format!("Failed to load bookmark file {}", record.key))?;

        let bookmarks: Vec<String> = content
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty() && !line.starts_with('#'))
            .map(str::to_string)
            .collect();

        log::info!(
            "loaded {} bookmarks from {}",
            bookmarks.len(),
            record.path.display()
        );
        self.current = Some(LoadedBookmarks {
            record: record.clone(),
            bookmarks,
        });
        Ok(())
    }
}
