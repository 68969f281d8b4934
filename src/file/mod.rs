//! History file I/O.
//!
//! This module loads and saves the navigation history with atomic writes, and
//! provides [`store::HistoryStore`], the persistence backend that decides when
//! a save is due.
//!
//! The on-disk format is a small TOML document:
//!
//! ```toml
//! entries = ["~/notes/bookmarks", "~/work/bookmarks"]
//! cursor = 1
//! ```

pub mod loader;
pub mod saver;
pub mod store;

use crate::history::cursor::Cursor;
use crate::history::ring::HistoryRing;
use crate::path::PathEquivalence;
use serde::{Deserialize, Serialize};

/// Serialized form of the history ring and its cursor.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryFile {
    /// Keys, most recent first
    #[serde(default)]
    pub entries: Vec<String>,

    /// Cycle cursor, absent when unset
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cursor: Option<usize>,
}

impl HistoryFile {
    /// Captures the current ring contents and cursor.
    pub fn from_ring<E: PathEquivalence>(ring: &HistoryRing<E>, cursor: Cursor) -> Self {
        Self {
            entries: ring.to_vec(),
            cursor: cursor.position(),
        }
    }

    /// Rebuilds a ring of `capacity` from the stored entries.
    ///
    /// The cursor is restored as stored, even if it now points past the end;
    /// cycling recovers from that on its own.
    pub fn into_ring<E: PathEquivalence>(
        self,
        capacity: usize,
        equivalence: E,
    ) -> (HistoryRing<E>, Cursor) {
        let ring = HistoryRing::from_entries(capacity, self.entries, equivalence);
        let cursor = match self.cursor {
            Some(position) => Cursor::at(position),
            None => Cursor::unset(),
        };
        (ring, cursor)
    }
}
