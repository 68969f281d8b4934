//! Persistence backend with a save-due policy.

use super::loader::load_history;
use super::saver::save_history;
use super::HistoryFile;
use crate::config::Config;
use crate::history::cursor::Cursor;
use crate::history::ring::HistoryRing;
use crate::jump::Persistence;
use crate::path::PathEquivalence;
use anyhow::Result;
use log::{info, warn};
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

/// Notified after every successful save.
pub trait SaveObserver {
    fn saved(&mut self, path: &Path);
}

impl<F: FnMut(&Path)> SaveObserver for F {
    fn saved(&mut self, path: &Path) {
        self(path)
    }
}

/// Decides when unsaved jumps should be written out.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SavePolicy {
    every: usize,
    interval: Duration,
}

impl SavePolicy {
    /// Saves after `every` jumps, or once `interval` has passed since the
    /// last save. `every` of 0 behaves like 1.
    pub fn new(every: usize, interval: Duration) -> Self {
        Self {
            every: every.max(1),
            interval,
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(
            config.save_every,
            Duration::from_secs(config.save_interval_secs),
        )
    }

    /// Returns true if `pending` unsaved jumps should be saved now.
    pub fn is_due(&self, pending: usize, since_last_save: Duration) -> bool {
        pending > 0 && (pending >= self.every || since_last_save >= self.interval)
    }
}

/// Stores the history in a file.
pub struct HistoryStore {
    path: PathBuf,
    policy: SavePolicy,
    pending: usize,
    last_save: Instant,
    last_error: Option<String>,
    observers: Vec<Box<dyn SaveObserver>>,
}

impl HistoryStore {
    pub fn new(path: impl Into<PathBuf>, policy: SavePolicy) -> Self {
        Self {
            path: path.into(),
            policy,
            pending: 0,
            last_save: Instant::now(),
            last_error: None,
            observers: Vec::new(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Number of jumps not yet written.
    pub fn pending(&self) -> usize {
        self.pending
    }

    /// Message of the last failed save, cleared by the next successful one.
    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    pub fn add_observer(&mut self, observer: impl SaveObserver + 'static) {
        self.observers.push(Box::new(observer));
    }

    /// Reads the stored history into a ring of `capacity`.
    pub fn load<E: PathEquivalence>(
        &self,
        capacity: usize,
        equivalence: E,
    ) -> Result<(HistoryRing<E>, Cursor)> {
        let history = load_history(&self.path)?;
        Ok(history.into_ring(capacity, equivalence))
    }

    /// Saves right away regardless of the policy.
    ///
    /// A failure is also kept for [`HistoryStore::last_error`].
    pub fn flush<E: PathEquivalence>(&mut self, ring: &HistoryRing<E>, cursor: Cursor) -> Result<()> {
        if let Err(e) = save_history(&self.path, &HistoryFile::from_ring(ring, cursor)) {
            self.last_error = Some(format!("{:#}", e));
            return Err(e);
        }

        info!(
            "saved {} history entries to {}",
            ring.len(),
            self.path.display()
        );
        self.pending = 0;
        self.last_save = Instant::now();
        self.last_error = None;
        for observer in &mut self.observers {
            observer.saved(&self.path);
        }
        Ok(())
    }
}

impl Persistence for HistoryStore {
    /// Counts one jump and saves if the policy says so.
    ///
    /// A failed save is logged and stays pending; the jump itself has
    /// already succeeded.
    fn save_if_due<E: PathEquivalence>(&mut self, ring: &HistoryRing<E>, cursor: Cursor) {
        self.pending += 1;
        if !self.policy.is_due(self.pending, self.last_save.elapsed()) {
            return;
        }
        if let Err(e) = self.flush(ring, cursor) {
            warn!("failed to save history: {:#}", e);
        }
    }
}
