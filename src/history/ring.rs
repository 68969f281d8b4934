//! Bounded history ring with move-to-front deduplication.

use crate::path::{ExactPaths, PathEquivalence};
use log::{debug, warn};
use std::collections::{vec_deque, VecDeque};

/// Number of keys kept when no capacity is configured.
pub const DEFAULT_CAPACITY: usize = 65;

/// What an insert did to the ring.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JumpOutcome {
    /// The ring was empty before the insert.
    FirstInsert,
    /// A new key was added at the head.
    Inserted,
    /// An existing key was moved to the head.
    Promoted,
    /// The key already is the head; nothing changed.
    NoOp,
}

impl JumpOutcome {
    /// Returns true if the insert changed the ring.
    pub fn is_transition(self) -> bool {
        self != JumpOutcome::NoOp
    }

    /// Short human-readable label used in status messages.
    pub fn describe(self) -> &'static str {
        match self {
            JumpOutcome::FirstInsert => "first",
            JumpOutcome::Inserted => "new",
            JumpOutcome::Promoted => "moved to front",
            JumpOutcome::NoOp => "unchanged",
        }
    }
}

/// Fixed-capacity ring of unique keys, most recent first.
///
/// Uniqueness is decided by the ring's [`PathEquivalence`], not by string
/// equality. Inserting past capacity evicts the least recent key.
#[derive(Debug, Clone)]
pub struct HistoryRing<E = ExactPaths> {
    entries: VecDeque<String>,
    capacity: usize,
    equivalence: E,
}

impl HistoryRing<ExactPaths> {
    /// Creates an empty ring comparing keys by string equality.
    pub fn new(capacity: usize) -> Self {
        Self::with_equivalence(capacity, ExactPaths)
    }
}

impl<E: PathEquivalence + Default> Default for HistoryRing<E> {
    fn default() -> Self {
        Self::with_equivalence(DEFAULT_CAPACITY, E::default())
    }
}

impl<E: PathEquivalence> HistoryRing<E> {
    /// Creates an empty ring using `equivalence` to compare keys.
    ///
    /// A zero capacity is raised to 1.
    pub fn with_equivalence(capacity: usize, equivalence: E) -> Self {
        let capacity = if capacity == 0 {
            warn!("history capacity must be positive, using 1");
            1
        } else {
            capacity
        };
        Self {
            entries: VecDeque::with_capacity(capacity),
            capacity,
            equivalence,
        }
    }

    /// Rebuilds a ring from keys ordered most recent first.
    ///
    /// Later keys equivalent to an earlier one are dropped and the result is
    /// cut down to `capacity`.
    pub fn from_entries<I, S>(capacity: usize, entries: I, equivalence: E) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut ring = Self::with_equivalence(capacity, equivalence);
        for key in entries {
            if ring.entries.len() == ring.capacity {
                break;
            }
            let key = key.into();
            if ring.position_of(&key).is_none() {
                ring.entries.push_back(key);
            }
        }
        ring
    }

    /// Records `key` as the most recent location.
    pub fn insert(&mut self, key: impl Into<String>) -> JumpOutcome {
        let key = key.into();

        let Some(head) = self.entries.front() else {
            debug!("history: first entry {}", key);
            self.entries.push_back(key);
            return JumpOutcome::FirstInsert;
        };

        if self.equivalence.equivalent(&key, head) {
            return JumpOutcome::NoOp;
        }

        if let Some(position) = self.position_of(&key) {
            // Keep the stored spelling of the key
            if let Some(existing) = self.entries.remove(position) {
                debug!("history: promoting {} from {}", existing, position);
                self.entries.push_front(existing);
            }
            return JumpOutcome::Promoted;
        }

        self.entries.push_front(key);
        if self.entries.len() > self.capacity {
            if let Some(evicted) = self.entries.pop_back() {
                debug!("history: evicted {}", evicted);
            }
        }
        JumpOutcome::Inserted
    }

    /// Returns the position of the key equivalent to `key`, if any.
    pub fn position_of(&self, key: &str) -> Option<usize> {
        self.entries
            .iter()
            .position(|entry| self.equivalence.equivalent(key, entry))
    }

    /// Returns the key at `position`, 0 being the most recent.
    pub fn entry_at(&self, position: usize) -> Option<&str> {
        self.entries.get(position).map(String::as_str)
    }

    /// Returns the most recent key.
    pub fn head(&self) -> Option<&str> {
        self.entry_at(0)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn equivalence(&self) -> &E {
        &self.equivalence
    }

    /// Iterates over the keys, most recent first.
    pub fn iter(&self) -> vec_deque::Iter<'_, String> {
        self.entries.iter()
    }

    /// Copies the keys out, most recent first.
    pub fn to_vec(&self) -> Vec<String> {
        self.entries.iter().cloned().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_capacity_is_raised() {
        let mut ring = HistoryRing::new(0);
        assert_eq!(ring.capacity(), 1);
        ring.insert("a");
        ring.insert("b");
        assert_eq!(ring.to_vec(), vec!["b"]);
    }

    #[test]
    fn test_default_capacity() {
        let ring: HistoryRing = HistoryRing::default();
        assert_eq!(ring.capacity(), DEFAULT_CAPACITY);
        assert!(ring.is_empty());
    }

    #[test]
    fn test_outcome_labels() {
        assert!(JumpOutcome::Promoted.is_transition());
        assert!(!JumpOutcome::NoOp.is_transition());
        assert_eq!(JumpOutcome::Inserted.describe(), "new");
    }
}
