//! The jump protocol.
//!
//! Explicit jumps record history: the target is inserted into (or promoted
//! within) the ring, the cycle cursor is reset and the target is loaded.
//! Cycle jumps only walk the existing history: they move the cursor and load
//! the entry under it, leaving the ring order alone.
//!
//! Ring and cursor updates always complete before the navigator runs, so a
//! navigator that triggers further jumps sees the new state.

use super::{JumpError, Navigator, Persistence};
use crate::history::cursor::Cursor;
use crate::history::ring::{HistoryRing, JumpOutcome};
use crate::path::{ExactPaths, KeyNormalizer, PathEquivalence};
use crate::ui::message::{Message, StatusSink};
use log::{debug, info};

/// Owns one history ring and its cursor.
///
/// Use one coordinator per session or window; they share nothing.
pub struct JumpCoordinator<N, P = (), S = Vec<Message>, E = ExactPaths> {
    ring: HistoryRing<E>,
    cursor: Cursor,
    navigator: N,
    persistence: P,
    status: S,
}

impl<N, P, S, E> JumpCoordinator<N, P, S, E>
where
    N: Navigator,
    P: Persistence,
    S: StatusSink,
    E: PathEquivalence,
{
    /// Creates a coordinator with an unset cursor.
    pub fn new(ring: HistoryRing<E>, navigator: N, persistence: P, status: S) -> Self {
        Self {
            ring,
            cursor: Cursor::unset(),
            navigator,
            persistence,
            status,
        }
    }

    /// Restores a previously saved cursor.
    pub fn with_cursor(mut self, cursor: Cursor) -> Self {
        self.cursor = cursor;
        self
    }

    /// Jumps to `target`, recording it in the history unless
    /// `suppress_insert` is set.
    ///
    /// Returns the ring outcome, or `None` for a suppressed insert.
    pub fn explicit_jump(
        &mut self,
        target: &str,
        suppress_insert: bool,
    ) -> Result<Option<JumpOutcome>, JumpError> {
        if suppress_insert {
            self.load(target, None)?;
            return Ok(None);
        }
        self.jump_to(target).map(Some)
    }

    /// Records `key` in the history and loads it.
    ///
    /// # Errors
    ///
    /// - `RedundantJump` if `key` already is the most recent entry
    /// - `LoadFailure` if the navigator fails; the history keeps the new entry
    pub fn jump_to(&mut self, key: &str) -> Result<JumpOutcome, JumpError> {
        let outcome = self.ring.insert(key);
        if !outcome.is_transition() {
            debug!("jump to current location {} ignored", key);
            return Err(JumpError::RedundantJump {
                key: key.to_string(),
            });
        }

        self.cursor.reset();
        self.load(key, Some(outcome))?;
        Ok(outcome)
    }

    /// Moves the cursor one step in `direction` and loads the entry under it.
    ///
    /// Positive directions go towards older entries, negative towards newer
    /// ones, wrapping at both ends. Returns the new cursor position.
    pub fn cycle_jump(&mut self, direction: isize) -> Result<usize, JumpError> {
        let position = self
            .cursor
            .step(direction, self.ring.len())
            .ok_or(JumpError::EmptyHistory)?;
        let key = self
            .ring
            .entry_at(position)
            .ok_or(JumpError::EmptyHistory)?
            .to_string();

        self.cursor.set(position);
        self.load(&key, None)?;
        Ok(position)
    }

    pub fn next(&mut self) -> Result<usize, JumpError> {
        self.cycle_jump(1)
    }

    pub fn previous(&mut self) -> Result<usize, JumpError> {
        self.cycle_jump(-1)
    }

    /// Loads `key` and offers a save. Ring and cursor are already updated.
    fn load(&mut self, key: &str, outcome: Option<JumpOutcome>) -> Result<(), JumpError> {
        let record = self.navigator.build_identity(key);
        self.navigator
            .navigate(&record)
            .map_err(|source| JumpError::LoadFailure {
                key: key.to_string(),
                source,
            })?;

        match outcome {
            Some(outcome) => {
                info!("jumped to {} ({:?})", key, outcome);
                self.status.notify(Message::info(format!(
                    "Jumped to {} ({})",
                    key,
                    outcome.describe()
                )));
            }
            None => info!("cycled to {} at {:?}", key, self.cursor.position()),
        }

        self.persistence.save_if_due(&self.ring, self.cursor);
        Ok(())
    }

    pub fn ring(&self) -> &HistoryRing<E> {
        &self.ring
    }

    pub fn cursor(&self) -> Cursor {
        self.cursor
    }

    pub fn navigator(&self) -> &N {
        &self.navigator
    }

    pub fn navigator_mut(&mut self) -> &mut N {
        &mut self.navigator
    }

    pub fn persistence(&self) -> &P {
        &self.persistence
    }

    pub fn status(&self) -> &S {
        &self.status
    }

    /// Takes the coordinator apart, e.g. to flush the history on exit.
    pub fn into_parts(self) -> (HistoryRing<E>, Cursor, N, P, S) {
        (
            self.ring,
            self.cursor,
            self.navigator,
            self.persistence,
            self.status,
        )
    }
}

impl<N, P, S, E> JumpCoordinator<N, P, S, E>
where
    N: Navigator,
    P: Persistence,
    S: StatusSink,
    E: PathEquivalence + KeyNormalizer,
{
    /// Normalizes a raw location into a key and jumps to it.
    pub fn jump(&mut self, raw: &str) -> Result<JumpOutcome, JumpError> {
        let key = self.ring.equivalence().normalize(raw);
        self.jump_to(&key)
    }
}
