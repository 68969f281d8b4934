//! Cyclic cursor for next/previous navigation through the history ring.
//!
//! The cursor is a plain position into the ring as it looks when the cursor
//! is used. The ring may shrink between uses (bookmark files deleted on disk),
//! so a stored position is never trusted without checking it against the
//! current length.

/// Optional position into the history ring, 0 being the most recent entry.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Cursor {
    position: Option<usize>,
}

impl Cursor {
    /// A cursor that has not been placed yet.
    pub fn unset() -> Self {
        Self { position: None }
    }

    pub fn at(position: usize) -> Self {
        Self {
            position: Some(position),
        }
    }

    pub fn position(&self) -> Option<usize> {
        self.position
    }

    pub fn is_set(&self) -> bool {
        self.position.is_some()
    }

    pub fn set(&mut self, position: usize) {
        self.position = Some(position);
    }

    pub fn reset(&mut self) {
        self.position = None;
    }

    /// Computes where one step in `direction` leads in a ring of `ring_length`.
    pub fn step(&self, direction: isize, ring_length: usize) -> Option<usize> {
        next_index(self.position, direction, ring_length)
    }
}

/// Computes the next cursor position.
///
/// - An empty ring has no valid position.
/// - An unset cursor starts at the most recent entry when moving forward
///   (`direction >= 0`) and at the oldest when moving backward.
/// - A position past the ring length is stale: it snaps to the oldest entry
///   and `direction` is not applied on that call.
/// - Otherwise the cursor moves one step and wraps around at both ends.
pub fn next_index(current: Option<usize>, direction: isize, ring_length: usize) -> Option<usize> {
    if ring_length == 0 {
        return None;
    }

    let Some(current) = current else {
        return Some(if direction >= 0 { 0 } else { ring_length - 1 });
    };

    if current > ring_length {
        log::warn!(
            "history cursor {} is stale for {} entries, snapping to oldest",
            current,
            ring_length
        );
        return Some(ring_length - 1);
    }

    if direction > 0 {
        Some((current + 1) % ring_length)
    } else {
        Some((current + ring_length - 1) % ring_length)
    }
}
