//! Jumping between bookmark files.
//!
//! [`coordinator::JumpCoordinator`] owns the history ring and its cursor and
//! talks to the outside world through two traits:
//!
//! - [`Navigator`]: turns a key into a record and loads it
//! - [`Persistence`]: gets a chance to save after every successful jump
//!
//! # Example
//!
//! ```
//! use markring::history::ring::{HistoryRing, JumpOutcome};
//! use markring::jump::coordinator::JumpCoordinator;
//! use markring::jump::Navigator;
//! use markring::ui::message::Message;
//!
//! #[derive(Default)]
//! struct Recorder(Vec<String>);
//!
//! impl Navigator for Recorder {
//!     type Record = String;
//!
//!     fn build_identity(&self, key: &str) -> String {
//!         key.to_string()
//!     }
//!
//!     fn navigate(&mut self, record: &String) -> anyhow::Result<()> {
//!         self.0.push(record.clone());
//!         Ok(())
//!     }
//! }
//!
//! let mut jumps = JumpCoordinator::new(
//!     HistoryRing::new(3),
//!     Recorder::default(),
//!     (),
//!     Vec::<Message>::new(),
//! );
//! assert_eq!(jumps.jump_to("a").unwrap(), JumpOutcome::FirstInsert);
//! assert!(jumps.jump_to("a").is_err());
//! assert_eq!(jumps.navigator().0, vec!["a"]);
//! ```

pub mod coordinator;
pub mod error;

pub use error::JumpError;

use crate::history::cursor::Cursor;
use crate::history::ring::HistoryRing;
use crate::path::PathEquivalence;

/// The active navigation backend.
pub trait Navigator {
    /// Whatever the backend needs to open a location.
    type Record;

    /// Builds the record for a history key.
    fn build_identity(&self, key: &str) -> Self::Record;

    /// Opens the location described by `record`.
    fn navigate(&mut self, record: &Self::Record) -> anyhow::Result<()>;
}

/// Storage offered a save opportunity after each successful jump.
///
/// Whether anything is written is entirely up to the implementation.
pub trait Persistence {
    fn save_if_due<E: PathEquivalence>(&mut self, ring: &HistoryRing<E>, cursor: Cursor);
}

/// No persistence at all.
impl Persistence for () {
    fn save_if_due<E: PathEquivalence>(&mut self, _ring: &HistoryRing<E>, _cursor: Cursor) {}
}
