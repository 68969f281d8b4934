//! markring - a bounded, cyclable history of bookmark files.
//!
//! The crate keeps a most-recent-first ring of bookmark-file keys and lets the
//! user cycle through it without disturbing its order.
//!
//! # Modules
//!
//! - `history`: the ring store and the cyclic cursor
//! - `jump`: the jump coordinator tying the ring to navigation and persistence
//! - `path`: path equivalence and key normalization
//! - `bookmark`: bookmark files on disk as a navigation backend
//! - `file`: history file loading, saving and the save-due policy
//! - `config`: user configuration
//! - `ui`: status messages and key highlighting
//!
//! # Example
//!
//! ```
//! use markring::history::ring::{HistoryRing, JumpOutcome};
//!
//! let mut ring = HistoryRing::new(3);
//! assert_eq!(ring.insert("a"), JumpOutcome::FirstInsert);
//! assert_eq!(ring.insert("b"), JumpOutcome::Inserted);
//! assert_eq!(ring.insert("a"), JumpOutcome::Promoted);
//! assert_eq!(ring.to_vec(), vec!["a", "b"]);
//! ```

pub mod bookmark;
pub mod config;
pub mod file;
pub mod history;
pub mod jump;
pub mod path;
pub mod ui;
