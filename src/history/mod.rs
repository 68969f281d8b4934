//! Navigation history storage.
//!
//! - `ring`: bounded, duplicate-free, most-recent-first ring of keys
//! - `cursor`: cyclic cursor over the ring used by next/previous navigation

pub mod cursor;
pub mod ring;
