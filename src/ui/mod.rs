//! User-facing output for the markring command line.
//!
//! - `message`: status notifications and where they are written
//! - `highlight`: marking known history keys inside arbitrary text

pub mod highlight;
pub mod message;
