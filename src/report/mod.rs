//! Report module - Grouping of diff entries for display.

mod summary;

pub use summary::*;
