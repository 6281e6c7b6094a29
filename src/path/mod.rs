//! Path module - Locations within a nested document.

mod path;

pub use path::*;
