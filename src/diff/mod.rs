//! Diff module - the recursive diff engine.
//!
//! This module compares two canonical mappings and produces two parallel
//! views of the result: a flat list of path-qualified entries and a
//! navigable tree mirroring the document structure.

mod entry;
mod result;
mod structure;
mod walker;


pub use entry::*;
pub use result::*;
pub use structure::*;
pub use walker::*;
