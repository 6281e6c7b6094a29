//! Value module - In-memory representation of YAML/JSON documents.
//!
//! This module provides the canonical string-keyed value model, the
//! normalizer that produces it from foreign-keyed parser output, and the
//! document loader.

mod load;
mod normalize;
mod value;

pub use load::*;
pub use normalize::*;
pub use value::*;
