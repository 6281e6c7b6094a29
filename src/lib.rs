//! # Config Drift
//!
//! Structural drift detection between nested configuration documents.
//!
//! This library computes a structural difference between two nested key-value
//! documents (as typically produced by parsing a YAML or JSON configuration
//! file) and reports, for every leaf and every subtree, whether it was added,
//! removed, or changed between an "old" (template/baseline) document and a
//! "new" (actual) document.
//!
//! ## Modules
//!
//! - [`path`] - Path representation for locations within a document
//! - [`value`] - In-memory representation of YAML/JSON documents, with
//!   canonicalization of foreign-keyed mappings and document loading
//! - [`diff`] - The recursive diff engine: flat walker, structure builder,
//!   and the query layer over both results
//! - [`report`] - Grouping of diff entries under a named section for display

pub mod diff;
pub mod path;
pub mod report;
pub mod value;

pub use diff::{diff_yaml, DiffEntry, DiffKind, DiffResult, StructureNode};
pub use path::Path;
pub use report::SectionSummary;
pub use value::{LoadError, Map, NormalizeError, Value};
