//! Section summary - named entries added, removed, or modified under one
//! top-level section.

use crate::diff::{DiffKind, DiffResult};
use serde::Serialize;
use std::collections::BTreeSet;
use std::fmt;

/// SectionSummary groups the names of entries directly under one top-level
/// section (such as `services`) by how they drifted.
///
/// A name appears in at most one list; an entry that changed several leaves
/// below the same name counts once.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SectionSummary {
    pub section: String,
    pub added: Vec<String>,
    pub removed: Vec<String>,
    pub modified: Vec<String>,
}

impl SectionSummary {
    /// Builds a summary of the named entries under `section`.
    ///
    /// Enumerates every diff entry below the section, classifies it, and
    /// takes the second path segment as the entry name. Entries at the
    /// section path itself carry no name and are skipped.
    pub fn for_section(result: &DiffResult, section: &str) -> Self {
        let mut added = BTreeSet::new();
        let mut removed = BTreeSet::new();
        let mut modified = BTreeSet::new();

        for entry in result.get_all(&[section]) {
            let Some(name) = entry.path.segment(1) else {
                continue;
            };
            match entry.kind() {
                DiffKind::Added => added.insert(name.to_string()),
                DiffKind::Removed => removed.insert(name.to_string()),
                DiffKind::Changed => modified.insert(name.to_string()),
                DiffKind::Unknown => false,
            };
        }

        SectionSummary {
            section: section.to_string(),
            added: added.into_iter().collect(),
            removed: removed.into_iter().collect(),
            modified: modified.into_iter().collect(),
        }
    }

    /// Returns true if nothing under the section drifted.
    pub fn is_empty(&self) -> bool {
        self.added.is_empty() && self.removed.is_empty() && self.modified.is_empty()
    }
}

impl fmt::Display for SectionSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return write!(f, "{} have not changed.", capitalized(&self.section));
        }

        writeln!(f, "{} locally removed/disabled:", capitalized(&self.section))?;
        for name in &self.removed {
            writeln!(f, "* {}", name)?;
        }
        writeln!(f)?;
        writeln!(f, "{} locally added/enabled:", capitalized(&self.section))?;
        for name in &self.added {
            writeln!(f, "* {}", name)?;
        }
        writeln!(f)?;
        writeln!(f, "{} locally modified:", capitalized(&self.section))?;
        for name in &self.modified {
            writeln!(f, "* {}", name)?;
        }
        Ok(())
    }
}

fn capitalized(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}
