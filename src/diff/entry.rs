//! Diff entry types.

use crate::path::Path;
use crate::value::Value;
use serde::Serialize;
use std::fmt;

/// DiffKind classifies a single [`DiffEntry`].
///
/// The classification is derived from the entry's sides, never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DiffKind {
    /// Neither side present. Should not occur in practice; defensive case.
    Unknown,
    /// Present in the new document only.
    Added,
    /// Present in the old document only.
    Removed,
    /// Present on both sides with unequal values.
    Changed,
}

/// DiffEntry represents one observed change at one path.
///
/// An entry is only ever emitted for a path whose value is not a
/// mapping-vs-mapping comparison; those recurse instead of terminating here.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DiffEntry {
    pub path: Path,
    pub value_old: Option<Value>,
    pub value_new: Option<Value>,
}

impl DiffEntry {
    /// Classifies this entry from which sides are present.
    pub fn kind(&self) -> DiffKind {
        match (&self.value_old, &self.value_new) {
            (None, None) => DiffKind::Unknown,
            (None, Some(_)) => DiffKind::Added,
            (Some(_), None) => DiffKind::Removed,
            (Some(_), Some(_)) => DiffKind::Changed,
        }
    }
}

impl fmt::Display for DiffKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            DiffKind::Unknown => "unknown",
            DiffKind::Added => "added",
            DiffKind::Removed => "removed",
            DiffKind::Changed => "changed",
        };
        write!(f, "{}", s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(old: Option<Value>, new: Option<Value>) -> DiffEntry {
        DiffEntry {
            path: ["x"].into_iter().collect(),
            value_old: old,
            value_new: new,
        }
    }

    #[test]
    fn test_kind_classification() {
        assert_eq!(entry(None, None).kind(), DiffKind::Unknown);
        assert_eq!(entry(None, Some(Value::Int(1))).kind(), DiffKind::Added);
        assert_eq!(entry(Some(Value::Int(1)), None).kind(), DiffKind::Removed);
        assert_eq!(
            entry(Some(Value::Int(1)), Some(Value::Int(2))).kind(),
            DiffKind::Changed
        );
    }

    #[test]
    fn test_explicit_null_is_present() {
        // A side holding an explicit null is present, not absent.
        assert_eq!(entry(None, Some(Value::Null)).kind(), DiffKind::Added);
        assert_eq!(
            entry(Some(Value::Null), Some(Value::Int(1))).kind(),
            DiffKind::Changed
        );
    }

    #[test]
    fn test_kind_display() {
        assert_eq!(format!("{}", DiffKind::Added), "added");
        assert_eq!(format!("{}", DiffKind::Changed), "changed");
    }
}
