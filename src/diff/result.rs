//! Diff result and query layer.

use crate::diff::{diff_flat, diff_structure, DiffEntry, StructureNode};
use crate::path::Path;
use crate::value::Map;
use serde::Serialize;
use std::collections::BTreeMap;

/// DiffResult holds the two parallel views produced by one diff invocation:
/// the flat list of changed leaves and the structure tree covering every key
/// on either side.
///
/// Both views are computed independently over the same inputs and agree on
/// which paths changed. Nothing is mutated after construction.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DiffResult {
    diffs: Vec<DiffEntry>,
    structure: BTreeMap<String, StructureNode>,
}

/// Compares two canonical mappings and returns both the flat diff list and
/// the navigable structure tree.
pub fn diff_yaml(old: &Map, new: &Map) -> DiffResult {
    let root = Path::new();
    DiffResult {
        diffs: diff_flat(old, new, &root),
        structure: diff_structure(Some(old), Some(new), &root),
    }
}

impl DiffResult {
    /// Returns every diff entry whose path has `path` as a component-wise
    /// prefix, descendants included. Entries shorter than the queried path
    /// are skipped. An empty result is not an error.
    pub fn get_all<S: AsRef<str>>(&self, path: &[S]) -> Vec<&DiffEntry> {
        self.diffs
            .iter()
            .filter(|d| d.path.starts_with(path))
            .collect()
    }

    /// Returns true if anything changed at or below the given path.
    pub fn has_changed<S: AsRef<str>>(&self, path: &[S]) -> bool {
        !self.get_all(path).is_empty()
    }

    /// Descends the structure tree level by level and returns the node
    /// exactly at the path's depth. The empty path names no node; a miss at
    /// any level returns `None`, never an error.
    pub fn get_structure<S: AsRef<str>>(&self, path: &[S]) -> Option<&StructureNode> {
        let (first, rest) = path.split_first()?;
        let mut node = self.structure.get(first.as_ref())?;
        for segment in rest {
            node = node.children().get(segment.as_ref())?;
        }
        Some(node)
    }

    /// Returns the flat list of diff entries. Order is unspecified.
    pub fn diffs(&self) -> &[DiffEntry] {
        &self.diffs
    }

    /// Returns the structure tree's top-level nodes.
    pub fn structure(&self) -> &BTreeMap<String, StructureNode> {
        &self.structure
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diff::DiffKind;
    use crate::value::from_yaml_map;
    use pretty_assertions::assert_eq;

    fn diff(old: &str, new: &str) -> DiffResult {
        diff_yaml(&from_yaml_map(old).unwrap(), &from_yaml_map(new).unwrap())
    }

    #[test]
    fn test_get_all_returns_descendants() {
        let result = diff(
            "services:\n  web:\n    image: x\n",
            "services:\n  web:\n    image: x\n  db:\n    image: y\n",
        );
        let under_services = result.get_all(&["services"]);
        assert_eq!(under_services.len(), 1);
        assert!(under_services[0].path.starts_with(&["services", "db"]));
        assert_eq!(under_services[0].kind(), DiffKind::Added);
    }

    #[test]
    fn test_get_all_skips_shorter_candidate_paths() {
        // The entry sits at [x]; querying below it must skip it, not panic.
        let result = diff("x:\n  y: 1\n", "x: 1\n");
        assert_eq!(result.get_all(&["x"]).len(), 1);
        assert_eq!(result.get_all(&["x", "y"]).len(), 0);
    }

    #[test]
    fn test_has_changed_matches_get_all() {
        let result = diff("a:\n  b: 1\n", "a:\n  b: 2\n");
        assert!(result.has_changed::<&str>(&[]));
        assert!(result.has_changed(&["a"]));
        assert!(result.has_changed(&["a", "b"]));
        assert!(!result.has_changed(&["a", "b", "c", "d"]));
        assert!(!result.has_changed(&["z"]));
    }

    #[test]
    fn test_get_structure_navigation() {
        let result = diff(
            "services:\n  web:\n    image: x\n",
            "services:\n  web:\n    image: y\n",
        );
        let web = result.get_structure(&["services", "web"]).unwrap();
        assert_eq!(web.name(), "web");

        let image = result.get_structure(&["services", "web", "image"]).unwrap();
        assert_eq!(image.diff().kind(), DiffKind::Changed);

        assert!(result.get_structure(&["services", "db"]).is_none());
        assert!(result
            .get_structure(&["services", "web", "image", "deeper"])
            .is_none());
    }

    #[test]
    fn test_get_structure_empty_path_is_absent() {
        let result = diff("a: 1\n", "a: 2\n");
        assert!(result.get_structure::<&str>(&[]).is_none());
    }
}
