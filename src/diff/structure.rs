//! Structure diff builder.

use crate::diff::DiffEntry;
use crate::path::Path;
use crate::value::Map;
use serde::Serialize;
use std::collections::BTreeMap;

/// StructureNode is one node of the navigable diff tree.
///
/// The tree holds a node for every key present in either document at every
/// depth, whether or not that key's value changed, so a caller can navigate
/// to an unchanged node and confirm "no diff here" rather than only reach
/// changed leaves. The tree is rebuilt from scratch on every diff invocation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StructureNode {
    name: String,
    diff: DiffEntry,
    children: BTreeMap<String, StructureNode>,
}

impl StructureNode {
    /// Returns the key this node was built for.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the full path of this node, root-first.
    pub fn full_path(&self) -> &Path {
        &self.diff.path
    }

    /// Returns this node's own local diff.
    pub fn diff(&self) -> &DiffEntry {
        &self.diff
    }

    /// Returns the named children of this node. Empty when neither side's
    /// value is a mapping.
    pub fn children(&self) -> &BTreeMap<String, StructureNode> {
        &self.children
    }
}

/// Recursively builds the structure tree for two optional mappings.
///
/// Unlike the flat walker, recursion for keys present in the new document is
/// unconditional: a side whose value is not a mapping contributes an absent
/// submap, and a non-mapping pair simply yields empty children. Keys present
/// only in the old document become leaf nodes with no recursion.
pub fn diff_structure(
    old: Option<&Map>,
    new: Option<&Map>,
    prefix: &Path,
) -> BTreeMap<String, StructureNode> {
    let mut structure = BTreeMap::new();

    if let Some(new_map) = new {
        for (key, new_val) in new_map.iter() {
            let path = prefix.with(key.clone());
            let diff = DiffEntry {
                path,
                value_old: old.and_then(|m| m.get(key)).cloned(),
                value_new: Some(new_val.clone()),
            };

            let old_sub = diff.value_old.as_ref().and_then(|v| v.as_map());
            let new_sub = new_val.as_map();
            let children = diff_structure(old_sub, new_sub, &diff.path);

            structure.insert(
                key.clone(),
                StructureNode {
                    name: key.clone(),
                    diff,
                    children,
                },
            );
        }
    }

    // Keys present only in the old document.
    if let Some(old_map) = old {
        for (key, old_val) in old_map.iter() {
            if new.map_or(false, |m| m.has(key)) {
                continue;
            }
            structure.insert(
                key.clone(),
                StructureNode {
                    name: key.clone(),
                    diff: DiffEntry {
                        path: prefix.with(key.clone()),
                        value_old: Some(old_val.clone()),
                        value_new: None,
                    },
                    children: BTreeMap::new(),
                },
            );
        }
    }

    structure
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diff::DiffKind;
    use crate::value::{from_yaml_map, Value};
    use pretty_assertions::assert_eq;

    /// Helper to create a path from segments.
    fn path(segments: &[&str]) -> Path {
        segments.iter().copied().collect()
    }

    fn tree(old: &str, new: &str) -> BTreeMap<String, StructureNode> {
        diff_structure(
            Some(&from_yaml_map(old).unwrap()),
            Some(&from_yaml_map(new).unwrap()),
            &Path::new(),
        )
    }

    #[test]
    fn test_unchanged_keys_still_get_nodes() {
        let tree = tree("a:\n  b: 1\n", "a:\n  b: 1\n");
        let a = tree.get("a").unwrap();
        assert_eq!(a.name(), "a");
        // Both sides present with equal values; still Changed-shaped locally,
        // but the interesting part is that the node exists at all.
        let b = a.children().get("b").unwrap();
        assert_eq!(b.full_path(), &path(&["a", "b"]));
        assert_eq!(b.diff().value_old, Some(Value::Int(1)));
        assert_eq!(b.diff().value_new, Some(Value::Int(1)));
    }

    #[test]
    fn test_non_mapping_pair_yields_empty_children() {
        let tree = tree("a: 1\n", "a: 2\n");
        let a = tree.get("a").unwrap();
        assert!(a.children().is_empty());
        assert_eq!(a.diff().kind(), DiffKind::Changed);
    }

    #[test]
    fn test_added_subtree_recurses_with_absent_old_side() {
        let tree = tree("{}", "db:\n  image: postgres\n");
        let db = tree.get("db").unwrap();
        assert_eq!(db.diff().kind(), DiffKind::Added);
        let image = db.children().get("image").unwrap();
        assert_eq!(image.diff().kind(), DiffKind::Added);
        assert_eq!(
            image.diff().value_new,
            Some(Value::String("postgres".into()))
        );
    }

    #[test]
    fn test_removed_key_is_a_leaf_node() {
        let tree = tree("old:\n  nested: 1\n", "{}");
        let old = tree.get("old").unwrap();
        assert_eq!(old.diff().kind(), DiffKind::Removed);
        assert!(old.children().is_empty());
    }

    #[test]
    fn test_mapping_vs_scalar_recurses_one_sided() {
        // New side is a scalar, so recursion proceeds with only the old
        // submap and its keys surface as removed children.
        let tree = tree("x:\n  y: 1\n", "x: 1\n");
        let x = tree.get("x").unwrap();
        assert_eq!(x.diff().kind(), DiffKind::Changed);
        let y = x.children().get("y").unwrap();
        assert_eq!(y.diff().kind(), DiffKind::Removed);
        assert_eq!(y.full_path(), &path(&["x", "y"]));
    }
}
