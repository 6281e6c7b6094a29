//! Flat diff walker.

use crate::diff::DiffEntry;
use crate::path::Path;
use crate::value::{Map, Value};

/// Recursively compares two canonical mappings path by path, emitting one
/// [`DiffEntry`] per changed, added, or removed leaf.
///
/// Mapping-vs-mapping mismatches recurse instead of emitting an entry at
/// their own path; only their descendant leaf-level diffs appear in the
/// result. A mapping paired with a non-mapping terminates as a single entry
/// at that path.
///
/// The order of the returned entries follows map iteration order and is not
/// a guarantee of this API; callers must not depend on it.
pub fn diff_flat(old: &Map, new: &Map, prefix: &Path) -> Vec<DiffEntry> {
    let mut diffs = Vec::new();

    for (key, new_val) in new.iter() {
        let path = prefix.with(key.clone());
        match old.get(key) {
            Some(old_val) => {
                if old_val == new_val {
                    continue;
                }
                if let (Value::Map(old_map), Value::Map(new_map)) = (old_val, new_val) {
                    diffs.extend(diff_flat(old_map, new_map, &path));
                } else {
                    diffs.push(DiffEntry {
                        path,
                        value_old: Some(old_val.clone()),
                        value_new: Some(new_val.clone()),
                    });
                }
            }
            None => {
                diffs.push(DiffEntry {
                    path,
                    value_old: None,
                    value_new: Some(new_val.clone()),
                });
            }
        }
    }

    // Keys present only in the old document.
    for (key, old_val) in old.iter() {
        if !new.has(key) {
            diffs.push(DiffEntry {
                path: prefix.with(key.clone()),
                value_old: Some(old_val.clone()),
                value_new: None,
            });
        }
    }

    diffs
}
