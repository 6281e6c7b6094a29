//! Value normalizer - canonicalization of foreign-keyed parser output.
//!
//! YAML permits any scalar as a mapping key, and [`serde_yaml`] faithfully
//! parses such documents into mappings keyed by `serde_yaml::Value`. The diff
//! engine compares documents key by key and needs every mapping keyed by
//! strings, so all parsed input passes through this single canonicalization
//! choke point before any comparison happens.

use crate::value::{Map, Value};
use thiserror::Error;

/// Maximum nesting depth admitted by the normalizer.
///
/// Diff recursion depth equals document nesting depth, so bounding the depth
/// here keeps adversarially deep documents from exhausting the stack in the
/// otherwise unguarded recursive walks.
pub const MAX_DEPTH: usize = 128;

/// NormalizeError represents a contract violation while canonicalizing a
/// parsed document. It aborts the whole load; there are no partial results.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NormalizeError {
    #[error("mapping key is not a scalar: found a {0}")]
    NonScalarKey(&'static str),

    #[error("document nesting exceeds {} levels", MAX_DEPTH)]
    TooDeep,
}

/// Converts a parsed YAML value into the canonical string-keyed [`Value`],
/// recursing into nested mappings and sequences. Scalar values keep their
/// types; scalar mapping keys become their string representation. A sequence
/// or mapping used as a key fails fast.
pub fn canonicalize(value: serde_yaml::Value) -> Result<Value, NormalizeError> {
    canonicalize_yaml_at(value, 0)
}

/// Converts a parsed JSON value into the canonical [`Value`]. JSON mappings
/// are string-keyed already; only the depth guard applies.
pub fn canonicalize_json(value: serde_json::Value) -> Result<Value, NormalizeError> {
    canonicalize_json_at(value, 0)
}

fn canonicalize_yaml_at(value: serde_yaml::Value, depth: usize) -> Result<Value, NormalizeError> {
    if depth > MAX_DEPTH {
        return Err(NormalizeError::TooDeep);
    }
    match value {
        serde_yaml::Value::Null => Ok(Value::Null),
        serde_yaml::Value::Bool(b) => Ok(Value::Bool(b)),
        serde_yaml::Value::Number(n) => Ok(number_value(&n)),
        serde_yaml::Value::String(s) => Ok(Value::String(s)),
        serde_yaml::Value::Sequence(seq) => {
            let mut list = Vec::with_capacity(seq.len());
            for item in seq {
                list.push(canonicalize_yaml_at(item, depth + 1)?);
            }
            Ok(Value::List(list))
        }
        serde_yaml::Value::Mapping(mapping) => {
            let mut map = Map::new();
            for (key, val) in mapping {
                map.set(key_string(&key)?, canonicalize_yaml_at(val, depth + 1)?);
            }
            Ok(Value::Map(map))
        }
        serde_yaml::Value::Tagged(tagged) => canonicalize_yaml_at(tagged.value, depth),
    }
}

fn canonicalize_json_at(value: serde_json::Value, depth: usize) -> Result<Value, NormalizeError> {
    if depth > MAX_DEPTH {
        return Err(NormalizeError::TooDeep);
    }
    match value {
        serde_json::Value::Null => Ok(Value::Null),
        serde_json::Value::Bool(b) => Ok(Value::Bool(b)),
        serde_json::Value::Number(n) => {
            if let Some(i) = n.as_i64() {
                Ok(Value::Int(i))
            } else {
                Ok(Value::Float(n.as_f64().unwrap_or_default()))
            }
        }
        serde_json::Value::String(s) => Ok(Value::String(s)),
        serde_json::Value::Array(seq) => {
            let mut list = Vec::with_capacity(seq.len());
            for item in seq {
                list.push(canonicalize_json_at(item, depth + 1)?);
            }
            Ok(Value::List(list))
        }
        serde_json::Value::Object(object) => {
            let mut map = Map::new();
            for (key, val) in object {
                map.set(key, canonicalize_json_at(val, depth + 1)?);
            }
            Ok(Value::Map(map))
        }
    }
}

/// Renders a scalar mapping key as its canonical string form.
fn key_string(key: &serde_yaml::Value) -> Result<String, NormalizeError> {
    match key {
        serde_yaml::Value::String(s) => Ok(s.clone()),
        serde_yaml::Value::Bool(b) => Ok(b.to_string()),
        serde_yaml::Value::Number(n) => Ok(n.to_string()),
        serde_yaml::Value::Null => Ok("null".to_string()),
        serde_yaml::Value::Sequence(_) => Err(NormalizeError::NonScalarKey("sequence")),
        serde_yaml::Value::Mapping(_) => Err(NormalizeError::NonScalarKey("mapping")),
        serde_yaml::Value::Tagged(_) => Err(NormalizeError::NonScalarKey("tagged value")),
    }
}

fn number_value(n: &serde_yaml::Number) -> Value {
    if let Some(i) = n.as_i64() {
        Value::Int(i)
    } else {
        Value::Float(n.as_f64().unwrap_or_default())
    }
}
