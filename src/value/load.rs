//! Document loader - raw text to canonical values.

use crate::value::{canonicalize, canonicalize_json, Map, NormalizeError, Value};
use thiserror::Error;

/// LoadError represents a failure to turn raw document text into a canonical
/// value.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to parse YAML document: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("failed to parse JSON document: {0}")]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Normalize(#[from] NormalizeError),

    #[error("top-level document is not a mapping")]
    NotAMapping,
}

/// Parses a YAML document into a canonical value.
pub fn from_yaml(text: &str) -> Result<Value, LoadError> {
    let parsed: serde_yaml::Value = serde_yaml::from_str(text)?;
    Ok(canonicalize(parsed)?)
}

/// Parses a JSON document into a canonical value.
pub fn from_json(text: &str) -> Result<Value, LoadError> {
    let parsed: serde_json::Value = serde_json::from_str(text)?;
    Ok(canonicalize_json(parsed)?)
}

/// Parses a YAML document whose top level must be a mapping.
pub fn from_yaml_map(text: &str) -> Result<Map, LoadError> {
    match from_yaml(text)? {
        Value::Map(map) => Ok(map),
        _ => Err(LoadError::NotAMapping),
    }
}

/// Parses a JSON document whose top level must be a mapping.
pub fn from_json_map(text: &str) -> Result<Map, LoadError> {
    match from_json(text)? {
        Value::Map(map) => Ok(map),
        _ => Err(LoadError::NotAMapping),
    }
}
