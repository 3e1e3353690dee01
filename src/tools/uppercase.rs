//! Uppercase every `name` in a tree artifact
//!
//! Works on raw JSON so fields this crate does not model survive the
//! rewrite untouched.

use std::path::Path;

use serde_json::{Map, Value};

use crate::error::{GenealogyError, GenealogyResult};
use crate::io::{atomic_write, from_json_str, to_json_pretty};

/// Uppercase every string stored under a `name` key, at any depth
pub fn uppercase_names(value: Value) -> Value {
    match value {
        Value::Array(items) => Value::Array(items.into_iter().map(uppercase_names).collect()),
        Value::Object(fields) => Value::Object(
            fields
                .into_iter()
                .map(|(key, v)| {
                    let v = match v {
                        Value::String(s) if key == "name" => Value::String(s.to_uppercase()),
                        other => uppercase_names(other),
                    };
                    (key, v)
                })
                .collect::<Map<String, Value>>(),
        ),
        other => other,
    }
}

/// Rewrite a JSON file in place with uppercased names.
///
/// Returns the number of names rewritten.
pub fn uppercase_file(path: &Path) -> GenealogyResult<usize> {
    let text = std::fs::read_to_string(path)?;
    let data: Value = from_json_str(&text).map_err(|e| GenealogyError::InvalidArtifact {
        file: path.to_path_buf(),
        message: e.to_string(),
    })?;

    let count = count_names(&data);
    let mut out = to_json_pretty(&uppercase_names(data))?;
    out.push('\n');
    atomic_write(path, out.as_bytes())?;

    tracing::info!(path = %path.display(), names = count, "uppercased names");
    Ok(count)
}

fn count_names(value: &Value) -> usize {
    match value {
        Value::Array(items) => items.iter().map(count_names).sum(),
        Value::Object(fields) => fields
            .iter()
            .map(|(key, v)| match v {
                Value::String(_) if key == "name" => 1,
                other => count_names(other),
            })
            .sum(),
        _ => 0,
    }
}
