//! Top-level JSON object → `.env` lines.

use cdc_diff::json_type_name;
use serde_json::Value;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum JsonEnvError {
    #[error("input must be a JSON object, got {0}")]
    NotAnObject(&'static str),
    #[error(transparent)]
    Serialize(#[from] serde_json::Error),
}

/// Renders each top-level field as `KEY="VALUE"`.
///
/// Strings are emitted verbatim, other scalars in their JSON spelling, and
/// nested objects or arrays as compact JSON. Embedded double quotes are
/// escaped; keys that are empty after trimming are skipped.
pub fn to_env(value: &Value) -> Result<String, JsonEnvError> {
    let object = match value {
        Value::Object(map) => map,
        other => return Err(JsonEnvError::NotAnObject(json_type_name(other))),
    };

    let mut lines = Vec::with_capacity(object.len());
    for (key, field) in object {
        if key.trim().is_empty() {
            continue;
        }
        let rendered = match field {
            Value::String(text) => text.clone(),
            Value::Object(_) | Value::Array(_) => serde_json::to_string(field)?,
            scalar => scalar.to_string(),
        };
        lines.push(format!("{key}=\"{}\"", rendered.replace('"', "\\\"")));
    }
    Ok(lines.join("\n"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_scalars() {
        let out = to_env(&json!({
            "HOST": "localhost",
            "PORT": 5432,
            "DEBUG": true,
            "EMPTY": null
        }))
        .unwrap();
        assert_eq!(
            out,
            "HOST=\"localhost\"\nPORT=\"5432\"\nDEBUG=\"true\"\nEMPTY=\"null\""
        );
    }

    #[test]
    fn test_nested_values_serialized_compactly() {
        let out = to_env(&json!({"OPTS": {"retries": 3}, "TAGS": ["a", "b"]})).unwrap();
        assert_eq!(
            out,
            "OPTS=\"{\\\"retries\\\":3}\"\nTAGS=\"[\\\"a\\\",\\\"b\\\"]\""
        );
    }

    #[test]
    fn test_quotes_escaped() {
        let out = to_env(&json!({"MOTD": "say \"hi\""})).unwrap();
        assert_eq!(out, "MOTD=\"say \\\"hi\\\"\"");
    }

    #[test]
    fn test_blank_keys_skipped() {
        let out = to_env(&json!({"": "x", "  ": "y", "OK": "z"})).unwrap();
        assert_eq!(out, "OK=\"z\"");
    }

    #[test]
    fn test_non_object_rejected() {
        assert!(matches!(
            to_env(&json!([1, 2])),
            Err(JsonEnvError::NotAnObject("an array"))
        ));
        assert!(matches!(
            to_env(&json!("text")),
            Err(JsonEnvError::NotAnObject("a string"))
        ));
    }

    #[test]
    fn test_empty_object() {
        assert_eq!(to_env(&json!({})).unwrap(), "");
    }
}
