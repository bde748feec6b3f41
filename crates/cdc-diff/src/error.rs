//! Error types for the diff engine.
//!
//! Parse errors are not represented here: callers parse text with
//! `serde_json` before any engine call, so malformed input never reaches
//! these operations.

use std::fmt;

use serde_json::Value;
use thiserror::Error;

/// Which input of a comparison an error refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Before,
    After,
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::Before => write!(f, "before"),
            Side::After => write!(f, "after"),
        }
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DiffError {
    /// A comparison input was valid JSON but not an object at the root.
    /// Rejected outright rather than treated as "no keys".
    #[error("the {side} input must be a JSON object, got {found}")]
    TypeMismatch { side: Side, found: &'static str },
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum EnvelopeError {
    /// The payload was valid JSON but none of the known envelope shapes
    /// matched. Distinct from a parse error, which the caller surfaces
    /// before extraction runs.
    #[error("no before/after structure found in payload")]
    NoRecognizableShape,
}

/// JSON type name for error messages.
pub fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
