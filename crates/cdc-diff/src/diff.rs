//! Top-level structural comparison of two JSON objects.

use serde::Serialize;
use serde_json::Value;

use crate::equal::deep_equal;
use crate::error::{json_type_name, DiffError, Side};

/// Classification of one field of a comparison.
///
/// The derived ordering is the render priority: changed fields sort first,
/// unchanged fields last.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DiffKind {
    Changed,
    Added,
    Removed,
    Unchanged,
}

/// One record per top-level key present in either input.
///
/// `before` is `None` for added fields and `after` is `None` for removed
/// fields; both are set otherwise.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DiffEntry {
    pub key: String,
    pub kind: DiffKind,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub before: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub after: Option<Value>,
}

/// Compares two JSON objects key by key.
///
/// Produces one [`DiffEntry`] for every key in the union of the two key
/// sets, classified with [`deep_equal`] and sorted changed → added →
/// removed → unchanged. Within one classification the order is the order
/// keys were first seen and is not part of the contract.
///
/// Both inputs must be objects at the root; anything else is rejected with
/// [`DiffError::TypeMismatch`] rather than reported as an empty diff.
///
/// # Examples
///
/// ```
/// use cdc_diff::{compare, DiffKind};
/// use serde_json::json;
///
/// let entries = compare(&json!({"a": 1}), &json!({"a": 2, "b": 3})).unwrap();
/// assert_eq!(entries.len(), 2);
/// assert_eq!((entries[0].key.as_str(), entries[0].kind), ("a", DiffKind::Changed));
/// assert_eq!((entries[1].key.as_str(), entries[1].kind), ("b", DiffKind::Added));
/// ```
pub fn compare(before: &Value, after: &Value) -> Result<Vec<DiffEntry>, DiffError> {
    let before_obj = require_object(before, Side::Before)?;
    let after_obj = require_object(after, Side::After)?;

    let mut entries = Vec::with_capacity(before_obj.len() + after_obj.len());

    for (key, before_val) in before_obj {
        let entry = match after_obj.get(key) {
            None => DiffEntry {
                key: key.clone(),
                kind: DiffKind::Removed,
                before: Some(before_val.clone()),
                after: None,
            },
            Some(after_val) => DiffEntry {
                key: key.clone(),
                kind: if deep_equal(before_val, after_val) {
                    DiffKind::Unchanged
                } else {
                    DiffKind::Changed
                },
                before: Some(before_val.clone()),
                after: Some(after_val.clone()),
            },
        };
        entries.push(entry);
    }

    for (key, after_val) in after_obj {
        if !before_obj.contains_key(key) {
            entries.push(DiffEntry {
                key: key.clone(),
                kind: DiffKind::Added,
                before: None,
                after: Some(after_val.clone()),
            });
        }
    }

    // Stable sort: first-seen order is preserved within each kind.
    entries.sort_by_key(|entry| entry.kind);
    Ok(entries)
}

fn require_object(value: &Value, side: Side) -> Result<&serde_json::Map<String, Value>, DiffError> {
    match value {
        Value::Object(map) => Ok(map),
        other => Err(DiffError::TypeMismatch {
            side,
            found: json_type_name(other),
        }),
    }
}
