//! Deep structural equality over JSON values.

use serde_json::Value;

/// Compares two JSON values structurally.
///
/// Arrays are order-sensitive, objects are compared by key set regardless of
/// key order, and primitives must match in both type and value. This is the
/// equality used to classify a field as changed or unchanged; it replaces
/// the serialize-and-compare-strings shortcut, which is equivalent for
/// well-formed data but sensitive to formatting.
///
/// # Examples
///
/// ```
/// use cdc_diff::deep_equal;
/// use serde_json::json;
///
/// assert!(deep_equal(&json!({"a": 1, "b": 2}), &json!({"b": 2, "a": 1})));
/// assert!(!deep_equal(&json!([1, 2]), &json!([2, 1])));
/// assert!(!deep_equal(&json!(0), &json!(false)));
/// ```
pub fn deep_equal(a: &Value, b: &Value) -> bool {
    match (a, b) {
        (Value::Null, Value::Null) => true,
        (Value::Bool(a), Value::Bool(b)) => a == b,
        (Value::Number(a), Value::Number(b)) => a == b,
        (Value::String(a), Value::String(b)) => a == b,
        (Value::Array(a), Value::Array(b)) => {
            a.len() == b.len() && a.iter().zip(b).all(|(x, y)| deep_equal(x, y))
        }
        (Value::Object(a), Value::Object(b)) => {
            a.len() == b.len()
                && a.iter()
                    .all(|(key, x)| b.get(key).map_or(false, |y| deep_equal(x, y)))
        }
        // Different types are never equal.
        _ => false,
    }
}
