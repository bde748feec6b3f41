//! Best-effort extraction of a before/after pair from event envelopes.

use serde_json::{Map, Value};

use crate::error::EnvelopeError;

/// A before/after pair pulled out of an event payload.
#[derive(Debug, Clone, PartialEq)]
pub struct Envelope {
    pub before: Value,
    pub after: Value,
}

/// Locates a before/after pair in `raw` without requiring the caller to
/// know the envelope convention.
///
/// Shape rules, evaluated top-down with first match wins:
///
/// 1. Root carries both `before` and `after`: return them directly.
/// 2. Root carries only `after`: a creation event; `before` becomes an
///    empty object.
/// 3. Root carries a `payload` field: rules 1–2 are re-applied to it
///    (legacy wrapped envelopes). The probe goes one level deep only.
/// 4. Otherwise [`EnvelopeError::NoRecognizableShape`].
///
/// A field whose value is JSON `null` counts as absent throughout:
/// creation events commonly carry `"before": null`.
///
/// # Examples
///
/// ```
/// use cdc_diff::extract_envelope;
/// use serde_json::json;
///
/// let payload = json!({"payload": {"before": null, "after": {"x": 2}, "op": "c"}});
/// let envelope = extract_envelope(&payload).unwrap();
/// assert_eq!(envelope.before, json!({}));
/// assert_eq!(envelope.after, json!({"x": 2}));
/// ```
pub fn extract_envelope(raw: &Value) -> Result<Envelope, EnvelopeError> {
    if let Some(envelope) = match_before_after(raw) {
        return Ok(envelope);
    }
    if let Some(payload) = present_field(raw, "payload") {
        if let Some(envelope) = match_before_after(payload) {
            return Ok(envelope);
        }
    }
    Err(EnvelopeError::NoRecognizableShape)
}

/// Applies shape rules 1 and 2 to one candidate object: `after` must be
/// present, a missing `before` defaults to an empty object.
fn match_before_after(value: &Value) -> Option<Envelope> {
    let after = present_field(value, "after")?;
    let before = present_field(value, "before")
        .cloned()
        .unwrap_or_else(|| Value::Object(Map::new()));
    Some(Envelope {
        before,
        after: after.clone(),
    })
}

fn present_field<'a>(value: &'a Value, name: &str) -> Option<&'a Value> {
    match value.get(name) {
        None | Some(Value::Null) => None,
        Some(field) => Some(field),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_direct_shape() {
        let envelope =
            extract_envelope(&json!({"before": {"x": 1}, "after": {"x": 2}})).unwrap();
        assert_eq!(envelope.before, json!({"x": 1}));
        assert_eq!(envelope.after, json!({"x": 2}));
    }

    #[test]
    fn test_creation_shape() {
        let envelope = extract_envelope(&json!({"after": {"x": 2}})).unwrap();
        assert_eq!(envelope.before, json!({}));
        assert_eq!(envelope.after, json!({"x": 2}));
    }

    #[test]
    fn test_null_before_is_creation() {
        let envelope =
            extract_envelope(&json!({"before": null, "after": {"x": 2}, "op": "c"})).unwrap();
        assert_eq!(envelope.before, json!({}));
        assert_eq!(envelope.after, json!({"x": 2}));
    }

    #[test]
    fn test_nested_payload_shape() {
        let envelope = extract_envelope(
            &json!({"payload": {"before": {"x": 1}, "after": {"x": 2}}, "schema": {}}),
        )
        .unwrap();
        assert_eq!(envelope.before, json!({"x": 1}));
        assert_eq!(envelope.after, json!({"x": 2}));
    }

    #[test]
    fn test_nested_creation_shape() {
        let envelope = extract_envelope(&json!({"payload": {"after": {"x": 2}}})).unwrap();
        assert_eq!(envelope.before, json!({}));
        assert_eq!(envelope.after, json!({"x": 2}));
    }

    #[test]
    fn test_root_shape_wins_over_payload() {
        let envelope = extract_envelope(&json!({
            "before": {"x": 1},
            "after": {"x": 2},
            "payload": {"before": {"y": 1}, "after": {"y": 2}}
        }))
        .unwrap();
        assert_eq!(envelope.before, json!({"x": 1}));
    }

    #[test]
    fn test_no_recognizable_shape() {
        let err = extract_envelope(&json!({"op": "u"})).unwrap_err();
        assert_eq!(err, EnvelopeError::NoRecognizableShape);
    }

    #[test]
    fn test_after_null_is_no_shape() {
        // Delete events carry "after": null; there is nothing to compare.
        let err = extract_envelope(&json!({"before": {"x": 1}, "after": null})).unwrap_err();
        assert_eq!(err, EnvelopeError::NoRecognizableShape);
    }

    #[test]
    fn test_probe_does_not_recurse_past_payload() {
        let err = extract_envelope(
            &json!({"payload": {"payload": {"before": {}, "after": {"x": 1}}}}),
        )
        .unwrap_err();
        assert_eq!(err, EnvelopeError::NoRecognizableShape);
    }

    #[test]
    fn test_non_object_root() {
        assert!(extract_envelope(&json!([1, 2, 3])).is_err());
        assert!(extract_envelope(&json!("text")).is_err());
        assert!(extract_envelope(&json!(null)).is_err());
    }
}
