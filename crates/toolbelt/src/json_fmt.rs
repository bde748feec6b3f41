//! JSON beautify and minify.

use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use serde_json::{Serializer, Value};

/// Re-indents JSON text with `indent` spaces per level. Key order of the
/// input is preserved.
pub fn beautify(text: &str, indent: usize) -> Result<String, serde_json::Error> {
    let value: Value = serde_json::from_str(text)?;
    let indent_bytes = vec![b' '; indent];
    let mut out = Vec::with_capacity(text.len());
    let mut serializer =
        Serializer::with_formatter(&mut out, PrettyFormatter::with_indent(&indent_bytes));
    value.serialize(&mut serializer)?;
    Ok(String::from_utf8_lossy(&out).into_owned())
}

/// Strips all insignificant whitespace.
pub fn minify(text: &str) -> Result<String, serde_json::Error> {
    let value: Value = serde_json::from_str(text)?;
    serde_json::to_string(&value)
}
