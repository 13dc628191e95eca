//! Source text normalization for notebook cells and outputs.

use serde_json::Value;

/// Normalizes a notebook `source`-shaped field to a single string.
///
/// Notebook JSON stores text either as a plain string or as an ordered
/// array of line fragments. Fragments already carry their own line
/// terminators, so array form is concatenated in order with no inserted
/// separator. Absent, null, or unexpectedly shaped values normalize to
/// the empty string.
///
/// # Arguments
///
/// * `value`: Raw JSON value of a `source`, `text`, or mime-bundle field
///
/// # Returns
///
/// Single concatenated string
pub fn join_text(value: Option<&Value>) -> String {
    match value {
        Some(Value::String(s)) => s.clone(),
        Some(Value::Array(fragments)) => fragments
            .iter()
            .filter_map(|fragment| fragment.as_str())
            .collect(),
        _ => String::new(),
    }
}

/// Normalizes a base64 image payload from a notebook mime bundle.
///
/// Image payloads arrive line-wrapped: either one string with embedded
/// newlines or an array of fragments ending in newlines. The newlines
/// are artifacts of the wrapped encoding, not data, so they are removed
/// after joining.
///
/// # Arguments
///
/// * `value`: Raw JSON value holding the base64 payload
///
/// # Returns
///
/// Base64 string with all newline characters stripped
pub fn join_base64(value: Option<&Value>) -> String {
    join_text(value).replace('\n', "")
}
