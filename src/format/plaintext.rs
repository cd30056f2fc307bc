//! Plaintext encoding.
//!
//! Strings are written as-is, other scalars use their JSON spelling, and
//! anything structured falls back to pretty-printed JSON.

use serde::Serialize;

use super::FormatError;

pub(crate) fn serialize<T: Serialize>(value: &T) -> Result<Vec<u8>, FormatError> {
    let json_value = serde_json::to_value(value).map_err(|e| FormatError::Serde(Box::new(e)))?;

    let mut text = match json_value {
        serde_json::Value::String(s) => s,
        serde_json::Value::Null => String::new(),
        v @ (serde_json::Value::Bool(_) | serde_json::Value::Number(_)) => v.to_string(),
        v => serde_json::to_string_pretty(&v).map_err(|e| FormatError::Serde(Box::new(e)))?,
    };

    if !text.ends_with('\n') {
        text.push('\n');
    }
    Ok(text.into_bytes())
}
