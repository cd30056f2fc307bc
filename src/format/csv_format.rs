//! CSV encoding via the csv crate.
//!
//! The document is flattened through `serde_json::Value`: an array of
//! objects becomes one row per element, a single object becomes one row.
//! Header order follows the keys of the first record.

use serde::Serialize;

use super::FormatError;

fn field_text(v: &serde_json::Value) -> String {
    match v {
        serde_json::Value::String(s) => s.clone(),
        serde_json::Value::Null => String::new(),
        _ => v.to_string(),
    }
}

fn write_record(
    wtr: &mut csv::Writer<Vec<u8>>,
    headers: &[String],
    obj: &serde_json::Map<String, serde_json::Value>,
) -> Result<(), FormatError> {
    let record: Vec<String> = headers
        .iter()
        .map(|h| obj.get(h).map(field_text).unwrap_or_default())
        .collect();
    wtr.write_record(&record)
        .map_err(|e| FormatError::Serde(Box::new(e)))
}

pub(crate) fn serialize<T: Serialize>(value: &T) -> Result<Vec<u8>, FormatError> {
    let json_value = serde_json::to_value(value).map_err(|e| FormatError::Serde(Box::new(e)))?;

    let mut wtr = csv::Writer::from_writer(Vec::new());

    match json_value {
        serde_json::Value::Array(arr) => {
            let headers: Vec<String> = match arr.first() {
                Some(serde_json::Value::Object(obj)) => obj.keys().cloned().collect(),
                _ => Vec::new(),
            };
            if !headers.is_empty() {
                wtr.write_record(&headers)
                    .map_err(|e| FormatError::Serde(Box::new(e)))?;
            }

            for item in arr {
                match item {
                    serde_json::Value::Object(obj) => write_record(&mut wtr, &headers, &obj)?,
                    other => wtr
                        .write_record([field_text(&other)])
                        .map_err(|e| FormatError::Serde(Box::new(e)))?,
                }
            }
        }
        serde_json::Value::Object(obj) => {
            let headers: Vec<String> = obj.keys().cloned().collect();
            wtr.write_record(&headers)
                .map_err(|e| FormatError::Serde(Box::new(e)))?;
            write_record(&mut wtr, &headers, &obj)?;
        }
        _ => {
            return Err(FormatError::Other(Box::new(std::io::Error::new(
                std::io::ErrorKind::InvalidData,
                "CSV format requires an array or object",
            ))));
        }
    }

    wtr.into_inner()
        .map_err(|e| FormatError::Other(Box::new(e.into_error())))
}
