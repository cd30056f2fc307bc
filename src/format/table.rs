//! Table encoding via comfy-table.

use comfy_table::{Table, presets::UTF8_BORDERS_ONLY};
use serde::Serialize;
use serde_json::Value;

use super::FormatError;

fn cell_text(v: &Value) -> String {
    match v {
        Value::String(s) => s.clone(),
        Value::Null => String::new(),
        _ => v.to_string(),
    }
}

/// Column names in first-seen order across all rows.
fn column_names(rows: &[Value]) -> Vec<String> {
    let mut names: Vec<String> = Vec::new();
    for row in rows {
        if let Value::Object(obj) = row {
            for key in obj.keys() {
                if !names.contains(key) {
                    names.push(key.clone());
                }
            }
        }
    }
    names
}

pub(crate) fn serialize<T: Serialize>(value: &T) -> Result<Vec<u8>, FormatError> {
    let json_value = serde_json::to_value(value).map_err(|e| FormatError::Serde(Box::new(e)))?;

    let mut table = Table::new();
    table.load_preset(UTF8_BORDERS_ONLY);

    match &json_value {
        Value::Array(rows) if rows.iter().all(Value::is_object) && !rows.is_empty() => {
            let names = column_names(rows);
            table.set_header(names.iter().map(|n| n.to_ascii_uppercase()));
            for row in rows {
                table.add_row(names.iter().map(|n| row.get(n).map(cell_text).unwrap_or_default()));
            }
        }
        Value::Array(items) => {
            table.set_header(["VALUE"]);
            for item in items {
                table.add_row([cell_text(item)]);
            }
        }
        Value::Object(obj) => {
            table.set_header(["KEY", "VALUE"]);
            for (key, v) in obj {
                table.add_row([key.clone(), cell_text(v)]);
            }
        }
        scalar => {
            table.add_row([cell_text(scalar)]);
        }
    }

    let mut text = table.to_string();
    text.push('\n');
    Ok(text.into_bytes())
}
