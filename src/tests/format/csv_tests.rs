use crate::format::{FormatKind, serialize};

#[test]
fn array_of_objects_writes_header_and_rows() {
    let rows = serde_json::json!([
        {"name": "serde", "version": "1.0"},
        {"name": "log", "version": "0.4"}
    ]);
    let text = String::from_utf8(serialize(FormatKind::Csv, &rows).unwrap()).unwrap();
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines, vec!["name,version", "serde,1.0", "log,0.4"]);
}

#[test]
fn scalar_document_is_rejected() {
    assert!(serialize(FormatKind::Csv, &5).is_err());
}
