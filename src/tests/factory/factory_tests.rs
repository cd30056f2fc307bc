//! Tests for building writers from options.

use std::fs;
use std::sync::Arc;

use serde_json::json;

use crate::config::WriterOption;
use crate::error::OutputError;
use crate::factory::WriterFactory;
use crate::format::{FormatKind, FormatRegistry};
use crate::io::InMemorySink;

fn factory_with(stream: &InMemorySink) -> WriterFactory {
    WriterFactory::default().with_stdout(Arc::new(stream.clone()))
}

#[test]
fn empty_options_are_rejected() {
    let result = WriterFactory::default().make_writers::<serde_json::Value>(&[]);
    assert!(matches!(result, Err(OutputError::NoOutputOptions)));
}

#[test]
fn unknown_token_creates_no_files() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("out.json");
    let options = vec![WriterOption::new("bogus", path.to_string_lossy())];

    let err = WriterFactory::default()
        .make_writers::<serde_json::Value>(&options)
        .unwrap_err();

    match &err {
        OutputError::BadOutputValue(option) => assert_eq!(option, &options[0]),
        other => panic!("unexpected error: {other}"),
    }
    assert!(err.to_string().contains("bad --output value 'bogus="));
    assert!(!path.exists());
}

#[test]
fn known_but_unregistered_format_is_unknown() {
    let registry = FormatRegistry::new().with_format(FormatKind::Json);
    let factory = WriterFactory::new(registry);

    let err = factory
        .make_writers::<serde_json::Value>(&[WriterOption::stdout("yaml")])
        .unwrap_err();

    assert!(matches!(err, OutputError::UnknownFormat(_)));
    assert_eq!(err.to_string(), "unknown format: yaml");
}

#[test]
fn stdout_writers_bind_to_the_injected_stream() {
    let stream = InMemorySink::new("-");
    let mut writers = factory_with(&stream)
        .make_writers(&[WriterOption::stdout("json")])
        .unwrap();

    assert_eq!(writers.len(), 1);
    assert!(writers.writers()[0].sink().is_stdout());
    assert_eq!(writers.writers()[0].id(), "-");

    writers.write(&json!({"ok": true})).unwrap();
    writers.close().unwrap();

    // Closing flushed the stream without closing it.
    writers.write(&json!({"again": 1})).unwrap();
    let text = stream.contents_string();
    assert!(text.contains("\"ok\": true"));
    assert!(text.contains("\"again\": 1"));
}

#[test]
fn format_tokens_are_case_insensitive_aliases() {
    let stream = InMemorySink::new("-");
    let writers = factory_with(&stream)
        .make_writers::<serde_json::Value>(&[WriterOption::stdout("JSON")])
        .unwrap();
    assert_eq!(writers.writers()[0].kind(), FormatKind::Json);
}

#[test]
fn files_are_truncated_before_any_write() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("report.json");
    fs::write(&path, "old report").unwrap();

    let writers = WriterFactory::default()
        .make_writers::<serde_json::Value>(&[WriterOption::new("json", path.to_string_lossy())])
        .unwrap();

    assert_eq!(fs::read_to_string(&path).unwrap(), "");
    drop(writers);
}

#[test]
fn failed_file_creation_closes_earlier_writers() {
    let dir = tempfile::tempdir().unwrap();
    let first = dir.path().join("first.json");
    let missing = dir.path().join("missing").join("second.json");
    fs::write(&first, "stale").unwrap();

    let options = vec![
        WriterOption::new("json", first.to_string_lossy()),
        WriterOption::new("json", missing.to_string_lossy()),
    ];

    let err = WriterFactory::default()
        .make_writers::<serde_json::Value>(&options)
        .unwrap_err();

    match &err {
        OutputError::CreateReportFile { path, .. } => assert_eq!(path, &missing),
        other => panic!("unexpected error: {other}"),
    }
    assert!(err.to_string().starts_with("unable to create report file: "));
    // The earlier file was already created and truncated.
    assert_eq!(fs::read_to_string(&first).unwrap(), "");
}

#[test]
fn options_keep_their_order() {
    let dir = tempfile::tempdir().unwrap();
    let a = dir.path().join("a.json");
    let b = dir.path().join("b.json");
    let stream = InMemorySink::new("-");

    let writers = factory_with(&stream)
        .make_writers::<serde_json::Value>(&[
            WriterOption::new("json", a.to_string_lossy()),
            WriterOption::stdout("json"),
            WriterOption::new("json", b.to_string_lossy()),
        ])
        .unwrap();

    let ids: Vec<String> = writers.writers().iter().map(|w| w.id()).collect();
    assert_eq!(
        ids,
        vec![
            a.to_string_lossy().into_owned(),
            "-".to_string(),
            b.to_string_lossy().into_owned(),
        ]
    );
}

#[test]
fn repeated_path_is_opened_twice() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("same.json");
    let options = vec![
        WriterOption::new("json", path.to_string_lossy()),
        WriterOption::new("json", path.to_string_lossy()),
    ];

    let mut writers = WriterFactory::default().make_writers(&options).unwrap();
    assert_eq!(writers.len(), 2);

    let document = json!({"name": "reportout"});
    writers.write(&document).unwrap();
    writers.close().unwrap();

    // Both handles start at offset zero, so one copy remains.
    let expected = format!("{}\n", serde_json::to_string_pretty(&document).unwrap());
    assert_eq!(fs::read_to_string(&path).unwrap(), expected);
}
