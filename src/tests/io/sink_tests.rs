//! Tests for stdout and file sinks.

use std::fs;
use std::io::Write;

use crate::io::{InMemorySink, Sink, StdoutStream, create_report_file};
use crate::tests::support::FailingStream;

#[test]
fn file_sink_truncates_existing_content() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("report.txt");
    fs::write(&path, b"stale content from an earlier run").unwrap();

    let sink = Sink::file(&path).unwrap();
    assert!(!sink.is_stdout());
    assert_eq!(fs::read(&path).unwrap(), Vec::<u8>::new());
    assert_eq!(sink.id(), path.to_string_lossy());
}

#[test]
fn file_sink_rejects_writes_after_close() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("report.txt");

    let mut sink = Sink::file(&path).unwrap();
    sink.writer().unwrap().write_all(b"abc").unwrap();
    sink.close().unwrap();

    assert!(sink.is_closed());
    assert!(sink.writer().is_err());
    // A second close is a no-op.
    sink.close().unwrap();
    assert_eq!(fs::read(&path).unwrap(), b"abc".to_vec());
}

#[test]
fn file_sink_in_missing_directory_fails() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("missing").join("report.txt");
    assert!(Sink::file(&path).is_err());
    assert!(!path.exists());
}

#[cfg(unix)]
#[test]
fn report_files_are_created_0644() {
    use std::os::unix::fs::PermissionsExt;

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("perm.txt");
    drop(create_report_file(&path).unwrap());

    let mode = fs::metadata(&path).unwrap().permissions().mode() & 0o777;
    // The process umask can only remove bits.
    assert_eq!(mode & !0o644, 0);
    assert_ne!(mode & 0o600, 0);
}

#[test]
fn stdout_sink_close_only_flushes() {
    let stream = InMemorySink::new("-");
    let mut sink = Sink::stdout(&stream).unwrap();
    assert!(sink.is_stdout());

    sink.writer().unwrap().write_all(b"first").unwrap();
    sink.close().unwrap();

    // Still writable: the shared stream was not closed.
    assert!(!sink.is_closed());
    sink.writer().unwrap().write_all(b" second").unwrap();
    assert_eq!(stream.contents_string(), "first second");
}

#[test]
fn closing_a_real_stdout_sink_leaves_stdout_usable() {
    let mut sink = Sink::stdout(&StdoutStream::new()).unwrap();
    sink.close().unwrap();

    let mut stdout = std::io::stdout();
    assert!(stdout.write_all(b"").is_ok());
    assert!(stdout.flush().is_ok());
}

#[test]
fn stdout_sink_close_surfaces_flush_errors() {
    let stream = FailingStream::on_flush("-");
    let mut sink = Sink::stdout(&stream).unwrap();
    let err = sink.close().unwrap_err();
    assert!(err.to_string().contains("broken pipe"));
}
