//! Standard output implementations and report file creation.

use std::fs::{File, OpenOptions};
use std::io;
use std::path::Path;

use super::OutputStream;

/// The process's standard output.
#[derive(Debug, Clone)]
pub struct StdoutStream {
    id: String,
}

impl StdoutStream {
    /// Create a new stdout stream.
    pub fn new() -> Self {
        Self { id: "-".into() }
    }
}

impl Default for StdoutStream {
    fn default() -> Self {
        Self::new()
    }
}

impl OutputStream for StdoutStream {
    fn id(&self) -> &str {
        &self.id
    }

    fn handle(&self) -> io::Result<Box<dyn io::Write + Send>> {
        Ok(Box::new(io::stdout()))
    }
}

/// The process's standard error.
#[derive(Debug, Clone)]
pub struct StderrStream {
    id: String,
}

impl StderrStream {
    /// Create a new stderr stream.
    pub fn new() -> Self {
        Self {
            id: "stderr".into(),
        }
    }
}

impl Default for StderrStream {
    fn default() -> Self {
        Self::new()
    }
}

impl OutputStream for StderrStream {
    fn id(&self) -> &str {
        &self.id
    }

    fn handle(&self) -> io::Result<Box<dyn io::Write + Send>> {
        Ok(Box::new(io::stderr()))
    }
}

/// Open a report file for writing, creating it or truncating existing content.
///
/// The file is opened read/write with mode 0644 on unix.
pub fn create_report_file(path: &Path) -> io::Result<File> {
    let mut options = OpenOptions::new();
    options.read(true).write(true).create(true).truncate(true);

    #[cfg(unix)]
    {
        use std::os::unix::fs::OpenOptionsExt;
        options.mode(0o644);
    }

    options.open(path)
}
