//! Destination sinks bound to a single report writer.

use std::fmt;
use std::fs::File;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use super::{OutputStream, create_report_file};

/// Where a report writer sends its bytes.
///
/// A `Stdout` sink borrows a handle to a shared stream and never closes it;
/// a `File` sink owns the file it opened.
pub enum Sink {
    /// Handle to a shared stream such as standard output
    Stdout {
        id: String,
        handle: Box<dyn Write + Send>,
    },
    /// A report file opened (and truncated) by this sink
    File { path: PathBuf, file: Option<File> },
}

impl fmt::Debug for Sink {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Sink::Stdout { id, .. } => f.debug_struct("Stdout").field("id", id).finish(),
            Sink::File { path, file } => f
                .debug_struct("File")
                .field("path", path)
                .field("open", &file.is_some())
                .finish(),
        }
    }
}

impl Sink {
    /// Bind a sink to a shared output stream.
    pub fn stdout(stream: &dyn OutputStream) -> io::Result<Self> {
        Ok(Sink::Stdout {
            id: stream.id().to_string(),
            handle: stream.handle()?,
        })
    }

    /// Create (or truncate) a report file and bind a sink to it.
    pub fn file(path: impl AsRef<Path>) -> io::Result<Self> {
        let path = path.as_ref();
        let file = create_report_file(path)?;
        Ok(Sink::File {
            path: path.to_path_buf(),
            file: Some(file),
        })
    }

    /// Identifier used in error messages: the stream id or the file path.
    pub fn id(&self) -> String {
        match self {
            Sink::Stdout { id, .. } => id.clone(),
            Sink::File { path, .. } => path.to_string_lossy().into_owned(),
        }
    }

    /// Check if this sink writes to a shared stream.
    pub fn is_stdout(&self) -> bool {
        matches!(self, Sink::Stdout { .. })
    }

    /// Check if the sink's file has been released.
    ///
    /// Shared-stream sinks never report closed.
    pub fn is_closed(&self) -> bool {
        matches!(self, Sink::File { file: None, .. })
    }

    /// Get the writable handle, failing once a file sink is closed.
    pub fn writer(&mut self) -> io::Result<&mut dyn Write> {
        match self {
            Sink::Stdout { handle, .. } => Ok(handle.as_mut()),
            Sink::File {
                file: Some(file), ..
            } => Ok(file),
            Sink::File { path, file: None } => Err(io::Error::other(format!(
                "report file '{}' is already closed",
                path.display()
            ))),
        }
    }

    /// Release the sink.
    ///
    /// A shared stream is only flushed. A file is flushed, synced to disk if
    /// it is a regular file, and dropped; closing it again is a no-op.
    pub fn close(&mut self) -> io::Result<()> {
        match self {
            Sink::Stdout { handle, .. } => handle.flush(),
            Sink::File { file, .. } => {
                let Some(mut f) = file.take() else {
                    return Ok(());
                };
                f.flush()?;
                if f.metadata()?.is_file() {
                    f.sync_all()?;
                }
                Ok(())
            }
        }
    }
}
