//! A single destination-bound report writer.

use std::fmt;
use std::io;
use std::sync::Arc;

use crate::format::{Encoder, FormatError, FormatKind};
use crate::io::Sink;

/// An encoder bound to the sink it writes into.
///
/// Every writer exposes both `write` and `close`; for a writer bound to
/// standard output, `close` only flushes.
pub struct ReportWriter<D> {
    encoder: Arc<dyn Encoder<D>>,
    sink: Sink,
}

impl<D> fmt::Debug for ReportWriter<D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ReportWriter")
            .field("format", &self.encoder.kind())
            .field("sink", &self.sink)
            .finish()
    }
}

impl<D> ReportWriter<D> {
    pub fn new(encoder: Arc<dyn Encoder<D>>, sink: Sink) -> Self {
        Self { encoder, sink }
    }

    /// The format this writer produces.
    pub fn kind(&self) -> FormatKind {
        self.encoder.kind()
    }

    /// Identifier of the destination: "-" for stdout, the path for files.
    pub fn id(&self) -> String {
        self.sink.id()
    }

    pub fn sink(&self) -> &Sink {
        &self.sink
    }

    /// Encode the document into the sink and flush it.
    pub fn write(&mut self, document: &D) -> Result<(), FormatError> {
        let out = self.sink.writer()?;
        self.encoder.encode(out, document)?;
        out.flush()?;
        Ok(())
    }

    /// Release the sink. Never closes a shared stream.
    pub fn close(&mut self) -> io::Result<()> {
        self.sink.close()
    }
}
