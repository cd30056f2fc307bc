//! Builds destination-bound report writers from writer options.

use std::path::PathBuf;
use std::sync::Arc;

use serde::Serialize;

use crate::config::WriterOption;
use crate::error::OutputError;
#[cfg(feature = "custom")]
use crate::format::CustomFormat;
use crate::format::{FormatRegistry, default_registry};
use crate::io::{OutputStream, Sink, StdoutStream};
use crate::multi_writer::MultiWriter;
use crate::writer::ReportWriter;

/// Resolves writer options against a format registry and opens their sinks.
#[derive(Debug, Clone)]
pub struct WriterFactory {
    registry: FormatRegistry,
    stdout: Arc<dyn OutputStream>,
}

impl WriterFactory {
    pub fn new(registry: FormatRegistry) -> Self {
        Self {
            registry,
            stdout: Arc::new(StdoutStream::new()),
        }
    }

    /// Send "stdout" destinations to another stream.
    pub fn with_stdout(mut self, stream: Arc<dyn OutputStream>) -> Self {
        self.stdout = stream;
        self
    }

    #[cfg(feature = "custom")]
    pub fn with_custom_format(mut self, format: CustomFormat) -> Self {
        self.registry.register_custom(format);
        self
    }

    pub fn registry(&self) -> &FormatRegistry {
        &self.registry
    }

    /// Build one writer per option, in option order.
    ///
    /// Fails on the first option that names no format, names a format with
    /// no encoder, or whose file cannot be created. Writers opened before
    /// the failure are closed again; files they created stay truncated.
    pub fn make_writers<D: Serialize>(
        &self,
        options: &[WriterOption],
    ) -> Result<MultiWriter<D>, OutputError> {
        if options.is_empty() {
            return Err(OutputError::NoOutputOptions);
        }

        let mut writers = Vec::with_capacity(options.len());

        for option in options {
            match self.make_writer(option) {
                Ok(writer) => writers.push(writer),
                Err(e) => {
                    if !writers.is_empty() {
                        log::debug!(
                            "closing {} report writer(s) opened before '{}' failed",
                            writers.len(),
                            option
                        );
                        if let Err(close_err) = MultiWriter::new(writers).close() {
                            log::warn!("{}", close_err);
                        }
                    }
                    return Err(e);
                }
            }
        }

        Ok(MultiWriter::new(writers))
    }

    /// Build the writer for a single option.
    pub fn make_writer<D: Serialize>(
        &self,
        option: &WriterOption,
    ) -> Result<ReportWriter<D>, OutputError> {
        let kind = self
            .registry
            .resolve_token(&option.format)
            .ok_or_else(|| OutputError::BadOutputValue(option.clone()))?;

        let encoder = self
            .registry
            .encoder_for::<D>(&kind)
            .ok_or_else(|| OutputError::UnknownFormat(option.clone()))?;

        let sink = if option.is_stdout() {
            Sink::stdout(self.stdout.as_ref()).map_err(|source| OutputError::OpenStream {
                id: self.stdout.id().to_string(),
                source,
            })?
        } else {
            Sink::file(&option.path).map_err(|source| OutputError::CreateReportFile {
                path: PathBuf::from(&option.path),
                source,
            })?
        };

        log::debug!("created {} report writer for {}", kind, sink.id());
        Ok(ReportWriter::new(encoder, sink))
    }
}

impl Default for WriterFactory {
    fn default() -> Self {
        WriterFactory::new(default_registry())
    }
}

/// Build report writers for the options using the default registry and the
/// process's standard output.
pub fn make_writers<D: Serialize>(options: &[WriterOption]) -> Result<MultiWriter<D>, OutputError> {
    WriterFactory::default().make_writers(options)
}
