//! Error types for report construction and fan-out delivery.
//!
//! This module provides:
//! - `OutputError`: A failure while building the writer set (fatal, nothing usable is returned)
//! - `Stage`: Indicates which fan-out step a writer failed in
//! - `SingleIoError`: One writer's failure, tagged with its position and target
//! - `AggregateError`: Every writer failure from one fan-out call, in writer order

use std::fmt;
use std::path::PathBuf;

use thiserror::Error;

use crate::config::WriterOption;

/// Errors raised while turning writer options into writers.
///
/// Any of these aborts the whole construction; sinks opened earlier in the
/// same call are closed before the error is returned.
#[derive(Debug, Error)]
pub enum OutputError {
    #[error("no output options provided")]
    NoOutputOptions,

    /// The format token is not a known format name.
    #[error("bad --output value '{0}'")]
    BadOutputValue(WriterOption),

    /// The format token is known, but no encoder is registered for it.
    #[error("unknown format: {0}")]
    UnknownFormat(WriterOption),

    /// A shared stream such as stdout refused to hand out a write handle.
    #[error("unable to open output stream '{id}': {source}")]
    OpenStream {
        id: String,
        #[source]
        source: std::io::Error,
    },

    #[error("unable to create report file: {source}")]
    CreateReportFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    /// Encoding the document into the writer's sink
    Encode,
    /// Releasing the writer's sink
    Close,
    /// The writer was never attempted because the call was cancelled
    Cancelled,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Stage::Encode => write!(f, "Encode"),
            Stage::Close => write!(f, "Close"),
            Stage::Cancelled => write!(f, "Cancelled"),
        }
    }
}

#[derive(Debug)]
pub struct SingleIoError {
    /// Stage where the error occurred
    pub stage: Stage,
    /// Position of the failing writer in construction order
    pub index: usize,
    /// Identifier of the writer's sink ("-" for stdout, file path otherwise)
    pub target: String,
    /// The underlying error
    pub error: Box<dyn std::error::Error + Send + Sync>,
}

impl fmt::Display for SingleIoError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{}] writer {} ({}): {}",
            self.stage, self.index, self.target, self.error
        )
    }
}

impl std::error::Error for SingleIoError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(self.error.as_ref())
    }
}

/// An aggregate of per-writer errors from a single fan-out call.
///
/// Errors are kept in writer construction order, so the rendered message is
/// stable for a given set of failures.
#[derive(Debug)]
pub struct AggregateError {
    /// Collection of individual errors
    pub errors: Vec<SingleIoError>,
}

impl fmt::Display for AggregateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "report output encountered {} error(s):", self.errors.len())?;
        for e in &self.errors {
            writeln!(f, "  * {}", e)?;
        }
        Ok(())
    }
}

impl std::error::Error for AggregateError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.errors
            .first()
            .map(|e| e as &(dyn std::error::Error + 'static))
    }
}

impl AggregateError {
    /// Create a new aggregate error with a single error.
    pub fn single(error: SingleIoError) -> Self {
        Self {
            errors: vec![error],
        }
    }

    /// Check if there are no errors.
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    /// Get the number of errors.
    pub fn len(&self) -> usize {
        self.errors.len()
    }

    /// Positions of the failing writers, in order.
    pub fn indices(&self) -> Vec<usize> {
        self.errors.iter().map(|e| e.index).collect()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, SingleIoError> {
        self.errors.iter()
    }

    /// `Ok(())` when nothing was collected, otherwise the aggregate.
    pub(crate) fn from_errors(errors: Vec<SingleIoError>) -> Result<(), Self> {
        if errors.is_empty() {
            Ok(())
        } else {
            Err(Self { errors })
        }
    }
}

impl From<SingleIoError> for AggregateError {
    fn from(error: SingleIoError) -> Self {
        Self::single(error)
    }
}

impl<'a> IntoIterator for &'a AggregateError {
    type Item = &'a SingleIoError;
    type IntoIter = std::slice::Iter<'a, SingleIoError>;

    fn into_iter(self) -> Self::IntoIter {
        self.errors.iter()
    }
}

#[cfg(feature = "miette")]
mod miette_impl;

#[cfg(feature = "miette")]
pub use miette_impl::*;
