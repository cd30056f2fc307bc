//! Miette integration for pretty error reporting.

use miette::{Diagnostic, Severity};
use thiserror::Error;

use super::{AggregateError, OutputError, SingleIoError};

/// A diagnostic wrapper for report output errors compatible with miette.
#[derive(Debug, Error, Diagnostic)]
#[error("{message}")]
pub struct OutputDiagnostic {
    /// The error message
    pub message: String,

    #[source]
    /// The underlying error source
    pub source: Option<Box<dyn std::error::Error + Send + Sync>>,

    #[help]
    /// Help text for the user
    pub help: Option<String>,

    #[related]
    /// Remaining failures of the same fan-out call
    pub related: Vec<OutputDiagnostic>,

    #[diagnostic(severity)]
    /// Severity level
    pub severity: Severity,
}

impl From<SingleIoError> for OutputDiagnostic {
    fn from(e: SingleIoError) -> Self {
        OutputDiagnostic {
            message: format!("[{}] on writer {} '{}'", e.stage, e.index, e.target),
            source: Some(e.error),
            help: None,
            related: Vec::new(),
            severity: Severity::Error,
        }
    }
}

impl From<AggregateError> for OutputDiagnostic {
    fn from(agg: AggregateError) -> Self {
        let count = agg.errors.len();
        let mut errors = agg.errors.into_iter().map(OutputDiagnostic::from);
        match errors.next() {
            Some(mut first) => {
                first.related = errors.collect();
                if count > 1 {
                    first.help = Some(format!("{count} destinations failed"));
                }
                first
            }
            None => OutputDiagnostic {
                message: "Unknown report output error".into(),
                source: None,
                help: None,
                related: Vec::new(),
                severity: Severity::Error,
            },
        }
    }
}

impl From<OutputError> for OutputDiagnostic {
    fn from(e: OutputError) -> Self {
        let help = match &e {
            OutputError::NoOutputOptions => Some("pass at least one -o <format>[=<file>]".into()),
            OutputError::BadOutputValue(_) | OutputError::UnknownFormat(_) => {
                Some("check the format name before '='".into())
            }
            OutputError::OpenStream { .. } => None,
            OutputError::CreateReportFile { path, .. } => {
                Some(format!("check that '{}' is writable", path.display()))
            }
        };
        let message = e.to_string();
        let source: Option<Box<dyn std::error::Error + Send + Sync>> = match e {
            OutputError::CreateReportFile { source, .. } | OutputError::OpenStream { source, .. } => {
                Some(Box::new(source))
            }
            _ => None,
        };
        OutputDiagnostic {
            message,
            source,
            help,
            related: Vec::new(),
            severity: Severity::Error,
        }
    }
}

impl From<AggregateError> for miette::Report {
    fn from(agg: AggregateError) -> Self {
        miette::Report::new(OutputDiagnostic::from(agg))
    }
}
