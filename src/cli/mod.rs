//! CLI integration helpers.
//!
//! `OutputArgs` collects the raw `--output` tokens and `--file` default of
//! a command line and turns them into writer options. It does not depend on
//! a particular argument parser; with the `sarge` feature it can be read
//! directly by `sarge::ArgumentReader`.
//!
//! ```rust,ignore
//! let args = OutputArgs::new()
//!     .with_output("table")
//!     .with_output("json=report.json");
//! let writers = WriterFactory::default().make_writers::<Report>(&args.writer_options())?;
//! ```

#[cfg(feature = "sarge")]
mod sarge;

use crate::config::{DEFAULT_FORMAT, WriterOption, parse_options};

/// Output arguments of a CLI application.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputArgs {
    /// Raw output tokens: `<format>` or `<format>=<path>`.
    pub outputs: Vec<String>,
    /// File paired with tokens that carry no `=<path>`.
    pub file: Option<String>,
    /// Format used when no output token is given.
    pub default_format: String,
}

impl Default for OutputArgs {
    fn default() -> Self {
        Self {
            outputs: Vec::new(),
            file: None,
            default_format: DEFAULT_FORMAT.to_string(),
        }
    }
}

impl OutputArgs {
    /// Create new empty output arguments.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a raw output token.
    pub fn with_output(mut self, token: impl Into<String>) -> Self {
        self.outputs.push(token.into());
        self
    }

    /// Set the default file.
    pub fn with_file(mut self, file: impl Into<String>) -> Self {
        self.file = Some(file.into());
        self
    }

    /// Set the default format.
    pub fn with_default_format(mut self, format: impl Into<String>) -> Self {
        self.default_format = format.into();
        self
    }

    pub fn is_empty(&self) -> bool {
        self.outputs.is_empty()
    }

    pub fn as_slice(&self) -> &[String] {
        &self.outputs
    }

    /// Merge another set of tokens after these, e.g. from repeated flags.
    pub fn extend(&mut self, other: OutputArgs) {
        self.outputs.extend(other.outputs);
    }

    /// Resolve the tokens into writer options.
    pub fn writer_options(&self) -> Vec<WriterOption> {
        parse_options(
            &self.outputs,
            &self.default_format,
            self.file.as_deref().unwrap_or_default(),
        )
    }

    /// Check if any resolved option writes to stdout.
    pub fn writes_stdout(&self) -> bool {
        self.writer_options().iter().any(WriterOption::is_stdout)
    }
}
