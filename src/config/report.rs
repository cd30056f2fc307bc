//! Report output configuration, loadable from YAML/JSON application config.

use serde::Deserialize;

use super::{WriterOption, parse_options};

/// Default format used when no `output` entries are configured.
pub const DEFAULT_FORMAT: &str = "table";

/// Output section of an application configuration file.
///
/// ```yaml
/// output:
///   - table
///   - json=report.json
/// file: ""
/// ```
#[derive(Debug, Clone, Deserialize)]
pub struct OutputConfig {
    /// Raw output tokens: `<format>` or `<format>=<path>`
    #[serde(default, alias = "outputs")]
    pub output: Vec<String>,
    /// Format used when `output` is empty
    #[serde(default = "default_format")]
    pub default_format: String,
    /// File paired with tokens that carry no `=<path>`
    #[serde(default)]
    pub file: String,
}

fn default_format() -> String {
    DEFAULT_FORMAT.to_string()
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            output: Vec::new(),
            default_format: default_format(),
            file: String::new(),
        }
    }
}

impl OutputConfig {
    /// Create a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a raw output token.
    pub fn add_output(mut self, token: impl Into<String>) -> Self {
        self.output.push(token.into());
        self
    }

    /// Set the default format.
    pub fn with_default_format(mut self, format: impl Into<String>) -> Self {
        self.default_format = format.into();
        self
    }

    /// Set the default file.
    pub fn with_file(mut self, file: impl Into<String>) -> Self {
        self.file = file.into();
        self
    }

    /// Resolve the configured tokens into writer options.
    pub fn writer_options(&self) -> Vec<WriterOption> {
        parse_options(&self.output, &self.default_format, &self.file)
    }
}
