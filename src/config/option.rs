//! Writer options parsed from `<format>` / `<format>=<path>` tokens.

use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

/// A single requested destination: a format token and an optional file path.
///
/// An empty path means standard output.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct WriterOption {
    /// Format token, resolved later against a `FormatRegistry`
    pub format: String,
    /// Destination file path; empty for stdout
    pub path: String,
}

impl WriterOption {
    /// Create a new writer option.
    pub fn new(format: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            format: format.into(),
            path: path.into(),
        }
    }

    /// Create an option targeting standard output.
    pub fn stdout(format: impl Into<String>) -> Self {
        Self::new(format, "")
    }

    /// Check if this option writes to standard output.
    pub fn is_stdout(&self) -> bool {
        self.path.is_empty()
    }
}

impl fmt::Display for WriterOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.path.is_empty() {
            write!(f, "{}", self.format)
        } else {
            write!(f, "{}={}", self.format, self.path)
        }
    }
}

impl FromStr for WriterOption {
    type Err = Infallible;

    /// Parse one token with no default file.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(parse_token(s, ""))
    }
}

fn parse_token(raw: &str, default_file: &str) -> WriterOption {
    let token = raw.trim();
    match token.split_once('=') {
        Some((format, path)) => WriterOption::new(format, path),
        None => WriterOption::new(token, default_file.trim()),
    }
}

/// Parse raw `--output` values into writer options.
///
/// Each token is trimmed as a whole and split at its first `=` only; the two
/// halves are kept as written. Tokens without `=` are paired with
/// `default_file`. With no tokens at all, a single option built from
/// `default_format` and `default_file` is returned.
pub fn parse_options<S: AsRef<str>>(
    raw: &[S],
    default_format: &str,
    default_file: &str,
) -> Vec<WriterOption> {
    if raw.is_empty() {
        return vec![WriterOption::new(default_format, default_file.trim())];
    }

    raw.iter()
        .map(|option| parse_token(option.as_ref(), default_file))
        .collect()
}
