//! Format abstraction for encoding a report document.
//!
//! This module provides:
//! - `FormatKind`: Enum representing the output formats a token can name
//! - `FormatError`: Errors that can occur while encoding
//! - `Encoder`: The seam between a writer and the bytes it produces
//! - `FormatRegistry`: Registry resolving tokens to formats and formats to encoders
//! - `CustomFormat`: Support for user-defined formats

use std::io::Write;
use std::sync::Arc;

#[cfg(feature = "custom")]
mod custom;
#[cfg(feature = "custom")]
pub use custom::CustomFormat;

#[cfg(feature = "csv")]
mod csv_format;
#[cfg(feature = "ini")]
mod ini_format;
#[cfg(feature = "plaintext")]
mod plaintext;
#[cfg(feature = "table")]
mod table;

use serde::Serialize;
use thiserror::Error;

/// Represents the output formats known to the registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FormatKind {
    /// Plain text format
    Plaintext,
    /// Human-readable table
    Table,
    /// JSON format
    Json,
    /// YAML format
    Yaml,
    /// TOML format
    Toml,
    /// INI format
    Ini,
    /// XML format
    Xml,
    /// CSV format
    Csv,
    /// Custom format with a unique name
    Custom(&'static str),
}

impl std::fmt::Display for FormatKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FormatKind::Plaintext => write!(f, "text"),
            FormatKind::Table => write!(f, "table"),
            FormatKind::Json => write!(f, "json"),
            FormatKind::Yaml => write!(f, "yaml"),
            FormatKind::Toml => write!(f, "toml"),
            FormatKind::Ini => write!(f, "ini"),
            FormatKind::Xml => write!(f, "xml"),
            FormatKind::Csv => write!(f, "csv"),
            FormatKind::Custom(name) => write!(f, "{}", name),
        }
    }
}

impl FormatKind {
    /// Create a custom format kind with the given name.
    pub fn custom(name: &'static str) -> Self {
        FormatKind::Custom(name)
    }

    /// Parse a built-in format kind from a token.
    ///
    /// Custom names are resolved by `FormatRegistry::resolve_token`.
    pub fn from_token(s: &str) -> Option<Self> {
        match s.to_ascii_lowercase().as_str() {
            "text" | "txt" | "plaintext" => Some(FormatKind::Plaintext),
            "table" | "tbl" => Some(FormatKind::Table),
            "json" => Some(FormatKind::Json),
            "yaml" | "yml" => Some(FormatKind::Yaml),
            "toml" => Some(FormatKind::Toml),
            "ini" => Some(FormatKind::Ini),
            "xml" => Some(FormatKind::Xml),
            "csv" => Some(FormatKind::Csv),
            _ => None,
        }
    }

    /// Check if this format is available (feature enabled).
    pub fn is_available(&self) -> bool {
        match self {
            FormatKind::Json => cfg!(feature = "json"),
            FormatKind::Yaml => cfg!(feature = "yaml"),
            FormatKind::Toml => cfg!(feature = "toml"),
            FormatKind::Ini => cfg!(feature = "ini"),
            FormatKind::Csv => cfg!(feature = "csv"),
            FormatKind::Xml => cfg!(feature = "xml"),
            FormatKind::Plaintext => cfg!(feature = "plaintext"),
            FormatKind::Table => cfg!(feature = "table"),
            // Availability of custom formats is determined by registration
            FormatKind::Custom(_) => true,
        }
    }
}

/// Errors that can occur while encoding a document.
#[derive(Debug, Error)]
pub enum FormatError {
    /// Format feature not enabled
    #[error("Format '{0}' is not enabled. Enable the corresponding feature.")]
    NotEnabled(FormatKind),

    /// I/O error while writing encoded bytes
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization error
    #[error("Serde error: {0}")]
    Serde(Box<dyn std::error::Error + Send + Sync>),

    /// Other format-specific error
    #[error("Format error: {0}")]
    Other(Box<dyn std::error::Error + Send + Sync>),
}

/// Encodes a document of type `D` into a sink.
///
/// Implement this to plug a format the registry does not know about into a
/// `ReportWriter` directly.
pub trait Encoder<D>: Send + Sync {
    /// The format this encoder produces.
    fn kind(&self) -> FormatKind;

    fn encode(&self, sink: &mut dyn Write, document: &D) -> Result<(), FormatError>;
}

/// Encoder for the formats compiled into the crate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BuiltinEncoder {
    kind: FormatKind,
}

impl BuiltinEncoder {
    pub fn new(kind: FormatKind) -> Self {
        Self { kind }
    }
}

impl<D: Serialize> Encoder<D> for BuiltinEncoder {
    fn kind(&self) -> FormatKind {
        self.kind
    }

    fn encode(&self, sink: &mut dyn Write, document: &D) -> Result<(), FormatError> {
        serialize_to_writer(self.kind, document, sink)
    }
}

/// Serialize to bytes using the specified built-in format.
pub fn serialize<T: Serialize>(kind: FormatKind, value: &T) -> Result<Vec<u8>, FormatError> {
    match kind {
        #[cfg(feature = "json")]
        FormatKind::Json => {
            let mut bytes =
                serde_json::to_vec_pretty(value).map_err(|e| FormatError::Serde(Box::new(e)))?;
            bytes.push(b'\n');
            Ok(bytes)
        }

        #[cfg(feature = "yaml")]
        FormatKind::Yaml => serde_yaml::to_string(value)
            .map(|s| s.into_bytes())
            .map_err(|e| FormatError::Serde(Box::new(e))),

        #[cfg(feature = "toml")]
        FormatKind::Toml => toml::to_string_pretty(value)
            .map(|s| s.into_bytes())
            .map_err(|e| FormatError::Serde(Box::new(e))),

        #[cfg(feature = "ini")]
        FormatKind::Ini => ini_format::serialize(value),

        #[cfg(feature = "csv")]
        FormatKind::Csv => csv_format::serialize(value),

        #[cfg(feature = "xml")]
        FormatKind::Xml => quick_xml::se::to_string(value)
            .map(|s| s.into_bytes())
            .map_err(|e| FormatError::Serde(Box::new(e))),

        #[cfg(feature = "plaintext")]
        FormatKind::Plaintext => plaintext::serialize(value),

        #[cfg(feature = "table")]
        FormatKind::Table => table::serialize(value),

        #[allow(unreachable_patterns)]
        _ => Err(FormatError::NotEnabled(kind)),
    }
}

/// Serialize to a writer using the specified built-in format.
///
/// The document is encoded in full before anything is written, so a
/// serialization failure leaves the sink untouched.
pub fn serialize_to_writer<T: Serialize>(
    kind: FormatKind,
    value: &T,
    writer: &mut dyn Write,
) -> Result<(), FormatError> {
    let bytes = serialize(kind, value)?;
    writer.write_all(&bytes)?;
    Ok(())
}

/// Registry of the formats an output token may name.
#[derive(Debug, Clone, Default)]
pub struct FormatRegistry {
    /// Built-in format kinds
    formats: Vec<FormatKind>,
    /// Custom format handlers
    #[cfg(feature = "custom")]
    custom_formats: Vec<CustomFormat>,
}

impl FormatRegistry {
    /// Create a new empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a built-in format.
    pub fn register(&mut self, kind: FormatKind) {
        if !self.formats.contains(&kind) {
            self.formats.push(kind);
        }
    }

    /// Register a built-in format (builder pattern).
    pub fn with_format(mut self, kind: FormatKind) -> Self {
        self.register(kind);
        self
    }

    /// Register a custom format handler.
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// use reportout::format::{CustomFormat, FormatRegistry};
    ///
    /// let mut registry = FormatRegistry::new();
    /// registry.register_custom(
    ///     CustomFormat::new("names").with_serialize(|value| {
    ///         Ok(value["name"].to_string().into_bytes())
    ///     }),
    /// );
    /// ```
    #[cfg(feature = "custom")]
    pub fn register_custom(&mut self, format: CustomFormat) {
        let kind = FormatKind::Custom(format.name);
        if !self.formats.contains(&kind) {
            self.formats.push(kind);
        }
        self.custom_formats.retain(|f| f.name != format.name);
        self.custom_formats.push(format);
    }

    /// Register a custom format handler (builder pattern).
    #[cfg(feature = "custom")]
    pub fn with_custom_format(mut self, format: CustomFormat) -> Self {
        self.register_custom(format);
        self
    }

    /// Check if a format is registered.
    pub fn has_format(&self, kind: &FormatKind) -> bool {
        self.formats.contains(kind)
    }

    /// Get the custom format handler for a name.
    #[cfg(feature = "custom")]
    pub fn get_custom(&self, name: &str) -> Option<&CustomFormat> {
        self.custom_formats.iter().find(|f| f.name == name)
    }

    /// Resolve a format token to the format it names.
    ///
    /// Built-in names and aliases are recognised whether or not they are
    /// registered; registered custom names are matched case-insensitively.
    /// `None` means the token names no format at all.
    pub fn resolve_token(&self, token: &str) -> Option<FormatKind> {
        if let Some(kind) = FormatKind::from_token(token) {
            return Some(kind);
        }

        #[cfg(feature = "custom")]
        if let Some(custom) = self
            .custom_formats
            .iter()
            .find(|f| f.name.eq_ignore_ascii_case(token))
        {
            return Some(FormatKind::Custom(custom.name));
        }

        None
    }

    /// Get the encoder registered for a format.
    ///
    /// Returns `None` when the format is not registered, its feature is not
    /// compiled in, or a custom format has no serialize function.
    pub fn encoder_for<D: Serialize>(&self, kind: &FormatKind) -> Option<Arc<dyn Encoder<D>>> {
        if !self.has_format(kind) || !kind.is_available() {
            return None;
        }

        match kind {
            #[cfg(feature = "custom")]
            FormatKind::Custom(name) => {
                let custom = self.get_custom(name)?;
                if custom.serialize_fn.is_none() {
                    return None;
                }
                Some(Arc::new(custom.clone()))
            }
            #[cfg(not(feature = "custom"))]
            FormatKind::Custom(_) => None,
            builtin => Some(Arc::new(BuiltinEncoder::new(*builtin))),
        }
    }

    /// Get all registered format kinds.
    pub fn formats(&self) -> &[FormatKind] {
        &self.formats
    }
}

/// Create a default registry with all enabled formats.
pub fn default_registry() -> FormatRegistry {
    let mut registry = FormatRegistry::new();

    #[cfg(feature = "table")]
    registry.register(FormatKind::Table);

    #[cfg(feature = "json")]
    registry.register(FormatKind::Json);

    #[cfg(feature = "yaml")]
    registry.register(FormatKind::Yaml);

    #[cfg(feature = "plaintext")]
    registry.register(FormatKind::Plaintext);

    #[cfg(feature = "toml")]
    registry.register(FormatKind::Toml);

    #[cfg(feature = "ini")]
    registry.register(FormatKind::Ini);

    #[cfg(feature = "csv")]
    registry.register(FormatKind::Csv);

    #[cfg(feature = "xml")]
    registry.register(FormatKind::Xml);

    registry
}
