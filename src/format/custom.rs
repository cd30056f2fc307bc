//! Custom format support for user-defined formats.
//!
//! This module allows developers to register their own output formats
//! without modifying the core library. The document is converted to a
//! `serde_json::Value` first, and the registered function turns that value
//! into bytes.

use std::io::Write;
use std::sync::Arc;

use serde::Serialize;

use super::{Encoder, FormatError, FormatKind};

/// Type alias for custom serialize function.
///
/// Takes a `serde_json::Value` and returns serialized bytes.
pub type SerializeFn =
    Arc<dyn Fn(&serde_json::Value) -> Result<Vec<u8>, FormatError> + Send + Sync>;

/// A custom format handler that can be registered with the FormatRegistry.
///
/// # Example
///
/// ```rust,ignore
/// use reportout::format::{CustomFormat, FormatError};
///
/// let names = CustomFormat::new("names").with_serialize(|value| {
///     let names: Vec<String> = value["packages"]
///         .as_array()
///         .into_iter()
///         .flatten()
///         .filter_map(|p| p["name"].as_str().map(str::to_string))
///         .collect();
///     Ok(names.join("\n").into_bytes())
/// });
///
/// registry.register_custom(names);
/// ```
#[derive(Clone)]
pub struct CustomFormat {
    /// Unique name for this format, matched against output tokens
    pub name: &'static str,
    /// Serialize function
    pub serialize_fn: Option<SerializeFn>,
}

impl std::fmt::Debug for CustomFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CustomFormat")
            .field("name", &self.name)
            .field("has_serialize", &self.serialize_fn.is_some())
            .finish()
    }
}

impl CustomFormat {
    /// Create a new custom format with the given name.
    pub fn new(name: &'static str) -> Self {
        Self {
            name,
            serialize_fn: None,
        }
    }

    /// Set the serialize function.
    pub fn with_serialize<F>(mut self, f: F) -> Self
    where
        F: Fn(&serde_json::Value) -> Result<Vec<u8>, FormatError> + Send + Sync + 'static,
    {
        self.serialize_fn = Some(Arc::new(f));
        self
    }

    /// Serialize a typed value to bytes.
    pub fn serialize<T: Serialize>(&self, value: &T) -> Result<Vec<u8>, FormatError> {
        let serialize_fn = self.serialize_fn.as_ref().ok_or_else(|| {
            FormatError::Other(Box::new(std::io::Error::new(
                std::io::ErrorKind::Unsupported,
                format!(
                    "Custom format '{}' does not support serialization",
                    self.name
                ),
            )))
        })?;

        let json_value =
            serde_json::to_value(value).map_err(|e| FormatError::Serde(Box::new(e)))?;
        serialize_fn(&json_value)
    }
}

impl<D: Serialize> Encoder<D> for CustomFormat {
    fn kind(&self) -> FormatKind {
        FormatKind::Custom(self.name)
    }

    fn encode(&self, sink: &mut dyn Write, document: &D) -> Result<(), FormatError> {
        let bytes = self.serialize(document)?;
        sink.write_all(&bytes)?;
        Ok(())
    }
}
