//! # reportout
//!
//! Deliver one in-memory document, encoded, to several destinations at once.
//!
//! ## Overview
//!
//! reportout provides:
//! - **Option parsing**: `<format>` and `<format>=<path>` tokens become typed writer options
//! - **Writer construction**: formats resolved against a registry, files created up front
//! - **Fan-out delivery**: every destination is attempted; failures are aggregated in order
//! - **Completion events**: an exit event carries the callback that triggers the write
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use reportout::{WriterFactory, parse_options};
//! use serde::Serialize;
//!
//! #[derive(Serialize)]
//! struct Report {
//!     packages: Vec<String>,
//! }
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let options = parse_options(&["table", "json=report.json"], "table", "");
//!     let mut writers = WriterFactory::default().make_writers::<Report>(&options)?;
//!
//!     let report = Report { packages: vec!["serde".into()] };
//!     let written = writers.write(&report);
//!     writers.close()?;
//!     written?;
//!     Ok(())
//! }
//! ```
//!
//! ## Features
//!
//! - `json` - JSON output (enabled by default)
//! - `plaintext` - Plain text output (enabled by default)
//! - `table` - Table output via comfy-table (enabled by default)
//! - `yaml`, `toml`, `ini`, `csv`, `xml` - Further serde-backed formats
//! - `custom` - Register user-defined formats by name
//! - `async` - Wait for the exit event on a tokio channel
//! - `miette` - Pretty error reporting with miette
//! - `sarge` - Read `OutputArgs` with the sarge argument parser
//!
//! ## Semantics
//!
//! - Files named by options are created and truncated while the writers are
//!   built, before any document exists. A failure later in the pipeline
//!   leaves them empty.
//! - Writers bound to standard output share the process stream; closing them
//!   flushes it and leaves it open.
//! - `MultiWriter::write` and `MultiWriter::close` never stop early. The
//!   returned `AggregateError` lists each failing writer by position and
//!   target, in construction order.

// Core modules
pub mod cli;
pub mod config;
pub mod error;
pub mod event;
pub mod factory;
pub mod format;
pub mod io;
pub mod multi_writer;
pub mod writer;

// Re-exports for convenience
pub use config::{OutputConfig, WriterOption, parse_options};
pub use error::{AggregateError, OutputError, SingleIoError, Stage};
pub use event::{Event, EventError, EventType, ExitCallback, handle_exit, parse_exit};
pub use factory::{WriterFactory, make_writers};
#[cfg(feature = "custom")]
pub use format::CustomFormat;
pub use format::{Encoder, FormatError, FormatKind, FormatRegistry, default_registry};
pub use io::{InMemorySink, OutputStream, Sink, StderrStream, StdoutStream};
pub use multi_writer::MultiWriter;
pub use writer::ReportWriter;

#[cfg(feature = "async")]
pub use event::listen_for_exit;

// Miette re-exports
#[cfg(feature = "miette")]
pub use error::OutputDiagnostic;
