//! Configuration types for report destinations.
//!
//! This module provides:
//! - `WriterOption`: A single `(format, path)` destination request
//! - `parse_options`: Turns raw `--output` tokens into writer options
//! - `OutputConfig`: The output section of an application config file

mod option;
mod report;

pub use option::{WriterOption, parse_options};
pub use report::{DEFAULT_FORMAT, OutputConfig};
