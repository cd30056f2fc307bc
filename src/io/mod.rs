//! Output sinks for report writers.
//!
//! This module provides:
//! - `OutputStream`: Trait for shared streams (stdout) that writers borrow but never close
//! - `Sink`: The tagged stdout-or-file destination owned by one writer
//! - `create_report_file`: Create/truncate a report file with the standard permissions
//! - In-memory stream for testing

mod memory;
mod output;
mod sink;
mod std_io;

pub use memory::InMemorySink;
pub use output::OutputStream;
pub use sink::Sink;
pub use std_io::{StderrStream, StdoutStream, create_report_file};
