//! Shared output stream trait definition.

use std::fmt::Debug;
use std::io::Write;

/// A shared, process-wide stream such as standard output.
///
/// Writers bound to a shared stream borrow a handle to it; they never own
/// or close the stream itself. Inject an implementation into
/// `WriterFactory` to redirect "stdout" destinations, e.g. to an
/// `InMemorySink` in tests.
pub trait OutputStream: Send + Sync + Debug {
    /// Returns an identifier for this stream, used in error messages.
    ///
    /// Convention: "-" for stdout.
    fn id(&self) -> &str;

    /// Get a write handle to the stream.
    ///
    /// Dropping the handle must leave the stream usable.
    fn handle(&self) -> std::io::Result<Box<dyn Write + Send>>;
}
