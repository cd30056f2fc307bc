//! Completion events that gate when a report gets written.
//!
//! Upstream work announces that it has finished by publishing an exit event
//! whose payload is an optional callback. Handling the event runs the
//! callback once; the callback is where the document is handed to a
//! `MultiWriter`.

use std::any::Any;
use std::fmt;
use std::sync::mpsc::Receiver;

use thiserror::Error;

/// Error type returned by exit callbacks.
pub type CallbackError = Box<dyn std::error::Error + Send + Sync>;

/// A zero-argument callback run once when work has finished.
pub type ExitCallback = Box<dyn FnOnce() -> Result<(), CallbackError> + Send>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EventType {
    /// Work has finished and its result is ready to be reported
    Exit,
    /// Any other event published on the same channel
    Other(String),
}

impl fmt::Display for EventType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EventType::Exit => write!(f, "exit"),
            EventType::Other(name) => write!(f, "{}", name),
        }
    }
}

/// A notification with a type tag and an untyped payload.
pub struct Event {
    pub kind: EventType,
    pub value: Option<Box<dyn Any + Send>>,
}

impl fmt::Debug for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Event")
            .field("kind", &self.kind)
            .field("has_value", &self.value.is_some())
            .finish()
    }
}

impl Event {
    pub fn new(kind: EventType, value: Option<Box<dyn Any + Send>>) -> Self {
        Self { kind, value }
    }

    /// An exit event carrying an optional callback.
    pub fn exit(callback: Option<ExitCallback>) -> Self {
        Self::new(EventType::Exit, Some(Box::new(callback)))
    }

    /// An exit event that runs `f` when handled.
    pub fn exit_with<F>(f: F) -> Self
    where
        F: FnOnce() -> Result<(), CallbackError> + Send + 'static,
    {
        Self::exit(Some(Box::new(f)))
    }
}

#[derive(Debug, Error)]
pub enum EventError {
    /// The event is not an exit event, or its payload is malformed.
    #[error("bad exit event: {0}")]
    BadExitEvent(String),

    /// The exit callback failed; its error is passed through unchanged.
    #[error(transparent)]
    Callback(CallbackError),
}

/// Unpack an exit event into its optional callback.
pub fn parse_exit(event: Event) -> Result<Option<ExitCallback>, EventError> {
    if event.kind != EventType::Exit {
        return Err(EventError::BadExitEvent(format!(
            "not an exit event (got '{}')",
            event.kind
        )));
    }

    let value = event
        .value
        .ok_or_else(|| EventError::BadExitEvent("missing payload".into()))?;

    value
        .downcast::<Option<ExitCallback>>()
        .map(|callback| *callback)
        .map_err(|_| EventError::BadExitEvent("payload is not an exit callback".into()))
}

/// Handle an exit event: run its callback once, if it carries one.
pub fn handle_exit(event: Event) -> Result<(), EventError> {
    let Some(callback) = parse_exit(event)? else {
        log::debug!("exit event carried no callback");
        return Ok(());
    };

    callback().map_err(EventError::Callback)
}

/// Block until the first exit event arrives and handle it.
///
/// Other events are skipped. A channel that closes before any exit event
/// ends the wait successfully.
pub fn wait_for_exit(rx: &Receiver<Event>) -> Result<(), EventError> {
    for event in rx.iter() {
        if event.kind == EventType::Exit {
            return handle_exit(event);
        }
        log::trace!("skipping {} event", event.kind);
    }
    log::debug!("event channel closed before an exit event");
    Ok(())
}

/// Async counterpart of `wait_for_exit` for a tokio channel.
#[cfg(feature = "async")]
pub async fn listen_for_exit(
    rx: &mut tokio::sync::mpsc::UnboundedReceiver<Event>,
) -> Result<(), EventError> {
    while let Some(event) = rx.recv().await {
        if event.kind == EventType::Exit {
            return handle_exit(event);
        }
        log::trace!("skipping {} event", event.kind);
    }
    log::debug!("event channel closed before an exit event");
    Ok(())
}
