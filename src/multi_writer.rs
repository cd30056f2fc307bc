//! Fan-out delivery of one document to every report writer.

use std::sync::atomic::{AtomicBool, Ordering};

use crate::error::{AggregateError, SingleIoError, Stage};
use crate::writer::ReportWriter;

/// An ordered, fixed set of report writers.
///
/// `write` and `close` attempt every writer in construction order, whatever
/// happened to the ones before it, and report all failures together.
#[derive(Debug)]
pub struct MultiWriter<D> {
    writers: Vec<ReportWriter<D>>,
}

impl<D> MultiWriter<D> {
    /// Create a multi-writer over the given writers, keeping their order.
    pub fn new(writers: Vec<ReportWriter<D>>) -> Self {
        Self { writers }
    }

    /// Get the writers in construction order.
    pub fn writers(&self) -> &[ReportWriter<D>] {
        &self.writers
    }

    /// Take the writers back out, e.g. to drive them individually.
    pub fn into_writers(self) -> Vec<ReportWriter<D>> {
        self.writers
    }

    pub fn len(&self) -> usize {
        self.writers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.writers.is_empty()
    }

    /// Write the document to every writer.
    pub fn write(&mut self, document: &D) -> Result<(), AggregateError> {
        let mut errors = Vec::new();

        for (index, writer) in self.writers.iter_mut().enumerate() {
            log::debug!("writing {} report to {}", writer.kind(), writer.id());
            if let Err(e) = writer.write(document) {
                log::warn!("failed to write report to {}: {}", writer.id(), e);
                errors.push(SingleIoError {
                    stage: Stage::Encode,
                    index,
                    target: writer.id(),
                    error: Box::new(e),
                });
            }
        }

        AggregateError::from_errors(errors)
    }

    /// Write the document to every writer, checking `cancel` between writers.
    ///
    /// Once cancellation is observed, the remaining writers are not written
    /// but each is reported with `Stage::Cancelled`, so the aggregate still
    /// accounts for every destination.
    pub fn write_with_cancel(
        &mut self,
        document: &D,
        cancel: &AtomicBool,
    ) -> Result<(), AggregateError> {
        let mut errors = Vec::new();

        for (index, writer) in self.writers.iter_mut().enumerate() {
            if cancel.load(Ordering::Acquire) {
                errors.push(SingleIoError {
                    stage: Stage::Cancelled,
                    index,
                    target: writer.id(),
                    error: "write cancelled before this destination was attempted".into(),
                });
                continue;
            }

            if let Err(e) = writer.write(document) {
                log::warn!("failed to write report to {}: {}", writer.id(), e);
                errors.push(SingleIoError {
                    stage: Stage::Encode,
                    index,
                    target: writer.id(),
                    error: Box::new(e),
                });
            }
        }

        AggregateError::from_errors(errors)
    }

    /// Close every writer. Stdout-bound writers are flushed, never closed.
    pub fn close(&mut self) -> Result<(), AggregateError> {
        let mut errors = Vec::new();

        for (index, writer) in self.writers.iter_mut().enumerate() {
            log::debug!("closing report writer {}", writer.id());
            if let Err(e) = writer.close() {
                log::warn!("failed to close report writer {}: {}", writer.id(), e);
                errors.push(SingleIoError {
                    stage: Stage::Close,
                    index,
                    target: writer.id(),
                    error: Box::new(e),
                });
            }
        }

        AggregateError::from_errors(errors)
    }
}
