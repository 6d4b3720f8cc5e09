// SPDX-License-Identifier: MPL-2.0
//! Central collector for activity events.
//!
//! Components hold a cheap [`DiagnosticsHandle`] and push events through a
//! bounded channel; the collector drains the channel into a circular buffer
//! after every update and can export the buffer as JSON.

use super::report::{write_atomic, ActivityReport, ReportMetadata, SerializableEvent};
use super::{BufferCapacity, CircularBuffer, DiagnosticEvent, DiagnosticEventKind};
use crate::error::Result;
use crossbeam_channel::{bounded, Receiver, Sender};
use std::path::Path;
use std::time::Instant;

/// Default channel capacity for event buffering.
const DEFAULT_CHANNEL_CAPACITY: usize = 100;

/// Handle for sending events to the collector.
#[derive(Clone, Debug)]
pub struct DiagnosticsHandle {
    event_tx: Sender<DiagnosticEvent>,
}

impl DiagnosticsHandle {
    /// Records an event. Non-blocking: the event is dropped if the channel
    /// is full or the collector is gone.
    pub fn log(&self, kind: DiagnosticEventKind) {
        let _ = self.event_tx.try_send(DiagnosticEvent::new(kind));
    }

    pub fn log_warning(&self, message: impl Into<String>) {
        self.log(DiagnosticEventKind::Warning {
            message: message.into(),
        });
    }

    pub fn log_error(&self, message: impl Into<String>) {
        self.log(DiagnosticEventKind::Error {
            message: message.into(),
        });
    }
}

/// Receives events from every handle and keeps the most recent ones.
#[derive(Debug)]
pub struct DiagnosticsCollector {
    buffer: CircularBuffer<DiagnosticEvent>,
    event_rx: Receiver<DiagnosticEvent>,
    event_tx: Sender<DiagnosticEvent>,
    started_at: Instant,
}

impl Default for DiagnosticsCollector {
    fn default() -> Self {
        Self::new(BufferCapacity::default())
    }
}

impl DiagnosticsCollector {
    #[must_use]
    pub fn new(capacity: BufferCapacity) -> Self {
        let (event_tx, event_rx) = bounded(DEFAULT_CHANNEL_CAPACITY);
        Self {
            buffer: CircularBuffer::new(capacity),
            event_rx,
            event_tx,
            started_at: Instant::now(),
        }
    }

    #[must_use]
    pub fn handle(&self) -> DiagnosticsHandle {
        DiagnosticsHandle {
            event_tx: self.event_tx.clone(),
        }
    }

    /// Moves every queued event into the buffer and returns how many
    /// arrived.
    pub fn process_pending(&mut self) -> usize {
        let mut received = 0;
        while let Ok(event) = self.event_rx.try_recv() {
            self.buffer.push(event);
            received += 1;
        }
        received
    }

    /// Stored events, oldest first.
    pub fn events(&self) -> impl Iterator<Item = &DiagnosticEvent> {
        self.buffer.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.buffer.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    pub fn clear(&mut self) {
        self.buffer.clear();
    }

    /// Builds a report from the current buffer contents.
    #[must_use]
    #[allow(clippy::cast_possible_truncation)] // Duration in ms fits comfortably in u64
    pub fn build_report(&self) -> ActivityReport {
        let events: Vec<SerializableEvent> = self
            .buffer
            .iter()
            .map(|event| SerializableEvent::new(event.timestamp, self.started_at, event.kind.clone()))
            .collect();

        let metadata = ReportMetadata::new(
            self.started_at.elapsed().as_millis() as u64,
            events.len(),
        );
        ActivityReport { metadata, events }
    }

    /// Exports the buffered events as a pretty-printed JSON report.
    ///
    /// # Errors
    ///
    /// Returns an error if JSON serialization fails.
    pub fn export_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(&self.build_report())
    }

    /// Writes the JSON report to `path`, replacing any previous report.
    ///
    /// # Errors
    ///
    /// Returns `Error::Io` if the file cannot be written and
    /// `Error::Serialization` if the report cannot be encoded.
    pub fn export_to_file(&self, path: impl AsRef<Path>) -> Result<()> {
        let json = self.export_json()?;
        write_atomic(path.as_ref(), &json)?;
        Ok(())
    }
}
