// SPDX-License-Identifier: MPL-2.0
//! In-memory activity log.
//!
//! Navigation changes, sign-ins, shown notifications and validation
//! failures are captured as [`DiagnosticEvent`]s and kept in a bounded
//! [`CircularBuffer`]. The buffer can be exported as a JSON
//! [`ActivityReport`] for inspection.

mod buffer;
mod collector;
mod events;
mod report;

pub use buffer::{BufferCapacity, CircularBuffer};
pub use collector::{DiagnosticsCollector, DiagnosticsHandle};
pub use events::{DiagnosticEvent, DiagnosticEventKind};
pub use report::{ActivityReport, ReportMetadata, SerializableEvent};
