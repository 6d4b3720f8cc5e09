// SPDX-License-Identifier: MPL-2.0
//! Activity report exported as JSON.

use std::fs;
use std::io;
use std::path::Path;
use std::time::Instant;

use serde::Serialize;

use super::DiagnosticEventKind;

/// Metadata about an activity report.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ReportMetadata {
    /// Version of MedSync that wrote the report
    pub medsync_version: String,
    /// Time since collection started, in milliseconds
    pub collection_duration_ms: u64,
    pub event_count: usize,
}

impl ReportMetadata {
    #[must_use]
    pub fn new(collection_duration_ms: u64, event_count: usize) -> Self {
        Self {
            medsync_version: env!("CARGO_PKG_VERSION").to_string(),
            collection_duration_ms,
            event_count,
        }
    }
}

/// An event with its offset from the start of collection.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct SerializableEvent {
    pub offset_ms: u64,
    #[serde(flatten)]
    pub kind: DiagnosticEventKind,
}

impl SerializableEvent {
    #[must_use]
    #[allow(clippy::cast_possible_truncation)] // Duration in ms fits comfortably in u64
    pub fn new(timestamp: Instant, started_at: Instant, kind: DiagnosticEventKind) -> Self {
        Self {
            offset_ms: timestamp.saturating_duration_since(started_at).as_millis() as u64,
            kind,
        }
    }
}

/// Complete report: metadata followed by events, oldest first.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ActivityReport {
    pub metadata: ReportMetadata,
    pub events: Vec<SerializableEvent>,
}

/// Writes `content` next to `path` and renames it into place, so readers
/// never see a half-written report.
pub fn write_atomic(path: &Path, content: &str) -> io::Result<()> {
    let temp_path = path.with_extension("json.tmp");
    fs::write(&temp_path, content)?;

    if let Err(e) = fs::rename(&temp_path, path) {
        let _ = fs::remove_file(&temp_path);
        return Err(e);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;
    use tempfile::tempdir;

    #[test]
    fn event_offset_is_relative_to_collection_start() {
        let start = Instant::now();
        let event = SerializableEvent::new(
            start + Duration::from_millis(250),
            start,
            DiagnosticEventKind::SignedOut,
        );
        assert_eq!(event.offset_ms, 250);

        let json = serde_json::to_value(&event).expect("serializable");
        assert_eq!(json, serde_json::json!({ "offset_ms": 250, "type": "signed_out" }));
    }

    #[test]
    fn write_atomic_replaces_existing_file() {
        let dir = tempdir().expect("temp dir");
        let path = dir.path().join("activity.json");
        fs::write(&path, "old").expect("seed");

        write_atomic(&path, "new").expect("write");

        assert_eq!(fs::read_to_string(&path).expect("read"), "new");
        assert!(!path.with_extension("json.tmp").exists());
    }
}
