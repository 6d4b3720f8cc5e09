// SPDX-License-Identifier: MPL-2.0
//! Activity events recorded while the portal is used.

use crate::navigation::{Section, ViewId};
use crate::notifications::Severity;
use crate::session::Role;
use serde::Serialize;
use std::time::Instant;

/// What happened.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum DiagnosticEventKind {
    /// The active page changed.
    ViewChanged { from: Option<ViewId>, to: ViewId },
    /// A dashboard sidebar section was shown.
    SectionChanged { role: Role, section: Section },
    /// A role card was chosen on the landing page.
    RoleSelected { role: Role },
    SignedIn { role: Role },
    SignedOut,
    /// A toast was presented to the user; `title` is its Fluent key.
    NotificationShown { severity: Severity, title: String },
    Warning { message: String },
    Error { message: String },
}

/// A timestamped activity event.
#[derive(Debug, Clone)]
pub struct DiagnosticEvent {
    /// Monotonic capture time.
    pub timestamp: Instant,
    pub kind: DiagnosticEventKind,
}

impl DiagnosticEvent {
    #[must_use]
    pub fn new(kind: DiagnosticEventKind) -> Self {
        Self {
            timestamp: Instant::now(),
            kind,
        }
    }
}
