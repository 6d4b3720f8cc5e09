// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::notifications::NotificationMessage;
use crate::ui::{auth, dashboard, landing, modal};
use std::path::PathBuf;
use std::time::Instant;

/// Top-level messages consumed by `App::update`. The variants forward
/// page messages while keeping a single update entrypoint.
#[derive(Debug, Clone)]
pub enum Message {
    Landing(landing::Message),
    Auth(auth::Message),
    Dashboard(dashboard::Message),
    Modal(modal::Message),
    Notification(NotificationMessage),
    /// Periodic tick while a notification waits to be auto-dismissed.
    Tick(Instant),
}

/// Runtime flags passed in from the command line.
#[derive(Debug, Clone, Default)]
pub struct Flags {
    /// Optional locale, e.g. "fr" or "en-US".
    pub lang: Option<String>,
    /// Config directory taking priority over every other source.
    /// `None` in normal runs, where `--config-dir` goes through [`super::paths`].
    pub config_dir: Option<PathBuf>,
    /// File the activity report is rewritten to whenever new events arrive.
    pub activity_log: Option<PathBuf>,
}
