// SPDX-License-Identifier: MPL-2.0
//! Core notification data structures.

use crate::ui::design_tokens::palette;
use iced::Color;
use serde::{Serialize, Serializer};

/// Generation number of a notification.
///
/// The presenter increments it on every `notify`, so a larger id always
/// means a more recent notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NotificationId(u64);

impl NotificationId {
    pub(crate) fn from_generation(generation: u64) -> Self {
        Self(generation)
    }

    #[must_use]
    pub fn generation(self) -> u64 {
        self.0
    }
}

/// Severity level determines the icon and accent color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Severity {
    Success,
    Error,
    Warning,
    #[default]
    Info,
}

impl Severity {
    /// Icon glyph shown in front of the title.
    #[must_use]
    pub fn glyph(self) -> &'static str {
        match self {
            Severity::Success => "✓",
            Severity::Error => "✕",
            Severity::Warning => "⚠",
            Severity::Info => "ℹ",
        }
    }

    #[must_use]
    pub fn color(self) -> Color {
        match self {
            Severity::Success => palette::SUCCESS_500,
            Severity::Error => palette::ERROR_500,
            Severity::Warning => palette::WARNING_500,
            Severity::Info => palette::INFO_500,
        }
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Severity::Success => "success",
            Severity::Error => "error",
            Severity::Warning => "warning",
            Severity::Info => "info",
        }
    }

    /// Maps a severity name to a level; unrecognized names become `Info`.
    #[must_use]
    pub fn from_name(name: &str) -> Self {
        match name {
            "success" => Severity::Success,
            "error" => Severity::Error,
            "warning" => Severity::Warning,
            _ => Severity::Info,
        }
    }
}

impl Serialize for Severity {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl From<&str> for Severity {
    fn from(name: &str) -> Self {
        Self::from_name(name)
    }
}

/// A notification to be displayed to the user.
///
/// `title` and `message` are Fluent message keys resolved when the toast is
/// rendered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    id: NotificationId,
    severity: Severity,
    title: String,
    message: String,
    message_args: Vec<(String, String)>,
}

impl Notification {
    pub(crate) fn new(
        id: NotificationId,
        severity: Severity,
        title: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            id,
            severity,
            title: title.into(),
            message: message.into(),
            message_args: Vec::new(),
        }
    }

    pub(crate) fn set_message_args(&mut self, args: Vec<(String, String)>) {
        self.message_args = args;
    }

    #[must_use]
    pub fn id(&self) -> NotificationId {
        self.id
    }

    #[must_use]
    pub fn severity(&self) -> Severity {
        self.severity
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Arguments for message interpolation.
    #[must_use]
    pub fn message_args(&self) -> &[(String, String)] {
        &self.message_args
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn glyphs_follow_severity() {
        assert_eq!(Severity::Success.glyph(), "✓");
        assert_eq!(Severity::Error.glyph(), "✕");
        assert_eq!(Severity::Warning.glyph(), "⚠");
        assert_eq!(Severity::Info.glyph(), "ℹ");
    }

    #[test]
    fn unknown_severity_name_falls_back_to_info() {
        assert_eq!(Severity::from_name("critical"), Severity::Info);
        assert_eq!(Severity::from("").glyph(), Severity::Info.glyph());
    }

    #[test]
    fn severity_names_round_trip() {
        for severity in [
            Severity::Success,
            Severity::Error,
            Severity::Warning,
            Severity::Info,
        ] {
            assert_eq!(Severity::from_name(severity.as_str()), severity);
        }
    }

    #[test]
    fn severity_colors_are_distinct() {
        let colors = [
            Severity::Success.color(),
            Severity::Error.color(),
            Severity::Warning.color(),
            Severity::Info.color(),
        ];
        for (i, a) in colors.iter().enumerate() {
            for b in &colors[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn ids_order_by_generation() {
        let older = NotificationId::from_generation(1);
        let newer = NotificationId::from_generation(2);
        assert!(newer > older);
        assert_eq!(newer.generation(), 2);
    }
}
