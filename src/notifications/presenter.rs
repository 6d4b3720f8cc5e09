// SPDX-License-Identifier: MPL-2.0
//! Single-slot notification presenter.
//!
//! A new notification replaces the one on screen instead of queueing behind
//! it. Auto-dismissal is a pending deadline tagged with the generation of
//! the notification that scheduled it; every `notify` overwrites that
//! deadline, so at most one dismissal is ever pending and an older one can
//! never hide a newer notification.

use super::clock::{Clock, SystemClock};
use super::notification::{Notification, NotificationId, Severity};
use crate::app::config::NOTIFICATION_DISMISS_DELAY;
use crate::diagnostics::{DiagnosticEventKind, DiagnosticsHandle};
use std::time::Instant;

/// Messages for notification state changes.
#[derive(Debug, Clone)]
pub enum Message {
    /// Close button of the toast with this id was pressed.
    Dismiss(NotificationId),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct PendingDismissal {
    id: NotificationId,
    due_at: Instant,
}

#[derive(Debug)]
pub struct Presenter<C: Clock = SystemClock> {
    clock: C,
    current: Option<Notification>,
    visible: bool,
    generation: u64,
    pending: Option<PendingDismissal>,
    diagnostics: Option<DiagnosticsHandle>,
}

impl Default for Presenter<SystemClock> {
    fn default() -> Self {
        Self::new()
    }
}

impl Presenter<SystemClock> {
    #[must_use]
    pub fn new() -> Self {
        Self::with_clock(SystemClock)
    }
}

impl<C: Clock> Presenter<C> {
    #[must_use]
    pub fn with_clock(clock: C) -> Self {
        Self {
            clock,
            current: None,
            visible: false,
            generation: 0,
            pending: None,
            diagnostics: None,
        }
    }

    /// Sets the diagnostics handle used to log shown warnings and errors.
    pub fn set_diagnostics(&mut self, handle: DiagnosticsHandle) {
        self.diagnostics = Some(handle);
    }

    /// Shows a notification, replacing any visible one, and schedules its
    /// dismissal [`NOTIFICATION_DISMISS_DELAY`] from now.
    pub fn notify(
        &mut self,
        severity: impl Into<Severity>,
        title: impl Into<String>,
        message: impl Into<String>,
    ) -> NotificationId {
        self.notify_with_args(severity, title, message, Vec::new())
    }

    /// Like [`Self::notify`], with interpolation arguments for the message.
    pub fn notify_with_args(
        &mut self,
        severity: impl Into<Severity>,
        title: impl Into<String>,
        message: impl Into<String>,
        args: Vec<(String, String)>,
    ) -> NotificationId {
        self.generation += 1;
        let id = NotificationId::from_generation(self.generation);
        let severity = severity.into();

        let mut notification = Notification::new(id, severity, title, message);
        notification.set_message_args(args);

        if let Some(handle) = &self.diagnostics {
            handle.log(DiagnosticEventKind::NotificationShown {
                severity,
                title: notification.title().to_string(),
            });
        }

        self.current = Some(notification);
        self.visible = true;
        self.pending = Some(PendingDismissal {
            id,
            due_at: self.clock.now() + NOTIFICATION_DISMISS_DELAY,
        });
        id
    }

    /// Hides the notification. Calling it while hidden has no effect.
    pub fn dismiss(&mut self) {
        self.visible = false;
        self.pending = None;
    }

    /// Hides the notification only if `id` is the one on screen.
    ///
    /// Returns `true` if something was hidden.
    pub fn dismiss_id(&mut self, id: NotificationId) -> bool {
        if self.visible && self.current.as_ref().map(Notification::id) == Some(id) {
            self.dismiss();
            true
        } else {
            false
        }
    }

    /// Fires the dismissal scheduled by notification `id`.
    ///
    /// Dismissals scheduled by superseded notifications are ignored.
    pub fn expire(&mut self, id: NotificationId) -> bool {
        match self.pending {
            Some(pending) if pending.id == id => {
                self.dismiss();
                true
            }
            _ => false,
        }
    }

    /// Fires the pending dismissal once its deadline has passed.
    pub fn tick(&mut self) {
        if let Some(pending) = self.pending {
            if self.clock.now() >= pending.due_at {
                self.expire(pending.id);
            }
        }
    }

    pub fn handle_message(&mut self, message: &Message) {
        match message {
            Message::Dismiss(id) => {
                self.dismiss_id(*id);
            }
        }
    }

    /// The notification on screen, if any.
    #[must_use]
    pub fn visible(&self) -> Option<&Notification> {
        if self.visible {
            self.current.as_ref()
        } else {
            None
        }
    }

    #[must_use]
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Whether an auto-dismissal is waiting to fire.
    #[must_use]
    pub fn has_pending_dismissal(&self) -> bool {
        self.pending.is_some()
    }

    /// Generation of the notification that owns the pending dismissal.
    #[must_use]
    pub fn pending_dismissal(&self) -> Option<NotificationId> {
        self.pending.map(|p| p.id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::notifications::ManualClock;
    use std::time::Duration;

    fn presenter() -> (Presenter<ManualClock>, ManualClock) {
        let clock = ManualClock::new();
        (Presenter::with_clock(clock.clone()), clock)
    }

    #[test]
    fn starts_hidden() {
        let (presenter, _) = presenter();
        assert!(!presenter.is_visible());
        assert!(presenter.visible().is_none());
        assert!(!presenter.has_pending_dismissal());
    }

    #[test]
    fn notify_shows_content() {
        let (mut presenter, _) = presenter();
        presenter.notify(Severity::Success, "Saved", "OK");

        let shown = presenter.visible().expect("notification should be visible");
        assert_eq!(shown.severity(), Severity::Success);
        assert_eq!(shown.title(), "Saved");
        assert_eq!(shown.message(), "OK");
    }

    #[test]
    fn auto_dismisses_after_exactly_four_seconds() {
        let (mut presenter, clock) = presenter();
        presenter.notify("info", "Hello", "World");

        clock.advance(Duration::from_millis(3999));
        presenter.tick();
        assert!(presenter.is_visible());

        clock.advance(Duration::from_millis(1));
        presenter.tick();
        assert!(!presenter.is_visible());
        assert!(!presenter.has_pending_dismissal());
    }

    #[test]
    fn newer_notification_supersedes_older_timer() {
        let (mut presenter, clock) = presenter();
        presenter.notify("success", "Saved", "OK");
        clock.advance(Duration::from_millis(3000));
        presenter.notify("error", "Failed", "No");

        // The first deadline passes; the error must stay up.
        clock.advance(Duration::from_millis(1500));
        presenter.tick();
        let shown = presenter.visible().expect("error should still be visible");
        assert_eq!(shown.severity(), Severity::Error);
        assert_eq!(shown.title(), "Failed");

        clock.advance(Duration::from_millis(2500));
        presenter.tick();
        assert!(!presenter.is_visible());
    }

    #[test]
    fn at_most_one_dismissal_is_pending() {
        let (mut presenter, _) = presenter();
        let first = presenter.notify("success", "Saved", "OK");
        let second = presenter.notify("error", "Failed", "No");
        assert_eq!(presenter.pending_dismissal(), Some(second));

        assert!(!presenter.expire(first));
        assert_eq!(presenter.visible().map(Notification::title), Some("Failed"));
        assert!(presenter.expire(second));
        assert!(!presenter.is_visible());
    }

    #[test]
    fn unknown_severity_uses_info_glyph() {
        let (mut presenter, _) = presenter();
        presenter.notify("critical", "Heads up", "Something happened");
        let shown = presenter.visible().expect("visible");
        assert_eq!(shown.severity().glyph(), "ℹ");
    }

    #[test]
    fn dismiss_twice_is_harmless() {
        let (mut presenter, _) = presenter();
        presenter.notify("warning", "Careful", "Low stock");
        presenter.dismiss();
        presenter.dismiss();
        assert!(!presenter.is_visible());
    }

    #[test]
    fn dismiss_while_hidden_is_harmless() {
        let (mut presenter, clock) = presenter();
        presenter.dismiss();
        clock.advance(Duration::from_secs(10));
        presenter.tick();
        assert!(!presenter.is_visible());
    }

    #[test]
    fn close_button_of_stale_toast_is_ignored() {
        let (mut presenter, _) = presenter();
        let old = presenter.notify("success", "Saved", "OK");
        let new = presenter.notify("info", "Note", "Hi");

        presenter.handle_message(&Message::Dismiss(old));
        assert!(presenter.is_visible());

        presenter.handle_message(&Message::Dismiss(new));
        assert!(!presenter.is_visible());
    }

    #[test]
    fn notify_after_dismiss_shows_again() {
        let (mut presenter, clock) = presenter();
        presenter.notify("success", "One", "1");
        presenter.dismiss();
        presenter.notify("success", "Two", "2");
        assert_eq!(presenter.visible().map(Notification::title), Some("Two"));

        clock.advance(NOTIFICATION_DISMISS_DELAY);
        presenter.tick();
        assert!(!presenter.is_visible());
    }

    #[test]
    fn message_args_are_kept() {
        let (mut presenter, _) = presenter();
        presenter.notify_with_args(
            Severity::Success,
            "t",
            "m",
            vec![("name".to_string(), "Ada".to_string())],
        );
        let shown = presenter.visible().expect("visible");
        assert_eq!(shown.message_args(), &[("name".to_string(), "Ada".to_string())]);
    }

    #[test]
    fn shown_notifications_are_logged_with_severity_and_title() {
        use crate::diagnostics::DiagnosticsCollector;

        let mut collector = DiagnosticsCollector::default();
        let (mut presenter, _) = presenter();
        presenter.set_diagnostics(collector.handle());

        presenter.notify("success", "saved-title", "saved");
        presenter.notify("error", "broken-title", "broken");
        collector.process_pending();

        let kinds: Vec<_> = collector.events().map(|e| e.kind.clone()).collect();
        assert_eq!(
            kinds,
            vec![
                DiagnosticEventKind::NotificationShown {
                    severity: Severity::Success,
                    title: "saved-title".into(),
                },
                DiagnosticEventKind::NotificationShown {
                    severity: Severity::Error,
                    title: "broken-title".into(),
                },
            ]
        );
    }
}
