// SPDX-License-Identifier: MPL-2.0
//! Page switching and "back" resolution.
//!
//! The navigator stores the single active page as a value rather than a set
//! of independent visibility flags, so "exactly one page is shown" holds by
//! construction once the first page has been activated.

use super::ViewId;
use crate::diagnostics::{DiagnosticEventKind, DiagnosticsHandle};
use crate::session::{Role, Session};

#[derive(Debug, Default)]
pub struct Navigator {
    active: Option<ViewId>,
    diagnostics: Option<DiagnosticsHandle>,
}

impl Navigator {
    /// Creates a navigator with no active page.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_diagnostics(&mut self, handle: DiagnosticsHandle) {
        self.diagnostics = Some(handle);
    }

    /// Page currently shown. `None` only before the first activation.
    #[must_use]
    pub fn active(&self) -> Option<ViewId> {
        self.active
    }

    #[must_use]
    pub fn is_active(&self, view: ViewId) -> bool {
        self.active == Some(view)
    }

    /// Shows `target`, remembering the page it replaces in `session.last_view`.
    ///
    /// Re-activating the page that is already shown changes nothing, which
    /// keeps `last_view` pointing at a different page.
    pub fn activate(&mut self, session: &mut Session, target: ViewId) {
        if self.active == Some(target) {
            return;
        }

        let previous = self.active.replace(target);
        if previous.is_some() {
            session.last_view = previous;
        }

        if let Some(handle) = &self.diagnostics {
            handle.log(DiagnosticEventKind::ViewChanged {
                from: previous,
                to: target,
            });
        }
    }

    /// Resolves `name` and activates it. Unknown names leave every piece of
    /// state untouched and return `false`.
    pub fn activate_by_name(&mut self, session: &mut Session, name: &str) -> bool {
        match name.parse::<ViewId>() {
            Ok(target) => {
                self.activate(session, target);
                true
            }
            Err(_) => false,
        }
    }

    /// Destination of the "back" action, by priority: the role's dashboard,
    /// then the previously shown page, then the landing page.
    #[must_use]
    pub fn back_destination(&self, session: &Session) -> ViewId {
        if let Some(role) = session.role {
            role.dashboard()
        } else if let Some(last) = session.last_view {
            last
        } else {
            ViewId::LANDING
        }
    }

    /// Navigates to [`Self::back_destination`] and returns it.
    pub fn go_back(&mut self, session: &mut Session) -> ViewId {
        let target = self.back_destination(session);
        self.activate(session, target);
        target
    }

    /// Records the chosen role and opens the registration page.
    pub fn select_role(&mut self, session: &mut Session, role: Role) {
        session.role = Some(role);
        if let Some(handle) = &self.diagnostics {
            handle.log(DiagnosticEventKind::RoleSelected { role });
        }
        self.activate(session, ViewId::Register);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diagnostics::{BufferCapacity, DiagnosticsCollector};

    fn started() -> (Navigator, Session) {
        let mut navigator = Navigator::new();
        let mut session = Session::new();
        navigator.activate(&mut session, ViewId::LANDING);
        (navigator, session)
    }

    #[test]
    fn nothing_is_active_before_first_activation() {
        let navigator = Navigator::new();
        assert_eq!(navigator.active(), None);
    }

    #[test]
    fn first_activation_does_not_record_a_previous_page() {
        let (navigator, session) = started();
        assert_eq!(navigator.active(), Some(ViewId::Landing));
        assert_eq!(session.last_view, None);
    }

    #[test]
    fn exactly_one_page_is_active_after_every_activation() {
        let (mut navigator, mut session) = started();
        let sequence = [
            ViewId::Login,
            ViewId::Register,
            ViewId::Register,
            ViewId::DonorDashboard,
            ViewId::Landing,
            ViewId::FacilityDashboard,
        ];
        for target in sequence {
            navigator.activate(&mut session, target);
            let shown = ViewId::ALL
                .into_iter()
                .filter(|view| navigator.is_active(*view))
                .count();
            assert_eq!(shown, 1);
            assert!(navigator.is_active(target));
        }
    }

    #[test]
    fn switching_records_the_replaced_page() {
        let (mut navigator, mut session) = started();
        navigator.activate(&mut session, ViewId::Login);
        assert_eq!(session.last_view, Some(ViewId::Landing));
        navigator.activate(&mut session, ViewId::Register);
        assert_eq!(session.last_view, Some(ViewId::Login));
    }

    #[test]
    fn reactivating_the_current_page_keeps_bookkeeping() {
        let (mut navigator, mut session) = started();
        navigator.activate(&mut session, ViewId::Login);
        navigator.activate(&mut session, ViewId::Login);
        assert_eq!(session.last_view, Some(ViewId::Landing));
        assert!(navigator.is_active(ViewId::Login));
    }

    #[test]
    fn unknown_name_is_a_silent_no_op() {
        let (mut navigator, mut session) = started();
        navigator.activate(&mut session, ViewId::Login);
        let before = session.clone();

        assert!(!navigator.activate_by_name(&mut session, "missing-page"));
        assert_eq!(navigator.active(), Some(ViewId::Login));
        assert_eq!(session, before);
    }

    #[test]
    fn known_name_activates_the_page() {
        let (mut navigator, mut session) = started();
        assert!(navigator.activate_by_name(&mut session, "ngo-dashboard"));
        assert!(navigator.is_active(ViewId::NgoDashboard));
    }

    #[test]
    fn back_prefers_the_role_dashboard() {
        let (mut navigator, mut session) = started();
        navigator.activate(&mut session, ViewId::Login);
        session.role = Some(Role::Donor);

        assert_eq!(navigator.go_back(&mut session), ViewId::DonorDashboard);
        assert!(navigator.is_active(ViewId::DonorDashboard));
    }

    #[test]
    fn back_without_role_returns_to_previous_page() {
        let (mut navigator, mut session) = started();
        navigator.activate(&mut session, ViewId::Login);
        navigator.activate(&mut session, ViewId::Register);
        assert_eq!(session.last_view, Some(ViewId::Login));

        assert_eq!(navigator.go_back(&mut session), ViewId::Login);
        assert!(navigator.is_active(ViewId::Login));
    }

    #[test]
    fn back_with_empty_session_lands_on_landing() {
        let mut navigator = Navigator::new();
        let mut session = Session::new();
        assert_eq!(navigator.go_back(&mut session), ViewId::Landing);
        assert!(navigator.is_active(ViewId::Landing));
    }

    #[test]
    fn back_on_role_dashboard_is_idempotent() {
        let (mut navigator, mut session) = started();
        session.role = Some(Role::Facility);
        navigator.go_back(&mut session);
        let after_first = session.clone();

        navigator.go_back(&mut session);
        assert!(navigator.is_active(ViewId::FacilityDashboard));
        assert_eq!(session, after_first);
    }

    #[test]
    fn select_role_sets_role_and_opens_registration() {
        let (mut navigator, mut session) = started();
        navigator.select_role(&mut session, Role::Ngo);
        assert_eq!(session.role, Some(Role::Ngo));
        assert!(navigator.is_active(ViewId::Register));
        assert_eq!(session.last_view, Some(ViewId::Landing));
    }

    #[test]
    fn page_changes_are_logged() {
        let mut collector = DiagnosticsCollector::new(BufferCapacity::default());
        let (mut navigator, mut session) = started();
        navigator.set_diagnostics(collector.handle());

        navigator.activate(&mut session, ViewId::Login);
        navigator.activate(&mut session, ViewId::Login);
        collector.process_pending();

        let changes: Vec<_> = collector
            .events()
            .filter(|e| matches!(e.kind, DiagnosticEventKind::ViewChanged { .. }))
            .collect();
        assert_eq!(changes.len(), 1);
    }
}
