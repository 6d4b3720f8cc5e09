// SPDX-License-Identifier: MPL-2.0
//! The coordination portal: every user action of the application.
//!
//! `Portal` owns the session, the navigator, the notification presenter and
//! the form state, and wires them together the way each action requires.
//! It has no UI dependency beyond the presenter's clock, so whole user
//! journeys can be replayed in tests with a [`ManualClock`](crate::notifications::ManualClock).

use crate::diagnostics::{DiagnosticEventKind, DiagnosticsHandle};
use crate::forms::{Edit, FormError, Forms};
use crate::navigation::{DashboardSections, ModalId, Modals, Navigator, Section, ViewId};
use crate::notifications::{Clock, NotificationId, Presenter, Severity, SystemClock};
use crate::session::{Role, Session, User};

/// Display name given to users signing in through the demo login form.
pub const DEMO_USER_NAME: &str = "John Doe";

/// Message shown for every failed required-field check.
const REQUIRED_FIELDS_KEY: &str = "notification-required-fields";

#[derive(Debug)]
pub struct Portal<C: Clock = SystemClock> {
    session: Session,
    navigator: Navigator,
    presenter: Presenter<C>,
    forms: Forms,
    sections: DashboardSections,
    modals: Modals,
    diagnostics: Option<DiagnosticsHandle>,
}

impl Default for Portal<SystemClock> {
    fn default() -> Self {
        Self::new()
    }
}

impl Portal<SystemClock> {
    /// Creates a portal showing the landing page.
    #[must_use]
    pub fn new() -> Self {
        Self::with_clock(SystemClock)
    }
}

impl<C: Clock> Portal<C> {
    #[must_use]
    pub fn with_clock(clock: C) -> Self {
        let mut portal = Self {
            session: Session::new(),
            navigator: Navigator::new(),
            presenter: Presenter::with_clock(clock),
            forms: Forms::default(),
            sections: DashboardSections::new(),
            modals: Modals::new(),
            diagnostics: None,
        };
        portal.navigator.activate(&mut portal.session, ViewId::LANDING);
        portal
    }

    pub fn set_diagnostics(&mut self, handle: DiagnosticsHandle) {
        self.navigator.set_diagnostics(handle.clone());
        self.presenter.set_diagnostics(handle.clone());
        self.diagnostics = Some(handle);
    }

    // ---------------------------------------------------------------------
    // Accessors
    // ---------------------------------------------------------------------

    #[must_use]
    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Page currently shown.
    #[must_use]
    pub fn active_view(&self) -> ViewId {
        self.navigator.active().unwrap_or(ViewId::LANDING)
    }

    #[must_use]
    pub fn presenter(&self) -> &Presenter<C> {
        &self.presenter
    }

    #[must_use]
    pub fn forms(&self) -> &Forms {
        &self.forms
    }

    #[must_use]
    pub fn sections(&self) -> &DashboardSections {
        &self.sections
    }

    #[must_use]
    pub fn modals(&self) -> &Modals {
        &self.modals
    }

    // ---------------------------------------------------------------------
    // Navigation
    // ---------------------------------------------------------------------

    pub fn navigate(&mut self, view: ViewId) {
        self.navigator.activate(&mut self.session, view);
    }

    /// Navigates by page name; unknown names are ignored.
    pub fn navigate_by_name(&mut self, name: &str) -> bool {
        self.navigator.activate_by_name(&mut self.session, name)
    }

    pub fn go_back(&mut self) -> ViewId {
        self.navigator.go_back(&mut self.session)
    }

    /// Chooses a role from the landing page and opens registration with the
    /// role already filled in.
    pub fn select_role(&mut self, role: Role) {
        self.navigator.select_role(&mut self.session, role);
        self.forms.registration.role = Some(role);
    }

    /// Shows a sidebar section of a dashboard; foreign sections are ignored.
    pub fn show_section(&mut self, role: Role, section: Section) -> bool {
        let changed = self.sections.show(role, section);
        if changed {
            self.log(DiagnosticEventKind::SectionChanged { role, section });
        }
        changed
    }

    pub fn open_allocate_modal(&mut self) {
        self.modals.open(ModalId::Allocate);
    }

    pub fn close_modal(&mut self, id: ModalId) {
        self.modals.close(id);
    }

    // ---------------------------------------------------------------------
    // Forms
    // ---------------------------------------------------------------------

    pub fn edit(&mut self, edit: Edit) {
        self.forms.apply(edit);
    }

    /// Simulated login: any non-empty credentials sign in as a donor.
    pub fn login(&mut self) {
        match self.forms.login.validate() {
            Ok(()) => {
                let user = User {
                    name: DEMO_USER_NAME.to_string(),
                    email: self.forms.login.email.trim().to_string(),
                };
                self.sign_in(user, Role::Donor);
                self.forms.login = Default::default();
                self.presenter.notify(
                    Severity::Success,
                    "notification-login-success-title",
                    "notification-login-success",
                );
            }
            Err(err) => self.reject(
                &err,
                "notification-login-failed-title",
                "notification-login-failed",
            ),
        }
    }

    /// Creates the (simulated) account and opens the chosen role's dashboard.
    pub fn register(&mut self) {
        match self.forms.registration.validate() {
            Ok(role) => {
                let name = self.forms.registration.name.trim().to_string();
                let user = User {
                    name: name.clone(),
                    email: self.forms.registration.email.trim().to_string(),
                };
                self.sign_in(user, role);
                self.forms.registration = Default::default();
                self.presenter.notify_with_args(
                    Severity::Success,
                    "notification-register-success-title",
                    "notification-register-success",
                    vec![("name".to_string(), name)],
                );
            }
            Err(err) => self.reject(
                &err,
                "notification-register-failed-title",
                REQUIRED_FIELDS_KEY,
            ),
        }
    }

    pub fn logout(&mut self) {
        self.session.clear();
        self.modals = Modals::new();
        self.log(DiagnosticEventKind::SignedOut);
        self.navigator.activate(&mut self.session, ViewId::LANDING);
        self.presenter.notify(
            Severity::Info,
            "notification-logout-title",
            "notification-logout",
        );
    }

    pub fn add_donation(&mut self) {
        match self.forms.donation.validate() {
            Ok(()) => {
                self.presenter.notify(
                    Severity::Success,
                    "notification-donation-success-title",
                    "notification-donation-success",
                );
                self.forms.donation = Default::default();
                self.show_section(Role::Donor, Section::Overview);
            }
            Err(err) => self.reject(
                &err,
                "notification-submission-failed-title",
                REQUIRED_FIELDS_KEY,
            ),
        }
    }

    pub fn request_supplies(&mut self) {
        match self.forms.supply_request.validate() {
            Ok(()) => {
                self.presenter.notify(
                    Severity::Success,
                    "notification-request-success-title",
                    "notification-request-success",
                );
                self.forms.supply_request = Default::default();
                self.show_section(Role::Facility, Section::Overview);
            }
            Err(err) => self.reject(
                &err,
                "notification-submission-failed-title",
                REQUIRED_FIELDS_KEY,
            ),
        }
    }

    pub fn allocate(&mut self) {
        match self.forms.allocation.validate() {
            Ok(()) => {
                self.presenter.notify(
                    Severity::Success,
                    "notification-allocation-success-title",
                    "notification-allocation-success",
                );
                self.modals.close(ModalId::Allocate);
                self.forms.allocation = Default::default();
            }
            Err(err) => self.reject(
                &err,
                "notification-allocation-failed-title",
                REQUIRED_FIELDS_KEY,
            ),
        }
    }

    // ---------------------------------------------------------------------
    // Notifications
    // ---------------------------------------------------------------------

    /// Shows an application-level notification (e.g. startup warnings).
    pub fn notify(
        &mut self,
        severity: Severity,
        title: impl Into<String>,
        message: impl Into<String>,
    ) -> NotificationId {
        self.presenter.notify(severity, title, message)
    }

    /// Closes the toast with this id; stale ids are ignored.
    pub fn dismiss_notification(&mut self, id: NotificationId) -> bool {
        self.presenter.dismiss_id(id)
    }

    /// Advances timers; call periodically while a dismissal is pending.
    pub fn tick(&mut self) {
        self.presenter.tick();
    }

    // ---------------------------------------------------------------------
    // Helpers
    // ---------------------------------------------------------------------

    fn sign_in(&mut self, user: User, role: Role) {
        self.session.sign_in(user, role);
        self.log(DiagnosticEventKind::SignedIn { role });
        self.navigator.activate(&mut self.session, role.dashboard());
    }

    /// Failure path shared by every form: the page stays, an error is shown.
    fn reject(&mut self, err: &FormError, title: &str, message: &str) {
        if let Some(handle) = &self.diagnostics {
            handle.log_warning(err.to_string());
        }
        self.presenter.notify(Severity::Error, title, message);
    }

    /// Records a failure outside the forms, such as an unwritable config.
    pub fn log_error(&self, message: impl Into<String>) {
        if let Some(handle) = &self.diagnostics {
            handle.log_error(message);
        }
    }

    fn log(&self, kind: DiagnosticEventKind) {
        if let Some(handle) = &self.diagnostics {
            handle.log(kind);
        }
    }
}
