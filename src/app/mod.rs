// SPDX-License-Identifier: MPL-2.0
//! Application root state and the Iced event loop.
//!
//! The `App` struct owns the portal (session, navigation, notifications,
//! forms) alongside localization, the loaded configuration and the activity
//! log, and translates page messages into portal actions.

pub mod config;
pub mod i18n;
mod message;
pub mod paths;
mod subscription;
mod update;
mod view;

pub use message::{Flags, Message};

use crate::branding::{Branding, Labels};
use crate::diagnostics::DiagnosticsCollector;
use crate::notifications::{NotificationMessage, Severity};
use crate::portal::Portal;
use crate::ui::theming::ThemeMode;
use config::Config;
use i18n::I18n;
use iced::{window, Element, Subscription, Task, Theme};
use std::fmt;
use std::path::PathBuf;

/// Root Iced application state.
pub struct App {
    pub i18n: I18n,
    portal: Portal,
    config: Config,
    /// Explicit config directory, when one was passed in the flags.
    config_dir: Option<PathBuf>,
    labels: Labels,
    theme_mode: ThemeMode,
    diagnostics: DiagnosticsCollector,
    /// Where the activity report is written, if requested.
    activity_log: Option<PathBuf>,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("active_view", &self.portal.active_view())
            .field("locale", self.i18n.current_locale())
            .finish_non_exhaustive()
    }
}

pub const WINDOW_DEFAULT_HEIGHT: u32 = 760;
pub const WINDOW_DEFAULT_WIDTH: u32 = 1100;
pub const MIN_WINDOW_HEIGHT: u32 = 560;
pub const MIN_WINDOW_WIDTH: u32 = 820;

/// Builds the window settings.
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(iced::Size::new(
            MIN_WINDOW_WIDTH as f32,
            MIN_WINDOW_HEIGHT as f32,
        )),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // iced requires an `Fn` boot closure; the flags are consumed on the first call.
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state.borrow_mut().take().unwrap_or_default();
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl App {
    /// Loads the configuration, resolves locale and labels, and shows the
    /// landing page. A config file that cannot be read is reported with a
    /// warning notification and its cause goes to stderr and the activity log.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let (config, config_error) = config::load_with_override(flags.config_dir.clone());
        let i18n = I18n::new(flags.lang, &config);
        let diagnostics = DiagnosticsCollector::default();

        let mut portal = Portal::new();
        portal.set_diagnostics(diagnostics.handle());
        if let Some(err) = config_error {
            eprintln!("Ignoring {}: {err}", config::CONFIG_FILE);
            portal.log_error(format!("loading {}: {err}", config::CONFIG_FILE));
            portal.notify(
                Severity::Warning,
                "notification-warning-title",
                config::LOAD_ERROR_KEY,
            );
        }

        let mut app = App {
            i18n,
            labels: Branding::resolve(&config.branding),
            theme_mode: config.general.theme_mode,
            config,
            config_dir: flags.config_dir,
            portal,
            diagnostics,
            activity_log: flags.activity_log,
        };
        app.record_activity();

        (app, Task::none())
    }

    fn title(&self) -> String {
        self.labels.platform_title.clone()
    }

    fn theme(&self) -> Theme {
        self.theme_mode.theme()
    }

    fn subscription(&self) -> Subscription<Message> {
        subscription::create_tick_subscription(self.portal.presenter().has_pending_dismissal())
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        let mut ctx = update::UpdateContext {
            portal: &mut self.portal,
            i18n: &mut self.i18n,
            config: &mut self.config,
            config_dir: self.config_dir.clone(),
        };

        let task = match message {
            Message::Landing(msg) => update::handle_landing(&mut ctx, msg),
            Message::Auth(msg) => update::handle_auth(&mut ctx, msg),
            Message::Dashboard(msg) => update::handle_dashboard(&mut ctx, msg),
            Message::Modal(msg) => update::handle_modal(&mut ctx, msg),
            Message::Notification(NotificationMessage::Dismiss(id)) => {
                ctx.portal.dismiss_notification(id);
                Task::none()
            }
            Message::Tick(_) => {
                ctx.portal.tick();
                Task::none()
            }
        };

        self.record_activity();
        task
    }

    /// Drains new activity events and rewrites the activity report when a
    /// log file was requested. A failed write is reported once on stderr
    /// and stops further writes.
    fn record_activity(&mut self) {
        if self.diagnostics.process_pending() == 0 {
            return;
        }
        if let Some(path) = &self.activity_log {
            if let Err(err) = self.diagnostics.export_to_file(path) {
                eprintln!("Cannot write activity log {}: {err}", path.display());
                self.activity_log = None;
            }
        }
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            i18n: &self.i18n,
            labels: &self.labels,
            portal: &self.portal,
        })
    }

    /// The coordination state behind the window.
    #[must_use]
    pub fn portal(&self) -> &Portal {
        &self.portal
    }

    /// Activity recorded since startup.
    #[must_use]
    pub fn diagnostics(&self) -> &DiagnosticsCollector {
        &self.diagnostics
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diagnostics::DiagnosticEventKind;
    use crate::forms::Edit;
    use crate::navigation::{ModalId, Section, ViewId};
    use crate::session::Role;
    use crate::ui::{auth, dashboard, landing, modal};
    use std::fs;
    use tempfile::{tempdir, TempDir};

    fn app() -> (App, TempDir) {
        let dir = tempdir().expect("temp dir");
        let (app, _) = App::new(Flags {
            lang: Some("en-US".to_string()),
            config_dir: Some(dir.path().to_path_buf()),
            activity_log: None,
        });
        (app, dir)
    }

    #[test]
    fn starts_on_landing_with_default_title() {
        let (app, _dir) = app();
        assert_eq!(app.portal().active_view(), ViewId::Landing);
        assert_eq!(app.title(), "MedSync");
        assert!(!app.portal().presenter().is_visible());
    }

    #[test]
    fn branding_override_changes_title() {
        let dir = tempdir().expect("temp dir");
        fs::write(
            dir.path().join(config::CONFIG_FILE),
            "[branding]\nplatform_title = \"MedSync Nord\"\n",
        )
        .expect("write config");

        let (app, _) = App::new(Flags {
            lang: None,
            config_dir: Some(dir.path().to_path_buf()),
            activity_log: None,
        });
        assert_eq!(app.title(), "MedSync Nord");
    }

    #[test]
    fn corrupt_config_shows_warning() {
        let dir = tempdir().expect("temp dir");
        fs::write(dir.path().join(config::CONFIG_FILE), "[general\n").expect("write");

        let (app, _) = App::new(Flags {
            lang: None,
            config_dir: Some(dir.path().to_path_buf()),
            activity_log: None,
        });
        let shown = app.portal().presenter().visible().expect("warning shown");
        assert_eq!(shown.severity(), Severity::Warning);
        assert_eq!(shown.message(), config::LOAD_ERROR_KEY);

        let cause = app.diagnostics().events().find_map(|e| match &e.kind {
            DiagnosticEventKind::Error { message } => Some(message.clone()),
            _ => None,
        });
        let cause = cause.expect("parse error logged");
        assert!(cause.starts_with("loading settings.toml: Config Error:"), "{cause}");
    }

    #[test]
    fn landing_buttons_navigate() {
        let (mut app, _dir) = app();
        let _ = app.update(Message::Landing(landing::Message::SignIn));
        assert_eq!(app.portal().active_view(), ViewId::Login);

        let _ = app.update(Message::Auth(auth::Message::ShowRegister));
        assert_eq!(app.portal().active_view(), ViewId::Register);

        let _ = app.update(Message::Auth(auth::Message::Back));
        assert_eq!(app.portal().active_view(), ViewId::Login);
    }

    #[test]
    fn role_card_opens_prefilled_registration() {
        let (mut app, _dir) = app();
        let _ = app.update(Message::Landing(landing::Message::SelectRole(Role::Facility)));

        assert_eq!(app.portal().active_view(), ViewId::Register);
        assert_eq!(app.portal().forms().registration.role, Some(Role::Facility));
    }

    #[test]
    fn full_ngo_journey() {
        let (mut app, _dir) = app();
        let _ = app.update(Message::Landing(landing::Message::SelectRole(Role::Ngo)));
        for edit in [
            Edit::RegisterName("Relief".into()),
            Edit::RegisterEmail("hq@relief.org".into()),
            Edit::RegisterPhone("555".into()),
            Edit::RegisterPassword("pw".into()),
        ] {
            let _ = app.update(Message::Auth(auth::Message::Edit(edit)));
        }
        let _ = app.update(Message::Auth(auth::Message::SubmitRegistration));
        assert_eq!(app.portal().active_view(), ViewId::NgoDashboard);

        let _ = app.update(Message::Dashboard(dashboard::Message::ShowSection(
            Role::Ngo,
            Section::Inventory,
        )));
        let _ = app.update(Message::Dashboard(dashboard::Message::OpenAllocate));
        assert!(app.portal().modals().is_open(ModalId::Allocate));

        let _ = app.update(Message::Modal(modal::Message::Close(ModalId::Allocate)));
        assert!(!app.portal().modals().is_open(ModalId::Allocate));

        let _ = app.update(Message::Dashboard(dashboard::Message::Logout));
        assert_eq!(app.portal().active_view(), ViewId::Landing);
        assert!(app.portal().session().user.is_none());
    }

    #[test]
    fn toast_close_button_hides_notification() {
        let (mut app, _dir) = app();
        let _ = app.update(Message::Auth(auth::Message::SubmitLogin));
        let id = app.portal().presenter().visible().expect("error shown").id();

        let _ = app.update(Message::Notification(NotificationMessage::Dismiss(id)));
        assert!(!app.portal().presenter().is_visible());
    }

    #[test]
    fn language_switch_is_saved() {
        let (mut app, dir) = app();
        let fr: unic_langid::LanguageIdentifier = "fr".parse().unwrap();
        let _ = app.update(Message::Landing(landing::Message::LanguageSelected(fr.clone())));

        assert_eq!(app.i18n.current_locale(), &fr);
        let saved = config::load_from_path(&dir.path().join(config::CONFIG_FILE))
            .expect("config saved");
        assert_eq!(saved.general.language.as_deref(), Some("fr"));
    }

    #[test]
    fn navigation_is_recorded_in_diagnostics() {
        let (mut app, _dir) = app();
        let _ = app.update(Message::Landing(landing::Message::SignIn));

        assert!(app.diagnostics().events().any(|e| e.kind
            == DiagnosticEventKind::ViewChanged {
                from: Some(ViewId::Landing),
                to: ViewId::Login,
            }));
    }

    #[test]
    fn failed_language_save_still_switches_and_warns() {
        let dir = tempdir().expect("temp dir");
        let blocker = dir.path().join("not-a-dir");
        fs::write(&blocker, "").expect("write blocker");
        let (mut app, _) = App::new(Flags {
            lang: Some("en-US".to_string()),
            config_dir: Some(blocker),
            activity_log: None,
        });

        let fr: unic_langid::LanguageIdentifier = "fr".parse().unwrap();
        let _ = app.update(Message::Landing(landing::Message::LanguageSelected(fr.clone())));

        assert_eq!(app.i18n.current_locale(), &fr);
        let shown = app.portal().presenter().visible().expect("warning shown");
        assert_eq!(shown.severity(), Severity::Warning);
        assert_eq!(shown.message(), "notification-config-save-error");
        assert!(app.diagnostics().events().any(|e| matches!(
            &e.kind,
            DiagnosticEventKind::Error { message } if message.starts_with("saving language: I/O Error:")
        )));
    }

    #[test]
    fn activity_log_is_written_after_updates() {
        let (mut app, dir) = app();
        let log = dir.path().join("activity.json");
        app.activity_log = Some(log.clone());

        let _ = app.update(Message::Landing(landing::Message::SignIn));
        let _ = app.update(Message::Auth(auth::Message::SubmitLogin));

        let report: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(&log).expect("log written")).expect("json");
        let types: Vec<_> = report["events"]
            .as_array()
            .expect("events")
            .iter()
            .map(|e| e["type"].as_str().unwrap_or_default().to_string())
            .collect();
        assert!(types.contains(&"view_changed".to_string()));
        assert!(types.contains(&"warning".to_string()));
        assert!(types.contains(&"notification_shown".to_string()));
    }

    #[test]
    fn unwritable_activity_log_is_dropped() {
        let (mut app, dir) = app();
        app.activity_log = Some(dir.path().join("missing").join("activity.json"));

        let _ = app.update(Message::Landing(landing::Message::SignIn));

        assert!(app.activity_log.is_none());
        assert_eq!(app.portal().active_view(), ViewId::Login);
    }
}
