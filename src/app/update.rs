// SPDX-License-Identifier: MPL-2.0
//! Routes page messages into portal actions.

use super::config::{self, Config};
use super::i18n::I18n;
use super::Message;
use crate::navigation::ViewId;
use crate::notifications::Severity;
use crate::portal::Portal;
use crate::ui::{auth, dashboard, landing, modal};
use iced::Task;
use std::path::PathBuf;
use unic_langid::LanguageIdentifier;

/// Mutable application state an update may touch.
pub struct UpdateContext<'a> {
    pub portal: &'a mut Portal,
    pub i18n: &'a mut I18n,
    pub config: &'a mut Config,
    pub config_dir: Option<PathBuf>,
}

pub fn handle_landing(ctx: &mut UpdateContext<'_>, message: landing::Message) -> Task<Message> {
    match message {
        landing::Message::SignIn => ctx.portal.navigate(ViewId::Login),
        landing::Message::GetStarted => ctx.portal.navigate(ViewId::Register),
        landing::Message::SelectRole(role) => ctx.portal.select_role(role),
        landing::Message::LanguageSelected(locale) => switch_language(ctx, locale),
    }
    Task::none()
}

pub fn handle_auth(ctx: &mut UpdateContext<'_>, message: auth::Message) -> Task<Message> {
    match message {
        auth::Message::Back => {
            ctx.portal.go_back();
        }
        auth::Message::ShowLogin => ctx.portal.navigate(ViewId::Login),
        auth::Message::ShowRegister => ctx.portal.navigate(ViewId::Register),
        auth::Message::Edit(edit) => ctx.portal.edit(edit),
        auth::Message::SubmitLogin => ctx.portal.login(),
        auth::Message::SubmitRegistration => ctx.portal.register(),
    }
    Task::none()
}

pub fn handle_dashboard(
    ctx: &mut UpdateContext<'_>,
    message: dashboard::Message,
) -> Task<Message> {
    match message {
        dashboard::Message::ShowSection(role, section) => {
            ctx.portal.show_section(role, section);
        }
        dashboard::Message::Logout => ctx.portal.logout(),
        dashboard::Message::Edit(edit) => ctx.portal.edit(edit),
        dashboard::Message::SubmitDonation => ctx.portal.add_donation(),
        dashboard::Message::SubmitRequest => ctx.portal.request_supplies(),
        dashboard::Message::OpenAllocate => ctx.portal.open_allocate_modal(),
    }
    Task::none()
}

pub fn handle_modal(ctx: &mut UpdateContext<'_>, message: modal::Message) -> Task<Message> {
    match message {
        modal::Message::Edit(edit) => ctx.portal.edit(edit),
        modal::Message::Submit => ctx.portal.allocate(),
        modal::Message::Close(id) => ctx.portal.close_modal(id),
    }
    Task::none()
}

/// Applies the new locale and remembers it in the config file.
fn switch_language(ctx: &mut UpdateContext<'_>, locale: LanguageIdentifier) {
    if !ctx.i18n.set_locale(locale.clone()) {
        return;
    }
    ctx.config.general.language = Some(locale.to_string());
    if let Err(err) = config::save_with_override(ctx.config, ctx.config_dir.clone()) {
        ctx.portal.log_error(format!("saving language: {err}"));
        ctx.portal.notify(
            Severity::Warning,
            "notification-warning-title",
            "notification-config-save-error",
        );
    }
}
