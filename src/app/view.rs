// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.
//!
//! The window is a stack: the active page, the allocate dialog when it is
//! open, and the toast layer on top.

use super::i18n::I18n;
use super::Message;
use crate::branding::Labels;
use crate::navigation::{ModalId, ViewId};
use crate::notifications::Toast;
use crate::portal::Portal;
use crate::ui::{auth, dashboard, landing, modal};
use iced::{widget::Stack, Element, Length};

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub labels: &'a Labels,
    pub portal: &'a Portal,
}

/// Renders the active page with its overlays.
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let mut stack = Stack::new()
        .width(Length::Fill)
        .height(Length::Fill)
        .push(view_page(&ctx));

    if ctx.portal.modals().is_open(ModalId::Allocate) {
        stack = stack.push(
            modal::view_allocate(modal::ViewContext {
                i18n: ctx.i18n,
                form: &ctx.portal.forms().allocation,
            })
            .map(Message::Modal),
        );
    }

    stack
        .push(Toast::view_overlay(ctx.portal.presenter(), ctx.i18n).map(Message::Notification))
        .into()
}

fn view_page<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let portal = ctx.portal;
    let active = portal.active_view();

    if let Some(role) = active.dashboard_role() {
        return dashboard::view(dashboard::ViewContext {
            i18n: ctx.i18n,
            role,
            session: portal.session(),
            sections: portal.sections(),
            forms: portal.forms(),
        })
        .map(Message::Dashboard);
    }

    match active {
        ViewId::Login => auth::view_login(auth::LoginContext {
            i18n: ctx.i18n,
            form: &portal.forms().login,
        })
        .map(Message::Auth),
        ViewId::Register => auth::view_register(auth::RegisterContext {
            i18n: ctx.i18n,
            form: &portal.forms().registration,
        })
        .map(Message::Auth),
        _ => landing::view(landing::ViewContext {
            i18n: ctx.i18n,
            labels: ctx.labels,
        })
        .map(Message::Landing),
    }
}
