// SPDX-License-Identifier: MPL-2.0
//! Login and registration pages.

use crate::app::i18n::I18n;
use crate::forms::{Edit, LoginForm, RegistrationForm};
use crate::session::Role;
use crate::ui::components::{field, Choice};
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use iced::{
    alignment::{Horizontal, Vertical},
    widget::{button, scrollable, Column, Container, Row, Text},
    Element, Length,
};

/// Contextual data needed to render the login page.
pub struct LoginContext<'a> {
    pub i18n: &'a I18n,
    pub form: &'a LoginForm,
}

/// Contextual data needed to render the registration page.
pub struct RegisterContext<'a> {
    pub i18n: &'a I18n,
    pub form: &'a RegistrationForm,
}

#[derive(Debug, Clone)]
pub enum Message {
    Back,
    ShowLogin,
    ShowRegister,
    Edit(Edit),
    SubmitLogin,
    SubmitRegistration,
}

#[must_use]
#[allow(clippy::needless_pass_by_value)]
pub fn view_login(ctx: LoginContext<'_>) -> Element<'_, Message> {
    let i18n = ctx.i18n;
    let form = Column::new()
        .spacing(spacing::MD)
        .push(field::text(i18n.tr("field-email"), &ctx.form.email, |v| {
            Message::Edit(Edit::LoginEmail(v))
        }))
        .push(field::secret(
            i18n.tr("field-password"),
            &ctx.form.password,
            |v| Message::Edit(Edit::LoginPassword(v)),
        ))
        .push(submit(i18n.tr("login-submit"), Message::SubmitLogin))
        .push(switch_link(
            i18n.tr("login-no-account"),
            i18n.tr("login-create-account"),
            Message::ShowRegister,
        ));

    page(i18n, "login-title", "login-subtitle", form)
}

#[must_use]
#[allow(clippy::needless_pass_by_value)]
pub fn view_register(ctx: RegisterContext<'_>) -> Element<'_, Message> {
    let i18n = ctx.i18n;
    let roles = Choice::list(&Role::ALL, |role| i18n.tr(role.label_key()));

    let form = Column::new()
        .spacing(spacing::MD)
        .push(field::text(i18n.tr("field-name"), &ctx.form.name, |v| {
            Message::Edit(Edit::RegisterName(v))
        }))
        .push(field::text(i18n.tr("field-email"), &ctx.form.email, |v| {
            Message::Edit(Edit::RegisterEmail(v))
        }))
        .push(field::text(i18n.tr("field-phone"), &ctx.form.phone, |v| {
            Message::Edit(Edit::RegisterPhone(v))
        }))
        .push(field::secret(
            i18n.tr("field-password"),
            &ctx.form.password,
            |v| Message::Edit(Edit::RegisterPassword(v)),
        ))
        .push(field::choice(
            i18n.tr("field-role"),
            i18n.tr("field-select"),
            roles,
            ctx.form.role,
            |role| Message::Edit(Edit::RegisterRole(role)),
        ))
        .push(submit(i18n.tr("register-submit"), Message::SubmitRegistration))
        .push(switch_link(
            i18n.tr("register-have-account"),
            i18n.tr("register-sign-in"),
            Message::ShowLogin,
        ));

    page(i18n, "register-title", "register-subtitle", form)
}

/// Centered card with a back button, a heading and the form.
fn page<'a>(
    i18n: &I18n,
    title_key: &str,
    subtitle_key: &str,
    form: Column<'a, Message>,
) -> Element<'a, Message> {
    let card = Column::new()
        .spacing(spacing::LG)
        .push(
            Column::new()
                .spacing(spacing::XXS)
                .push(Text::new(i18n.tr(title_key)).size(typography::TITLE_LG))
                .push(Text::new(i18n.tr(subtitle_key)).size(typography::BODY)),
        )
        .push(form);

    let content = Column::new()
        .width(Length::Fill)
        .align_x(Horizontal::Center)
        .spacing(spacing::MD)
        .padding(spacing::LG)
        .push(
            Container::new(
                button(Text::new(i18n.tr("nav-back")))
                    .style(button::text)
                    .on_press(Message::Back),
            )
            .width(Length::Fill),
        )
        .push(
            Container::new(card)
                .width(Length::Fixed(sizing::AUTH_FORM_WIDTH))
                .padding(spacing::LG)
                .style(styles::container::card),
        );

    scrollable(content).into()
}

fn submit<'a>(label: String, message: Message) -> Element<'a, Message> {
    button(Text::new(label).width(Length::Fill).center())
        .width(Length::Fill)
        .padding(spacing::XS)
        .style(styles::button::primary)
        .on_press(message)
        .into()
}

fn switch_link<'a>(prompt: String, action: String, message: Message) -> Element<'a, Message> {
    Row::new()
        .spacing(spacing::XXS)
        .align_y(Vertical::Center)
        .push(Text::new(prompt).size(typography::BODY_SM))
        .push(
            button(Text::new(action).size(typography::BODY_SM))
                .padding(0)
                .style(button::text)
                .on_press(message),
        )
        .into()
}
