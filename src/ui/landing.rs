// SPDX-License-Identifier: MPL-2.0
//! Landing page: brand header, hero, role cards and language switch.

use crate::app::i18n::I18n;
use crate::branding::Labels;
use crate::session::Role;
use crate::ui::components::Choice;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use iced::{
    alignment::{Horizontal, Vertical},
    widget::{button, pick_list, scrollable, Column, Container, Row, Space, Text},
    Element, Length,
};
use unic_langid::LanguageIdentifier;

/// Contextual data needed to render the landing page.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub labels: &'a Labels,
}

#[derive(Debug, Clone)]
pub enum Message {
    SignIn,
    GetStarted,
    SelectRole(Role),
    LanguageSelected(LanguageIdentifier),
}

#[must_use]
#[allow(clippy::needless_pass_by_value)]
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let content = Column::new()
        .width(Length::Fill)
        .spacing(spacing::XL)
        .padding(spacing::LG)
        .push(header(&ctx))
        .push(hero(&ctx))
        .push(role_cards(&ctx));

    scrollable(content).into()
}

fn header<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let languages = Choice::list(ctx.i18n.available_locales(), ToString::to_string);
    let current = languages
        .iter()
        .find(|c| &c.value == ctx.i18n.current_locale())
        .cloned();

    let language = pick_list(languages, current, |choice: Choice<LanguageIdentifier>| {
        Message::LanguageSelected(choice.value)
    })
    .width(Length::Fixed(sizing::LANGUAGE_PICKER_WIDTH))
    .text_size(typography::BODY_SM);

    Row::new()
        .align_y(Vertical::Center)
        .spacing(spacing::SM)
        .push(Text::new(ctx.labels.platform_title.as_str()).size(typography::TITLE_MD))
        .push(Space::new().width(Length::Fill))
        .push(Text::new(ctx.i18n.tr("landing-language")).size(typography::BODY_SM))
        .push(language)
        .push(button(Text::new(ctx.i18n.tr("landing-sign-in"))).on_press(Message::SignIn))
        .into()
}

fn hero<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let title = ctx
        .labels
        .hero_lines()
        .fold(Column::new().align_x(Horizontal::Center), |col, line| {
            col.push(Text::new(line).size(typography::HERO))
        });

    Column::new()
        .width(Length::Fill)
        .align_x(Horizontal::Center)
        .spacing(spacing::MD)
        .push(title)
        .push(Text::new(ctx.labels.tagline.as_str()).size(typography::BODY_LG))
        .push(
            button(Text::new(ctx.i18n.tr("landing-get-started")).size(typography::BODY_LG))
                .padding([spacing::XS, spacing::LG])
                .style(styles::button::primary)
                .on_press(Message::GetStarted),
        )
        .into()
}

fn role_cards<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let cards = Role::ALL
        .into_iter()
        .fold(Row::new().spacing(spacing::LG), |row, role| {
            row.push(role_card(ctx, role))
        });

    Column::new()
        .width(Length::Fill)
        .align_x(Horizontal::Center)
        .spacing(spacing::MD)
        .push(Text::new(ctx.i18n.tr("landing-choose-role")).size(typography::TITLE_SM))
        .push(cards)
        .into()
}

fn role_card<'a>(ctx: &ViewContext<'a>, role: Role) -> Element<'a, Message> {
    let description = match role {
        Role::Donor => "landing-donor-description",
        Role::Ngo => "landing-ngo-description",
        Role::Facility => "landing-facility-description",
    };

    let body = Column::new()
        .spacing(spacing::SM)
        .push(Text::new(ctx.labels.card_title(role)).size(typography::TITLE_SM))
        .push(Text::new(ctx.i18n.tr(description)).size(typography::BODY))
        .push(
            button(Text::new(ctx.i18n.tr("landing-join")))
                .style(styles::button::primary)
                .on_press(Message::SelectRole(role)),
        );

    Container::new(body)
        .width(Length::Fixed(sizing::ROLE_CARD_WIDTH))
        .padding(spacing::MD)
        .style(styles::container::card)
        .into()
}
