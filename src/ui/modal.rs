// SPDX-License-Identifier: MPL-2.0
//! Allocate dialog, drawn over a dimmed page.
//!
//! A click on the backdrop closes the dialog; clicks inside it do not.

use crate::app::i18n::I18n;
use crate::forms::{AllocationForm, Edit};
use crate::navigation::ModalId;
use crate::ui::components::field;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use iced::{
    alignment::{Horizontal, Vertical},
    widget::{button, mouse_area, opaque, Column, Container, Row, Space, Text},
    Element, Length,
};

pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub form: &'a AllocationForm,
}

#[derive(Debug, Clone)]
pub enum Message {
    Edit(Edit),
    Submit,
    Close(ModalId),
}

#[must_use]
#[allow(clippy::needless_pass_by_value)]
pub fn view_allocate(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let i18n = ctx.i18n;
    let close = Message::Close(ModalId::Allocate);

    let actions = Row::new()
        .spacing(spacing::SM)
        .push(Space::new().width(Length::Fill))
        .push(
            button(Text::new(i18n.tr("allocate-cancel")))
                .style(button::secondary)
                .on_press(close.clone()),
        )
        .push(
            button(Text::new(i18n.tr("allocate-submit")))
                .style(styles::button::primary)
                .on_press(Message::Submit),
        );

    let dialog = Column::new()
        .spacing(spacing::MD)
        .push(Text::new(i18n.tr("allocate-title")).size(typography::TITLE_MD))
        .push(field::text(
            i18n.tr("field-facility"),
            &ctx.form.facility,
            |v| Message::Edit(Edit::AllocateFacility(v)),
        ))
        .push(field::text(
            i18n.tr("field-quantity"),
            &ctx.form.quantity,
            |v| Message::Edit(Edit::AllocateQuantity(v)),
        ))
        .push(field::text(
            i18n.tr("field-notes"),
            &ctx.form.notes,
            |v| Message::Edit(Edit::AllocateNotes(v)),
        ))
        .push(actions);

    let dialog = Container::new(dialog)
        .width(Length::Fixed(sizing::MODAL_WIDTH))
        .padding(spacing::LG)
        .style(styles::container::dialog);

    let backdrop = Container::new(opaque(dialog))
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(Horizontal::Center)
        .align_y(Vertical::Center)
        .style(styles::container::backdrop);

    opaque(mouse_area(backdrop).on_press(close))
}
