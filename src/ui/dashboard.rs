// SPDX-License-Identifier: MPL-2.0
//! Role dashboards: sidebar of sections plus the active section's content.

use crate::app::i18n::I18n;
use crate::forms::{
    DonationForm, Edit, Forms, ItemCondition, Priority, SupplyCategory, SupplyRequestForm,
};
use crate::navigation::{sections_for, DashboardSections, Section};
use crate::session::{Role, Session};
use crate::ui::components::{field, Choice};
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use iced::{
    widget::{button, scrollable, Column, Container, Row, Space, Text},
    Element, Length,
};

/// Contextual data needed to render a dashboard.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub role: Role,
    pub session: &'a Session,
    pub sections: &'a DashboardSections,
    pub forms: &'a Forms,
}

#[derive(Debug, Clone)]
pub enum Message {
    ShowSection(Role, Section),
    Logout,
    Edit(Edit),
    SubmitDonation,
    SubmitRequest,
    OpenAllocate,
}

#[must_use]
#[allow(clippy::needless_pass_by_value)]
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let active = ctx.sections.active(ctx.role);

    let content: Element<'_, Message> = match active {
        Section::Overview => overview(&ctx),
        Section::AddDonation => donation_form(ctx.i18n, &ctx.forms.donation),
        Section::RequestSupplies => request_form(ctx.i18n, &ctx.forms.supply_request),
        Section::Inventory => inventory(ctx.i18n),
        Section::MyDonations | Section::Requests | Section::Allocations | Section::MyRequests => {
            empty_list(ctx.i18n, active)
        }
    };

    Row::new()
        .push(sidebar(&ctx, active))
        .push(
            scrollable(
                Container::new(content)
                    .width(Length::Fill)
                    .padding(spacing::LG),
            )
            .width(Length::Fill)
            .height(Length::Fill),
        )
        .into()
}

fn sidebar<'a>(ctx: &ViewContext<'a>, active: Section) -> Element<'a, Message> {
    let i18n = ctx.i18n;
    let welcome = match &ctx.session.user {
        Some(user) => i18n.tr_with_args("dashboard-welcome", &[("name", user.name.as_str())]),
        None => i18n.tr("dashboard-guest"),
    };

    let items = sections_for(ctx.role).iter().fold(
        Column::new().spacing(spacing::XXS),
        |col, &section| {
            col.push(
                button(Text::new(i18n.tr(section.label_key())).size(typography::BODY))
                    .width(Length::Fill)
                    .padding(spacing::XS)
                    .style(styles::button::sidebar_item(section == active))
                    .on_press(Message::ShowSection(ctx.role, section)),
            )
        },
    );

    let column = Column::new()
        .spacing(spacing::MD)
        .push(Text::new(i18n.tr(ctx.role.label_key())).size(typography::TITLE_SM))
        .push(Text::new(welcome).size(typography::BODY_SM))
        .push(items)
        .push(Space::new().height(Length::Fill))
        .push(
            button(Text::new(i18n.tr("dashboard-logout")))
                .width(Length::Fill)
                .on_press(Message::Logout),
        );

    Container::new(column)
        .width(Length::Fixed(sizing::SIDEBAR_WIDTH))
        .height(Length::Fill)
        .padding(spacing::MD)
        .style(styles::container::sidebar)
        .into()
}

fn heading<'a>(i18n: &I18n, section: Section) -> Text<'a> {
    Text::new(i18n.tr(section.label_key())).size(typography::TITLE_LG)
}

fn overview<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let body = match ctx.role {
        Role::Donor => "overview-donor",
        Role::Ngo => "overview-ngo",
        Role::Facility => "overview-facility",
    };

    Column::new()
        .spacing(spacing::MD)
        .push(heading(ctx.i18n, Section::Overview))
        .push(Text::new(ctx.i18n.tr(body)).size(typography::BODY_LG))
        .into()
}

fn empty_list<'a>(i18n: &I18n, section: Section) -> Element<'a, Message> {
    Column::new()
        .spacing(spacing::MD)
        .push(heading(i18n, section))
        .push(Text::new(i18n.tr("list-empty")).size(typography::BODY))
        .into()
}

fn inventory<'a>(i18n: &I18n) -> Element<'a, Message> {
    Column::new()
        .spacing(spacing::MD)
        .push(heading(i18n, Section::Inventory))
        .push(Text::new(i18n.tr("list-empty")).size(typography::BODY))
        .push(
            button(Text::new(i18n.tr("inventory-allocate")))
                .style(styles::button::primary)
                .on_press(Message::OpenAllocate),
        )
        .into()
}

fn categories(i18n: &I18n) -> Vec<Choice<SupplyCategory>> {
    Choice::list(&SupplyCategory::ALL, |c| i18n.tr(c.label_key()))
}

fn donation_form<'a>(i18n: &I18n, form: &'a DonationForm) -> Element<'a, Message> {
    let conditions = Choice::list(&ItemCondition::ALL, |c| i18n.tr(c.label_key()));
    let edit = |make: fn(String) -> Edit| move |v: String| Message::Edit(make(v));

    let fields = Column::new()
        .spacing(spacing::SM)
        .push(field::text(i18n.tr("field-item-name"), &form.name, edit(Edit::DonationName)))
        .push(field::choice(
            i18n.tr("field-category"),
            i18n.tr("field-select"),
            categories(i18n),
            form.category,
            |c| Message::Edit(Edit::DonationCategory(c)),
        ))
        .push(
            Row::new()
                .spacing(spacing::SM)
                .push(field::text(
                    i18n.tr("field-quantity"),
                    &form.quantity,
                    edit(Edit::DonationQuantity),
                ))
                .push(field::text(i18n.tr("field-unit"), &form.unit, edit(Edit::DonationUnit))),
        )
        .push(field::text(
            i18n.tr("field-location"),
            &form.location,
            edit(Edit::DonationLocation),
        ))
        .push(field::text(i18n.tr("field-expiry"), &form.expiry, edit(Edit::DonationExpiry)))
        .push(field::choice(
            i18n.tr("field-condition"),
            i18n.tr("field-select"),
            conditions,
            form.condition,
            |c| Message::Edit(Edit::DonationCondition(c)),
        ))
        .push(field::text(i18n.tr("field-notes"), &form.notes, edit(Edit::DonationNotes)))
        .push(
            button(Text::new(i18n.tr("donation-submit")))
                .style(styles::button::primary)
                .on_press(Message::SubmitDonation),
        );

    section_form(i18n, Section::AddDonation, fields)
}

fn request_form<'a>(i18n: &I18n, form: &'a SupplyRequestForm) -> Element<'a, Message> {
    let priorities = Choice::list(&Priority::ALL, |p| i18n.tr(p.label_key()));
    let edit = |make: fn(String) -> Edit| move |v: String| Message::Edit(make(v));

    let fields = Column::new()
        .spacing(spacing::SM)
        .push(field::text(i18n.tr("field-item-name"), &form.name, edit(Edit::RequestName)))
        .push(field::choice(
            i18n.tr("field-category"),
            i18n.tr("field-select"),
            categories(i18n),
            form.category,
            |c| Message::Edit(Edit::RequestCategory(c)),
        ))
        .push(field::text(
            i18n.tr("field-quantity"),
            &form.quantity,
            edit(Edit::RequestQuantity),
        ))
        .push(field::choice(
            i18n.tr("field-priority"),
            i18n.tr("field-select"),
            priorities,
            form.priority,
            |p| Message::Edit(Edit::RequestPriority(p)),
        ))
        .push(field::text(
            i18n.tr("field-department"),
            &form.department,
            edit(Edit::RequestDepartment),
        ))
        .push(field::text(i18n.tr("field-reason"), &form.reason, edit(Edit::RequestReason)))
        .push(field::text(i18n.tr("field-contact"), &form.contact, edit(Edit::RequestContact)))
        .push(
            button(Text::new(i18n.tr("request-submit")))
                .style(styles::button::primary)
                .on_press(Message::SubmitRequest),
        );

    section_form(i18n, Section::RequestSupplies, fields)
}

fn section_form<'a>(
    i18n: &I18n,
    section: Section,
    fields: Column<'a, Message>,
) -> Element<'a, Message> {
    Column::new()
        .spacing(spacing::MD)
        .push(heading(i18n, section))
        .push(
            Container::new(fields)
                .width(Length::Fixed(sizing::SECTION_FORM_WIDTH))
                .padding(spacing::LG)
                .style(styles::container::card),
        )
        .into()
}
