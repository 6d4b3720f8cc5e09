// SPDX-License-Identifier: MPL-2.0
//! Labeled form inputs.

use super::Choice;
use crate::ui::design_tokens::{spacing, typography};
use iced::widget::{pick_list, text_input, Column, Text};
use iced::{Element, Length};

/// Single-line text input with a caption above it.
pub fn text<'a, M: Clone + 'a>(
    label: String,
    value: &'a str,
    on_input: impl Fn(String) -> M + 'a,
) -> Element<'a, M> {
    input(label, value, false, on_input)
}

/// Masked input for passwords.
pub fn secret<'a, M: Clone + 'a>(
    label: String,
    value: &'a str,
    on_input: impl Fn(String) -> M + 'a,
) -> Element<'a, M> {
    input(label, value, true, on_input)
}

fn input<'a, M: Clone + 'a>(
    label: String,
    value: &'a str,
    secure: bool,
    on_input: impl Fn(String) -> M + 'a,
) -> Element<'a, M> {
    Column::new()
        .spacing(spacing::XXS)
        .push(Text::new(label).size(typography::BODY_SM))
        .push(
            text_input("", value)
                .on_input(on_input)
                .secure(secure)
                .padding(spacing::XS)
                .size(typography::BODY),
        )
        .into()
}

/// Drop-down list over translated choices.
pub fn choice<'a, T, M>(
    label: String,
    placeholder: String,
    options: Vec<Choice<T>>,
    selected: Option<T>,
    on_select: impl Fn(T) -> M + 'a,
) -> Element<'a, M>
where
    T: Clone + PartialEq + 'a,
    M: Clone + 'a,
{
    let selected = selected.and_then(|value| options.iter().find(|c| c.value == value).cloned());

    Column::new()
        .spacing(spacing::XXS)
        .push(Text::new(label).size(typography::BODY_SM))
        .push(
            pick_list(options, selected, move |choice: Choice<T>| {
                on_select(choice.value)
            })
            .placeholder(placeholder)
            .padding(spacing::XS)
            .text_size(typography::BODY)
            .width(Length::Fill),
        )
        .into()
}
