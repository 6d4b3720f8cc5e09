// SPDX-License-Identifier: MPL-2.0
//! Centralized button styles.

use crate::ui::design_tokens::{
    opacity,
    palette::{self, WHITE},
    radius, shadow,
};
use iced::widget::button;
use iced::{Background, Border, Color, Theme};

/// Main call to action (submit buttons, "Get Started").
pub fn primary(_theme: &Theme, status: button::Status) -> button::Style {
    let background = match status {
        button::Status::Hovered => palette::PRIMARY_700,
        button::Status::Disabled => palette::GRAY_400,
        button::Status::Active | button::Status::Pressed => palette::PRIMARY_500,
    };
    button::Style {
        background: Some(Background::Color(background)),
        text_color: WHITE,
        border: Border {
            color: palette::PRIMARY_700,
            width: 1.0,
            radius: radius::SM.into(),
        },
        shadow: if status == button::Status::Hovered {
            shadow::MD
        } else {
            shadow::SM
        },
        snap: true,
    }
}

/// Dashboard sidebar entry; the active section is tinted with the brand color.
pub fn sidebar_item(active: bool) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |theme: &Theme, status: button::Status| {
        let text_color = theme.palette().text;
        let background = if active {
            Some(Background::Color(Color {
                a: opacity::SELECTED,
                ..palette::PRIMARY_500
            }))
        } else if status == button::Status::Hovered {
            Some(Background::Color(theme.extended_palette().background.weak.color))
        } else {
            None
        };

        button::Style {
            background,
            text_color: if active { palette::PRIMARY_500 } else { text_color },
            border: Border {
                radius: radius::SM.into(),
                ..Border::default()
            },
            shadow: iced::Shadow::default(),
            snap: true,
        }
    }
}
