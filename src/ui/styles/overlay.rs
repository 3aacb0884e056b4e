// SPDX-License-Identifier: MPL-2.0
//! Overlay styles for the full-screen viewer.

use crate::ui::design_tokens::{
    opacity,
    palette::{BLACK, WHITE},
};
use iced::widget::container;
use iced::{Background, Color, Theme};

/// Dimmed backdrop covering the gallery while the viewer is open.
#[must_use]
pub fn backdrop(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(Color {
            a: opacity::BACKDROP,
            ..BLACK
        })),
        text_color: Some(WHITE),
        ..Default::default()
    }
}
