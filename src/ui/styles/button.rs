// SPDX-License-Identifier: MPL-2.0
//! Centralized button styles.

use crate::ui::design_tokens::{
    opacity,
    palette::{BLACK, WHITE},
    radius,
};
use iced::widget::button;
use iced::{Background, Border, Color, Theme};

/// Close button drawn over the viewer backdrop.
pub fn overlay_close(_theme: &Theme, status: button::Status) -> button::Style {
    let alpha = match status {
        button::Status::Hovered => opacity::OVERLAY_MEDIUM,
        button::Status::Pressed => opacity::OVERLAY_PRESSED,
        _ => opacity::TRANSPARENT,
    };

    button::Style {
        background: Some(Background::Color(Color { a: alpha, ..BLACK })),
        text_color: WHITE,
        border: Border {
            color: WHITE,
            width: 1.0,
            radius: radius::FULL.into(),
        },
        ..Default::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn overlay_close_darkens_on_hover() {
        let idle = overlay_close(&Theme::Dark, button::Status::Active);
        let hovered = overlay_close(&Theme::Dark, button::Status::Hovered);

        let alpha = |style: &button::Style| match style.background {
            Some(Background::Color(color)) => color.a,
            _ => 0.0,
        };
        assert!(alpha(&hovered) > alpha(&idle));
        assert_eq!(idle.text_color, WHITE);
    }
}
