// SPDX-License-Identifier: MPL-2.0
//! Container styles.

use crate::ui::design_tokens::{opacity, palette, radius};
use iced::widget::container;
use iced::{Background, Border, Color, Theme};

fn tinted(accent: Color, theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(Color {
            a: opacity::NOTICE,
            ..accent
        })),
        text_color: Some(theme.extended_palette().background.base.text),
        border: Border {
            color: accent,
            width: 1.0,
            radius: radius::MD.into(),
        },
        ..Default::default()
    }
}

/// "No results" banner.
pub fn notice(theme: &Theme) -> container::Style {
    tinted(palette::WARNING_500, theme)
}

/// Failed batch banner.
pub fn error_notice(theme: &Theme) -> container::Style {
    tinted(palette::ERROR_500, theme)
}

/// Frame around a grid thumbnail.
///
/// Derived from the active theme background so thumbnails that are still
/// decoding show a neutral tile in both light and dark modes.
pub fn thumbnail(theme: &Theme) -> container::Style {
    let weak = theme.extended_palette().background.weak.color;

    container::Style {
        background: Some(Background::Color(weak)),
        border: Border {
            radius: radius::SM.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}
