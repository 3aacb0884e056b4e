// SPDX-License-Identifier: MPL-2.0
//! Light/Dark/System theme resolution.

use crate::ui::design_tokens::palette;
use iced::{Color, Theme};
use serde::{Deserialize, Serialize};

/// Colors the gallery draws with outside of the stock iced palette.
#[derive(Debug, Clone)]
pub struct ColorScheme {
    /// Spinner and other accents.
    pub brand_primary: Color,
}

impl ColorScheme {
    #[must_use]
    pub fn light() -> Self {
        Self {
            brand_primary: palette::PRIMARY_500,
        }
    }

    #[must_use]
    pub fn dark() -> Self {
        Self {
            brand_primary: palette::PRIMARY_400,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    Light,
    Dark,
    #[default]
    System,
}

impl ThemeMode {
    /// Returns true if the effective theme is dark.
    /// For System mode, detects the actual system theme.
    #[must_use]
    pub fn is_dark(self) -> bool {
        match self {
            ThemeMode::Light => false,
            ThemeMode::Dark => true,
            ThemeMode::System => {
                // Detect system theme; default to dark on detection error
                !matches!(dark_light::detect(), Ok(dark_light::Mode::Light))
            }
        }
    }
}

/// Theme resolved once at startup.
#[derive(Debug, Clone)]
pub struct AppTheme {
    pub colors: ColorScheme,
    dark: bool,
}

impl AppTheme {
    #[must_use]
    pub fn new(mode: ThemeMode) -> Self {
        let dark = mode.is_dark();
        let colors = if dark {
            ColorScheme::dark()
        } else {
            ColorScheme::light()
        };

        Self { colors, dark }
    }

    /// The stock iced theme matching this one.
    #[must_use]
    pub fn iced_theme(&self) -> Theme {
        if self.dark {
            Theme::Dark
        } else {
            Theme::Light
        }
    }
}

impl Default for AppTheme {
    fn default() -> Self {
        Self::new(ThemeMode::System)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dark_scheme_uses_lighter_accent() {
        let light = ColorScheme::light().brand_primary;
        let dark = ColorScheme::dark().brand_primary;
        assert!(dark.r > light.r);
        assert!(dark.g > light.g);
    }

    #[test]
    fn explicit_modes_resolve_without_detection() {
        let light = AppTheme::new(ThemeMode::Light);
        assert_eq!(light.iced_theme(), Theme::Light);
        assert_eq!(
            light.colors.brand_primary,
            ColorScheme::light().brand_primary
        );

        let dark = AppTheme::new(ThemeMode::Dark);
        assert_eq!(dark.iced_theme(), Theme::Dark);
        assert_eq!(dark.colors.brand_primary, ColorScheme::dark().brand_primary);
    }

    #[test]
    fn system_mode_does_not_panic() {
        let _ = AppTheme::new(ThemeMode::System).iced_theme();
    }
}
