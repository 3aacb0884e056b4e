// SPDX-License-Identifier: MPL-2.0
//! Shared visual infrastructure for the gallery.
//!
//! - [`widgets`] - Custom Iced widgets (loading spinner)
//! - [`styles`] - Centralized styling (buttons, containers, overlays)
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)
//! - [`theming`] - Light/Dark/System theme mode management

pub mod design_tokens;
pub mod styles;
pub mod theming;
pub mod widgets;
