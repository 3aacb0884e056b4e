// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::gallery;
use std::time::Instant;

/// Top-level messages consumed by `App::update`. The variants forward
/// lower-level component messages while keeping a single update entrypoint.
#[derive(Debug, Clone)]
pub enum Message {
    Gallery(gallery::Message),
    /// Periodic tick for the loading spinner.
    Tick(Instant),
    /// Window close was requested (user clicked X or pressed Alt+F4).
    WindowCloseRequested(iced::window::Id),
}

/// Runtime flags passed in from the CLI to tweak startup behavior.
#[derive(Debug, Default)]
pub struct Flags {
    /// Optional locale override in BCP-47 form (e.g. `fr`, `en-US`).
    pub lang: Option<String>,
    /// Optional config directory override (for settings.toml).
    /// Takes precedence over `ICED_GALLERY_CONFIG_DIR` environment variable.
    pub config_dir: Option<String>,
}
