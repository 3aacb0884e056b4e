// SPDX-License-Identifier: MPL-2.0
//! This module handles the application's configuration, loaded from a
//! user-edited `settings.toml` file.
//!
//! # Configuration Sections
//!
//! The configuration is organized into logical sections:
//! - `[general]` - Language and theme mode
//! - `[gallery]` - Batch sizes, scroll threshold and search debounce
//! - `[source]` - Remote image service endpoints and image dimensions
//!
//! Every field is optional; missing values fall back to [`defaults`].
//!
//! # Path Resolution
//!
//! The config file location can be customized for testing or portable deployments:
//! 1. Use `load_from_path()` with explicit path
//! 2. Pass `--config-dir` on the command line
//! 3. Set `ICED_GALLERY_CONFIG_DIR` environment variable
//! 4. Falls back to platform-specific config directory
//!
//! # Examples
//!
//! ```no_run
//! use iced_gallery::app::config::{self, Config};
//!
//! // Load existing configuration (returns tuple with optional warning)
//! let (config, warning) = config::load();
//! if let Some(key) = warning {
//!     eprintln!("settings ignored: {key}");
//! }
//!
//! let batch = config.gallery.initial_batch_size;
//! ```

pub mod defaults;

pub use defaults::*;

use crate::app::paths;
use crate::error::Result;
use crate::ui::theming::ThemeMode;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "settings.toml";

// =============================================================================
// Section Structs
// =============================================================================

/// General application settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GeneralConfig {
    /// UI language code (e.g., "en-US", "fr").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,

    /// Application theme mode (light, dark, or system).
    #[serde(
        default = "default_theme_mode",
        deserialize_with = "deserialize_theme_mode"
    )]
    pub theme_mode: ThemeMode,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            language: None,
            theme_mode: default_theme_mode(),
        }
    }
}

/// Gallery behaviour settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GalleryConfig {
    /// Images fetched on startup and after each settled search.
    #[serde(
        default = "default_initial_batch_size",
        skip_serializing_if = "Option::is_none"
    )]
    pub initial_batch_size: Option<usize>,

    /// Images fetched each time the user scrolls near the bottom.
    #[serde(
        default = "default_scroll_batch_size",
        skip_serializing_if = "Option::is_none"
    )]
    pub scroll_batch_size: Option<usize>,

    /// Images fetched when a search has no match.
    #[serde(
        default = "default_fallback_batch_size",
        skip_serializing_if = "Option::is_none"
    )]
    pub fallback_batch_size: Option<usize>,

    /// Query used for the no-match fallback batch.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fallback_query: Option<String>,

    /// Distance from the bottom (pixels) that triggers loading more images.
    #[serde(
        default = "default_scroll_threshold_px",
        skip_serializing_if = "Option::is_none"
    )]
    pub scroll_threshold_px: Option<f32>,

    /// Quiet period after typing before a search runs (milliseconds).
    #[serde(
        default = "default_search_debounce_ms",
        skip_serializing_if = "Option::is_none"
    )]
    pub search_debounce_ms: Option<u64>,
}

impl Default for GalleryConfig {
    fn default() -> Self {
        Self {
            initial_batch_size: default_initial_batch_size(),
            scroll_batch_size: default_scroll_batch_size(),
            fallback_batch_size: default_fallback_batch_size(),
            fallback_query: Some(DEFAULT_FALLBACK_QUERY.to_string()),
            scroll_threshold_px: default_scroll_threshold_px(),
            search_debounce_ms: default_search_debounce_ms(),
        }
    }
}

/// Remote image service settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SourceConfig {
    /// Base URL the `<width>x<height>/?<query>` path is appended to.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base_url: Option<String>,

    /// URL prefix the service redirects to when nothing matches.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub not_found_prefix: Option<String>,

    /// Smallest requested image edge in pixels.
    #[serde(
        default = "default_min_dimension",
        skip_serializing_if = "Option::is_none"
    )]
    pub min_dimension: Option<u32>,

    /// Largest requested image edge in pixels.
    #[serde(
        default = "default_max_dimension",
        skip_serializing_if = "Option::is_none"
    )]
    pub max_dimension: Option<u32>,

    /// Per-request timeout in seconds.
    #[serde(
        default = "default_request_timeout_secs",
        skip_serializing_if = "Option::is_none"
    )]
    pub request_timeout_secs: Option<u64>,
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            base_url: Some(DEFAULT_SOURCE_BASE_URL.to_string()),
            not_found_prefix: Some(DEFAULT_NOT_FOUND_PREFIX.to_string()),
            min_dimension: default_min_dimension(),
            max_dimension: default_max_dimension(),
            request_timeout_secs: default_request_timeout_secs(),
        }
    }
}

// =============================================================================
// Main Config Struct (Sectioned)
// =============================================================================

/// Application configuration with logical sections.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Config {
    /// General application settings.
    #[serde(default)]
    pub general: GeneralConfig,

    /// Gallery behaviour settings.
    #[serde(default)]
    pub gallery: GalleryConfig,

    /// Remote image service settings.
    #[serde(default)]
    pub source: SourceConfig,
}

// =============================================================================
// Default Value Functions
// =============================================================================

fn default_theme_mode() -> ThemeMode {
    ThemeMode::System
}

fn default_initial_batch_size() -> Option<usize> {
    Some(DEFAULT_INITIAL_BATCH_SIZE)
}

fn default_scroll_batch_size() -> Option<usize> {
    Some(DEFAULT_SCROLL_BATCH_SIZE)
}

fn default_fallback_batch_size() -> Option<usize> {
    Some(DEFAULT_FALLBACK_BATCH_SIZE)
}

fn default_scroll_threshold_px() -> Option<f32> {
    Some(DEFAULT_SCROLL_THRESHOLD_PX)
}

fn default_search_debounce_ms() -> Option<u64> {
    Some(DEFAULT_SEARCH_DEBOUNCE_MS)
}

fn default_min_dimension() -> Option<u32> {
    Some(DEFAULT_MIN_DIMENSION)
}

fn default_max_dimension() -> Option<u32> {
    Some(DEFAULT_MAX_DIMENSION)
}

fn default_request_timeout_secs() -> Option<u64> {
    Some(DEFAULT_REQUEST_TIMEOUT_SECS)
}

fn deserialize_theme_mode<'de, D>(deserializer: D) -> std::result::Result<ThemeMode, D::Error>
where
    D: serde::Deserializer<'de>,
{
    use serde::de::Error;

    let raw = String::deserialize(deserializer)?;
    match raw.to_lowercase().as_str() {
        "light" => Ok(ThemeMode::Light),
        "dark" => Ok(ThemeMode::Dark),
        "system" => Ok(ThemeMode::System),
        other => Err(D::Error::custom(format!("invalid theme_mode: {}", other))),
    }
}

// =============================================================================
// Config Path Resolution
// =============================================================================

/// Returns the config file path with an optional override.
fn get_config_path_with_override(base_dir: Option<PathBuf>) -> Option<PathBuf> {
    paths::get_app_config_dir_with_override(base_dir).map(|mut path| {
        path.push(CONFIG_FILE);
        path
    })
}

// =============================================================================
// Load Functions
// =============================================================================

/// Loads the configuration from the default path.
///
/// Returns a tuple of (config, optional_warning). If loading fails, returns
/// default config with a warning key explaining what went wrong.
pub fn load() -> (Config, Option<String>) {
    load_with_override(None)
}

/// Loads the configuration from a custom directory.
pub fn load_with_override(base_dir: Option<PathBuf>) -> (Config, Option<String>) {
    if let Some(path) = get_config_path_with_override(base_dir) {
        if path.exists() {
            match load_from_path(&path) {
                Ok(config) => return (config, None),
                Err(err) => {
                    tracing::warn!("Ignoring {}: {}", path.display(), err);
                    return (
                        Config::default(),
                        Some("notification-config-load-error".to_string()),
                    );
                }
            }
        }
    }
    (Config::default(), None)
}

/// Loads configuration from a specific path.
pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    let config: Config = toml::from_str(&content)?;
    Ok(config)
}

// =============================================================================
// Tests
// =============================================================================
