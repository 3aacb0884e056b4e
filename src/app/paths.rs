// SPDX-License-Identifier: MPL-2.0
//! Centralized path management for the configuration directory.
//!
//! # Path Resolution Order
//!
//! Paths are resolved in the following priority order:
//! 1. **Explicit override** - parameter to `_with_override()` functions (for tests)
//! 2. **CLI argument** (`--config-dir`) - set via [`init_cli_override`]
//! 3. **Environment variable** (`ICED_GALLERY_CONFIG_DIR`)
//! 4. **Platform default** - via `dirs` crate
//!
//! # Usage
//!
//! The CLI override should be initialized once at startup:
//! ```ignore
//! paths::init_cli_override(flags.config_dir);
//! ```

use std::path::PathBuf;
use std::sync::OnceLock;

/// Application name used for directory naming.
const APP_NAME: &str = "IcedGallery";

/// Environment variable to override the config directory.
pub const ENV_CONFIG_DIR: &str = "ICED_GALLERY_CONFIG_DIR";

/// Global CLI override for config directory (set once at startup).
static CLI_CONFIG_DIR: OnceLock<Option<PathBuf>> = OnceLock::new();

/// Records the `--config-dir` CLI argument.
///
/// Later calls are ignored: the first value wins for the lifetime of the process.
pub fn init_cli_override(config_dir: Option<String>) {
    if CLI_CONFIG_DIR.set(config_dir.map(PathBuf::from)).is_err() {
        tracing::debug!("config dir override already initialized");
    }
}

fn get_cli_config_dir() -> Option<PathBuf> {
    CLI_CONFIG_DIR.get().and_then(Clone::clone)
}

/// Returns the application config directory path with an optional override.
///
/// Without any override this directory holds `settings.toml`:
///    - Linux: `~/.config/IcedGallery/`
///    - macOS: `~/Library/Application Support/IcedGallery/`
///    - Windows: `C:\Users\<User>\AppData\Roaming\IcedGallery\`
///
/// Returns `None` if the config directory cannot be determined.
///
/// * `override_path` - Optional path to use instead of default. Takes highest priority.
pub fn get_app_config_dir_with_override(override_path: Option<PathBuf>) -> Option<PathBuf> {
    if let Some(path) = override_path {
        return Some(path);
    }

    if let Some(path) = get_cli_config_dir() {
        return Some(path);
    }

    if let Ok(env_path) = std::env::var(ENV_CONFIG_DIR) {
        if !env_path.is_empty() {
            return Some(PathBuf::from(env_path));
        }
    }

    dirs::config_dir().map(|mut path| {
        path.push(APP_NAME);
        path
    })
}
