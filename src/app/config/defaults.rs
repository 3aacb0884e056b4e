// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! This module serves as the single source of truth for default values
//! used across the application. Constants are organized by category.
//!
//! # Categories
//!
//! - **Batches**: How many images each kind of fetch requests
//! - **Interaction**: Scroll threshold and search debounce
//! - **Source**: Remote image service endpoints and image dimensions

// ==========================================================================
// Batch Defaults
// ==========================================================================

/// Images requested when the gallery is mounted or a search settles.
pub const DEFAULT_INITIAL_BATCH_SIZE: usize = 15;

/// Images requested each time the user scrolls near the bottom.
pub const DEFAULT_SCROLL_BATCH_SIZE: usize = 5;

/// Images requested when a search returns the service's not-found page.
pub const DEFAULT_FALLBACK_BATCH_SIZE: usize = 8;

/// Query used for the not-found fallback batch.
pub const DEFAULT_FALLBACK_QUERY: &str = "cat";

/// Upper bound for any configured batch size.
pub const MAX_BATCH_SIZE: usize = 50;

// ==========================================================================
// Interaction Defaults
// ==========================================================================

/// Distance from the bottom of the content (in pixels) that triggers a fetch.
pub const DEFAULT_SCROLL_THRESHOLD_PX: f32 = 500.0;

/// Quiet period after the last keystroke before a search runs (milliseconds).
pub const DEFAULT_SEARCH_DEBOUNCE_MS: u64 = 1000;

/// Maximum allowed debounce delay (milliseconds).
pub const MAX_SEARCH_DEBOUNCE_MS: u64 = 10_000;

// ==========================================================================
// Source Defaults
// ==========================================================================

/// Base URL of the random image service; `<w>x<h>/` is appended.
pub const DEFAULT_SOURCE_BASE_URL: &str = "https://source.unsplash.com/";

/// Prefix of the URL the service redirects to when a query has no match.
pub const DEFAULT_NOT_FOUND_PREFIX: &str = "https://images.unsplash.com/source-404?";

/// Smallest requested image edge in pixels.
pub const DEFAULT_MIN_DIMENSION: u32 = 250;

/// Largest requested image edge in pixels.
pub const DEFAULT_MAX_DIMENSION: u32 = 750;

/// Per-request timeout in seconds.
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;

/// Maximum number of redirects followed per request.
pub const MAX_REDIRECTS: usize = 10;

/// User agent sent with every request.
pub const USER_AGENT: &str = concat!("IcedGallery/", env!("CARGO_PKG_VERSION"));
