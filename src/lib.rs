// SPDX-License-Identifier: MPL-2.0
//! `iced_gallery` is an infinite-scrolling image gallery built with the Iced
//! GUI framework.
//!
//! Pictures come from a random image service, one batch of concurrent
//! requests at a time. A debounced search box narrows the pictures, and a
//! full-screen viewer steps through them with the arrow keys.

#![doc(html_root_url = "https://docs.rs/iced_gallery/0.1.0")]

pub mod app;
pub mod error;
pub mod gallery;
pub mod i18n;
pub mod source;
pub mod ui;
