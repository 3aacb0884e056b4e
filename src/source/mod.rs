// SPDX-License-Identifier: MPL-2.0
//! Remote image service access.
//!
//! The service answers `<base>/<width>x<height>/?<query>` with a redirect to a
//! concrete picture, or to a fixed placeholder when the query matches nothing.
//! [`request`] plans batches and builds URLs; [`client`] performs them.

pub mod client;
pub mod request;

pub use client::{Client, SourceSettings};
pub use request::{is_not_found, plan_batch, BatchKind, BatchRequest, DimensionRange, ImageRequest};

use iced::widget::image;

/// A picture downloaded from the service.
#[derive(Debug, Clone)]
pub struct RemoteImage {
    /// Final URL after redirects; identifies the picture.
    pub url: String,
    /// Decodable image data for the widgets.
    pub handle: image::Handle,
}

impl RemoteImage {
    #[must_use]
    pub fn new(url: impl Into<String>, handle: image::Handle) -> Self {
        Self {
            url: url.into(),
            handle,
        }
    }
}
