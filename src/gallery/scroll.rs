// SPDX-License-Identifier: MPL-2.0
//! Scroll position tracking for infinite loading.

use iced::widget::scrollable::Viewport;

/// Geometry of the gallery scroll area at one scroll event.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ScrollMetrics {
    /// Distance scrolled from the top.
    pub offset_y: f32,
    /// Height of the visible area.
    pub viewport_height: f32,
    /// Height of the whole scrolled content.
    pub content_height: f32,
}

impl ScrollMetrics {
    #[must_use]
    pub fn from_viewport(viewport: &Viewport) -> Self {
        Self {
            offset_y: viewport.absolute_offset().y,
            viewport_height: viewport.bounds().height,
            content_height: viewport.content_bounds().height,
        }
    }

    /// Whether the bottom of the visible area is within `threshold` pixels
    /// of the end of the content.
    #[must_use]
    pub fn is_near_bottom(&self, threshold: f32) -> bool {
        self.offset_y + self.viewport_height >= self.content_height - threshold
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn metrics(offset_y: f32) -> ScrollMetrics {
        ScrollMetrics {
            offset_y,
            viewport_height: 800.0,
            content_height: 3000.0,
        }
    }

    #[test]
    fn far_from_bottom_is_not_near() {
        assert!(!metrics(0.0).is_near_bottom(500.0));
        assert!(!metrics(1699.0).is_near_bottom(500.0));
    }

    #[test]
    fn threshold_boundary_counts_as_near() {
        assert!(metrics(1700.0).is_near_bottom(500.0));
        assert!(metrics(2200.0).is_near_bottom(500.0));
    }

    #[test]
    fn short_content_is_always_near() {
        let short = ScrollMetrics {
            offset_y: 0.0,
            viewport_height: 800.0,
            content_height: 400.0,
        };
        assert!(short.is_near_bottom(0.0));
    }
}
