// SPDX-License-Identifier: MPL-2.0
//! Planning of image batches: how many requests, which sizes, which URLs.
//!
//! Everything here is pure so it can be tested without a network or a
//! runtime; the RNG is injected by the caller.

use crate::error::{HttpError, Result};
use rand::Rng;
use reqwest::Url;

/// Why a batch is being fetched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BatchKind {
    /// Regular batch for the user's criteria. Checked for the not-found page.
    Primary,
    /// Substitute batch after a no-match search. Never checked again.
    Fallback,
}

/// One group of images requested together and applied together.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BatchRequest {
    pub query: String,
    pub count: usize,
    pub kind: BatchKind,
}

impl BatchRequest {
    #[must_use]
    pub fn primary(query: impl Into<String>, count: usize) -> Self {
        Self {
            query: query.into(),
            count,
            kind: BatchKind::Primary,
        }
    }

    #[must_use]
    pub fn fallback(query: impl Into<String>, count: usize) -> Self {
        Self {
            query: query.into(),
            count,
            kind: BatchKind::Fallback,
        }
    }

    #[must_use]
    pub fn is_fallback(&self) -> bool {
        self.kind == BatchKind::Fallback
    }
}

/// Inclusive range of requested image edge lengths, in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DimensionRange {
    min: u32,
    max: u32,
}

impl DimensionRange {
    /// Creates a range, swapping the bounds if needed and keeping them non-zero.
    #[must_use]
    pub fn new(min: u32, max: u32) -> Self {
        let (min, max) = if min <= max { (min, max) } else { (max, min) };
        Self {
            min: min.max(1),
            max: max.max(1),
        }
    }

    #[must_use]
    pub fn min(self) -> u32 {
        self.min
    }

    #[must_use]
    pub fn max(self) -> u32 {
        self.max
    }

    fn sample<R: Rng + ?Sized>(self, rng: &mut R) -> u32 {
        rng.random_range(self.min..=self.max)
    }
}

/// A single request against the image service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageRequest {
    pub width: u32,
    pub height: u32,
    pub query: String,
}

impl ImageRequest {
    /// Builds `<base_url><width>x<height>/?<query>`.
    ///
    /// The query is percent-encoded where needed; an empty query still yields
    /// the trailing `?`.
    pub fn url(&self, base_url: &str) -> Result<Url> {
        let mut base = base_url.to_string();
        if !base.ends_with('/') {
            base.push('/');
        }

        let mut url = Url::parse(&base)
            .and_then(|base| base.join(&format!("{}x{}/", self.width, self.height)))
            .map_err(|e| HttpError::InvalidUrl(e.to_string()))?;

        if url.cannot_be_a_base() {
            return Err(HttpError::InvalidUrl(base_url.to_string()).into());
        }

        url.set_query(Some(&self.query));
        Ok(url)
    }
}

/// Expands a batch into `count` requests with independently random sizes.
pub fn plan_batch<R: Rng + ?Sized>(
    rng: &mut R,
    dimensions: DimensionRange,
    batch: &BatchRequest,
) -> Vec<ImageRequest> {
    (0..batch.count)
        .map(|_| ImageRequest {
            width: dimensions.sample(rng),
            height: dimensions.sample(rng),
            query: batch.query.clone(),
        })
        .collect()
}

/// Whether a resolved URL is the service's "no match" placeholder.
#[must_use]
pub fn is_not_found(resolved_url: &str, not_found_prefix: &str) -> bool {
    !not_found_prefix.is_empty() && resolved_url.starts_with(not_found_prefix)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::config::{DEFAULT_MAX_DIMENSION, DEFAULT_MIN_DIMENSION, DEFAULT_NOT_FOUND_PREFIX};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn default_range() -> DimensionRange {
        DimensionRange::new(DEFAULT_MIN_DIMENSION, DEFAULT_MAX_DIMENSION)
    }

    #[test]
    fn plan_batch_produces_requested_count_within_bounds() {
        let mut rng = StdRng::seed_from_u64(42);
        let batch = BatchRequest::primary("", 15);

        let plan = plan_batch(&mut rng, default_range(), &batch);

        assert_eq!(plan.len(), 15);
        for request in &plan {
            assert!((250..=750).contains(&request.width), "width {}", request.width);
            assert!((250..=750).contains(&request.height), "height {}", request.height);
            assert_eq!(request.query, "");
        }
    }

    #[test]
    fn plan_batch_varies_dimensions() {
        let mut rng = StdRng::seed_from_u64(7);
        let plan = plan_batch(&mut rng, default_range(), &BatchRequest::primary("sea", 20));

        let first = (plan[0].width, plan[0].height);
        assert!(plan.iter().any(|r| (r.width, r.height) != first));
    }

    #[test]
    fn plan_batch_with_zero_count_is_empty() {
        let mut rng = StdRng::seed_from_u64(1);
        assert!(plan_batch(&mut rng, default_range(), &BatchRequest::primary("x", 0)).is_empty());
    }

    #[test]
    fn dimension_range_orders_and_guards_bounds() {
        let range = DimensionRange::new(800, 0);
        assert_eq!(range.min(), 1);
        assert_eq!(range.max(), 800);

        let mut rng = StdRng::seed_from_u64(3);
        for _ in 0..50 {
            let size = range.sample(&mut rng);
            assert!((1..=800).contains(&size));
        }
    }

    #[test]
    fn url_matches_service_template() {
        let request = ImageRequest {
            width: 300,
            height: 420,
            query: "mountains".to_string(),
        };
        let url = request.url("https://source.unsplash.com/").unwrap();
        assert_eq!(url.as_str(), "https://source.unsplash.com/300x420/?mountains");
    }

    #[test]
    fn url_keeps_trailing_question_mark_for_empty_query() {
        let request = ImageRequest {
            width: 250,
            height: 750,
            query: String::new(),
        };
        let url = request.url("https://source.unsplash.com").unwrap();
        assert_eq!(url.as_str(), "https://source.unsplash.com/250x750/?");
    }

    #[test]
    fn url_encodes_spaces_in_query() {
        let request = ImageRequest {
            width: 500,
            height: 500,
            query: "red car".to_string(),
        };
        let url = request.url("http://localhost:9000/images/").unwrap();
        assert_eq!(url.as_str(), "http://localhost:9000/images/500x500/?red%20car");
    }

    #[test]
    fn invalid_base_url_is_an_error() {
        let request = ImageRequest {
            width: 1,
            height: 1,
            query: String::new(),
        };
        let err = request.url("not a url").unwrap_err();
        assert!(matches!(
            err,
            crate::error::Error::Http(HttpError::InvalidUrl(_))
        ));
    }

    #[test]
    fn not_found_detection_uses_prefix() {
        assert!(is_not_found(
            "https://images.unsplash.com/source-404?fit=crop&w=300",
            DEFAULT_NOT_FOUND_PREFIX
        ));
        assert!(!is_not_found(
            "https://images.unsplash.com/photo-123?w=300",
            DEFAULT_NOT_FOUND_PREFIX
        ));
        assert!(!is_not_found("https://anything", ""));
    }

    #[test]
    fn batch_constructors_set_kind() {
        assert!(!BatchRequest::primary("a", 1).is_fallback());
        assert!(BatchRequest::fallback("cat", 8).is_fallback());
    }
}
