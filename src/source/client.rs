// SPDX-License-Identifier: MPL-2.0
//! HTTP access to the random image service.

use super::request::{is_not_found, plan_batch, BatchRequest, DimensionRange, ImageRequest};
use super::RemoteImage;
use crate::app::config::{self, SourceConfig};
use crate::error::{HttpError, Result};
use futures_util::future::try_join_all;
use iced::widget::image;
use std::sync::Arc;
use std::time::{Duration, Instant};

/// Resolved settings for talking to the image service.
#[derive(Debug, Clone, PartialEq)]
pub struct SourceSettings {
    pub base_url: String,
    pub not_found_prefix: String,
    pub dimensions: DimensionRange,
    pub timeout: Duration,
}

impl Default for SourceSettings {
    fn default() -> Self {
        Self::from_config(&SourceConfig::default())
    }
}

impl SourceSettings {
    #[must_use]
    pub fn from_config(source: &SourceConfig) -> Self {
        Self {
            base_url: source
                .base_url
                .clone()
                .unwrap_or_else(|| config::DEFAULT_SOURCE_BASE_URL.to_string()),
            not_found_prefix: source
                .not_found_prefix
                .clone()
                .unwrap_or_else(|| config::DEFAULT_NOT_FOUND_PREFIX.to_string()),
            dimensions: DimensionRange::new(
                source.min_dimension.unwrap_or(config::DEFAULT_MIN_DIMENSION),
                source.max_dimension.unwrap_or(config::DEFAULT_MAX_DIMENSION),
            ),
            timeout: Duration::from_secs(
                source
                    .request_timeout_secs
                    .unwrap_or(config::DEFAULT_REQUEST_TIMEOUT_SECS)
                    .max(1),
            ),
        }
    }
}

/// Cheap-to-clone handle issuing batches against the image service.
#[derive(Debug, Clone)]
pub struct Client {
    http: reqwest::Client,
    settings: Arc<SourceSettings>,
}

impl Client {
    pub fn new(settings: SourceSettings) -> Result<Self> {
        let http = reqwest::Client::builder()
            .redirect(reqwest::redirect::Policy::limited(config::MAX_REDIRECTS))
            .user_agent(config::USER_AGENT)
            .timeout(settings.timeout)
            .build()?;

        Ok(Self {
            http,
            settings: Arc::new(settings),
        })
    }

    /// Issues every request of the batch concurrently and waits for all of them.
    ///
    /// The first failing request fails the whole batch. Results keep the
    /// order of the planned requests.
    pub async fn fetch_batch(self, batch: BatchRequest) -> Result<Vec<RemoteImage>> {
        let plan = {
            let mut rng = rand::rng();
            plan_batch(&mut rng, self.settings.dimensions, &batch)
        };

        tracing::debug!(
            query = %batch.query,
            count = batch.count,
            fallback = batch.is_fallback(),
            "requesting image batch"
        );
        let started = Instant::now();

        let images = try_join_all(plan.into_iter().map(|request| self.fetch_one(request))).await?;

        tracing::debug!(
            count = images.len(),
            elapsed = ?started.elapsed(),
            "image batch resolved"
        );
        Ok(images)
    }

    async fn fetch_one(&self, request: ImageRequest) -> Result<RemoteImage> {
        let url = request.url(&self.settings.base_url)?;
        let response = self.http.get(url).send().await?;

        // The redirect target is the image's identity in the gallery.
        let resolved = response.url().to_string();
        let status = response.status();

        // The no-match placeholder is a normal answer whatever its status.
        if !status.is_success() && !is_not_found(&resolved, &self.settings.not_found_prefix) {
            return Err(HttpError::Status(status.as_u16()).into());
        }

        let bytes = response.bytes().await?;
        Ok(RemoteImage::new(resolved, image::Handle::from_bytes(bytes)))
    }
}
