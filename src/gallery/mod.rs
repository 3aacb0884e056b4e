// SPDX-License-Identifier: MPL-2.0
//! Infinite-scrolling image gallery with a debounced search box and a
//! full-screen viewer.
//!
//! The component follows the sub-component pattern used across the UI: a
//! `State` owning the data, a `Message` enum, and an `Effect` returned from
//! [`State::handle`] that the application turns into tasks. The component
//! never spawns work itself; fetching and timers live in the app layer so the
//! state machine stays synchronous and testable.

pub mod debounce;
pub mod loading;
pub mod modal;
pub mod scroll;
mod view;

pub use scroll::ScrollMetrics;
pub use view::ViewContext;

use crate::app::config::{self, Config};
use crate::error::Error;
use crate::source::{is_not_found, BatchRequest, RemoteImage};
use crate::ui::design_tokens::{sizing, spacing};
use std::time::Duration;

/// Upper bound on thumbnail columns, whatever the window width.
pub const MAX_COLUMNS: usize = 8;

/// Gallery behaviour resolved from the configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub initial_batch_size: usize,
    pub scroll_batch_size: usize,
    pub fallback_batch_size: usize,
    pub fallback_query: String,
    pub scroll_threshold_px: f32,
    pub search_debounce: Duration,
    /// Prefix of the service's no-match placeholder URL.
    pub not_found_prefix: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self::from_config(&Config::default())
    }
}

impl Settings {
    /// Resolves settings, clamping values that would stall or flood the gallery.
    #[must_use]
    pub fn from_config(config: &Config) -> Self {
        let gallery = &config.gallery;
        let batch = |value: Option<usize>, default: usize| {
            value.unwrap_or(default).clamp(1, config::MAX_BATCH_SIZE)
        };

        Self {
            initial_batch_size: batch(
                gallery.initial_batch_size,
                config::DEFAULT_INITIAL_BATCH_SIZE,
            ),
            scroll_batch_size: batch(gallery.scroll_batch_size, config::DEFAULT_SCROLL_BATCH_SIZE),
            fallback_batch_size: batch(
                gallery.fallback_batch_size,
                config::DEFAULT_FALLBACK_BATCH_SIZE,
            ),
            fallback_query: gallery
                .fallback_query
                .clone()
                .filter(|query| !query.trim().is_empty())
                .unwrap_or_else(|| config::DEFAULT_FALLBACK_QUERY.to_string()),
            scroll_threshold_px: gallery
                .scroll_threshold_px
                .filter(|px| px.is_finite())
                .unwrap_or(config::DEFAULT_SCROLL_THRESHOLD_PX)
                .max(0.0),
            search_debounce: Duration::from_millis(
                gallery
                    .search_debounce_ms
                    .unwrap_or(config::DEFAULT_SEARCH_DEBOUNCE_MS)
                    .min(config::MAX_SEARCH_DEBOUNCE_MS),
            ),
            not_found_prefix: config
                .source
                .not_found_prefix
                .clone()
                .unwrap_or_else(|| config::DEFAULT_NOT_FOUND_PREFIX.to_string()),
        }
    }
}

#[derive(Debug, Clone)]
pub enum Message {
    /// The search box content changed.
    SearchChanged(String),
    /// A debounce timer elapsed.
    SearchDebounced(debounce::Token),
    /// The gallery was scrolled.
    Scrolled(ScrollMetrics),
    /// A batch settled, successfully or not.
    BatchFetched {
        request: BatchRequest,
        result: Result<Vec<RemoteImage>, Error>,
    },
    /// A thumbnail was clicked.
    ThumbnailPressed(usize),
    Modal(modal::Message),
    SpinnerTick,
    /// The window width changed; the grid reflows.
    WidthChanged(f32),
}

/// Work requested by the gallery from its host.
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    None,
    /// Fetch a batch and report back with [`Message::BatchFetched`].
    Fetch(BatchRequest),
    /// Replace any running debounce timer with one that reports
    /// [`Message::SearchDebounced`] after `delay`.
    ScheduleSearch {
        token: debounce::Token,
        delay: Duration,
    },
}

#[derive(Debug, Clone)]
pub struct State {
    search_criteria: String,
    images: Vec<RemoteImage>,
    no_results_found: bool,
    /// Localization key of the last failed batch.
    fetch_error: Option<&'static str>,
    loading: loading::State,
    modal: modal::State,
    debounce: debounce::State,
    columns: usize,
    settings: Settings,
}

impl State {
    #[must_use]
    pub fn new(settings: Settings, width: f32) -> Self {
        Self {
            search_criteria: String::new(),
            images: Vec::new(),
            no_results_found: false,
            fetch_error: None,
            loading: loading::State::default(),
            modal: modal::State::default(),
            debounce: debounce::State::new(settings.search_debounce),
            columns: columns_for_width(width),
            settings,
        }
    }

    /// Creates the gallery and requests the first batch with an empty query.
    #[must_use]
    pub fn mount(settings: Settings, width: f32) -> (Self, Effect) {
        let mut state = Self::new(settings, width);
        let batch = BatchRequest::primary("", state.settings.initial_batch_size);
        let effect = state.fetch_pictures(batch);
        (state, effect)
    }

    pub fn handle(&mut self, message: Message) -> Effect {
        match message {
            Message::SearchChanged(text) => {
                self.search_criteria = text;
                self.no_results_found = false;
                let token = self.debounce.schedule();
                Effect::ScheduleSearch {
                    token,
                    delay: self.debounce.delay(),
                }
            }
            Message::SearchDebounced(token) => {
                if !self.debounce.fire(token) {
                    return Effect::None;
                }
                self.images.clear();
                self.modal.close();
                let batch = BatchRequest::primary(
                    self.search_criteria.clone(),
                    self.settings.initial_batch_size,
                );
                self.fetch_pictures(batch)
            }
            Message::Scrolled(metrics) => {
                if self.loading.is_loading()
                    || !metrics.is_near_bottom(self.settings.scroll_threshold_px)
                {
                    return Effect::None;
                }
                let batch = BatchRequest::primary(
                    self.search_criteria.clone(),
                    self.settings.scroll_batch_size,
                );
                self.fetch_pictures(batch)
            }
            Message::BatchFetched { request, result } => self.apply_batch(request, result),
            Message::ThumbnailPressed(index) => {
                self.modal.open(index, self.images.len());
                Effect::None
            }
            Message::Modal(message) => {
                self.modal.handle(message, &self.images);
                Effect::None
            }
            Message::SpinnerTick => {
                self.loading.handle(loading::Message::SpinnerTick);
                Effect::None
            }
            Message::WidthChanged(width) => {
                self.columns = columns_for_width(width);
                Effect::None
            }
        }
    }

    fn fetch_pictures(&mut self, batch: BatchRequest) -> Effect {
        self.loading.handle(loading::Message::StartLoading);
        Effect::Fetch(batch)
    }

    fn apply_batch(
        &mut self,
        request: BatchRequest,
        result: Result<Vec<RemoteImage>, Error>,
    ) -> Effect {
        match result {
            Ok(images) => {
                // Only the first picture is inspected; a fallback batch is
                // never inspected at all.
                let no_match = !request.is_fallback()
                    && images
                        .first()
                        .is_some_and(|image| is_not_found(&image.url, &self.settings.not_found_prefix));

                if no_match {
                    tracing::info!(query = %request.query, "no match, showing fallback pictures");
                    self.no_results_found = true;
                    let fallback = BatchRequest::fallback(
                        self.settings.fallback_query.clone(),
                        self.settings.fallback_batch_size,
                    );
                    // Loading stays set until the fallback batch lands.
                    return self.fetch_pictures(fallback);
                }

                self.images.extend(images);
                self.fetch_error = None;
                self.loading.handle(loading::Message::StopLoading);
            }
            Err(err) => {
                tracing::warn!(query = %request.query, count = request.count, "image batch failed: {err}");
                self.fetch_error = Some(err.i18n_key());
                self.loading.handle(loading::Message::StopLoading);
            }
        }
        Effect::None
    }

    #[must_use]
    pub fn search_criteria(&self) -> &str {
        &self.search_criteria
    }

    #[must_use]
    pub fn images(&self) -> &[RemoteImage] {
        &self.images
    }

    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.loading.is_loading()
    }

    #[must_use]
    pub fn spinner_rotation(&self) -> f32 {
        self.loading.spinner_rotation()
    }

    #[must_use]
    pub fn no_results_found(&self) -> bool {
        self.no_results_found
    }

    #[must_use]
    pub fn fetch_error(&self) -> Option<&'static str> {
        self.fetch_error
    }

    #[must_use]
    pub fn selected_index(&self) -> Option<usize> {
        self.modal.selected()
    }

    #[must_use]
    pub fn is_modal_open(&self) -> bool {
        self.modal.is_open()
    }

    #[must_use]
    pub fn selected_image(&self) -> Option<&RemoteImage> {
        self.modal
            .selected()
            .and_then(|index| self.images.get(index))
    }

    #[must_use]
    pub fn is_search_pending(&self) -> bool {
        self.debounce.is_pending()
    }

    #[must_use]
    pub fn columns(&self) -> usize {
        self.columns
    }
}

/// Number of thumbnail columns that fit in a window of `width` pixels.
#[must_use]
pub fn columns_for_width(width: f32) -> usize {
    let cell = sizing::THUMBNAIL + spacing::XS;
    let usable = width - 2.0 * spacing::LG + spacing::XS;
    if !usable.is_finite() || usable < cell {
        return 1;
    }
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let columns = (usable / cell).floor() as usize;
    columns.clamp(1, MAX_COLUMNS)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::config::GalleryConfig;
    use crate::error::HttpError;
    use iced::widget::image;

    const PREFIX: &str = "https://images.unsplash.com/source-404?";

    fn picture(url: &str) -> RemoteImage {
        RemoteImage::new(url, image::Handle::from_path("unused.png"))
    }

    fn pictures(prefix: &str, count: usize) -> Vec<RemoteImage> {
        (0..count)
            .map(|i| picture(&format!("https://images.example.com/{prefix}-{i}")))
            .collect()
    }

    fn mounted() -> State {
        let (mut state, _) = State::mount(Settings::default(), 1024.0);
        state.handle(Message::BatchFetched {
            request: BatchRequest::primary("", 15),
            result: Ok(pictures("initial", 15)),
        });
        state
    }

    #[test]
    fn settings_default_matches_gallery_defaults() {
        let settings = Settings::default();
        assert_eq!(settings.initial_batch_size, 15);
        assert_eq!(settings.scroll_batch_size, 5);
        assert_eq!(settings.fallback_batch_size, 8);
        assert_eq!(settings.fallback_query, "cat");
        assert_eq!(settings.scroll_threshold_px, 500.0);
        assert_eq!(settings.search_debounce, Duration::from_millis(1000));
        assert_eq!(settings.not_found_prefix, PREFIX);
    }

    #[test]
    fn settings_clamp_out_of_range_values() {
        let config = Config {
            gallery: GalleryConfig {
                initial_batch_size: Some(0),
                scroll_batch_size: Some(10_000),
                fallback_query: Some("   ".to_string()),
                scroll_threshold_px: Some(-20.0),
                search_debounce_ms: Some(u64::MAX),
                ..GalleryConfig::default()
            },
            ..Config::default()
        };
        let settings = Settings::from_config(&config);
        assert_eq!(settings.initial_batch_size, 1);
        assert_eq!(settings.scroll_batch_size, config::MAX_BATCH_SIZE);
        assert_eq!(settings.fallback_query, "cat");
        assert_eq!(settings.scroll_threshold_px, 0.0);
        assert_eq!(
            settings.search_debounce,
            Duration::from_millis(config::MAX_SEARCH_DEBOUNCE_MS)
        );
    }

    #[test]
    fn mount_requests_initial_batch() {
        let (state, effect) = State::mount(Settings::default(), 1024.0);
        assert_eq!(effect, Effect::Fetch(BatchRequest::primary("", 15)));
        assert!(state.is_loading());
        assert!(state.images().is_empty());
        assert!(!state.no_results_found());
        assert!(!state.is_modal_open());
    }

    #[test]
    fn successful_batch_appends_and_stops_loading() {
        let state = mounted();
        assert_eq!(state.images().len(), 15);
        assert!(!state.is_loading());
    }

    #[test]
    fn search_change_schedules_debounce_without_clearing() {
        let mut state = mounted();
        let effect = state.handle(Message::SearchChanged("mountains".to_string()));

        assert!(matches!(
            effect,
            Effect::ScheduleSearch { delay, .. } if delay == Duration::from_millis(1000)
        ));
        assert_eq!(state.search_criteria(), "mountains");
        assert_eq!(state.images().len(), 15);
        assert!(state.is_search_pending());
    }

    #[test]
    fn only_last_keystroke_triggers_search() {
        let mut state = mounted();
        let Effect::ScheduleSearch { token: first, .. } =
            state.handle(Message::SearchChanged("mou".to_string()))
        else {
            panic!("expected a debounce");
        };
        let Effect::ScheduleSearch { token: second, .. } =
            state.handle(Message::SearchChanged("mountain".to_string()))
        else {
            panic!("expected a debounce");
        };

        assert_eq!(state.handle(Message::SearchDebounced(first)), Effect::None);
        assert_eq!(state.images().len(), 15);

        let effect = state.handle(Message::SearchDebounced(second));
        assert_eq!(effect, Effect::Fetch(BatchRequest::primary("mountain", 15)));
        assert!(state.images().is_empty());
        assert!(state.is_loading());
    }

    #[test]
    fn settled_search_closes_viewer() {
        let mut state = mounted();
        state.handle(Message::ThumbnailPressed(3));
        let Effect::ScheduleSearch { token, .. } =
            state.handle(Message::SearchChanged("sea".to_string()))
        else {
            panic!("expected a debounce");
        };
        state.handle(Message::SearchDebounced(token));
        assert!(!state.is_modal_open());
    }

    #[test]
    fn typing_clears_no_results_flag() {
        let mut state = mounted();
        state.handle(Message::BatchFetched {
            request: BatchRequest::primary("zzzz", 15),
            result: Ok(vec![picture(&format!("{PREFIX}ixid=1"))]),
        });
        assert!(state.no_results_found());

        state.handle(Message::SearchChanged("zzz".to_string()));
        assert!(!state.no_results_found());
    }

    #[test]
    fn scroll_near_bottom_requests_more() {
        let mut state = mounted();
        let metrics = ScrollMetrics {
            offset_y: 2000.0,
            viewport_height: 800.0,
            content_height: 3000.0,
        };
        let effect = state.handle(Message::Scrolled(metrics));
        assert_eq!(effect, Effect::Fetch(BatchRequest::primary("", 5)));
        assert!(state.is_loading());

        // A second scroll while loading is ignored.
        assert_eq!(state.handle(Message::Scrolled(metrics)), Effect::None);
    }

    #[test]
    fn scroll_far_from_bottom_is_ignored() {
        let mut state = mounted();
        let metrics = ScrollMetrics {
            offset_y: 0.0,
            viewport_height: 800.0,
            content_height: 3000.0,
        };
        assert_eq!(state.handle(Message::Scrolled(metrics)), Effect::None);
        assert!(!state.is_loading());
    }

    #[test]
    fn not_found_batch_is_discarded_for_fallback() {
        let mut state = mounted();
        let mut batch = vec![picture(&format!("{PREFIX}ixid=1"))];
        batch.extend(pictures("ignored", 4));

        let effect = state.handle(Message::BatchFetched {
            request: BatchRequest::primary("zzzz", 5),
            result: Ok(batch),
        });

        assert_eq!(effect, Effect::Fetch(BatchRequest::fallback("cat", 8)));
        assert!(state.no_results_found());
        assert_eq!(state.images().len(), 15);
        assert!(state.is_loading());

        state.handle(Message::BatchFetched {
            request: BatchRequest::fallback("cat", 8),
            result: Ok(pictures("cat", 8)),
        });
        assert_eq!(state.images().len(), 23);
        assert!(!state.is_loading());
        assert!(state.no_results_found());
    }

    #[test]
    fn fallback_batch_is_never_rechecked() {
        let mut state = mounted();
        let effect = state.handle(Message::BatchFetched {
            request: BatchRequest::fallback("cat", 8),
            result: Ok(vec![picture(&format!("{PREFIX}ixid=2"))]),
        });
        assert_eq!(effect, Effect::None);
        assert_eq!(state.images().len(), 16);
    }

    #[test]
    fn only_first_picture_is_checked() {
        let mut state = mounted();
        let mut batch = pictures("ok", 2);
        batch.push(picture(&format!("{PREFIX}ixid=3")));

        let effect = state.handle(Message::BatchFetched {
            request: BatchRequest::primary("", 3),
            result: Ok(batch),
        });
        assert_eq!(effect, Effect::None);
        assert_eq!(state.images().len(), 18);
        assert!(!state.no_results_found());
    }

    #[test]
    fn failed_batch_stops_loading_and_reports() {
        let (mut state, _) = State::mount(Settings::default(), 1024.0);
        state.handle(Message::BatchFetched {
            request: BatchRequest::primary("", 15),
            result: Err(Error::Http(HttpError::Status(503))),
        });

        assert!(!state.is_loading());
        assert!(state.images().is_empty());
        assert_eq!(state.fetch_error(), Some("error-fetch-status"));

        state.handle(Message::BatchFetched {
            request: BatchRequest::primary("", 5),
            result: Ok(pictures("retry", 5)),
        });
        assert!(state.fetch_error().is_none());
    }

    #[test]
    fn thumbnail_opens_viewer_on_index() {
        let mut state = mounted();
        state.handle(Message::ThumbnailPressed(4));
        assert_eq!(state.selected_index(), Some(4));
        assert_eq!(
            state.selected_image().map(|image| image.url.as_str()),
            Some("https://images.example.com/initial-4")
        );

        state.handle(Message::Modal(modal::Message::Key(modal::Key::Next)));
        assert_eq!(state.selected_index(), Some(5));
    }

    #[test]
    fn spinner_ticks_while_loading() {
        let (mut state, _) = State::mount(Settings::default(), 1024.0);
        state.handle(Message::SpinnerTick);
        assert!(state.spinner_rotation() > 0.0);
    }

    #[test]
    fn width_changes_reflow_columns() {
        let mut state = mounted();
        state.handle(Message::WidthChanged(200.0));
        assert_eq!(state.columns(), 1);
        state.handle(Message::WidthChanged(100_000.0));
        assert_eq!(state.columns(), MAX_COLUMNS);
    }

    #[test]
    fn columns_for_width_handles_degenerate_input() {
        assert_eq!(columns_for_width(0.0), 1);
        assert_eq!(columns_for_width(f32::NAN), 1);
        assert!(columns_for_width(1024.0) >= 3);
    }
}
