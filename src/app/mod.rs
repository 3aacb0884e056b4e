// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration around the gallery.
//!
//! The `App` owns the ambient concerns (configuration, localization, theme,
//! window events, the HTTP client) and mounts a single gallery component. The
//! gallery is mounted on boot and unmounted when the window asks to close;
//! anything arriving after that is dropped.

pub mod config;
mod message;
pub mod paths;
mod subscription;
mod update;
mod view;

pub use message::{Flags, Message};

use crate::gallery;
use crate::i18n::fluent::I18n;
use crate::source::{self, SourceSettings};
use crate::ui::theming::AppTheme;
use config::Config;
use iced::{task, window, Element, Subscription, Task, Theme};
use std::fmt;

pub const WINDOW_DEFAULT_HEIGHT: u32 = 768;
pub const WINDOW_DEFAULT_WIDTH: u32 = 1024;
pub const MIN_WINDOW_HEIGHT: u32 = 480;
pub const MIN_WINDOW_WIDTH: u32 = 480;

/// A gallery instance living between boot and window close.
pub(crate) struct Mounted {
    state: gallery::State,
    /// Pending search timer; replacing or dropping it aborts the timer.
    debounce_timer: Option<task::Handle>,
}

impl Mounted {
    fn unmount(self) {
        tracing::debug!(
            images = self.state.images().len(),
            search_pending = self.debounce_timer.is_some(),
            "unmounting gallery"
        );
        if let Some(timer) = self.debounce_timer {
            timer.abort();
        }
    }
}

/// Root Iced application state.
pub struct App {
    pub i18n: I18n,
    theme: AppTheme,
    gallery: Option<Mounted>,
    client: Option<source::Client>,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("mounted", &self.gallery.is_some())
            .field(
                "images",
                &self.gallery.as_ref().map(|m| m.state.images().len()),
            )
            .finish()
    }
}

/// Builds the window settings.
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(iced::Size::new(
            MIN_WINDOW_WIDTH as f32,
            MIN_WINDOW_HEIGHT as f32,
        )),
        // Close requests go through the app so the gallery is unmounted first.
        exit_on_close_request: false,
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // iced requires a `Fn` boot closure; flags are consumed on the first call.
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state.borrow_mut().take().unwrap_or_default();
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl App {
    /// Loads configuration and mounts the gallery, which requests its first
    /// batch right away.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let (config, config_warning) = config::load();
        let (app, task) = Self::with_config(&config, flags.lang);

        if let Some(key) = config_warning {
            tracing::warn!("{}", app.i18n.tr(&key));
        }

        (app, task)
    }

    /// Builds the application from an already loaded configuration.
    pub fn with_config(config: &Config, lang: Option<String>) -> (Self, Task<Message>) {
        let i18n = I18n::new(lang, config);
        let theme = AppTheme::new(config.general.theme_mode);

        let client = match source::Client::new(SourceSettings::from_config(&config.source)) {
            Ok(client) => Some(client),
            Err(err) => {
                tracing::error!("HTTP client unavailable: {err}");
                None
            }
        };

        let (state, effect) = gallery::State::mount(
            gallery::Settings::from_config(config),
            WINDOW_DEFAULT_WIDTH as f32,
        );
        tracing::info!(locale = %i18n.current_locale(), "gallery mounted");

        let mut mounted = Mounted {
            state,
            debounce_timer: None,
        };
        let task = update::perform_effect(&mut mounted, client.as_ref(), effect);

        let app = Self {
            i18n,
            theme,
            gallery: Some(mounted),
            client,
        };
        (app, task)
    }

    fn title(&self) -> String {
        self.i18n.tr("window-title")
    }

    fn theme(&self) -> Theme {
        self.theme.iced_theme()
    }

    fn subscription(&self) -> Subscription<Message> {
        let (modal_open, is_loading) = self
            .gallery
            .as_ref()
            .map_or((false, false), |mounted| {
                (mounted.state.is_modal_open(), mounted.state.is_loading())
            });

        Subscription::batch([
            subscription::create_window_subscription(),
            subscription::create_modal_subscription(modal_open),
            subscription::create_tick_subscription(is_loading),
        ])
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        update::update(self, message)
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            i18n: &self.i18n,
            theme: &self.theme,
            gallery: self.gallery.as_ref().map(|mounted| &mounted.state),
        })
    }

    /// The mounted gallery, if the window is still open.
    #[must_use]
    pub fn gallery(&self) -> Option<&gallery::State> {
        self.gallery.as_ref().map(|mounted| &mounted.state)
    }
}
