// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.
//!
//! Window events are always routed. Keyboard navigation only exists while
//! the viewer is open, and the spinner tick only while a batch is loading.

use super::Message;
use crate::gallery::{self, modal};
use iced::{event, keyboard, time, window, Subscription};
use std::time::Duration;

/// Window close requests and resizes.
pub fn create_window_subscription() -> Subscription<Message> {
    event::listen_with(|event, _status, window_id| match event {
        event::Event::Window(window::Event::CloseRequested) => {
            Some(Message::WindowCloseRequested(window_id))
        }
        event::Event::Window(window::Event::Resized(size)) => Some(Message::Gallery(
            gallery::Message::WidthChanged(size.width),
        )),
        _ => None,
    })
}

/// Arrow keys and Escape for the full-screen viewer.
///
/// Keys are taken whatever the capture status: the search box may still hold
/// focus underneath the overlay.
pub fn create_modal_subscription(modal_open: bool) -> Subscription<Message> {
    if !modal_open {
        return Subscription::none();
    }

    event::listen_with(|event, _status, _window_id| match event {
        event::Event::Keyboard(keyboard::Event::KeyPressed { key, .. }) => {
            modal::Key::from_keyboard(&key)
                .map(|key| Message::Gallery(gallery::Message::Modal(modal::Message::Key(key))))
        }
        _ => None,
    })
}

/// Creates a periodic tick subscription for the loading spinner.
pub fn create_tick_subscription(is_loading: bool) -> Subscription<Message> {
    if is_loading {
        time::every(Duration::from_millis(100)).map(Message::Tick)
    } else {
        Subscription::none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use iced::advanced::subscription::into_recipes;

    #[test]
    fn keyboard_is_only_listened_to_while_viewer_is_open() {
        assert!(into_recipes(create_modal_subscription(false)).is_empty());
        assert_eq!(into_recipes(create_modal_subscription(true)).len(), 1);
    }

    #[test]
    fn spinner_ticks_only_while_loading() {
        assert!(into_recipes(create_tick_subscription(false)).is_empty());
        assert_eq!(into_recipes(create_tick_subscription(true)).len(), 1);
    }

    #[test]
    fn window_events_are_always_routed() {
        assert_eq!(into_recipes(create_window_subscription()).len(), 1);
    }
}
