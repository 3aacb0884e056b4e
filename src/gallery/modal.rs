// SPDX-License-Identifier: MPL-2.0
//! Full-screen viewer state.
//!
//! `Closed -> Open` on a thumbnail click, `Open -> Open` while navigation
//! lands on a valid index, `Open -> Closed` on Escape, the close button, a
//! backdrop click, or navigation past either end.

use crate::source::RemoteImage;
use iced::keyboard;

/// Keys the viewer reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Previous,
    Next,
    Close,
}

impl Key {
    /// Maps a pressed key to a viewer action.
    #[must_use]
    pub fn from_keyboard(key: &keyboard::Key) -> Option<Self> {
        use keyboard::key::Named;

        match key {
            keyboard::Key::Named(Named::ArrowLeft) => Some(Self::Previous),
            keyboard::Key::Named(Named::ArrowRight) => Some(Self::Next),
            keyboard::Key::Named(Named::Escape) => Some(Self::Close),
            _ => None,
        }
    }
}

#[derive(Debug, Clone)]
pub enum Message {
    /// Close button or backdrop clicked.
    Close,
    /// The displayed picture was clicked; carries its URL.
    ImagePressed(String),
    Key(Key),
}

#[derive(Debug, Clone, Default)]
pub struct State {
    selected: Option<usize>,
}

impl State {
    /// Opens the viewer on `index`. Out-of-range indices leave it closed.
    pub fn open(&mut self, index: usize, len: usize) {
        self.select(Some(index), len);
    }

    pub fn close(&mut self) {
        self.selected = None;
    }

    #[must_use]
    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    #[must_use]
    pub fn is_open(&self) -> bool {
        self.selected.is_some()
    }

    pub fn handle(&mut self, message: Message, images: &[RemoteImage]) {
        let Some(current) = self.selected else {
            return;
        };

        match message {
            Message::Close | Message::Key(Key::Close) => self.close(),
            Message::ImagePressed(url) => {
                // The clicked picture is located again by URL; with duplicate
                // URLs the first occurrence wins.
                let position = images.iter().position(|image| image.url == url);
                self.select(position.map(|index| index + 1), images.len());
            }
            Message::Key(Key::Previous) => self.select(current.checked_sub(1), images.len()),
            Message::Key(Key::Next) => self.select(Some(current + 1), images.len()),
        }
    }

    fn select(&mut self, index: Option<usize>, len: usize) {
        match index {
            Some(index) if index < len => self.selected = Some(index),
            _ => self.close(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use iced::widget::image;

    fn images(urls: &[&str]) -> Vec<RemoteImage> {
        urls.iter()
            .map(|url| RemoteImage::new(*url, image::Handle::from_path("unused.png")))
            .collect()
    }

    #[test]
    fn open_selects_index() {
        let mut state = State::default();
        state.open(2, 5);
        assert_eq!(state.selected(), Some(2));
        assert!(state.is_open());
    }

    #[test]
    fn open_out_of_range_stays_closed() {
        let mut state = State::default();
        state.open(5, 5);
        assert!(!state.is_open());
    }

    #[test]
    fn arrow_keys_move_and_close_at_bounds() {
        let pictures = images(&["a", "b", "c"]);
        let mut state = State::default();
        state.open(0, pictures.len());

        state.handle(Message::Key(Key::Next), &pictures);
        state.handle(Message::Key(Key::Next), &pictures);
        assert_eq!(state.selected(), Some(2));

        state.handle(Message::Key(Key::Next), &pictures);
        assert!(!state.is_open());

        state.open(0, pictures.len());
        state.handle(Message::Key(Key::Previous), &pictures);
        assert!(!state.is_open());
    }

    #[test]
    fn escape_and_close_button_close() {
        let pictures = images(&["a", "b"]);
        let mut state = State::default();

        state.open(1, pictures.len());
        state.handle(Message::Key(Key::Close), &pictures);
        assert!(!state.is_open());

        state.open(1, pictures.len());
        state.handle(Message::Close, &pictures);
        assert!(!state.is_open());
    }

    #[test]
    fn clicking_picture_advances_by_url() {
        let pictures = images(&["a", "b", "c"]);
        let mut state = State::default();
        state.open(1, pictures.len());

        state.handle(Message::ImagePressed("b".to_string()), &pictures);
        assert_eq!(state.selected(), Some(2));

        state.handle(Message::ImagePressed("c".to_string()), &pictures);
        assert!(!state.is_open());
    }

    #[test]
    fn clicking_duplicate_url_resolves_first_occurrence() {
        let pictures = images(&["a", "dup", "b", "dup"]);
        let mut state = State::default();
        state.open(3, pictures.len());

        state.handle(Message::ImagePressed("dup".to_string()), &pictures);
        assert_eq!(state.selected(), Some(2));
    }

    #[test]
    fn clicking_unknown_url_closes() {
        let pictures = images(&["a"]);
        let mut state = State::default();
        state.open(0, pictures.len());
        state.handle(Message::ImagePressed("gone".to_string()), &pictures);
        assert!(!state.is_open());
    }

    #[test]
    fn messages_are_ignored_while_closed() {
        let pictures = images(&["a", "b"]);
        let mut state = State::default();
        state.handle(Message::Key(Key::Next), &pictures);
        assert!(!state.is_open());
    }

    #[test]
    fn keyboard_mapping() {
        use keyboard::key::Named;
        assert_eq!(
            Key::from_keyboard(&keyboard::Key::Named(Named::ArrowLeft)),
            Some(Key::Previous)
        );
        assert_eq!(
            Key::from_keyboard(&keyboard::Key::Named(Named::ArrowRight)),
            Some(Key::Next)
        );
        assert_eq!(
            Key::from_keyboard(&keyboard::Key::Named(Named::Escape)),
            Some(Key::Close)
        );
        assert_eq!(
            Key::from_keyboard(&keyboard::Key::Named(Named::Enter)),
            None
        );
    }
}
