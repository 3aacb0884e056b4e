// SPDX-License-Identifier: MPL-2.0
//! Debounce bookkeeping for the search box.
//!
//! Each keystroke schedules a new timer and invalidates the previous one.
//! The timer itself is an abortable task owned by the application; the token
//! carried back by the elapsed message is what decides whether it still counts.

use std::time::Duration;

/// Identifies one scheduled timer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token(u64);

#[derive(Debug, Clone)]
pub struct State {
    delay: Duration,
    generation: u64,
    pending: bool,
}

impl State {
    #[must_use]
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            generation: 0,
            pending: false,
        }
    }

    #[must_use]
    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Invalidates any pending timer and returns the token for a new one.
    pub fn schedule(&mut self) -> Token {
        self.generation = self.generation.wrapping_add(1);
        self.pending = true;
        Token(self.generation)
    }

    /// Consumes the pending timer if `token` is the latest one.
    ///
    /// Returns `true` at most once per scheduled timer.
    pub fn fire(&mut self, token: Token) -> bool {
        if self.pending && token.0 == self.generation {
            self.pending = false;
            true
        } else {
            false
        }
    }

    #[must_use]
    pub fn is_pending(&self) -> bool {
        self.pending
    }
}
