// SPDX-License-Identifier: MPL-2.0
//! Loading state sub-component with animated spinner.

/// Spinner rotation speed in radians per tick.
const SPINNER_SPEED: f32 = 0.1;

/// Loading state for outstanding fetch batches.
#[derive(Debug, Clone, Default)]
pub struct State {
    /// Whether a batch is currently outstanding.
    is_loading: bool,
    /// Current spinner rotation angle in radians.
    spinner_rotation: f32,
}

/// Messages for the loading state sub-component.
#[derive(Debug, Clone)]
pub enum Message {
    /// A batch was issued.
    StartLoading,
    /// A batch was applied or failed.
    StopLoading,
    /// Animate the spinner.
    SpinnerTick,
}

impl State {
    /// Handle a loading state message.
    pub fn handle(&mut self, msg: Message) {
        match msg {
            Message::StartLoading => {
                self.is_loading = true;
            }
            Message::StopLoading => {
                self.is_loading = false;
                self.spinner_rotation = 0.0;
            }
            Message::SpinnerTick => {
                if self.is_loading {
                    self.spinner_rotation += SPINNER_SPEED;
                    if self.spinner_rotation > std::f32::consts::TAU {
                        self.spinner_rotation -= std::f32::consts::TAU;
                    }
                }
            }
        }
    }

    /// Get the current spinner rotation angle in radians.
    #[must_use]
    pub fn spinner_rotation(&self) -> f32 {
        self.spinner_rotation
    }

    /// Check if currently loading.
    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.is_loading
    }
}
