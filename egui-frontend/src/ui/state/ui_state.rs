//! # UI State Module
//!
//! General UI feedback that is not part of the calculation itself.
//!
//! ## Responsibilities:
//! - The blocking validation alert raised by a rejected calculation
//! - A transient status line (e.g. after copying history)

/// User feedback state for the calculator window
#[derive(Debug, Default)]
pub struct UIState {
    /// Message of the open validation alert; the form is disabled while this is set
    pub validation_alert: Option<String>,

    /// Non-blocking status message shown under the form
    pub status_message: Option<String>,
}

impl UIState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn show_validation_alert(&mut self, message: String) {
        self.validation_alert = Some(message);
    }

    pub fn dismiss_validation_alert(&mut self) {
        self.validation_alert = None;
    }

    /// Whether an alert is open and input should be blocked
    pub fn has_blocking_alert(&self) -> bool {
        self.validation_alert.is_some()
    }

    pub fn set_status(&mut self, message: String) {
        self.status_message = Some(message);
    }

    pub fn clear_status(&mut self) {
        self.status_message = None;
    }
}
