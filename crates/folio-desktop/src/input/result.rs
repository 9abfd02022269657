//! Input result type

use serde::Serialize;

use crate::window::WindowId;

/// Result of input handling
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum InputResult {
    /// Input was handled internally
    Handled,
    /// Input was not handled (let the browser have it)
    Unhandled,
    /// A window was closed in response
    ClosedWindow {
        /// Window that was closed
        window_id: WindowId,
    },
}

impl InputResult {
    /// Check if input was handled
    #[inline]
    pub fn is_handled(&self) -> bool {
        !matches!(self, InputResult::Unhandled)
    }

    /// Whether the browser's default action should be suppressed
    #[inline]
    pub fn prevent_default(&self) -> bool {
        self.is_handled()
    }
}
