//! Keyboard shortcuts and drag-and-drop

use crate::error::DesktopResult;
use crate::input::{DropPayload, InputResult, Modifiers, Shortcut};
use super::DesktopEngine;

impl DesktopEngine {
    /// Handle a key press
    ///
    /// An open spotlight panel sees the key first; anything it does not
    /// consume is matched against the desktop shortcuts.
    pub fn handle_key(&mut self, key: &str, modifiers: Modifiers) -> InputResult {
        if key != "Escape" && self.spotlight_key(key) {
            return InputResult::Handled;
        }

        let Some(shortcut) = Shortcut::from_key(key, modifiers) else {
            return InputResult::Unhandled;
        };

        match shortcut {
            Shortcut::ToggleSpotlight => {
                self.toggle_spotlight();
                InputResult::Handled
            }
            Shortcut::ToggleDarkMode => {
                self.toggle_dark_mode();
                InputResult::Handled
            }
            Shortcut::Escape => self.escape(),
            Shortcut::CloseTopmost => match self.close_topmost() {
                Some(window_id) => InputResult::ClosedWindow { window_id },
                None => InputResult::Unhandled,
            },
        }
    }

    /// Dismiss the front-most thing on screen
    fn escape(&mut self) -> InputResult {
        if self.spotlight.is_open() {
            self.close_spotlight();
            return InputResult::Handled;
        }
        if self.control_center.is_open {
            self.control_center.close();
            return InputResult::Handled;
        }
        if self.context_menu.is_open {
            self.close_context_menu();
            return InputResult::Handled;
        }
        match self.close_topmost() {
            Some(window_id) => InputResult::ClosedWindow { window_id },
            None => InputResult::Unhandled,
        }
    }

    /// Handle an item dropped on the dock's trash icon
    ///
    /// Returns whether an item was added. Malformed transfer data is logged
    /// and handed back as an error; windows are never touched.
    pub fn drop_on_trash(&mut self, data: &str, now_ms: f64) -> DesktopResult<bool> {
        let payload = DropPayload::parse(data).map_err(|e| {
            log::warn!("Invalid drop data: {}", e);
            e
        })?;

        match payload.into_item() {
            Some(item) => {
                self.trash.add(item, now_ms);
                Ok(true)
            }
            None => Ok(false),
        }
    }
}
