//! Global keyboard shortcuts

use serde::Deserialize;

/// Modifier keys held during a key press
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Modifiers {
    pub ctrl: bool,
    pub meta: bool,
    pub shift: bool,
    pub alt: bool,
}

impl Modifiers {
    pub const NONE: Modifiers = Modifiers {
        ctrl: false,
        meta: false,
        shift: false,
        alt: false,
    };

    pub const CTRL: Modifiers = Modifiers {
        ctrl: true,
        ..Modifiers::NONE
    };

    pub const META: Modifiers = Modifiers {
        meta: true,
        ..Modifiers::NONE
    };

    /// Cmd on macOS, Ctrl elsewhere
    #[inline]
    pub fn command(&self) -> bool {
        self.ctrl || self.meta
    }
}

/// A desktop-wide shortcut
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Shortcut {
    /// Cmd/Ctrl+K
    ToggleSpotlight,
    /// Escape: close spotlight, else the topmost window
    Escape,
    /// Cmd/Ctrl+W
    CloseTopmost,
    /// Cmd/Ctrl+D
    ToggleDarkMode,
}

impl Shortcut {
    /// Map a `KeyboardEvent.key` value and modifiers to a shortcut
    pub fn from_key(key: &str, modifiers: Modifiers) -> Option<Self> {
        if key == "Escape" {
            return Some(Shortcut::Escape);
        }
        if !modifiers.command() {
            return None;
        }
        match key {
            "k" => Some(Shortcut::ToggleSpotlight),
            "w" => Some(Shortcut::CloseTopmost),
            "d" => Some(Shortcut::ToggleDarkMode),
            _ => None,
        }
    }
}
