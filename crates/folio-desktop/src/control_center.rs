//! Menu-bar control center
//!
//! Connectivity toggles, volume and brightness sliders, and the
//! appearance choice that decides dark mode.

use serde::{Deserialize, Serialize};

/// Appearance choice
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
    /// Follow the host's color-scheme preference
    System,
}

impl Theme {
    /// Fixed dark flag, or `None` when the host decides
    pub fn dark_mode(self) -> Option<bool> {
        match self {
            Theme::Light => Some(false),
            Theme::Dark => Some(true),
            Theme::System => None,
        }
    }

    /// Theme after the dark-mode shortcut
    ///
    /// `System` counts as not dark, so the shortcut lands on `Dark`.
    pub fn toggled(self) -> Self {
        match self {
            Theme::Dark => Theme::Light,
            Theme::Light | Theme::System => Theme::Dark,
        }
    }
}

/// Control center panel state
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ControlCenter {
    pub is_open: bool,
    wifi: bool,
    bluetooth: bool,
    sound: bool,
    airplane_mode: bool,
    /// Percent
    volume: u8,
    /// Percent
    brightness: u8,
    theme: Theme,
}

impl Default for ControlCenter {
    fn default() -> Self {
        Self {
            is_open: false,
            wifi: true,
            bluetooth: true,
            sound: true,
            airplane_mode: false,
            volume: 75,
            brightness: 100,
            theme: Theme::Light,
        }
    }
}

impl ControlCenter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn toggle(&mut self) {
        self.is_open = !self.is_open;
    }

    pub fn close(&mut self) {
        self.is_open = false;
    }

    #[inline]
    pub fn wifi(&self) -> bool {
        self.wifi
    }

    #[inline]
    pub fn bluetooth(&self) -> bool {
        self.bluetooth
    }

    #[inline]
    pub fn sound(&self) -> bool {
        self.sound
    }

    #[inline]
    pub fn airplane_mode(&self) -> bool {
        self.airplane_mode
    }

    #[inline]
    pub fn volume(&self) -> u8 {
        self.volume
    }

    #[inline]
    pub fn brightness(&self) -> u8 {
        self.brightness
    }

    #[inline]
    pub fn theme(&self) -> Theme {
        self.theme
    }

    /// Flip airplane mode; turning it on cuts wifi and bluetooth
    pub fn toggle_airplane_mode(&mut self) -> bool {
        self.airplane_mode = !self.airplane_mode;
        if self.airplane_mode {
            self.wifi = false;
            self.bluetooth = false;
        }
        self.airplane_mode
    }

    /// Flip wifi; locked off in airplane mode
    pub fn toggle_wifi(&mut self) -> bool {
        if !self.airplane_mode {
            self.wifi = !self.wifi;
        }
        self.wifi
    }

    /// Flip bluetooth; locked off in airplane mode
    pub fn toggle_bluetooth(&mut self) -> bool {
        if !self.airplane_mode {
            self.bluetooth = !self.bluetooth;
        }
        self.bluetooth
    }

    pub fn toggle_sound(&mut self) -> bool {
        self.sound = !self.sound;
        self.sound
    }

    /// Set the volume (clamped to 100); zero mutes
    pub fn set_volume(&mut self, volume: u8) {
        self.volume = volume.min(100);
        self.sound = self.volume > 0;
    }

    /// Set the brightness, clamped to 100
    pub fn set_brightness(&mut self, brightness: u8) {
        self.brightness = brightness.min(100);
    }

    pub fn set_theme(&mut self, theme: Theme) {
        log::debug!("theme set to {:?}", theme);
        self.theme = theme;
    }

    /// Apply the dark-mode shortcut
    pub fn toggle_dark_mode(&mut self) -> Theme {
        self.set_theme(self.theme.toggled());
        self.theme
    }

    /// Whether the desktop renders dark, given the host's preference
    pub fn is_dark(&self, system_prefers_dark: bool) -> bool {
        self.theme.dark_mode().unwrap_or(system_prefers_dark)
    }
}
