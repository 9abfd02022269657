//! Music player and control center operations

use crate::control_center::Theme;
use super::DesktopEngine;

impl DesktopEngine {
    // =========================================================================
    // Music
    // =========================================================================

    /// Start or pause the music widget
    pub fn music_play_pause(&mut self) -> bool {
        let playing = self.music.play_pause();
        self.sync_music();
        playing
    }

    pub fn music_next(&mut self) {
        self.music.next();
        self.sync_music();
    }

    pub fn music_prev(&mut self) {
        self.music.prev();
        self.sync_music();
    }

    /// Jump to a playlist entry
    pub fn music_select(&mut self, index: usize) -> bool {
        let selected = self.music.select(index);
        if selected {
            self.sync_music();
        }
        selected
    }

    /// Mirror the player into the island
    pub(crate) fn sync_music(&mut self) {
        self.island.set_music(self.music.island_update());
    }

    // =========================================================================
    // Control center
    // =========================================================================

    pub fn toggle_control_center(&mut self) {
        self.control_center.toggle();
    }

    pub fn set_theme(&mut self, theme: Theme) {
        self.control_center.set_theme(theme);
    }

    /// Flip between light and dark, returning whether the desktop is now dark
    pub fn toggle_dark_mode(&mut self) -> bool {
        self.control_center.toggle_dark_mode();
        self.is_dark_mode()
    }

    /// Whether the desktop renders dark
    pub fn is_dark_mode(&self) -> bool {
        self.control_center.is_dark(self.system_prefers_dark)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::island::IslandState;

    #[test]
    fn test_music_controls_drive_island() {
        let mut engine = DesktopEngine::default();
        assert!(engine.music_play_pause());
        assert_eq!(engine.island.state(), IslandState::Music);
        let track = engine.island.music().current_track.clone().unwrap();
        assert_eq!(track.title, "Blinding Lights");

        engine.music_prev();
        let track = engine.island.music().current_track.clone().unwrap();
        assert_eq!(track.title, "Levitating");

        assert!(!engine.music_select(9));
        assert!(engine.music_select(1));
        assert_eq!(engine.island.music().current_track.as_ref().unwrap().title, "Starboy");

        assert!(!engine.music_play_pause());
        assert_eq!(engine.island.state(), IslandState::Idle);
    }

    #[test]
    fn test_system_theme_follows_host() {
        let mut engine = DesktopEngine::default();
        engine.set_theme(Theme::System);
        engine.system_prefers_dark = true;
        assert!(engine.is_dark_mode());

        assert!(engine.toggle_dark_mode());
        assert!(!engine.toggle_dark_mode());
    }

    #[test]
    fn test_control_center_panel() {
        let mut engine = DesktopEngine::default();
        engine.toggle_control_center();
        assert!(engine.control_center.is_open);
        engine.control_center.toggle_airplane_mode();
        assert!(!engine.control_center.wifi());
        engine.toggle_control_center();
        assert!(!engine.control_center.is_open);
    }
}
