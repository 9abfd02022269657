//! Music widget player
//!
//! A fixed playlist with simulated playback. Progress advances with the
//! `now_ms` the host passes to [`MusicPlayer::tick`], and finishing a
//! track rolls over to the next one. The player feeds the dynamic island
//! through [`MusicPlayer::island_update`].

use serde::Serialize;

use crate::island::{MusicUpdate, Track};

/// Default volume (percent)
pub const DEFAULT_VOLUME: u8 = 75;

/// A playlist entry
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct PlaylistTrack {
    pub id: u32,
    pub title: &'static str,
    pub artist: &'static str,
    pub album: &'static str,
    /// Length in seconds
    pub duration_s: u32,
    pub cover: &'static str,
}

/// Tracks shipped with the widget
pub const PLAYLIST: &[PlaylistTrack] = &[
    PlaylistTrack {
        id: 1,
        title: "Blinding Lights",
        artist: "The Weeknd",
        album: "After Hours",
        duration_s: 203,
        cover: "https://i.scdn.co/image/ab67616d0000b2738863bc11d2aa12b54f5aeb36",
    },
    PlaylistTrack {
        id: 2,
        title: "Starboy",
        artist: "The Weeknd ft. Daft Punk",
        album: "Starboy",
        duration_s: 230,
        cover: "https://i.scdn.co/image/ab67616d0000b2734718e2b124f79258be7bc452",
    },
    PlaylistTrack {
        id: 3,
        title: "Save Your Tears",
        artist: "The Weeknd",
        album: "After Hours",
        duration_s: 215,
        cover: "https://i.scdn.co/image/ab67616d0000b2738863bc11d2aa12b54f5aeb36",
    },
    PlaylistTrack {
        id: 4,
        title: "Levitating",
        artist: "Dua Lipa",
        album: "Future Nostalgia",
        duration_s: 203,
        cover: "https://i.scdn.co/image/ab67616d0000b273bd26ede1ae69327010d49946",
    },
];

/// Playback state of the music widget
#[derive(Clone, Debug, Serialize)]
pub struct MusicPlayer {
    tracks: &'static [PlaylistTrack],
    current: usize,
    is_playing: bool,
    /// Position in the current track, 0.0 to 1.0
    progress: f32,
    volume: u8,
    /// Widget shown instead of its launcher button
    pub is_open: bool,
    /// Playlist panel shown
    pub is_expanded: bool,
    #[serde(skip)]
    last_tick_ms: Option<f64>,
}

impl Default for MusicPlayer {
    fn default() -> Self {
        Self::new(PLAYLIST)
    }
}

impl MusicPlayer {
    /// Create a paused player at the first track
    pub fn new(tracks: &'static [PlaylistTrack]) -> Self {
        Self {
            tracks,
            current: 0,
            is_playing: false,
            progress: 0.0,
            volume: DEFAULT_VOLUME,
            is_open: false,
            is_expanded: false,
            last_tick_ms: None,
        }
    }

    #[inline]
    pub fn tracks(&self) -> &'static [PlaylistTrack] {
        self.tracks
    }

    #[inline]
    pub fn current_index(&self) -> usize {
        self.current
    }

    pub fn current_track(&self) -> Option<&'static PlaylistTrack> {
        let tracks: &'static [PlaylistTrack] = self.tracks;
        tracks.get(self.current)
    }

    #[inline]
    pub fn is_playing(&self) -> bool {
        self.is_playing
    }

    #[inline]
    pub fn progress(&self) -> f32 {
        self.progress
    }

    #[inline]
    pub fn volume(&self) -> u8 {
        self.volume
    }

    /// Seconds played in the current track
    pub fn elapsed_s(&self) -> f32 {
        self.current_track()
            .map_or(0.0, |track| self.progress * track.duration_s as f32)
    }

    /// Start or pause playback, returning whether it is now playing
    ///
    /// An empty playlist never starts.
    pub fn play_pause(&mut self) -> bool {
        if self.tracks.is_empty() {
            return false;
        }
        self.is_playing = !self.is_playing;
        self.last_tick_ms = None;
        self.is_playing
    }

    /// Skip forward, wrapping from the last track to the first
    pub fn next(&mut self) {
        if self.tracks.is_empty() {
            return;
        }
        self.jump((self.current + 1) % self.tracks.len());
    }

    /// Skip back, wrapping from the first track to the last
    pub fn prev(&mut self) {
        if self.tracks.is_empty() {
            return;
        }
        let index = self.current.checked_sub(1).unwrap_or(self.tracks.len() - 1);
        self.jump(index);
    }

    /// Jump to a playlist entry; out-of-range indices are ignored
    pub fn select(&mut self, index: usize) -> bool {
        if index >= self.tracks.len() {
            log::warn!("no playlist entry at {}", index);
            return false;
        }
        self.jump(index);
        true
    }

    /// Set the volume, clamped to 100
    pub fn set_volume(&mut self, volume: u8) {
        self.volume = volume.min(100);
    }

    pub fn toggle_expanded(&mut self) {
        self.is_expanded = !self.is_expanded;
    }

    /// Advance playback to `now_ms`
    ///
    /// The first tick after starting only records the time. Returns true
    /// while playing.
    pub fn tick(&mut self, now_ms: f64) -> bool {
        if !self.is_playing {
            self.last_tick_ms = None;
            return false;
        }
        let Some(track) = self.current_track() else {
            return false;
        };
        let duration_ms = f64::from(track.duration_s.max(1)) * 1000.0;

        if let Some(last) = self.last_tick_ms {
            let elapsed = (now_ms - last).max(0.0);
            self.progress += (elapsed / duration_ms) as f32;
            if self.progress >= 1.0 {
                log::debug!("finished {}", track.title);
                self.next();
            }
        }
        self.last_tick_ms = Some(now_ms);
        true
    }

    /// Island view of the player
    pub fn island_update(&self) -> MusicUpdate {
        MusicUpdate {
            is_playing: Some(self.is_playing),
            current_track: self.current_track().map(|track| Track {
                title: track.title.to_string(),
                artist: track.artist.to_string(),
                artwork: Some(track.cover.to_string()),
            }),
            progress: Some(self.progress),
        }
    }

    fn jump(&mut self, index: usize) {
        self.current = index;
        self.progress = 0.0;
    }
}

/// `m:ss` label for a number of seconds
pub fn format_time(seconds: f32) -> String {
    let total = seconds.max(0.0) as u32;
    format!("{}:{:02}", total / 60, total % 60)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let player = MusicPlayer::default();
        assert_eq!(player.tracks().len(), 4);
        assert_eq!(player.current_track().unwrap().title, "Blinding Lights");
        assert_eq!(player.volume(), DEFAULT_VOLUME);
        assert!(!player.is_playing());
        assert!(!player.is_open);
    }

    #[test]
    fn test_next_and_prev_wrap() {
        let mut player = MusicPlayer::default();
        player.prev();
        assert_eq!(player.current_index(), 3);
        assert_eq!(player.current_track().unwrap().title, "Levitating");

        player.next();
        assert_eq!(player.current_index(), 0);
        player.next();
        assert_eq!(player.current_index(), 1);
    }

    #[test]
    fn test_skipping_resets_progress() {
        let mut player = MusicPlayer::default();
        player.play_pause();
        player.tick(0.0);
        player.tick(50_000.0);
        assert!(player.progress() > 0.2);

        player.next();
        assert_eq!(player.progress(), 0.0);
    }

    #[test]
    fn test_select() {
        let mut player = MusicPlayer::default();
        assert!(player.select(2));
        assert_eq!(player.current_track().unwrap().title, "Save Your Tears");
        assert!(!player.select(4));
        assert_eq!(player.current_index(), 2);
    }

    #[test]
    fn test_tick_finishes_track() {
        let mut player = MusicPlayer::default();
        player.select(3);
        player.play_pause();

        assert!(player.tick(1_000.0));
        assert_eq!(player.progress(), 0.0);

        player.tick(102_500.0);
        assert!((player.progress() - 0.5).abs() < 0.001);
        assert_eq!(format_time(player.elapsed_s()), "1:41");

        // Past the end of the last track rolls back to the first
        player.tick(205_000.0);
        assert_eq!(player.current_index(), 0);
        assert_eq!(player.progress(), 0.0);
        assert!(player.is_playing());
    }

    #[test]
    fn test_paused_ticks_do_nothing() {
        let mut player = MusicPlayer::default();
        assert!(!player.tick(1_000.0));
        assert!(!player.tick(90_000.0));
        assert_eq!(player.progress(), 0.0);

        // Time spent paused is not counted after resuming
        player.play_pause();
        player.tick(100_000.0);
        assert_eq!(player.progress(), 0.0);
    }

    #[test]
    fn test_empty_playlist_is_inert() {
        let mut player = MusicPlayer::new(&[]);
        assert!(!player.play_pause());
        player.next();
        player.prev();
        assert!(!player.select(0));
        assert!(!player.tick(5_000.0));
        assert!(player.current_track().is_none());
        assert_eq!(player.elapsed_s(), 0.0);

        let update = player.island_update();
        assert_eq!(update.is_playing, Some(false));
        assert!(update.current_track.is_none());
    }

    #[test]
    fn test_volume_clamped() {
        let mut player = MusicPlayer::default();
        player.set_volume(140);
        assert_eq!(player.volume(), 100);
        player.set_volume(20);
        assert_eq!(player.volume(), 20);
    }

    #[test]
    fn test_island_update_carries_artwork() {
        let mut player = MusicPlayer::default();
        player.play_pause();
        let update = player.island_update();
        let track = update.current_track.unwrap();
        assert_eq!(track.title, "Blinding Lights");
        assert_eq!(track.artwork.as_deref(), Some(PLAYLIST[0].cover));
        assert_eq!(update.is_playing, Some(true));
    }

    #[test]
    fn test_format_time() {
        assert_eq!(format_time(0.0), "0:00");
        assert_eq!(format_time(203.0), "3:23");
        assert_eq!(format_time(-4.0), "0:00");
    }
}
