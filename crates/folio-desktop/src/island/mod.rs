//! Dynamic island status widget
//!
//! A small state machine deciding what the island shows: music, a
//! transient notification, or the idle cycle of clock, activity, and
//! weather. Time is passed in by the host, the way the desktop engine
//! receives `now_ms` for its animations.

mod weather;
mod github;

pub use weather::{
    is_daytime, weather_info, Condition, CurrentReading, DailyReading, ForecastDay, WeatherReading, WeatherReport,
    FORECAST_DAYS, WEATHER_LOCATION,
};
pub use github::{profile_url, Activity, ActivityKind, GithubActivity, GITHUB_USERNAME};

use serde::{Deserialize, Serialize};

use crate::config::NOTIFICATION_DURATION_MS;

/// How often the idle island switches view (ms)
pub const VIEW_CYCLE_MS: f64 = 5000.0;

/// What the island is showing
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum IslandState {
    #[default]
    Idle,
    Music,
    Notification,
}

/// Sub-view rotated through while idle
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum IdleView {
    #[default]
    Clock,
    Github,
    Weather,
}

impl IdleView {
    fn next(self) -> Self {
        match self {
            IdleView::Clock => IdleView::Github,
            IdleView::Github => IdleView::Weather,
            IdleView::Weather => IdleView::Clock,
        }
    }
}

/// A track in the music widget
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Track {
    pub title: String,
    pub artist: String,
    #[serde(default)]
    pub artwork: Option<String>,
}

/// Music widget state mirrored into the island
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct MusicState {
    pub is_playing: bool,
    pub current_track: Option<Track>,
    /// Playback position, 0.0 to 1.0
    pub progress: f32,
}

/// Partial music update; absent fields are left alone
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct MusicUpdate {
    pub is_playing: Option<bool>,
    pub current_track: Option<Track>,
    pub progress: Option<f32>,
}

/// A transient message ("Finder opened")
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Notification {
    pub title: String,
    pub icon: String,
}

/// Dynamic island state
#[derive(Clone, Debug)]
pub struct DynamicIsland {
    state: IslandState,
    idle_view: IdleView,
    music: MusicState,
    notification: Option<(Notification, f64)>,
    last_cycle_ms: f64,
    duration_ms: f64,
    pub weather: WeatherReport,
    pub github: GithubActivity,
}

impl Default for DynamicIsland {
    fn default() -> Self {
        Self::new(NOTIFICATION_DURATION_MS)
    }
}

impl DynamicIsland {
    /// Create an idle island whose notifications last `duration_ms`
    pub fn new(duration_ms: f64) -> Self {
        Self {
            state: IslandState::Idle,
            idle_view: IdleView::Clock,
            music: MusicState::default(),
            notification: None,
            last_cycle_ms: 0.0,
            duration_ms,
            weather: WeatherReport::loading(),
            github: GithubActivity::loading(),
        }
    }

    #[inline]
    pub fn state(&self) -> IslandState {
        self.state
    }

    #[inline]
    pub fn idle_view(&self) -> IdleView {
        self.idle_view
    }

    #[inline]
    pub fn music(&self) -> &MusicState {
        &self.music
    }

    pub fn notification(&self) -> Option<&Notification> {
        self.notification.as_ref().map(|(n, _)| n)
    }

    /// Merge a music update
    ///
    /// Starting playback while idle switches to the music view; stopping
    /// while in it falls back to idle. Notifications are never interrupted.
    pub fn set_music(&mut self, update: MusicUpdate) {
        if let Some(track) = update.current_track {
            self.music.current_track = Some(track);
        }
        if let Some(progress) = update.progress {
            self.music.progress = progress.clamp(0.0, 1.0);
        }
        if let Some(playing) = update.is_playing {
            self.music.is_playing = playing;
            match (playing, self.state) {
                (true, IslandState::Idle) => self.state = IslandState::Music,
                (false, IslandState::Music) => self.state = IslandState::Idle,
                _ => {}
            }
        }
    }

    /// Show a notification, replacing any current one
    pub fn show_notification(&mut self, notification: Notification, now_ms: f64) {
        self.notification = Some((notification, now_ms));
        self.state = IslandState::Notification;
    }

    /// Dismiss the notification now
    pub fn clear_notification(&mut self) {
        self.notification = None;
        self.state = self.resting_state();
    }

    /// Advance timers
    ///
    /// Expires a notification after its duration and rotates the idle view.
    pub fn tick(&mut self, now_ms: f64) {
        let expired = self
            .notification
            .as_ref()
            .is_some_and(|(_, shown_at)| now_ms - shown_at >= self.duration_ms);
        if expired {
            self.clear_notification();
        }

        if self.music.is_playing {
            self.last_cycle_ms = now_ms;
        } else if now_ms - self.last_cycle_ms >= VIEW_CYCLE_MS {
            self.idle_view = self.idle_view.next();
            self.last_cycle_ms = now_ms;
        }
    }

    /// Replace the weather panel with fresh data
    pub fn set_weather(&mut self, mut weather: WeatherReport) {
        weather.is_loading = false;
        self.weather = weather;
    }

    /// Replace the activity panel with fresh data
    ///
    /// The typing flag survives the swap; an empty feed gets the
    /// "nothing yet" row.
    pub fn set_github(&mut self, mut github: GithubActivity) {
        let recent = std::mem::take(&mut github.recent_activity);
        github.is_typing = self.github.is_typing;
        self.github = github.with_activity(recent);
    }

    /// Show or hide the typing indicator on the activity panel
    pub fn set_github_typing(&mut self, is_typing: bool) {
        self.github.is_typing = is_typing;
    }

    /// Record a failed weather fetch
    pub fn weather_unavailable(&mut self, month: u32, hour: u32) {
        log::warn!("weather provider unreachable, using seasonal fallback");
        self.weather = WeatherReport::seasonal_fallback(month, hour);
    }

    /// Record a failed activity fetch
    pub fn github_unavailable(&mut self) {
        log::warn!("activity provider unreachable");
        self.github = GithubActivity::unavailable();
    }

    fn resting_state(&self) -> IslandState {
        if self.music.is_playing {
            IslandState::Music
        } else {
            IslandState::Idle
        }
    }
}

/// Greeting for the hour of day
pub fn greeting(hour: u32) -> &'static str {
    match hour {
        0..=11 => "Good morning",
        12..=16 => "Good afternoon",
        17..=20 => "Good evening",
        _ => "Working late?",
    }
}
