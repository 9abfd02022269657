//! Desktop tunables

use serde::{Deserialize, Serialize};

/// Stacking order every window starts with before it is first opened
pub const INITIAL_Z: u32 = 1000;

/// Maximum number of spotlight results shown at once
pub const SPOTLIGHT_RESULT_LIMIT: usize = 8;

/// How long a notification stays in the island (ms)
pub const NOTIFICATION_DURATION_MS: f64 = 3000.0;

/// Context menu footprint used to keep it on screen
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct MenuSize {
    pub width: f32,
    pub height: f32,
}

impl Default for MenuSize {
    fn default() -> Self {
        Self {
            width: 220.0,
            height: 350.0,
        }
    }
}

/// Configuration for a [`DesktopEngine`](crate::DesktopEngine)
///
/// Missing fields fall back to their defaults when deserialized, so the
/// browser shell can pass a partial JSON object.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DesktopConfig {
    /// Seed z-index for every window
    pub initial_z: u32,
    /// Spotlight result cap
    pub spotlight_result_limit: usize,
    /// Context menu size for viewport clamping
    pub context_menu_size: MenuSize,
    /// Notification auto-dismiss delay in milliseconds
    pub notification_duration_ms: f64,
    /// Push an island notification whenever a window opens
    pub notify_on_open: bool,
}

impl Default for DesktopConfig {
    fn default() -> Self {
        Self {
            initial_z: INITIAL_Z,
            spotlight_result_limit: SPOTLIGHT_RESULT_LIMIT,
            context_menu_size: MenuSize::default(),
            notification_duration_ms: NOTIFICATION_DURATION_MS,
            notify_on_open: true,
        }
    }
}
