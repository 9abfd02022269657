//! Per-window registry entry

use serde::{Deserialize, Serialize};

use super::{WindowContent, WindowId};

/// Registry slot for one window
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct WindowState {
    /// Which window this slot belongs to
    pub id: WindowId,
    /// Whether the window is currently shown
    pub is_open: bool,
    /// Stacking order (higher is on top)
    pub z_index: u32,
    /// Content to display, left in place across close/open
    pub data: Option<WindowContent>,
}

impl WindowState {
    /// Fresh closed slot
    pub fn closed(id: WindowId, z_index: u32) -> Self {
        Self {
            id,
            is_open: false,
            z_index,
            data: None,
        }
    }
}
