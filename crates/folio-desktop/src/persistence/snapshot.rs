//! Snapshot serialization for window state

use serde::{Deserialize, Serialize};

use crate::window::{WindowContent, WindowId, WindowManager, WindowState};

/// Serialized form of one registry slot
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct WindowSnapshot {
    pub id: WindowId,
    pub is_open: bool,
    pub z_index: u32,
    #[serde(default)]
    pub data: Option<WindowContent>,
}

impl From<&WindowState> for WindowSnapshot {
    fn from(state: &WindowState) -> Self {
        Self {
            id: state.id,
            is_open: state.is_open,
            z_index: state.z_index,
            data: state.data.clone(),
        }
    }
}

/// Snapshot of the window registry
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct Snapshot {
    /// Version for migration support
    pub version: u32,
    /// Topmost open window at capture time
    #[serde(default)]
    pub topmost: Option<WindowId>,
    /// Every registry slot, in registry order
    pub windows: Vec<WindowSnapshot>,
}

impl Snapshot {
    /// Current snapshot version
    pub const CURRENT_VERSION: u32 = 1;

    /// Capture the current registry
    pub fn capture(windows: &WindowManager) -> Self {
        Self {
            version: Self::CURRENT_VERSION,
            topmost: windows.topmost(),
            windows: windows.all_windows().map(WindowSnapshot::from).collect(),
        }
    }

    /// Slot for a window
    pub fn window(&self, id: WindowId) -> Option<&WindowSnapshot> {
        self.windows.iter().find(|w| w.id == id)
    }

    /// Check if snapshot needs migration
    pub fn needs_migration(&self) -> bool {
        self.version < Self::CURRENT_VERSION
    }

    /// Migrate snapshot to current version
    pub fn migrate(&mut self) {
        // Version 0 did not record the topmost window
        if self.topmost.is_none() {
            self.topmost = self
                .windows
                .iter()
                .filter(|w| w.is_open)
                .max_by_key(|w| w.z_index)
                .map(|w| w.id);
        }
        self.version = Self::CURRENT_VERSION;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{LocationKey, LocationRef};

    #[test]
    fn test_capture_covers_every_window() {
        let mut wm = WindowManager::new();
        wm.open(WindowId::Terminal, None).unwrap();

        let snapshot = Snapshot::capture(&wm);
        assert_eq!(snapshot.version, Snapshot::CURRENT_VERSION);
        assert_eq!(snapshot.windows.len(), WindowId::ALL.len());
        assert_eq!(snapshot.topmost, Some(WindowId::Terminal));
        assert!(snapshot.window(WindowId::Terminal).unwrap().is_open);
        assert!(!snapshot.window(WindowId::Finder).unwrap().is_open);
    }

    #[test]
    fn test_snapshot_serialization() {
        let mut wm = WindowManager::new();
        let folder = WindowContent::Folder(LocationRef::project(LocationKey::Work, 5));
        wm.open(WindowId::Finder, Some(folder.clone())).unwrap();

        let json = serde_json::to_string(&Snapshot::capture(&wm)).unwrap();
        let restored: Snapshot = serde_json::from_str(&json).unwrap();

        let finder = restored.window(WindowId::Finder).unwrap();
        assert_eq!(finder.data, Some(folder));
        assert_eq!(restored.topmost, Some(WindowId::Finder));
    }

    #[test]
    fn test_snapshot_json_structure() {
        let json = serde_json::to_string(&Snapshot::capture(&WindowManager::new())).unwrap();
        assert!(json.contains("\"version\""));
        assert!(json.contains("\"windows\""));
        assert!(json.contains("\"is_open\""));
        assert!(json.contains("\"z_index\""));
        assert!(json.contains("\"codeeditor\""));
    }

    #[test]
    fn test_snapshot_default() {
        let snapshot: Snapshot = Default::default();
        assert_eq!(snapshot.version, 0); // Default doesn't set CURRENT_VERSION
        assert!(snapshot.windows.is_empty());
        assert!(snapshot.needs_migration());
    }

    #[test]
    fn test_snapshot_migrate_fills_topmost() {
        let mut snapshot = Snapshot {
            version: 0,
            topmost: None,
            windows: vec![
                WindowSnapshot { id: WindowId::Finder, is_open: true, z_index: 1003, data: None },
                WindowSnapshot { id: WindowId::Photos, is_open: true, z_index: 1001, data: None },
                WindowSnapshot { id: WindowId::Safari, is_open: false, z_index: 1009, data: None },
            ],
        };

        snapshot.migrate();
        assert!(!snapshot.needs_migration());
        assert_eq!(snapshot.topmost, Some(WindowId::Finder));
        assert_eq!(snapshot.windows.len(), 3);
    }
}
