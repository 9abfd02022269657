//! Desktop engine coordinating all components
//!
//! This module is split into focused submodules:
//! - `windows`: Window, dock, navbar, and Finder operations
//! - `menus`: Spotlight and context menu handling
//! - `input`: Keyboard shortcuts and drag-and-drop
//! - `widgets`: Music player and control center

mod windows;
mod menus;
mod input;
mod widgets;

use std::cell::RefCell;
use std::rc::Rc;

use crate::config::DesktopConfig;
use crate::context_menu::ContextMenu;
use crate::control_center::ControlCenter;
use crate::island::{DynamicIsland, Notification};
use crate::location::LocationStore;
use crate::music::MusicPlayer;
use crate::persistence::Snapshot;
use crate::spotlight::Spotlight;
use crate::trash::TrashStore;
use crate::window::{WindowEvent, WindowManager, WindowObserver};

/// Desktop engine coordinating all desktop components
///
/// This is the main entry point for desktop operations, managing:
/// - Window manager (open/close, focus, z-order)
/// - Finder location and trash stores
/// - Spotlight and context menu panels
/// - Dynamic island, music player, and control center
///
/// There is no global instance; the host constructs one and routes every
/// UI event through it.
pub struct DesktopEngine {
    /// Engine configuration
    pub config: DesktopConfig,
    /// Window manager
    pub windows: WindowManager,
    /// Active Finder folder
    pub locations: LocationStore,
    /// Archive contents
    pub trash: TrashStore,
    /// Spotlight search panel
    pub spotlight: Spotlight,
    /// Desktop right-click menu
    pub context_menu: ContextMenu,
    /// Status widget
    pub island: DynamicIsland,
    /// Music widget
    pub music: MusicPlayer,
    /// Connectivity toggles and appearance
    pub control_center: ControlCenter,
    /// Host color-scheme preference, used by the system theme
    pub system_prefers_dark: bool,
    /// Whether the dock's trash menu is showing
    pub trash_menu_open: bool,
    /// Last timestamp handed to `tick` (ms)
    pub(crate) now_ms: f64,
    /// Window transitions waiting to be turned into notifications
    events: EventQueue,
}

impl Default for DesktopEngine {
    fn default() -> Self {
        Self::new(DesktopConfig::default())
    }
}

impl DesktopEngine {
    /// Create a desktop with every window closed
    pub fn new(config: DesktopConfig) -> Self {
        let mut windows = WindowManager::with_initial_z(config.initial_z);
        let events = EventQueue::default();
        windows.subscribe(Box::new(events.clone()));

        Self {
            spotlight: Spotlight::new(config.spotlight_result_limit),
            island: DynamicIsland::new(config.notification_duration_ms),
            config,
            windows,
            locations: LocationStore::new(),
            trash: TrashStore::new(),
            context_menu: ContextMenu::default(),
            music: MusicPlayer::default(),
            control_center: ControlCenter::new(),
            system_prefers_dark: false,
            trash_menu_open: false,
            now_ms: 0.0,
            events,
        }
    }

    /// Attach an extra observer to window transitions
    pub fn subscribe(&mut self, observer: Box<dyn WindowObserver>) {
        self.windows.subscribe(observer);
    }

    /// Advance time-driven state
    pub fn tick(&mut self, now_ms: f64) {
        self.now_ms = now_ms;
        if self.music.tick(now_ms) {
            self.sync_music();
        }
        self.island.tick(now_ms);
    }

    /// Capture the window registry
    pub fn snapshot(&self) -> Snapshot {
        Snapshot::capture(&self.windows)
    }

    /// Turn queued window transitions into island notifications
    pub(crate) fn flush_events(&mut self) {
        for event in self.events.drain() {
            if let WindowEvent::Opened { id, .. } = event {
                if self.config.notify_on_open {
                    let notification = Notification {
                        title: format!("{} opened", id.title()),
                        icon: id.as_str().to_string(),
                    };
                    self.island.show_notification(notification, self.now_ms);
                }
            }
        }
    }
}

/// Observer buffering transitions for the engine
#[derive(Clone, Default)]
struct EventQueue(Rc<RefCell<Vec<WindowEvent>>>);

impl EventQueue {
    fn drain(&self) -> Vec<WindowEvent> {
        std::mem::take(&mut *self.0.borrow_mut())
    }
}

impl WindowObserver for EventQueue {
    fn on_window_event(&mut self, event: &WindowEvent) {
        self.0.borrow_mut().push(*event);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::island::IslandState;
    use crate::window::WindowId;

    #[test]
    fn test_open_notifies() {
        let mut engine = DesktopEngine::default();
        engine.tick(500.0);
        engine.open_window(WindowId::Finder, None).unwrap();

        assert_eq!(engine.island.state(), IslandState::Notification);
        assert_eq!(engine.island.notification().unwrap().title, "Portfolio opened");

        engine.tick(3_500.0);
        assert_eq!(engine.island.state(), IslandState::Idle);
    }

    #[test]
    fn test_raise_does_not_notify() {
        let mut engine = DesktopEngine::default();
        engine.open_window(WindowId::Terminal, None).unwrap();
        engine.island.clear_notification();

        engine.open_window(WindowId::Terminal, None).unwrap();
        assert!(engine.island.notification().is_none());
    }

    #[test]
    fn test_notifications_can_be_disabled() {
        let config = DesktopConfig {
            notify_on_open: false,
            ..Default::default()
        };
        let mut engine = DesktopEngine::new(config);
        engine.open_window(WindowId::Photos, None).unwrap();
        assert_eq!(engine.island.state(), IslandState::Idle);
    }

    #[test]
    fn test_tick_moves_island_progress() {
        let mut engine = DesktopEngine::default();
        engine.music_play_pause();
        engine.tick(0.0);
        engine.tick(20_300.0);

        assert_eq!(engine.island.state(), IslandState::Music);
        assert!((engine.island.music().progress - 0.1).abs() < 0.001);
    }
}
