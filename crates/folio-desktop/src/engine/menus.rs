//! Spotlight and context menu operations

use crate::catalog::{LocationKey, LocationRef};
use crate::context_menu::{self, ContextMenuAction};
use crate::spotlight::{SpotlightAction, SpotlightCommand};
use crate::trash::TrashItem;
use crate::window::{WindowEvent, WindowId};
use super::DesktopEngine;

impl DesktopEngine {
    // =========================================================================
    // Spotlight
    // =========================================================================

    /// Show the search panel with a fresh query
    pub fn open_spotlight(&mut self) {
        self.spotlight.open();
    }

    pub fn close_spotlight(&mut self) {
        self.spotlight.close();
    }

    pub fn toggle_spotlight(&mut self) {
        self.spotlight.toggle();
    }

    /// Replace the search text
    pub fn set_spotlight_query(&mut self, query: &str) {
        self.spotlight.set_query(query);
    }

    /// Route a key press to the open panel
    ///
    /// Returns `true` when the panel consumed the key.
    pub fn spotlight_key(&mut self, key: &str) -> bool {
        if !self.spotlight.is_open() {
            return false;
        }
        match self.spotlight.handle_key(key) {
            Some(SpotlightCommand::Activate(action)) => {
                self.run_spotlight_action(action);
                true
            }
            Some(SpotlightCommand::Close) => {
                self.spotlight.close();
                true
            }
            None => matches!(key, "ArrowDown" | "ArrowUp" | "Enter"),
        }
    }

    /// Handle a click on the result at `index`
    pub fn spotlight_click(&mut self, index: usize) -> Option<WindowEvent> {
        let action = self.spotlight.activate_at(index)?;
        self.run_spotlight_action(action)
    }

    /// Carry out a chosen result and close the panel
    pub fn run_spotlight_action(&mut self, action: SpotlightAction) -> Option<WindowEvent> {
        let event = match action {
            SpotlightAction::OpenWindow { window } => self.open_window(window, None).ok(),
            SpotlightAction::OpenLocation { location } => self.open_location(location),
        };
        self.spotlight.close();
        event
    }

    // =========================================================================
    // Context menu
    // =========================================================================

    /// Show the desktop menu at the cursor
    pub fn open_context_menu(&mut self, x: f32, y: f32, viewport_width: f32, viewport_height: f32) {
        let size = self.config.context_menu_size;
        self.context_menu.open_at(x, y, viewport_width, viewport_height, size);
    }

    pub fn close_context_menu(&mut self) {
        self.context_menu.close();
    }

    /// Handle a click on a menu row
    ///
    /// The menu closes whether or not the action did anything. Disabled rows
    /// are inert.
    pub fn context_menu_action(&mut self, action: ContextMenuAction) {
        if context_menu::is_enabled(action, self.trash.len()) {
            self.run_menu_action(action);
        } else {
            log::debug!("ignoring disabled menu action {:?}", action);
        }
        self.context_menu.close();
    }

    fn run_menu_action(&mut self, action: ContextMenuAction) {
        use ContextMenuAction::*;

        match action {
            NewFolder => {
                self.open_location(LocationRef::top(LocationKey::Work));
            }
            GetInfo => {
                self.open_location(LocationRef::top(LocationKey::About));
            }
            ChangeWallpaper => {
                self.open_window(WindowId::Photos, None).ok();
            }
            OpenTerminal => {
                self.open_window(WindowId::Terminal, None).ok();
            }
            OpenFinder => {
                self.open_window(WindowId::Finder, None).ok();
            }
            AddDemoTrash => {
                let id = self.trash.fresh_id(self.now_ms as u64);
                let item = TrashItem::new(id, format!("Deleted Item {}", id), "file");
                self.trash.add(item, self.now_ms);
            }
            EmptyTrash => {
                let removed = self.trash.empty();
                log::debug!("emptied {} items from trash", removed);
            }
            Stacks | SortName | SortKind | SortDate | SortSize | ViewOptions => {}
        }
    }
}
