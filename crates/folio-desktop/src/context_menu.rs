//! Desktop right-click menu

use serde::Serialize;

use crate::config::MenuSize;

/// Action behind a menu entry
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum ContextMenuAction {
    NewFolder,
    GetInfo,
    ChangeWallpaper,
    Stacks,
    SortName,
    SortKind,
    SortDate,
    SortSize,
    ViewOptions,
    OpenTerminal,
    OpenFinder,
    AddDemoTrash,
    EmptyTrash,
}

impl ContextMenuAction {
    /// Parse the kebab-case name the shell sends
    pub fn from_name(name: &str) -> Option<Self> {
        let action = match name {
            "new-folder" => ContextMenuAction::NewFolder,
            "get-info" => ContextMenuAction::GetInfo,
            "change-wallpaper" => ContextMenuAction::ChangeWallpaper,
            "stacks" => ContextMenuAction::Stacks,
            "sort-name" => ContextMenuAction::SortName,
            "sort-kind" => ContextMenuAction::SortKind,
            "sort-date" => ContextMenuAction::SortDate,
            "sort-size" => ContextMenuAction::SortSize,
            "view-options" => ContextMenuAction::ViewOptions,
            "open-terminal" => ContextMenuAction::OpenTerminal,
            "open-finder" => ContextMenuAction::OpenFinder,
            "add-demo-trash" => ContextMenuAction::AddDemoTrash,
            "empty-trash" => ContextMenuAction::EmptyTrash,
            _ => return None,
        };
        Some(action)
    }
}

/// One row of the menu
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum MenuEntry {
    Item {
        label: String,
        action: ContextMenuAction,
        #[serde(skip_serializing_if = "Option::is_none")]
        shortcut: Option<&'static str>,
        disabled: bool,
        danger: bool,
    },
    Submenu {
        label: &'static str,
        items: Vec<(&'static str, ContextMenuAction)>,
    },
    Separator,
}

impl MenuEntry {
    fn item(label: impl Into<String>, action: ContextMenuAction) -> Self {
        MenuEntry::Item {
            label: label.into(),
            action,
            shortcut: None,
            disabled: false,
            danger: false,
        }
    }

    fn disabled(label: &str, action: ContextMenuAction) -> Self {
        MenuEntry::Item {
            label: label.to_string(),
            action,
            shortcut: None,
            disabled: true,
            danger: false,
        }
    }
}

/// Build the menu rows for the current trash count
pub fn menu_entries(trash_count: usize) -> Vec<MenuEntry> {
    use ContextMenuAction::*;

    vec![
        MenuEntry::item("New Folder", NewFolder),
        MenuEntry::Separator,
        MenuEntry::Item {
            label: "Get Info".to_string(),
            action: GetInfo,
            shortcut: Some("⌘I"),
            disabled: false,
            danger: false,
        },
        MenuEntry::item("Change Wallpaper...", ChangeWallpaper),
        MenuEntry::Separator,
        MenuEntry::disabled("Use Stacks", Stacks),
        MenuEntry::Submenu {
            label: "Sort By",
            items: vec![
                ("Name", SortName),
                ("Kind", SortKind),
                ("Date Modified", SortDate),
                ("Size", SortSize),
            ],
        },
        MenuEntry::disabled("Show View Options", ViewOptions),
        MenuEntry::Separator,
        MenuEntry::item("Open Terminal", OpenTerminal),
        MenuEntry::item("Open Finder", OpenFinder),
        MenuEntry::Separator,
        MenuEntry::item("Move to Trash (Demo)", AddDemoTrash),
        MenuEntry::Item {
            label: format!("Empty Trash ({})", trash_count),
            action: EmptyTrash,
            shortcut: None,
            disabled: trash_count == 0,
            danger: true,
        },
    ]
}

/// Check whether an action is currently clickable
pub fn is_enabled(action: ContextMenuAction, trash_count: usize) -> bool {
    menu_entries(trash_count).iter().any(|entry| match entry {
        MenuEntry::Item { action: a, disabled, .. } => *a == action && !*disabled,
        MenuEntry::Submenu { items, .. } => items.iter().any(|(_, a)| *a == action),
        MenuEntry::Separator => false,
    })
}

/// Right-click menu visibility and placement
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ContextMenu {
    pub is_open: bool,
    pub x: f32,
    pub y: f32,
}

impl ContextMenu {
    /// Show the menu at the cursor, pulled back inside the viewport
    pub fn open_at(&mut self, x: f32, y: f32, viewport_width: f32, viewport_height: f32, size: MenuSize) {
        let (x, y) = clamp_position(x, y, viewport_width, viewport_height, size);
        self.is_open = true;
        self.x = x;
        self.y = y;
    }

    pub fn close(&mut self) {
        self.is_open = false;
    }
}

/// Keep a menu of `size` from spilling past the right or bottom edge
pub fn clamp_position(x: f32, y: f32, viewport_width: f32, viewport_height: f32, size: MenuSize) -> (f32, f32) {
    (
        x.min(viewport_width - size.width),
        y.min(viewport_height - size.height),
    )
}
