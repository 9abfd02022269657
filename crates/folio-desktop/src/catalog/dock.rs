//! Dock and navbar entries

use serde::Serialize;

use crate::window::WindowId;

/// What clicking a dock icon acts on
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DockTarget {
    /// Toggle a window
    Window(WindowId),
    /// Toggle the trash menu
    Trash,
}

/// An icon in the dock
#[derive(Clone, Copy, Debug, Serialize)]
pub struct DockApp {
    pub target: DockTarget,
    pub name: &'static str,
    pub icon: &'static str,
    /// Whether the icon opens a window when clicked
    pub can_open: bool,
}

impl DockApp {
    /// Wire id used by the shell ("finder", "trash", ...)
    pub fn id(&self) -> &'static str {
        match self.target {
            DockTarget::Window(id) => id.as_str(),
            DockTarget::Trash => "trash",
        }
    }

    /// Window opened by this icon, if any
    pub fn window(&self) -> Option<WindowId> {
        match self.target {
            DockTarget::Window(id) if self.can_open => Some(id),
            _ => None,
        }
    }
}

/// Dock icons, left to right
pub const DOCK_APPS: [DockApp; 7] = [
    DockApp { target: DockTarget::Window(WindowId::Finder), name: "Portfolio", icon: "finder.png", can_open: true },
    DockApp { target: DockTarget::Window(WindowId::CodeEditor), name: "Code Editor", icon: "vscode-dark_.png", can_open: true },
    DockApp { target: DockTarget::Window(WindowId::Safari), name: "Articles", icon: "safari.png", can_open: true },
    DockApp { target: DockTarget::Window(WindowId::Photos), name: "Gallery", icon: "photos.png", can_open: true },
    DockApp { target: DockTarget::Window(WindowId::Contact), name: "Contact", icon: "contact.png", can_open: true },
    DockApp { target: DockTarget::Window(WindowId::Terminal), name: "Skills", icon: "terminal.png", can_open: true },
    DockApp { target: DockTarget::Trash, name: "Archive", icon: "trash.png", can_open: false },
];

/// Find a dock icon by wire id
pub fn dock_app(id: &str) -> Option<&'static DockApp> {
    DOCK_APPS.iter().find(|app| app.id() == id)
}

/// A menu-bar shortcut
#[derive(Clone, Copy, Debug, Serialize)]
pub struct NavLink {
    pub id: u32,
    pub name: &'static str,
    pub target: WindowId,
}

/// Menu-bar links
pub const NAV_LINKS: [NavLink; 3] = [
    NavLink { id: 1, name: "Projects", target: WindowId::Finder },
    NavLink { id: 3, name: "Contact", target: WindowId::Contact },
    NavLink { id: 4, name: "Resume", target: WindowId::Resume },
];

/// Find a nav link by id
pub fn nav_link(id: u32) -> Option<&'static NavLink> {
    NAV_LINKS.iter().find(|link| link.id == id)
}
