//! Window lifecycle and launcher operations

use crate::catalog::{self, DockTarget, FileKind, FinderNode, LocationRef};
use crate::error::{DesktopError, DesktopResult};
use crate::window::{ImageFile, TextFile, WindowContent, WindowEvent, WindowId};
use super::DesktopEngine;

impl DesktopEngine {
    /// Open a window on top, optionally replacing its content
    pub fn open_window(&mut self, id: WindowId, data: Option<WindowContent>) -> DesktopResult<WindowEvent> {
        let result = self.windows.open(id, data);
        log_rejected(&result);
        self.flush_events();
        result
    }

    /// Open a window by wire name
    pub fn open_window_by_name(&mut self, name: &str, data: Option<WindowContent>) -> DesktopResult<WindowEvent> {
        let result = self.windows.open_by_name(name, data);
        log_rejected(&result);
        self.flush_events();
        result
    }

    /// Close a window
    pub fn close_window(&mut self, id: WindowId) -> Option<WindowEvent> {
        let event = self.windows.close(id);
        self.flush_events();
        event
    }

    /// Close a window by wire name
    pub fn close_window_by_name(&mut self, name: &str) -> DesktopResult<Option<WindowEvent>> {
        let result = self.windows.close_by_name(name);
        self.flush_events();
        result
    }

    /// Bring an open window to the front (clicked or dragged)
    pub fn focus_window(&mut self, id: WindowId) -> Option<WindowEvent> {
        let event = self.windows.focus(id);
        self.flush_events();
        event
    }

    /// Close the topmost window, if any
    pub fn close_topmost(&mut self) -> Option<WindowId> {
        let id = self.windows.topmost()?;
        self.close_window(id);
        Some(id)
    }

    /// Handle a click on a dock icon
    ///
    /// Window icons toggle their window; the trash icon toggles its menu.
    pub fn toggle_dock_app(&mut self, app_id: &str) -> DesktopResult<Option<WindowEvent>> {
        let Some(app) = catalog::dock_app(app_id) else {
            log::error!("Window not found for app: {}", app_id);
            return Err(DesktopError::UnknownDockApp(app_id.to_string()));
        };

        match app.target {
            DockTarget::Trash => {
                self.trash_menu_open = !self.trash_menu_open;
                Ok(None)
            }
            DockTarget::Window(_) if !app.can_open => Ok(None),
            DockTarget::Window(id) => {
                let event = self.windows.toggle(id);
                self.flush_events();
                Ok(Some(event))
            }
        }
    }

    /// Handle a click on a menu-bar link
    pub fn open_nav_link(&mut self, link_id: u32) -> Option<WindowEvent> {
        let link = catalog::nav_link(link_id)?;
        self.open_window(link.target, None).ok()
    }

    /// Point Finder at a folder and bring it up
    ///
    /// Unknown folders leave Finder where it was and open nothing.
    pub fn open_location(&mut self, loc: LocationRef) -> Option<WindowEvent> {
        if !self.locations.set_active(loc) {
            return None;
        }
        self.open_window(WindowId::Finder, Some(WindowContent::Folder(loc))).ok()
    }

    /// Open a Finder entry in the window that shows it
    ///
    /// A folder node only brings Finder forward; pointing it at the folder
    /// needs the enclosing location, see [`open_location`](Self::open_location).
    pub fn open_file(&mut self, node: &FinderNode) -> DesktopResult<Option<WindowEvent>> {
        let Some(kind) = node.file_kind() else {
            return self.open_window(WindowId::Finder, None).map(Some);
        };

        let (id, data) = match kind {
            FileKind::Txt => (
                WindowId::TxtFile,
                Some(WindowContent::Text(TextFile {
                    name: node.name.to_string(),
                    subtitle: node.subtitle.map(str::to_string),
                    image: node.image.map(str::to_string),
                    description: node.description.iter().map(|line| line.to_string()).collect(),
                })),
            ),
            FileKind::Img => (
                WindowId::ImgFile,
                Some(WindowContent::Image(ImageFile {
                    name: node.name.to_string(),
                    image_url: node.image_url.unwrap_or_default().to_string(),
                })),
            ),
            FileKind::Url | FileKind::Fig => match node.href {
                Some(href) => (WindowId::Safari, Some(WindowContent::Link { url: href.to_string() })),
                None => return Ok(None),
            },
            FileKind::Pdf => (WindowId::Resume, None),
        };

        self.open_window(id, data).map(Some)
    }
}

/// Unknown names are already logged at lookup
fn log_rejected(result: &DesktopResult<WindowEvent>) {
    if let Err(err @ DesktopError::ContentMismatch { .. }) = result {
        log::error!("{}", err);
    }
}
