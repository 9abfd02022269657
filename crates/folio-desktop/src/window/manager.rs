//! Window manager for open/close state, focus, and z-order

use std::collections::HashMap;

use crate::config::INITIAL_Z;
use crate::error::{DesktopError, DesktopResult};
use super::{WindowContent, WindowEvent, WindowId, WindowObserver, WindowState};

/// Highest accepted seed z-index
///
/// Leaves room above the seed for the counter to run and for a full
/// renumbering of every window.
pub const MAX_INITIAL_Z: u32 = u32::MAX - 1024;

/// Window manager holding one registry slot per known window
///
/// Slots are created up front and never removed. Opening or focusing a
/// window hands it the next value of a monotonic z counter, so the most
/// recently raised window is always topmost. When the counter reaches the
/// top of its range the open windows are renumbered in stacking order.
pub struct WindowManager {
    /// Registry slots by ID
    windows: HashMap<WindowId, WindowState>,
    /// Seed z-order value
    initial_z: u32,
    /// Next z-order value
    next_z: u32,
    /// Transition hooks
    observers: Vec<Box<dyn WindowObserver>>,
}

impl Default for WindowManager {
    fn default() -> Self {
        Self::new()
    }
}

impl WindowManager {
    /// Create a manager with every window closed at [`INITIAL_Z`]
    pub fn new() -> Self {
        Self::with_initial_z(INITIAL_Z)
    }

    /// Create a manager seeding every window at `initial_z`
    ///
    /// Seeds above [`MAX_INITIAL_Z`] are clamped to it.
    pub fn with_initial_z(initial_z: u32) -> Self {
        if initial_z > MAX_INITIAL_Z {
            log::warn!("initial z {} too high, clamping to {}", initial_z, MAX_INITIAL_Z);
        }
        let initial_z = initial_z.min(MAX_INITIAL_Z);
        let windows = WindowId::ALL
            .into_iter()
            .map(|id| (id, WindowState::closed(id, initial_z)))
            .collect();

        Self {
            windows,
            initial_z,
            next_z: initial_z + 1,
            observers: Vec::new(),
        }
    }

    /// Register an observer for window transitions
    pub fn subscribe(&mut self, observer: Box<dyn WindowObserver>) {
        self.observers.push(observer);
    }

    /// Open a window on top, optionally replacing its content
    ///
    /// Opening an already open window re-raises it. Content that the window
    /// cannot display is rejected and nothing changes.
    pub fn open(&mut self, id: WindowId, data: Option<WindowContent>) -> DesktopResult<WindowEvent> {
        if let Some(content) = &data {
            if !content.accepted_by(id) {
                return Err(DesktopError::ContentMismatch {
                    window: id,
                    content: content.kind(),
                });
            }
        }
        Ok(self.raise(id, data))
    }

    /// Close a window
    ///
    /// The z-index and content stay put; the next open raises it again and
    /// may overwrite the content. Closing a closed window does nothing.
    pub fn close(&mut self, id: WindowId) -> Option<WindowEvent> {
        let window = self.slot_mut(id);
        if !window.is_open {
            return None;
        }
        window.is_open = false;

        let event = WindowEvent::Closed { id };
        log::debug!("window {} closed", id);
        self.emit(&event);
        Some(event)
    }

    /// Bring an open window to the top without touching its content
    pub fn focus(&mut self, id: WindowId) -> Option<WindowEvent> {
        if !self.is_open(id) {
            return None;
        }
        Some(self.raise(id, None))
    }

    /// Open when closed, close when open
    pub fn toggle(&mut self, id: WindowId) -> WindowEvent {
        match self.close(id) {
            Some(event) => event,
            None => self.raise(id, None),
        }
    }

    /// Open a window given its wire name
    pub fn open_by_name(&mut self, name: &str, data: Option<WindowContent>) -> DesktopResult<WindowEvent> {
        let id = resolve(name)?;
        self.open(id, data)
    }

    /// Close a window given its wire name
    pub fn close_by_name(&mut self, name: &str) -> DesktopResult<Option<WindowEvent>> {
        let id = resolve(name)?;
        Ok(self.close(id))
    }

    /// Focus a window given its wire name
    pub fn focus_by_name(&mut self, name: &str) -> DesktopResult<Option<WindowEvent>> {
        let id = resolve(name)?;
        Ok(self.focus(id))
    }

    /// Get a window slot by ID
    pub fn get(&self, id: WindowId) -> Option<&WindowState> {
        self.windows.get(&id)
    }

    /// Look up a window slot by wire name
    pub fn get_by_name(&self, name: &str) -> DesktopResult<&WindowState> {
        let id = resolve(name)?;
        self.windows
            .get(&id)
            .ok_or_else(|| DesktopError::UnknownWindow(name.to_string()))
    }

    /// Check whether a window is open
    #[inline]
    pub fn is_open(&self, id: WindowId) -> bool {
        self.windows.get(&id).is_some_and(|w| w.is_open)
    }

    /// Get the open window with the highest z-index
    ///
    /// Open windows never share a z-index; the id only orders the
    /// comparison so the answer does not depend on map iteration.
    pub fn topmost(&self) -> Option<WindowId> {
        self.windows
            .values()
            .filter(|w| w.is_open)
            .max_by_key(|w| (w.z_index, w.id))
            .map(|w| w.id)
    }

    /// Get open windows sorted by z-order (back to front)
    pub fn windows_by_z(&self) -> Vec<&WindowState> {
        let mut windows: Vec<&WindowState> = self.windows.values().filter(|w| w.is_open).collect();
        windows.sort_by_key(|w| (w.z_index, w.id));
        windows
    }

    /// Get all slots in registry order
    pub fn all_windows(&self) -> impl Iterator<Item = &WindowState> {
        WindowId::ALL.into_iter().filter_map(move |id| self.windows.get(&id))
    }

    /// Number of open windows
    pub fn open_count(&self) -> usize {
        self.windows.values().filter(|w| w.is_open).count()
    }

    /// Number of registry slots
    pub fn count(&self) -> usize {
        self.windows.len()
    }

    /// Put a window on top, opening it if needed
    fn raise(&mut self, id: WindowId, data: Option<WindowContent>) -> WindowEvent {
        let z_index = self.take_z();
        let window = self.slot_mut(id);
        let was_open = window.is_open;
        window.is_open = true;
        window.z_index = z_index;
        if data.is_some() {
            window.data = data;
        }

        let event = if was_open {
            WindowEvent::Raised { id, z_index }
        } else {
            WindowEvent::Opened { id, z_index }
        };
        log::debug!("window {} {} at z {}", id, if was_open { "raised" } else { "opened" }, z_index);
        self.emit(&event);
        event
    }

    fn take_z(&mut self) -> u32 {
        if self.next_z == u32::MAX {
            self.renumber();
        }
        let z = self.next_z;
        self.next_z += 1;
        z
    }

    /// Pack open windows just above the seed, keeping their order
    fn renumber(&mut self) {
        let order: Vec<WindowId> = self.windows_by_z().iter().map(|w| w.id).collect();
        log::debug!("renumbering {} open windows from z {}", order.len(), self.initial_z);

        for window in self.windows.values_mut().filter(|w| !w.is_open) {
            window.z_index = self.initial_z;
        }
        let mut z = self.initial_z;
        for id in order {
            z += 1;
            self.slot_mut(id).z_index = z;
        }
        self.next_z = z + 1;
    }

    fn slot_mut(&mut self, id: WindowId) -> &mut WindowState {
        let initial_z = self.initial_z;
        self.windows
            .entry(id)
            .or_insert_with(|| WindowState::closed(id, initial_z))
    }

    fn emit(&mut self, event: &WindowEvent) {
        for observer in &mut self.observers {
            observer.on_window_event(event);
        }
    }
}

/// Resolve a wire name, logging unknown ids
fn resolve(name: &str) -> DesktopResult<WindowId> {
    name.parse().map_err(|err: DesktopError| {
        log::error!("{}", err);
        err
    })
}
