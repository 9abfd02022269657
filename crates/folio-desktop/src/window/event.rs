//! Window transition events and observers

use serde::Serialize;

use super::WindowId;

/// A change applied to the window registry
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum WindowEvent {
    /// A closed window was opened on top
    Opened { id: WindowId, z_index: u32 },
    /// An open window was brought to the top
    Raised { id: WindowId, z_index: u32 },
    /// An open window was closed
    Closed { id: WindowId },
}

impl WindowEvent {
    /// Window the event is about
    #[inline]
    pub fn window_id(&self) -> WindowId {
        match self {
            WindowEvent::Opened { id, .. }
            | WindowEvent::Raised { id, .. }
            | WindowEvent::Closed { id } => *id,
        }
    }

    #[inline]
    pub fn is_opened(&self) -> bool {
        matches!(self, WindowEvent::Opened { .. })
    }
}

/// Side-effect hook attached to registry transitions
///
/// Observers run after the state change has been applied and cannot alter
/// it. Animation layers and notification feeds hang off this.
pub trait WindowObserver {
    fn on_window_event(&mut self, event: &WindowEvent);
}

impl<F> WindowObserver for F
where
    F: FnMut(&WindowEvent),
{
    fn on_window_event(&mut self, event: &WindowEvent) {
        self(event)
    }
}
