//! Error types for desktop operations
//!
//! Every error here is local and recoverable. Callers log and carry on;
//! the worst outcome is a stale or placeholder panel.

use crate::window::WindowId;

/// Errors produced by desktop state operations.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum DesktopError {
    /// A window id string did not match any registered window.
    #[error("window not found: {0}")]
    UnknownWindow(String),

    /// A dock entry id did not match any dock app.
    #[error("dock app not found: {0}")]
    UnknownDockApp(String),

    /// A content payload was handed to a window that cannot display it.
    #[error("{content} content cannot be shown in the {window} window")]
    ContentMismatch {
        window: WindowId,
        content: &'static str,
    },

    /// A drag-and-drop payload could not be decoded.
    #[error("malformed drop payload: {0}")]
    MalformedPayload(String),
}

/// Convenience alias for desktop results.
pub type DesktopResult<T> = Result<T, DesktopError>;
