//! Window management module
//!
//! Provides the window registry: open/close state, focus, z-order, and
//! per-window content.

mod id;
mod content;
mod state;
mod event;
mod manager;

pub use id::WindowId;
pub use content::{CodeSnippet, ImageFile, TextFile, WindowContent};
pub use state::WindowState;
pub use event::{WindowEvent, WindowObserver};
pub use manager::{WindowManager, MAX_INITIAL_Z};
