//! Input handling module
//!
//! Keyboard shortcuts and drag-and-drop payload decoding.

mod shortcut;
mod drop;
mod result;

pub use shortcut::{Modifiers, Shortcut};
pub use drop::DropPayload;
pub use result::InputResult;
