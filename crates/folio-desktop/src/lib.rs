//! Desktop state for the portfolio shell
//!
//! This crate provides the core desktop environment functionality:
//! - Window management (open, close, focus, z-order)
//! - Dock, menu-bar, and Finder launchers over a static catalog
//! - Spotlight search and the desktop context menu
//! - Keyboard shortcuts and drag-to-trash
//! - Dynamic island status widget, music player, and control center
//!
//! ## Architecture
//!
//! The crate is organized into focused modules:
//!
//! - [`window`]: Window registry and z-order
//! - [`catalog`]: Dock apps, nav links, and Finder folder trees
//! - [`spotlight`]: Search index and panel state
//! - [`context_menu`]: Right-click menu entries and placement
//! - [`input`]: Shortcut mapping and drop payloads
//! - [`island`]: Status widget state machine
//! - [`music`]: Playlist and simulated playback
//! - [`control_center`]: Connectivity toggles and appearance
//! - [`persistence`]: State serialization for the shell
//!
//! ## Example
//!
//! ```rust
//! use folio_desktop::{DesktopEngine, WindowId};
//!
//! let mut engine = DesktopEngine::default();
//! engine.open_window(WindowId::Finder, None).unwrap();
//! engine.open_window(WindowId::Terminal, None).unwrap();
//! engine.close_window(WindowId::Terminal);
//!
//! assert_eq!(engine.windows.topmost(), Some(WindowId::Finder));
//! ```
//!
//! ## Design Principles
//!
//! 1. **Pure Rust Core**: All state management is pure Rust, testable without browser
//! 2. **Time Abstraction**: Timers take `now_ms` from the host for deterministic testing
//! 3. **No Globals**: The host owns one [`DesktopEngine`] and routes events through it

pub mod window;
pub mod catalog;
pub mod location;
pub mod trash;
pub mod spotlight;
pub mod context_menu;
pub mod input;
pub mod island;
pub mod music;
pub mod control_center;
pub mod persistence;
pub mod config;
pub mod error;

mod engine;

// WASM exports (only available with "wasm" feature)
#[cfg(feature = "wasm")]
mod wasm;
#[cfg(feature = "wasm")]
pub use wasm::*;

// Re-export core types for convenience
pub use window::{WindowContent, WindowEvent, WindowId, WindowManager, WindowObserver, WindowState};
pub use catalog::{FinderNode, LocationKey, LocationRef};
pub use context_menu::ContextMenuAction;
pub use control_center::{ControlCenter, Theme};
pub use music::MusicPlayer;
pub use input::{InputResult, Modifiers};
pub use persistence::Snapshot;
pub use config::DesktopConfig;
pub use error::{DesktopError, DesktopResult};

pub use engine::DesktopEngine;

/// Base z-index handed out before the first window opens
pub use config::INITIAL_Z;
