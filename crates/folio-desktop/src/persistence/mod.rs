//! Persistence module for state serialization
//!
//! Provides snapshot export of the window registry for the browser shell.

mod snapshot;

pub use snapshot::{Snapshot, WindowSnapshot};
