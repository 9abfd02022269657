//! Static desktop content
//!
//! Dock icons, menu-bar links, and the Finder folder trees. Everything here
//! is compiled in; the stores elsewhere only point into it.

mod dock;
mod locations;

pub use dock::{dock_app, nav_link, DockApp, DockTarget, NavLink, DOCK_APPS, NAV_LINKS};
pub use locations::{
    find_folder, location, locations, FileKind, FinderNode, Location, LocationKey, LocationRef,
    NodeKind,
};
