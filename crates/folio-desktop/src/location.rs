//! Active Finder location

use crate::catalog::{self, FinderNode, LocationRef};

/// Tracks which folder Finder is showing
#[derive(Clone, Debug, Default)]
pub struct LocationStore {
    active: LocationRef,
}

impl LocationStore {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn active(&self) -> LocationRef {
        self.active
    }

    /// Switch Finder to another folder
    ///
    /// Returns `false` and keeps the current folder when the reference does
    /// not point at a folder in the catalog.
    pub fn set_active(&mut self, loc: LocationRef) -> bool {
        if loc.folder.is_some() && catalog::find_folder(loc).is_none() {
            log::warn!("no folder {:?} in location {}", loc.folder, loc.location);
            return false;
        }
        self.active = loc;
        true
    }

    /// Catalog node of the active project folder; `None` at a location's top
    pub fn resolve(&self) -> Option<&'static FinderNode> {
        catalog::find_folder(self.active)
    }

    /// Entries of the active folder
    pub fn entries(&self) -> &'static [FinderNode] {
        self.active.children().unwrap_or(&[])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::LocationKey;

    #[test]
    fn test_default_is_work() {
        let store = LocationStore::new();
        assert_eq!(store.active(), LocationRef::top(LocationKey::Work));
        assert_eq!(store.entries().len(), 3);
    }

    #[test]
    fn test_set_active() {
        let mut store = LocationStore::new();
        assert!(store.set_active(LocationRef::project(LocationKey::Work, 7)));
        assert_eq!(store.entries()[0].name, "Uphoria.txt");

        assert!(!store.set_active(LocationRef::project(LocationKey::Resume, 3)));
        assert_eq!(store.active(), LocationRef::project(LocationKey::Work, 7));
        assert_eq!(store.resolve().unwrap().id, 7);
    }

    #[test]
    fn test_resolve_top_level() {
        let mut store = LocationStore::new();
        store.set_active(LocationRef::top(LocationKey::Trash));
        assert!(store.resolve().is_none());
        assert_eq!(store.entries().len(), 2);
    }
}
