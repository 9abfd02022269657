//! Searchable item index built from the catalog

use serde::Serialize;

use crate::catalog::{self, LocationRef, DOCK_APPS, NAV_LINKS};
use crate::window::WindowId;

/// What happens when a result is chosen
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum SpotlightAction {
    /// Open a window
    OpenWindow { window: WindowId },
    /// Point Finder at a folder and open it
    OpenLocation { location: LocationRef },
}

/// One searchable entry
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct SearchItem {
    /// Unique key for the result list
    pub id: String,
    pub name: &'static str,
    /// Category label ("Application", "Folder", "TXT", ...)
    pub kind: String,
    /// Icon hint for the shell
    pub icon: &'static str,
    /// Enclosing project for nested files
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent_name: Option<&'static str>,
    pub action: SpotlightAction,
}

impl SearchItem {
    /// Case-insensitive match against name, category, or parent
    pub fn matches(&self, needle_lower: &str) -> bool {
        self.name.to_lowercase().contains(needle_lower)
            || self.kind.to_lowercase().contains(needle_lower)
            || self
                .parent_name
                .is_some_and(|parent| parent.to_lowercase().contains(needle_lower))
    }
}

/// Build the full index: apps, quick actions, then locations and their
/// contents in sidebar order
pub fn build_index() -> Vec<SearchItem> {
    let mut items = Vec::new();

    for app in DOCK_APPS.iter() {
        if let Some(window) = app.window() {
            items.push(SearchItem {
                id: format!("app-{}", app.id()),
                name: app.name,
                kind: "Application".to_string(),
                icon: "app",
                parent_name: None,
                action: SpotlightAction::OpenWindow { window },
            });
        }
    }

    for link in NAV_LINKS.iter() {
        items.push(SearchItem {
            id: format!("nav-{}", link.id),
            name: link.name,
            kind: "Quick Action".to_string(),
            icon: "action",
            parent_name: None,
            action: SpotlightAction::OpenWindow { window: link.target },
        });
    }

    for loc in catalog::locations() {
        let top = LocationRef::top(loc.key);
        items.push(SearchItem {
            id: format!("loc-{}", loc.id),
            name: loc.name,
            kind: "Folder".to_string(),
            icon: "folder",
            parent_name: None,
            action: SpotlightAction::OpenLocation { location: top },
        });

        for child in loc.children {
            match child.file_kind() {
                None => {
                    let project = LocationRef::project(loc.key, child.id);
                    items.push(SearchItem {
                        id: format!("folder-{}", child.id),
                        name: child.name,
                        kind: "Project".to_string(),
                        icon: "folder",
                        parent_name: None,
                        action: SpotlightAction::OpenLocation { location: project },
                    });

                    for file in child.children {
                        let (kind, icon) = file_labels(file.file_kind());
                        items.push(SearchItem {
                            id: format!("file-{}-{}", child.id, file.id),
                            name: file.name,
                            kind,
                            icon,
                            parent_name: Some(child.name),
                            action: SpotlightAction::OpenLocation { location: project },
                        });
                    }
                }
                Some(file_kind) => {
                    let (kind, icon) = file_labels(Some(file_kind));
                    items.push(SearchItem {
                        id: format!("file-{}-{}", loc.id, child.id),
                        name: child.name,
                        kind,
                        icon,
                        parent_name: None,
                        action: SpotlightAction::OpenLocation { location: top },
                    });
                }
            }
        }
    }

    items
}

fn file_labels(kind: Option<catalog::FileKind>) -> (String, &'static str) {
    match kind {
        Some(kind) => (kind.as_str().to_uppercase(), kind.as_str()),
        None => ("File".to_string(), "file"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::LocationKey;

    #[test]
    fn test_index_starts_with_apps() {
        let index = build_index();
        let apps: Vec<&SearchItem> = index.iter().filter(|i| i.kind == "Application").collect();
        // Trash cannot be opened, so it is not searchable
        assert_eq!(apps.len(), 6);
        assert_eq!(index[0].id, "app-finder");
        assert_eq!(index[0].name, "Portfolio");
    }

    #[test]
    fn test_nested_files_carry_parent() {
        let index = build_index();
        let map = index.iter().find(|i| i.name == "DDOSMap.png").unwrap();
        assert_eq!(map.kind, "IMG");
        assert_eq!(map.icon, "img");
        assert_eq!(map.parent_name, Some("Sentinel DDOS Attack Map"));
        assert_eq!(
            map.action,
            SpotlightAction::OpenLocation { location: LocationRef::project(LocationKey::Work, 6) }
        );
    }

    #[test]
    fn test_loose_files_open_their_location() {
        let index = build_index();
        let resume = index.iter().find(|i| i.name == "Resume.pdf").unwrap();
        assert_eq!(resume.id, "file-3-1");
        assert_eq!(resume.kind, "PDF");
        assert_eq!(
            resume.action,
            SpotlightAction::OpenLocation { location: LocationRef::top(LocationKey::Resume) }
        );
    }

    #[test]
    fn test_matches_is_case_insensitive() {
        let index = build_index();
        let item = index.iter().find(|i| i.name == "Uphoria.txt").unwrap();
        assert!(item.matches("uphoria"));
        assert!(item.matches("txt"));
        assert!(item.matches("music recommendation"));
        assert!(!item.matches("kubernetes"));
    }
}
