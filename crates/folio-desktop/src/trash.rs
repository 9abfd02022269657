//! Archive (trash) store

use serde::{Deserialize, Serialize};

/// Something dragged into the trash
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TrashItem {
    pub id: u64,
    pub name: String,
    #[serde(rename = "type", default = "default_kind")]
    pub kind: String,
    /// When the item was trashed (ms since epoch); set by the store
    #[serde(default)]
    pub trashed_at_ms: f64,
}

fn default_kind() -> String {
    "file".to_string()
}

impl TrashItem {
    pub fn new(id: u64, name: impl Into<String>, kind: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            kind: kind.into(),
            trashed_at_ms: 0.0,
        }
    }
}

/// Items currently in the trash, oldest first
#[derive(Clone, Debug, Default, Serialize)]
pub struct TrashStore {
    items: Vec<TrashItem>,
}

impl TrashStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Put an item in the trash, stamping it with `now_ms`
    pub fn add(&mut self, mut item: TrashItem, now_ms: f64) {
        item.trashed_at_ms = now_ms;
        log::debug!("trashed {} ({})", item.name, item.id);
        self.items.push(item);
    }

    /// Id for a new item: `hint` unless an item already holds it or a later id
    pub fn fresh_id(&self, hint: u64) -> u64 {
        match self.items.iter().map(|item| item.id).max() {
            Some(max) if max >= hint => max.saturating_add(1),
            _ => hint,
        }
    }

    /// Drop every item with the given id
    pub fn remove(&mut self, id: u64) -> usize {
        let before = self.items.len();
        self.items.retain(|item| item.id != id);
        before - self.items.len()
    }

    /// Take an item back out of the trash
    pub fn restore(&mut self, id: u64) -> Option<TrashItem> {
        let index = self.items.iter().position(|item| item.id == id)?;
        Some(self.items.remove(index))
    }

    /// Discard everything, returning how many items went
    pub fn empty(&mut self) -> usize {
        let count = self.items.len();
        self.items.clear();
        count
    }

    #[inline]
    pub fn items(&self) -> &[TrashItem] {
        &self.items
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_and_empty() {
        let mut trash = TrashStore::new();
        assert!(trash.is_empty());

        trash.add(TrashItem::new(1, "notes.txt", "file"), 1_000.0);
        trash.add(TrashItem::new(2, "draft.png", "img"), 2_000.0);
        assert_eq!(trash.len(), 2);
        assert!((trash.items()[1].trashed_at_ms - 2_000.0).abs() < 0.001);

        assert_eq!(trash.empty(), 2);
        assert!(trash.is_empty());
        assert_eq!(trash.empty(), 0);
    }

    #[test]
    fn test_remove_and_restore() {
        let mut trash = TrashStore::new();
        trash.add(TrashItem::new(1, "a", "file"), 0.0);
        trash.add(TrashItem::new(2, "b", "file"), 0.0);

        let restored = trash.restore(1).unwrap();
        assert_eq!(restored.name, "a");
        assert!(trash.restore(1).is_none());

        assert_eq!(trash.remove(2), 1);
        assert_eq!(trash.remove(2), 0);
        assert!(trash.is_empty());
    }

    #[test]
    fn test_fresh_id_skips_taken_ids() {
        let mut trash = TrashStore::new();
        assert_eq!(trash.fresh_id(500), 500);

        trash.add(TrashItem::new(500, "a", "file"), 0.0);
        assert_eq!(trash.fresh_id(500), 501);
        assert_eq!(trash.fresh_id(200), 501);
        assert_eq!(trash.fresh_id(900), 900);
    }

    #[test]
    fn test_item_json_uses_type_key() {
        let item: TrashItem = serde_json::from_str(r#"{ "id": 9, "name": "x", "type": "folder" }"#).unwrap();
        assert_eq!(item.kind, "folder");

        let item: TrashItem = serde_json::from_str(r#"{ "id": 9, "name": "x" }"#).unwrap();
        assert_eq!(item.kind, "file");
    }
}
