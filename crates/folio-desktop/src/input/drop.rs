//! Drag-and-drop payloads

use crate::error::{DesktopError, DesktopResult};
use crate::trash::TrashItem;

/// Item dropped onto the dock's trash icon
///
/// The shell passes the raw `application/json` transfer data; anything that
/// does not decode is reported and dropped.
#[derive(Clone, Debug, PartialEq)]
pub enum DropPayload {
    /// Nothing was attached to the drag
    Empty,
    /// A decoded item
    Item(TrashItem),
}

impl DropPayload {
    /// Decode transfer data
    pub fn parse(data: &str) -> DesktopResult<Self> {
        if data.trim().is_empty() {
            return Ok(DropPayload::Empty);
        }
        serde_json::from_str(data)
            .map(DropPayload::Item)
            .map_err(|e| DesktopError::MalformedPayload(e.to_string()))
    }

    /// The decoded item, if any
    pub fn into_item(self) -> Option<TrashItem> {
        match self {
            DropPayload::Item(item) => Some(item),
            DropPayload::Empty => None,
        }
    }
}
