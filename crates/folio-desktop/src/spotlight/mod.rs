//! Spotlight search panel
//!
//! Holds the query, the filtered result list, and keyboard selection. The
//! panel never touches windows itself; it hands back a [`SpotlightAction`]
//! for the engine to carry out.

mod index;

pub use index::{build_index, SearchItem, SpotlightAction};

use crate::config::SPOTLIGHT_RESULT_LIMIT;

/// Outcome of a key press inside the panel
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SpotlightCommand {
    /// Run the action and close the panel
    Activate(SpotlightAction),
    /// Close the panel
    Close,
}

/// Spotlight panel state
#[derive(Clone, Debug)]
pub struct Spotlight {
    index: Vec<SearchItem>,
    is_open: bool,
    query: String,
    selected: usize,
    limit: usize,
}

impl Default for Spotlight {
    fn default() -> Self {
        Self::new(SPOTLIGHT_RESULT_LIMIT)
    }
}

impl Spotlight {
    /// Create a closed panel over the catalog index
    pub fn new(limit: usize) -> Self {
        Self {
            index: build_index(),
            is_open: false,
            query: String::new(),
            selected: 0,
            limit,
        }
    }

    #[inline]
    pub fn is_open(&self) -> bool {
        self.is_open
    }

    #[inline]
    pub fn query(&self) -> &str {
        &self.query
    }

    #[inline]
    pub fn selected(&self) -> usize {
        self.selected
    }

    /// Show the panel with an empty query
    pub fn open(&mut self) {
        self.is_open = true;
        self.query.clear();
        self.selected = 0;
    }

    pub fn close(&mut self) {
        self.is_open = false;
    }

    pub fn toggle(&mut self) {
        if self.is_open {
            self.close();
        } else {
            self.open();
        }
    }

    /// Replace the query; selection jumps back to the first result
    pub fn set_query(&mut self, query: &str) {
        self.query = query.to_string();
        self.selected = 0;
    }

    /// Results for the current query
    ///
    /// A blank query lists the first few items of the index.
    pub fn results(&self) -> Vec<&SearchItem> {
        let needle = self.query.trim();
        if needle.is_empty() {
            return self.index.iter().take(self.limit).collect();
        }

        let needle = self.query.to_lowercase();
        self.index
            .iter()
            .filter(|item| item.matches(&needle))
            .take(self.limit)
            .collect()
    }

    pub fn select_next(&mut self) {
        let last = self.results().len().saturating_sub(1);
        self.selected = (self.selected + 1).min(last);
    }

    pub fn select_prev(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    /// Currently highlighted result
    pub fn selected_item(&self) -> Option<&SearchItem> {
        self.results().get(self.selected).copied()
    }

    /// Action of the highlighted result
    pub fn activate_selected(&self) -> Option<SpotlightAction> {
        self.selected_item().map(|item| item.action)
    }

    /// Action of the result at `index`, as when clicked
    pub fn activate_at(&mut self, index: usize) -> Option<SpotlightAction> {
        let action = self.results().get(index).map(|item| item.action)?;
        self.selected = index;
        Some(action)
    }

    /// Handle a key while the panel is open
    pub fn handle_key(&mut self, key: &str) -> Option<SpotlightCommand> {
        match key {
            "ArrowDown" => {
                self.select_next();
                None
            }
            "ArrowUp" => {
                self.select_prev();
                None
            }
            "Enter" => self.activate_selected().map(SpotlightCommand::Activate),
            "Escape" => Some(SpotlightCommand::Close),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::window::WindowId;

    #[test]
    fn test_blank_query_lists_first_items() {
        let mut spotlight = Spotlight::default();
        spotlight.open();
        assert_eq!(spotlight.results().len(), SPOTLIGHT_RESULT_LIMIT);

        spotlight.set_query("   ");
        assert_eq!(spotlight.results().len(), SPOTLIGHT_RESULT_LIMIT);
    }

    #[test]
    fn test_query_filters_and_limits() {
        let mut spotlight = Spotlight::new(3);
        spotlight.set_query("design");
        let results = spotlight.results();
        assert_eq!(results.len(), 3);
        assert!(results.iter().all(|item| item.name == "Design.fig"));

        spotlight.set_query("no such thing");
        assert!(spotlight.results().is_empty());
        assert!(spotlight.activate_selected().is_none());
    }

    #[test]
    fn test_selection_clamps() {
        let mut spotlight = Spotlight::default();
        spotlight.set_query("gallery");
        assert_eq!(spotlight.results().len(), 1);

        spotlight.select_next();
        spotlight.select_next();
        assert_eq!(spotlight.selected(), 0);
        spotlight.select_prev();
        assert_eq!(spotlight.selected(), 0);

        spotlight.set_query("");
        spotlight.select_next();
        spotlight.select_next();
        assert_eq!(spotlight.selected(), 2);
        spotlight.set_query("a");
        assert_eq!(spotlight.selected(), 0);
    }

    #[test]
    fn test_enter_activates_selected() {
        let mut spotlight = Spotlight::default();
        spotlight.open();
        spotlight.set_query("skills");
        assert_eq!(
            spotlight.handle_key("Enter"),
            Some(SpotlightCommand::Activate(SpotlightAction::OpenWindow { window: WindowId::Terminal }))
        );
        assert_eq!(spotlight.handle_key("Escape"), Some(SpotlightCommand::Close));
        assert_eq!(spotlight.handle_key("a"), None);
    }

    #[test]
    fn test_open_resets_query() {
        let mut spotlight = Spotlight::default();
        spotlight.set_query("resume");
        spotlight.toggle();
        assert!(spotlight.is_open());
        assert_eq!(spotlight.query(), "");
        spotlight.toggle();
        assert!(!spotlight.is_open());
    }
}
