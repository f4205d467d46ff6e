//! In-memory list-of-lists model.
//!
//! A [`ListStore`] keeps a set of named lists of text items together with a
//! display ordering. The ordering and the contents map always describe the
//! same set of list names: every mutation goes through the store so the two
//! cannot drift apart.

use std::collections::HashMap;

use thiserror::Error;
use uuid::Uuid;

use crate::constants::{WARNING_DUPLICATE_LIST_NAME, WARNING_EMPTY_LIST_NAME};

/// A single text entry inside a list.
///
/// Items carry a generated id so that two items with identical text remain
/// distinct, and removal always targets exactly one of them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Item {
    id: Uuid,
    text: String,
}

impl Item {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            text: text.into(),
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn text(&self) -> &str {
        &self.text
    }
}

/// Why a list creation request was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CreateListError {
    #[error("{}", WARNING_EMPTY_LIST_NAME)]
    EmptyName,
    #[error("{}", WARNING_DUPLICATE_LIST_NAME)]
    DuplicateName,
}

/// The complete application state: named lists, their display order, the
/// last validation warning and the active search filter.
#[derive(Debug, Default)]
pub struct ListStore {
    /// List names in display order, newest first.
    ordering: Vec<String>,
    /// Items per list, keyed by list name.
    contents: HashMap<String, Vec<Item>>,
    /// Warning from the most recent rejected creation, cleared on success.
    warning: Option<String>,
    /// Current search filter text, empty when inactive.
    search_filter: String,
}

impl ListStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a new empty list at the front of the ordering.
    ///
    /// Blank and duplicate names are rejected without touching any state
    /// other than the warning. A successful creation clears the warning.
    pub fn create_list(&mut self, name: &str) -> Result<(), CreateListError> {
        if name.is_empty() {
            self.warning = Some(WARNING_EMPTY_LIST_NAME.to_string());
            return Err(CreateListError::EmptyName);
        }
        if self.contents.contains_key(name) {
            self.warning = Some(WARNING_DUPLICATE_LIST_NAME.to_string());
            return Err(CreateListError::DuplicateName);
        }

        self.ordering.insert(0, name.to_string());
        self.contents.insert(name.to_string(), Vec::new());
        self.warning = None;
        Ok(())
    }

    /// Remove a list and all of its items. Unknown names are ignored.
    pub fn delete_list(&mut self, name: &str) {
        self.ordering.retain(|n| n != name);
        self.contents.remove(name);
    }

    /// Move a list to the front of the ordering. Unknown names are ignored.
    pub fn move_list_to_front(&mut self, name: &str) {
        if let Some(position) = self.ordering.iter().position(|n| n == name) {
            let list = self.ordering.remove(position);
            self.ordering.insert(0, list);
        }
    }

    /// Move the list at `from_index` so it ends up at `to_index`.
    ///
    /// The list is extracted first and reinserted after, so the lists in
    /// between shift by one rather than swapping. Destinations past the end
    /// clamp to the last position; an out-of-range source does nothing.
    pub fn move_list_to_index(&mut self, from_index: usize, to_index: usize) {
        if from_index >= self.ordering.len() {
            return;
        }
        let to_index = to_index.min(self.ordering.len() - 1);
        if from_index == to_index {
            return;
        }

        let list = self.ordering.remove(from_index);
        self.ordering.insert(to_index, list);
    }

    /// Append an item to the named list. Unknown lists are ignored.
    pub fn add_item(&mut self, list_name: &str, text: &str) {
        if let Some(items) = self.contents.get_mut(list_name) {
            items.push(Item::new(text));
        }
    }

    /// Remove the item with the given id from the named list. Unknown lists
    /// and ids are ignored.
    pub fn remove_item(&mut self, list_name: &str, item_id: Uuid) {
        if let Some(items) = self.contents.get_mut(list_name) {
            items.retain(|item| item.id != item_id);
        }
    }

    /// Whether any item of the named list contains `filter` as a substring.
    ///
    /// Matching is case-sensitive. An empty or unknown list never matches;
    /// the empty-filter convention (show everything) is the caller's call.
    pub fn matches_filter(&self, list_name: &str, filter: &str) -> bool {
        self.contents
            .get(list_name)
            .is_some_and(|items| items.iter().any(|item| item.text.contains(filter)))
    }

    pub fn set_search_filter(&mut self, filter: impl Into<String>) {
        self.search_filter = filter.into();
    }

    pub fn search_filter(&self) -> &str {
        &self.search_filter
    }

    /// List names in display order, newest first.
    pub fn ordering(&self) -> &[String] {
        &self.ordering
    }

    /// Items of the named list, or `None` for an unknown list.
    pub fn items(&self, list_name: &str) -> Option<&[Item]> {
        self.contents.get(list_name).map(Vec::as_slice)
    }

    pub fn len(&self) -> usize {
        self.ordering.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ordering.is_empty()
    }

    /// The warning from the most recent rejected creation, if any.
    pub fn warning(&self) -> Option<&str> {
        self.warning.as_deref()
    }

    pub fn clear_warning(&mut self) {
        self.warning = None;
    }
}
