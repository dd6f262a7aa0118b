//! Todo List
//!
//! Ordered collection of items. Order is insertion order; only
//! `move_before` reorders.

use serde::{Deserialize, Serialize};

use crate::error::{TodoError, TodoResult};
use crate::item::{Item, ItemId};

/// Which items the list view shows
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Filter {
    #[default]
    All,
    Active,
    Completed,
}

impl Filter {
    pub const ALL: [Filter; 3] = [Filter::All, Filter::Active, Filter::Completed];

    pub fn label(&self) -> &'static str {
        match self {
            Filter::All => "All",
            Filter::Active => "Active",
            Filter::Completed => "Completed",
        }
    }

    pub fn matches(&self, item: &Item) -> bool {
        match self {
            Filter::All => true,
            Filter::Active => !item.completed,
            Filter::Completed => item.completed,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TodoList {
    items: Vec<Item>,
}

impl TodoList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a list from previously persisted items, rejecting duplicate ids
    pub fn from_items(items: Vec<Item>) -> TodoResult<Self> {
        for (i, item) in items.iter().enumerate() {
            if items[..i].iter().any(|other| other.id == item.id) {
                return Err(TodoError::DuplicateId(item.id.clone()));
            }
        }
        Ok(Self { items })
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn iter(&self) -> impl Iterator<Item = &Item> {
        self.items.iter()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, id: &ItemId) -> Option<&Item> {
        self.items.iter().find(|item| &item.id == id)
    }

    fn position(&self, id: &ItemId) -> TodoResult<usize> {
        self.items
            .iter()
            .position(|item| &item.id == id)
            .ok_or_else(|| TodoError::NotFound(id.clone()))
    }

    /// Append a new item with a fresh id
    pub fn add(&mut self, id: ItemId, text: &str) -> TodoResult<&Item> {
        let text = text.trim();
        if text.is_empty() {
            return Err(TodoError::EmptyText);
        }
        if self.get(&id).is_some() {
            return Err(TodoError::DuplicateId(id));
        }
        self.items.push(Item::new(id, text));
        Ok(&self.items[self.items.len() - 1])
    }

    pub fn remove(&mut self, id: &ItemId) -> TodoResult<Item> {
        let idx = self.position(id)?;
        Ok(self.items.remove(idx))
    }

    /// Flip completion, replacing the item in place
    pub fn toggle(&mut self, id: &ItemId) -> TodoResult<&Item> {
        let idx = self.position(id)?;
        self.items[idx] = self.items[idx].toggled();
        Ok(&self.items[idx])
    }

    /// Replace the text of an item, keeping its position
    pub fn edit(&mut self, id: &ItemId, text: &str) -> TodoResult<&Item> {
        let text = text.trim();
        if text.is_empty() {
            return Err(TodoError::EmptyText);
        }
        let idx = self.position(id)?;
        self.items[idx] = self.items[idx].with_text(text);
        Ok(&self.items[idx])
    }

    /// Move `id` so it sits directly before `before` (None = end of list)
    pub fn move_before(&mut self, id: &ItemId, before: Option<&ItemId>) -> TodoResult<()> {
        if before == Some(id) {
            return Ok(());
        }
        let from = self.position(id)?;
        if let Some(target) = before {
            self.position(target)?;
        }
        let item = self.items.remove(from);
        let to = match before {
            // Re-resolve after removal, indices shift
            Some(target) => self.position(target)?,
            None => self.items.len(),
        };
        self.items.insert(to, item);
        Ok(())
    }

    /// Whether `move_before(id, before)` would change the order
    pub fn would_move(&self, id: &ItemId, before: Option<&ItemId>) -> bool {
        let Ok(from) = self.position(id) else {
            return false;
        };
        match before {
            Some(target) if target == id => false,
            Some(target) => match self.position(target) {
                Ok(to) => to != from + 1,
                Err(_) => false,
            },
            None => from + 1 != self.items.len(),
        }
    }

    /// Drop all completed items, returns how many were removed
    pub fn clear_completed(&mut self) -> usize {
        let before = self.items.len();
        self.items.retain(|item| !item.completed);
        before - self.items.len()
    }

    pub fn remaining(&self) -> usize {
        self.items.iter().filter(|item| !item.completed).count()
    }

    pub fn completed_count(&self) -> usize {
        self.items.len() - self.remaining()
    }

    pub fn visible(&self, filter: Filter) -> Vec<&Item> {
        self.items.iter().filter(|item| filter.matches(item)).collect()
    }
}

impl From<TodoList> for Vec<Item> {
    fn from(list: TodoList) -> Self {
        list.items
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn id(s: &str) -> ItemId {
        ItemId::new(s)
    }

    fn list_of(texts: &[&str]) -> TodoList {
        let mut list = TodoList::new();
        for (i, text) in texts.iter().enumerate() {
            list.add(id(&i.to_string()), text).unwrap();
        }
        list
    }

    fn texts(list: &TodoList) -> Vec<&str> {
        list.iter().map(|item| item.text.as_str()).collect()
    }

    #[test]
    fn test_add_appends_in_insertion_order() {
        let list = list_of(&["a", "b", "c"]);
        assert_eq!(texts(&list), vec!["a", "b", "c"]);
        assert!(list.iter().all(|item| !item.completed));
    }

    #[test]
    fn test_add_trims_and_rejects_blank() {
        let mut list = TodoList::new();
        assert_eq!(list.add(id("1"), "  milk  ").unwrap().text, "milk");
        assert_eq!(list.add(id("2"), " "), Err(TodoError::EmptyText));
        assert_eq!(list.add(id("3"), ""), Err(TodoError::EmptyText));
        assert_eq!(list.len(), 1);
    }

    #[test]
    fn test_add_rejects_duplicate_id() {
        let mut list = TodoList::new();
        list.add(id("1"), "a").unwrap();
        assert_eq!(list.add(id("1"), "b"), Err(TodoError::DuplicateId(id("1"))));
        assert_eq!(texts(&list), vec!["a"]);
    }

    #[test]
    fn test_remove_keeps_order_of_rest() {
        let mut list = list_of(&["a", "b", "c"]);
        let removed = list.remove(&id("1")).unwrap();
        assert_eq!(removed.text, "b");
        assert_eq!(texts(&list), vec!["a", "c"]);
        assert_eq!(list.remove(&id("1")), Err(TodoError::NotFound(id("1"))));
    }

    #[test]
    fn test_toggle_flips_in_place() {
        let mut list = list_of(&["a", "b"]);
        assert!(list.toggle(&id("0")).unwrap().completed);
        assert_eq!(texts(&list), vec!["a", "b"]);
        assert!(!list.toggle(&id("0")).unwrap().completed);
        assert!(list.toggle(&id("nope")).is_err());
    }

    #[test]
    fn test_edit_replaces_text_in_place() {
        let mut list = list_of(&["a", "b", "c"]);
        list.toggle(&id("1")).unwrap();
        let edited = list.edit(&id("1"), "  bee ").unwrap();
        assert_eq!(edited.text, "bee");
        assert!(edited.completed);
        assert_eq!(texts(&list), vec!["a", "bee", "c"]);
    }

    #[test]
    fn test_edit_blank_leaves_list_untouched() {
        let mut list = list_of(&["a"]);
        assert_eq!(list.edit(&id("0"), "   "), Err(TodoError::EmptyText));
        assert_eq!(texts(&list), vec!["a"]);
    }

    #[test]
    fn test_move_before() {
        let mut list = list_of(&["a", "b", "c", "d"]);
        list.move_before(&id("3"), Some(&id("0"))).unwrap();
        assert_eq!(texts(&list), vec!["d", "a", "b", "c"]);

        list.move_before(&id("0"), Some(&id("2"))).unwrap();
        assert_eq!(texts(&list), vec!["d", "b", "a", "c"]);

        list.move_before(&id("3"), None).unwrap();
        assert_eq!(texts(&list), vec!["b", "a", "c", "d"]);

        list.move_before(&id("1"), Some(&id("1"))).unwrap();
        assert_eq!(texts(&list), vec!["b", "a", "c", "d"]);
    }

    #[test]
    fn test_would_move_matches_move_before() {
        let list = list_of(&["a", "b", "c"]);
        // Before the next row or at the end when already last: order unchanged
        assert!(!list.would_move(&id("0"), Some(&id("1"))));
        assert!(!list.would_move(&id("2"), None));
        assert!(!list.would_move(&id("1"), Some(&id("1"))));
        assert!(!list.would_move(&id("0"), Some(&id("zz"))));

        assert!(list.would_move(&id("0"), Some(&id("2"))));
        assert!(list.would_move(&id("1"), Some(&id("0"))));
        assert!(list.would_move(&id("0"), None));

        for (dragged, before) in [("0", Some("1")), ("0", Some("2")), ("2", None), ("1", None)] {
            let before = before.map(id);
            let mut moved = list.clone();
            moved.move_before(&id(dragged), before.as_ref()).unwrap();
            assert_eq!(list.would_move(&id(dragged), before.as_ref()), moved != list);
        }
    }

    #[test]
    fn test_move_unknown_target_is_noop() {
        let mut list = list_of(&["a", "b"]);
        assert!(list.move_before(&id("0"), Some(&id("zz"))).is_err());
        assert_eq!(texts(&list), vec!["a", "b"]);
    }

    #[test]
    fn test_clear_completed_and_counts() {
        let mut list = list_of(&["a", "b", "c"]);
        list.toggle(&id("0")).unwrap();
        list.toggle(&id("2")).unwrap();
        assert_eq!(list.remaining(), 1);
        assert_eq!(list.completed_count(), 2);
        assert_eq!(list.clear_completed(), 2);
        assert_eq!(texts(&list), vec!["b"]);
    }

    #[test]
    fn test_visible_filters() {
        let mut list = list_of(&["a", "b", "c"]);
        list.toggle(&id("1")).unwrap();
        let active: Vec<_> = list.visible(Filter::Active).iter().map(|i| i.text.as_str()).collect();
        let done: Vec<_> = list.visible(Filter::Completed).iter().map(|i| i.text.as_str()).collect();
        assert_eq!(active, vec!["a", "c"]);
        assert_eq!(done, vec!["b"]);
        assert_eq!(list.visible(Filter::All).len(), 3);
    }

    #[test]
    fn test_from_items_rejects_duplicates() {
        let items = vec![Item::new(id("x"), "a"), Item::new(id("x"), "b")];
        assert_eq!(TodoList::from_items(items), Err(TodoError::DuplicateId(id("x"))));
    }
}
