//! Repository Layer
//!
//! Persistence seam for the whole list. Implementations store the
//! encoded list under a single slot: browser local storage, in-memory, etc.

use std::cell::RefCell;
use std::rc::Rc;

use crate::error::{TodoError, TodoResult};
use crate::item::Item;

/// Loads and saves the full list verbatim
pub trait TodoRepository {
    /// Load the stored list; an empty slot yields an empty list
    fn load(&self) -> TodoResult<Vec<Item>>;

    /// Replace the stored list
    fn save(&self, items: &[Item]) -> TodoResult<()>;
}

/// Shared handle, so a caller can keep reading the slot it hands out
impl<R: TodoRepository + ?Sized> TodoRepository for Rc<R> {
    fn load(&self) -> TodoResult<Vec<Item>> {
        (**self).load()
    }

    fn save(&self, items: &[Item]) -> TodoResult<()> {
        (**self).save(items)
    }
}

/// Serialize items to the stored string form (JSON array, list order)
pub fn encode(items: &[Item]) -> TodoResult<String> {
    serde_json::to_string(items).map_err(|e| TodoError::Storage(e.to_string()))
}

/// Parse the stored string form
pub fn decode(raw: &str) -> TodoResult<Vec<Item>> {
    serde_json::from_str(raw).map_err(|e| TodoError::Corrupt(e.to_string()))
}

/// Repository backed by a string slot in memory
#[derive(Debug, Default)]
pub struct MemoryRepository {
    slot: RefCell<Option<String>>,
}

impl MemoryRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start with raw stored content, e.g. to simulate corrupt data
    pub fn with_raw(raw: impl Into<String>) -> Self {
        Self {
            slot: RefCell::new(Some(raw.into())),
        }
    }

    pub fn raw(&self) -> Option<String> {
        self.slot.borrow().clone()
    }
}

impl TodoRepository for MemoryRepository {
    fn load(&self) -> TodoResult<Vec<Item>> {
        match self.slot.borrow().as_deref() {
            Some(raw) => decode(raw),
            None => Ok(Vec::new()),
        }
    }

    fn save(&self, items: &[Item]) -> TodoResult<()> {
        let raw = encode(items)?;
        log::debug!("[STORAGE] saving {} items ({} bytes)", items.len(), raw.len());
        *self.slot.borrow_mut() = Some(raw);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{ItemId, TodoList};

    #[test]
    fn test_empty_slot_loads_empty() {
        let repo = MemoryRepository::new();
        assert!(repo.load().unwrap().is_empty());
    }

    #[test]
    fn test_save_then_load_verbatim() {
        let repo = MemoryRepository::new();
        let mut list = TodoList::new();
        list.add(ItemId::new("b"), "second").unwrap();
        list.add(ItemId::new("a"), "first").unwrap();
        list.toggle(&ItemId::new("a")).unwrap();

        repo.save(list.items()).unwrap();
        let loaded = TodoList::from_items(repo.load().unwrap()).unwrap();
        assert_eq!(loaded, list);
    }

    #[test]
    fn test_stored_format() {
        let repo = MemoryRepository::new();
        repo.save(&[Item::new(ItemId::new("x1"), "milk")]).unwrap();
        assert_eq!(
            repo.raw().as_deref(),
            Some(r#"[{"id":"x1","text":"milk","completed":false}]"#)
        );
    }

    #[test]
    fn test_shared_handle_writes_same_slot() {
        let repo = Rc::new(MemoryRepository::new());
        let handle = Rc::clone(&repo);
        handle.save(&[Item::new(ItemId::new("1"), "a")]).unwrap();
        assert_eq!(repo.load().unwrap().len(), 1);
    }

    #[test]
    fn test_corrupt_slot() {
        let repo = MemoryRepository::with_raw("{not json");
        assert!(matches!(repo.load(), Err(TodoError::Corrupt(_))));
        // Loading does not clobber the slot
        assert_eq!(repo.raw().as_deref(), Some("{not json"));
    }

    #[test]
    fn test_decode_accepts_hand_written_data() {
        let items = decode(r#"[{"id":"1","text":"a","completed":true}]"#).unwrap();
        assert_eq!(items.len(), 1);
        assert!(items[0].completed);
    }
}
