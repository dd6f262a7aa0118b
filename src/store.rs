//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity.
//! All list mutations go through the helpers below.

use leptos::prelude::*;
use reactive_stores::Store;
use todo_core::{Filter, Item, ItemId, TodoList, TodoRepository, TodoResult};

use crate::storage::new_item_id;

/// Global application state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// All items, in display order
    pub todos: TodoList,
    /// Which items the list shows
    pub filter: Filter,
}

impl AppState {
    pub fn new(todos: TodoList) -> Self {
        Self {
            todos,
            ..Default::default()
        }
    }
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

// ========================
// Persistence
// ========================

/// Load the persisted list; unreadable data starts an empty list
pub fn load_todos(repo: &impl TodoRepository) -> TodoList {
    match repo.load().and_then(TodoList::from_items) {
        Ok(list) => {
            log::info!("[STORE] loaded {} items", list.len());
            list
        }
        Err(e) => {
            log::warn!("[STORE] starting with an empty list: {}", e);
            TodoList::new()
        }
    }
}

/// Save the whole list after every change to `todos`.
/// The first run only subscribes, so a corrupt slot is kept until the next edit.
pub fn persist_on_change<R>(store: AppStore, repo: R)
where
    R: TodoRepository + 'static,
{
    Effect::new(move |prev: Option<()>| {
        let todos = store.todos().read();
        if prev.is_some() {
            if let Err(e) = repo.save(todos.items()) {
                log::warn!("[STORE] save failed, keeping in-memory list: {}", e);
            }
        }
    });
}

// ========================
// Store Helper Functions
// ========================

fn report<T>(op: &str, result: TodoResult<T>) -> Option<T> {
    match result {
        Ok(value) => Some(value),
        Err(e) => {
            log::warn!("[STORE] {} failed: {}", op, e);
            None
        }
    }
}

/// Run `op` on a copy of the list and write it back only if it succeeded
/// and changed something, so failed or no-op operations never notify (or save).
fn mutate<T>(store: &AppStore, name: &str, op: impl FnOnce(&mut TodoList) -> TodoResult<T>) -> Option<T> {
    let mut todos = store.todos().get_untracked();
    let value = report(name, op(&mut todos))?;
    if store.todos().with_untracked(|current| *current != todos) {
        store.todos().set(todos);
    }
    Some(value)
}

/// Live view of one item, for rows keyed by id only
pub fn store_item(store: AppStore, id: ItemId) -> Memo<Option<Item>> {
    Memo::new(move |_| store.todos().read().get(&id).cloned())
}

/// Append a new item with a fresh id
pub fn store_add_item(store: &AppStore, text: &str) -> Option<ItemId> {
    if text.trim().is_empty() {
        return None;
    }
    store_add_item_with_id(store, new_item_id(), text)
}

pub fn store_add_item_with_id(store: &AppStore, id: ItemId, text: &str) -> Option<ItemId> {
    let added = mutate(store, "add", |todos| todos.add(id, text).map(|item| item.id.clone()))?;
    log::debug!("[STORE] added {}", added);
    Some(added)
}

pub fn store_toggle_item(store: &AppStore, id: &ItemId) {
    mutate(store, "toggle", |todos| todos.toggle(id).map(|_| ()));
}

pub fn store_edit_item(store: &AppStore, id: &ItemId, text: &str) {
    mutate(store, "edit", |todos| todos.edit(id, text).map(|_| ()));
}

/// Remove an item from the store by ID
pub fn store_remove_item(store: &AppStore, id: &ItemId) {
    mutate(store, "remove", |todos| todos.remove(id).map(|_| ()));
}

pub fn store_move_item(store: &AppStore, id: &ItemId, before: Option<&ItemId>) {
    mutate(store, "move", |todos| todos.move_before(id, before));
}

pub fn store_clear_completed(store: &AppStore) -> usize {
    let removed = mutate(store, "clear completed", |todos| Ok(todos.clear_completed())).unwrap_or(0);
    log::debug!("[STORE] cleared {} completed items", removed);
    removed
}

pub fn store_set_filter(store: &AppStore, filter: Filter) {
    store.filter().set(filter);
}
