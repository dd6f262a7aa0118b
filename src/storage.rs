//! Browser Storage
//!
//! Local-storage repository and id generation.

use todo_core::{decode, encode, Item, ItemId, TodoError, TodoRepository, TodoResult};

/// Repository storing the encoded list under one local-storage key
#[derive(Debug, Clone)]
pub struct LocalStorageRepository {
    key: String,
}

impl LocalStorageRepository {
    pub fn new(key: impl Into<String>) -> Self {
        Self { key: key.into() }
    }

    fn storage(&self) -> TodoResult<web_sys::Storage> {
        web_sys::window()
            .ok_or_else(|| TodoError::Storage("no window".to_string()))?
            .local_storage()
            .map_err(|e| TodoError::Storage(format!("{:?}", e)))?
            .ok_or_else(|| TodoError::Storage("localStorage unavailable".to_string()))
    }
}

impl TodoRepository for LocalStorageRepository {
    fn load(&self) -> TodoResult<Vec<Item>> {
        let raw = self
            .storage()?
            .get_item(&self.key)
            .map_err(|e| TodoError::Storage(format!("{:?}", e)))?;
        match raw {
            Some(raw) => decode(&raw),
            None => Ok(Vec::new()),
        }
    }

    fn save(&self, items: &[Item]) -> TodoResult<()> {
        let raw = encode(items)?;
        self.storage()?
            .set_item(&self.key, &raw)
            .map_err(|e| TodoError::Storage(format!("{:?}", e)))?;
        log::debug!("[STORAGE] saved {} items under '{}'", items.len(), self.key);
        Ok(())
    }
}

/// Fresh unique id, `crypto.randomUUID()` when available
pub fn new_item_id() -> ItemId {
    web_sys::window()
        .and_then(|win| win.crypto().ok())
        // Insecure contexts (plain http) lack randomUUID
        .filter(|crypto| js_sys::Reflect::has(crypto, &"randomUUID".into()).unwrap_or(false))
        .map(|crypto| ItemId::new(crypto.random_uuid()))
        .unwrap_or_else(ItemId::generate)
}
