//! Error Types
//!
//! Errors returned by list operations and repositories.

use thiserror::Error;

use crate::item::ItemId;

/// Common result type for todo operations
pub type TodoResult<T> = Result<T, TodoError>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TodoError {
    /// Text was empty after trimming
    #[error("todo text must not be empty")]
    EmptyText,
    #[error("no item with id {0}")]
    NotFound(ItemId),
    #[error("an item with id {0} already exists")]
    DuplicateId(ItemId),
    /// Persisted data could not be decoded
    #[error("stored todo list is corrupt: {0}")]
    Corrupt(String),
    /// Storage backend unavailable or refused the write
    #[error("storage error: {0}")]
    Storage(String),
}
