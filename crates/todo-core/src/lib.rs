//! Todo Core
//!
//! Layered like the app:
//! - item: the `Item` entity and its identifier
//! - list: ordered list operations (add, remove, toggle, edit, move)
//! - edit: inline edit state machine
//! - repository: persistence trait and codec
//!
//! This crate has NO browser dependencies so it can be tested natively.

mod error;
mod item;
mod list;
mod edit;
mod repository;

pub use error::{TodoError, TodoResult};
pub use item::{Item, ItemId};
pub use list::{Filter, TodoList};
pub use edit::{EditOutcome, EditSession};
pub use repository::{decode, encode, MemoryRepository, TodoRepository};
