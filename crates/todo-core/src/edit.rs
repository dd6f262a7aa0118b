//! Inline Edit Session
//!
//! Key and blur handling for a row in edit mode.

use crate::item::{Item, ItemId};

/// What the row should do after an input event
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditOutcome {
    /// Stay in edit mode
    Continue,
    /// Save the (trimmed) text and leave edit mode
    Commit(String),
    /// Leave edit mode without saving
    Cancel,
}

/// Draft text for an item being edited
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditSession {
    pub id: ItemId,
    pub draft: String,
}

impl EditSession {
    /// Start editing with the draft set to the current text
    pub fn begin(item: &Item) -> Self {
        Self {
            id: item.id.clone(),
            draft: item.text.clone(),
        }
    }

    pub fn set_draft(&mut self, draft: impl Into<String>) {
        self.draft = draft.into();
    }

    fn trimmed(&self) -> Option<String> {
        let text = self.draft.trim();
        (!text.is_empty()).then(|| text.to_string())
    }

    /// `key` is a DOM `KeyboardEvent.key` value
    pub fn on_key(&self, key: &str) -> EditOutcome {
        match key {
            // Blank draft: Enter is ignored, keep editing
            "Enter" => self.trimmed().map_or(EditOutcome::Continue, EditOutcome::Commit),
            "Escape" => EditOutcome::Cancel,
            _ => EditOutcome::Continue,
        }
    }

    pub fn on_blur(&self) -> EditOutcome {
        self.trimmed().map_or(EditOutcome::Cancel, EditOutcome::Commit)
    }
}
