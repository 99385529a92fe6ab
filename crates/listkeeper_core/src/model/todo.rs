//! To-do record.
//!
//! Stored under `todos` as `[{"id":..,"name":..,"status":..}]`.

use crate::model::record::{DraftValidationError, Record, RecordId, NEW_RECORD_ID};
use serde::{Deserialize, Serialize};

/// One to-do entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Todo {
    pub id: RecordId,
    pub name: String,
    /// `true` once the entry is done. Older stored entries may omit it.
    #[serde(default)]
    pub status: bool,
}

/// Single editable field of a to-do draft.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TodoField {
    Name(String),
}

impl Todo {
    /// Creates an uncommitted to-do with the given name.
    pub fn draft(name: impl Into<String>) -> Self {
        Self {
            id: NEW_RECORD_ID,
            name: name.into(),
            status: false,
        }
    }

    pub fn is_done(&self) -> bool {
        self.status
    }

    /// Replaces the field named by `field`.
    pub fn set_field(&mut self, field: TodoField) {
        match field {
            TodoField::Name(value) => self.name = value,
        }
    }
}

impl Record for Todo {
    const STORAGE_KEY: &'static str = "todos";

    fn id(&self) -> RecordId {
        self.id
    }

    fn with_id(&self, id: RecordId) -> Self {
        Self {
            id,
            ..self.clone()
        }
    }

    fn empty_draft() -> Self {
        Self::draft("")
    }

    fn toggle_status(&mut self) {
        self.status = !self.status;
    }

    fn validate_draft(&self) -> Result<(), DraftValidationError> {
        if self.name.trim().is_empty() {
            return Err(DraftValidationError::BlankName);
        }
        Ok(())
    }
}
