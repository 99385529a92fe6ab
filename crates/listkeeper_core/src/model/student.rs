//! Student (employee) record.
//!
//! # Responsibility
//! - Define the student shape stored under `ListStudent`.
//! - Validate form input before it becomes an action.
//!
//! # Invariants
//! - `status == true` means active; `false` means blocked.
//! - New drafts start active.

use crate::model::record::{DraftValidationError, Record, RecordId, NEW_RECORD_ID};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

static EMAIL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("valid email regex"));

/// One student/employee row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Student {
    pub id: RecordId,
    pub name: String,
    /// Date string as entered by the form (`YYYY-MM-DD`), kept verbatim.
    pub birthday: String,
    pub email: String,
    pub address: String,
    pub status: bool,
}

/// Editable field of a student draft, with its new value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StudentField {
    Name(String),
    Birthday(String),
    Email(String),
    Address(String),
}

impl Student {
    /// Creates an active, uncommitted student.
    pub fn draft(
        name: impl Into<String>,
        birthday: impl Into<String>,
        email: impl Into<String>,
        address: impl Into<String>,
    ) -> Self {
        Self {
            id: NEW_RECORD_ID,
            name: name.into(),
            birthday: birthday.into(),
            email: email.into(),
            address: address.into(),
            status: true,
        }
    }

    pub fn is_active(&self) -> bool {
        self.status
    }

    pub fn is_blocked(&self) -> bool {
        !self.status
    }

    /// Replaces the field named by `field`, leaving the others untouched.
    pub fn set_field(&mut self, field: StudentField) {
        match field {
            StudentField::Name(value) => self.name = value,
            StudentField::Birthday(value) => self.birthday = value,
            StudentField::Email(value) => self.email = value,
            StudentField::Address(value) => self.address = value,
        }
    }
}

impl Record for Student {
    const STORAGE_KEY: &'static str = "ListStudent";

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
        Self::draft("", "", "", "")
    }

    fn toggle_status(&mut self) {
        self.status = !self.status;
    }

    fn validate_draft(&self) -> Result<(), DraftValidationError> {
        if self.name.trim().is_empty() {
            return Err(DraftValidationError::BlankName);
        }
        let email = self.email.trim();
        if !email.is_empty() && !EMAIL_RE.is_match(email) {
            return Err(DraftValidationError::InvalidEmail(email.to_string()));
        }
        Ok(())
    }
}
