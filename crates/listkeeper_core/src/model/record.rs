//! Common record contract used by the transition tables and persistence.
//!
//! # Responsibility
//! - Describe what every list record exposes: identity, status, draft reset.
//! - Carry the fixed storage key each collection is saved under.
//!
//! # Invariants
//! - `empty_draft()` always returns a record whose id is `NEW_RECORD_ID`.

use serde::de::DeserializeOwned;
use serde::Serialize;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Integer identity of a committed record.
///
/// Ids are epoch-millisecond sized in existing stored data, so `i64`.
pub type RecordId = i64;

/// Sentinel id carried by a draft that has not been committed yet.
pub const NEW_RECORD_ID: RecordId = 0;

/// Reason a draft was refused before any action was dispatched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DraftValidationError {
    /// Name is empty after trim.
    BlankName,
    /// Email is present but not shaped like `local@domain.tld`.
    InvalidEmail(String),
}

impl Display for DraftValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::BlankName => write!(f, "name must not be blank"),
            Self::InvalidEmail(value) => write!(f, "invalid email address: `{value}`"),
        }
    }
}

impl Error for DraftValidationError {}

/// A list record that can be drafted, committed, toggled and persisted.
pub trait Record: Clone + PartialEq + Serialize + DeserializeOwned {
    /// Fixed key the whole collection is stored under.
    const STORAGE_KEY: &'static str;

    fn id(&self) -> RecordId;

    /// Returns a copy of this record carrying `id`.
    fn with_id(&self, id: RecordId) -> Self;

    /// Draft shown by an empty form.
    fn empty_draft() -> Self;

    /// Flips the boolean status field.
    fn toggle_status(&mut self);

    /// Checks whether this record may be submitted from a form.
    fn validate_draft(&self) -> Result<(), DraftValidationError>;

    /// Returns whether this record is still an uncommitted draft.
    fn is_new(&self) -> bool {
        self.id() == NEW_RECORD_ID
    }
}
