//! Record model shared by the to-do and student widgets.
//!
//! # Responsibility
//! - Define the persisted record shapes and their draft-field payloads.
//! - Keep the stored JSON field names stable for existing data.
//!
//! # Invariants
//! - `id == NEW_RECORD_ID` marks a draft and never appears in a collection.
//! - `id` is unique within a collection.

pub mod record;
pub mod student;
pub mod todo;
