//! Transition tables for the list widgets.
//!
//! # Responsibility
//! - Map `(state, action)` to the next state for each widget.
//! - Report which actions request an explicit write.
//!
//! # Invariants
//! - Transitions never panic and never touch storage.
//! - An unknown id on delete/update/toggle leaves the collection unchanged.
//! - Ids minted by `Add` are never `NEW_RECORD_ID` and never already taken.
//! - `Load` keeps its payload as is, including foreign ids.

pub mod list;
pub mod student;
pub mod todo;
