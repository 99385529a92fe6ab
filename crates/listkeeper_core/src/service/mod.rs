//! Widget-level use cases.
//!
//! # Responsibility
//! - Tie transition tables, persistence and id generation together.
//! - Keep any view layer decoupled from storage details.

pub mod list_widget;
