//! Core of the list widgets: records, transition tables and persistence.
//!
//! Two widgets share one shape: a to-do list and a student manager. Each
//! keeps a collection plus a draft, changes them only through its transition
//! table, and saves the collection as a JSON array under a fixed key.

pub mod config;
pub mod db;
pub mod ids;
pub mod logging;
pub mod model;
pub mod reducer;
pub mod repo;
pub mod service;

pub use config::{PersistMode, WidgetConfig};
pub use ids::{ClockIdGenerator, IdGenerator, SequentialIdGenerator};
pub use logging::{default_log_level, init_logging, logging_status, LoggingError};
pub use model::record::{DraftValidationError, Record, RecordId, NEW_RECORD_ID};
pub use model::student::{Student, StudentField};
pub use model::todo::{Todo, TodoField};
pub use reducer::list::{ListState, Step, TransitionTable};
pub use reducer::student::{StudentAction, StudentTable};
pub use reducer::todo::{TodoAction, TodoTable};
pub use repo::collection_store::CollectionStore;
pub use repo::kv_store::{
    KeyValueStore, MemoryStore, SqliteKeyValueStore, StoreError, StoreResult,
};
pub use service::list_widget::{ListWidget, SaveStatus, StudentList, Submit, TodoList};

/// Minimal health-check API for wiring probes.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
