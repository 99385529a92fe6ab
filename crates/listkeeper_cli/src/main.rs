//! CLI smoke probe.
//!
//! # Responsibility
//! - Verify `listkeeper_core` linkage and storage wiring from a terminal.
//! - Report how many records each widget would load from a storage file.
//!
//! Usage: `listkeeper_cli [storage.sqlite3]` (in-memory when omitted).

use listkeeper_core::db::{open_db, open_db_in_memory, DbResult};
use listkeeper_core::{ClockIdGenerator, SqliteKeyValueStore, StudentList, TodoList, WidgetConfig};
use rusqlite::Connection;
use std::process::ExitCode;

fn main() -> ExitCode {
    println!("listkeeper_core ping={}", listkeeper_core::ping());
    println!("listkeeper_core version={}", listkeeper_core::core_version());

    let conn = match open_storage(std::env::args().nth(1)) {
        Ok(conn) => conn,
        Err(err) => {
            eprintln!("failed to open storage: {err}");
            return ExitCode::FAILURE;
        }
    };
    let store = SqliteKeyValueStore::new(&conn);

    let todos = TodoList::open(&store, WidgetConfig::default(), ClockIdGenerator::new());
    let students = StudentList::open(&store, WidgetConfig::default(), ClockIdGenerator::new());
    println!("todos count={}", todos.records().len());
    println!("students count={}", students.records().len());
    ExitCode::SUCCESS
}

fn open_storage(path: Option<String>) -> DbResult<Connection> {
    match path {
        Some(path) => open_db(path),
        None => open_db_in_memory(),
    }
}
