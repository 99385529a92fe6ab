use listkeeper_core::db::migrations::latest_version;
use listkeeper_core::db::{open_db, open_db_in_memory, DbError};
use listkeeper_core::{
    KeyValueStore, SequentialIdGenerator, SqliteKeyValueStore, Todo, TodoAction, TodoList,
    WidgetConfig,
};
use rusqlite::Connection;

#[test]
fn open_db_in_memory_creates_local_storage_table() {
    let conn = open_db_in_memory().unwrap();

    assert_eq!(schema_version(&conn), latest_version());
    let exists: i64 = conn
        .query_row(
            "SELECT EXISTS(
                SELECT 1 FROM sqlite_master WHERE type = 'table' AND name = 'local_storage'
            );",
            [],
            |row| row.get(0),
        )
        .unwrap();
    assert_eq!(exists, 1);
}

#[test]
fn newer_schema_version_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("future.sqlite3");
    let conn = Connection::open(&path).unwrap();
    conn.execute_batch("PRAGMA user_version = 999;").unwrap();
    drop(conn);

    match open_db(&path).unwrap_err() {
        DbError::UnsupportedSchemaVersion {
            db_version,
            latest_supported,
        } => {
            assert_eq!(db_version, 999);
            assert_eq!(latest_supported, latest_version());
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn sqlite_store_overwrites_and_removes_items() {
    let conn = open_db_in_memory().unwrap();
    let store = SqliteKeyValueStore::new(&conn);

    assert_eq!(store.get_item("todos").unwrap(), None);
    store.set_item("todos", "[]").unwrap();
    store.set_item("todos", r#"[{"id":1,"name":"a","status":false}]"#).unwrap();
    assert_eq!(
        store.get_item("todos").unwrap().as_deref(),
        Some(r#"[{"id":1,"name":"a","status":false}]"#)
    );

    store.remove_item("todos").unwrap();
    assert_eq!(store.get_item("todos").unwrap(), None);
}

#[test]
fn todo_list_survives_reopening_the_database_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("listkeeper.sqlite3");

    {
        let conn = open_db(&path).unwrap();
        let store = SqliteKeyValueStore::new(&conn);
        let mut widget = TodoList::open(
            &store,
            WidgetConfig::default(),
            SequentialIdGenerator::default(),
        );
        widget.dispatch(TodoAction::Add(Todo::draft("Buy milk")));
        widget.dispatch(TodoAction::Add(Todo::draft("Walk dog")));
        widget.dispatch(TodoAction::ToggleStatus(2));
    }

    let conn = open_db(&path).unwrap();
    assert_eq!(schema_version(&conn), latest_version());
    let store = SqliteKeyValueStore::new(&conn);
    let widget = TodoList::open(
        &store,
        WidgetConfig::default(),
        SequentialIdGenerator::default(),
    );
    assert_eq!(widget.records().len(), 2);
    assert!(widget.records()[1].is_done());
}

fn schema_version(conn: &Connection) -> u32 {
    conn.query_row("PRAGMA user_version;", [], |row| row.get(0))
        .unwrap()
}
