use listkeeper_core::{
    KeyValueStore, MemoryStore, Record, SaveStatus, SequentialIdGenerator, Submit, Todo,
    TodoAction, TodoField, TodoList, WidgetConfig,
};
use std::collections::HashSet;

fn reactive(store: &MemoryStore) -> TodoList<&MemoryStore> {
    TodoList::open(store, WidgetConfig::default(), SequentialIdGenerator::default())
}

fn explicit(store: &MemoryStore) -> TodoList<&MemoryStore> {
    TodoList::open(
        store,
        WidgetConfig::explicit_write(),
        SequentialIdGenerator::default(),
    )
}

fn type_and_submit(widget: &mut TodoList<&MemoryStore>, name: &str) -> Submit {
    widget.dispatch(TodoAction::SetDraftField(TodoField::Name(name.to_string())));
    widget.submit_draft()
}

#[test]
fn adding_to_empty_list_persists_single_element_array() {
    let store = MemoryStore::new();
    let mut widget = reactive(&store);

    let outcome = type_and_submit(&mut widget, "Buy milk");

    assert_eq!(outcome, Submit::Accepted(SaveStatus::Written));
    assert_eq!(widget.records(), &[Todo::draft("Buy milk").with_id(1)]);
    assert_eq!(widget.draft(), &Todo::empty_draft());
    assert_eq!(
        store.get_item("todos").unwrap().as_deref(),
        Some(r#"[{"id":1,"name":"Buy milk","status":false}]"#)
    );
}

#[test]
fn distinct_adds_grow_collection_with_unique_ids() {
    let store = MemoryStore::new();
    let mut widget = reactive(&store);
    let names = ["a", "b", "c", "d", "e"];

    for name in names {
        widget.dispatch(TodoAction::Add(Todo::draft(name)));
    }

    assert_eq!(widget.records().len(), names.len());
    let ids: HashSet<i64> = widget.records().iter().map(|todo| todo.id).collect();
    assert_eq!(ids.len(), names.len());
    assert!(!ids.contains(&0));
}

#[test]
fn add_with_existing_id_replaces_in_place() {
    let store = MemoryStore::new();
    let mut widget = reactive(&store);
    widget.dispatch(TodoAction::Add(Todo::draft("first")));
    widget.dispatch(TodoAction::Add(Todo::draft("second")));

    let mut edited = widget.records()[0].clone();
    widget.dispatch(TodoAction::SetDraft(edited.clone()));
    assert!(widget.state().is_editing());
    edited.name = "first, edited".to_string();
    widget.dispatch(TodoAction::Add(edited.clone()));

    assert_eq!(widget.records().len(), 2);
    assert_eq!(widget.records()[0], edited);
    assert_eq!(widget.records()[1].name, "second");
    assert!(!widget.state().is_editing());
}

#[test]
fn delete_twice_is_idempotent() {
    let store = MemoryStore::with_item(
        "todos",
        r#"[{"id":1,"name":"a","status":false},{"id":2,"name":"b","status":true}]"#,
    );
    let mut widget = reactive(&store);

    assert_eq!(widget.dispatch(TodoAction::Delete(1)), SaveStatus::Written);
    let after_first = widget.records().to_vec();
    assert_eq!(widget.dispatch(TodoAction::Delete(1)), SaveStatus::Skipped);

    assert_eq!(widget.records(), after_first.as_slice());
    assert_eq!(after_first.len(), 1);
    assert_eq!(after_first[0].id, 2);
    assert_eq!(
        store.get_item("todos").unwrap().as_deref(),
        Some(r#"[{"id":2,"name":"b","status":true}]"#)
    );
}

#[test]
fn toggle_twice_restores_status() {
    let store = MemoryStore::with_item("todos", r#"[{"id":7,"name":"a","status":false}]"#);
    let mut widget = reactive(&store);

    widget.dispatch(TodoAction::ToggleStatus(7));
    assert!(widget.records()[0].is_done());
    widget.dispatch(TodoAction::ToggleStatus(7));
    assert!(!widget.records()[0].is_done());
}

#[test]
fn blank_draft_is_rejected_without_dispatch() {
    let store = MemoryStore::new();
    let mut widget = reactive(&store);

    let outcome = type_and_submit(&mut widget, "   ");

    assert!(matches!(outcome, Submit::Rejected(_)));
    assert!(widget.records().is_empty());
    assert_eq!(widget.draft().name, "   ");
    assert_eq!(store.get_item("todos").unwrap(), None);
}

#[test]
fn unknown_ids_are_silent_no_ops() {
    let store = MemoryStore::with_item("todos", r#"[{"id":1,"name":"a","status":false}]"#);
    let mut widget = reactive(&store);
    let before = widget.records().to_vec();

    assert_eq!(widget.dispatch(TodoAction::ToggleStatus(9)), SaveStatus::Skipped);
    assert_eq!(
        widget.dispatch(TodoAction::Update(Todo::draft("x").with_id(9))),
        SaveStatus::Skipped
    );
    assert_eq!(widget.records(), before.as_slice());
}

#[test]
fn explicit_write_skips_update_and_toggle() {
    let store = MemoryStore::with_item("todos", r#"[{"id":1,"name":"a","status":false}]"#);
    let mut widget = explicit(&store);

    assert_eq!(widget.dispatch(TodoAction::ToggleStatus(1)), SaveStatus::Skipped);
    assert_eq!(
        widget.dispatch(TodoAction::Update(Todo::draft("renamed").with_id(1))),
        SaveStatus::Skipped
    );
    assert_eq!(
        store.get_item("todos").unwrap().as_deref(),
        Some(r#"[{"id":1,"name":"a","status":false}]"#)
    );

    assert_eq!(widget.dispatch(TodoAction::Delete(42)), SaveStatus::Written);
    assert_eq!(
        store.get_item("todos").unwrap().as_deref(),
        Some(r#"[{"id":1,"name":"renamed","status":false}]"#)
    );
}

#[test]
fn reactive_write_persists_toggle_and_update() {
    let store = MemoryStore::with_item("todos", r#"[{"id":1,"name":"a","status":false}]"#);
    let mut widget = reactive(&store);

    assert_eq!(widget.dispatch(TodoAction::ToggleStatus(1)), SaveStatus::Written);
    assert_eq!(
        store.get_item("todos").unwrap().as_deref(),
        Some(r#"[{"id":1,"name":"a","status":true}]"#)
    );
}

#[test]
fn draft_edits_never_write() {
    let store = MemoryStore::new();
    let mut widget = reactive(&store);

    let status = widget.dispatch(TodoAction::SetDraftField(TodoField::Name("x".to_string())));

    assert_eq!(status, SaveStatus::Skipped);
    assert_eq!(store.get_item("todos").unwrap(), None);
}

#[test]
fn reopening_restores_saved_collection() {
    let store = MemoryStore::new();
    {
        let mut widget = reactive(&store);
        type_and_submit(&mut widget, "Buy milk");
        type_and_submit(&mut widget, "Walk dog");
    }
    let saved = store.get_item("todos").unwrap();

    let reopened = reactive(&store);
    assert_eq!(reopened.records().len(), 2);
    assert_eq!(reopened.records()[1].name, "Walk dog");
    assert_eq!(store.get_item("todos").unwrap(), saved);
}

#[test]
fn malformed_storage_opens_empty_and_is_not_overwritten_on_open() {
    let store = MemoryStore::with_item("todos", "not json at all");
    let widget = reactive(&store);

    assert!(widget.records().is_empty());
    assert_eq!(widget.stored_value().unwrap().as_deref(), Some("not json at all"));
}

#[test]
fn fresh_ids_skip_ids_loaded_from_storage() {
    let store = MemoryStore::with_item(
        "todos",
        r#"[{"id":1,"name":"a","status":false},{"id":2,"name":"b","status":false}]"#,
    );
    let mut widget = reactive(&store);

    widget.dispatch(TodoAction::Add(Todo::draft("c")));
    assert_eq!(widget.records()[2].id, 3);
}

#[test]
fn stored_records_with_duplicate_or_zero_ids_survive_later_saves() {
    let stored = r#"[{"id":1,"name":"a","status":false},{"id":1,"name":"b","status":false},{"id":0,"name":"z","status":false}]"#;
    let store = MemoryStore::with_item("todos", stored);
    let mut widget = reactive(&store);
    assert_eq!(widget.records().len(), 3);

    assert_eq!(
        widget.dispatch(TodoAction::Add(Todo::draft("c"))),
        SaveStatus::Written
    );

    assert_eq!(
        store.get_item("todos").unwrap().as_deref(),
        Some(
            r#"[{"id":1,"name":"a","status":false},{"id":1,"name":"b","status":false},{"id":0,"name":"z","status":false},{"id":2,"name":"c","status":false}]"#
        )
    );
}

#[test]
fn add_terminates_when_id_generator_is_stuck_on_a_taken_id() {
    let stored = format!(r#"[{{"id":{},"name":"last","status":false}}]"#, i64::MAX);
    let store = MemoryStore::with_item("todos", stored);
    let mut widget = TodoList::open(
        &store,
        WidgetConfig::default(),
        SequentialIdGenerator::starting_at(i64::MAX),
    );

    widget.dispatch(TodoAction::Add(Todo::draft("next")));

    assert_eq!(widget.records().len(), 2);
    assert_eq!(widget.records()[1].id, 1);
}
