use listkeeper_core::{Record, Student, Todo};

#[test]
fn todo_serializes_with_stored_field_names() {
    let todo = Todo::draft("Buy milk").with_id(1700000000000);
    let json = serde_json::to_value(&todo).unwrap();

    assert_eq!(json["id"], 1700000000000_i64);
    assert_eq!(json["name"], "Buy milk");
    assert_eq!(json["status"], false);
}

#[test]
fn todo_without_status_field_defaults_to_not_done() {
    let todos: Vec<Todo> = serde_json::from_str(r#"[{"id":3,"name":"legacy"}]"#).unwrap();
    assert_eq!(todos, vec![Todo::draft("legacy").with_id(3)]);
}

#[test]
fn student_serializes_with_stored_field_names() {
    let student = Student::draft("An", "2001-02-03", "an@example.com", "Hanoi").with_id(9);
    let json = serde_json::to_value(&student).unwrap();

    assert_eq!(json["id"], 9);
    assert_eq!(json["name"], "An");
    assert_eq!(json["birthday"], "2001-02-03");
    assert_eq!(json["email"], "an@example.com");
    assert_eq!(json["address"], "Hanoi");
    assert_eq!(json["status"], true);
}

#[test]
fn storage_keys_match_existing_data() {
    assert_eq!(Todo::STORAGE_KEY, "todos");
    assert_eq!(Student::STORAGE_KEY, "ListStudent");
}
