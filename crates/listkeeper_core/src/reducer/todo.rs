//! To-do transition table.
//!
//! `Add` is an upsert: a draft carrying a committed id replaces that entry in
//! place, so the same action serves both "add" and "save edit".

use crate::ids::IdGenerator;
use crate::model::record::{Record, RecordId};
use crate::model::todo::{Todo, TodoField};
use crate::reducer::list::{self, ListState, Step, TransitionTable};

/// Every input the to-do widget can dispatch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TodoAction {
    SetDraftField(TodoField),
    /// Starts editing by copying a committed entry into the draft.
    SetDraft(Todo),
    Add(Todo),
    Load(Vec<Todo>),
    Delete(RecordId),
    Update(Todo),
    ToggleStatus(RecordId),
}

impl TodoAction {
    /// Stable name used in logs.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::SetDraftField(_) => "set_draft_field",
            Self::SetDraft(_) => "set_draft",
            Self::Add(_) => "add",
            Self::Load(_) => "load",
            Self::Delete(_) => "delete",
            Self::Update(_) => "update",
            Self::ToggleStatus(_) => "toggle_status",
        }
    }
}

/// Applies `action` to `state`.
pub fn reduce(
    mut state: ListState<Todo>,
    action: TodoAction,
    ids: &mut dyn IdGenerator,
) -> Step<Todo> {
    match action {
        TodoAction::SetDraftField(field) => {
            state.draft.set_field(field);
            Step::quiet(state)
        }
        TodoAction::SetDraft(todo) => {
            state.draft = todo;
            Step::quiet(state)
        }
        TodoAction::Add(todo) => {
            list::upsert(&mut state.records, todo, ids);
            state.draft = Todo::empty_draft();
            Step::written(state)
        }
        TodoAction::Load(todos) => {
            state.records = todos;
            Step::quiet(state)
        }
        TodoAction::Delete(id) => {
            list::remove(&mut state.records, id);
            Step::written(state)
        }
        TodoAction::Update(todo) => {
            list::replace(&mut state.records, todo);
            Step::quiet(state)
        }
        TodoAction::ToggleStatus(id) => {
            list::toggle(&mut state.records, id);
            Step::quiet(state)
        }
    }
}

/// Table binding for the to-do widget.
#[derive(Debug, Clone, Copy, Default)]
pub struct TodoTable;

impl TransitionTable for TodoTable {
    type Record = Todo;
    type Action = TodoAction;

    fn reduce(
        state: ListState<Todo>,
        action: TodoAction,
        ids: &mut dyn IdGenerator,
    ) -> Step<Todo> {
        reduce(state, action, ids)
    }

    fn load(records: Vec<Todo>) -> TodoAction {
        TodoAction::Load(records)
    }

    /// The upsert `Add` covers both new entries and edits.
    fn submit(draft: Todo) -> TodoAction {
        TodoAction::Add(draft)
    }

    fn kind(action: &TodoAction) -> &'static str {
        action.kind()
    }
}
