//! Student transition table.
//!
//! Same shape as the to-do table. The edit form commits through `Update`,
//! which keeps the draft; the add form commits through `Add`, which resets it.

use crate::ids::IdGenerator;
use crate::model::record::{Record, RecordId};
use crate::model::student::{Student, StudentField};
use crate::reducer::list::{self, ListState, Step, TransitionTable};

/// Every input the student widget can dispatch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StudentAction {
    SetDraftField(StudentField),
    /// Starts editing by copying a committed entry into the draft.
    SetDraft(Student),
    Add(Student),
    Load(Vec<Student>),
    Delete(RecordId),
    Update(Student),
    ToggleStatus(RecordId),
}

impl StudentAction {
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
    mut state: ListState<Student>,
    action: StudentAction,
    ids: &mut dyn IdGenerator,
) -> Step<Student> {
    match action {
        StudentAction::SetDraftField(field) => {
            state.draft.set_field(field);
            Step::quiet(state)
        }
        StudentAction::SetDraft(student) => {
            state.draft = student;
            Step::quiet(state)
        }
        StudentAction::Add(student) => {
            list::upsert(&mut state.records, student, ids);
            state.draft = Student::empty_draft();
            Step::written(state)
        }
        StudentAction::Load(students) => {
            state.records = students;
            Step::quiet(state)
        }
        StudentAction::Delete(id) => {
            list::remove(&mut state.records, id);
            Step::written(state)
        }
        StudentAction::Update(student) => {
            list::replace(&mut state.records, student);
            Step::quiet(state)
        }
        StudentAction::ToggleStatus(id) => {
            list::toggle(&mut state.records, id);
            Step::quiet(state)
        }
    }
}

/// Table binding for the student widget.
#[derive(Debug, Clone, Copy, Default)]
pub struct StudentTable;

impl TransitionTable for StudentTable {
    type Record = Student;
    type Action = StudentAction;

    fn reduce(
        state: ListState<Student>,
        action: StudentAction,
        ids: &mut dyn IdGenerator,
    ) -> Step<Student> {
        reduce(state, action, ids)
    }

    fn load(records: Vec<Student>) -> StudentAction {
        StudentAction::Load(records)
    }

    /// New drafts go through `Add`, edits of committed rows through `Update`.
    fn submit(draft: Student) -> StudentAction {
        if draft.is_new() {
            StudentAction::Add(draft)
        } else {
            StudentAction::Update(draft)
        }
    }

    fn kind(action: &StudentAction) -> &'static str {
        action.kind()
    }
}
