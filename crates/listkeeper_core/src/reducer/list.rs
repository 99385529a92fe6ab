//! State shape and collection helpers shared by both transition tables.

use crate::ids::IdGenerator;
use crate::model::record::{Record, RecordId, NEW_RECORD_ID};

/// Collection plus the single draft being composed or edited.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListState<R> {
    pub records: Vec<R>,
    pub draft: R,
}

impl<R: Record> ListState<R> {
    /// Empty collection with an empty draft.
    pub fn new() -> Self {
        Self {
            records: Vec::new(),
            draft: R::empty_draft(),
        }
    }

    pub fn find(&self, id: RecordId) -> Option<&R> {
        self.records.iter().find(|record| record.id() == id)
    }

    /// Whether the draft is an edit of a committed record.
    pub fn is_editing(&self) -> bool {
        !self.draft.is_new()
    }
}

impl<R: Record> Default for ListState<R> {
    fn default() -> Self {
        Self::new()
    }
}

/// Result of one transition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Step<R> {
    pub state: ListState<R>,
    /// Set by the branches that save in explicit-write mode.
    pub explicit_write: bool,
}

impl<R> Step<R> {
    pub(crate) fn quiet(state: ListState<R>) -> Self {
        Self {
            state,
            explicit_write: false,
        }
    }

    pub(crate) fn written(state: ListState<R>) -> Self {
        Self {
            state,
            explicit_write: true,
        }
    }
}

/// Binds a record type to its action enum and transition function.
///
/// Lets the widget runtime drive either table without knowing its actions.
pub trait TransitionTable {
    type Record: Record;
    type Action: std::fmt::Debug;

    fn reduce(
        state: ListState<Self::Record>,
        action: Self::Action,
        ids: &mut dyn IdGenerator,
    ) -> Step<Self::Record>;

    /// Action that replaces the collection with stored data.
    fn load(records: Vec<Self::Record>) -> Self::Action;

    /// Action a form submit dispatches for `draft`.
    fn submit(draft: Self::Record) -> Self::Action;

    /// Stable action name used in logs.
    fn kind(action: &Self::Action) -> &'static str;
}

/// Replaces the record sharing `record`'s id, or appends it under a fresh id.
pub(crate) fn upsert<R: Record>(records: &mut Vec<R>, record: R, ids: &mut dyn IdGenerator) {
    if !record.is_new() {
        if let Some(slot) = records.iter_mut().find(|existing| existing.id() == record.id()) {
            *slot = record;
            return;
        }
    }
    let id = mint_id(records, ids);
    records.push(record.with_id(id));
}

pub(crate) fn remove<R: Record>(records: &mut Vec<R>, id: RecordId) {
    records.retain(|record| record.id() != id);
}

/// Replaces the record with `record.id()` wholesale; no-op when absent.
pub(crate) fn replace<R: Record>(records: &mut [R], record: R) {
    if let Some(slot) = records.iter_mut().find(|existing| existing.id() == record.id()) {
        *slot = record;
    }
}

pub(crate) fn toggle<R: Record>(records: &mut [R], id: RecordId) {
    if let Some(record) = records.iter_mut().find(|record| record.id() == id) {
        record.toggle_status();
    }
}

/// Generator draws tried before falling back to scanning the collection.
const MAX_ID_DRAWS: usize = 64;

fn mint_id<R: Record>(records: &[R], ids: &mut dyn IdGenerator) -> RecordId {
    let is_free = |id: RecordId| {
        id != NEW_RECORD_ID && records.iter().all(|record| record.id() != id)
    };

    for _ in 0..MAX_ID_DRAWS {
        let id = ids.next_id();
        if is_free(id) {
            return id;
        }
    }

    // Generator is stuck on taken ids: one past the largest, else the lowest gap.
    let largest = records.iter().map(Record::id).max().unwrap_or(NEW_RECORD_ID);
    match largest.checked_add(1) {
        Some(id) if is_free(id) => id,
        _ => (NEW_RECORD_ID + 1..)
            .find(|id| is_free(*id))
            .unwrap_or(RecordId::MIN),
    }
}

#[cfg(test)]
mod tests {
    use super::{mint_id, upsert, ListState};
    use crate::ids::SequentialIdGenerator;
    use crate::model::record::Record;
    use crate::model::todo::Todo;

    fn todo(id: i64, name: &str) -> Todo {
        Todo::draft(name).with_id(id)
    }

    #[test]
    fn mint_id_skips_ids_already_taken() {
        let records = vec![todo(1, "a"), todo(2, "b")];
        let mut ids = SequentialIdGenerator::starting_at(1);
        assert_eq!(mint_id(&records, &mut ids), 3);
    }

    #[test]
    fn upsert_of_unknown_committed_id_appends_with_fresh_id() {
        let mut records = vec![todo(1, "a")];
        let mut ids = SequentialIdGenerator::starting_at(10);
        upsert(&mut records, todo(99, "stale edit"), &mut ids);
        assert_eq!(records.len(), 2);
        assert_eq!(records[1].id, 10);
    }

    #[test]
    fn mint_id_falls_back_when_generator_is_stuck() {
        let records = vec![todo(i64::MAX, "max"), todo(3, "b")];
        let mut ids = SequentialIdGenerator::starting_at(i64::MAX);
        assert_eq!(mint_id(&records, &mut ids), 1);
    }

    #[test]
    fn mint_id_uses_one_past_largest_when_draws_are_exhausted() {
        let records: Vec<Todo> = (1..=70).map(|id| todo(id, "taken")).collect();
        let mut ids = SequentialIdGenerator::starting_at(1);
        assert_eq!(mint_id(&records, &mut ids), 71);
    }

    #[test]
    fn new_state_is_not_editing() {
        let state = ListState::<Todo>::new();
        assert!(state.records.is_empty());
        assert!(!state.is_editing());
        assert!(state.find(1).is_none());
    }
}
