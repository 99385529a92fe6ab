//! Widget runtime: owns one list's state and drives its persistence.
//!
//! # Responsibility
//! - Load the stored collection exactly once, before any user action.
//! - Run each action through its transition table to completion.
//! - Save the collection according to the configured `PersistMode`.
//!
//! # Invariants
//! - `dispatch` never fails; storage errors surface as `SaveStatus::Failed`.
//! - Invalid drafts are rejected before any action is dispatched.
//! - Opening a widget never writes to storage.

use crate::config::{PersistMode, WidgetConfig};
use crate::ids::IdGenerator;
use crate::model::record::{DraftValidationError, Record};
use crate::reducer::list::{ListState, TransitionTable};
use crate::reducer::student::StudentTable;
use crate::reducer::todo::TodoTable;
use crate::repo::collection_store::CollectionStore;
use crate::repo::kv_store::{KeyValueStore, StoreResult};
use log::{debug, error, info};

/// To-do list widget over storage `S`.
pub type TodoList<S> = ListWidget<TodoTable, S>;
/// Student manager widget over storage `S`.
pub type StudentList<S> = ListWidget<StudentTable, S>;

/// Persistence outcome of one dispatched action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SaveStatus {
    /// No write was due for this action.
    Skipped,
    Written,
    /// A write was due but the store refused it; state still advanced.
    Failed,
}

/// Outcome of submitting the current draft.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Submit {
    Accepted(SaveStatus),
    /// Nothing was dispatched.
    Rejected(DraftValidationError),
}

/// One list widget instance.
pub struct ListWidget<T: TransitionTable, S: KeyValueStore> {
    state: ListState<T::Record>,
    persistence: CollectionStore<T::Record, S>,
    config: WidgetConfig,
    ids: Box<dyn IdGenerator>,
}

impl<T: TransitionTable, S: KeyValueStore> ListWidget<T, S> {
    /// Opens a widget and loads its stored collection.
    ///
    /// The load goes through the table's `Load` action and is not written
    /// back, whatever the persistence mode.
    pub fn open(store: S, config: WidgetConfig, ids: impl IdGenerator + 'static) -> Self {
        let persistence = CollectionStore::new(store);
        let mut ids: Box<dyn IdGenerator> = Box::new(ids);
        let stored = persistence.load();
        let state = T::reduce(ListState::new(), T::load(stored), ids.as_mut()).state;

        info!(
            "event=widget_open module=service status=ok key={} mode={} count={}",
            persistence.key(),
            config.persist_mode.as_str(),
            state.records.len()
        );

        Self {
            state,
            persistence,
            config,
            ids,
        }
    }

    pub fn state(&self) -> &ListState<T::Record> {
        &self.state
    }

    pub fn records(&self) -> &[T::Record] {
        &self.state.records
    }

    pub fn draft(&self) -> &T::Record {
        &self.state.draft
    }

    pub fn config(&self) -> WidgetConfig {
        self.config
    }

    /// Runs `action` to completion, then saves if the mode calls for it.
    pub fn dispatch(&mut self, action: T::Action) -> SaveStatus {
        let kind = T::kind(&action);
        let previous = std::mem::take(&mut self.state);
        let changed_from = previous.records.clone();
        let step = T::reduce(previous, action, self.ids.as_mut());
        self.state = step.state;

        let due = match self.config.persist_mode {
            PersistMode::ExplicitWrite => step.explicit_write,
            PersistMode::ReactiveWrite => self.state.records != changed_from,
        };

        debug!(
            "event=widget_dispatch module=service status=ok key={} action={} count={} save_due={}",
            self.persistence.key(),
            kind,
            self.state.records.len(),
            due
        );

        if !due {
            return SaveStatus::Skipped;
        }
        self.save()
    }

    /// Validates the draft and dispatches the table's submit action.
    pub fn submit_draft(&mut self) -> Submit {
        if let Err(err) = self.state.draft.validate_draft() {
            info!(
                "event=draft_rejected module=service status=rejected key={} reason={}",
                self.persistence.key(),
                err
            );
            return Submit::Rejected(err);
        }
        let draft = self.state.draft.clone();
        Submit::Accepted(self.dispatch(T::submit(draft)))
    }

    /// Raw stored value of this widget's collection.
    pub fn stored_value(&self) -> StoreResult<Option<String>> {
        self.persistence.raw()
    }

    fn save(&self) -> SaveStatus {
        match self.persistence.save(&self.state.records) {
            Ok(()) => SaveStatus::Written,
            Err(err) => {
                error!(
                    "event=collection_save module=service status=error key={} error_code=store_write_failed error={err}",
                    self.persistence.key()
                );
                SaveStatus::Failed
            }
        }
    }
}
