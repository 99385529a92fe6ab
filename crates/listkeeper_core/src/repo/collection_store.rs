//! Whole-collection persistence over a `KeyValueStore`.
//!
//! # Responsibility
//! - Read a record collection once at widget startup.
//! - Overwrite the stored collection with its full JSON array.
//!
//! # Invariants
//! - `load` never fails: absent, unparseable, or unreadable data is empty.
//! - The stored value is a flat JSON array of records under `R::STORAGE_KEY`.

use crate::model::record::Record;
use crate::repo::kv_store::{KeyValueStore, StoreResult};
use log::{debug, warn};
use std::marker::PhantomData;

/// Persistence adapter for one record collection.
pub struct CollectionStore<R: Record, S: KeyValueStore> {
    store: S,
    _record: PhantomData<R>,
}

impl<R: Record, S: KeyValueStore> CollectionStore<R, S> {
    pub fn new(store: S) -> Self {
        Self {
            store,
            _record: PhantomData,
        }
    }

    /// Storage key this adapter reads and writes.
    pub fn key(&self) -> &'static str {
        R::STORAGE_KEY
    }

    /// Reads the stored collection, degrading every failure to empty.
    pub fn load(&self) -> Vec<R> {
        let raw = match self.store.get_item(R::STORAGE_KEY) {
            Ok(Some(raw)) => raw,
            Ok(None) => {
                debug!(
                    "event=collection_load module=repo status=empty key={}",
                    R::STORAGE_KEY
                );
                return Vec::new();
            }
            Err(err) => {
                warn!(
                    "event=collection_load module=repo status=error key={} error_code=store_read_failed error={err}",
                    R::STORAGE_KEY
                );
                return Vec::new();
            }
        };

        match serde_json::from_str::<Vec<R>>(&raw) {
            Ok(records) => {
                debug!(
                    "event=collection_load module=repo status=ok key={} count={}",
                    R::STORAGE_KEY,
                    records.len()
                );
                records
            }
            Err(err) => {
                warn!(
                    "event=collection_load module=repo status=error key={} error_code=malformed_value error={err}",
                    R::STORAGE_KEY
                );
                Vec::new()
            }
        }
    }

    /// Replaces the stored value with `records` serialized as a JSON array.
    pub fn save(&self, records: &[R]) -> StoreResult<()> {
        let serialized = serde_json::to_string(records)?;
        self.store.set_item(R::STORAGE_KEY, &serialized)?;
        debug!(
            "event=collection_save module=repo status=ok key={} count={}",
            R::STORAGE_KEY,
            records.len()
        );
        Ok(())
    }

    /// Returns the raw stored string, if any.
    pub fn raw(&self) -> StoreResult<Option<String>> {
        self.store.get_item(R::STORAGE_KEY)
    }
}
