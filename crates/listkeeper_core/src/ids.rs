//! Record identity generation.
//!
//! # Responsibility
//! - Mint fresh ids for committed drafts behind an injectable port.
//!
//! # Invariants
//! - Generators never return `NEW_RECORD_ID`.
//! - Each generator yields strictly increasing ids.

use crate::model::record::{RecordId, NEW_RECORD_ID};
use std::time::{SystemTime, UNIX_EPOCH};

/// Source of fresh record ids.
pub trait IdGenerator {
    fn next_id(&mut self) -> RecordId;
}

/// Epoch-millisecond ids, bumped when the clock has not advanced.
#[derive(Debug, Default)]
pub struct ClockIdGenerator {
    last: RecordId,
}

impl ClockIdGenerator {
    pub fn new() -> Self {
        Self::default()
    }
}

impl IdGenerator for ClockIdGenerator {
    fn next_id(&mut self) -> RecordId {
        let now = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map_or(0, |elapsed| {
                RecordId::try_from(elapsed.as_millis()).unwrap_or(RecordId::MAX)
            });
        let next = now.max(self.last.saturating_add(1)).max(NEW_RECORD_ID + 1);
        self.last = next;
        next
    }
}

/// Counter ids starting at a fixed value.
#[derive(Debug)]
pub struct SequentialIdGenerator {
    next: RecordId,
}

impl SequentialIdGenerator {
    /// Starts at `first`; values `<= 0` are clamped to 1.
    pub fn starting_at(first: RecordId) -> Self {
        Self {
            next: first.max(NEW_RECORD_ID + 1),
        }
    }
}

impl Default for SequentialIdGenerator {
    fn default() -> Self {
        Self::starting_at(1)
    }
}

impl IdGenerator for SequentialIdGenerator {
    fn next_id(&mut self) -> RecordId {
        let id = self.next;
        self.next = self.next.saturating_add(1);
        id
    }
}
