// Pure conflict decisions consulted by the record store.
//
// Responsibilities
// - Detect duplicate names among live records.
// - Detect stale writes by comparing last edited markers.
// - Decide whether a dependency blocks a delete.
//
// Boundaries
// - No state of its own. Every decision reads only its arguments.

use chrono::{DateTime, Utc};
use std::collections::BTreeMap;

use crate::shared::core::record::{Record, RecordKey};
use crate::shared::infrastructure::record_store::NameComparison;

/// Live records of one store keyed by identity.
pub type Snapshot<R> = BTreeMap<RecordKey, R>;

pub trait ConflictPolicy<R: Record>: Send + Sync {
    /// True when a live record other than `excluding` already uses `candidate`.
    fn is_duplicate_name(
        &self,
        candidate: &str,
        excluding: Option<&RecordKey>,
        snapshot: &Snapshot<R>,
    ) -> bool;

    /// True when the markers differ, including `None` against `Some`.
    fn is_stale(
        &self,
        incoming: Option<DateTime<Utc>>,
        stored: Option<DateTime<Utc>>,
    ) -> bool {
        incoming != stored
    }

    fn blocks_delete(&self, _key: &RecordKey, _snapshot: &Snapshot<R>) -> bool {
        false
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct StandardConflictPolicy {
    pub name_comparison: NameComparison,
}

impl StandardConflictPolicy {
    pub fn new(name_comparison: NameComparison) -> Self {
        Self { name_comparison }
    }
}

impl<R: Record> ConflictPolicy<R> for StandardConflictPolicy {
    fn is_duplicate_name(
        &self,
        candidate: &str,
        excluding: Option<&RecordKey>,
        snapshot: &Snapshot<R>,
    ) -> bool {
        snapshot
            .iter()
            .filter(|(key, _)| Some(*key) != excluding)
            .any(|(_, record)| self.name_comparison.same(record.name(), candidate))
    }
}
