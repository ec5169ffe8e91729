use std::sync::Mutex;

use thiserror::Error;

use crate::prelude_internal::*;

/// Identifier of one persisted record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RecordId(pub u64);

impl std::fmt::Display for RecordId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// What to persist when a chooser has to create its own upstream record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordSpec {
    /// The kind of record, e.g. `image`.
    pub kind: TagName,
    pub title: String,
}

impl RecordSpec {
    pub fn new(kind: impl Into<TagName>, title: impl Into<String>) -> Self {
        Self {
            kind: kind.into(),
            title: title.into(),
        }
    }
}

/// The persistence collaborator failed to create a record. Never retried;
/// propagates to the caller as-is.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("record store failed: {0}")]
pub struct StoreError(pub String);

/// Narrow interface to the external persistence collaborator: create one
/// instance, get back its identifier. Builds never read records back.
pub trait RecordStore: std::fmt::Debug + Send + Sync {
    fn create(&self, spec: &RecordSpec) -> Result<RecordId, StoreError>;
}

/// In-memory store with monotonic identifiers. Gives each test its own
/// isolated backend, which the build engine itself assumes but never manages.
#[derive(Debug, Default)]
pub struct MemoryStore {
    records: Mutex<Vec<(RecordId, RecordSpec)>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn count(&self) -> usize {
        self.records
            .lock()
            .map(|records| records.len())
            .unwrap_or(0)
    }

    pub fn records(&self) -> Vec<(RecordId, RecordSpec)> {
        self.records
            .lock()
            .map(|records| records.clone())
            .unwrap_or_default()
    }
}

impl RecordStore for MemoryStore {
    fn create(&self, spec: &RecordSpec) -> Result<RecordId, StoreError> {
        let mut records = self
            .records
            .lock()
            .map_err(|_| StoreError("store mutex poisoned".to_string()))?;
        let id = RecordId(records.len() as u64 + 1);
        records.push((id, spec.clone()));
        Ok(id)
    }
}
