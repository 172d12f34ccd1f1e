// Record store port.
//
// Purpose
// - Describe the create, update, delete, count and query operations over one
//   collection of records, without tying callers to a backend.
//
// Responsibilities
// - Define the typed failure kinds a store can report.
// - Define the per-store options (identity kind, uniqueness, stale write detection).
//
// Testing guidance
// - The in memory implementation backs tests and local development.

pub mod conflict_policy;
pub mod in_memory;

use async_trait::async_trait;
use thiserror::Error;

use crate::shared::core::record::{Editable, KeyColumn, RecordKey};
use crate::shared::core::validation::ValidationErrors;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    #[error("validation failed: {0}")]
    Validation(ValidationErrors),

    #[error("record not found: {}", display_key(.key))]
    NotFound { key: Option<RecordKey> },

    #[error("stale write rejected for record {key}")]
    StaleWrite { key: RecordKey },

    #[error("record {key} has a dependency that prevents it from being deleted")]
    DeleteConflict { key: RecordKey },

    #[error("unexpected: {0}")]
    Unexpected(String),
}

fn display_key(key: &Option<RecordKey>) -> String {
    key.as_ref()
        .map(ToString::to_string)
        .unwrap_or_else(|| "<no key>".to_string())
}

impl From<ValidationErrors> for StoreError {
    fn from(errors: ValidationErrors) -> Self {
        StoreError::Validation(errors)
    }
}

/// How two names are compared when uniqueness is enforced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NameComparison {
    #[default]
    CaseSensitive,
    CaseInsensitive,
}

impl NameComparison {
    pub fn same(&self, left: &str, right: &str) -> bool {
        match self {
            NameComparison::CaseSensitive => left == right,
            NameComparison::CaseInsensitive => left.to_lowercase() == right.to_lowercase(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StoreOptions {
    /// Identity kind assigned to created records.
    pub key_column: KeyColumn,
    pub unique_names: bool,
    pub detect_stale_writes: bool,
    pub name_comparison: NameComparison,
}

impl Default for StoreOptions {
    fn default() -> Self {
        Self {
            key_column: KeyColumn::Integer64Id,
            unique_names: true,
            detect_stale_writes: true,
            name_comparison: NameComparison::CaseSensitive,
        }
    }
}

#[async_trait]
pub trait RecordStore<R: Editable>: Send + Sync {
    async fn count(&self) -> Result<usize, StoreError>;
    async fn get(&self, key: &RecordKey) -> Result<Option<R>, StoreError>;
    /// All live records ordered by key.
    async fn list(&self) -> Result<Vec<R>, StoreError>;
    async fn create(&self, record: R) -> Result<R, StoreError>;
    async fn update(&self, record: R) -> Result<R, StoreError>;
    /// Returns `false` when no record had the key.
    async fn delete(&self, key: &RecordKey) -> Result<bool, StoreError>;
}
