// In memory implementation of the RecordStore port.
//
// Purpose
// - Hold one collection of records for the lifetime of the process.
//
// Responsibilities
// - Assign identities and audit stamps.
// - Enforce domain rules, unique names and optimistic concurrency inside the same
//   write lock as the mutation, so concurrent writers are linearized.

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::shared::core::record::{EditStamps, Editable, KeyColumn, RecordKey};
use crate::shared::infrastructure::record_store::conflict_policy::{
    ConflictPolicy, Snapshot, StandardConflictPolicy,
};
use crate::shared::infrastructure::record_store::{RecordStore, StoreError, StoreOptions};

struct Collection<R> {
    records: Snapshot<R>,
    next_id: i64,
}

impl<R> Collection<R> {
    fn next_key(&mut self, column: KeyColumn) -> Result<RecordKey, StoreError> {
        match column {
            KeyColumn::Integer64Id => {
                let id = self.next_id;
                self.next_id = id
                    .checked_add(1)
                    .ok_or_else(|| StoreError::Unexpected("identity sequence exhausted".into()))?;
                Ok(RecordKey::Integer64(id))
            }
            KeyColumn::StringId => Ok(RecordKey::String(Uuid::now_v7().to_string())),
        }
    }
}

pub struct InMemoryRecordStore<R: Editable> {
    inner: RwLock<Collection<R>>,
    options: StoreOptions,
    policy: Box<dyn ConflictPolicy<R>>,
    is_offline: bool,
}

impl<R: Editable> Default for InMemoryRecordStore<R> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Editable> InMemoryRecordStore<R> {
    pub fn new() -> Self {
        Self::with_options(StoreOptions::default())
    }

    pub fn with_options(options: StoreOptions) -> Self {
        Self::with_policy(options, StandardConflictPolicy::new(options.name_comparison))
    }

    pub fn with_policy(options: StoreOptions, policy: impl ConflictPolicy<R> + 'static) -> Self {
        Self {
            inner: RwLock::new(Collection {
                records: Snapshot::new(),
                next_id: 1,
            }),
            options,
            policy: Box::new(policy),
            is_offline: false,
        }
    }

    pub fn toggle_offline(&mut self) {
        self.is_offline = !self.is_offline;
    }

    /// Creates the records in order, stopping at the first failure.
    pub async fn create_many(&self, records: Vec<R>) -> Result<Vec<R>, StoreError> {
        let mut created = Vec::with_capacity(records.len());
        for record in records {
            created.push(self.create(record).await?);
        }
        Ok(created)
    }

    fn ensure_online(&self) -> Result<(), StoreError> {
        if self.is_offline {
            return Err(StoreError::Unexpected("record store offline".into()));
        }
        Ok(())
    }

    fn check_rules(
        &self,
        record: &R,
        excluding: Option<&RecordKey>,
        snapshot: &Snapshot<R>,
    ) -> Result<(), StoreError> {
        let mut errors = record.validate();
        let name = record.name();
        if self.options.unique_names
            && !name.trim().is_empty()
            && self.policy.is_duplicate_name(name, excluding, snapshot)
        {
            errors.add(
                "Name",
                format!("The {name} name already exists in the data store."),
            );
        }
        errors.into_result()?;
        Ok(())
    }
}

#[async_trait]
impl<R: Editable> RecordStore<R> for InMemoryRecordStore<R> {
    async fn count(&self) -> Result<usize, StoreError> {
        self.ensure_online()?;
        Ok(self.inner.read().await.records.len())
    }

    async fn get(&self, key: &RecordKey) -> Result<Option<R>, StoreError> {
        self.ensure_online()?;
        Ok(self.inner.read().await.records.get(key).cloned())
    }

    async fn list(&self) -> Result<Vec<R>, StoreError> {
        self.ensure_online()?;
        Ok(self.inner.read().await.records.values().cloned().collect())
    }

    async fn create(&self, mut record: R) -> Result<R, StoreError> {
        self.ensure_online()?;
        let mut guard = self.inner.write().await;
        self.check_rules(&record, None, &guard.records)?;
        let key = guard.next_key(self.options.key_column)?;
        record.set_key(key.clone());
        *record.stamps_mut() = EditStamps::created(Utc::now());
        guard.records.insert(key, record.clone());
        Ok(record)
    }

    async fn update(&self, mut record: R) -> Result<R, StoreError> {
        self.ensure_online()?;
        let Some(key) = record.key().cloned() else {
            return Err(StoreError::NotFound { key: None });
        };
        let mut guard = self.inner.write().await;
        let stored = match guard.records.get(&key) {
            Some(stored) => *stored.stamps(),
            None => return Err(StoreError::NotFound { key: Some(key) }),
        };
        self.check_rules(&record, Some(&key), &guard.records)?;
        if self.options.detect_stale_writes
            && self
                .policy
                .is_stale(record.stamps().last_edited_on, stored.last_edited_on)
        {
            return Err(StoreError::StaleWrite { key });
        }
        let stamps = record.stamps_mut();
        stamps.created_on = stored.created_on;
        stamps.last_edited_on = Some(stored.next_edit(Utc::now()));
        guard.records.insert(key, record.clone());
        Ok(record)
    }

    async fn delete(&self, key: &RecordKey) -> Result<bool, StoreError> {
        self.ensure_online()?;
        let mut guard = self.inner.write().await;
        if !guard.records.contains_key(key) {
            return Ok(false);
        }
        if self.policy.blocks_delete(key, &guard.records) {
            return Err(StoreError::DeleteConflict { key: key.clone() });
        }
        guard.records.remove(key);
        Ok(true)
    }
}
