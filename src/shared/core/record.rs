// Record identity and capability traits shared by every stored entity.
//
// Purpose
// - Give each stored entity exactly one identity kind (integer or string).
// - Describe what the record store needs from an entity as traits, not base types.
//
// Boundaries
// - No input or output here. Transport shapes live in the inbound adapters.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::shared::core::validation::ValidationErrors;

/// Selects which identity kind a key represents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum KeyColumn {
    #[default]
    #[serde(rename = "Integer64ID")]
    Integer64Id,
    #[serde(rename = "StringID")]
    StringId,
}

impl KeyColumn {
    pub fn field_name(&self) -> &'static str {
        match self {
            KeyColumn::Integer64Id => "Integer64ID",
            KeyColumn::StringId => "StringID",
        }
    }
}

impl fmt::Display for KeyColumn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.field_name())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown key column: {0}")]
pub struct UnknownKeyColumn(pub String);

impl FromStr for KeyColumn {
    type Err = UnknownKeyColumn;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Integer64ID" => Ok(KeyColumn::Integer64Id),
            "StringID" => Ok(KeyColumn::StringId),
            other => Err(UnknownKeyColumn(other.to_string())),
        }
    }
}

/// The identity of a stored record. Integer keys never match string keys.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum RecordKey {
    Integer64(i64),
    String(String),
}

impl RecordKey {
    pub fn column(&self) -> KeyColumn {
        match self {
            RecordKey::Integer64(_) => KeyColumn::Integer64Id,
            RecordKey::String(_) => KeyColumn::StringId,
        }
    }

    pub fn as_integer(&self) -> Option<i64> {
        match self {
            RecordKey::Integer64(id) => Some(*id),
            RecordKey::String(_) => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            RecordKey::Integer64(_) => None,
            RecordKey::String(id) => Some(id),
        }
    }
}

impl fmt::Display for RecordKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecordKey::Integer64(id) => write!(f, "{id}"),
            RecordKey::String(id) => f.write_str(id),
        }
    }
}

/// Audit stamps carried by records that users edit.
///
/// `created_on` is set once by the store. `last_edited_on` stays `None` until the
/// first successful update and is the marker compared for optimistic concurrency.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EditStamps {
    pub created_on: DateTime<Utc>,
    pub last_edited_on: Option<DateTime<Utc>>,
}

impl Default for EditStamps {
    fn default() -> Self {
        Self {
            created_on: DateTime::<Utc>::UNIX_EPOCH,
            last_edited_on: None,
        }
    }
}

impl EditStamps {
    pub fn created(now: DateTime<Utc>) -> Self {
        Self {
            created_on: now,
            last_edited_on: None,
        }
    }

    /// Next `last_edited_on` value. Never equal to or earlier than the previous one,
    /// even when the clock has not moved between two updates.
    pub fn next_edit(&self, now: DateTime<Utc>) -> DateTime<Utc> {
        match self.last_edited_on {
            Some(previous) if now <= previous => previous + Duration::microseconds(1),
            _ => now,
        }
    }
}

/// An entity the record store can hold.
pub trait Record: Clone + Send + Sync + 'static {
    /// Type name used in log fields and user facing messages.
    const TYPE_NAME: &'static str;

    fn key(&self) -> Option<&RecordKey>;
    fn set_key(&mut self, key: RecordKey);
    fn name(&self) -> &str;

    /// Domain rules checked by the store on create and update.
    fn validate(&self) -> ValidationErrors {
        ValidationErrors::default()
    }
}

/// Records with audit stamps; required by stores that detect stale writes.
pub trait Editable: Record {
    fn stamps(&self) -> &EditStamps;
    fn stamps_mut(&mut self) -> &mut EditStamps;
}
