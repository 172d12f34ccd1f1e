// Request envelope for create, update and delete calls.
//
// Wire shape: `{ "key": ..., "keyColumn": "Integer64ID" | "StringID", "value": ... }`.
// Field names are fixed by the grid widgets that post to this service.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::shared::core::record::{KeyColumn, RecordKey};
use crate::shared::core::validation::ValidationErrors;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RequestEnvelope<P> {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub key: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub key_column: Option<String>,
    #[serde(default)]
    pub value: Option<P>,
}

impl<P> RequestEnvelope<P> {
    pub fn with_value(value: P) -> Self {
        Self {
            key: None,
            key_column: None,
            value: Some(value),
        }
    }

    pub fn with_key(key: &RecordKey, value: Option<P>) -> Self {
        let raw = match key {
            RecordKey::Integer64(id) => Value::from(*id),
            RecordKey::String(id) => Value::from(id.as_str()),
        };
        Self {
            key: Some(raw),
            key_column: Some(key.column().to_string()),
            value,
        }
    }

    /// `Ok(None)` when no key was provided. The caller decides what a missing key means.
    pub fn resolve_key(&self) -> Result<Option<RecordKey>, ValidationErrors> {
        let Some(raw) = self.key.as_ref() else {
            return Ok(None);
        };
        let Some(column) = self.key_column.as_deref() else {
            return Err(ValidationErrors::required("keyColumn"));
        };
        let column: KeyColumn = column.parse().map_err(|_| {
            ValidationErrors::single(
                "keyColumn",
                "The keyColumn field must be Integer64ID or StringID.",
            )
        })?;
        match column {
            KeyColumn::Integer64Id => integer_key(raw).map(|id| Some(RecordKey::Integer64(id))),
            KeyColumn::StringId => match raw {
                Value::String(id) => Ok(Some(RecordKey::String(id.clone()))),
                _ => Err(ValidationErrors::single(
                    "key",
                    "The key must be a string when keyColumn is StringID.",
                )),
            },
        }
    }
}

fn integer_key(raw: &Value) -> Result<i64, ValidationErrors> {
    let parsed = match raw {
        Value::Number(number) => number.as_i64(),
        Value::String(text) => text.trim().parse::<i64>().ok(),
        _ => None,
    };
    parsed.ok_or_else(|| {
        ValidationErrors::single(
            "key",
            "The key must be a 64-bit integer when keyColumn is Integer64ID.",
        )
    })
}
