// Wire shape of a work order inside a request or response envelope.
//
// Purpose
// - Keep the PascalCase transport contract out of the domain type.
//
// Responsibilities
// - Shape validation (required fields, one identity kind) when converting to a WorkOrder.
// - Carry the server assigned identity and stamps back to the caller.

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

use crate::modules::work_orders::core::work_order::{
    WorkOrder, WorkOrderPriority, WorkOrderServiceType, WorkOrderStatus,
};
use crate::shared::core::record::{EditStamps, RecordKey};
use crate::shared::core::validation::ValidationErrors;
use crate::shared::inbound::translator::RecordPayload;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct WorkOrderPayload {
    #[serde(rename = "Integer64ID")]
    pub integer64_id: Option<i64>,
    #[serde(rename = "StringID")]
    pub string_id: Option<String>,
    pub created_on: Option<DateTime<Utc>>,
    pub last_edited_on: Option<DateTime<Utc>>,
    pub name: Option<String>,
    pub description: Option<String>,
    #[serde(deserialize_with = "date_or_date_time")]
    pub due_by: Option<NaiveDate>,
    pub priority: WorkOrderPriority,
    pub service_type: WorkOrderServiceType,
    pub other_type_of_service: Option<String>,
    pub problem: Option<String>,
    pub resolution: Option<String>,
    pub status: WorkOrderStatus,
}

// Widget clients post due dates as midnight date-times.
fn date_or_date_time<'de, D>(deserializer: D) -> Result<Option<NaiveDate>, D::Error>
where
    D: Deserializer<'de>,
{
    let Some(raw) = Option::<String>::deserialize(deserializer)? else {
        return Ok(None);
    };
    if raw.trim().is_empty() {
        return Ok(None);
    }
    if let Ok(date) = raw.parse::<NaiveDate>() {
        return Ok(Some(date));
    }
    if let Ok(date_time) = raw.parse::<NaiveDateTime>() {
        return Ok(Some(date_time.date()));
    }
    DateTime::parse_from_rfc3339(&raw)
        .map(|date_time| Some(date_time.date_naive()))
        .map_err(|_| serde::de::Error::custom(format!("invalid date: {raw}")))
}

impl WorkOrderPayload {
    // Client defaults (0 and "") mean "no identity yet".
    fn key(&self) -> Result<Option<RecordKey>, ValidationErrors> {
        let integer = self.integer64_id.filter(|id| *id != 0);
        let string = self.string_id.clone().filter(|id| !id.is_empty());
        match (integer, string) {
            (Some(_), Some(_)) => Err(ValidationErrors::single(
                "Integer64ID",
                "Only one of Integer64ID or StringID can identify a record.",
            )),
            (Some(id), None) => Ok(Some(RecordKey::Integer64(id))),
            (None, Some(id)) => Ok(Some(RecordKey::String(id))),
            (None, None) => Ok(None),
        }
    }
}

impl RecordPayload<WorkOrder> for WorkOrderPayload {
    fn into_record(self) -> Result<WorkOrder, ValidationErrors> {
        let mut errors = ValidationErrors::new();
        let key = self.key().unwrap_or_else(|identity| {
            errors.merge(identity);
            None
        });
        let name = self.name.unwrap_or_default();
        if name.trim().is_empty() {
            errors.merge(ValidationErrors::required("Name"));
        }
        errors.into_result()?;

        Ok(WorkOrder {
            key,
            stamps: EditStamps {
                created_on: self.created_on.unwrap_or(DateTime::<Utc>::UNIX_EPOCH),
                last_edited_on: self.last_edited_on,
            },
            name,
            description: self.description,
            due_by: self.due_by,
            priority: self.priority,
            service_type: self.service_type,
            other_type_of_service: self.other_type_of_service,
            problem: self.problem,
            resolution: self.resolution,
            status: self.status,
        })
    }

    fn from_record(record: WorkOrder) -> Self {
        let (integer64_id, string_id) = match record.key {
            Some(RecordKey::Integer64(id)) => (Some(id), None),
            Some(RecordKey::String(id)) => (None, Some(id)),
            None => (None, None),
        };
        Self {
            integer64_id,
            string_id,
            created_on: Some(record.stamps.created_on),
            last_edited_on: record.stamps.last_edited_on,
            name: Some(record.name),
            description: record.description,
            due_by: record.due_by,
            priority: record.priority,
            service_type: record.service_type,
            other_type_of_service: record.other_type_of_service,
            problem: record.problem,
            resolution: record.resolution,
            status: record.status,
        }
    }
}
