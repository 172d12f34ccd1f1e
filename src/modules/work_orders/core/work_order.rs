// WorkOrder is the record managed by this service.
//
// Purpose
// - Describe a maintenance job: what to do, by when, how urgent, and where it stands.
//
// Responsibilities
// - Embed its identity and audit stamps, and expose them through Record and Editable.
// - Own the domain rules the record store checks on create and update.
//
// Boundaries
// - Framework free. The wire shape lives in adapters::inbound::payload.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::shared::core::record::{EditStamps, Editable, Record, RecordKey};
use crate::shared::core::validation::ValidationErrors;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum WorkOrderPriority {
    /// Addressed after higher priorities are taken care of.
    #[default]
    Low,
    Normal,
    /// Needs to be addressed immediately.
    High,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum WorkOrderServiceType {
    #[default]
    Inspection,
    Routine,
    /// Work done in response to an equipment failure.
    Reactive,
    /// Described by `other_type_of_service`.
    Other,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum WorkOrderStatus {
    #[default]
    Open,
    InProgress,
    /// Work finished, waiting for a final signoff.
    Resolved,
    Closed,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct WorkOrder {
    pub key: Option<RecordKey>,
    pub stamps: EditStamps,
    pub name: String,
    pub description: Option<String>,
    pub due_by: Option<NaiveDate>,
    pub priority: WorkOrderPriority,
    pub service_type: WorkOrderServiceType,
    pub other_type_of_service: Option<String>,
    pub problem: Option<String>,
    pub resolution: Option<String>,
    pub status: WorkOrderStatus,
}

fn is_blank(value: Option<&str>) -> bool {
    value.is_none_or(|v| v.trim().is_empty())
}

impl Record for WorkOrder {
    const TYPE_NAME: &'static str = "WorkOrder";

    fn key(&self) -> Option<&RecordKey> {
        self.key.as_ref()
    }

    fn set_key(&mut self, key: RecordKey) {
        self.key = Some(key);
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn validate(&self) -> ValidationErrors {
        let mut errors = ValidationErrors::new();
        if is_blank(Some(&self.name)) {
            errors.merge(ValidationErrors::required("Name"));
        }
        if self.service_type == WorkOrderServiceType::Other
            && is_blank(self.other_type_of_service.as_deref())
        {
            errors.add(
                "OtherTypeOfService",
                "The OtherTypeOfService field is required when the ServiceType is Other.",
            );
        }
        errors
    }
}

impl Editable for WorkOrder {
    fn stamps(&self) -> &EditStamps {
        &self.stamps
    }

    fn stamps_mut(&mut self) -> &mut EditStamps {
        &mut self.stamps
    }
}
