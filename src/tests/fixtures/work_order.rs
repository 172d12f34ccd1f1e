// Shared test fixture for WorkOrder records.
// Starts from the canonical payload in json/work_order.json so the builder
// and the HTTP tests agree on what a valid work order looks like.

use chrono::{DateTime, NaiveDate, Utc};

use crate::modules::work_orders::adapters::inbound::payload::WorkOrderPayload;
use crate::modules::work_orders::core::work_order::{
    WorkOrder, WorkOrderPriority, WorkOrderServiceType, WorkOrderStatus,
};
use crate::shared::core::record::RecordKey;
use crate::shared::inbound::translator::RecordPayload;

pub const WORK_ORDER_JSON: &str = include_str!("json/work_order.json");

pub struct WorkOrderBuilder {
    inner: WorkOrder,
}

impl Default for WorkOrderBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[allow(dead_code)]
impl WorkOrderBuilder {
    pub fn new() -> Self {
        let payload: WorkOrderPayload = serde_json::from_str(WORK_ORDER_JSON).unwrap();
        Self {
            inner: payload.into_record().unwrap(),
        }
    }

    pub fn key(mut self, v: RecordKey) -> Self {
        self.inner.key = Some(v);
        self
    }

    pub fn created_on(mut self, v: DateTime<Utc>) -> Self {
        self.inner.stamps.created_on = v;
        self
    }

    pub fn last_edited_on(mut self, v: Option<DateTime<Utc>>) -> Self {
        self.inner.stamps.last_edited_on = v;
        self
    }

    pub fn name(mut self, v: impl Into<String>) -> Self {
        self.inner.name = v.into();
        self
    }

    pub fn description(mut self, v: impl Into<String>) -> Self {
        self.inner.description = Some(v.into());
        self
    }

    pub fn due_by(mut self, v: Option<NaiveDate>) -> Self {
        self.inner.due_by = v;
        self
    }

    pub fn priority(mut self, v: WorkOrderPriority) -> Self {
        self.inner.priority = v;
        self
    }

    pub fn service_type(mut self, v: WorkOrderServiceType) -> Self {
        self.inner.service_type = v;
        self
    }

    pub fn other_type_of_service(mut self, v: Option<&str>) -> Self {
        self.inner.other_type_of_service = v.map(str::to_string);
        self
    }

    pub fn problem(mut self, v: impl Into<String>) -> Self {
        self.inner.problem = Some(v.into());
        self
    }

    pub fn resolution(mut self, v: impl Into<String>) -> Self {
        self.inner.resolution = Some(v.into());
        self
    }

    pub fn status(mut self, v: WorkOrderStatus) -> Self {
        self.inner.status = v;
        self
    }

    pub fn build(self) -> WorkOrder {
        self.inner
    }
}
