// Request envelopes for translator and HTTP tests.

use serde_json::Value;

use crate::modules::work_orders::adapters::inbound::payload::WorkOrderPayload;
use crate::shared::core::record::RecordKey;
use crate::shared::inbound::envelope::RequestEnvelope;

pub fn create_envelope(value: Value) -> RequestEnvelope<WorkOrderPayload> {
    RequestEnvelope::with_value(serde_json::from_value(value).unwrap())
}

pub fn keyed_envelope(
    key: &RecordKey,
    value: Option<WorkOrderPayload>,
) -> RequestEnvelope<WorkOrderPayload> {
    RequestEnvelope::with_key(key, value)
}

pub fn delete_envelope(key: &RecordKey, value: Option<Value>) -> RequestEnvelope<Value> {
    RequestEnvelope::with_key(key, value)
}
