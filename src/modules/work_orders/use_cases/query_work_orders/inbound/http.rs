use axum::{
    extract::{Path, State},
    response::IntoResponse,
};

use crate::modules::work_orders::adapters::inbound::payload::WorkOrderPayload;
use crate::shared::core::record::RecordKey;
use crate::shell::state::AppState;

pub async fn list(State(state): State<AppState>) -> impl IntoResponse {
    state.work_orders.list::<WorkOrderPayload>().await
}

pub async fn count(State(state): State<AppState>) -> impl IntoResponse {
    state.work_orders.count().await
}

pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> impl IntoResponse {
    state.work_orders.get::<WorkOrderPayload>(path_key(&id)).await
}

// Numeric ids address Integer64ID keys, anything else a StringID key.
fn path_key(id: &str) -> RecordKey {
    match id.parse::<i64>() {
        Ok(id) => RecordKey::Integer64(id),
        Err(_) => RecordKey::String(id.to_string()),
    }
}
