use axum::{
    Json, extract::State, extract::rejection::JsonRejection, response::IntoResponse,
};
use serde_json::Value;

use crate::shared::inbound::envelope::RequestEnvelope;
use crate::shared::inbound::translator::CrudOperation;
use crate::shell::state::AppState;

// Delete only reads the key, so `value` stays untyped.
pub async fn handle(
    State(state): State<AppState>,
    body: Result<Json<RequestEnvelope<Value>>, JsonRejection>,
) -> impl IntoResponse {
    match body {
        Ok(Json(envelope)) => state.work_orders.delete(envelope).await,
        Err(rejection) => state
            .work_orders
            .malformed(CrudOperation::Delete, &rejection.body_text()),
    }
}
