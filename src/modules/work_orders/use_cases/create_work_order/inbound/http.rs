use axum::{
    Json, extract::State, extract::rejection::JsonRejection, response::IntoResponse,
};

use crate::modules::work_orders::adapters::inbound::payload::WorkOrderPayload;
use crate::shared::inbound::envelope::RequestEnvelope;
use crate::shared::inbound::translator::CrudOperation;
use crate::shell::state::AppState;

pub async fn handle(
    State(state): State<AppState>,
    body: Result<Json<RequestEnvelope<WorkOrderPayload>>, JsonRejection>,
) -> impl IntoResponse {
    match body {
        Ok(Json(envelope)) => state.work_orders.create(envelope).await,
        Err(rejection) => state
            .work_orders
            .malformed(CrudOperation::Create, &rejection.body_text()),
    }
}
