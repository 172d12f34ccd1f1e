use axum::{
    Json, Router,
    routing::{get, post},
};
use serde_json::{Value, json};
use tower_http::trace::TraceLayer;

use crate::modules::work_orders::use_cases::create_work_order::inbound::http as create_http;
use crate::modules::work_orders::use_cases::delete_work_order::inbound::http as delete_http;
use crate::modules::work_orders::use_cases::query_work_orders::inbound::http as query_http;
use crate::modules::work_orders::use_cases::update_work_order::inbound::http as update_http;
use crate::shell::state::AppState;

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/WorkOrder", get(query_http::list))
        .route("/WorkOrder/Count", get(query_http::count))
        .route("/WorkOrder/Create", post(create_http::handle))
        .route("/WorkOrder/Update", post(update_http::handle))
        .route("/WorkOrder/Delete", post(delete_http::handle))
        .route("/WorkOrder/{id}", get(query_http::get_by_id))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn health() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}
