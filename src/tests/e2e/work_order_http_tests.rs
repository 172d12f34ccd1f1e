// End to end router tests over an in memory store.
//
// Requests go through shell::http::router, so routing, extraction, translation
// and the store are exercised together.

use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode},
};
use http_body_util::BodyExt;
use serde_json::{Value, json};
use std::sync::Arc;
use tower::ServiceExt;

use crate::modules::work_orders::core::example_data::WorkOrderExampleBuilder;
use crate::modules::work_orders::core::work_order::WorkOrder;
use crate::shared::inbound::translator::RecordTranslator;
use crate::shared::infrastructure::record_store::StoreOptions;
use crate::shared::infrastructure::record_store::in_memory::InMemoryRecordStore;
use crate::shell::http::router;
use crate::shell::state::AppState;
use crate::tests::fixtures::work_order::WORK_ORDER_JSON;

fn app_with(store: InMemoryRecordStore<WorkOrder>) -> Router {
    router(AppState {
        work_orders: Arc::new(RecordTranslator::<WorkOrder>::new(Arc::new(store))),
    })
}

fn app() -> Router {
    app_with(InMemoryRecordStore::new())
}

async fn send(app: &Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, json)
}

async fn post(app: &Router, uri: &str, body: Value) -> (StatusCode, Value) {
    let request = Request::post(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    send(app, request).await
}

async fn get(app: &Router, uri: &str) -> (StatusCode, Value) {
    send(app, Request::get(uri).body(Body::empty()).unwrap()).await
}

fn work_order(name: &str) -> Value {
    json!({ "Name": name, "Priority": "Low", "ServiceType": "Inspection", "Status": "Open" })
}

#[tokio::test]
async fn it_should_create_reject_a_duplicate_and_detect_a_stale_update() {
    let app = app();

    let (status, created) = post(&app, "/WorkOrder/Create", json!({ "value": work_order("A") })).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(created["Integer64ID"], 1);

    let (status, duplicate) =
        post(&app, "/WorkOrder/Create", json!({ "value": work_order("A") })).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        duplicate["errors"]["Name"],
        json!(["The A name already exists in the data store."])
    );

    let mut edit = created.clone();
    edit["Priority"] = json!("High");
    let (status, updated) = post(
        &app,
        "/WorkOrder/Update",
        json!({ "key": 1, "keyColumn": "Integer64ID", "value": edit }),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["Priority"], "High");
    assert_eq!(updated["CreatedOn"], created["CreatedOn"]);

    let mut stale = created.clone();
    stale["Status"] = json!("Closed");
    let (status, problem) = post(
        &app,
        "/WorkOrder/Update",
        json!({ "key": 1, "keyColumn": "Integer64ID", "value": stale }),
    )
    .await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(problem["status"], 409);
    assert_eq!(problem["title"], "WorkOrder Update Error - Data Conflict");

    let (_, stored) = get(&app, "/WorkOrder/1").await;
    assert_eq!(stored["Status"], "Open");
    assert_eq!(stored["Priority"], "High");
}

#[tokio::test]
async fn it_should_accept_the_fixture_payload() {
    let app = app();
    let value: Value = serde_json::from_str(WORK_ORDER_JSON).unwrap();

    let (status, created) = post(&app, "/WorkOrder/Create", json!({ "value": value })).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(created["Name"], value["Name"]);
    assert_eq!(created["ServiceType"], value["ServiceType"]);
}

#[tokio::test]
async fn it_should_return_404_when_updating_without_a_key() {
    let (status, problem) = post(
        &app(),
        "/WorkOrder/Update",
        json!({ "value": work_order("A") }),
    )
    .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(
        problem["detail"],
        "The record could not be found because a key was not provided."
    );
}

#[tokio::test]
async fn it_should_return_404_when_updating_a_deleted_work_order() {
    let app = app();
    let (_, created) = post(&app, "/WorkOrder/Create", json!({ "value": work_order("A") })).await;
    let (status, _) = post(
        &app,
        "/WorkOrder/Delete",
        json!({ "key": 1, "keyColumn": "Integer64ID" }),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let (status, problem) = post(
        &app,
        "/WorkOrder/Update",
        json!({ "key": 1, "keyColumn": "Integer64ID", "value": created }),
    )
    .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(problem["title"], "WorkOrder Update Error - Not Found");
}

#[tokio::test]
async fn it_should_echo_the_envelope_on_delete_and_stay_idempotent() {
    let app = app();
    post(&app, "/WorkOrder/Create", json!({ "value": work_order("A") })).await;
    let envelope = json!({ "key": "1", "keyColumn": "Integer64ID" });

    let (first, echoed) = post(&app, "/WorkOrder/Delete", envelope.clone()).await;
    let (second, _) = post(&app, "/WorkOrder/Delete", envelope.clone()).await;

    assert_eq!(first, StatusCode::OK);
    assert_eq!(second, StatusCode::OK);
    assert_eq!(echoed["key"], envelope["key"]);
    assert_eq!(echoed["keyColumn"], "Integer64ID");
    let (_, count) = get(&app, "/WorkOrder/Count").await;
    assert_eq!(count, json!({ "count": 0 }));
}

#[tokio::test]
async fn it_should_return_400_for_an_unknown_key_column() {
    let (status, problem) = post(
        &app(),
        "/WorkOrder/Delete",
        json!({ "key": 1, "keyColumn": "Id" }),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        problem["errors"]["keyColumn"],
        json!(["The keyColumn field must be Integer64ID or StringID."])
    );
}

#[tokio::test]
async fn it_should_return_400_for_a_blank_name() {
    let (status, problem) =
        post(&app(), "/WorkOrder/Create", json!({ "value": work_order("") })).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(problem["title"], "One or more validation errors occurred.");
    assert_eq!(
        problem["errors"]["Value.Name"],
        json!(["The Name field is required."])
    );
}

#[tokio::test]
async fn it_should_assign_string_ids_when_configured() {
    let app = app_with(InMemoryRecordStore::with_options(StoreOptions {
        key_column: crate::shared::core::record::KeyColumn::StringId,
        ..StoreOptions::default()
    }));

    let (status, created) = post(&app, "/WorkOrder/Create", json!({ "value": work_order("A") })).await;
    assert_eq!(status, StatusCode::OK);
    let id = created["StringID"].as_str().unwrap().to_string();
    assert_eq!(created["Integer64ID"], Value::Null);

    let (status, fetched) = get(&app, &format!("/WorkOrder/{id}")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(fetched["Name"], "A");

    let (status, _) = post(
        &app,
        "/WorkOrder/Delete",
        json!({ "key": id, "keyColumn": "StringID" }),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    let (_, count) = get(&app, "/WorkOrder/Count").await;
    assert_eq!(count["count"], 0);
}

#[tokio::test]
async fn it_should_serve_seeded_example_data() {
    let store = InMemoryRecordStore::<WorkOrder>::new();
    WorkOrderExampleBuilder::new(chrono::Utc::now().date_naive())
        .build(&store)
        .await
        .unwrap();
    let app = app_with(store);

    let (status, list) = get(&app, "/WorkOrder").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(list.as_array().map(Vec::len), Some(11));
}

#[tokio::test]
async fn it_should_report_health() {
    let (status, json) = get(&app(), "/health").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json, json!({ "status": "ok" }));
}
