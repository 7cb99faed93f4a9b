//! API Integration Tests

use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use http_body_util::BodyExt;
use serde_json::{json, Value};
use tower::util::ServiceExt;

use coop_backoffice::api::{build_router, AppState};

mod common;

async fn setup() -> (Router, common::Fixture) {
    let pool = common::setup_test_db().await;
    let (managers, _broker) = common::managers(&pool);
    let fx = common::create_fixture(&managers).await;
    (build_router(AppState::new(pool, managers)), fx)
}

fn request(method: &str, uri: &str, fx: &common::Fixture, body: Option<Value>) -> Request<Body> {
    let builder = Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .header("X-User-Id", fx.user_id.to_string())
        .header("X-Organization-Id", fx.organization_id.to_string())
        .header("X-Branch-Id", fx.branch_id.to_string());
    let body = body.map(|b| Body::from(b.to_string())).unwrap_or_else(Body::empty);
    builder.body(body).unwrap()
}

async fn json_body(response: axum::response::Response) -> Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn test_health() {
    let (app, _fx) = setup().await;
    let req = Request::builder().uri("/health").body(Body::empty()).unwrap();
    let response = app.oneshot(req).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert!(response.headers().contains_key("x-request-id"));
}

#[tokio::test]
async fn test_bank_crud_e2e() {
    let (app, fx) = setup().await;

    // 1. Create
    let req = request(
        "POST",
        "/api/v1/banks",
        &fx,
        Some(json!({"name": "Metrobank", "description": "Universal bank"})),
    );
    let response = app.clone().oneshot(req).await.unwrap();
    assert_eq!(response.status(), StatusCode::CREATED, "Bank creation failed");
    let created = json_body(response).await;
    let id = created["id"].as_str().unwrap().to_string();
    assert_eq!(created["branch_id"], fx.branch_id.to_string());
    assert_eq!(created["created_by_id"], fx.user_id.to_string());

    // 2. Update
    let req = request(
        "PUT",
        &format!("/api/v1/banks/{}", id),
        &fx,
        Some(json!({"name": "Metropolitan Bank"})),
    );
    let response = app.clone().oneshot(req).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(json_body(response).await["name"], "Metropolitan Bank");

    // 3. List
    let req = request("GET", "/api/v1/banks", &fx, None);
    let response = app.clone().oneshot(req).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let listed = json_body(response).await;
    assert!(listed.as_array().unwrap().iter().any(|b| b["id"] == id.as_str()));

    // 4. Delete, then the record is gone
    let req = request("DELETE", &format!("/api/v1/banks/{}", id), &fx, None);
    let response = app.clone().oneshot(req).await.unwrap();
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let req = request("GET", &format!("/api/v1/banks/{}", id), &fx, None);
    let response = app.clone().oneshot(req).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    // 5. Every write left a footstep in the branch
    let req = request("GET", "/api/v1/footsteps", &fx, None);
    let response = app.clone().oneshot(req).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let steps = json_body(response).await;
    assert_eq!(steps.as_array().unwrap().len(), 3);
}

#[tokio::test]
async fn test_context_headers_are_enforced() {
    let (app, fx) = setup().await;

    // Missing branch
    let req = Request::builder()
        .uri("/api/v1/banks")
        .header("X-Organization-Id", fx.organization_id.to_string())
        .body(Body::empty())
        .unwrap();
    let response = app.clone().oneshot(req).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(json_body(response).await["error_code"], "missing_context");

    // Malformed UUID
    let req = Request::builder()
        .uri("/api/v1/banks")
        .header("X-Branch-Id", "not-a-uuid")
        .body(Body::empty())
        .unwrap();
    let response = app.clone().oneshot(req).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(json_body(response).await["error_code"], "invalid_header");
}

#[tokio::test]
async fn test_other_branch_sees_not_found() {
    let (app, fx) = setup().await;
    let pool = common::setup_test_db().await;
    let (managers, _broker) = common::managers(&pool);
    let other = common::create_fixture(&managers).await;

    let req = request("POST", "/api/v1/banks", &fx, Some(json!({"name": "PNB"})));
    let response = app.clone().oneshot(req).await.unwrap();
    let id = json_body(response).await["id"].as_str().unwrap().to_string();

    let req = request("GET", &format!("/api/v1/banks/{}", id), &other, None);
    let response = app.clone().oneshot(req).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(json_body(response).await["error_code"], "not_found");
}

#[tokio::test]
async fn test_cash_check_voucher_lifecycle() {
    let (app, fx) = setup().await;

    let req = request(
        "POST",
        "/api/v1/cash-check-vouchers",
        &fx,
        Some(json!({
            "pay_to": "Juan dela Cruz",
            "total_debit": "2500.00",
            "total_credit": "2500.00"
        })),
    );
    let response = app.clone().oneshot(req).await.unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);
    let voucher = json_body(response).await;
    let id = voucher["id"].as_str().unwrap().to_string();
    assert_eq!(voucher["status"], "draft");

    // Approving a draft skips printing
    let req = request("POST", &format!("/api/v1/cash-check-vouchers/{}/approve", id), &fx, None);
    let response = app.clone().oneshot(req).await.unwrap();
    assert_eq!(response.status(), StatusCode::CONFLICT);
    assert_eq!(json_body(response).await["error_code"], "invalid_transition");

    for (step, status) in [("print", "printed"), ("approve", "approved"), ("release", "released")] {
        let req = request(
            "POST",
            &format!("/api/v1/cash-check-vouchers/{}/{}", id, step),
            &fx,
            None,
        );
        let response = app.clone().oneshot(req).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK, "{} failed", step);
        assert_eq!(json_body(response).await["status"], status);
    }

    let req = request("GET", "/api/v1/cash-check-vouchers?status=released", &fx, None);
    let response = app.clone().oneshot(req).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(json_body(response).await.as_array().unwrap().len(), 1);

    let req = request("GET", "/api/v1/cash-check-vouchers/released-today", &fx, None);
    let response = app.clone().oneshot(req).await.unwrap();
    assert_eq!(json_body(response).await.as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn test_cash_check_voucher_is_frozen_once_approved() {
    let (app, fx) = setup().await;

    let req = request(
        "POST",
        "/api/v1/cash-check-vouchers",
        &fx,
        Some(json!({"pay_to": "Ana Reyes", "total_debit": "800.00", "total_credit": "800.00"})),
    );
    let response = app.clone().oneshot(req).await.unwrap();
    let id = json_body(response).await["id"].as_str().unwrap().to_string();
    let uri = format!("/api/v1/cash-check-vouchers/{}", id);

    // Printed vouchers may still be corrected
    let req = request("POST", &format!("{}/print", uri), &fx, None);
    app.clone().oneshot(req).await.unwrap();
    let edit = json!({"pay_to": "Ana M. Reyes", "total_debit": "800.00", "total_credit": "800.00"});
    let req = request("PUT", &uri, &fx, Some(edit.clone()));
    let response = app.clone().oneshot(req).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(json_body(response).await["pay_to"], "Ana M. Reyes");

    let req = request("POST", &format!("{}/approve", uri), &fx, None);
    let response = app.clone().oneshot(req).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let req = request("PUT", &uri, &fx, Some(json!({"pay_to": "Someone Else"})));
    let response = app.clone().oneshot(req).await.unwrap();
    assert_eq!(response.status(), StatusCode::CONFLICT);
    assert_eq!(json_body(response).await["error_code"], "record_locked");

    let req = request("GET", &uri, &fx, None);
    let response = app.clone().oneshot(req).await.unwrap();
    assert_eq!(json_body(response).await["pay_to"], "Ana M. Reyes");
}

#[tokio::test]
async fn test_unbalanced_journal_voucher_cannot_post() {
    let (app, fx) = setup().await;

    let req = request("GET", "/api/v1/currencies/default", &fx, None);
    let response = app.clone().oneshot(req).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let currency = json_body(response).await;
    assert_eq!(currency["currency_code"], "PHP");

    let req = request(
        "POST",
        "/api/v1/journal-vouchers",
        &fx,
        Some(json!({
            "currency_id": currency["id"],
            "name": "Correction",
            "total_debit": "100.00",
            "total_credit": "90.00"
        })),
    );
    let response = app.clone().oneshot(req).await.unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);
    let id = json_body(response).await["id"].as_str().unwrap().to_string();

    let req = request("POST", &format!("/api/v1/journal-vouchers/{}/post", id), &fx, None);
    let response = app.clone().oneshot(req).await.unwrap();
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(json_body(response).await["error_code"], "unbalanced_entries");
}

#[tokio::test]
async fn test_negative_amount_is_rejected() {
    let (app, fx) = setup().await;

    let req = request(
        "POST",
        "/api/v1/cash-check-vouchers",
        &fx,
        Some(json!({"pay_to": "Nobody", "total_debit": "-1.00"})),
    );
    let response = app.clone().oneshot(req).await.unwrap();
    assert!(response.status().is_client_error());
}

#[tokio::test]
async fn test_timesheet_toggle_api() {
    let (app, fx) = setup().await;

    let req = request("POST", "/api/v1/timesheets/toggle", &fx, None);
    let response = app.clone().oneshot(req).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert!(json_body(response).await["time_out"].is_null());

    let req = request("GET", "/api/v1/timesheets/current", &fx, None);
    let response = app.clone().oneshot(req).await.unwrap();
    assert!(!json_body(response).await.is_null());

    let req = request(
        "POST",
        "/api/v1/timesheets/toggle",
        &fx,
        Some(json!({"description": "done"})),
    );
    let response = app.clone().oneshot(req).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert!(!json_body(response).await["time_out"].is_null());

    let req = request("GET", "/api/v1/timesheets/current", &fx, None);
    let response = app.clone().oneshot(req).await.unwrap();
    assert!(json_body(response).await.is_null());
}

#[tokio::test]
async fn test_transaction_batch_api() {
    let (app, fx) = setup().await;

    let body = json!({"batch_name": "Afternoon", "beginning_balance": "500.00"});
    let req = request("POST", "/api/v1/transaction-batches", &fx, Some(body.clone()));
    let response = app.clone().oneshot(req).await.unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);
    let id = json_body(response).await["id"].as_str().unwrap().to_string();

    let req = request("POST", "/api/v1/transaction-batches", &fx, Some(body));
    let response = app.clone().oneshot(req).await.unwrap();
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);

    let req = request("POST", &format!("/api/v1/transaction-batches/{}/close", id), &fx, None);
    let response = app.clone().oneshot(req).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let req = request("POST", &format!("/api/v1/transaction-batches/{}/close", id), &fx, None);
    let response = app.clone().oneshot(req).await.unwrap();
    assert_eq!(response.status(), StatusCode::CONFLICT);
    assert_eq!(json_body(response).await["error_code"], "batch_closed");
}

#[tokio::test]
async fn test_seed_organization_api() {
    let (app, fx) = setup().await;

    let req = request("POST", "/api/v1/seed/organization", &fx, None);
    let response = app.clone().oneshot(req).await.unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);
    let summary = json_body(response).await;
    let banks = summary["banks"].as_u64().unwrap();
    assert!(banks > 0);

    let req = request("GET", "/api/v1/banks", &fx, None);
    let response = app.clone().oneshot(req).await.unwrap();
    assert_eq!(json_body(response).await.as_array().unwrap().len() as u64, banks);
}
