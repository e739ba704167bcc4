//! HTTP-level integration tests for the campus endpoints.
//!
//! Uses Axum's tower::ServiceExt to send requests directly to the router
//! without an actual TCP listener.

mod common;

use axum::http::{Method, StatusCode};
use common::{
    body_json, campus_body, create_campus, get, post_empty, post_json, put_json, send_raw,
};

// ---------------------------------------------------------------------------
// Create
// ---------------------------------------------------------------------------

#[tokio::test]
async fn create_campus_returns_201() {
    let app = common::build_test_app();
    let response = post_json(app, "/api/v1/campuses", campus_body("Wuhou Campus")).await;

    assert_eq!(response.status(), StatusCode::CREATED);
    let json = body_json(response).await;
    assert_eq!(json["data"]["name"], "Wuhou Campus");
    assert_eq!(json["data"]["status"], "active");
    assert_eq!(json["data"]["classroom_count"], 0);
    assert!(json["data"]["id"].is_number());
}

#[tokio::test]
async fn create_campus_without_name_is_rejected() {
    let app = common::build_test_app();
    let mut body = campus_body("");
    body["name"] = serde_json::json!("   ");

    let response = post_json(app.clone(), "/api/v1/campuses", body).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["code"], "VALIDATION_ERROR");
    assert_eq!(json["error"], "Campus name is required");

    let list = body_json(get(app, "/api/v1/campuses").await).await;
    assert_eq!(list["data"].as_array().unwrap().len(), 0);
}

#[tokio::test]
async fn create_campus_without_address_is_rejected() {
    let app = common::build_test_app();
    let response = post_json(
        app,
        "/api/v1/campuses",
        serde_json::json!({"name": "No Address"}),
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["code"], "VALIDATION_ERROR");
}

#[tokio::test]
async fn create_campus_with_long_address_is_rejected() {
    let app = common::build_test_app();
    let mut body = campus_body("Long");
    body["detail_address"] = serde_json::json!("x".repeat(21));

    let response = post_json(app, "/api/v1/campuses", body).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(
        body_json(response).await["error"],
        "Detail address must be at most 20 characters"
    );
}

#[tokio::test]
async fn malformed_json_returns_bad_request_envelope() {
    let app = common::build_test_app();
    let response = send_raw(app, Method::POST, "/api/v1/campuses", "{not json").await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["code"], "BAD_REQUEST");
}

// ---------------------------------------------------------------------------
// Read / list
// ---------------------------------------------------------------------------

#[tokio::test]
async fn get_campus_by_id() {
    let app = common::build_test_app();
    let id = create_campus(&app, "Findable").await;

    let response = get(app, &format!("/api/v1/campuses/{id}")).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["data"]["name"], "Findable");
}

#[tokio::test]
async fn get_nonexistent_campus_returns_404() {
    let app = common::build_test_app();
    let response = get(app, "/api/v1/campuses/999").await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(body_json(response).await["code"], "NOT_FOUND");
}

#[tokio::test]
async fn list_campuses_filters_by_status() {
    let app = common::build_seeded_app();

    let all = body_json(get(app.clone(), "/api/v1/campuses").await).await;
    assert_eq!(all["data"].as_array().unwrap().len(), 3);

    let disabled = body_json(get(app, "/api/v1/campuses?status=disabled").await).await;
    let disabled = disabled["data"].as_array().unwrap();
    assert_eq!(disabled.len(), 1);
    assert_eq!(disabled[0]["name"], "Pudong Campus");
}

#[tokio::test]
async fn blank_status_param_lists_all_campuses() {
    let app = common::build_seeded_app();
    let response = get(app, "/api/v1/campuses?status=").await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["data"].as_array().unwrap().len(), 3);
}

#[tokio::test]
async fn list_campuses_rejects_unknown_status() {
    let app = common::build_test_app();
    let response = get(app, "/api/v1/campuses?status=archived").await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

// ---------------------------------------------------------------------------
// Update / status
// ---------------------------------------------------------------------------

#[tokio::test]
async fn update_campus() {
    let app = common::build_test_app();
    let id = create_campus(&app, "Original").await;

    let response = put_json(
        app,
        &format!("/api/v1/campuses/{id}"),
        campus_body("Renamed"),
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["data"]["name"], "Renamed");
}

#[tokio::test]
async fn edit_without_status_keeps_disabled_campus_disabled() {
    let app = common::build_test_app();
    let id = create_campus(&app, "Dormant").await;
    post_empty(app.clone(), &format!("/api/v1/campuses/{id}/toggle-status")).await;

    let response = put_json(
        app.clone(),
        &format!("/api/v1/campuses/{id}"),
        campus_body("Dormant Renamed"),
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["data"]["name"], "Dormant Renamed");
    assert_eq!(json["data"]["status"], "disabled");

    let stored = body_json(get(app, &format!("/api/v1/campuses/{id}")).await).await;
    assert_eq!(stored["data"]["status"], "disabled");
}

#[tokio::test]
async fn update_nonexistent_campus_returns_404() {
    let app = common::build_test_app();
    let response = put_json(app, "/api/v1/campuses/31", campus_body("Ghost")).await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn toggle_campus_status_flips_and_back() {
    let app = common::build_test_app();
    let id = create_campus(&app, "Toggle").await;
    let uri = format!("/api/v1/campuses/{id}/toggle-status");

    let first = body_json(post_empty(app.clone(), &uri).await).await;
    assert_eq!(first["data"]["status"], "disabled");

    let second = body_json(post_empty(app, &uri).await).await;
    assert_eq!(second["data"]["status"], "active");
}

#[tokio::test]
async fn set_campus_status() {
    let app = common::build_test_app();
    let id = create_campus(&app, "Explicit").await;

    let response = put_json(
        app,
        &format!("/api/v1/campuses/{id}/status"),
        serde_json::json!({"status": "disabled"}),
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["data"]["status"], "disabled");
}

#[tokio::test]
async fn toggle_nonexistent_campus_returns_404() {
    let app = common::build_test_app();
    let response = post_empty(app, "/api/v1/campuses/8/toggle-status").await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
