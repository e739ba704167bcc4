#![allow(dead_code)]

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Method, Request, Response};
use axum::Router;
use http_body_util::BodyExt;
use tower::ServiceExt;

use campus_api::config::ServerConfig;
use campus_api::router::build_app_router;
use campus_api::state::AppState;
use campus_db::{create_pool, DbPool, Store};

/// Build a test `ServerConfig` with safe defaults.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        seed_mock_data: false,
    }
}

/// Build the full application router around `pool`.
///
/// Uses the same builder as `main.rs`, so tests exercise the production
/// middleware stack. The returned router is cheap to clone and every clone
/// shares the same store.
pub fn build_test_app_with(pool: DbPool) -> Router {
    let config = test_config();
    let state = AppState {
        pool,
        config: Arc::new(config.clone()),
    };
    build_app_router(state, &config)
}

/// Router over an empty store.
pub fn build_test_app() -> Router {
    build_test_app_with(create_pool(Store::new()))
}

/// Router over a store loaded with the mock data.
pub fn build_seeded_app() -> Router {
    let mut store = Store::new();
    campus_db::seed::seed_mock_data(&mut store).unwrap();
    build_test_app_with(create_pool(store))
}

// ---------------------------------------------------------------------------
// Request helpers
// ---------------------------------------------------------------------------

pub async fn get(app: Router, uri: &str) -> Response<Body> {
    let request = Request::builder()
        .method(Method::GET)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    app.oneshot(request).await.unwrap()
}

pub async fn post_empty(app: Router, uri: &str) -> Response<Body> {
    let request = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    app.oneshot(request).await.unwrap()
}

pub async fn post_json(app: Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    send_json(app, Method::POST, uri, body).await
}

pub async fn put_json(app: Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    send_json(app, Method::PUT, uri, body).await
}

pub async fn send_raw(
    app: Router,
    method: Method,
    uri: &str,
    body: &'static str,
) -> Response<Body> {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body))
        .unwrap();
    app.oneshot(request).await.unwrap()
}

async fn send_json(
    app: Router,
    method: Method,
    uri: &str,
    body: serde_json::Value,
) -> Response<Body> {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(serde_json::to_vec(&body).unwrap()))
        .unwrap();
    app.oneshot(request).await.unwrap()
}

/// Read the response body as JSON.
pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

// ---------------------------------------------------------------------------
// Fixtures
// ---------------------------------------------------------------------------

pub fn campus_body(name: &str) -> serde_json::Value {
    serde_json::json!({
        "name": name,
        "province": "Sichuan",
        "city": "Chengdu",
        "district": "Wuhou",
        "detail_address": "5 Renmin South Road",
    })
}

pub fn classroom_body(name: &str, campus_id: i64) -> serde_json::Value {
    serde_json::json!({
        "name": name,
        "campus_id": campus_id,
        "capacity": 45,
        "detail_address": "Building 2",
    })
}

/// Create a campus through the API and return its id.
pub async fn create_campus(app: &Router, name: &str) -> i64 {
    let response = post_json(app.clone(), "/api/v1/campuses", campus_body(name)).await;
    body_json(response).await["data"]["id"].as_i64().unwrap()
}

/// Create a classroom through the API and return its id.
pub async fn create_classroom(app: &Router, name: &str, campus_id: i64) -> i64 {
    let response = post_json(
        app.clone(),
        "/api/v1/classrooms",
        classroom_body(name, campus_id),
    )
    .await;
    body_json(response).await["data"]["id"].as_i64().unwrap()
}
