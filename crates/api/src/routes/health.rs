use axum::extract::State;
use axum::{routing::get, Json, Router};
use serde::Serialize;

use crate::state::AppState;

/// Health check response payload.
#[derive(Serialize)]
pub struct HealthResponse {
    /// Overall service status.
    pub status: &'static str,
    /// Crate version from Cargo.toml.
    pub version: &'static str,
    /// Number of campuses currently held in the store.
    pub campuses: usize,
    /// Number of classrooms currently held in the store.
    pub classrooms: usize,
}

/// GET /health -- returns service status and store size.
async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    let store = state.pool.read().await;

    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
        campuses: store.campus_len(),
        classrooms: store.classroom_len(),
    })
}

/// Mount health check routes (intended for root-level, NOT under `/api/v1`).
pub fn router() -> Router<AppState> {
    Router::new().route("/health", get(health_check))
}
