//! Route definitions for campuses.

use axum::routing::{get, post, put};
use axum::Router;

use crate::handlers::campus;
use crate::state::AppState;

/// Routes mounted at `/campuses`.
///
/// ```text
/// GET  /                     -> list
/// POST /                     -> create
/// GET  /{id}                 -> get_by_id
/// PUT  /{id}                 -> update
/// POST /{id}/toggle-status   -> toggle_status
/// PUT  /{id}/status          -> set_status
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(campus::list).post(campus::create))
        .route("/{id}", get(campus::get_by_id).put(campus::update))
        .route("/{id}/toggle-status", post(campus::toggle_status))
        .route("/{id}/status", put(campus::set_status))
}
