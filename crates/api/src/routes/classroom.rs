//! Route definitions for classrooms.

use axum::routing::{get, post, put};
use axum::Router;

use crate::handlers::classroom;
use crate::state::AppState;

/// Routes mounted at `/classrooms`.
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
        .route("/", get(classroom::list).post(classroom::create))
        .route("/{id}", get(classroom::get_by_id).put(classroom::update))
        .route("/{id}/toggle-status", post(classroom::toggle_status))
        .route("/{id}/status", put(classroom::set_status))
}
