pub mod campus;
pub mod classroom;
pub mod health;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /campuses                                list (?status=), create
/// /campuses/{id}                           get, update
/// /campuses/{id}/toggle-status             flip active/disabled (POST)
/// /campuses/{id}/status                    set status (PUT)
///
/// /classrooms                              list (?name=&campus_id=&status=), create
/// /classrooms/{id}                         get, update
/// /classrooms/{id}/toggle-status           flip active/disabled (POST)
/// /classrooms/{id}/status                  set status (PUT)
/// ```
///
/// Nothing is ever deleted, so there are no DELETE routes.
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/campuses", campus::router())
        .nest("/classrooms", classroom::router())
}
