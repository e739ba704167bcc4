//! Handlers for the `/campuses` resource.

use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use campus_core::error::CoreError;
use campus_core::forms::CampusForm;
use campus_core::types::DbId;
use campus_db::repositories::CampusRepo;

use crate::error::{AppError, AppResult};
use crate::handlers::SetStatusRequest;
use crate::query::StatusParams;
use crate::response::DataResponse;
use crate::state::AppState;

fn not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound {
        entity: "Campus",
        id,
    })
}

/// GET /api/v1/campuses?status=
pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<StatusParams>,
) -> AppResult<impl IntoResponse> {
    let campuses = CampusRepo::list(&state.pool, params.status).await;
    Ok(Json(DataResponse { data: campuses }))
}

/// POST /api/v1/campuses
///
/// Validate the form and create a campus with no classrooms.
pub async fn create(
    State(state): State<AppState>,
    payload: Result<Json<CampusForm>, JsonRejection>,
) -> AppResult<impl IntoResponse> {
    let Json(form) = payload?;
    let input = form.validate()?;
    let campus = CampusRepo::create(&state.pool, &input).await;

    tracing::info!(campus_id = campus.id, name = %campus.name, "Campus created");

    Ok((StatusCode::CREATED, Json(DataResponse { data: campus })))
}

/// GET /api/v1/campuses/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let campus = CampusRepo::find_by_id(&state.pool, id)
        .await
        .ok_or_else(|| not_found(id))?;
    Ok(Json(DataResponse { data: campus }))
}

/// PUT /api/v1/campuses/{id}
///
/// Save the edit form. A rename is copied onto the campus's classrooms.
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    payload: Result<Json<CampusForm>, JsonRejection>,
) -> AppResult<impl IntoResponse> {
    let Json(form) = payload?;
    let input = form.validate()?;
    let campus = CampusRepo::update(&state.pool, id, &input)
        .await
        .ok_or_else(|| not_found(id))?;

    tracing::info!(campus_id = id, "Campus updated");

    Ok(Json(DataResponse { data: campus }))
}

/// POST /api/v1/campuses/{id}/toggle-status
pub async fn toggle_status(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let campus = CampusRepo::toggle_status(&state.pool, id)
        .await
        .ok_or_else(|| not_found(id))?;

    tracing::info!(campus_id = id, status = %campus.status, "Campus status toggled");

    Ok(Json(DataResponse { data: campus }))
}

/// PUT /api/v1/campuses/{id}/status
pub async fn set_status(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    payload: Result<Json<SetStatusRequest>, JsonRejection>,
) -> AppResult<impl IntoResponse> {
    let Json(body) = payload?;
    let campus = CampusRepo::set_status(&state.pool, id, body.status)
        .await
        .ok_or_else(|| not_found(id))?;

    tracing::info!(campus_id = id, status = %campus.status, "Campus status set");

    Ok(Json(DataResponse { data: campus }))
}
