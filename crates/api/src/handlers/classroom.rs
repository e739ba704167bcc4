//! Handlers for the `/classrooms` resource.
//!
//! Creating a classroom bumps its campus's `classroom_count`; moving one to
//! another campus on edit moves the count with it.

use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use campus_core::error::CoreError;
use campus_core::filter::ClassroomFilter;
use campus_core::forms::ClassroomForm;
use campus_core::types::DbId;
use campus_db::repositories::ClassroomRepo;

use crate::error::{AppError, AppResult};
use crate::handlers::SetStatusRequest;
use crate::query::ClassroomListParams;
use crate::response::DataResponse;
use crate::state::AppState;

fn not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound {
        entity: "Classroom",
        id,
    })
}

/// GET /api/v1/classrooms?name=&campus_id=&status=
///
/// The name filter is a case-insensitive substring match; campus and status
/// must match exactly.
pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<ClassroomListParams>,
) -> AppResult<impl IntoResponse> {
    let filter = ClassroomFilter::from(params);
    let classrooms = ClassroomRepo::list(&state.pool, &filter).await;
    Ok(Json(DataResponse { data: classrooms }))
}

/// POST /api/v1/classrooms
pub async fn create(
    State(state): State<AppState>,
    payload: Result<Json<ClassroomForm>, JsonRejection>,
) -> AppResult<impl IntoResponse> {
    let Json(form) = payload?;
    let input = form.validate()?;
    let classroom = ClassroomRepo::create(&state.pool, &input).await?;

    tracing::info!(
        classroom_id = classroom.id,
        campus_id = classroom.campus_id,
        "Classroom created",
    );

    Ok((StatusCode::CREATED, Json(DataResponse { data: classroom })))
}

/// GET /api/v1/classrooms/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let classroom = ClassroomRepo::find_by_id(&state.pool, id)
        .await
        .ok_or_else(|| not_found(id))?;
    Ok(Json(DataResponse { data: classroom }))
}

/// PUT /api/v1/classrooms/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    payload: Result<Json<ClassroomForm>, JsonRejection>,
) -> AppResult<impl IntoResponse> {
    let Json(form) = payload?;
    let input = form.validate()?;
    let classroom = ClassroomRepo::update(&state.pool, id, &input)
        .await?
        .ok_or_else(|| not_found(id))?;

    tracing::info!(classroom_id = id, campus_id = classroom.campus_id, "Classroom updated");

    Ok(Json(DataResponse { data: classroom }))
}

/// POST /api/v1/classrooms/{id}/toggle-status
pub async fn toggle_status(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let classroom = ClassroomRepo::toggle_status(&state.pool, id)
        .await
        .ok_or_else(|| not_found(id))?;

    tracing::info!(classroom_id = id, status = %classroom.status, "Classroom status toggled");

    Ok(Json(DataResponse { data: classroom }))
}

/// PUT /api/v1/classrooms/{id}/status
pub async fn set_status(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    payload: Result<Json<SetStatusRequest>, JsonRejection>,
) -> AppResult<impl IntoResponse> {
    let Json(body) = payload?;
    let classroom = ClassroomRepo::set_status(&state.pool, id, body.status)
        .await
        .ok_or_else(|| not_found(id))?;

    tracing::info!(classroom_id = id, status = %classroom.status, "Classroom status set");

    Ok(Json(DataResponse { data: classroom }))
}
