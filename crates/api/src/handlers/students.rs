//! Handlers for the `/students` resource.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use barre_core::error::CoreError;
use barre_core::types::DbId;
use barre_db::models::student::{CreateStudent, UpdateStudent};
use barre_db::repositories::StudentRepo;
use validator::Validate;

use crate::error::{AppError, AppResult};
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/v1/students
///
/// List all students ordered by name.
pub async fn list_students(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let students = StudentRepo::list_all(&state.pool).await?;

    Ok(Json(DataResponse { data: students }))
}

/// POST /api/v1/students
pub async fn create_student(
    State(state): State<AppState>,
    Json(input): Json<CreateStudent>,
) -> AppResult<impl IntoResponse> {
    input
        .validate()
        .map_err(|err| AppError::BadRequest(err.to_string()))?;

    let student = StudentRepo::create(&state.pool, &input).await?;

    tracing::info!(student_id = student.id, "Student created");

    Ok((StatusCode::CREATED, Json(DataResponse { data: student })))
}

/// GET /api/v1/students/{id}
pub async fn get_student(
    State(state): State<AppState>,
    Path(student_id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let student = StudentRepo::find_by_id(&state.pool, student_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Student",
            id: student_id,
        }))?;

    Ok(Json(DataResponse { data: student }))
}

/// PUT /api/v1/students/{id}
pub async fn update_student(
    State(state): State<AppState>,
    Path(student_id): Path<DbId>,
    Json(input): Json<UpdateStudent>,
) -> AppResult<impl IntoResponse> {
    input
        .validate()
        .map_err(|err| AppError::BadRequest(err.to_string()))?;

    let student = StudentRepo::update(&state.pool, student_id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Student",
            id: student_id,
        }))?;

    tracing::info!(student_id, "Student updated");

    Ok(Json(DataResponse { data: student }))
}

/// DELETE /api/v1/students/{id}
pub async fn delete_student(
    State(state): State<AppState>,
    Path(student_id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let deleted = StudentRepo::delete(&state.pool, student_id).await?;

    if !deleted {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "Student",
            id: student_id,
        }));
    }

    tracing::info!(student_id, "Student deleted");

    Ok(StatusCode::NO_CONTENT)
}
