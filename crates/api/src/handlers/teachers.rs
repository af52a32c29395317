//! Handlers for the `/teachers` resource.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use barre_core::error::CoreError;
use barre_core::types::DbId;
use barre_db::models::teacher::{CreateTeacher, UpdateTeacher};
use barre_db::repositories::TeacherRepo;

use crate::error::{AppError, AppResult};
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/v1/teachers
pub async fn list_teachers(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let teachers = TeacherRepo::list_all(&state.pool).await?;

    Ok(Json(DataResponse { data: teachers }))
}

/// POST /api/v1/teachers
pub async fn create_teacher(
    State(state): State<AppState>,
    Json(input): Json<CreateTeacher>,
) -> AppResult<impl IntoResponse> {
    let teacher = TeacherRepo::create(&state.pool, &input).await?;

    tracing::info!(teacher_id = teacher.id, "Teacher created");

    Ok((StatusCode::CREATED, Json(DataResponse { data: teacher })))
}

/// GET /api/v1/teachers/{id}
pub async fn get_teacher(
    State(state): State<AppState>,
    Path(teacher_id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let teacher = TeacherRepo::find_by_id(&state.pool, teacher_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Teacher",
            id: teacher_id,
        }))?;

    Ok(Json(DataResponse { data: teacher }))
}

/// PUT /api/v1/teachers/{id}
pub async fn update_teacher(
    State(state): State<AppState>,
    Path(teacher_id): Path<DbId>,
    Json(input): Json<UpdateTeacher>,
) -> AppResult<impl IntoResponse> {
    let teacher = TeacherRepo::update(&state.pool, teacher_id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Teacher",
            id: teacher_id,
        }))?;

    tracing::info!(teacher_id, "Teacher updated");

    Ok(Json(DataResponse { data: teacher }))
}

/// DELETE /api/v1/teachers/{id}
///
/// Sessions taught by the teacher keep running unassigned (the FK sets
/// their `teacher_id` to NULL).
pub async fn delete_teacher(
    State(state): State<AppState>,
    Path(teacher_id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let deleted = TeacherRepo::delete(&state.pool, teacher_id).await?;

    if !deleted {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "Teacher",
            id: teacher_id,
        }));
    }

    tracing::info!(teacher_id, "Teacher deleted");

    Ok(StatusCode::NO_CONTENT)
}
