//! Handlers for the `/disciplines` resource.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use barre_core::error::CoreError;
use barre_core::types::DbId;
use barre_db::models::discipline::{CreateDiscipline, UpdateDiscipline};
use barre_db::repositories::DisciplineRepo;

use crate::error::{AppError, AppResult};
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/v1/disciplines
pub async fn list_disciplines(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let disciplines = DisciplineRepo::list_all(&state.pool).await?;

    Ok(Json(DataResponse { data: disciplines }))
}

/// POST /api/v1/disciplines
pub async fn create_discipline(
    State(state): State<AppState>,
    Json(input): Json<CreateDiscipline>,
) -> AppResult<impl IntoResponse> {
    if input.name.trim().is_empty() {
        return Err(AppError::BadRequest("name must not be empty".into()));
    }

    let discipline = DisciplineRepo::create(&state.pool, &input).await?;

    tracing::info!(discipline_id = discipline.id, "Discipline created");

    Ok((StatusCode::CREATED, Json(DataResponse { data: discipline })))
}

/// GET /api/v1/disciplines/{id}
pub async fn get_discipline(
    State(state): State<AppState>,
    Path(discipline_id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let discipline = DisciplineRepo::find_by_id(&state.pool, discipline_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Discipline",
            id: discipline_id,
        }))?;

    Ok(Json(DataResponse { data: discipline }))
}

/// PUT /api/v1/disciplines/{id}
pub async fn update_discipline(
    State(state): State<AppState>,
    Path(discipline_id): Path<DbId>,
    Json(input): Json<UpdateDiscipline>,
) -> AppResult<impl IntoResponse> {
    let discipline = DisciplineRepo::update(&state.pool, discipline_id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Discipline",
            id: discipline_id,
        }))?;

    tracing::info!(discipline_id, "Discipline updated");

    Ok(Json(DataResponse { data: discipline }))
}

/// DELETE /api/v1/disciplines/{id}
///
/// Cascades to the discipline's sessions.
pub async fn delete_discipline(
    State(state): State<AppState>,
    Path(discipline_id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let deleted = DisciplineRepo::delete(&state.pool, discipline_id).await?;

    if !deleted {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "Discipline",
            id: discipline_id,
        }));
    }

    tracing::info!(discipline_id, "Discipline deleted");

    Ok(StatusCode::NO_CONTENT)
}
