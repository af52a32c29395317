//! Handlers for the `/plans` resource.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use barre_core::error::CoreError;
use barre_core::types::DbId;
use barre_db::models::plan::{CreatePlan, UpdatePlan};
use barre_db::repositories::PlanRepo;
use validator::Validate;

use crate::error::{AppError, AppResult};
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/v1/plans
pub async fn list_plans(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let plans = PlanRepo::list_all(&state.pool).await?;

    Ok(Json(DataResponse { data: plans }))
}

/// POST /api/v1/plans
pub async fn create_plan(
    State(state): State<AppState>,
    Json(input): Json<CreatePlan>,
) -> AppResult<impl IntoResponse> {
    input
        .validate()
        .map_err(|err| AppError::BadRequest(err.to_string()))?;

    let plan = PlanRepo::create(&state.pool, &input).await?;

    tracing::info!(plan_id = plan.id, "Plan created");

    Ok((StatusCode::CREATED, Json(DataResponse { data: plan })))
}

/// GET /api/v1/plans/{id}
pub async fn get_plan(
    State(state): State<AppState>,
    Path(plan_id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let plan = PlanRepo::find_by_id(&state.pool, plan_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Plan",
            id: plan_id,
        }))?;

    Ok(Json(DataResponse { data: plan }))
}

/// PUT /api/v1/plans/{id}
pub async fn update_plan(
    State(state): State<AppState>,
    Path(plan_id): Path<DbId>,
    Json(input): Json<UpdatePlan>,
) -> AppResult<impl IntoResponse> {
    input
        .validate()
        .map_err(|err| AppError::BadRequest(err.to_string()))?;

    let plan = PlanRepo::update(&state.pool, plan_id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Plan",
            id: plan_id,
        }))?;

    tracing::info!(plan_id, "Plan updated");

    Ok(Json(DataResponse { data: plan }))
}

/// DELETE /api/v1/plans/{id}
pub async fn delete_plan(
    State(state): State<AppState>,
    Path(plan_id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let deleted = PlanRepo::delete(&state.pool, plan_id).await?;

    if !deleted {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "Plan",
            id: plan_id,
        }));
    }

    tracing::info!(plan_id, "Plan deleted");

    Ok(StatusCode::NO_CONTENT)
}
