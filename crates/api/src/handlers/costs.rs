//! Handlers for the `/costs` resource.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use barre_core::error::CoreError;
use barre_core::types::DbId;
use barre_db::models::cost::{CreateCost, COST_CATEGORIES};
use barre_db::repositories::CostRepo;
use validator::Validate;

use crate::error::{AppError, AppResult};
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/v1/costs
///
/// List all costs, newest first.
pub async fn list_costs(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let costs = CostRepo::list_all(&state.pool).await?;

    Ok(Json(DataResponse { data: costs }))
}

/// POST /api/v1/costs
pub async fn create_cost(
    State(state): State<AppState>,
    Json(input): Json<CreateCost>,
) -> AppResult<impl IntoResponse> {
    input
        .validate()
        .map_err(|err| AppError::BadRequest(err.to_string()))?;
    validate_category(&input.category)?;

    let cost = CostRepo::create(&state.pool, &input).await?;

    tracing::info!(cost_id = cost.id, category = %cost.category, "Cost recorded");

    Ok((StatusCode::CREATED, Json(DataResponse { data: cost })))
}

/// DELETE /api/v1/costs/{id}
pub async fn delete_cost(
    State(state): State<AppState>,
    Path(cost_id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let deleted = CostRepo::delete(&state.pool, cost_id).await?;

    if !deleted {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "Cost",
            id: cost_id,
        }));
    }

    tracing::info!(cost_id, "Cost deleted");

    Ok(StatusCode::NO_CONTENT)
}

fn validate_category(category: &str) -> Result<(), AppError> {
    if COST_CATEGORIES.contains(&category) {
        Ok(())
    } else {
        Err(AppError::BadRequest(format!(
            "category must be one of: {}",
            COST_CATEGORIES.join(", ")
        )))
    }
}
