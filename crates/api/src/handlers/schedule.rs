//! Handler for the weekly schedule listing.

use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;
use barre_db::repositories::ClassSessionRepo;

use crate::error::AppResult;
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/v1/schedule
///
/// Sessions ordered by start time with discipline and teacher display
/// names joined in. This is the weekly grid's data source; layout and
/// rendering are entirely the client's concern.
pub async fn list_schedule(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let entries = ClassSessionRepo::list_schedule(&state.pool).await?;

    Ok(Json(DataResponse { data: entries }))
}
