//! Handlers for the derived-notification feed.
//!
//! Notices are recomputed from the latest session snapshot on every read
//! and filtered through the persisted dismissal set before anything is
//! returned; raw notices never bypass the filter. Only dismissals are
//! stored, keyed by the deterministic notice id.

use std::collections::HashSet;

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use barre_core::error::CoreError;
use barre_core::interval::TimeInterval;
use barre_core::notices::{self, ScheduledClass};
use barre_db::models::class_session::ScheduleEntry;
use barre_db::repositories::{ClassSessionRepo, DismissalRepo};

use crate::error::{AppError, AppResult};
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/v1/notifications
///
/// Derive the advisory set (schedule conflicts, low-enrollment warnings)
/// from the full session list and drop previously dismissed ids.
pub async fn list_notifications(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let entries = ClassSessionRepo::list_schedule(&state.pool).await?;

    let dismissed: HashSet<String> = DismissalRepo::list_ids(&state.pool)
        .await?
        .into_iter()
        .collect();

    let classes = scheduled_classes(&entries)?;
    let notices = notices::active_notices(&classes, &dismissed);

    Ok(Json(DataResponse { data: notices }))
}

/// POST /api/v1/notifications/{id}/dismiss
///
/// Record the dismissal of a notice id. Idempotent: re-dismissing answers
/// 204 as well.
pub async fn dismiss_notification(
    State(state): State<AppState>,
    Path(notice_id): Path<String>,
) -> AppResult<impl IntoResponse> {
    DismissalRepo::record(&state.pool, &notice_id).await?;

    tracing::info!(%notice_id, "Notification dismissed");

    Ok(StatusCode::NO_CONTENT)
}

/// Rebuild core derivation views from stored rows.
fn scheduled_classes(entries: &[ScheduleEntry]) -> AppResult<Vec<ScheduledClass>> {
    entries
        .iter()
        .map(|entry| {
            let interval = TimeInterval::new(entry.start_time, entry.end_time).map_err(|_| {
                AppError::Core(CoreError::Internal(format!(
                    "session {} has an invalid stored interval",
                    entry.id
                )))
            })?;
            Ok(ScheduledClass {
                id: entry.id,
                discipline_name: entry.discipline_name.clone(),
                interval,
                enrolled_count: entry.student_ids.len(),
            })
        })
        .collect()
}
