//! Handlers for the `/classes` resource.
//!
//! Create and update run the placement check against the current schedule
//! before anything is persisted: a rejected candidate leaves the store
//! untouched. Enrollment changes go through the capacity-guarded toggle.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use barre_core::enrollment::{self, ToggleOutcome};
use barre_core::error::CoreError;
use barre_core::interval::TimeInterval;
use barre_core::placement::{self, BookedSlot, PlacedSession};
use barre_core::types::DbId;
use barre_db::models::class_session::{ClassSession, UpsertClassSession};
use barre_db::repositories::{ClassSessionRepo, DisciplineRepo, StudentRepo};
use validator::Validate;

use crate::error::{AppError, AppResult};
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/v1/classes
///
/// List all sessions ordered by start time.
pub async fn list_classes(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let sessions = ClassSessionRepo::list_all(&state.pool).await?;

    Ok(Json(DataResponse { data: sessions }))
}

/// POST /api/v1/classes
///
/// Validate and place a new session on the schedule.
pub async fn create_class(
    State(state): State<AppState>,
    Json(input): Json<UpsertClassSession>,
) -> AppResult<impl IntoResponse> {
    let placed = validate_candidate(&state, &input, None).await?;

    let session = ClassSessionRepo::create(&state.pool, &placed).await?;

    tracing::info!(session_id = session.id, "Class session created");

    Ok((StatusCode::CREATED, Json(DataResponse { data: session })))
}

/// GET /api/v1/classes/{id}
pub async fn get_class(
    State(state): State<AppState>,
    Path(session_id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let session = find_session(&state, session_id).await?;

    Ok(Json(DataResponse { data: session }))
}

/// PUT /api/v1/classes/{id}
///
/// Re-validate the full candidate and replace the stored session wholesale.
/// The session's own prior version is excluded from the overlap scan, so a
/// no-op save of an unchanged class always succeeds.
pub async fn update_class(
    State(state): State<AppState>,
    Path(session_id): Path<DbId>,
    Json(input): Json<UpsertClassSession>,
) -> AppResult<impl IntoResponse> {
    find_session(&state, session_id).await?;

    let placed = validate_candidate(&state, &input, Some(session_id)).await?;

    let session = ClassSessionRepo::replace(&state.pool, session_id, &placed)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "ClassSession",
            id: session_id,
        }))?;

    tracing::info!(session_id, "Class session updated");

    Ok(Json(DataResponse { data: session }))
}

/// DELETE /api/v1/classes/{id}
pub async fn delete_class(
    State(state): State<AppState>,
    Path(session_id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let deleted = ClassSessionRepo::delete(&state.pool, session_id).await?;

    if !deleted {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "ClassSession",
            id: session_id,
        }));
    }

    tracing::info!(session_id, "Class session deleted");

    Ok(StatusCode::NO_CONTENT)
}

/// POST /api/v1/classes/{id}/students/{student_id}
///
/// Enroll the student if absent, unenroll if present. A full roster is
/// left untouched and still answers 200 with the unchanged session: the
/// client disables the control rather than handling a failure.
pub async fn toggle_enrollment(
    State(state): State<AppState>,
    Path((session_id, student_id)): Path<(DbId, DbId)>,
) -> AppResult<impl IntoResponse> {
    let session = find_session(&state, session_id).await?;

    StudentRepo::find_by_id(&state.pool, student_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Student",
            id: student_id,
        }))?;

    let mut roster = session.student_ids.clone();
    let outcome = enrollment::toggle_enrollment(&mut roster, session.capacity, student_id);

    let session = match outcome {
        ToggleOutcome::CapacityReached => session,
        ToggleOutcome::Added | ToggleOutcome::Removed => {
            let updated = ClassSessionRepo::set_student_ids(&state.pool, session_id, &roster)
                .await?
                .ok_or(AppError::Core(CoreError::NotFound {
                    entity: "ClassSession",
                    id: session_id,
                }))?;

            tracing::info!(session_id, student_id, ?outcome, "Enrollment toggled");

            updated
        }
    };

    Ok(Json(DataResponse { data: session }))
}

/// Run the full placement pipeline for a candidate: DTO validation,
/// referenced-entity checks, then the core conflict detector against the
/// current session list.
async fn validate_candidate(
    state: &AppState,
    input: &UpsertClassSession,
    session_id: Option<DbId>,
) -> AppResult<PlacedSession> {
    input
        .validate()
        .map_err(|err| AppError::BadRequest(err.to_string()))?;

    let draft = input.to_draft(session_id);

    let existing = ClassSessionRepo::list_all(&state.pool).await?;
    let placed = placement::check_placement(&draft, &booked_slots(&existing)?)?;

    if placed.student_ids.len() > placed.capacity.max(0) as usize {
        return Err(AppError::Core(CoreError::Validation(
            "the roster exceeds the session capacity".into(),
        )));
    }

    DisciplineRepo::find_by_id(&state.pool, placed.discipline_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Discipline",
            id: placed.discipline_id,
        }))?;

    Ok(placed)
}

async fn find_session(state: &AppState, session_id: DbId) -> AppResult<ClassSession> {
    ClassSessionRepo::find_by_id(&state.pool, session_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "ClassSession",
            id: session_id,
        }))
}

/// Rebuild core overlap views from stored rows. Stored rows satisfy the
/// interval invariant via a table check; a violation here means corrupted
/// data, not user error.
fn booked_slots(sessions: &[ClassSession]) -> AppResult<Vec<BookedSlot>> {
    sessions
        .iter()
        .map(|session| {
            let interval = TimeInterval::new(session.start_time, session.end_time).map_err(
                |_| {
                    AppError::Core(CoreError::Internal(format!(
                        "session {} has an invalid stored interval",
                        session.id
                    )))
                },
            )?;
            Ok(BookedSlot {
                id: session.id,
                interval,
            })
        })
        .collect()
}
