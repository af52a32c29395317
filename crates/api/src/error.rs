use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use barre_core::error::CoreError;
use barre_core::placement::PlacementError;
use serde_json::json;

/// Application-level error type for HTTP handlers.
///
/// Wraps [`CoreError`] and [`PlacementError`] for domain errors and adds
/// HTTP-specific variants. Implements [`IntoResponse`] to produce
/// consistent JSON error responses.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level error from `barre_core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// A placement rejection from the class edit workflow.
    #[error(transparent)]
    Placement(#[from] PlacementError),

    /// A database error from sqlx.
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// A bad request with a human-readable message.
    #[error("Bad request: {0}")]
    BadRequest(String),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl AppError {
    /// HTTP status, machine-readable code, and user-facing message.
    fn parts(&self) -> (StatusCode, &'static str, String) {
        match self {
            // --- CoreError variants ---
            AppError::Core(core) => match core {
                CoreError::NotFound { entity, id } => (
                    StatusCode::NOT_FOUND,
                    "NOT_FOUND",
                    format!("{entity} with id {id} not found"),
                ),
                CoreError::Validation(msg) => {
                    (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg.clone())
                }
                CoreError::Conflict(msg) => (StatusCode::CONFLICT, "CONFLICT", msg.clone()),
                CoreError::Internal(msg) => {
                    tracing::error!(error = %msg, "Internal core error");
                    (
                        StatusCode::INTERNAL_SERVER_ERROR,
                        "INTERNAL_ERROR",
                        "An internal error occurred".to_string(),
                    )
                }
            },

            // --- Placement rejections ---
            // All four are user-correctable rejections of a pending class
            // edit; only the overlap is a true conflict.
            AppError::Placement(placement) => {
                let (status, code) = match placement {
                    PlacementError::IncompleteSession => {
                        (StatusCode::BAD_REQUEST, "INCOMPLETE_SESSION")
                    }
                    PlacementError::InvalidInterval => {
                        (StatusCode::BAD_REQUEST, "INVALID_INTERVAL")
                    }
                    PlacementError::UnavailableWindow(_) => {
                        (StatusCode::BAD_REQUEST, "UNAVAILABLE_WINDOW")
                    }
                    PlacementError::ScheduleOverlap { .. } => {
                        (StatusCode::CONFLICT, "SCHEDULE_OVERLAP")
                    }
                };
                (status, code, placement.to_string())
            }

            // --- Database errors ---
            AppError::Database(err) => classify_sqlx_error(err),

            // --- HTTP-specific errors ---
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, "BAD_REQUEST", msg.clone()),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = self.parts();

        let body = json!({
            "error": message,
            "code": code,
        });

        (status, axum::Json(body)).into_response()
    }
}

/// Classify a sqlx error into an HTTP status, error code, and message.
///
/// - `RowNotFound` maps to 404.
/// - Unique/check constraint violations map to 409.
/// - Everything else maps to 500 with a sanitized message.
fn classify_sqlx_error(err: &sqlx::Error) -> (StatusCode, &'static str, String) {
    match err {
        sqlx::Error::RowNotFound => (
            StatusCode::NOT_FOUND,
            "NOT_FOUND",
            "Resource not found".to_string(),
        ),
        sqlx::Error::Database(db_err) => {
            // PostgreSQL unique constraint violation: error code 23505
            if db_err.code().as_deref() == Some("23505") {
                let constraint = db_err.constraint().unwrap_or("unknown");
                return (
                    StatusCode::CONFLICT,
                    "CONFLICT",
                    format!("Duplicate value violates unique constraint: {constraint}"),
                );
            }
            tracing::error!(error = %db_err, "Database error");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                "INTERNAL_ERROR",
                "An internal error occurred".to_string(),
            )
        }
        other => {
            tracing::error!(error = %other, "Database error");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                "INTERNAL_ERROR",
                "An internal error occurred".to_string(),
            )
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    #[test]
    fn placement_errors_convert_via_from() {
        let err: AppError = PlacementError::IncompleteSession.into();
        assert_matches!(err, AppError::Placement(PlacementError::IncompleteSession));

        let err: AppError = CoreError::Validation("bad".into()).into();
        assert_matches!(err, AppError::Core(CoreError::Validation(_)));
    }

    #[test]
    fn incomplete_session_maps_to_400() {
        let response = AppError::from(PlacementError::IncompleteSession).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn invalid_interval_maps_to_400() {
        let response = AppError::from(PlacementError::InvalidInterval).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn unavailable_window_maps_to_400() {
        let err = PlacementError::UnavailableWindow("The 12:00-15:00 slot is not available.".into());
        let response = AppError::from(err).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn schedule_overlap_maps_to_409() {
        let response =
            AppError::from(PlacementError::ScheduleOverlap { other: 7 }).into_response();
        assert_eq!(response.status(), StatusCode::CONFLICT);
    }

    #[test]
    fn not_found_maps_to_404() {
        let err = AppError::Core(CoreError::NotFound {
            entity: "Student",
            id: 42,
        });
        assert_eq!(err.into_response().status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn row_not_found_maps_to_404() {
        let err = AppError::Database(sqlx::Error::RowNotFound);
        assert_eq!(err.into_response().status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn internal_core_error_is_sanitized() {
        let err = AppError::Core(CoreError::Internal("connection string leaked".into()));
        let (_, _, message) = err.parts();
        assert_eq!(message, "An internal error occurred");
    }
}
