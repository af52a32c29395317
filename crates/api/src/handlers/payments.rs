//! Handlers for the `/payments` resource.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use barre_core::error::CoreError;
use barre_core::types::DbId;
use barre_db::models::payment::{CreatePayment, PAYMENT_METHODS};
use barre_db::repositories::{PaymentRepo, StudentRepo};
use validator::Validate;

use crate::error::{AppError, AppResult};
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/v1/payments
///
/// List all payments, newest first.
pub async fn list_payments(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let payments = PaymentRepo::list_all(&state.pool).await?;

    Ok(Json(DataResponse { data: payments }))
}

/// POST /api/v1/payments
pub async fn create_payment(
    State(state): State<AppState>,
    Json(input): Json<CreatePayment>,
) -> AppResult<impl IntoResponse> {
    input
        .validate()
        .map_err(|err| AppError::BadRequest(err.to_string()))?;
    validate_method(&input.method)?;

    StudentRepo::find_by_id(&state.pool, input.student_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Student",
            id: input.student_id,
        }))?;

    let payment = PaymentRepo::create(&state.pool, &input).await?;

    tracing::info!(
        payment_id = payment.id,
        student_id = payment.student_id,
        "Payment recorded"
    );

    Ok((StatusCode::CREATED, Json(DataResponse { data: payment })))
}

/// DELETE /api/v1/payments/{id}
pub async fn delete_payment(
    State(state): State<AppState>,
    Path(payment_id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let deleted = PaymentRepo::delete(&state.pool, payment_id).await?;

    if !deleted {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "Payment",
            id: payment_id,
        }));
    }

    tracing::info!(payment_id, "Payment deleted");

    Ok(StatusCode::NO_CONTENT)
}

fn validate_method(method: &str) -> Result<(), AppError> {
    if PAYMENT_METHODS.contains(&method) {
        Ok(())
    } else {
        Err(AppError::BadRequest(format!(
            "method must be one of: {}",
            PAYMENT_METHODS.join(", ")
        )))
    }
}
