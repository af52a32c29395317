//! Payment entity model and DTOs.

use barre_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// Accepted values for the `method` column.
pub const PAYMENT_METHODS: &[&str] = &["cash", "transfer", "pos"];

/// A row from the `payments` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Payment {
    pub id: DbId,
    pub student_id: DbId,
    pub paid_on: Timestamp,
    pub amount_cents: i64,
    pub method: String,
    pub created_at: Timestamp,
}

/// DTO for recording a payment.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreatePayment {
    pub student_id: DbId,
    pub paid_on: Timestamp,
    #[validate(range(min = 0))]
    pub amount_cents: i64,
    pub method: String,
}
