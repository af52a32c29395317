//! Cost entity model and DTOs.

use barre_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// Accepted values for the `category` column.
pub const COST_CATEGORIES: &[&str] = &["teacher", "rent", "supplies", "marketing", "other"];

/// A row from the `costs` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Cost {
    pub id: DbId,
    pub paid_on: Timestamp,
    pub category: String,
    pub amount_cents: i64,
    pub description: String,
    pub class_session_id: Option<DbId>,
    pub teacher_id: Option<DbId>,
    pub created_at: Timestamp,
}

/// DTO for recording a cost.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateCost {
    pub paid_on: Timestamp,
    pub category: String,
    #[validate(range(min = 0))]
    pub amount_cents: i64,
    pub description: String,
    pub class_session_id: Option<DbId>,
    pub teacher_id: Option<DbId>,
}
