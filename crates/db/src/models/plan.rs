//! Membership plan model and DTOs.

use barre_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// A row from the `plans` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Plan {
    pub id: DbId,
    pub name: String,
    pub price_cents: i64,
    pub classes_per_week: i32,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a plan.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreatePlan {
    pub name: String,
    #[validate(range(min = 0))]
    pub price_cents: i64,
    #[validate(range(min = 0))]
    pub classes_per_week: i32,
}

/// DTO for updating a plan. Only non-`None` fields are applied.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct UpdatePlan {
    pub name: Option<String>,
    #[validate(range(min = 0))]
    pub price_cents: Option<i64>,
    #[validate(range(min = 0))]
    pub classes_per_week: Option<i32>,
}
