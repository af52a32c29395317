//! Student entity model and DTOs.

use barre_core::types::{DbId, Timestamp};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// A row from the `students` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Student {
    pub id: DbId,
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub date_of_birth: Option<NaiveDate>,
    pub notes: Option<String>,
    pub active: bool,
    pub plan_id: Option<DbId>,
    pub join_date: NaiveDate,
    pub leave_date: Option<NaiveDate>,
    /// Per-student fee override in cents; `None` falls back to the plan.
    pub custom_price_cents: Option<i64>,
    pub custom_classes_per_week: Option<i32>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a student.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateStudent {
    pub name: String,
    #[validate(email)]
    pub email: String,
    pub phone: Option<String>,
    pub date_of_birth: Option<NaiveDate>,
    pub notes: Option<String>,
    #[serde(default = "default_true")]
    pub active: bool,
    pub plan_id: Option<DbId>,
    /// Defaults to today when omitted.
    pub join_date: Option<NaiveDate>,
    pub leave_date: Option<NaiveDate>,
    #[validate(range(min = 0))]
    pub custom_price_cents: Option<i64>,
    #[validate(range(min = 0))]
    pub custom_classes_per_week: Option<i32>,
}

/// DTO for updating a student. Only non-`None` fields are applied.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct UpdateStudent {
    pub name: Option<String>,
    #[validate(email)]
    pub email: Option<String>,
    pub phone: Option<String>,
    pub date_of_birth: Option<NaiveDate>,
    pub notes: Option<String>,
    pub active: Option<bool>,
    pub plan_id: Option<DbId>,
    pub join_date: Option<NaiveDate>,
    pub leave_date: Option<NaiveDate>,
    #[validate(range(min = 0))]
    pub custom_price_cents: Option<i64>,
    #[validate(range(min = 0))]
    pub custom_classes_per_week: Option<i32>,
}

fn default_true() -> bool {
    true
}
