//! Teacher entity model and DTOs.

use barre_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `teachers` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Teacher {
    pub id: DbId,
    pub name: String,
    pub contact: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a teacher.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateTeacher {
    pub name: String,
    pub contact: String,
}

/// DTO for updating a teacher. Only non-`None` fields are applied.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateTeacher {
    pub name: Option<String>,
    pub contact: Option<String>,
}
