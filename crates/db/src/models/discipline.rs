//! Discipline reference data model and DTOs.

use barre_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `disciplines` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Discipline {
    pub id: DbId,
    pub name: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a discipline.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateDiscipline {
    pub name: String,
}

/// DTO for updating a discipline.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateDiscipline {
    pub name: Option<String>,
}
