//! Repository for the `costs` table.

use barre_core::types::DbId;
use sqlx::PgPool;

use crate::models::cost::{Cost, CreateCost};

const COLUMNS: &str =
    "id, paid_on, category, amount_cents, description, class_session_id, teacher_id, created_at";

/// Provides operations for cost records.
pub struct CostRepo;

impl CostRepo {
    /// Insert a new cost, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateCost) -> Result<Cost, sqlx::Error> {
        let query = format!(
            "INSERT INTO costs
                (paid_on, category, amount_cents, description, class_session_id, teacher_id)
             VALUES ($1, $2, $3, $4, $5, $6)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Cost>(&query)
            .bind(input.paid_on)
            .bind(&input.category)
            .bind(input.amount_cents)
            .bind(&input.description)
            .bind(input.class_session_id)
            .bind(input.teacher_id)
            .fetch_one(pool)
            .await
    }

    /// List all costs, newest first.
    pub async fn list_all(pool: &PgPool) -> Result<Vec<Cost>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM costs ORDER BY paid_on DESC");
        sqlx::query_as::<_, Cost>(&query).fetch_all(pool).await
    }

    /// Delete a cost by ID. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM costs WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
