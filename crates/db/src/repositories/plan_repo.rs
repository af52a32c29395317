//! Repository for the `plans` table.

use barre_core::types::DbId;
use sqlx::PgPool;

use crate::models::plan::{CreatePlan, Plan, UpdatePlan};

const COLUMNS: &str = "id, name, price_cents, classes_per_week, created_at, updated_at";

/// Provides CRUD operations for membership plans.
pub struct PlanRepo;

impl PlanRepo {
    /// Insert a new plan, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreatePlan) -> Result<Plan, sqlx::Error> {
        let query = format!(
            "INSERT INTO plans (name, price_cents, classes_per_week)
             VALUES ($1, $2, $3)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Plan>(&query)
            .bind(&input.name)
            .bind(input.price_cents)
            .bind(input.classes_per_week)
            .fetch_one(pool)
            .await
    }

    /// Find a plan by ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Plan>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM plans WHERE id = $1");
        sqlx::query_as::<_, Plan>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all plans ordered by price ascending.
    pub async fn list_all(pool: &PgPool) -> Result<Vec<Plan>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM plans ORDER BY price_cents ASC");
        sqlx::query_as::<_, Plan>(&query).fetch_all(pool).await
    }

    /// Update a plan. Only non-`None` fields in `input` are applied.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdatePlan,
    ) -> Result<Option<Plan>, sqlx::Error> {
        let query = format!(
            "UPDATE plans SET
                name = COALESCE($2, name),
                price_cents = COALESCE($3, price_cents),
                classes_per_week = COALESCE($4, classes_per_week),
                updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Plan>(&query)
            .bind(id)
            .bind(&input.name)
            .bind(input.price_cents)
            .bind(input.classes_per_week)
            .fetch_optional(pool)
            .await
    }

    /// Delete a plan by ID. Returns `true` if a row was removed. Students
    /// on the plan fall back to the studio default fee.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM plans WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
