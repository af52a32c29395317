//! Repository for the `disciplines` table.

use barre_core::types::DbId;
use sqlx::PgPool;

use crate::models::discipline::{CreateDiscipline, Discipline, UpdateDiscipline};

const COLUMNS: &str = "id, name, created_at, updated_at";

/// Provides CRUD operations for disciplines.
pub struct DisciplineRepo;

impl DisciplineRepo {
    /// Insert a new discipline, returning the created row.
    pub async fn create(
        pool: &PgPool,
        input: &CreateDiscipline,
    ) -> Result<Discipline, sqlx::Error> {
        let query = format!("INSERT INTO disciplines (name) VALUES ($1) RETURNING {COLUMNS}");
        sqlx::query_as::<_, Discipline>(&query)
            .bind(&input.name)
            .fetch_one(pool)
            .await
    }

    /// Find a discipline by ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Discipline>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM disciplines WHERE id = $1");
        sqlx::query_as::<_, Discipline>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all disciplines ordered by name.
    pub async fn list_all(pool: &PgPool) -> Result<Vec<Discipline>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM disciplines ORDER BY name ASC");
        sqlx::query_as::<_, Discipline>(&query).fetch_all(pool).await
    }

    /// Update a discipline. Returns `None` if no row with the given `id`
    /// exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateDiscipline,
    ) -> Result<Option<Discipline>, sqlx::Error> {
        let query = format!(
            "UPDATE disciplines SET
                name = COALESCE($2, name),
                updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Discipline>(&query)
            .bind(id)
            .bind(&input.name)
            .fetch_optional(pool)
            .await
    }

    /// Delete a discipline by ID. Returns `true` if a row was removed.
    /// Sessions of the discipline are removed by the cascade.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM disciplines WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
