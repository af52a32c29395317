//! Repository for the `teachers` table.

use barre_core::types::DbId;
use sqlx::PgPool;

use crate::models::teacher::{CreateTeacher, Teacher, UpdateTeacher};

const COLUMNS: &str = "id, name, contact, created_at, updated_at";

/// Provides CRUD operations for teachers.
pub struct TeacherRepo;

impl TeacherRepo {
    /// Insert a new teacher, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateTeacher) -> Result<Teacher, sqlx::Error> {
        let query = format!(
            "INSERT INTO teachers (name, contact) VALUES ($1, $2) RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Teacher>(&query)
            .bind(&input.name)
            .bind(&input.contact)
            .fetch_one(pool)
            .await
    }

    /// Find a teacher by ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Teacher>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM teachers WHERE id = $1");
        sqlx::query_as::<_, Teacher>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all teachers ordered by name.
    pub async fn list_all(pool: &PgPool) -> Result<Vec<Teacher>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM teachers ORDER BY name ASC");
        sqlx::query_as::<_, Teacher>(&query).fetch_all(pool).await
    }

    /// Update a teacher. Only non-`None` fields in `input` are applied.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateTeacher,
    ) -> Result<Option<Teacher>, sqlx::Error> {
        let query = format!(
            "UPDATE teachers SET
                name = COALESCE($2, name),
                contact = COALESCE($3, contact),
                updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Teacher>(&query)
            .bind(id)
            .bind(&input.name)
            .bind(&input.contact)
            .fetch_optional(pool)
            .await
    }

    /// Delete a teacher by ID. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM teachers WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
