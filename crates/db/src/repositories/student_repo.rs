//! Repository for the `students` table.

use barre_core::types::DbId;
use sqlx::PgPool;

use crate::models::student::{CreateStudent, Student, UpdateStudent};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, name, email, phone, date_of_birth, notes, active, plan_id, \
    join_date, leave_date, custom_price_cents, custom_classes_per_week, created_at, updated_at";

/// Provides CRUD operations for students.
pub struct StudentRepo;

impl StudentRepo {
    /// Insert a new student, returning the created row.
    ///
    /// If `join_date` is `None`, defaults to the current date.
    pub async fn create(pool: &PgPool, input: &CreateStudent) -> Result<Student, sqlx::Error> {
        let query = format!(
            "INSERT INTO students
                (name, email, phone, date_of_birth, notes, active, plan_id,
                 join_date, leave_date, custom_price_cents, custom_classes_per_week)
             VALUES ($1, $2, $3, $4, $5, $6, $7, COALESCE($8, CURRENT_DATE), $9, $10, $11)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Student>(&query)
            .bind(&input.name)
            .bind(&input.email)
            .bind(&input.phone)
            .bind(input.date_of_birth)
            .bind(&input.notes)
            .bind(input.active)
            .bind(input.plan_id)
            .bind(input.join_date)
            .bind(input.leave_date)
            .bind(input.custom_price_cents)
            .bind(input.custom_classes_per_week)
            .fetch_one(pool)
            .await
    }

    /// Find a student by ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Student>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM students WHERE id = $1");
        sqlx::query_as::<_, Student>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all students ordered by name.
    pub async fn list_all(pool: &PgPool) -> Result<Vec<Student>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM students ORDER BY name ASC");
        sqlx::query_as::<_, Student>(&query).fetch_all(pool).await
    }

    /// Update a student. Only non-`None` fields in `input` are applied.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateStudent,
    ) -> Result<Option<Student>, sqlx::Error> {
        let query = format!(
            "UPDATE students SET
                name = COALESCE($2, name),
                email = COALESCE($3, email),
                phone = COALESCE($4, phone),
                date_of_birth = COALESCE($5, date_of_birth),
                notes = COALESCE($6, notes),
                active = COALESCE($7, active),
                plan_id = COALESCE($8, plan_id),
                join_date = COALESCE($9, join_date),
                leave_date = COALESCE($10, leave_date),
                custom_price_cents = COALESCE($11, custom_price_cents),
                custom_classes_per_week = COALESCE($12, custom_classes_per_week),
                updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Student>(&query)
            .bind(id)
            .bind(&input.name)
            .bind(&input.email)
            .bind(&input.phone)
            .bind(input.date_of_birth)
            .bind(&input.notes)
            .bind(input.active)
            .bind(input.plan_id)
            .bind(input.join_date)
            .bind(input.leave_date)
            .bind(input.custom_price_cents)
            .bind(input.custom_classes_per_week)
            .fetch_optional(pool)
            .await
    }

    /// Delete a student by ID. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM students WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
