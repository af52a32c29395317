//! Repository for the `class_sessions` table.
//!
//! Writes accept a [`PlacedSession`] — a candidate that already passed the
//! placement checks — so a rejected edit can never reach these queries.

use barre_core::placement::PlacedSession;
use barre_core::types::DbId;
use sqlx::PgPool;

use crate::models::class_session::{ClassSession, ScheduleEntry};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, discipline_id, teacher_id, start_time, end_time, capacity, \
    student_ids, created_at, updated_at";

/// Provides CRUD operations for class sessions.
pub struct ClassSessionRepo;

impl ClassSessionRepo {
    /// Insert a placed session, returning the created row with its
    /// store-assigned id.
    pub async fn create(pool: &PgPool, placed: &PlacedSession) -> Result<ClassSession, sqlx::Error> {
        let query = format!(
            "INSERT INTO class_sessions
                (discipline_id, teacher_id, start_time, end_time, capacity, student_ids)
             VALUES ($1, $2, $3, $4, $5, $6)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, ClassSession>(&query)
            .bind(placed.discipline_id)
            .bind(placed.teacher_id)
            .bind(placed.interval.start())
            .bind(placed.interval.end())
            .bind(placed.capacity)
            .bind(&placed.student_ids)
            .fetch_one(pool)
            .await
    }

    /// Replace every mutable field of a session with the placed candidate.
    ///
    /// The edit workflow always validates a complete candidate, so this is
    /// a wholesale replacement rather than a partial patch. Returns `None`
    /// if no row with the given `id` exists.
    pub async fn replace(
        pool: &PgPool,
        id: DbId,
        placed: &PlacedSession,
    ) -> Result<Option<ClassSession>, sqlx::Error> {
        let query = format!(
            "UPDATE class_sessions SET
                discipline_id = $2,
                teacher_id = $3,
                start_time = $4,
                end_time = $5,
                capacity = $6,
                student_ids = $7,
                updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, ClassSession>(&query)
            .bind(id)
            .bind(placed.discipline_id)
            .bind(placed.teacher_id)
            .bind(placed.interval.start())
            .bind(placed.interval.end())
            .bind(placed.capacity)
            .bind(&placed.student_ids)
            .fetch_optional(pool)
            .await
    }

    /// Find a session by ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<ClassSession>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM class_sessions WHERE id = $1");
        sqlx::query_as::<_, ClassSession>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all sessions ordered by start time ascending.
    pub async fn list_all(pool: &PgPool) -> Result<Vec<ClassSession>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM class_sessions ORDER BY start_time ASC");
        sqlx::query_as::<_, ClassSession>(&query).fetch_all(pool).await
    }

    /// Replace a session's roster. Returns `None` if no row with the given
    /// `id` exists. Capacity is enforced by the caller before the write.
    pub async fn set_student_ids(
        pool: &PgPool,
        id: DbId,
        student_ids: &[DbId],
    ) -> Result<Option<ClassSession>, sqlx::Error> {
        let query = format!(
            "UPDATE class_sessions SET student_ids = $2, updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, ClassSession>(&query)
            .bind(id)
            .bind(student_ids)
            .fetch_optional(pool)
            .await
    }

    /// List all sessions joined with discipline and teacher display names,
    /// ordered by start time ascending.
    pub async fn list_schedule(pool: &PgPool) -> Result<Vec<ScheduleEntry>, sqlx::Error> {
        sqlx::query_as::<_, ScheduleEntry>(
            "SELECT cs.id, cs.discipline_id, d.name AS discipline_name,
                    cs.teacher_id, t.name AS teacher_name,
                    cs.start_time, cs.end_time, cs.capacity, cs.student_ids
             FROM class_sessions cs
             JOIN disciplines d ON d.id = cs.discipline_id
             LEFT JOIN teachers t ON t.id = cs.teacher_id
             ORDER BY cs.start_time ASC",
        )
        .fetch_all(pool)
        .await
    }

    /// Delete a session by ID. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM class_sessions WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
