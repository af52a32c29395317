//! Repository for the `dismissed_notices` table.
//!
//! The durable half of the notification workflow: derived notices are
//! ephemeral, only their acknowledged ids are stored. The set grows
//! monotonically and is never pruned; a stale id simply never matches a
//! derived notice again.

use sqlx::PgPool;

/// Provides operations for the dismissed-notice id set.
pub struct DismissalRepo;

impl DismissalRepo {
    /// Record a dismissal. Idempotent: dismissing an already-dismissed id
    /// is a no-op.
    pub async fn record(pool: &PgPool, notice_id: &str) -> Result<(), sqlx::Error> {
        sqlx::query(
            "INSERT INTO dismissed_notices (notice_id) VALUES ($1)
             ON CONFLICT (notice_id) DO NOTHING",
        )
        .bind(notice_id)
        .execute(pool)
        .await?;
        Ok(())
    }

    /// Load every dismissed notice id.
    pub async fn list_ids(pool: &PgPool) -> Result<Vec<String>, sqlx::Error> {
        sqlx::query_scalar::<_, String>("SELECT notice_id FROM dismissed_notices")
            .fetch_all(pool)
            .await
    }

    /// Check whether a single id has been dismissed.
    pub async fn is_dismissed(pool: &PgPool, notice_id: &str) -> Result<bool, sqlx::Error> {
        sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS (SELECT 1 FROM dismissed_notices WHERE notice_id = $1)",
        )
        .bind(notice_id)
        .fetch_one(pool)
        .await
    }
}
