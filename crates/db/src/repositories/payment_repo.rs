//! Repository for the `payments` table.

use barre_core::types::DbId;
use sqlx::PgPool;

use crate::models::payment::{CreatePayment, Payment};

const COLUMNS: &str = "id, student_id, paid_on, amount_cents, method, created_at";

/// Provides operations for payment records. Payments are append-only from
/// the console's point of view: recorded, listed, and occasionally removed
/// when entered by mistake, never edited.
pub struct PaymentRepo;

impl PaymentRepo {
    /// Insert a new payment, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreatePayment) -> Result<Payment, sqlx::Error> {
        let query = format!(
            "INSERT INTO payments (student_id, paid_on, amount_cents, method)
             VALUES ($1, $2, $3, $4)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Payment>(&query)
            .bind(input.student_id)
            .bind(input.paid_on)
            .bind(input.amount_cents)
            .bind(&input.method)
            .fetch_one(pool)
            .await
    }

    /// List all payments, newest first.
    pub async fn list_all(pool: &PgPool) -> Result<Vec<Payment>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM payments ORDER BY paid_on DESC");
        sqlx::query_as::<_, Payment>(&query).fetch_all(pool).await
    }

    /// Delete a payment by ID. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM payments WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
