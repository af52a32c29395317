//! Aggregate queries backing the dashboard widgets.
//!
//! `SUM` over `BIGINT` yields `NUMERIC` in PostgreSQL, so every total is
//! cast back to `BIGINT` before it crosses the wire.

use sqlx::PgPool;

use crate::models::dashboard::{FinanceMonth, OccupancyTotals, RecentTransaction};

/// Provides read-only aggregation queries for the dashboard.
pub struct DashboardRepo;

impl DashboardRepo {
    /// Number of students currently marked active.
    pub async fn active_student_count(pool: &PgPool) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM students WHERE active")
            .fetch_one(pool)
            .await
    }

    /// Total payment income for one month of a year, in cents.
    pub async fn income_cents_for_month(
        pool: &PgPool,
        year: i32,
        month: i32,
    ) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar::<_, i64>(
            "SELECT COALESCE(SUM(amount_cents), 0)::bigint
             FROM payments
             WHERE EXTRACT(YEAR FROM paid_on)::int = $1
               AND EXTRACT(MONTH FROM paid_on)::int = $2",
        )
        .bind(year)
        .bind(month)
        .fetch_one(pool)
        .await
    }

    /// Outstanding collections for a year, in cents: each active student's
    /// annual fee (custom price, else plan price, else `default_fee_cents`,
    /// times twelve) minus what they paid that year, summed.
    pub async fn pending_collections_cents(
        pool: &PgPool,
        year: i32,
        default_fee_cents: i64,
    ) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar::<_, i64>(
            "SELECT COALESCE(SUM(
                 COALESCE(s.custom_price_cents, p.price_cents, $2) * 12
                     - COALESCE(paid.total, 0)
             ), 0)::bigint
             FROM students s
             LEFT JOIN plans p ON p.id = s.plan_id
             LEFT JOIN (
                 SELECT student_id, SUM(amount_cents) AS total
                 FROM payments
                 WHERE EXTRACT(YEAR FROM paid_on)::int = $1
                 GROUP BY student_id
             ) paid ON paid.student_id = s.id
             WHERE s.active",
        )
        .bind(year)
        .bind(default_fee_cents)
        .fetch_one(pool)
        .await
    }

    /// Studio-wide capacity and enrollment sums across all sessions.
    pub async fn occupancy_totals(pool: &PgPool) -> Result<OccupancyTotals, sqlx::Error> {
        sqlx::query_as::<_, OccupancyTotals>(
            "SELECT COALESCE(SUM(capacity), 0)::bigint AS capacity,
                    COALESCE(SUM(cardinality(student_ids)), 0)::bigint AS enrolled
             FROM class_sessions",
        )
        .fetch_one(pool)
        .await
    }

    /// Income and cost totals for every month of a year, twelve rows in
    /// month order with zeroes for empty months.
    pub async fn monthly_finance(
        pool: &PgPool,
        year: i32,
    ) -> Result<Vec<FinanceMonth>, sqlx::Error> {
        sqlx::query_as::<_, FinanceMonth>(
            "SELECT gs.month, COALESCE(p.total, 0)::bigint AS income_cents,
                    COALESCE(c.total, 0)::bigint AS cost_cents
             FROM generate_series(1, 12) AS gs(month)
             LEFT JOIN (
                 SELECT EXTRACT(MONTH FROM paid_on)::int AS month,
                        SUM(amount_cents) AS total
                 FROM payments
                 WHERE EXTRACT(YEAR FROM paid_on)::int = $1
                 GROUP BY 1
             ) p ON p.month = gs.month
             LEFT JOIN (
                 SELECT EXTRACT(MONTH FROM paid_on)::int AS month,
                        SUM(amount_cents) AS total
                 FROM costs
                 WHERE EXTRACT(YEAR FROM paid_on)::int = $1
                 GROUP BY 1
             ) c ON c.month = gs.month
             ORDER BY gs.month",
        )
        .bind(year)
        .fetch_all(pool)
        .await
    }

    /// The most recent payments and costs merged into one list, newest
    /// first. Payments are labelled with the student's name, costs with
    /// their description.
    pub async fn recent_transactions(
        pool: &PgPool,
        limit: i64,
    ) -> Result<Vec<RecentTransaction>, sqlx::Error> {
        sqlx::query_as::<_, RecentTransaction>(
            "SELECT kind, id, paid_on, amount_cents, label FROM (
                 SELECT 'payment' AS kind, p.id, p.paid_on, p.amount_cents,
                        s.name AS label
                 FROM payments p
                 JOIN students s ON s.id = p.student_id
                 UNION ALL
                 SELECT 'cost' AS kind, c.id, c.paid_on, c.amount_cents,
                        c.description AS label
                 FROM costs c
             ) tx
             ORDER BY paid_on DESC
             LIMIT $1",
        )
        .bind(limit)
        .fetch_all(pool)
        .await
    }
}
