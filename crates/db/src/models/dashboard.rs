//! Aggregate row types returned by the dashboard repository.

use barre_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// Studio-wide capacity and enrollment sums across all sessions.
#[derive(Debug, Clone, Copy, FromRow, Serialize)]
pub struct OccupancyTotals {
    pub capacity: i64,
    pub enrolled: i64,
}

/// Income and cost totals for one month of a year.
#[derive(Debug, Clone, Copy, FromRow, Serialize)]
pub struct FinanceMonth {
    /// 1-based month number.
    pub month: i32,
    pub income_cents: i64,
    pub cost_cents: i64,
}

/// A payment or cost row flattened for the recent-activity list.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct RecentTransaction {
    /// `"payment"` or `"cost"`.
    pub kind: String,
    pub id: DbId,
    pub paid_on: Timestamp,
    pub amount_cents: i64,
    /// Student name for payments, description for costs.
    pub label: String,
}
