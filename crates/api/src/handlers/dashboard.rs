//! Handlers for the dashboard aggregation endpoints.
//!
//! Everything here is a read-only roll-up of stored records; the client
//! renders the numbers (and the annual chart) however it likes.

use axum::extract::{Query, State};
use axum::response::IntoResponse;
use axum::Json;
use barre_core::types::DbId;
use barre_db::models::dashboard::RecentTransaction;
use barre_db::repositories::{ClassSessionRepo, DashboardRepo};
use chrono::{Datelike, Utc};
use serde::{Deserialize, Serialize};

use crate::error::AppResult;
use crate::response::DataResponse;
use crate::state::AppState;

/// Monthly fee in cents applied when a student has neither a custom price
/// nor a plan.
const DEFAULT_MONTHLY_FEE_CENTS: i64 = 2500;

/// How many classes the occupancy ranking shows.
const TOP_CLASSES_LIMIT: usize = 5;

/// How many recent payments/costs the activity list shows.
const RECENT_TRANSACTIONS_LIMIT: i64 = 5;

// ---------------------------------------------------------------------------
// Response types
// ---------------------------------------------------------------------------

/// Top-level dashboard summary payload.
#[derive(Debug, Serialize)]
pub struct DashboardSummary {
    pub active_students: i64,
    /// Payment income for the current calendar month, in cents.
    pub monthly_income_cents: i64,
    /// Outstanding collections for the current year, in cents.
    pub pending_collections_cents: i64,
    /// Enrollment over capacity across all sessions, as a percentage.
    pub average_occupancy_pct: f64,
    pub top_classes: Vec<TopClassItem>,
    pub recent_transactions: Vec<RecentTransaction>,
}

/// A single class row in the occupancy ranking.
#[derive(Debug, Serialize)]
pub struct TopClassItem {
    pub session_id: DbId,
    pub discipline_name: String,
    pub enrolled: i64,
    pub capacity: i32,
    pub occupancy_pct: f64,
}

/// Query params for `GET /dashboard/finance/monthly`.
#[derive(Debug, Deserialize)]
pub struct MonthlyFinanceQuery {
    /// Calendar year; defaults to the current year.
    pub year: Option<i32>,
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// GET /api/v1/dashboard/summary
pub async fn summary(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let now = Utc::now();
    let year = now.year();
    let month = now.month() as i32;

    let active_students = DashboardRepo::active_student_count(&state.pool).await?;
    let monthly_income_cents =
        DashboardRepo::income_cents_for_month(&state.pool, year, month).await?;
    let pending_collections_cents =
        DashboardRepo::pending_collections_cents(&state.pool, year, DEFAULT_MONTHLY_FEE_CENTS)
            .await?;

    let totals = DashboardRepo::occupancy_totals(&state.pool).await?;
    let average_occupancy_pct = if totals.capacity > 0 {
        totals.enrolled as f64 / totals.capacity as f64 * 100.0
    } else {
        0.0
    };

    let entries = ClassSessionRepo::list_schedule(&state.pool).await?;
    let mut top_classes: Vec<TopClassItem> = entries
        .iter()
        .map(|entry| {
            let enrolled = entry.student_ids.len() as i64;
            let occupancy_pct = if entry.capacity > 0 {
                enrolled as f64 / f64::from(entry.capacity) * 100.0
            } else {
                0.0
            };
            TopClassItem {
                session_id: entry.id,
                discipline_name: entry.discipline_name.clone(),
                enrolled,
                capacity: entry.capacity,
                occupancy_pct,
            }
        })
        .collect();
    top_classes.sort_by(|a, b| {
        b.occupancy_pct
            .partial_cmp(&a.occupancy_pct)
            .unwrap_or(std::cmp::Ordering::Equal)
    });
    top_classes.truncate(TOP_CLASSES_LIMIT);

    let recent_transactions =
        DashboardRepo::recent_transactions(&state.pool, RECENT_TRANSACTIONS_LIMIT).await?;

    Ok(Json(DataResponse {
        data: DashboardSummary {
            active_students,
            monthly_income_cents,
            pending_collections_cents,
            average_occupancy_pct,
            top_classes,
            recent_transactions,
        },
    }))
}

/// GET /api/v1/dashboard/finance/monthly
///
/// Twelve income/cost totals for the requested year, in month order.
pub async fn monthly_finance(
    State(state): State<AppState>,
    Query(params): Query<MonthlyFinanceQuery>,
) -> AppResult<impl IntoResponse> {
    let year = params.year.unwrap_or_else(|| Utc::now().year());

    let months = DashboardRepo::monthly_finance(&state.pool, year).await?;

    Ok(Json(DataResponse { data: months }))
}
