//! Route definitions for the dashboard aggregation endpoints.

use axum::routing::get;
use axum::Router;

use crate::handlers::dashboard;
use crate::state::AppState;

/// Dashboard routes mounted at `/dashboard`.
///
/// ```text
/// GET    /summary              -> summary
/// GET    /finance/monthly      -> monthly_finance
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/summary", get(dashboard::summary))
        .route("/finance/monthly", get(dashboard::monthly_finance))
}
