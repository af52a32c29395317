//! Route definition for the weekly schedule listing.

use axum::routing::get;
use axum::Router;

use crate::handlers::schedule;
use crate::state::AppState;

/// Schedule routes mounted at `/schedule`.
///
/// ```text
/// GET    /          -> list_schedule
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/", get(schedule::list_schedule))
}
