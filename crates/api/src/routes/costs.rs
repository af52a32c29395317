//! Route definitions for the `/costs` resource.

use axum::routing::{delete, get};
use axum::Router;

use crate::handlers::costs;
use crate::state::AppState;

/// Cost routes mounted at `/costs`.
///
/// ```text
/// GET    /          -> list_costs
/// POST   /          -> create_cost
/// DELETE /{id}      -> delete_cost
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(costs::list_costs).post(costs::create_cost))
        .route("/{id}", delete(costs::delete_cost))
}
