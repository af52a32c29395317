//! Route definitions for the `/payments` resource.

use axum::routing::{delete, get};
use axum::Router;

use crate::handlers::payments;
use crate::state::AppState;

/// Payment routes mounted at `/payments`.
///
/// ```text
/// GET    /          -> list_payments
/// POST   /          -> create_payment
/// DELETE /{id}      -> delete_payment
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(payments::list_payments).post(payments::create_payment),
        )
        .route("/{id}", delete(payments::delete_payment))
}
