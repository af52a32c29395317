//! Route definitions for the `/disciplines` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::disciplines;
use crate::state::AppState;

/// Discipline routes mounted at `/disciplines`.
///
/// ```text
/// GET    /          -> list_disciplines
/// POST   /          -> create_discipline
/// GET    /{id}      -> get_discipline
/// PUT    /{id}      -> update_discipline
/// DELETE /{id}      -> delete_discipline
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(disciplines::list_disciplines).post(disciplines::create_discipline),
        )
        .route(
            "/{id}",
            get(disciplines::get_discipline)
                .put(disciplines::update_discipline)
                .delete(disciplines::delete_discipline),
        )
}
