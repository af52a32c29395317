//! Route definitions for the `/classes` resource.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::classes;
use crate::state::AppState;

/// Class session routes mounted at `/classes`.
///
/// ```text
/// GET    /                              -> list_classes
/// POST   /                              -> create_class (placement-checked)
/// GET    /{id}                          -> get_class
/// PUT    /{id}                          -> update_class (placement-checked)
/// DELETE /{id}                          -> delete_class
/// POST   /{id}/students/{student_id}    -> toggle_enrollment
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(classes::list_classes).post(classes::create_class))
        .route(
            "/{id}",
            get(classes::get_class)
                .put(classes::update_class)
                .delete(classes::delete_class),
        )
        .route(
            "/{id}/students/{student_id}",
            post(classes::toggle_enrollment),
        )
}
