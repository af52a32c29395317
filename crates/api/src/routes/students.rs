//! Route definitions for the `/students` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::students;
use crate::state::AppState;

/// Student routes mounted at `/students`.
///
/// ```text
/// GET    /          -> list_students
/// POST   /          -> create_student
/// GET    /{id}      -> get_student
/// PUT    /{id}      -> update_student
/// DELETE /{id}      -> delete_student
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(students::list_students).post(students::create_student),
        )
        .route(
            "/{id}",
            get(students::get_student)
                .put(students::update_student)
                .delete(students::delete_student),
        )
}
