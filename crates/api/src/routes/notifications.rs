//! Route definitions for the derived-notification feed.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::notifications;
use crate::state::AppState;

/// Notification routes mounted at `/notifications`.
///
/// ```text
/// GET    /                  -> list_notifications
/// POST   /{id}/dismiss      -> dismiss_notification
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(notifications::list_notifications))
        .route("/{id}/dismiss", post(notifications::dismiss_notification))
}
