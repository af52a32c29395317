pub mod classes;
pub mod costs;
pub mod dashboard;
pub mod disciplines;
pub mod health;
pub mod notifications;
pub mod payments;
pub mod plans;
pub mod schedule;
pub mod students;
pub mod teachers;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /students                                   list, create
/// /students/{id}                              get, update, delete
///
/// /teachers                                   list, create
/// /teachers/{id}                              get, update, delete
///
/// /disciplines                                list, create
/// /disciplines/{id}                           get, update, delete
///
/// /plans                                      list, create
/// /plans/{id}                                 get, update, delete
///
/// /classes                                    list, create (placement-checked)
/// /classes/{id}                               get, update (placement-checked), delete
/// /classes/{id}/students/{student_id}         enrollment toggle (POST)
///
/// /schedule                                   weekly grid data (GET)
///
/// /notifications                              derived advisory feed (GET)
/// /notifications/{id}/dismiss                 record dismissal (POST)
///
/// /payments                                   list, create
/// /payments/{id}                              delete
///
/// /costs                                      list, create
/// /costs/{id}                                 delete
///
/// /dashboard/summary                          aggregated metrics (GET)
/// /dashboard/finance/monthly                  annual income/cost series (GET)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/students", students::router())
        .nest("/teachers", teachers::router())
        .nest("/disciplines", disciplines::router())
        .nest("/plans", plans::router())
        .nest("/classes", classes::router())
        .nest("/schedule", schedule::router())
        .nest("/notifications", notifications::router())
        .nest("/payments", payments::router())
        .nest("/costs", costs::router())
        .nest("/dashboard", dashboard::router())
}
