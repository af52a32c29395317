//! HTTP handler modules, one per resource.

pub mod classes;
pub mod costs;
pub mod dashboard;
pub mod disciplines;
pub mod notifications;
pub mod payments;
pub mod plans;
pub mod schedule;
pub mod students;
pub mod teachers;
