//! Entity model structs and DTOs.
//!
//! Each submodule contains a `FromRow` + `Serialize` entity struct matching
//! the database row, plus `Deserialize` DTOs for the writes the resource
//! supports (create everywhere, an all-`Option` update DTO where rows are
//! patched in place).

pub mod class_session;
pub mod cost;
pub mod dashboard;
pub mod discipline;
pub mod payment;
pub mod plan;
pub mod student;
pub mod teacher;
