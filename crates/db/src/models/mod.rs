//! Domain model structs and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` + `Serialize` entity struct matching the database row
//! - A `Deserialize` create DTO for inserts (where the API creates rows)
//! - A `Deserialize` update DTO (all `Option` fields) for patches

pub mod activity;
pub mod decision;
pub mod meeting;
pub mod role;
pub mod schedule;
pub mod session;
pub mod student_profile;
pub mod study_plan;
pub mod user;
