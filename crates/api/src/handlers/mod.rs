//! Request handlers, one module per resource.
//!
//! Handlers delegate to the repositories in `academe_db` and map errors
//! via [`crate::error::AppError`]. Role enforcement happens at the
//! extractor level (`crate::middleware::rbac`), so a handler body can
//! assume its caller already passed the route's permission predicate.

pub mod activities;
pub mod admin;
pub mod auth;
pub mod dean_dashboard;
pub mod decisions;
pub mod meetings;
pub mod plan_approval;
pub mod schedules;
pub mod study_plans;
