//! Route definitions for the `/recent-activities` resource.
//!
//! Deliberately read-only: the log is populated server-side.

use axum::routing::get;
use axum::Router;

use crate::handlers::activities;
use crate::state::AppState;

/// Routes mounted at `/recent-activities`. Any authenticated user.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(activities::list_activities))
        .route("/{id}", get(activities::get_activity))
}
