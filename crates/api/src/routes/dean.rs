//! Route definitions for the dean-privileged `/dean` surface.
//!
//! Every handler behind this mount uses the `RequireDean` extractor, so a
//! non-dean caller gets 403 on all of these regardless of method.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::{dean_dashboard, decisions, meetings, plan_approval};
use crate::state::AppState;

/// Routes mounted at `/dean`.
///
/// ```text
/// /meetings                         list, create
/// /meetings/{id}                    get, update, delete
/// /academic-decisions               list
/// /academic-decisions/{id}          get
/// /academic-decisions/students      attention scan (GET)
/// /academic-decisions/issue         issue decision (POST)
/// /plan-approval                    list
/// /plan-approval/{id}               get
/// /plan-approval/{id}/approve       approve (POST)
/// /plan-approval/{id}/return        return for revision (POST)
/// /dashboard/stats                  aggregate counts (GET)
/// /dashboard/recent-activity        newest 10 activities (GET)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        // Dean meeting management (same handlers, dean-gated).
        .route(
            "/meetings",
            get(meetings::dean_list_meetings).post(meetings::dean_create_meeting),
        )
        .route(
            "/meetings/{id}",
            get(meetings::dean_get_meeting)
                .put(meetings::dean_update_meeting)
                .delete(meetings::dean_delete_meeting),
        )
        // Academic decisions: immutable records, so no update/delete routes.
        .route("/academic-decisions", get(decisions::list_decisions))
        .route(
            "/academic-decisions/students",
            get(decisions::students_needing_attention),
        )
        .route("/academic-decisions/issue", post(decisions::issue_decision))
        .route("/academic-decisions/{id}", get(decisions::get_decision))
        // Plan approval workflow.
        .route("/plan-approval", get(plan_approval::list_plans))
        .route("/plan-approval/{id}", get(plan_approval::get_plan))
        .route(
            "/plan-approval/{id}/approve",
            post(plan_approval::approve_plan),
        )
        .route(
            "/plan-approval/{id}/return",
            post(plan_approval::return_plan),
        )
        // Dashboard aggregates.
        .route("/dashboard/stats", get(dean_dashboard::stats))
        .route(
            "/dashboard/recent-activity",
            get(dean_dashboard::recent_activity),
        )
}
