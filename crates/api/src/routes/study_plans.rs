//! Route definitions for the `/study-plans` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::study_plans;
use crate::state::AppState;

/// Routes mounted at `/study-plans`.
///
/// Reads are open to any authenticated user; writes require the teacher or
/// admin role (enforced by the `TeacherOrAdminOrReadOnly` extractor).
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(study_plans::list_study_plans).post(study_plans::create_study_plan),
        )
        .route(
            "/{id}",
            get(study_plans::get_study_plan)
                .put(study_plans::update_study_plan)
                .delete(study_plans::delete_study_plan),
        )
}
