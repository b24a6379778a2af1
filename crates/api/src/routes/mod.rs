pub mod activities;
pub mod admin;
pub mod auth;
pub mod dean;
pub mod health;
pub mod meetings;
pub mod schedules;
pub mod study_plans;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /auth/login                                      login (public)
/// /auth/refresh                                    refresh (public)
/// /auth/logout                                     logout (requires auth)
///
/// /admin/users                                     list, create (admin only)
/// /admin/users/{id}                                get, update, deactivate
/// /admin/users/{id}/reset-password                 reset password
///
/// /schedules                                       list, create (any authed)
/// /schedules/{id}                                  get, update, delete
///
/// /meetings                                        list, create (any authed)
/// /meetings/{id}                                   get, update, delete
///
/// /study-plans                                     list, create (writes: teacher/admin)
/// /study-plans/{id}                                get, update, delete
///
/// /recent-activities                               list (read-only, any authed)
/// /recent-activities/{id}                          get
///
/// /dean/meetings                                   list, create (dean only)
/// /dean/meetings/{id}                              get, update, delete
///
/// /dean/academic-decisions                         list (dean only)
/// /dean/academic-decisions/{id}                    get
/// /dean/academic-decisions/students                attention scan (GET)
/// /dean/academic-decisions/issue                   issue decision (POST)
///
/// /dean/plan-approval                              list (dean only)
/// /dean/plan-approval/{id}                         get
/// /dean/plan-approval/{id}/approve                 approve (POST)
/// /dean/plan-approval/{id}/return                  return for revision (POST)
///
/// /dean/dashboard/stats                            aggregate counts (GET)
/// /dean/dashboard/recent-activity                  newest 10 activities (GET)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        // Authentication routes (login, refresh, logout).
        .nest("/auth", auth::router())
        // Admin routes (user management).
        .nest("/admin", admin::router())
        // Course schedules.
        .nest("/schedules", schedules::router())
        // Council meetings (any authenticated user).
        .nest("/meetings", meetings::router())
        // Study plans (ownership-scoped).
        .nest("/study-plans", study_plans::router())
        // Read-only activity log.
        .nest("/recent-activities", activities::router())
        // Dean-privileged surface.
        .nest("/dean", dean::router())
}
