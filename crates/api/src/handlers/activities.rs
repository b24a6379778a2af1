//! Handlers for the `/recent-activities` resource.
//!
//! The activity log is read-only through the API: no create, update, or
//! delete route exists. Entries are appended server-side by other handlers.

use academe_core::error::CoreError;
use academe_core::types::DbId;
use academe_db::models::activity::RecentActivity;
use academe_db::repositories::ActivityRepo;
use axum::extract::{Path, State};
use axum::Json;

use crate::error::{AppError, AppResult};
use crate::middleware::rbac::RequireAuth;
use crate::state::AppState;

/// GET /api/v1/recent-activities
pub async fn list_activities(
    RequireAuth(_user): RequireAuth,
    State(state): State<AppState>,
) -> AppResult<Json<Vec<RecentActivity>>> {
    let activities = ActivityRepo::list(&state.pool).await?;
    Ok(Json(activities))
}

/// GET /api/v1/recent-activities/{id}
pub async fn get_activity(
    RequireAuth(_user): RequireAuth,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<RecentActivity>> {
    let activity = ActivityRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "RecentActivity",
            id,
        }))?;
    Ok(Json(activity))
}
