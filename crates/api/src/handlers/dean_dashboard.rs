//! Handlers for the `/dean/dashboard` resource.
//!
//! Aggregate counts and the recent-activity feed. Both recompute per
//! request; nothing here is cached.

use academe_db::models::activity::ActivityFeedEntry;
use academe_db::repositories::{ActivityRepo, DashboardRepo};
use academe_db::repositories::dashboard_repo::DeanDashboardStats;
use axum::extract::State;
use axum::Json;

use crate::error::AppResult;
use crate::middleware::rbac::RequireDean;
use crate::state::AppState;

/// Feed length for the dashboard's recent-activity widget.
const FEED_LIMIT: i64 = 10;

/// GET /api/v1/dean/dashboard/stats
pub async fn stats(
    RequireDean(_dean): RequireDean,
    State(state): State<AppState>,
) -> AppResult<Json<DeanDashboardStats>> {
    let stats = DashboardRepo::stats(&state.pool).await?;
    Ok(Json(stats))
}

/// GET /api/v1/dean/dashboard/recent-activity
pub async fn recent_activity(
    RequireDean(_dean): RequireDean,
    State(state): State<AppState>,
) -> AppResult<Json<Vec<ActivityFeedEntry>>> {
    let entries = ActivityRepo::feed(&state.pool, FEED_LIMIT).await?;
    Ok(Json(entries))
}
