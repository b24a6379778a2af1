//! Handlers for the `/dean/plan-approval` resource.
//!
//! Two one-step transitions: approve a plan, or return it for revision.
//! Returning overwrites the plan content with the reviewer's notes --
//! destructive by design, the previous content is not kept.

use academe_core::error::CoreError;
use academe_core::plans::{PLAN_APPROVED, PLAN_NEEDS_REVISION};
use academe_core::types::DbId;
use academe_db::models::study_plan::StudyPlan;
use academe_db::repositories::{ActivityRepo, StudyPlanRepo};
use axum::extract::{Path, State};
use axum::Json;
use serde::{Deserialize, Serialize};

use crate::error::{AppError, AppResult};
use crate::middleware::rbac::RequireDean;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Request / response types
// ---------------------------------------------------------------------------

/// Request body for `POST /dean/plan-approval/{id}/return`.
#[derive(Debug, Deserialize)]
pub struct ReturnPlanRequest {
    pub notes: Option<String>,
}

/// Response body for the approve action.
#[derive(Debug, Serialize)]
pub struct ApproveResponse {
    pub status: &'static str,
}

/// Response body for the return action.
#[derive(Debug, Serialize)]
pub struct ReturnResponse {
    pub status: &'static str,
    pub notes: String,
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// GET /api/v1/dean/plan-approval
///
/// Every plan regardless of owner; the dean reviews across departments.
pub async fn list_plans(
    RequireDean(_dean): RequireDean,
    State(state): State<AppState>,
) -> AppResult<Json<Vec<StudyPlan>>> {
    let plans = StudyPlanRepo::list(&state.pool, None).await?;
    Ok(Json(plans))
}

/// GET /api/v1/dean/plan-approval/{id}
pub async fn get_plan(
    RequireDean(_dean): RequireDean,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<StudyPlan>> {
    let plan = StudyPlanRepo::find_by_id(&state.pool, id, None)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "StudyPlan",
            id,
        }))?;
    Ok(Json(plan))
}

/// POST /api/v1/dean/plan-approval/{id}/approve
pub async fn approve_plan(
    RequireDean(dean): RequireDean,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<ApproveResponse>> {
    let plan = StudyPlanRepo::set_status(&state.pool, id, PLAN_APPROVED)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "StudyPlan",
            id,
        }))?;

    tracing::info!(user_id = dean.user_id, plan_id = plan.id, "Study plan approved");
    record_activity(
        &state,
        &format!("Study plan '{}' approved", plan.subject_name),
        dean.user_id,
    )
    .await;

    Ok(Json(ApproveResponse { status: "approved" }))
}

/// POST /api/v1/dean/plan-approval/{id}/return
///
/// Send a plan back for revision with reviewer notes.
pub async fn return_plan(
    RequireDean(dean): RequireDean,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<ReturnPlanRequest>,
) -> AppResult<Json<ReturnResponse>> {
    let notes = input.notes.unwrap_or_default();

    let plan = StudyPlanRepo::return_with_notes(&state.pool, id, PLAN_NEEDS_REVISION, &notes)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "StudyPlan",
            id,
        }))?;

    tracing::info!(user_id = dean.user_id, plan_id = plan.id, "Study plan returned");
    record_activity(
        &state,
        &format!("Study plan '{}' returned for revision", plan.subject_name),
        dean.user_id,
    )
    .await;

    Ok(Json(ReturnResponse {
        status: "needs_revision",
        notes,
    }))
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Append to the activity log; log failures instead of failing the action.
async fn record_activity(state: &AppState, description: &str, user_id: DbId) {
    if let Err(e) = ActivityRepo::record(&state.pool, description, Some(user_id)).await {
        tracing::warn!(error = %e, "Failed to record activity");
    }
}
