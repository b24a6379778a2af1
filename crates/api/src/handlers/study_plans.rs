//! Handlers for the `/study-plans` resource.
//!
//! Reads are open to any authenticated user; writes require the teacher or
//! admin role (enforced by [`TeacherOrAdminOrReadOnly`]). Ownership is
//! always the authenticated caller: staff accounts operate on every plan,
//! everyone else only on their own -- a plan outside the caller's scope
//! answers 404, not 403, so plan ids are not probeable.

use academe_core::error::CoreError;
use academe_core::plans::{is_valid_submission_status, PLAN_SUBMITTED};
use academe_core::types::DbId;
use academe_db::models::study_plan::{CreateStudyPlan, StudyPlan, UpdateStudyPlan};
use academe_db::repositories::{StudyPlanRepo, UserRepo};
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use chrono::Utc;

use crate::error::{AppError, AppResult};
use crate::middleware::rbac::TeacherOrAdminOrReadOnly;
use crate::state::AppState;

/// GET /api/v1/study-plans
///
/// Staff users see all plans; non-staff only their own.
pub async fn list_study_plans(
    TeacherOrAdminOrReadOnly(user): TeacherOrAdminOrReadOnly,
    State(state): State<AppState>,
) -> AppResult<Json<Vec<StudyPlan>>> {
    let owner = owner_scope(&state, user.user_id).await?;
    let plans = StudyPlanRepo::list(&state.pool, owner).await?;
    Ok(Json(plans))
}

/// GET /api/v1/study-plans/{id}
pub async fn get_study_plan(
    TeacherOrAdminOrReadOnly(user): TeacherOrAdminOrReadOnly,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<StudyPlan>> {
    let owner = owner_scope(&state, user.user_id).await?;
    let plan = StudyPlanRepo::find_by_id(&state.pool, id, owner)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "StudyPlan",
            id,
        }))?;
    Ok(Json(plan))
}

/// POST /api/v1/study-plans
///
/// The persisted owner is always the authenticated caller; any owner value
/// in the request body is ignored (`CreateStudyPlan` has no owner field,
/// and unknown body fields are dropped on deserialization).
pub async fn create_study_plan(
    TeacherOrAdminOrReadOnly(user): TeacherOrAdminOrReadOnly,
    State(state): State<AppState>,
    Json(mut input): Json<CreateStudyPlan>,
) -> AppResult<(StatusCode, Json<StudyPlan>)> {
    if let Some(ref status) = input.submission_status {
        ensure_valid_status(status)?;
    }
    stamp_submission(input.submission_status.as_deref(), &mut input.submitted_at);

    let plan = StudyPlanRepo::create(&state.pool, user.user_id, &input).await?;

    tracing::info!(
        user_id = user.user_id,
        plan_id = plan.id,
        subject = %plan.subject_name,
        "Study plan created"
    );

    Ok((StatusCode::CREATED, Json(plan)))
}

/// PUT /api/v1/study-plans/{id}
pub async fn update_study_plan(
    TeacherOrAdminOrReadOnly(user): TeacherOrAdminOrReadOnly,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(mut input): Json<UpdateStudyPlan>,
) -> AppResult<Json<StudyPlan>> {
    if let Some(ref status) = input.submission_status {
        ensure_valid_status(status)?;
    }
    stamp_submission(input.submission_status.as_deref(), &mut input.submitted_at);

    let owner = owner_scope(&state, user.user_id).await?;
    let plan = StudyPlanRepo::update(&state.pool, id, owner, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "StudyPlan",
            id,
        }))?;
    Ok(Json(plan))
}

/// DELETE /api/v1/study-plans/{id}
pub async fn delete_study_plan(
    TeacherOrAdminOrReadOnly(user): TeacherOrAdminOrReadOnly,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    let owner = owner_scope(&state, user.user_id).await?;
    let deleted = StudyPlanRepo::delete(&state.pool, id, owner).await?;
    if deleted {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound {
            entity: "StudyPlan",
            id,
        }))
    }
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Owner filter for the caller: `None` (see everything) for staff accounts,
/// `Some(user_id)` otherwise. Re-checked per request against the store.
async fn owner_scope(state: &AppState, user_id: DbId) -> AppResult<Option<DbId>> {
    let user = UserRepo::find_by_id(&state.pool, user_id)
        .await?
        .ok_or_else(|| AppError::Core(CoreError::Unauthorized("User no longer exists".into())))?;
    Ok(if user.is_staff { None } else { Some(user_id) })
}

/// Reject status values outside the submission vocabulary.
fn ensure_valid_status(status: &str) -> AppResult<()> {
    if !is_valid_submission_status(status) {
        return Err(AppError::Core(CoreError::Validation(format!(
            "Invalid submission status: {status}"
        ))));
    }
    Ok(())
}

/// Stamp `submitted_at` when a plan moves to `submitted` without a timestamp.
fn stamp_submission(
    status: Option<&str>,
    submitted_at: &mut Option<academe_core::types::Timestamp>,
) {
    if status == Some(PLAN_SUBMITTED) && submitted_at.is_none() {
        *submitted_at = Some(Utc::now());
    }
}
