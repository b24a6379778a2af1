//! Handlers for the `/meetings` and `/dean/meetings` resources.
//!
//! Both mounts share the same CRUD logic; they differ only in the role
//! extractor on the route. The update path carries the dean sign-off rule:
//! marking a meeting signed without an explicit signature derives one from
//! the caller's display name.

use academe_core::error::CoreError;
use academe_core::meetings::is_valid_meeting_status;
use academe_core::signing::{display_name, signature_on_update};
use academe_core::types::DbId;
use academe_db::models::meeting::{CreateMeeting, Meeting, UpdateMeeting};
use academe_db::repositories::{ActivityRepo, MeetingRepo, UserRepo};
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::middleware::rbac::{RequireAuth, RequireDean};
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Authenticated mount: /meetings
// ---------------------------------------------------------------------------

/// GET /api/v1/meetings
pub async fn list_meetings(
    RequireAuth(_user): RequireAuth,
    State(state): State<AppState>,
) -> AppResult<Json<Vec<Meeting>>> {
    let meetings = MeetingRepo::list(&state.pool).await?;
    Ok(Json(meetings))
}

/// GET /api/v1/meetings/{id}
pub async fn get_meeting(
    RequireAuth(_user): RequireAuth,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Meeting>> {
    find_meeting(&state, id).await.map(Json)
}

/// POST /api/v1/meetings
pub async fn create_meeting(
    RequireAuth(user): RequireAuth,
    State(state): State<AppState>,
    Json(input): Json<CreateMeeting>,
) -> AppResult<(StatusCode, Json<Meeting>)> {
    create_inner(&state, &user, input).await
}

/// PUT /api/v1/meetings/{id}
pub async fn update_meeting(
    RequireAuth(user): RequireAuth,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateMeeting>,
) -> AppResult<Json<Meeting>> {
    update_inner(&state, &user, id, input).await
}

/// DELETE /api/v1/meetings/{id}
pub async fn delete_meeting(
    RequireAuth(_user): RequireAuth,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    delete_inner(&state, id).await
}

// ---------------------------------------------------------------------------
// Dean mount: /dean/meetings
// ---------------------------------------------------------------------------

/// GET /api/v1/dean/meetings
pub async fn dean_list_meetings(
    RequireDean(_dean): RequireDean,
    State(state): State<AppState>,
) -> AppResult<Json<Vec<Meeting>>> {
    let meetings = MeetingRepo::list(&state.pool).await?;
    Ok(Json(meetings))
}

/// GET /api/v1/dean/meetings/{id}
pub async fn dean_get_meeting(
    RequireDean(_dean): RequireDean,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Meeting>> {
    find_meeting(&state, id).await.map(Json)
}

/// POST /api/v1/dean/meetings
pub async fn dean_create_meeting(
    RequireDean(dean): RequireDean,
    State(state): State<AppState>,
    Json(input): Json<CreateMeeting>,
) -> AppResult<(StatusCode, Json<Meeting>)> {
    create_inner(&state, &dean, input).await
}

/// PUT /api/v1/dean/meetings/{id}
pub async fn dean_update_meeting(
    RequireDean(dean): RequireDean,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateMeeting>,
) -> AppResult<Json<Meeting>> {
    update_inner(&state, &dean, id, input).await
}

/// DELETE /api/v1/dean/meetings/{id}
pub async fn dean_delete_meeting(
    RequireDean(_dean): RequireDean,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    delete_inner(&state, id).await
}

// ---------------------------------------------------------------------------
// Shared logic
// ---------------------------------------------------------------------------

async fn find_meeting(state: &AppState, id: DbId) -> AppResult<Meeting> {
    MeetingRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Meeting",
            id,
        }))
}

async fn create_inner(
    state: &AppState,
    actor: &AuthUser,
    input: CreateMeeting,
) -> AppResult<(StatusCode, Json<Meeting>)> {
    if let Some(ref status) = input.status {
        ensure_valid_status(status)?;
    }

    let meeting = MeetingRepo::create(&state.pool, &input).await?;

    tracing::info!(
        user_id = actor.user_id,
        meeting_id = meeting.id,
        title = %meeting.title,
        "Meeting created"
    );

    Ok((StatusCode::CREATED, Json(meeting)))
}

/// Apply a meeting update, enforcing the sign-off rule.
///
/// The signature derivation fires only on the false -> true transition of
/// `signedByDean` with no explicit signature in the payload; the signer's
/// display name is looked up at that moment. Explicit signatures always win.
async fn update_inner(
    state: &AppState,
    actor: &AuthUser,
    id: DbId,
    input: UpdateMeeting,
) -> AppResult<Json<Meeting>> {
    if let Some(ref status) = input.status {
        ensure_valid_status(status)?;
    }

    let existing = find_meeting(state, id).await?;

    let signing_now = input.signed_by_dean == Some(true) && !existing.signed_by_dean;

    // Resolve the signer's display name only when the autofill can fire.
    let signer_name = if signing_now && input.signature.is_none() {
        let caller = UserRepo::find_by_id(&state.pool, actor.user_id)
            .await?
            .ok_or_else(|| {
                AppError::Core(CoreError::Unauthorized("User no longer exists".into()))
            })?;
        display_name(
            caller.first_name.as_deref(),
            caller.last_name.as_deref(),
            &caller.username,
        )
    } else {
        String::new()
    };

    let signature = signature_on_update(
        existing.signed_by_dean,
        input.signed_by_dean,
        input.signature.as_deref(),
        &signer_name,
    );

    let meeting = MeetingRepo::update(&state.pool, id, &input, signature.as_deref())
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Meeting",
            id,
        }))?;

    if signing_now {
        tracing::info!(
            user_id = actor.user_id,
            meeting_id = meeting.id,
            signature = %meeting.signature.as_deref().unwrap_or_default(),
            "Meeting signed"
        );
        record_activity(
            state,
            &format!("Meeting '{}' signed by dean", meeting.title),
            actor.user_id,
        )
        .await;
    }

    Ok(Json(meeting))
}

async fn delete_inner(state: &AppState, id: DbId) -> AppResult<StatusCode> {
    let deleted = MeetingRepo::delete(&state.pool, id).await?;
    if deleted {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound {
            entity: "Meeting",
            id,
        }))
    }
}

/// Reject status values outside the upcoming/completed vocabulary.
fn ensure_valid_status(status: &str) -> AppResult<()> {
    if !is_valid_meeting_status(status) {
        return Err(AppError::Core(CoreError::Validation(format!(
            "Invalid meeting status: {status}"
        ))));
    }
    Ok(())
}

/// Append to the activity log; log failures instead of failing the action.
async fn record_activity(state: &AppState, description: &str, user_id: DbId) {
    if let Err(e) = ActivityRepo::record(&state.pool, description, Some(user_id)).await {
        tracing::warn!(error = %e, "Failed to record activity");
    }
}
