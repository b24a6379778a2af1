//! Handlers for the `/schedules` resource.
//!
//! Course schedules are plain CRUD, open to any authenticated user.

use academe_core::error::CoreError;
use academe_core::schedules::is_valid_day;
use academe_core::types::DbId;
use academe_db::models::schedule::{CreateSchedule, Schedule, UpdateSchedule};
use academe_db::repositories::ScheduleRepo;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;

use crate::error::{AppError, AppResult};
use crate::middleware::rbac::RequireAuth;
use crate::state::AppState;

/// GET /api/v1/schedules
pub async fn list_schedules(
    RequireAuth(_user): RequireAuth,
    State(state): State<AppState>,
) -> AppResult<Json<Vec<Schedule>>> {
    let schedules = ScheduleRepo::list(&state.pool).await?;
    Ok(Json(schedules))
}

/// GET /api/v1/schedules/{id}
pub async fn get_schedule(
    RequireAuth(_user): RequireAuth,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Schedule>> {
    let schedule = ScheduleRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Schedule",
            id,
        }))?;
    Ok(Json(schedule))
}

/// POST /api/v1/schedules
pub async fn create_schedule(
    RequireAuth(user): RequireAuth,
    State(state): State<AppState>,
    Json(input): Json<CreateSchedule>,
) -> AppResult<(StatusCode, Json<Schedule>)> {
    ensure_valid_day(&input.day)?;

    let schedule = ScheduleRepo::create(&state.pool, &input).await?;

    tracing::info!(
        user_id = user.user_id,
        schedule_id = schedule.id,
        course = %schedule.course_name,
        "Schedule created"
    );

    Ok((StatusCode::CREATED, Json(schedule)))
}

/// PUT /api/v1/schedules/{id}
pub async fn update_schedule(
    RequireAuth(_user): RequireAuth,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateSchedule>,
) -> AppResult<Json<Schedule>> {
    if let Some(ref day) = input.day {
        ensure_valid_day(day)?;
    }

    let schedule = ScheduleRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Schedule",
            id,
        }))?;
    Ok(Json(schedule))
}

/// DELETE /api/v1/schedules/{id}
pub async fn delete_schedule(
    RequireAuth(_user): RequireAuth,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    let deleted = ScheduleRepo::delete(&state.pool, id).await?;
    if deleted {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound {
            entity: "Schedule",
            id,
        }))
    }
}

/// Reject day values outside Monday..Sunday.
fn ensure_valid_day(day: &str) -> AppResult<()> {
    if !is_valid_day(day) {
        return Err(AppError::Core(CoreError::Validation(format!(
            "Invalid day of week: {day}"
        ))));
    }
    Ok(())
}
