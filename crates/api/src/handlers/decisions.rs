//! Handlers for the `/dean/academic-decisions` resource.
//!
//! Decisions are immutable once issued, so the surface is list, retrieve,
//! the issue action, and the students-needing-attention scan. All routes
//! require the dean role.

use std::collections::HashMap;

use academe_core::attention::{effective_gpa, needs_attention, AttentionCriteria, StudentStanding};
use academe_core::decisions::is_valid_decision_type;
use academe_core::error::CoreError;
use academe_core::signing::display_name;
use academe_core::types::DbId;
use academe_db::models::decision::{CreateDecision, DecisionWithNames};
use academe_db::repositories::{ActivityRepo, DecisionRepo, UserRepo};
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use serde::{Deserialize, Serialize};

use crate::error::{AppError, AppResult};
use crate::middleware::rbac::RequireDean;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Request / response types
// ---------------------------------------------------------------------------

/// Request body for `POST /dean/academic-decisions/issue`.
#[derive(Debug, Deserialize)]
pub struct IssueDecisionRequest {
    /// Target student's user id.
    pub student: DbId,
    pub decision_type: String,
    pub notes: Option<String>,
}

/// Query params for `GET /dean/academic-decisions/students`.
///
/// All three filters are independently optional.
#[derive(Debug, Deserialize)]
pub struct AttentionQuery {
    /// Keep students with effective GPA strictly below this value.
    pub gpa: Option<f64>,
    /// Keep students with exactly this many prior decisions.
    pub warnings: Option<i64>,
    /// Keep students in exactly this department.
    pub department: Option<String>,
}

/// One student in the attention scan result.
#[derive(Debug, Serialize)]
pub struct StudentAttentionItem {
    pub id: DbId,
    pub full_name: String,
    /// The student's username, which doubles as their student id.
    pub student_id: String,
    /// Effective GPA (0.0 when no profile exists).
    pub gpa: f64,
    pub previous_warnings: i64,
    pub department: Option<String>,
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// GET /api/v1/dean/academic-decisions
pub async fn list_decisions(
    RequireDean(_dean): RequireDean,
    State(state): State<AppState>,
) -> AppResult<Json<Vec<DecisionWithNames>>> {
    let decisions = DecisionRepo::list_with_names(&state.pool).await?;
    Ok(Json(decisions))
}

/// GET /api/v1/dean/academic-decisions/{id}
pub async fn get_decision(
    RequireDean(_dean): RequireDean,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<DecisionWithNames>> {
    let decision = DecisionRepo::find_with_names(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "AcademicDecision",
            id,
        }))?;
    Ok(Json(decision))
}

/// POST /api/v1/dean/academic-decisions/issue
///
/// Issue a decision against a student. 404 when the student id does not
/// exist; nothing is persisted in that case.
pub async fn issue_decision(
    RequireDean(dean): RequireDean,
    State(state): State<AppState>,
    Json(input): Json<IssueDecisionRequest>,
) -> AppResult<(StatusCode, Json<DecisionWithNames>)> {
    if !is_valid_decision_type(&input.decision_type) {
        return Err(AppError::Core(CoreError::Validation(format!(
            "Invalid decision type: {}",
            input.decision_type
        ))));
    }

    // Validate the target student before writing anything.
    let student = UserRepo::find_by_id(&state.pool, input.student)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Student",
            id: input.student,
        }))?;

    let create = CreateDecision {
        student_id: student.id,
        decision_type: input.decision_type,
        issued_by: dean.user_id,
        notes: input.notes,
    };
    let decision = DecisionRepo::create(&state.pool, &create).await?;

    tracing::info!(
        user_id = dean.user_id,
        student_id = student.id,
        decision_type = %decision.decision_type,
        "Academic decision issued"
    );
    record_activity(
        &state,
        &format!(
            "Decision '{}' issued against {}",
            decision.decision_type, student.username
        ),
        dean.user_id,
    )
    .await;

    let with_names = DecisionRepo::find_with_names(&state.pool, decision.id)
        .await?
        .ok_or_else(|| AppError::InternalError("Created decision vanished".into()))?;

    Ok((StatusCode::CREATED, Json(with_names)))
}

/// GET /api/v1/dean/academic-decisions/students
///
/// Scan all students and keep those matching the supplied criteria. A
/// linear scan over students plus one grouped tally of prior decisions;
/// class sizes keep this cheap.
pub async fn students_needing_attention(
    RequireDean(_dean): RequireDean,
    State(state): State<AppState>,
    Query(params): Query<AttentionQuery>,
) -> AppResult<Json<Vec<StudentAttentionItem>>> {
    let criteria = AttentionCriteria {
        gpa_below: params.gpa,
        warnings: params.warnings,
        department: params.department,
    };

    let students = UserRepo::list_students(&state.pool).await?;
    let tallies: HashMap<DbId, i64> = DecisionRepo::counts_by_student(&state.pool)
        .await?
        .into_iter()
        .map(|c| (c.student_id, c.decisions))
        .collect();

    let items: Vec<StudentAttentionItem> = students
        .into_iter()
        .filter_map(|s| {
            let prior_warnings = tallies.get(&s.id).copied().unwrap_or(0);
            // Profile department wins over the account's department.
            let department = s.profile_department.or(s.department);

            let standing = StudentStanding {
                gpa: s.gpa,
                prior_warnings,
                department: department.as_deref(),
            };
            if !needs_attention(&standing, &criteria) {
                return None;
            }

            Some(StudentAttentionItem {
                id: s.id,
                full_name: display_name(
                    s.first_name.as_deref(),
                    s.last_name.as_deref(),
                    &s.username,
                ),
                student_id: s.username,
                gpa: effective_gpa(s.gpa),
                previous_warnings: prior_warnings,
                department,
            })
        })
        .collect();

    Ok(Json(items))
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
