//! Study plan model and DTOs.

use academe_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `study_plans` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct StudyPlan {
    pub id: DbId,
    /// Owning teacher. Always set server-side from the authenticated caller.
    pub teacher_id: DbId,
    pub subject_name: String,
    pub instructor_name: Option<String>,
    pub semester: Option<String>,
    pub submission_status: String,
    pub submitted_at: Option<Timestamp>,
    pub students_count: i32,
    pub plan_content: Option<String>,
    pub progress_percentage: f64,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a study plan. The owner comes from the session, never
/// from the request body.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateStudyPlan {
    pub subject_name: String,
    pub instructor_name: Option<String>,
    pub semester: Option<String>,
    pub submission_status: Option<String>,
    pub submitted_at: Option<Timestamp>,
    #[serde(default)]
    pub students_count: i32,
    pub plan_content: Option<String>,
    #[serde(default)]
    pub progress_percentage: f64,
}

/// DTO for updating a study plan. All fields are optional.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateStudyPlan {
    pub subject_name: Option<String>,
    pub instructor_name: Option<String>,
    pub semester: Option<String>,
    pub submission_status: Option<String>,
    pub submitted_at: Option<Timestamp>,
    pub students_count: Option<i32>,
    pub plan_content: Option<String>,
    pub progress_percentage: Option<f64>,
}
