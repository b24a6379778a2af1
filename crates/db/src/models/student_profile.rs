//! Student profile model (GPA and department, one row per student user).

use academe_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// A row from the `student_profiles` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct StudentProfile {
    pub id: DbId,
    pub user_id: DbId,
    pub gpa: Option<f64>,
    pub department: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating or replacing a student profile.
pub struct UpsertStudentProfile {
    pub user_id: DbId,
    pub gpa: Option<f64>,
    pub department: Option<String>,
}
