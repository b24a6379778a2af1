//! Academic decision model and DTOs.
//!
//! Decisions are immutable once issued; there is deliberately no update DTO.

use academe_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// A row from the `academic_decisions` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct AcademicDecision {
    pub id: DbId,
    pub student_id: DbId,
    pub decision_type: String,
    /// The issuing dean's user id.
    pub issued_by: DbId,
    pub issued_at: Timestamp,
    pub notes: Option<String>,
}

/// A decision joined with student and issuer usernames for list views.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct DecisionWithNames {
    pub id: DbId,
    pub student_id: DbId,
    pub student_username: String,
    pub decision_type: String,
    pub issued_by: DbId,
    pub issued_by_username: String,
    pub issued_at: Timestamp,
    pub notes: Option<String>,
}

/// DTO for issuing a decision.
pub struct CreateDecision {
    pub student_id: DbId,
    pub decision_type: String,
    pub issued_by: DbId,
    pub notes: Option<String>,
}

/// Per-student decision tally used by the attention scan.
#[derive(Debug, Clone, FromRow)]
pub struct DecisionCount {
    pub student_id: DbId,
    pub decisions: i64,
}
