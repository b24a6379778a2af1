//! Repository for the `academic_decisions` table.
//!
//! Rows are write-once: there is no update or delete method on purpose.

use academe_core::types::DbId;
use sqlx::PgPool;

use crate::models::decision::{
    AcademicDecision, CreateDecision, DecisionCount, DecisionWithNames,
};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, student_id, decision_type, issued_by, issued_at, notes";

/// Joined column list for list/detail views with usernames resolved.
const NAMED_COLUMNS: &str = "d.id, d.student_id, s.username AS student_username, \
    d.decision_type, d.issued_by, i.username AS issued_by_username, d.issued_at, d.notes";

/// Provides write-once and read operations for academic decisions.
pub struct DecisionRepo;

impl DecisionRepo {
    /// Insert a new decision, returning the created row.
    pub async fn create(
        pool: &PgPool,
        input: &CreateDecision,
    ) -> Result<AcademicDecision, sqlx::Error> {
        let query = format!(
            "INSERT INTO academic_decisions (student_id, decision_type, issued_by, notes)
             VALUES ($1, $2, $3, $4)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, AcademicDecision>(&query)
            .bind(input.student_id)
            .bind(&input.decision_type)
            .bind(input.issued_by)
            .bind(&input.notes)
            .fetch_one(pool)
            .await
    }

    /// Find a decision by ID with student and issuer usernames resolved.
    pub async fn find_with_names(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<DecisionWithNames>, sqlx::Error> {
        let query = format!(
            "SELECT {NAMED_COLUMNS}
             FROM academic_decisions d
             JOIN users s ON s.id = d.student_id
             JOIN users i ON i.id = d.issued_by
             WHERE d.id = $1"
        );
        sqlx::query_as::<_, DecisionWithNames>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all decisions, newest first, with usernames resolved.
    pub async fn list_with_names(pool: &PgPool) -> Result<Vec<DecisionWithNames>, sqlx::Error> {
        let query = format!(
            "SELECT {NAMED_COLUMNS}
             FROM academic_decisions d
             JOIN users s ON s.id = d.student_id
             JOIN users i ON i.id = d.issued_by
             ORDER BY d.issued_at DESC, d.id DESC"
        );
        sqlx::query_as::<_, DecisionWithNames>(&query)
            .fetch_all(pool)
            .await
    }

    /// Decision tallies grouped by student, for the attention scan.
    ///
    /// Students with no decisions have no row; callers treat absence as 0.
    pub async fn counts_by_student(pool: &PgPool) -> Result<Vec<DecisionCount>, sqlx::Error> {
        sqlx::query_as::<_, DecisionCount>(
            "SELECT student_id, COUNT(*) AS decisions
             FROM academic_decisions
             GROUP BY student_id",
        )
        .fetch_all(pool)
        .await
    }
}
