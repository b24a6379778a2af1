//! Repository for the `study_plans` table.
//!
//! Non-staff callers only ever see their own plans, so most read paths take
//! an optional `owner` filter: `Some(user_id)` scopes the query, `None`
//! (staff) sees everything.

use academe_core::types::DbId;
use sqlx::PgPool;

use crate::models::study_plan::{CreateStudyPlan, StudyPlan, UpdateStudyPlan};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, teacher_id, subject_name, instructor_name, semester, \
                        submission_status, submitted_at, students_count, plan_content, \
                        progress_percentage, created_at, updated_at";

/// Provides CRUD operations for study plans.
pub struct StudyPlanRepo;

impl StudyPlanRepo {
    /// Insert a new plan owned by `teacher_id`, returning the created row.
    pub async fn create(
        pool: &PgPool,
        teacher_id: DbId,
        input: &CreateStudyPlan,
    ) -> Result<StudyPlan, sqlx::Error> {
        let query = format!(
            "INSERT INTO study_plans
                (teacher_id, subject_name, instructor_name, semester, submission_status,
                 submitted_at, students_count, plan_content, progress_percentage)
             VALUES ($1, $2, $3, $4, COALESCE($5, 'not_submitted'), $6, $7, $8, $9)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, StudyPlan>(&query)
            .bind(teacher_id)
            .bind(&input.subject_name)
            .bind(&input.instructor_name)
            .bind(&input.semester)
            .bind(&input.submission_status)
            .bind(input.submitted_at)
            .bind(input.students_count)
            .bind(&input.plan_content)
            .bind(input.progress_percentage)
            .fetch_one(pool)
            .await
    }

    /// Find a plan by ID, optionally scoped to an owner.
    pub async fn find_by_id(
        pool: &PgPool,
        id: DbId,
        owner: Option<DbId>,
    ) -> Result<Option<StudyPlan>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM study_plans
             WHERE id = $1 AND ($2::BIGINT IS NULL OR teacher_id = $2)"
        );
        sqlx::query_as::<_, StudyPlan>(&query)
            .bind(id)
            .bind(owner)
            .fetch_optional(pool)
            .await
    }

    /// List plans, newest first, optionally scoped to an owner.
    pub async fn list(pool: &PgPool, owner: Option<DbId>) -> Result<Vec<StudyPlan>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM study_plans
             WHERE $1::BIGINT IS NULL OR teacher_id = $1
             ORDER BY created_at DESC"
        );
        sqlx::query_as::<_, StudyPlan>(&query)
            .bind(owner)
            .fetch_all(pool)
            .await
    }

    /// Update a plan. Only non-`None` fields are applied; the owner never
    /// changes. Returns `None` when the row is absent or outside the scope.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        owner: Option<DbId>,
        input: &UpdateStudyPlan,
    ) -> Result<Option<StudyPlan>, sqlx::Error> {
        let query = format!(
            "UPDATE study_plans SET
                subject_name = COALESCE($3, subject_name),
                instructor_name = COALESCE($4, instructor_name),
                semester = COALESCE($5, semester),
                submission_status = COALESCE($6, submission_status),
                submitted_at = COALESCE($7, submitted_at),
                students_count = COALESCE($8, students_count),
                plan_content = COALESCE($9, plan_content),
                progress_percentage = COALESCE($10, progress_percentage),
                updated_at = NOW()
             WHERE id = $1 AND ($2::BIGINT IS NULL OR teacher_id = $2)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, StudyPlan>(&query)
            .bind(id)
            .bind(owner)
            .bind(&input.subject_name)
            .bind(&input.instructor_name)
            .bind(&input.semester)
            .bind(&input.submission_status)
            .bind(input.submitted_at)
            .bind(input.students_count)
            .bind(&input.plan_content)
            .bind(input.progress_percentage)
            .fetch_optional(pool)
            .await
    }

    /// Delete a plan, optionally scoped to an owner. Returns `true` if a
    /// row was removed.
    pub async fn delete(
        pool: &PgPool,
        id: DbId,
        owner: Option<DbId>,
    ) -> Result<bool, sqlx::Error> {
        let result = sqlx::query(
            "DELETE FROM study_plans WHERE id = $1 AND ($2::BIGINT IS NULL OR teacher_id = $2)",
        )
        .bind(id)
        .bind(owner)
        .execute(pool)
        .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Set a plan's submission status, returning the updated row.
    pub async fn set_status(
        pool: &PgPool,
        id: DbId,
        status: &str,
    ) -> Result<Option<StudyPlan>, sqlx::Error> {
        let query = format!(
            "UPDATE study_plans SET submission_status = $2, updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, StudyPlan>(&query)
            .bind(id)
            .bind(status)
            .fetch_optional(pool)
            .await
    }

    /// Return a plan for revision: set the status and overwrite the plan
    /// content with the reviewer's notes (destructive by design).
    pub async fn return_with_notes(
        pool: &PgPool,
        id: DbId,
        status: &str,
        notes: &str,
    ) -> Result<Option<StudyPlan>, sqlx::Error> {
        let query = format!(
            "UPDATE study_plans SET
                submission_status = $2,
                plan_content = $3,
                updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, StudyPlan>(&query)
            .bind(id)
            .bind(status)
            .bind(notes)
            .fetch_optional(pool)
            .await
    }
}
