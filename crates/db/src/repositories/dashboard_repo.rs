//! Aggregate count queries for the dean dashboard.
//!
//! Four independent counts, recomputed on every request. No caching by
//! design; the row counts involved are small.

use academe_core::decisions::{DECISION_FIRST_WARNING, DECISION_SECOND_WARNING};
use academe_core::meetings::MEETING_COMPLETED;
use academe_core::plans::{PLAN_APPROVED, PLAN_SUBMITTED};
use serde::Serialize;
use sqlx::PgPool;

/// The dean dashboard stat block.
#[derive(Debug, Clone, Serialize)]
pub struct DeanDashboardStats {
    /// Warning-type decisions on record.
    pub pending_decisions: i64,
    /// Plans awaiting dean review.
    pub plans_to_review: i64,
    /// Completed meetings missing a dean signature.
    pub meetings_to_sign: i64,
    /// Plans already approved.
    pub approved_plans: i64,
}

/// Provides the dashboard aggregation queries.
pub struct DashboardRepo;

impl DashboardRepo {
    /// Compute all four dashboard counts.
    pub async fn stats(pool: &PgPool) -> Result<DeanDashboardStats, sqlx::Error> {
        let (pending_decisions,): (i64,) = sqlx::query_as(
            "SELECT COUNT(*) FROM academic_decisions WHERE decision_type IN ($1, $2)",
        )
        .bind(DECISION_FIRST_WARNING)
        .bind(DECISION_SECOND_WARNING)
        .fetch_one(pool)
        .await?;

        let (plans_to_review,): (i64,) =
            sqlx::query_as("SELECT COUNT(*) FROM study_plans WHERE submission_status = $1")
                .bind(PLAN_SUBMITTED)
                .fetch_one(pool)
                .await?;

        let (meetings_to_sign,): (i64,) = sqlx::query_as(
            "SELECT COUNT(*) FROM meetings WHERE status = $1 AND signed_by_dean = false",
        )
        .bind(MEETING_COMPLETED)
        .fetch_one(pool)
        .await?;

        let (approved_plans,): (i64,) =
            sqlx::query_as("SELECT COUNT(*) FROM study_plans WHERE submission_status = $1")
                .bind(PLAN_APPROVED)
                .fetch_one(pool)
                .await?;

        Ok(DeanDashboardStats {
            pending_decisions,
            plans_to_review,
            meetings_to_sign,
            approved_plans,
        })
    }
}
