//! Repository for the `recent_activities` table.
//!
//! Activities are append-only: handlers record them as a side effect of
//! dean actions, and the API only ever reads them back.

use academe_core::types::DbId;
use sqlx::PgPool;

use crate::models::activity::{ActivityFeedEntry, RecentActivity};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, description, timestamp, user_id";

/// Provides append and read operations for the activity log.
pub struct ActivityRepo;

impl ActivityRepo {
    /// Append an activity entry. Failures are the caller's concern; most
    /// call sites log and continue rather than failing the parent action.
    pub async fn record(
        pool: &PgPool,
        description: &str,
        user_id: Option<DbId>,
    ) -> Result<RecentActivity, sqlx::Error> {
        let query = format!(
            "INSERT INTO recent_activities (description, user_id)
             VALUES ($1, $2)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, RecentActivity>(&query)
            .bind(description)
            .bind(user_id)
            .fetch_one(pool)
            .await
    }

    /// Find an activity entry by ID.
    pub async fn find_by_id(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<RecentActivity>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM recent_activities WHERE id = $1");
        sqlx::query_as::<_, RecentActivity>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all activity entries, newest first.
    pub async fn list(pool: &PgPool) -> Result<Vec<RecentActivity>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM recent_activities ORDER BY timestamp DESC");
        sqlx::query_as::<_, RecentActivity>(&query)
            .fetch_all(pool)
            .await
    }

    /// The newest `limit` entries joined with the acting user's username,
    /// for the dean dashboard feed.
    pub async fn feed(pool: &PgPool, limit: i64) -> Result<Vec<ActivityFeedEntry>, sqlx::Error> {
        sqlx::query_as::<_, ActivityFeedEntry>(
            "SELECT a.description, a.timestamp, u.username AS \"user\"
             FROM recent_activities a
             LEFT JOIN users u ON u.id = a.user_id
             ORDER BY a.timestamp DESC
             LIMIT $1",
        )
        .bind(limit)
        .fetch_all(pool)
        .await
    }
}
