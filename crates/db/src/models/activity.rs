//! Recent activity log model.

use academe_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// A row from the `recent_activities` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct RecentActivity {
    pub id: DbId,
    pub description: String,
    pub timestamp: Timestamp,
    pub user_id: Option<DbId>,
}

/// An activity joined with the acting user's username, as shown on the
/// dean dashboard feed.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct ActivityFeedEntry {
    pub description: String,
    pub timestamp: Timestamp,
    /// Username of the acting user, or `null` for system entries.
    pub user: Option<String>,
}
