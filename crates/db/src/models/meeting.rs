//! Council meeting model and DTOs.
//!
//! `signed_by_dean` keeps its historical `signedByDean` wire name; every
//! other field is snake_case on the wire.

use academe_core::types::{DbId, Timestamp};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `meetings` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Meeting {
    pub id: DbId,
    pub title: String,
    pub date: NaiveDate,
    /// Free-form time range, e.g. `"14:00 - 16:00"`.
    pub time: String,
    pub location: String,
    pub description: Option<String>,
    /// Attendee head count.
    pub attendees: i32,
    pub status: String,
    pub agenda: Option<String>,
    /// Participant names as a JSON array.
    pub participants: serde_json::Value,
    pub minutes: Option<String>,
    #[serde(rename = "signedByDean")]
    pub signed_by_dean: bool,
    pub signature: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a meeting.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateMeeting {
    pub title: String,
    pub date: NaiveDate,
    pub time: String,
    pub location: String,
    pub description: Option<String>,
    #[serde(default)]
    pub attendees: i32,
    pub status: Option<String>,
    pub agenda: Option<String>,
    pub participants: Option<serde_json::Value>,
    pub minutes: Option<String>,
}

/// DTO for updating a meeting. All fields are optional.
///
/// `signature` interacts with `signedByDean`: see the sign-off rule in the
/// meetings handler.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateMeeting {
    pub title: Option<String>,
    pub date: Option<NaiveDate>,
    pub time: Option<String>,
    pub location: Option<String>,
    pub description: Option<String>,
    pub attendees: Option<i32>,
    pub status: Option<String>,
    pub agenda: Option<String>,
    pub participants: Option<serde_json::Value>,
    pub minutes: Option<String>,
    #[serde(rename = "signedByDean")]
    pub signed_by_dean: Option<bool>,
    pub signature: Option<String>,
}
