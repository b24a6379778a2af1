//! Course schedule model and DTOs.

use academe_core::types::{DbId, Timestamp};
use chrono::NaiveTime;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `schedules` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Schedule {
    pub id: DbId,
    pub course_name: String,
    pub instructor: String,
    pub day: String,
    pub start_time: NaiveTime,
    pub end_time: NaiveTime,
    pub room: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a schedule entry.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateSchedule {
    pub course_name: String,
    pub instructor: String,
    pub day: String,
    pub start_time: NaiveTime,
    pub end_time: NaiveTime,
    pub room: String,
}

/// DTO for updating a schedule entry. All fields are optional.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateSchedule {
    pub course_name: Option<String>,
    pub instructor: Option<String>,
    pub day: Option<String>,
    pub start_time: Option<NaiveTime>,
    pub end_time: Option<NaiveTime>,
    pub room: Option<String>,
}
