//! Repository for the `schedules` table.

use academe_core::types::DbId;
use sqlx::PgPool;

use crate::models::schedule::{CreateSchedule, Schedule, UpdateSchedule};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str =
    "id, course_name, instructor, day, start_time, end_time, room, created_at, updated_at";

/// Provides CRUD operations for course schedules.
pub struct ScheduleRepo;

impl ScheduleRepo {
    /// Insert a new schedule entry, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateSchedule) -> Result<Schedule, sqlx::Error> {
        let query = format!(
            "INSERT INTO schedules (course_name, instructor, day, start_time, end_time, room)
             VALUES ($1, $2, $3, $4, $5, $6)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Schedule>(&query)
            .bind(&input.course_name)
            .bind(&input.instructor)
            .bind(&input.day)
            .bind(input.start_time)
            .bind(input.end_time)
            .bind(&input.room)
            .fetch_one(pool)
            .await
    }

    /// Find a schedule entry by ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Schedule>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM schedules WHERE id = $1");
        sqlx::query_as::<_, Schedule>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all schedule entries, ordered by day then start time.
    pub async fn list(pool: &PgPool) -> Result<Vec<Schedule>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM schedules ORDER BY day ASC, start_time ASC");
        sqlx::query_as::<_, Schedule>(&query).fetch_all(pool).await
    }

    /// Update a schedule entry. Only non-`None` fields are applied.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateSchedule,
    ) -> Result<Option<Schedule>, sqlx::Error> {
        let query = format!(
            "UPDATE schedules SET
                course_name = COALESCE($2, course_name),
                instructor = COALESCE($3, instructor),
                day = COALESCE($4, day),
                start_time = COALESCE($5, start_time),
                end_time = COALESCE($6, end_time),
                room = COALESCE($7, room),
                updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Schedule>(&query)
            .bind(id)
            .bind(&input.course_name)
            .bind(&input.instructor)
            .bind(&input.day)
            .bind(input.start_time)
            .bind(input.end_time)
            .bind(&input.room)
            .fetch_optional(pool)
            .await
    }

    /// Delete a schedule entry. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM schedules WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
