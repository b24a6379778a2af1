//! Repository for the `meetings` table.

use academe_core::types::DbId;
use sqlx::PgPool;

use crate::models::meeting::{CreateMeeting, Meeting, UpdateMeeting};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, title, date, time, location, description, attendees, status, \
                        agenda, participants, minutes, signed_by_dean, signature, \
                        created_at, updated_at";

/// Provides CRUD operations for council meetings.
pub struct MeetingRepo;

impl MeetingRepo {
    /// Insert a new meeting, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateMeeting) -> Result<Meeting, sqlx::Error> {
        let query = format!(
            "INSERT INTO meetings
                (title, date, time, location, description, attendees, status, agenda,
                 participants, minutes)
             VALUES ($1, $2, $3, $4, $5, $6, COALESCE($7, 'upcoming'), $8,
                     COALESCE($9, '[]'::jsonb), $10)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Meeting>(&query)
            .bind(&input.title)
            .bind(input.date)
            .bind(&input.time)
            .bind(&input.location)
            .bind(&input.description)
            .bind(input.attendees)
            .bind(&input.status)
            .bind(&input.agenda)
            .bind(&input.participants)
            .bind(&input.minutes)
            .fetch_one(pool)
            .await
    }

    /// Find a meeting by ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Meeting>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM meetings WHERE id = $1");
        sqlx::query_as::<_, Meeting>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all meetings, most recent date first.
    pub async fn list(pool: &PgPool) -> Result<Vec<Meeting>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM meetings ORDER BY date DESC, id DESC");
        sqlx::query_as::<_, Meeting>(&query).fetch_all(pool).await
    }

    /// Update a meeting. Only non-`None` fields are applied.
    ///
    /// `signature` is resolved by the caller (sign-off rule lives in the
    /// handler): `Some` overwrites the stored signature, `None` leaves it.
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateMeeting,
        signature: Option<&str>,
    ) -> Result<Option<Meeting>, sqlx::Error> {
        let query = format!(
            "UPDATE meetings SET
                title = COALESCE($2, title),
                date = COALESCE($3, date),
                time = COALESCE($4, time),
                location = COALESCE($5, location),
                description = COALESCE($6, description),
                attendees = COALESCE($7, attendees),
                status = COALESCE($8, status),
                agenda = COALESCE($9, agenda),
                participants = COALESCE($10, participants),
                minutes = COALESCE($11, minutes),
                signed_by_dean = COALESCE($12, signed_by_dean),
                signature = COALESCE($13, signature),
                updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Meeting>(&query)
            .bind(id)
            .bind(&input.title)
            .bind(input.date)
            .bind(&input.time)
            .bind(&input.location)
            .bind(&input.description)
            .bind(input.attendees)
            .bind(&input.status)
            .bind(&input.agenda)
            .bind(&input.participants)
            .bind(&input.minutes)
            .bind(input.signed_by_dean)
            .bind(signature)
            .fetch_optional(pool)
            .await
    }

    /// Delete a meeting. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM meetings WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
