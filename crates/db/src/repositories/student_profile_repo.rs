//! Repository for the `student_profiles` table.

use academe_core::types::DbId;
use sqlx::PgPool;

use crate::models::student_profile::{StudentProfile, UpsertStudentProfile};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, user_id, gpa, department, created_at, updated_at";

/// Provides CRUD operations for student profiles.
pub struct StudentProfileRepo;

impl StudentProfileRepo {
    /// Insert or replace the profile for a user, returning the stored row.
    ///
    /// A student has at most one profile; repeated upserts overwrite the
    /// GPA and department in place.
    pub async fn upsert(
        pool: &PgPool,
        input: &UpsertStudentProfile,
    ) -> Result<StudentProfile, sqlx::Error> {
        let query = format!(
            "INSERT INTO student_profiles (user_id, gpa, department)
             VALUES ($1, $2, $3)
             ON CONFLICT ON CONSTRAINT uq_student_profiles_user_id
             DO UPDATE SET gpa = EXCLUDED.gpa,
                           department = EXCLUDED.department,
                           updated_at = NOW()
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, StudentProfile>(&query)
            .bind(input.user_id)
            .bind(input.gpa)
            .bind(&input.department)
            .fetch_one(pool)
            .await
    }

    /// Find the profile belonging to a user, if any.
    pub async fn find_by_user_id(
        pool: &PgPool,
        user_id: DbId,
    ) -> Result<Option<StudentProfile>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM student_profiles WHERE user_id = $1");
        sqlx::query_as::<_, StudentProfile>(&query)
            .bind(user_id)
            .fetch_optional(pool)
            .await
    }
}
