//! Repository for the `enrollments` table.

use opencourse_core::types::DbId;
use sqlx::{PgExecutor, PgPool};

use crate::models::enrollment::{Enrollment, EnrollmentWithCourse};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, user_id, course_id, price, progress, enrolled_at";

/// Join projection backing the detailed enrollment listing.
const DETAIL_COLUMNS: &str = "e.id, e.user_id, e.price, e.progress, e.enrolled_at, \
     c.id AS course_id, c.category_id AS course_category_id, \
     c.teacher_id AS course_teacher_id, c.title AS course_title, \
     c.description AS course_description, c.price AS course_price, \
     c.created_at AS course_created_at, c.updated_at AS course_updated_at";

/// Provides operations for enrollments.
pub struct EnrollmentRepo;

impl EnrollmentRepo {
    /// Atomically fetch or create the enrollment for (user, course).
    ///
    /// A single conditional insert upholds the one-row-per-pair invariant
    /// under concurrent requests; losing the race falls through to the
    /// existing row. New enrollments seed `progress = 0` and snapshot the
    /// course price. Returns the row and whether it was created by this call.
    pub async fn get_or_create(
        pool: &PgPool,
        user_id: DbId,
        course_id: DbId,
        price: f64,
    ) -> Result<(Enrollment, bool), sqlx::Error> {
        let insert = format!(
            "INSERT INTO enrollments (user_id, course_id, price, progress)
             VALUES ($1, $2, $3, 0)
             ON CONFLICT ON CONSTRAINT uq_enrollments_user_course DO NOTHING
             RETURNING {COLUMNS}"
        );
        let created = sqlx::query_as::<_, Enrollment>(&insert)
            .bind(user_id)
            .bind(course_id)
            .bind(price)
            .fetch_optional(pool)
            .await?;

        match created {
            Some(enrollment) => Ok((enrollment, true)),
            None => {
                let existing = Self::find_by_user_and_course(pool, user_id, course_id)
                    .await?
                    .ok_or(sqlx::Error::RowNotFound)?;
                Ok((existing, false))
            }
        }
    }

    /// Find the enrollment linking a user to a course.
    pub async fn find_by_user_and_course(
        executor: impl PgExecutor<'_>,
        user_id: DbId,
        course_id: DbId,
    ) -> Result<Option<Enrollment>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM enrollments WHERE user_id = $1 AND course_id = $2");
        sqlx::query_as::<_, Enrollment>(&query)
            .bind(user_id)
            .bind(course_id)
            .fetch_optional(executor)
            .await
    }

    /// Find an enrollment by ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Enrollment>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM enrollments WHERE id = $1");
        sqlx::query_as::<_, Enrollment>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Persist a recomputed progress percentage.
    pub async fn set_progress(
        executor: impl PgExecutor<'_>,
        id: DbId,
        progress: f64,
    ) -> Result<(), sqlx::Error> {
        sqlx::query("UPDATE enrollments SET progress = $2 WHERE id = $1")
            .bind(id)
            .bind(progress)
            .execute(executor)
            .await?;
        Ok(())
    }

    /// List enrollments with their course embedded, newest first.
    ///
    /// `user_id = Some(..)` restricts the listing to that user's rows
    /// (the student view); `None` lists everything.
    pub async fn list_detailed(
        pool: &PgPool,
        user_id: Option<DbId>,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<EnrollmentWithCourse>, sqlx::Error> {
        let query = format!(
            "SELECT {DETAIL_COLUMNS}
             FROM enrollments e
             JOIN courses c ON c.id = e.course_id
             WHERE $1::bigint IS NULL OR e.user_id = $1
             ORDER BY e.enrolled_at DESC
             LIMIT $2 OFFSET $3"
        );
        sqlx::query_as::<_, EnrollmentWithCourse>(&query)
            .bind(user_id)
            .bind(limit)
            .bind(offset)
            .fetch_all(pool)
            .await
    }

    /// Count enrollments, optionally restricted to one user.
    pub async fn count(pool: &PgPool, user_id: Option<DbId>) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar(
            "SELECT COUNT(*) FROM enrollments WHERE $1::bigint IS NULL OR user_id = $1",
        )
        .bind(user_id)
        .fetch_one(pool)
        .await
    }
}
