//! Repository for the `lesson_progress` table and the lesson-completion
//! workflow.

use opencourse_core::progress::completion_percent;
use opencourse_core::types::DbId;
use sqlx::{PgExecutor, PgPool};

use crate::models::lesson_progress::LessonProgress;
use crate::repositories::{EnrollmentRepo, LessonRepo};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, enrollment_id, lesson_id, is_completed, completed_at, created_at";

/// Provides operations for lesson progress records.
pub struct LessonProgressRepo;

impl LessonProgressRepo {
    /// Mark a lesson complete for `user_id` and recompute the enrollment's
    /// aggregate progress, all in one transaction.
    ///
    /// Returns the new progress percentage, or `None` when either the lesson
    /// or the caller's enrollment in its course does not exist (the caller
    /// surfaces both as one generic not-found).
    ///
    /// The single transaction means a crash can never leave the progress
    /// row updated but the aggregate stale.
    pub async fn complete_for_user(
        pool: &PgPool,
        user_id: DbId,
        lesson_id: DbId,
    ) -> Result<Option<f64>, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let Some(lesson) = LessonRepo::find_by_id(&mut *tx, lesson_id).await? else {
            return Ok(None);
        };
        let Some(enrollment) =
            EnrollmentRepo::find_by_user_and_course(&mut *tx, user_id, lesson.course_id).await?
        else {
            return Ok(None);
        };

        Self::upsert_completed(&mut *tx, enrollment.id, lesson.id).await?;

        let total = LessonRepo::count_for_course(&mut *tx, lesson.course_id).await?;
        let completed = Self::count_completed(&mut *tx, enrollment.id).await?;
        let progress = completion_percent(completed, total);

        EnrollmentRepo::set_progress(&mut *tx, enrollment.id, progress).await?;
        tx.commit().await?;

        tracing::debug!(
            user_id,
            lesson_id,
            enrollment_id = enrollment.id,
            progress,
            "lesson marked complete"
        );
        Ok(Some(progress))
    }

    /// Fetch-or-create the progress row for (enrollment, lesson) and mark it
    /// completed. Repeated calls keep `is_completed = true`; only
    /// `completed_at` advances.
    pub async fn upsert_completed(
        executor: impl PgExecutor<'_>,
        enrollment_id: DbId,
        lesson_id: DbId,
    ) -> Result<(), sqlx::Error> {
        sqlx::query(
            "INSERT INTO lesson_progress (enrollment_id, lesson_id, is_completed, completed_at)
             VALUES ($1, $2, true, NOW())
             ON CONFLICT ON CONSTRAINT uq_lesson_progress_enrollment_lesson
             DO UPDATE SET is_completed = true, completed_at = NOW()",
        )
        .bind(enrollment_id)
        .bind(lesson_id)
        .execute(executor)
        .await?;
        Ok(())
    }

    /// Count the completed lessons of one enrollment.
    pub async fn count_completed(
        executor: impl PgExecutor<'_>,
        enrollment_id: DbId,
    ) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar(
            "SELECT COUNT(*) FROM lesson_progress
             WHERE enrollment_id = $1 AND is_completed = true",
        )
        .bind(enrollment_id)
        .fetch_one(executor)
        .await
    }

    /// Find the progress row for (enrollment, lesson).
    pub async fn find(
        pool: &PgPool,
        enrollment_id: DbId,
        lesson_id: DbId,
    ) -> Result<Option<LessonProgress>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM lesson_progress WHERE enrollment_id = $1 AND lesson_id = $2"
        );
        sqlx::query_as::<_, LessonProgress>(&query)
            .bind(enrollment_id)
            .bind(lesson_id)
            .fetch_optional(pool)
            .await
    }

    /// List every progress row of one enrollment (test support).
    pub async fn list_for_enrollment(
        pool: &PgPool,
        enrollment_id: DbId,
    ) -> Result<Vec<LessonProgress>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM lesson_progress WHERE enrollment_id = $1 ORDER BY id"
        );
        sqlx::query_as::<_, LessonProgress>(&query)
            .bind(enrollment_id)
            .fetch_all(pool)
            .await
    }
}
