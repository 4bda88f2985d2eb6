//! Repository for the `lessons` table.

use opencourse_core::types::DbId;
use sqlx::{PgExecutor, PgPool};

use crate::models::lesson::{CreateLesson, Lesson, LessonWithCompletion};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, course_id, title, content, created_at";

/// Provides CRUD operations for lessons.
pub struct LessonRepo;

impl LessonRepo {
    /// Insert a new lesson, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateLesson) -> Result<Lesson, sqlx::Error> {
        let query = format!(
            "INSERT INTO lessons (course_id, title, content)
             VALUES ($1, $2, $3)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Lesson>(&query)
            .bind(input.course_id)
            .bind(&input.title)
            .bind(&input.content)
            .fetch_one(pool)
            .await
    }

    /// Find a lesson by ID. Takes any executor so it can run inside the
    /// lesson-completion transaction.
    pub async fn find_by_id(
        executor: impl PgExecutor<'_>,
        id: DbId,
    ) -> Result<Option<Lesson>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM lessons WHERE id = $1");
        sqlx::query_as::<_, Lesson>(&query)
            .bind(id)
            .fetch_optional(executor)
            .await
    }

    /// Count the lessons of a course.
    pub async fn count_for_course(
        executor: impl PgExecutor<'_>,
        course_id: DbId,
    ) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar("SELECT COUNT(*) FROM lessons WHERE course_id = $1")
            .bind(course_id)
            .fetch_one(executor)
            .await
    }

    /// List all lessons in creation order, annotated with the requesting
    /// user's completion state.
    ///
    /// `user_id = None` (anonymous caller) yields `completed = false` for
    /// every row. Completion is resolved through the caller's enrollment in
    /// the lesson's course, mirroring how progress is recorded.
    pub async fn list_with_completion(
        pool: &PgPool,
        user_id: Option<DbId>,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<LessonWithCompletion>, sqlx::Error> {
        sqlx::query_as::<_, LessonWithCompletion>(
            "SELECT l.id, l.course_id, l.title, l.content, l.created_at,
                    EXISTS (
                        SELECT 1 FROM lesson_progress lp
                        JOIN enrollments e ON e.id = lp.enrollment_id
                        WHERE lp.lesson_id = l.id
                          AND lp.is_completed = true
                          AND e.user_id = $1
                    ) AS completed
             FROM lessons l
             ORDER BY l.id
             LIMIT $2 OFFSET $3",
        )
        .bind(user_id)
        .bind(limit)
        .bind(offset)
        .fetch_all(pool)
        .await
    }
}
