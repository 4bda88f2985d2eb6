//! Repository for the `courses` table.

use opencourse_core::types::DbId;
use sqlx::PgPool;

use crate::models::course::{Course, CreateCourse, UpdateCourse};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str =
    "id, category_id, teacher_id, title, description, price, created_at, updated_at";

/// Provides CRUD operations for courses.
pub struct CourseRepo;

impl CourseRepo {
    /// Insert a new course owned by `teacher_id`, returning the created row.
    pub async fn create(
        pool: &PgPool,
        teacher_id: DbId,
        input: &CreateCourse,
    ) -> Result<Course, sqlx::Error> {
        let query = format!(
            "INSERT INTO courses (category_id, teacher_id, title, description, price)
             VALUES ($1, $2, $3, $4, $5)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Course>(&query)
            .bind(input.category_id)
            .bind(teacher_id)
            .bind(&input.title)
            .bind(&input.description)
            .bind(input.price)
            .fetch_one(pool)
            .await
    }

    /// Find a course by ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Course>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM courses WHERE id = $1");
        sqlx::query_as::<_, Course>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all courses in creation order.
    pub async fn list(pool: &PgPool, limit: i64, offset: i64) -> Result<Vec<Course>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM courses ORDER BY id LIMIT $1 OFFSET $2");
        sqlx::query_as::<_, Course>(&query)
            .bind(limit)
            .bind(offset)
            .fetch_all(pool)
            .await
    }

    /// List the courses owned by one teacher, in creation order.
    pub async fn list_by_teacher(
        pool: &PgPool,
        teacher_id: DbId,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<Course>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM courses WHERE teacher_id = $1 ORDER BY id LIMIT $2 OFFSET $3"
        );
        sqlx::query_as::<_, Course>(&query)
            .bind(teacher_id)
            .bind(limit)
            .bind(offset)
            .fetch_all(pool)
            .await
    }

    /// Update a course. Only non-`None` fields in `input` are applied.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateCourse,
    ) -> Result<Option<Course>, sqlx::Error> {
        let query = format!(
            "UPDATE courses SET
                category_id = COALESCE($2, category_id),
                title = COALESCE($3, title),
                description = COALESCE($4, description),
                price = COALESCE($5, price),
                updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Course>(&query)
            .bind(id)
            .bind(input.category_id)
            .bind(&input.title)
            .bind(&input.description)
            .bind(input.price)
            .fetch_optional(pool)
            .await
    }

    /// Delete a course. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM courses WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
