//! Lesson entity model and DTOs.

use opencourse_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A lesson row from the `lessons` table. Ordering within a course is
/// implicit by creation (id) order.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Lesson {
    pub id: DbId,
    pub course_id: DbId,
    pub title: String,
    pub content: Option<String>,
    pub created_at: Timestamp,
}

/// A lesson annotated with the requesting user's completion state.
/// `completed` is always false for anonymous callers.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct LessonWithCompletion {
    pub id: DbId,
    pub course_id: DbId,
    pub title: String,
    pub content: Option<String>,
    pub created_at: Timestamp,
    pub completed: bool,
}

/// DTO for creating a new lesson.
#[derive(Debug, Deserialize)]
pub struct CreateLesson {
    pub course_id: DbId,
    pub title: String,
    pub content: Option<String>,
}
