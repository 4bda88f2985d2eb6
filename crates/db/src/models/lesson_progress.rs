//! Lesson progress model.

use opencourse_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// A lesson-progress row from the `lesson_progress` table.
///
/// Unique per (enrollment_id, lesson_id); created lazily the first time a
/// lesson is marked complete for that enrollment, never deleted.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct LessonProgress {
    pub id: DbId,
    pub enrollment_id: DbId,
    pub lesson_id: DbId,
    pub is_completed: bool,
    pub completed_at: Option<Timestamp>,
    pub created_at: Timestamp,
}
