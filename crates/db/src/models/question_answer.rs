//! Question/answer entity model and DTOs.

use opencourse_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A Q&A row from the `question_answers` table. Independent resource with
/// no interaction with enrollments or progress.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct QuestionAnswer {
    pub id: DbId,
    pub question: String,
    pub answer: Option<String>,
    pub created_at: Timestamp,
}

/// DTO for creating a new Q&A entry.
#[derive(Debug, Deserialize)]
pub struct CreateQuestionAnswer {
    pub question: String,
    pub answer: Option<String>,
}
