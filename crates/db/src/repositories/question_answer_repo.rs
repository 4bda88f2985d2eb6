//! Repository for the `question_answers` table.

use sqlx::PgPool;

use crate::models::question_answer::{CreateQuestionAnswer, QuestionAnswer};

const COLUMNS: &str = "id, question, answer, created_at";

/// Provides CRUD operations for Q&A entries.
pub struct QuestionAnswerRepo;

impl QuestionAnswerRepo {
    /// Insert a new Q&A entry, returning the created row.
    pub async fn create(
        pool: &PgPool,
        input: &CreateQuestionAnswer,
    ) -> Result<QuestionAnswer, sqlx::Error> {
        let query = format!(
            "INSERT INTO question_answers (question, answer)
             VALUES ($1, $2)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, QuestionAnswer>(&query)
            .bind(&input.question)
            .bind(&input.answer)
            .fetch_one(pool)
            .await
    }

    /// List all Q&A entries in creation order.
    pub async fn list(
        pool: &PgPool,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<QuestionAnswer>, sqlx::Error> {
        let query =
            format!("SELECT {COLUMNS} FROM question_answers ORDER BY id LIMIT $1 OFFSET $2");
        sqlx::query_as::<_, QuestionAnswer>(&query)
            .bind(limit)
            .bind(offset)
            .fetch_all(pool)
            .await
    }
}
