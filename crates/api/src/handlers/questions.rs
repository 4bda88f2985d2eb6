//! Handlers for the `/questions` resource (standalone Q&A store).

use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::Json;
use opencourse_db::models::question_answer::{CreateQuestionAnswer, QuestionAnswer};
use opencourse_db::repositories::QuestionAnswerRepo;
use opencourse_db::{clamp_limit, clamp_offset};

use crate::error::AppResult;
use crate::middleware::auth::AuthUser;
use crate::query::PaginationParams;
use crate::state::AppState;

/// GET /api/questions
///
/// Public listing of Q&A entries.
pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<PaginationParams>,
) -> AppResult<Json<Vec<QuestionAnswer>>> {
    let limit = clamp_limit(params.limit);
    let offset = clamp_offset(params.offset);
    let entries = QuestionAnswerRepo::list(&state.pool, limit, offset).await?;
    Ok(Json(entries))
}

/// POST /api/questions (any authenticated user)
pub async fn create(
    State(state): State<AppState>,
    _auth_user: AuthUser,
    Json(input): Json<CreateQuestionAnswer>,
) -> AppResult<(StatusCode, Json<QuestionAnswer>)> {
    let entry = QuestionAnswerRepo::create(&state.pool, &input).await?;
    Ok((StatusCode::CREATED, Json(entry)))
}
