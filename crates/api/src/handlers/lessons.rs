//! Handlers for the `/lessons` resource, including the completion workflow.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use opencourse_core::error::CoreError;
use opencourse_core::policy::{authorize, Action, Resource, Scope};
use opencourse_core::types::DbId;
use opencourse_db::models::lesson::{CreateLesson, Lesson, LessonWithCompletion};
use opencourse_db::repositories::{CourseRepo, LessonProgressRepo, LessonRepo};
use opencourse_db::{clamp_limit, clamp_offset};
use serde_json::json;

use crate::error::{AppError, AppResult};
use crate::middleware::auth::{AuthUser, OptionalAuthUser};
use crate::query::PaginationParams;
use crate::state::AppState;

/// GET /api/lessons
///
/// Public. When the caller presents a valid token, each lesson carries the
/// caller's completion flag; anonymous callers always see `completed: false`.
pub async fn list(
    State(state): State<AppState>,
    OptionalAuthUser(auth_user): OptionalAuthUser,
    Query(params): Query<PaginationParams>,
) -> AppResult<Json<Vec<LessonWithCompletion>>> {
    let limit = clamp_limit(params.limit);
    let offset = clamp_offset(params.offset);
    let user_id = auth_user.map(|u| u.user_id);

    let lessons = LessonRepo::list_with_completion(&state.pool, user_id, limit, offset).await?;
    Ok(Json(lessons))
}

/// POST /api/lessons (owning teacher or admin)
pub async fn create(
    State(state): State<AppState>,
    auth_user: AuthUser,
    Json(input): Json<CreateLesson>,
) -> AppResult<(StatusCode, Json<Lesson>)> {
    let scope = authorize(auth_user.role, Resource::Lesson, Action::Create)?;

    let course = CourseRepo::find_by_id(&state.pool, input.course_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Course",
            id: input.course_id,
        }))?;
    if scope == Scope::Owned && course.teacher_id != auth_user.user_id {
        return Err(AppError::Core(CoreError::Forbidden(
            "Course belongs to another teacher".into(),
        )));
    }

    let lesson = LessonRepo::create(&state.pool, &input).await?;
    Ok((StatusCode::CREATED, Json(lesson)))
}

/// POST /api/lessons/{id}/complete
///
/// Mark the lesson complete for the caller and recompute the enrollment's
/// aggregate progress. The lesson and the caller's enrollment in its course
/// must both exist; either one missing yields the same generic 404.
pub async fn complete(
    State(state): State<AppState>,
    auth_user: AuthUser,
    Path(id): Path<DbId>,
) -> AppResult<Response> {
    let progress = LessonProgressRepo::complete_for_user(&state.pool, auth_user.user_id, id).await?;

    match progress {
        Some(progress) => {
            tracing::info!(
                user_id = auth_user.user_id,
                lesson_id = id,
                progress,
                "lesson completed"
            );
            Ok((StatusCode::OK, Json(json!({ "status": "success" }))).into_response())
        }
        None => Ok((
            StatusCode::NOT_FOUND,
            Json(json!({ "error": "Lesson or enrollment not found" })),
        )
            .into_response()),
    }
}
