//! Handlers for the `/materials` resource.

use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::Json;
use opencourse_core::error::CoreError;
use opencourse_core::policy::{authorize, Action, Resource, Scope};
use opencourse_db::models::material::{CreateMaterial, Material};
use opencourse_db::repositories::{CourseRepo, LessonRepo, MaterialRepo};
use opencourse_db::{clamp_limit, clamp_offset};

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::query::PaginationParams;
use crate::state::AppState;

/// GET /api/materials
///
/// Public listing of lesson materials.
pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<PaginationParams>,
) -> AppResult<Json<Vec<Material>>> {
    let limit = clamp_limit(params.limit);
    let offset = clamp_offset(params.offset);
    let materials = MaterialRepo::list(&state.pool, limit, offset).await?;
    Ok(Json(materials))
}

/// POST /api/materials (owning teacher or admin)
///
/// Ownership is resolved through the parent lesson's course.
pub async fn create(
    State(state): State<AppState>,
    auth_user: AuthUser,
    Json(input): Json<CreateMaterial>,
) -> AppResult<(StatusCode, Json<Material>)> {
    let scope = authorize(auth_user.role, Resource::Material, Action::Create)?;

    let lesson = LessonRepo::find_by_id(&state.pool, input.lesson_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Lesson",
            id: input.lesson_id,
        }))?;

    if scope == Scope::Owned {
        let course = CourseRepo::find_by_id(&state.pool, lesson.course_id)
            .await?
            .ok_or(AppError::Core(CoreError::NotFound {
                entity: "Course",
                id: lesson.course_id,
            }))?;
        if course.teacher_id != auth_user.user_id {
            return Err(AppError::Core(CoreError::Forbidden(
                "Course belongs to another teacher".into(),
            )));
        }
    }

    let material = MaterialRepo::create(&state.pool, &input).await?;
    Ok((StatusCode::CREATED, Json(material)))
}
