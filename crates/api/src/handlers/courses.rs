//! Handlers for the `/courses` resource, including the enroll workflow.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use opencourse_core::error::CoreError;
use opencourse_core::policy::{authorize, Action, Resource, Scope};
use opencourse_core::types::DbId;
use opencourse_db::models::course::{Course, CreateCourse, UpdateCourse};
use opencourse_db::repositories::{CourseRepo, EnrollmentRepo};
use opencourse_db::{clamp_limit, clamp_offset};
use serde_json::json;

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::query::PaginationParams;
use crate::response::MessageResponse;
use crate::state::AppState;

/// GET /api/courses
///
/// Admins and students see the whole catalog; teachers see their own courses.
pub async fn list(
    State(state): State<AppState>,
    auth_user: AuthUser,
    Query(params): Query<PaginationParams>,
) -> AppResult<Json<Vec<Course>>> {
    let scope = authorize(auth_user.role, Resource::Course, Action::List)?;

    let limit = clamp_limit(params.limit);
    let offset = clamp_offset(params.offset);

    let courses = match scope {
        Scope::Any => CourseRepo::list(&state.pool, limit, offset).await?,
        Scope::Owned => {
            CourseRepo::list_by_teacher(&state.pool, auth_user.user_id, limit, offset).await?
        }
    };
    Ok(Json(courses))
}

/// POST /api/courses (teachers only; the caller becomes the owner)
pub async fn create(
    State(state): State<AppState>,
    auth_user: AuthUser,
    Json(input): Json<CreateCourse>,
) -> AppResult<(StatusCode, Json<Course>)> {
    authorize(auth_user.role, Resource::Course, Action::Create)?;

    let course = CourseRepo::create(&state.pool, auth_user.user_id, &input).await?;
    tracing::info!(course_id = course.id, teacher_id = auth_user.user_id, "course created");
    Ok((StatusCode::CREATED, Json(course)))
}

/// GET /api/courses/{id} (admin, or the owning teacher)
pub async fn get_by_id(
    State(state): State<AppState>,
    auth_user: AuthUser,
    Path(id): Path<DbId>,
) -> AppResult<Json<Course>> {
    let scope = authorize(auth_user.role, Resource::Course, Action::Read)?;

    let course = CourseRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Course",
            id,
        }))?;

    if scope == Scope::Owned && course.teacher_id != auth_user.user_id {
        return Err(AppError::Core(CoreError::Forbidden(
            "Course belongs to another teacher".into(),
        )));
    }
    Ok(Json(course))
}

/// PUT /api/courses/{id} (owning teacher only)
pub async fn update(
    State(state): State<AppState>,
    auth_user: AuthUser,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateCourse>,
) -> AppResult<Json<Course>> {
    let scope = authorize(auth_user.role, Resource::Course, Action::Update)?;
    check_ownership(&state, scope, &auth_user, id).await?;

    let course = CourseRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Course",
            id,
        }))?;
    Ok(Json(course))
}

/// DELETE /api/courses/{id} (owning teacher only)
pub async fn delete(
    State(state): State<AppState>,
    auth_user: AuthUser,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    let scope = authorize(auth_user.role, Resource::Course, Action::Delete)?;
    check_ownership(&state, scope, &auth_user, id).await?;

    let deleted = CourseRepo::delete(&state.pool, id).await?;
    if deleted {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound {
            entity: "Course",
            id,
        }))
    }
}

/// POST /api/courses/{id}/enroll
///
/// Idempotent enrollment: a first call creates the enrollment (201); any
/// repeat call acknowledges the existing one (200) without side effects.
pub async fn enroll(
    State(state): State<AppState>,
    auth_user: AuthUser,
    Path(id): Path<DbId>,
) -> AppResult<Response> {
    authorize(auth_user.role, Resource::Enrollment, Action::Create)?;

    let Some(course) = CourseRepo::find_by_id(&state.pool, id).await? else {
        return Ok((
            StatusCode::NOT_FOUND,
            Json(json!({ "error": "Course not found." })),
        )
            .into_response());
    };

    let (enrollment, created) =
        EnrollmentRepo::get_or_create(&state.pool, auth_user.user_id, course.id, course.price)
            .await?;

    if created {
        tracing::info!(
            enrollment_id = enrollment.id,
            user_id = auth_user.user_id,
            course_id = course.id,
            "enrollment created"
        );
        Ok((
            StatusCode::CREATED,
            Json(MessageResponse {
                message: "Enrolled successfully!",
            }),
        )
            .into_response())
    } else {
        Ok((
            StatusCode::OK,
            Json(MessageResponse {
                message: "Already enrolled.",
            }),
        )
            .into_response())
    }
}

/// Resolve an `Owned` scope against the course row. `Any` passes through.
async fn check_ownership(
    state: &AppState,
    scope: Scope,
    auth_user: &AuthUser,
    course_id: DbId,
) -> AppResult<()> {
    if scope == Scope::Owned {
        let course = CourseRepo::find_by_id(&state.pool, course_id)
            .await?
            .ok_or(AppError::Core(CoreError::NotFound {
                entity: "Course",
                id: course_id,
            }))?;
        if course.teacher_id != auth_user.user_id {
            return Err(AppError::Core(CoreError::Forbidden(
                "Course belongs to another teacher".into(),
            )));
        }
    }
    Ok(())
}
