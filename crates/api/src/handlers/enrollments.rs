//! Handlers for the `/enrollments` resource.

use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::Json;
use opencourse_core::error::CoreError;
use opencourse_core::policy::{authorize, Action, Resource, Scope};
use opencourse_db::models::enrollment::{CreateEnrollment, EnrollmentDetail};
use opencourse_db::repositories::{CourseRepo, EnrollmentRepo};
use opencourse_db::{clamp_limit, clamp_offset};

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::query::PaginationParams;
use crate::response::Paginated;
use crate::state::AppState;

/// GET /api/enrollments
///
/// Paginated listing with the course embedded in each row. Students see only
/// their own enrollments; admins and teachers see every enrollment.
pub async fn list(
    State(state): State<AppState>,
    auth_user: AuthUser,
    Query(params): Query<PaginationParams>,
) -> AppResult<Json<Paginated<EnrollmentDetail>>> {
    let scope = authorize(auth_user.role, Resource::Enrollment, Action::List)?;

    let filter = match scope {
        Scope::Any => None,
        Scope::Owned => Some(auth_user.user_id),
    };

    let limit = clamp_limit(params.limit);
    let offset = clamp_offset(params.offset);

    let rows = EnrollmentRepo::list_detailed(&state.pool, filter, limit, offset).await?;
    let total = EnrollmentRepo::count(&state.pool, filter).await?;

    Ok(Json(Paginated {
        items: rows.into_iter().map(EnrollmentDetail::from).collect(),
        total,
        limit,
        offset,
    }))
}

/// POST /api/enrollments
///
/// Body carries the write-only `course_id`; the enrolled user is always the
/// caller. Idempotent like the path-based enroll endpoint: 201 on first
/// enrollment, 200 with the existing row on repeats.
pub async fn create(
    State(state): State<AppState>,
    auth_user: AuthUser,
    Json(input): Json<CreateEnrollment>,
) -> AppResult<(StatusCode, Json<EnrollmentDetail>)> {
    authorize(auth_user.role, Resource::Enrollment, Action::Create)?;

    let course = CourseRepo::find_by_id(&state.pool, input.course_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Course",
            id: input.course_id,
        }))?;

    let (enrollment, created) =
        EnrollmentRepo::get_or_create(&state.pool, auth_user.user_id, course.id, course.price)
            .await?;

    let status = if created {
        StatusCode::CREATED
    } else {
        StatusCode::OK
    };

    let detail = EnrollmentDetail {
        id: enrollment.id,
        user_id: enrollment.user_id,
        price: enrollment.price,
        progress: enrollment.progress,
        enrolled_at: enrollment.enrolled_at,
        course,
    };
    Ok((status, Json(detail)))
}
