//! Handlers for the `/categories` resource.

use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::Json;
use opencourse_core::policy::{authorize, Action, Resource};
use opencourse_db::models::category::{Category, CreateCategory};
use opencourse_db::repositories::CategoryRepo;
use opencourse_db::{clamp_limit, clamp_offset};

use crate::error::AppResult;
use crate::middleware::auth::AuthUser;
use crate::query::PaginationParams;
use crate::state::AppState;

/// GET /api/categories
pub async fn list(
    State(state): State<AppState>,
    auth_user: AuthUser,
    Query(params): Query<PaginationParams>,
) -> AppResult<Json<Vec<Category>>> {
    authorize(auth_user.role, Resource::Category, Action::List)?;

    let limit = clamp_limit(params.limit);
    let offset = clamp_offset(params.offset);
    let categories = CategoryRepo::list(&state.pool, limit, offset).await?;
    Ok(Json(categories))
}

/// POST /api/categories (admin only)
pub async fn create(
    State(state): State<AppState>,
    auth_user: AuthUser,
    Json(input): Json<CreateCategory>,
) -> AppResult<(StatusCode, Json<Category>)> {
    authorize(auth_user.role, Resource::Category, Action::Create)?;

    let category = CategoryRepo::create(&state.pool, &input).await?;
    Ok((StatusCode::CREATED, Json(category)))
}
