//! Handlers for the `/users` resource (registration, profiles, admin listing).

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use opencourse_core::error::CoreError;
use opencourse_core::policy::{authorize, Action, Resource, Scope};
use opencourse_core::roles::Role;
use opencourse_core::types::DbId;
use opencourse_db::models::user::{CreateUser, UpdateProfile, UserResponse};
use opencourse_db::repositories::UserRepo;
use opencourse_db::{clamp_limit, clamp_offset};
use serde::Deserialize;
use validator::Validate;

use crate::auth::password::{hash_password, validate_password_strength};
use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::query::PaginationParams;
use crate::state::AppState;

/// Minimum accepted password length for new accounts.
const MIN_PASSWORD_LENGTH: usize = 8;

/// Request body for `POST /users`.
#[derive(Debug, Deserialize, Validate)]
pub struct RegisterRequest {
    #[validate(length(min = 3, max = 64))]
    pub username: String,
    #[validate(email)]
    pub email: String,
    pub password: String,
    pub password_confirm: String,
    /// Defaults to `student`; `admin` cannot be self-assigned.
    pub role: Option<Role>,
    pub mobile_no: Option<String>,
}

/// POST /api/users
///
/// Public endpoint. Creates a teacher or student account; the first
/// admin account is provisioned out of band.
pub async fn register(
    State(state): State<AppState>,
    Json(input): Json<RegisterRequest>,
) -> AppResult<(StatusCode, Json<UserResponse>)> {
    input
        .validate()
        .map_err(|e| AppError::Core(CoreError::Validation(e.to_string())))?;

    if input.password != input.password_confirm {
        return Err(AppError::Core(CoreError::Validation(
            "Passwords do not match".into(),
        )));
    }
    validate_password_strength(&input.password, MIN_PASSWORD_LENGTH)
        .map_err(|msg| AppError::Core(CoreError::Validation(msg)))?;

    let role = input.role.unwrap_or(Role::Student);
    if role == Role::Admin {
        return Err(AppError::Core(CoreError::Validation(
            "Cannot self-register an admin account".into(),
        )));
    }

    let password_hash = hash_password(&input.password)
        .map_err(|e| AppError::InternalError(format!("Password hashing error: {e}")))?;

    let user = UserRepo::create(
        &state.pool,
        &CreateUser {
            username: input.username,
            email: input.email,
            password_hash,
            role,
            mobile_no: input.mobile_no,
        },
    )
    .await?;

    tracing::info!(user_id = user.id, role = %user.role, "user registered");
    Ok((StatusCode::CREATED, Json(UserResponse::from(&user))))
}

/// GET /api/users
///
/// Admins see every account; other roles receive only their own record.
pub async fn list(
    State(state): State<AppState>,
    auth_user: AuthUser,
    Query(params): Query<PaginationParams>,
) -> AppResult<Json<Vec<UserResponse>>> {
    let scope = authorize(auth_user.role, Resource::User, Action::List)?;

    let users = match scope {
        Scope::Any => {
            let limit = clamp_limit(params.limit);
            let offset = clamp_offset(params.offset);
            UserRepo::list(&state.pool, limit, offset).await?
        }
        Scope::Owned => UserRepo::find_by_id(&state.pool, auth_user.user_id)
            .await?
            .into_iter()
            .collect(),
    };

    Ok(Json(users.iter().map(UserResponse::from).collect()))
}

/// GET /api/users/me
pub async fn me(
    State(state): State<AppState>,
    auth_user: AuthUser,
) -> AppResult<Json<UserResponse>> {
    let user = UserRepo::find_by_id(&state.pool, auth_user.user_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "User",
            id: auth_user.user_id,
        }))?;
    Ok(Json(UserResponse::from(&user)))
}

/// PUT /api/users/me
pub async fn update_me(
    State(state): State<AppState>,
    auth_user: AuthUser,
    Json(input): Json<UpdateProfile>,
) -> AppResult<Json<UserResponse>> {
    let user = UserRepo::update_profile(&state.pool, auth_user.user_id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "User",
            id: auth_user.user_id,
        }))?;
    Ok(Json(UserResponse::from(&user)))
}

/// GET /api/users/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    auth_user: AuthUser,
    Path(id): Path<DbId>,
) -> AppResult<Json<UserResponse>> {
    let scope = authorize(auth_user.role, Resource::User, Action::Read)?;
    if scope == Scope::Owned && id != auth_user.user_id {
        return Err(AppError::Core(CoreError::Forbidden(
            "Cannot view another user's account".into(),
        )));
    }

    let user = UserRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "User", id }))?;
    Ok(Json(UserResponse::from(&user)))
}

/// DELETE /api/users/{id}
///
/// Soft-deactivates the account (admin only). Returns 204 No Content.
pub async fn deactivate(
    State(state): State<AppState>,
    auth_user: AuthUser,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    authorize(auth_user.role, Resource::User, Action::Delete)?;

    let deactivated = UserRepo::deactivate(&state.pool, id).await?;
    if deactivated {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound { entity: "User", id }))
    }
}
