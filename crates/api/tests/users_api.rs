//! HTTP-level integration tests for user listing, profiles, and
//! account administration.

mod common;

use axum::http::StatusCode;
use common::{body_json, delete_auth, get_auth, put_json_auth};
use opencourse_api::auth::jwt::generate_access_token;
use opencourse_core::roles::Role;
use opencourse_db::models::user::{CreateUser, User};
use opencourse_db::repositories::UserRepo;
use sqlx::PgPool;

async fn create_user(pool: &PgPool, username: &str, role: Role) -> User {
    UserRepo::create(
        pool,
        &CreateUser {
            username: username.to_string(),
            email: format!("{username}@test.com"),
            password_hash: "$argon2id$fake".to_string(),
            role,
            mobile_no: None,
        },
    )
    .await
    .expect("user creation should succeed")
}

fn token_for(user: &User) -> String {
    generate_access_token(user.id, user.role, &common::test_config().jwt)
        .expect("token generation should succeed")
}

/// Admins list every account; a student listing sees only themself.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_user_listing_scopes_by_role(pool: PgPool) {
    let admin = create_user(&pool, "root", Role::Admin).await;
    let alice = create_user(&pool, "alice", Role::Student).await;
    create_user(&pool, "bob", Role::Student).await;

    let app = common::build_test_app(pool.clone());
    let response = get_auth(app, "/api/users", &token_for(&admin)).await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json.as_array().unwrap().len(), 3);

    let app = common::build_test_app(pool);
    let response = get_auth(app, "/api/users", &token_for(&alice)).await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json.as_array().unwrap().len(), 1);
    assert_eq!(json[0]["username"], "alice");
}

/// GET /users/me returns the caller's profile without the password hash.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_me_returns_own_profile(pool: PgPool) {
    let alice = create_user(&pool, "alice", Role::Student).await;

    let app = common::build_test_app(pool);
    let response = get_auth(app, "/api/users/me", &token_for(&alice)).await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["id"], alice.id);
    assert_eq!(json["role"], "student");
    assert!(json.get("password_hash").is_none(), "hash must never leak");
}

/// PUT /users/me applies a partial profile update.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_update_own_profile(pool: PgPool) {
    let alice = create_user(&pool, "alice", Role::Student).await;

    let app = common::build_test_app(pool);
    let response = put_json_auth(
        app,
        "/api/users/me",
        serde_json::json!({ "mobile_no": "+1-555-0100" }),
        &token_for(&alice),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["mobile_no"], "+1-555-0100");
    assert_eq!(json["email"], "alice@test.com");
}

/// Reading another user's account is admin-only.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_reading_other_accounts_is_admin_only(pool: PgPool) {
    let admin = create_user(&pool, "root", Role::Admin).await;
    let alice = create_user(&pool, "alice", Role::Student).await;
    let bob = create_user(&pool, "bob", Role::Student).await;

    let app = common::build_test_app(pool.clone());
    let response = get_auth(app, &format!("/api/users/{}", bob.id), &token_for(&alice)).await;
    assert_eq!(response.status(), StatusCode::FORBIDDEN);

    let app = common::build_test_app(pool.clone());
    let response = get_auth(app, &format!("/api/users/{}", alice.id), &token_for(&alice)).await;
    assert_eq!(response.status(), StatusCode::OK);

    let app = common::build_test_app(pool);
    let response = get_auth(app, &format!("/api/users/{}", bob.id), &token_for(&admin)).await;
    assert_eq!(response.status(), StatusCode::OK);
}

/// Deactivation is admin-only and soft (the row survives as inactive).
#[sqlx::test(migrations = "../db/migrations")]
async fn test_deactivate_is_admin_only(pool: PgPool) {
    let admin = create_user(&pool, "root", Role::Admin).await;
    let alice = create_user(&pool, "alice", Role::Student).await;
    let bob = create_user(&pool, "bob", Role::Student).await;

    let app = common::build_test_app(pool.clone());
    let response = delete_auth(app, &format!("/api/users/{}", bob.id), &token_for(&alice)).await;
    assert_eq!(response.status(), StatusCode::FORBIDDEN);

    let app = common::build_test_app(pool.clone());
    let response = delete_auth(app, &format!("/api/users/{}", bob.id), &token_for(&admin)).await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let reloaded = UserRepo::find_by_id(&pool, bob.id).await.unwrap().unwrap();
    assert!(!reloaded.is_active);
}
