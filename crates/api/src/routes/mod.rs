pub mod auth;
pub mod categories;
pub mod courses;
pub mod enrollments;
pub mod health;
pub mod lessons;
pub mod materials;
pub mod questions;
pub mod users;

use axum::Router;

use crate::state::AppState;

/// Build the `/api` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /auth/login                    login (public)
/// /auth/refresh                  refresh (public)
/// /auth/logout                   logout (requires auth)
///
/// /users                         register (public POST),
///                                list (admin sees all, others see self)
/// /users/me                      get, update own profile
/// /users/{id}                    get, deactivate
///
/// /categories                    list (auth), create (admin only)
///
/// /courses                       list (role-scoped), create (teacher only)
/// /courses/{id}                  get, update, delete (owner-scoped)
/// /courses/{id}/enroll           enroll caller (POST, idempotent)
///
/// /lessons                       list (public, per-user completion flag)
///                                create (owning teacher or admin)
/// /lessons/{id}/complete         mark complete + recompute progress (POST)
///
/// /materials                     list (public), create (owning teacher or admin)
///
/// /enrollments                   list (role-scoped, paginated), create
///
/// /questions                     list (public), create (auth)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        // Authentication routes (login, refresh, logout).
        .nest("/auth", auth::router())
        // Account registration and profile management.
        .nest("/users", users::router())
        // Catalog hierarchy.
        .nest("/categories", categories::router())
        .nest("/courses", courses::router())
        .nest("/lessons", lessons::router())
        .nest("/materials", materials::router())
        // Enrollment listing and creation.
        .nest("/enrollments", enrollments::router())
        // Standalone Q&A store.
        .nest("/questions", questions::router())
}
