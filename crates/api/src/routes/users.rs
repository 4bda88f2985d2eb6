//! Route definitions for the `/users` resource.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::users;
use crate::state::AppState;

/// Routes mounted at `/users`.
///
/// ```text
/// POST   /      -> register (public)
/// GET    /      -> list
/// GET    /me    -> me
/// PUT    /me    -> update_me
/// GET    /{id}  -> get_by_id
/// DELETE /{id}  -> deactivate
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", post(users::register).get(users::list))
        .route("/me", get(users::me).put(users::update_me))
        .route("/{id}", get(users::get_by_id).delete(users::deactivate))
}
