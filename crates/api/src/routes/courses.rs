//! Route definitions for the `/courses` resource.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::courses;
use crate::state::AppState;

/// Routes mounted at `/courses`.
///
/// ```text
/// GET    /             -> list
/// POST   /             -> create (teacher only)
/// GET    /{id}         -> get_by_id
/// PUT    /{id}         -> update (owning teacher)
/// DELETE /{id}         -> delete (owning teacher)
/// POST   /{id}/enroll  -> enroll (idempotent)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(courses::list).post(courses::create))
        .route(
            "/{id}",
            get(courses::get_by_id)
                .put(courses::update)
                .delete(courses::delete),
        )
        .route("/{id}/enroll", post(courses::enroll))
}
