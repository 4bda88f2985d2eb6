//! Route definitions for the `/lessons` resource.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::lessons;
use crate::state::AppState;

/// Routes mounted at `/lessons`.
///
/// ```text
/// GET  /                -> list (public, per-user completion flag)
/// POST /                -> create (owning teacher or admin)
/// POST /{id}/complete   -> complete
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(lessons::list).post(lessons::create))
        .route("/{id}/complete", post(lessons::complete))
}
