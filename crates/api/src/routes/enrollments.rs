//! Route definitions for the `/enrollments` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::enrollments;
use crate::state::AppState;

/// Routes mounted at `/enrollments`.
///
/// ```text
/// GET  /  -> list (role-scoped, paginated)
/// POST /  -> create (write-only course_id, idempotent)
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/", get(enrollments::list).post(enrollments::create))
}
