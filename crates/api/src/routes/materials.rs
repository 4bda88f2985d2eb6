//! Route definitions for the `/materials` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::materials;
use crate::state::AppState;

/// Routes mounted at `/materials`.
///
/// ```text
/// GET  /  -> list (public)
/// POST /  -> create (owning teacher or admin)
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/", get(materials::list).post(materials::create))
}
