//! Route definitions for the `/questions` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::questions;
use crate::state::AppState;

/// Routes mounted at `/questions`.
///
/// ```text
/// GET  /  -> list (public)
/// POST /  -> create (auth)
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/", get(questions::list).post(questions::create))
}
