//! Shared response envelope types for API handlers.

use serde::Serialize;

/// One-line `{ "message": ... }` response used by workflow endpoints
/// (enroll, completion) whose result is a human-readable outcome.
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: &'static str,
}

/// Paginated listing envelope: the page of items plus the total row count
/// and the clamp-adjusted window that produced it.
#[derive(Debug, Serialize)]
pub struct Paginated<T: Serialize> {
    pub items: Vec<T>,
    pub total: i64,
    pub limit: i64,
    pub offset: i64,
}
