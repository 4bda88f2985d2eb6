//! Course entity model and DTOs.

use opencourse_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A course row from the `courses` table.
///
/// Every course is owned by exactly one teacher (`teacher_id`); ownership
/// drives the update/delete authorization scope.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Course {
    pub id: DbId,
    pub category_id: Option<DbId>,
    pub teacher_id: DbId,
    pub title: String,
    pub description: Option<String>,
    pub price: f64,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new course. The owner comes from the authenticated
/// principal, never from the payload.
#[derive(Debug, Deserialize)]
pub struct CreateCourse {
    pub category_id: Option<DbId>,
    pub title: String,
    pub description: Option<String>,
    pub price: f64,
}

/// DTO for updating an existing course. All fields are optional.
#[derive(Debug, Deserialize)]
pub struct UpdateCourse {
    pub category_id: Option<DbId>,
    pub title: Option<String>,
    pub description: Option<String>,
    pub price: Option<f64>,
}
