//! Material entity model and DTOs.

use opencourse_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A material row from the `materials` table (a file attached to a lesson).
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Material {
    pub id: DbId,
    pub lesson_id: DbId,
    pub title: String,
    pub file_url: String,
    pub created_at: Timestamp,
}

/// DTO for creating a new material.
#[derive(Debug, Deserialize)]
pub struct CreateMaterial {
    pub lesson_id: DbId,
    pub title: String,
    pub file_url: String,
}
