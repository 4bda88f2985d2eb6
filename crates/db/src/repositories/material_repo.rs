//! Repository for the `materials` table.

use sqlx::PgPool;

use crate::models::material::{CreateMaterial, Material};

const COLUMNS: &str = "id, lesson_id, title, file_url, created_at";

/// Provides CRUD operations for materials.
pub struct MaterialRepo;

impl MaterialRepo {
    /// Insert a new material, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateMaterial) -> Result<Material, sqlx::Error> {
        let query = format!(
            "INSERT INTO materials (lesson_id, title, file_url)
             VALUES ($1, $2, $3)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Material>(&query)
            .bind(input.lesson_id)
            .bind(&input.title)
            .bind(&input.file_url)
            .fetch_one(pool)
            .await
    }

    /// List all materials in creation order.
    pub async fn list(
        pool: &PgPool,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<Material>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM materials ORDER BY id LIMIT $1 OFFSET $2");
        sqlx::query_as::<_, Material>(&query)
            .bind(limit)
            .bind(offset)
            .fetch_all(pool)
            .await
    }
}
