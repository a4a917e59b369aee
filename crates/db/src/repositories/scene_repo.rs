//! Repository for the `scenes` table.

use sqlx::PgPool;
use vtwin_core::types::DbId;

use crate::models::scene::{CreateScene, Scene};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, title, slug, status, deleted_at, created_at, updated_at";

/// Provides CRUD operations for scenes.
pub struct SceneRepo;

impl SceneRepo {
    /// Insert a new scene, returning the created row.
    ///
    /// If `status` is `None`, defaults to `'DRAFT'`.
    pub async fn create(pool: &PgPool, input: &CreateScene) -> Result<Scene, sqlx::Error> {
        let query = format!(
            "INSERT INTO scenes (title, slug, status)
             VALUES ($1, $2, COALESCE($3, 'DRAFT'))
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Scene>(&query)
            .bind(&input.title)
            .bind(&input.slug)
            .bind(&input.status)
            .fetch_one(pool)
            .await
    }

    /// Find a scene by its ID. Excludes soft-deleted rows.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Scene>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM scenes WHERE id = $1 AND deleted_at IS NULL");
        sqlx::query_as::<_, Scene>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Soft-delete a scene by ID. Returns `true` if a row was marked deleted.
    ///
    /// Overrides recorded for the scene are kept but no longer resolved.
    pub async fn soft_delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query(
            "UPDATE scenes SET deleted_at = NOW(), updated_at = NOW() \
             WHERE id = $1 AND deleted_at IS NULL",
        )
        .bind(id)
        .execute(pool)
        .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Permanently delete a scene. Its overrides are removed by cascade.
    pub async fn hard_delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM scenes WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
