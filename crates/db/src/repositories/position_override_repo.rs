//! Repository for the per-scene position override tables.
//!
//! One row per `(scene_id, entity)` pair, guaranteed by the
//! `uq_<table>_scene_entity` constraint; writes go through a single
//! `INSERT ... ON CONFLICT DO UPDATE` so concurrent drags cannot duplicate
//! rows.

use sqlx::PgPool;
use vtwin_core::placement::Position;
use vtwin_core::types::DbId;

use crate::models::position_override::{OverrideTable, PositionOverride};

/// Build the column list for an override table, aliasing the entity key.
fn columns(target: OverrideTable) -> String {
    format!(
        "id, {} AS entity_id, scene_id, position_x, position_y, created_at, updated_at",
        target.entity_column
    )
}

/// Provides data access for per-scene position overrides.
pub struct PositionOverrideRepo;

impl PositionOverrideRepo {
    /// Record `position` for an entity within a scene.
    ///
    /// Inserts on the first call for the pair; later calls update the
    /// coordinates in place and touch `updated_at`. The scene and entity
    /// must exist (foreign keys); no parent rows are created.
    pub async fn upsert(
        pool: &PgPool,
        target: OverrideTable,
        scene_id: DbId,
        entity_id: DbId,
        position: Position,
    ) -> Result<PositionOverride, sqlx::Error> {
        let query = format!(
            "INSERT INTO {table} ({fk}, scene_id, position_x, position_y)
             VALUES ($1, $2, $3, $4)
             ON CONFLICT (scene_id, {fk})
             DO UPDATE SET position_x = EXCLUDED.position_x,
                           position_y = EXCLUDED.position_y,
                           updated_at = NOW()
             RETURNING {cols}",
            table = target.table,
            fk = target.entity_column,
            cols = columns(target),
        );
        sqlx::query_as::<_, PositionOverride>(&query)
            .bind(entity_id)
            .bind(scene_id)
            .bind(position.x)
            .bind(position.y)
            .fetch_one(pool)
            .await
    }

    /// Find the override for an entity within a scene.
    pub async fn find(
        pool: &PgPool,
        target: OverrideTable,
        scene_id: DbId,
        entity_id: DbId,
    ) -> Result<Option<PositionOverride>, sqlx::Error> {
        let query = format!(
            "SELECT {cols} FROM {table} WHERE scene_id = $1 AND {fk} = $2",
            cols = columns(target),
            table = target.table,
            fk = target.entity_column,
        );
        sqlx::query_as::<_, PositionOverride>(&query)
            .bind(scene_id)
            .bind(entity_id)
            .fetch_optional(pool)
            .await
    }

    /// List every override recorded for an entity, ordered by scene.
    pub async fn list_for_entity(
        pool: &PgPool,
        target: OverrideTable,
        entity_id: DbId,
    ) -> Result<Vec<PositionOverride>, sqlx::Error> {
        let query = format!(
            "SELECT {cols} FROM {table} WHERE {fk} = $1 ORDER BY scene_id",
            cols = columns(target),
            table = target.table,
            fk = target.entity_column,
        );
        sqlx::query_as::<_, PositionOverride>(&query)
            .bind(entity_id)
            .fetch_all(pool)
            .await
    }

    /// Delete the override for an entity within a scene, reverting that scene
    /// to the entity's default position.
    ///
    /// Returns `true` if a row was removed.
    pub async fn delete(
        pool: &PgPool,
        target: OverrideTable,
        scene_id: DbId,
        entity_id: DbId,
    ) -> Result<bool, sqlx::Error> {
        let query = format!(
            "DELETE FROM {table} WHERE scene_id = $1 AND {fk} = $2",
            table = target.table,
            fk = target.entity_column,
        );
        let result = sqlx::query(&query)
            .bind(scene_id)
            .bind(entity_id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
