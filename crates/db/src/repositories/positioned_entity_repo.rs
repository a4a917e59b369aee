//! Repository for the positionable entity tables.
//!
//! All six tables share a column layout; the target table comes from the
//! [`EntityKind`] passed to each method.

use sqlx::PgPool;
use vtwin_core::entity_kind::EntityKind;
use vtwin_core::placement::Position;
use vtwin_core::types::DbId;

use crate::models::positioned_entity::{CreatePositionedEntity, PositionedEntity};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, name, description, status, position_x, position_y, \
    deleted_at, created_at, updated_at";

/// Provides create/read/delete and default-position access for positionable
/// entities.
pub struct PositionedEntityRepo;

impl PositionedEntityRepo {
    /// Insert a new entity at `position`, returning the created row.
    ///
    /// The coordinates in `input` are ignored; callers resolve the final
    /// position (explicit or generated) beforehand.
    pub async fn create(
        pool: &PgPool,
        kind: EntityKind,
        input: &CreatePositionedEntity,
        position: Position,
    ) -> Result<PositionedEntity, sqlx::Error> {
        let query = format!(
            "INSERT INTO {table} (name, description, status, position_x, position_y)
             VALUES ($1, $2, COALESCE($3, 'DRAFT'), $4, $5)
             RETURNING {COLUMNS}",
            table = kind.table(),
        );
        sqlx::query_as::<_, PositionedEntity>(&query)
            .bind(&input.name)
            .bind(&input.description)
            .bind(&input.status)
            .bind(position.x)
            .bind(position.y)
            .fetch_one(pool)
            .await
    }

    /// Find an entity by ID. Excludes soft-deleted rows.
    pub async fn find_by_id(
        pool: &PgPool,
        kind: EntityKind,
        id: DbId,
    ) -> Result<Option<PositionedEntity>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM {table} WHERE id = $1 AND deleted_at IS NULL",
            table = kind.table(),
        );
        sqlx::query_as::<_, PositionedEntity>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Default positions of every live entity of `kind`.
    ///
    /// This is the placement space overlap avoidance checks against. Rows
    /// with missing coordinates occupy no space and are skipped.
    pub async fn list_default_positions(
        pool: &PgPool,
        kind: EntityKind,
    ) -> Result<Vec<Position>, sqlx::Error> {
        let query = format!(
            "SELECT position_x, position_y FROM {table}
             WHERE deleted_at IS NULL
               AND position_x IS NOT NULL
               AND position_y IS NOT NULL",
            table = kind.table(),
        );
        let rows: Vec<(i32, i32)> = sqlx::query_as(&query).fetch_all(pool).await?;
        Ok(rows.into_iter().map(|(x, y)| Position::new(x, y)).collect())
    }

    /// Replace the default position of an entity.
    ///
    /// Returns `None` if no live row with the given `id` exists.
    pub async fn update_default_position(
        pool: &PgPool,
        kind: EntityKind,
        id: DbId,
        position: Position,
    ) -> Result<Option<PositionedEntity>, sqlx::Error> {
        let query = format!(
            "UPDATE {table} SET position_x = $2, position_y = $3, updated_at = NOW()
             WHERE id = $1 AND deleted_at IS NULL
             RETURNING {COLUMNS}",
            table = kind.table(),
        );
        sqlx::query_as::<_, PositionedEntity>(&query)
            .bind(id)
            .bind(position.x)
            .bind(position.y)
            .fetch_optional(pool)
            .await
    }

    /// Soft-delete an entity. Returns `true` if a row was marked deleted.
    ///
    /// Override rows are left in place; resolution skips deleted entities.
    pub async fn soft_delete(pool: &PgPool, kind: EntityKind, id: DbId) -> Result<bool, sqlx::Error> {
        let query = format!(
            "UPDATE {table} SET deleted_at = NOW(), updated_at = NOW()
             WHERE id = $1 AND deleted_at IS NULL",
            table = kind.table(),
        );
        let result = sqlx::query(&query).bind(id).execute(pool).await?;
        Ok(result.rows_affected() > 0)
    }
}
