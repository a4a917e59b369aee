//! Read-side position resolution.
//!
//! Fallback chain: scene override -> entity default -> unpositioned.
//! The override join ignores scenes that have been soft-deleted, and
//! soft-deleted entities are never resolved.

use sqlx::{FromRow, PgPool};
use vtwin_core::entity_kind::EntityKind;
use vtwin_core::placement::Position;
use vtwin_core::resolution::{resolve, ResolvedPosition};
use vtwin_core::types::DbId;

use crate::models::position_override::OverrideTable;
use crate::models::positioned_entity::CanvasEntry;

/// Raw coordinates fetched for one entity, before the fallback is applied.
#[derive(Debug, FromRow)]
struct PositionRow {
    id: DbId,
    name: String,
    status: String,
    position_x: Option<i32>,
    position_y: Option<i32>,
    override_x: Option<i32>,
    override_y: Option<i32>,
}

impl PositionRow {
    fn resolve(&self) -> ResolvedPosition {
        resolve(
            Position::from_columns(self.override_x, self.override_y),
            Position::from_columns(self.position_x, self.position_y),
        )
    }
}

/// Build the `SELECT ... FROM ... [LEFT JOIN ...]` prefix for `kind`.
///
/// `scene_param` is the placeholder carrying the scene ID; it only appears
/// in the query when the kind has an override table. A `NULL` scene
/// matches no override.
fn select_with_override(kind: EntityKind, scene_param: &str) -> String {
    match OverrideTable::for_kind(kind) {
        Some(target) => format!(
            "SELECT e.id, e.name, e.status, e.position_x, e.position_y, \
                    o.position_x AS override_x, o.position_y AS override_y \
             FROM {entities} e \
             LEFT JOIN {overrides} o \
                ON o.{fk} = e.id \
               AND o.scene_id = {scene_param} \
               AND EXISTS ( \
                   SELECT 1 FROM scenes s \
                   WHERE s.id = o.scene_id AND s.deleted_at IS NULL \
               )",
            entities = kind.table(),
            overrides = target.table,
            fk = target.entity_column,
        ),
        // Kinds without an override table always resolve to their default.
        None => format!(
            "SELECT e.id, e.name, e.status, e.position_x, e.position_y, \
                    NULL::INTEGER AS override_x, NULL::INTEGER AS override_y \
             FROM {entities} e",
            entities = kind.table(),
        ),
    }
}

/// Resolves the position an entity renders at.
pub struct ResolvedPositionRepo;

impl ResolvedPositionRepo {
    /// Resolve the position of one entity, optionally within a scene.
    ///
    /// Returns `None` if the entity does not exist or is soft-deleted. An
    /// entity with neither override nor default resolves to
    /// [`ResolvedPosition::UNPOSITIONED`].
    pub async fn resolve(
        pool: &PgPool,
        kind: EntityKind,
        entity_id: DbId,
        scene_id: Option<DbId>,
    ) -> Result<Option<ResolvedPosition>, sqlx::Error> {
        let query = format!(
            "{select} WHERE e.id = $1 AND e.deleted_at IS NULL",
            select = select_with_override(kind, "$2"),
        );
        let mut q = sqlx::query_as::<_, PositionRow>(&query).bind(entity_id);
        if kind.supports_overrides() {
            q = q.bind(scene_id);
        }
        let row = q.fetch_optional(pool).await?;
        Ok(row.map(|r| r.resolve()))
    }

    /// Resolve every live entity of `kind` for drawing on a scene canvas.
    pub async fn list_for_scene(
        pool: &PgPool,
        kind: EntityKind,
        scene_id: DbId,
    ) -> Result<Vec<CanvasEntry>, sqlx::Error> {
        let query = format!(
            "{select} WHERE e.deleted_at IS NULL ORDER BY e.id",
            select = select_with_override(kind, "$1"),
        );
        let mut q = sqlx::query_as::<_, PositionRow>(&query);
        if kind.supports_overrides() {
            q = q.bind(scene_id);
        }
        let rows = q.fetch_all(pool).await?;
        Ok(rows
            .into_iter()
            .map(|r| {
                let resolved_position = r.resolve();
                CanvasEntry {
                    id: r.id,
                    name: r.name,
                    status: r.status,
                    resolved_position,
                }
            })
            .collect())
    }
}
