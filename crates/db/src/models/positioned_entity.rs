//! Positionable entity model and DTOs.
//!
//! Product panels, product categories, service categories, service
//! sub-categories, scene categories and call-to-action markers share the
//! same column layout for everything placement cares about, so one row type
//! serves all six tables. The table is selected by [`EntityKind`].
//!
//! [`EntityKind`]: vtwin_core::entity_kind::EntityKind

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use vtwin_core::placement::Position;
use vtwin_core::resolution::ResolvedPosition;
use vtwin_core::types::{DbId, Timestamp};

/// A row from any positionable entity table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct PositionedEntity {
    pub id: DbId,
    pub name: String,
    pub description: Option<String>,
    pub status: String,
    pub position_x: Option<i32>,
    pub position_y: Option<i32>,
    pub deleted_at: Option<Timestamp>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl PositionedEntity {
    /// The stored default position, if both coordinates are set.
    pub fn default_position(&self) -> Option<Position> {
        Position::from_columns(self.position_x, self.position_y)
    }
}

/// DTO for creating a positionable entity.
///
/// When the coordinates are omitted a position is generated before insert.
#[derive(Debug, Clone, Deserialize)]
pub struct CreatePositionedEntity {
    pub name: String,
    pub description: Option<String>,
    /// Defaults to `DRAFT` if omitted.
    pub status: Option<String>,
    pub position_x: Option<i32>,
    pub position_y: Option<i32>,
}

/// An entity together with the position it renders at.
#[derive(Debug, Clone, Serialize)]
pub struct EntityWithPosition {
    #[serde(flatten)]
    pub entity: PositionedEntity,
    pub resolved_position: ResolvedPosition,
}

/// One marker on a scene canvas: id, label and resolved position.
#[derive(Debug, Clone, Serialize)]
pub struct CanvasEntry {
    pub id: DbId,
    pub name: String,
    pub status: String,
    pub resolved_position: ResolvedPosition,
}
