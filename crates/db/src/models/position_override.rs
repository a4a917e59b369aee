//! Per-scene position override model.
//!
//! Leaf of the resolution chain: scene override -> entity default.

use serde::Serialize;
use sqlx::FromRow;
use vtwin_core::entity_kind::EntityKind;
use vtwin_core::placement::Position;
use vtwin_core::types::{DbId, Timestamp};

/// A row from one of the `*_positions` override tables.
///
/// The entity foreign key column differs per table and is aliased to
/// `entity_id` in every query.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct PositionOverride {
    pub id: DbId,
    pub entity_id: DbId,
    pub scene_id: DbId,
    pub position_x: i32,
    pub position_y: i32,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl PositionOverride {
    pub fn position(&self) -> Position {
        Position::new(self.position_x, self.position_y)
    }
}

/// An override table bound to the entity kind it belongs to.
///
/// Only obtainable for kinds that store overrides, so repository methods
/// taking an `OverrideTable` never need to handle the unsupported case.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OverrideTable {
    pub kind: EntityKind,
    pub table: &'static str,
    pub entity_column: &'static str,
}

impl OverrideTable {
    pub fn for_kind(kind: EntityKind) -> Option<Self> {
        kind.override_table().map(|table| Self {
            kind,
            table,
            entity_column: kind.override_entity_column(),
        })
    }
}
