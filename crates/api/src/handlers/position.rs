//! Handlers for scene-scoped positions: resolution and per-scene overrides.
//!
//! Routes nested under `/entities/{kind}/{id}`. Bodies are the raw output of
//! the scene editor's drag-and-drop, so coordinates arrive as JSON values
//! and are coerced here rather than by serde.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use serde::Deserialize;
use serde_json::Value;
use vtwin_core::coordinates::{coerce_coordinate, coerce_id};
use vtwin_core::entity_kind::EntityKind;
use vtwin_core::error::CoreError;
use vtwin_core::placement::Position;
use vtwin_core::types::DbId;
use vtwin_db::models::position_override::OverrideTable;
use vtwin_db::repositories::{
    PositionOverrideRepo, PositionedEntityRepo, ResolvedPositionRepo, SceneRepo,
};

use crate::error::{AppError, AppResult};
use crate::query::SceneScopeParams;
use crate::response::DataResponse;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Request bodies
// ---------------------------------------------------------------------------

/// A canvas point as posted by the editor. `left`/`top` are accepted for
/// `x`/`y`.
#[derive(Debug, Deserialize)]
pub struct CoordinatesBody {
    #[serde(default, alias = "left")]
    pub x: Value,
    #[serde(default, alias = "top")]
    pub y: Value,
}

impl CoordinatesBody {
    /// Coerce both coordinates, reporting the first bad field.
    pub fn to_position(&self) -> Result<Position, CoreError> {
        Ok(Position::new(
            coerce_coordinate("x", &self.x)?,
            coerce_coordinate("y", &self.y)?,
        ))
    }
}

/// Body of `PUT .../position`.
#[derive(Debug, Deserialize)]
pub struct ScenePositionUpdate {
    #[serde(default)]
    pub scene_id: Value,
    #[serde(flatten)]
    pub coordinates: CoordinatesBody,
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// GET /api/v1/entities/{kind}/{id}/position?scene_id=
///
/// Scene override, else default, else `unpositioned`.
pub async fn resolve(
    State(state): State<AppState>,
    Path((kind, id)): Path<(EntityKind, DbId)>,
    Query(params): Query<SceneScopeParams>,
) -> AppResult<impl IntoResponse> {
    let resolved = ResolvedPositionRepo::resolve(&state.pool, kind, id, params.scene_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: kind.label(),
            id,
        }))?;
    Ok(Json(DataResponse { data: resolved }))
}

/// PUT /api/v1/entities/{kind}/{id}/position
///
/// Record where the entity sits in one scene. Repeated calls for the same
/// scene update the existing override.
pub async fn upsert_override(
    State(state): State<AppState>,
    Path((kind, id)): Path<(EntityKind, DbId)>,
    Json(body): Json<ScenePositionUpdate>,
) -> AppResult<impl IntoResponse> {
    let target = override_table(kind)?;
    let scene_id = coerce_id("scene_id", &body.scene_id)?;
    let position = body.coordinates.to_position()?;

    if SceneRepo::find_by_id(&state.pool, scene_id).await?.is_none() {
        return Err(CoreError::FieldValidation {
            field: "scene_id",
            message: format!("scene {scene_id} does not exist"),
        }
        .into());
    }
    if PositionedEntityRepo::find_by_id(&state.pool, kind, id)
        .await?
        .is_none()
    {
        return Err(CoreError::FieldValidation {
            field: "entity_id",
            message: format!("{} {id} does not exist", kind.label()),
        }
        .into());
    }

    let row = PositionOverrideRepo::upsert(&state.pool, target, scene_id, id, position).await?;

    tracing::info!(
        kind = %kind,
        entity_id = id,
        scene_id,
        x = row.position_x,
        y = row.position_y,
        "Scene position saved",
    );

    Ok(Json(DataResponse { data: row }))
}

/// GET /api/v1/entities/{kind}/{id}/overrides
pub async fn list_overrides(
    State(state): State<AppState>,
    Path((kind, id)): Path<(EntityKind, DbId)>,
) -> AppResult<impl IntoResponse> {
    let target = override_table(kind)?;
    PositionedEntityRepo::find_by_id(&state.pool, kind, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: kind.label(),
            id,
        }))?;

    let rows = PositionOverrideRepo::list_for_entity(&state.pool, target, id).await?;
    Ok(Json(DataResponse { data: rows }))
}

/// DELETE /api/v1/entities/{kind}/{id}/position/{scene_id}
///
/// Remove the override so the scene falls back to the default position.
pub async fn remove_override(
    State(state): State<AppState>,
    Path((kind, id, scene_id)): Path<(EntityKind, DbId, DbId)>,
) -> AppResult<StatusCode> {
    let target = override_table(kind)?;
    if PositionOverrideRepo::delete(&state.pool, target, scene_id, id).await? {
        tracing::info!(kind = %kind, entity_id = id, scene_id, "Scene position removed");
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound {
            entity: "PositionOverride",
            id: scene_id,
        }))
    }
}

fn override_table(kind: EntityKind) -> Result<OverrideTable, CoreError> {
    OverrideTable::for_kind(kind).ok_or_else(|| {
        CoreError::Validation(format!(
            "{} positions cannot be set per scene",
            kind.label()
        ))
    })
}
