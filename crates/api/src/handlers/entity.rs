//! Handlers for positionable entities (`/entities/{kind}`).
//!
//! One set of handlers serves all six kinds; the kind comes from the path.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use vtwin_core::coordinates::validate_canvas_position;
use vtwin_core::entity_kind::EntityKind;
use vtwin_core::error::CoreError;
use vtwin_core::placement::Position;
use vtwin_core::types::DbId;
use vtwin_db::models::positioned_entity::{CreatePositionedEntity, EntityWithPosition};
use vtwin_db::repositories::{PositionedEntityRepo, ResolvedPositionRepo};

use crate::error::{AppError, AppResult};
use crate::handlers::position::CoordinatesBody;
use crate::placement::assign_default_position;
use crate::query::SceneScopeParams;
use crate::response::DataResponse;
use crate::state::AppState;

/// POST /api/v1/entities/{kind}
///
/// Both coordinates given: validated and stored as-is. Neither given: a
/// position is generated away from the other entities of the same kind.
pub async fn create(
    State(state): State<AppState>,
    Path(kind): Path<EntityKind>,
    Json(input): Json<CreatePositionedEntity>,
) -> AppResult<impl IntoResponse> {
    let position = match (input.position_x, input.position_y) {
        (Some(x), Some(y)) => {
            let position = Position::new(x, y);
            validate_canvas_position(position)?;
            position
        }
        (None, None) => {
            let outcome =
                assign_default_position(&state.pool, kind, state.config.placement_budget())
                    .await?;
            outcome.position
        }
        (Some(_), None) => return Err(missing_coordinate("position_y")),
        (None, Some(_)) => return Err(missing_coordinate("position_x")),
    };

    let entity = PositionedEntityRepo::create(&state.pool, kind, &input, position).await?;

    tracing::info!(
        kind = %kind,
        entity_id = entity.id,
        x = position.x,
        y = position.y,
        "Entity created",
    );

    Ok((StatusCode::CREATED, Json(DataResponse { data: entity })))
}

/// GET /api/v1/entities/{kind}/{id}?scene_id=
pub async fn get_by_id(
    State(state): State<AppState>,
    Path((kind, id)): Path<(EntityKind, DbId)>,
    Query(params): Query<SceneScopeParams>,
) -> AppResult<impl IntoResponse> {
    let not_found = || {
        AppError::Core(CoreError::NotFound {
            entity: kind.label(),
            id,
        })
    };

    let entity = PositionedEntityRepo::find_by_id(&state.pool, kind, id)
        .await?
        .ok_or_else(not_found)?;
    let resolved_position = ResolvedPositionRepo::resolve(&state.pool, kind, id, params.scene_id)
        .await?
        .ok_or_else(not_found)?;

    Ok(Json(DataResponse {
        data: EntityWithPosition {
            entity,
            resolved_position,
        },
    }))
}

/// DELETE /api/v1/entities/{kind}/{id}
pub async fn delete(
    State(state): State<AppState>,
    Path((kind, id)): Path<(EntityKind, DbId)>,
) -> AppResult<StatusCode> {
    if PositionedEntityRepo::soft_delete(&state.pool, kind, id).await? {
        tracing::info!(kind = %kind, entity_id = id, "Entity soft-deleted");
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound {
            entity: kind.label(),
            id,
        }))
    }
}

/// PUT /api/v1/entities/{kind}/{id}/default-position
///
/// Unlike scene overrides, the default must lie on the canvas.
pub async fn update_default_position(
    State(state): State<AppState>,
    Path((kind, id)): Path<(EntityKind, DbId)>,
    Json(body): Json<CoordinatesBody>,
) -> AppResult<impl IntoResponse> {
    let position = body.to_position()?;
    validate_canvas_position(position)?;

    let entity = PositionedEntityRepo::update_default_position(&state.pool, kind, id, position)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: kind.label(),
            id,
        }))?;

    tracing::info!(
        kind = %kind,
        entity_id = id,
        x = position.x,
        y = position.y,
        "Default position updated",
    );

    Ok(Json(DataResponse { data: entity }))
}

fn missing_coordinate(field: &'static str) -> AppError {
    AppError::Core(CoreError::FieldValidation {
        field,
        message: "both coordinates must be given together".to_string(),
    })
}
