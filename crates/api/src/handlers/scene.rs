//! Handlers for the `/scenes` resource.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use vtwin_core::entity_kind::EntityKind;
use vtwin_core::error::CoreError;
use vtwin_core::types::DbId;
use vtwin_db::models::scene::{CreateScene, Scene};
use vtwin_db::repositories::{ResolvedPositionRepo, SceneRepo};

use crate::error::{AppError, AppResult};
use crate::response::DataResponse;
use crate::state::AppState;

/// POST /api/v1/scenes
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateScene>,
) -> AppResult<impl IntoResponse> {
    let scene = SceneRepo::create(&state.pool, &input).await?;

    tracing::info!(scene_id = scene.id, slug = %scene.slug, "Scene created");

    Ok((StatusCode::CREATED, Json(DataResponse { data: scene })))
}

/// GET /api/v1/scenes/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<DataResponse<Scene>>> {
    let scene = find_scene(&state, id).await?;
    Ok(Json(DataResponse { data: scene }))
}

/// DELETE /api/v1/scenes/{id}
///
/// Soft delete. Overrides recorded for the scene stay in place but are no
/// longer used for resolution.
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    if SceneRepo::soft_delete(&state.pool, id).await? {
        tracing::info!(scene_id = id, "Scene soft-deleted");
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound { entity: "Scene", id }))
    }
}

/// GET /api/v1/scenes/{scene_id}/canvas/{kind}
///
/// Every live entity of `kind` with the position it renders at in this
/// scene.
pub async fn canvas(
    State(state): State<AppState>,
    Path((scene_id, kind)): Path<(DbId, EntityKind)>,
) -> AppResult<impl IntoResponse> {
    find_scene(&state, scene_id).await?;
    let entries = ResolvedPositionRepo::list_for_scene(&state.pool, kind, scene_id).await?;
    Ok(Json(DataResponse { data: entries }))
}

async fn find_scene(state: &AppState, id: DbId) -> AppResult<Scene> {
    SceneRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Scene", id }))
}
