//! Route definitions for positionable entities, mounted at `/entities`.

use axum::routing::{delete, get, post, put};
use axum::Router;

use crate::handlers::{entity, position};
use crate::state::AppState;

/// ```text
/// POST   /{kind}                              -> entity::create
/// GET    /{kind}/{id}                         -> entity::get_by_id
/// DELETE /{kind}/{id}                         -> entity::delete
/// PUT    /{kind}/{id}/default-position        -> entity::update_default_position
/// GET    /{kind}/{id}/position                -> position::resolve
/// PUT    /{kind}/{id}/position                -> position::upsert_override
/// DELETE /{kind}/{id}/position/{scene_id}     -> position::remove_override
/// GET    /{kind}/{id}/overrides               -> position::list_overrides
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/{kind}", post(entity::create))
        .route("/{kind}/{id}", get(entity::get_by_id).delete(entity::delete))
        .route(
            "/{kind}/{id}/default-position",
            put(entity::update_default_position),
        )
        .route(
            "/{kind}/{id}/position",
            get(position::resolve).put(position::upsert_override),
        )
        .route(
            "/{kind}/{id}/position/{scene_id}",
            delete(position::remove_override),
        )
        .route("/{kind}/{id}/overrides", get(position::list_overrides))
}
