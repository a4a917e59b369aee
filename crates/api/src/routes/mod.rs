pub mod entity;
pub mod health;
pub mod scene;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /scenes                                          create
/// /scenes/{id}                                     get, soft delete
/// /scenes/{scene_id}/canvas/{kind}                 resolved positions for a kind
///
/// /entities/{kind}                                 create (auto placement)
/// /entities/{kind}/{id}                            get (?scene_id=), soft delete
/// /entities/{kind}/{id}/default-position           set default position (PUT)
/// /entities/{kind}/{id}/position                   resolve (?scene_id=), upsert override (PUT)
/// /entities/{kind}/{id}/position/{scene_id}        remove override (DELETE)
/// /entities/{kind}/{id}/overrides                  list overrides
/// ```
///
/// `{kind}` is one of `product-panels`, `product-categories`,
/// `service-categories`, `service-sub-categories`, `scene-categories`,
/// `call-to-actions`.
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/scenes", scene::router())
        .nest("/entities", entity::router())
}
