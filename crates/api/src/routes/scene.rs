//! Route definitions for scenes, mounted at `/scenes`.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::scene;
use crate::state::AppState;

/// ```text
/// POST   /                          -> create
/// GET    /{id}                      -> get_by_id
/// DELETE /{id}                      -> delete
/// GET    /{scene_id}/canvas/{kind}  -> canvas
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", post(scene::create))
        .route("/{id}", get(scene::get_by_id).delete(scene::delete))
        .route("/{scene_id}/canvas/{kind}", get(scene::canvas))
}
