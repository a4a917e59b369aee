//! Shared query parameter types for API handlers.

use serde::Deserialize;
use vtwin_core::types::DbId;

/// Optional scene context (`?scene_id=`) for position resolution.
///
/// Without a scene, entities resolve to their default position.
#[derive(Debug, Deserialize)]
pub struct SceneScopeParams {
    pub scene_id: Option<DbId>,
}
