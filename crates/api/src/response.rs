//! Response envelope shared by all API handlers.
//!
//! Successful bodies are wrapped as `{ "data": ... }` so the scene editor
//! and the renderer can read every endpoint the same way.

use serde::Serialize;

/// Standard `{ "data": T }` response envelope.
///
/// ```ignore
/// Ok(Json(DataResponse { data: resolved }))
/// ```
#[derive(Debug, Serialize)]
pub struct DataResponse<T: Serialize> {
    pub data: T,
}
