//! Scene model and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use vtwin_core::types::{DbId, Timestamp};

/// A row from the `scenes` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Scene {
    pub id: DbId,
    pub title: String,
    pub slug: String,
    pub status: String,
    pub deleted_at: Option<Timestamp>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new scene.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateScene {
    pub title: String,
    pub slug: String,
    /// Defaults to `DRAFT` if omitted.
    pub status: Option<String>,
}
