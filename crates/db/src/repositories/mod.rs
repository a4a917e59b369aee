//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async methods that
//! accept `&PgPool` as the first argument.

pub mod position_override_repo;
pub mod positioned_entity_repo;
pub mod resolved_position_repo;
pub mod scene_repo;

pub use position_override_repo::PositionOverrideRepo;
pub use positioned_entity_repo::PositionedEntityRepo;
pub use resolved_position_repo::ResolvedPositionRepo;
pub use scene_repo::SceneRepo;
