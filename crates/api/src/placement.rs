//! Default-position assignment for newly created entities.
//!
//! Reads the default positions already taken by entities of the same kind,
//! then runs the sampling loop off the async runtime. No transaction is held
//! while sampling; two concurrent creations can still land on the same spot,
//! which rendering tolerates.

use vtwin_core::entity_kind::EntityKind;
use vtwin_core::placement::{find_open_position, PlacementBudget, PlacementOutcome};
use vtwin_db::repositories::PositionedEntityRepo;
use vtwin_db::DbPool;

use crate::error::{AppError, AppResult};

/// Pick a default position for a new entity of `kind`.
///
/// Never fails for placement reasons: an exhausted budget yields the last
/// sampled candidate.
pub async fn assign_default_position(
    pool: &DbPool,
    kind: EntityKind,
    budget: PlacementBudget,
) -> AppResult<PlacementOutcome> {
    let existing = PositionedEntityRepo::list_default_positions(pool, kind).await?;
    let occupied = existing.len();

    let outcome = tokio::task::spawn_blocking(move || {
        let mut rng = rand::rng();
        find_open_position(&mut rng, &existing, budget)
    })
    .await
    .map_err(|e| AppError::InternalError(format!("Placement task failed: {e}")))?;

    if outcome.exhausted {
        tracing::debug!(
            kind = %kind,
            occupied,
            attempts = outcome.attempts,
            x = outcome.position.x,
            y = outcome.position.y,
            "Placement budget exhausted, accepting possibly overlapping position",
        );
    }

    Ok(outcome)
}
