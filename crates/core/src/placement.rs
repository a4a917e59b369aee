//! Randomised default placement of markers on a scene canvas.
//!
//! Coordinates are percentages of the canvas (`0..=100`). New markers are
//! pushed towards the four edges so that freshly created entities do not
//! pile up over the busy centre of a scene. [`find_open_position`] keeps
//! sampling until it finds a spot that does not coincide with an existing
//! marker of the same kind, or until its [`PlacementBudget`] runs out.

use std::ops::RangeInclusive;
use std::time::{Duration, Instant};

use rand::Rng;
use serde::{Deserialize, Serialize};

/// Default wall-clock budget for [`find_open_position`].
pub const DEFAULT_PLACEMENT_TIMEOUT: Duration = Duration::from_secs(5);

/// Two positions collide when they are closer than this on both axes.
pub const COLLISION_DISTANCE: i32 = 1;

/// An `(x, y)` point on the canvas, in percent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Build a position from a pair of nullable columns.
    ///
    /// Rows written before placement became mandatory may have one or both
    /// coordinates missing; such rows have no usable position.
    pub fn from_columns(x: Option<i32>, y: Option<i32>) -> Option<Self> {
        match (x, y) {
            (Some(x), Some(y)) => Some(Self { x, y }),
            _ => None,
        }
    }

    /// Near-exact coincidence test used by overlap avoidance.
    pub fn collides_with(&self, other: &Position) -> bool {
        (self.x - other.x).abs() < COLLISION_DISTANCE
            && (self.y - other.y).abs() < COLLISION_DISTANCE
    }
}

// ---------------------------------------------------------------------------
// Edge zones
// ---------------------------------------------------------------------------

/// The four bands a generated marker may land in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EdgeZone {
    Left,
    Right,
    Top,
    Bottom,
}

impl EdgeZone {
    pub const ALL: [EdgeZone; 4] = [
        EdgeZone::Left,
        EdgeZone::Right,
        EdgeZone::Top,
        EdgeZone::Bottom,
    ];

    /// Inclusive x range of the band.
    pub fn x_range(self) -> RangeInclusive<i32> {
        match self {
            EdgeZone::Left => 5..=30,
            EdgeZone::Right => 70..=85,
            EdgeZone::Top | EdgeZone::Bottom => 5..=85,
        }
    }

    /// Inclusive y range of the band.
    pub fn y_range(self) -> RangeInclusive<i32> {
        match self {
            EdgeZone::Left | EdgeZone::Right => 5..=90,
            EdgeZone::Top => 5..=30,
            EdgeZone::Bottom => 70..=90,
        }
    }

    /// Sample a point uniformly inside the band.
    pub fn sample<R: Rng + ?Sized>(self, rng: &mut R) -> Position {
        Position {
            x: rng.random_range(self.x_range()),
            y: rng.random_range(self.y_range()),
        }
    }
}

/// Produce one edge-biased position.
///
/// The zone is picked uniformly, then a point is sampled within it. Every
/// result satisfies `5 <= x <= 85` and `5 <= y <= 90`.
pub fn generate_position<R: Rng + ?Sized>(rng: &mut R) -> Position {
    let zone = EdgeZone::ALL[rng.random_range(0..EdgeZone::ALL.len())];
    zone.sample(rng)
}

// ---------------------------------------------------------------------------
// Overlap avoidance
// ---------------------------------------------------------------------------

/// Limits on how long [`find_open_position`] keeps resampling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlacementBudget {
    /// Wall-clock time allowed since the loop started.
    pub timeout: Duration,
    /// Optional hard cap on the number of samples drawn.
    pub max_attempts: Option<u32>,
}

impl PlacementBudget {
    pub fn new(timeout: Duration) -> Self {
        Self {
            timeout,
            max_attempts: None,
        }
    }

    pub fn with_max_attempts(mut self, max_attempts: u32) -> Self {
        self.max_attempts = Some(max_attempts);
        self
    }
}

impl Default for PlacementBudget {
    fn default() -> Self {
        Self::new(DEFAULT_PLACEMENT_TIMEOUT)
    }
}

/// Result of a placement search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlacementOutcome {
    /// The chosen position.
    pub position: Position,
    /// Number of candidates sampled, including the chosen one.
    pub attempts: u32,
    /// `true` when the budget ran out and `position` may collide.
    pub exhausted: bool,
}

/// Find a position that does not collide with any of `existing`.
///
/// `existing` should hold the default positions of the entities of the same
/// kind. When the budget runs out the last sampled candidate is returned
/// as-is; placement never fails.
pub fn find_open_position<R: Rng + ?Sized>(
    rng: &mut R,
    existing: &[Position],
    budget: PlacementBudget,
) -> PlacementOutcome {
    let deadline = Instant::now() + budget.timeout;
    let mut attempts: u32 = 0;

    loop {
        let candidate = generate_position(rng);
        attempts = attempts.saturating_add(1);

        if !existing.iter().any(|p| p.collides_with(&candidate)) {
            return PlacementOutcome {
                position: candidate,
                attempts,
                exhausted: false,
            };
        }

        let out_of_attempts = budget.max_attempts.is_some_and(|max| attempts >= max);
        if out_of_attempts || Instant::now() >= deadline {
            return PlacementOutcome {
                position: candidate,
                attempts,
                exhausted: true,
            };
        }
    }
}
