//! Position resolution for rendering.
//!
//! Fallback chain: scene override, then the entity's default position, then
//! nothing. Rendering code decides what to draw for an unpositioned entity.

use serde::Serialize;

use crate::placement::Position;

/// Where a resolved position came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PositionSource {
    /// A per-scene override row.
    Override,
    /// The entity's own stored position.
    Default,
    /// Neither was available.
    Unpositioned,
}

/// The position to render for an entity, with its provenance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ResolvedPosition {
    pub position: Option<Position>,
    pub source: PositionSource,
}

impl ResolvedPosition {
    pub const UNPOSITIONED: ResolvedPosition = ResolvedPosition {
        position: None,
        source: PositionSource::Unpositioned,
    };

    pub fn is_positioned(&self) -> bool {
        self.position.is_some()
    }
}

/// Apply the fallback chain to an optional override and default.
pub fn resolve(override_position: Option<Position>, default: Option<Position>) -> ResolvedPosition {
    if let Some(position) = override_position {
        return ResolvedPosition {
            position: Some(position),
            source: PositionSource::Override,
        };
    }
    match default {
        Some(position) => ResolvedPosition {
            position: Some(position),
            source: PositionSource::Default,
        },
        None => ResolvedPosition::UNPOSITIONED,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn override_wins_over_default() {
        let r = resolve(Some(Position::new(9, 9)), Some(Position::new(1, 1)));
        assert_eq!(r.position, Some(Position::new(9, 9)));
        assert_eq!(r.source, PositionSource::Override);
    }

    #[test]
    fn default_used_without_override() {
        let r = resolve(None, Some(Position::new(1, 1)));
        assert_eq!(r.position, Some(Position::new(1, 1)));
        assert_eq!(r.source, PositionSource::Default);
    }

    #[test]
    fn override_used_even_without_default() {
        let r = resolve(Some(Position::new(4, 2)), None);
        assert_eq!(r.source, PositionSource::Override);
    }

    #[test]
    fn nothing_yields_unpositioned() {
        let r = resolve(None, None);
        assert_eq!(r, ResolvedPosition::UNPOSITIONED);
        assert!(!r.is_positioned());
    }

    #[test]
    fn serializes_with_lowercase_source() {
        let json = serde_json::to_value(resolve(None, Some(Position::new(3, 4)))).unwrap();
        assert_eq!(json["source"], "default");
        assert_eq!(json["position"]["x"], 3);
        assert_eq!(json["position"]["y"], 4);

        let json = serde_json::to_value(ResolvedPosition::UNPOSITIONED).unwrap();
        assert_eq!(json["source"], "unpositioned");
        assert!(json["position"].is_null());
    }
}
