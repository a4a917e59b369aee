//! Positionable entity kinds and their table bindings.
//!
//! Every kind owns its own placement space: default positions live on the
//! kind's table and per-scene overrides (where supported) live in a separate
//! table per kind. Nothing is shared across kinds.

use std::fmt;

use serde::{Deserialize, Serialize};

/// The kinds of entity that can be placed on a scene canvas.
///
/// Serialized in kebab-case plural form so the value doubles as the URL
/// path segment (`/entities/product-panels/...`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum EntityKind {
    ProductPanels,
    ProductCategories,
    ServiceCategories,
    ServiceSubCategories,
    SceneCategories,
    CallToActions,
}

impl EntityKind {
    /// All recognised kinds.
    pub const ALL: [EntityKind; 6] = [
        EntityKind::ProductPanels,
        EntityKind::ProductCategories,
        EntityKind::ServiceCategories,
        EntityKind::ServiceSubCategories,
        EntityKind::SceneCategories,
        EntityKind::CallToActions,
    ];

    /// Table holding the entity rows and their default position.
    pub fn table(self) -> &'static str {
        match self {
            EntityKind::ProductPanels => "product_panels",
            EntityKind::ProductCategories => "product_categories",
            EntityKind::ServiceCategories => "service_categories",
            EntityKind::ServiceSubCategories => "service_sub_categories",
            EntityKind::SceneCategories => "scene_categories",
            EntityKind::CallToActions => "call_to_actions",
        }
    }

    /// Table holding per-scene position overrides, if the kind has one.
    ///
    /// Scene categories are only ever drawn at their default position.
    pub fn override_table(self) -> Option<&'static str> {
        match self {
            EntityKind::ProductPanels => Some("product_panel_positions"),
            EntityKind::ProductCategories => Some("product_category_positions"),
            EntityKind::ServiceCategories => Some("service_category_positions"),
            EntityKind::ServiceSubCategories => Some("service_sub_category_positions"),
            EntityKind::SceneCategories => None,
            EntityKind::CallToActions => Some("call_to_action_positions"),
        }
    }

    /// Foreign key column in the override table pointing at the entity.
    pub fn override_entity_column(self) -> &'static str {
        match self {
            EntityKind::ProductPanels => "product_panel_id",
            EntityKind::ProductCategories => "product_category_id",
            EntityKind::ServiceCategories => "service_category_id",
            EntityKind::ServiceSubCategories => "service_sub_category_id",
            EntityKind::SceneCategories => "scene_category_id",
            EntityKind::CallToActions => "call_to_action_id",
        }
    }

    /// Whether scene-scoped overrides are stored for this kind.
    pub fn supports_overrides(self) -> bool {
        self.override_table().is_some()
    }

    /// Human-readable singular name, used in error messages.
    pub fn label(self) -> &'static str {
        match self {
            EntityKind::ProductPanels => "ProductPanel",
            EntityKind::ProductCategories => "ProductCategory",
            EntityKind::ServiceCategories => "ServiceCategory",
            EntityKind::ServiceSubCategories => "ServiceSubCategory",
            EntityKind::SceneCategories => "SceneCategory",
            EntityKind::CallToActions => "CallToAction",
        }
    }

    /// URL path segment for the kind.
    pub fn slug(self) -> &'static str {
        match self {
            EntityKind::ProductPanels => "product-panels",
            EntityKind::ProductCategories => "product-categories",
            EntityKind::ServiceCategories => "service-categories",
            EntityKind::ServiceSubCategories => "service-sub-categories",
            EntityKind::SceneCategories => "scene-categories",
            EntityKind::CallToActions => "call-to-actions",
        }
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.slug())
    }
}
