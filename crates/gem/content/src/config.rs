//! Catalog filtering configuration.

use serde::{Deserialize, Serialize};

/// Controls which persisted records reach the engine.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CatalogConfig {
    /// Keep only modifiers whose text mentions "to level of".
    pub level_modifiers_only: bool,

    /// Keep only modifiers from the Item domain.
    pub item_domain_only: bool,

    /// Drop modifiers that only affect gems socketed in the item.
    pub exclude_socketed: bool,

    /// Drop gems tagged `Support`.
    pub skip_support_gems: bool,
}

impl CatalogConfig {
    /// Modifier domain id of ordinary items.
    pub const ITEM_DOMAIN_ID: u32 = 1;

    /// Tag of support gems.
    pub const SUPPORT_TAG: &'static str = "Support";

    pub fn new() -> Self {
        Self {
            level_modifiers_only: true,
            item_domain_only: true,
            exclude_socketed: true,
            skip_support_gems: true,
        }
    }

    /// Configuration that lets every well-formed record through.
    pub fn unfiltered() -> Self {
        Self {
            level_modifiers_only: false,
            item_domain_only: false,
            exclude_socketed: false,
            skip_support_gems: false,
        }
    }
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self::new()
    }
}
