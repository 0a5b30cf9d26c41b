//! Gem list loader.

use std::path::Path;

use gem_core::Entity;
use serde::{Deserialize, Serialize};

use crate::config::CatalogConfig;
use crate::loaders::{LoadResult, check_total_count, read_file};
use crate::tags::RawTags;

/// Gem list structure for JSON files.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GemFile {
    #[serde(default)]
    pub total_count: Option<usize>,
    #[serde(default)]
    pub skill_gems: Vec<GemEntry>,
    #[serde(default)]
    pub last_updated: Option<String>,
    #[serde(default)]
    pub source: Option<String>,
}

/// One persisted gem record.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GemEntry {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub tags: Option<RawTags>,
    #[serde(default)]
    pub primary_attribute: Option<String>,
}

impl GemEntry {
    /// Converts to an engine entity, or `None` when the record is unusable.
    fn into_entity(self, config: &CatalogConfig) -> Option<Entity> {
        let name = self.name.filter(|name| !name.trim().is_empty())?;
        let tags = self.tags.map(RawTags::into_tags).unwrap_or_default();
        if tags.is_empty() {
            tracing::debug!("Skipping gem {:?} without tags", name);
            return None;
        }
        if config.skip_support_gems && tags.iter().any(|tag| tag == CatalogConfig::SUPPORT_TAG) {
            return None;
        }
        Some(Entity::new(name, tags).with_primary_attribute(self.primary_attribute.unwrap_or_default()))
    }
}

/// Loader for the gem list.
pub struct GemLoader;

impl GemLoader {
    /// Load gems from a JSON file.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the JSON file containing a GemFile
    /// * `config` - Filters applied to the records
    ///
    /// # Returns
    ///
    /// Returns the usable gems sorted by name.
    pub fn load(path: &Path, config: &CatalogConfig) -> LoadResult<Vec<Entity>> {
        let content = read_file(path)?;
        Self::parse(&content, config)
            .map_err(|e| anyhow::anyhow!("Failed to load gems from {}: {}", path.display(), e))
    }

    /// Parse gems from JSON text.
    pub fn parse(content: &str, config: &CatalogConfig) -> LoadResult<Vec<Entity>> {
        let file: GemFile = serde_json::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse gem list JSON: {}", e))?;
        check_total_count("Gem", file.total_count, file.skill_gems.len());

        let declared = file.skill_gems.len();
        let mut gems: Vec<Entity> = file
            .skill_gems
            .into_iter()
            .filter_map(|entry| entry.into_entity(config))
            .collect();
        gems.sort_by(|a, b| a.name.cmp(&b.name));

        tracing::debug!("Kept {} of {} gem records", gems.len(), declared);
        Ok(gems)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const GEMS: &str = r#"{
        "total_count": 5,
        "skill_gems": [
            { "name": "Fireball", "tags": ["Spell", "Projectile", "Fire"], "primary_attribute": "intelligence" },
            { "name": "Cleave", "tags": "Attack • AoE • Melee • Physical", "primary_attribute": "strength" },
            { "name": "Added Fire Damage Support", "tags": ["Support", "Fire"] },
            { "name": "Mystery", "tags": "" },
            { "tags": ["Spell"] }
        ],
        "last_updated": "2025-01-01T00:00:00Z",
        "source": "PoE Wiki API"
    }"#;

    #[test]
    fn keeps_usable_active_gems_sorted() {
        let gems = GemLoader::parse(GEMS, &CatalogConfig::default()).unwrap();
        let names: Vec<_> = gems.iter().map(|g| g.name.as_str()).collect();
        assert_eq!(names, ["Cleave", "Fireball"]);
        assert_eq!(gems[0].tags(), ["Attack", "AoE", "Melee", "Physical"]);
        assert_eq!(gems[0].primary_attribute, "strength");
    }

    #[test]
    fn support_gems_kept_when_not_skipped() {
        let gems = GemLoader::parse(GEMS, &CatalogConfig::unfiltered()).unwrap();
        assert_eq!(gems.len(), 3);
    }

    #[test]
    fn invalid_json_is_an_error() {
        assert!(GemLoader::parse("{ not json", &CatalogConfig::default()).is_err());
    }
}
