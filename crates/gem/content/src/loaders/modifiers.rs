//! Modifier list loader.

use std::path::Path;

use gem_core::ModifierRecord;
use serde::{Deserialize, Serialize};

use crate::config::CatalogConfig;
use crate::loaders::{LoadResult, check_total_count, read_file};

/// Modifier list structure for JSON files.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ModifierFile {
    #[serde(default)]
    pub total_count: Option<usize>,
    #[serde(default)]
    pub domains: Vec<u32>,
    #[serde(default)]
    pub modifiers: Vec<ModifierEntry>,
    #[serde(default)]
    pub last_updated: Option<String>,
    #[serde(default)]
    pub source: Option<String>,
}

/// One persisted modifier record.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ModifierEntry {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub stat_text: String,
    #[serde(default)]
    pub stat_text_raw: Option<String>,
    #[serde(default)]
    pub generation_type: String,
    #[serde(default)]
    pub generation_type_id: u32,
    #[serde(default)]
    pub domain: String,
    #[serde(default)]
    pub domain_id: u32,
    #[serde(default)]
    pub tags: String,
    #[serde(default)]
    pub influence: Option<String>,
}

impl ModifierEntry {
    fn lowered_text(&self) -> String {
        self.stat_text_raw.as_deref().unwrap_or_default().to_lowercase()
    }

    /// Whether the configured filters keep this entry.
    pub fn is_kept(&self, config: &CatalogConfig) -> bool {
        if self.id.as_deref().is_none_or(|id| id.trim().is_empty()) {
            return false;
        }
        if config.item_domain_only && self.domain_id != CatalogConfig::ITEM_DOMAIN_ID {
            return false;
        }
        let text = self.lowered_text();
        if config.level_modifiers_only && !text.contains("to level of") {
            return false;
        }
        !(config.exclude_socketed && text.contains("socketed"))
    }

    fn into_record(self) -> ModifierRecord {
        ModifierRecord {
            id: self.id.unwrap_or_default(),
            name: self.name,
            stat_text_raw: self.stat_text_raw,
            tags: self.tags,
            influence: self.influence,
        }
    }
}

/// Loader for the modifier list.
pub struct ModifierLoader;

impl ModifierLoader {
    /// Load modifiers from a JSON file.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the JSON file containing a ModifierFile
    /// * `config` - Filters applied to the records
    ///
    /// # Returns
    ///
    /// Returns the kept modifiers in file order.
    pub fn load(path: &Path, config: &CatalogConfig) -> LoadResult<Vec<ModifierRecord>> {
        let content = read_file(path)?;
        Self::parse(&content, config).map_err(|e| {
            anyhow::anyhow!("Failed to load modifiers from {}: {}", path.display(), e)
        })
    }

    /// Parse modifiers from JSON text.
    pub fn parse(content: &str, config: &CatalogConfig) -> LoadResult<Vec<ModifierRecord>> {
        let file: ModifierFile = serde_json::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse modifier list JSON: {}", e))?;
        check_total_count("Modifier", file.total_count, file.modifiers.len());

        let declared = file.modifiers.len();
        let records: Vec<ModifierRecord> = file
            .modifiers
            .into_iter()
            .filter(|entry| entry.is_kept(config))
            .map(ModifierEntry::into_record)
            .collect();

        tracing::debug!("Kept {} of {} modifier records", records.len(), declared);
        Ok(records)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MODIFIERS: &str = r#"{
        "total_count": 5,
        "domains": [1, 9],
        "modifiers": [
            { "id": "GlobalSpellGemsLevel1", "name": "of the Sorcerer", "stat_text_raw": "+1 to Level of all Spell Skill Gems", "domain_id": 1 },
            { "id": "LocalIncreaseSocketedGemLevel1", "name": "of Skill", "stat_text_raw": "+1 to Level of Socketed Gems", "domain_id": 1 },
            { "id": "JewelFireDamage", "name": "Burning", "stat_text_raw": "10% increased Fire Damage", "domain_id": 1 },
            { "id": "CraftedFireGems", "name": "Crafted", "stat_text_raw": "+1 to Level of all Fire Skill Gems", "domain_id": 9 },
            { "name": "Nameless", "stat_text_raw": "+1 to Level of all Skill Gems", "domain_id": 1 }
        ]
    }"#;

    #[test]
    fn default_filters_keep_item_level_modifiers() {
        let records = ModifierLoader::parse(MODIFIERS, &CatalogConfig::default()).unwrap();
        let ids: Vec<_> = records.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, ["GlobalSpellGemsLevel1"]);
        assert_eq!(records[0].influence, None);
    }

    #[test]
    fn unfiltered_keeps_everything_with_an_id() {
        let records = ModifierLoader::parse(MODIFIERS, &CatalogConfig::unfiltered()).unwrap();
        assert_eq!(records.len(), 4);
    }

    #[test]
    fn influence_is_carried_through() {
        let json = r#"{ "modifiers": [
            { "id": "ElderGems", "name": "Elder's", "stat_text_raw": "+1 to Level of all Skill Gems", "domain_id": 1, "influence": "Elder" }
        ] }"#;
        let records = ModifierLoader::parse(json, &CatalogConfig::default()).unwrap();
        assert_eq!(records[0].influence.as_deref(), Some("Elder"));
    }
}
