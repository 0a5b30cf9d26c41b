use std::fs;

use gem_content::{CatalogConfig, Catalogs, ConfigLoader};
use gem_core::{Variant, find_combinations};

const GEMS: &str = r#"{
    "total_count": 3,
    "skill_gems": [
        { "name": "Fireball", "tags": "Spell • Projectile • AoE • Fire", "primary_attribute": "intelligence" },
        { "name": "Raise Spectre", "tags": ["Spell", "Minion"], "primary_attribute": "intelligence" },
        { "name": "Spell Echo Support", "tags": ["Support", "Spell"], "primary_attribute": "intelligence" }
    ]
}"#;

const MODIFIERS: &str = r#"{
    "total_count": 4,
    "domains": [1],
    "modifiers": [
        { "id": "GlobalGems", "name": "of the Exalted", "stat_text_raw": "+1 to Level of all Skill Gems", "domain_id": 1 },
        { "id": "FireGems", "name": "Flame Shaper's", "stat_text_raw": "+1 to Level of all Fire Skill Gems", "domain_id": 1 },
        { "id": "MinionGems", "name": "Necromancer's", "stat_text_raw": "+2 to Level of all Minion Skill Gems", "domain_id": 1 },
        { "id": "Socketed", "name": "of Skill", "stat_text_raw": "+1 to Level of Socketed Gems", "domain_id": 1 }
    ]
}"#;

#[test]
fn load_and_match_end_to_end() {
    let dir = tempfile::tempdir().unwrap();
    let gems_path = dir.path().join("gems_cleaned.json");
    let modifiers_path = dir.path().join("modifiers_amulet_level.json");
    fs::write(&gems_path, GEMS).unwrap();
    fs::write(&modifiers_path, MODIFIERS).unwrap();

    let catalogs = Catalogs::load(&gems_path, &modifiers_path, &CatalogConfig::default()).unwrap();
    assert_eq!(catalogs.gems.len(), 2);
    assert_eq!(catalogs.modifiers.len(), 3);
    assert!(catalogs.gem("Spell Echo Support").is_none());

    let fireball = catalogs.gem("fireball").unwrap();
    let grouped = find_combinations(Some(fireball), &catalogs.modifiers);
    let levels: Vec<_> = grouped.levels().map(|(level, _)| level).collect();
    assert_eq!(levels, [1, 2, 4, 8]);
    assert_eq!(
        grouped
            .bucket(2, Variant::Regular)
            .iter()
            .map(|c| c.display_text.as_str())
            .collect::<Vec<_>>(),
        ["of the Exalted + Flame Shaper's"]
    );

    let spectre = catalogs.gem("Raise Spectre").unwrap();
    let grouped = find_combinations(Some(spectre), &catalogs.modifiers);
    // universal (1) + minion (2) under FocusedReflecting
    assert_eq!(grouped.bucket(12, Variant::FocusedReflecting).len(), 1);
}

#[test]
fn config_file_relaxes_filters() {
    let dir = tempfile::tempdir().unwrap();
    let config_path = dir.path().join("catalog.toml");
    fs::write(&config_path, "exclude_socketed = false\nskip_support_gems = false\n").unwrap();
    let gems_path = dir.path().join("gems.json");
    let modifiers_path = dir.path().join("modifiers.json");
    fs::write(&gems_path, GEMS).unwrap();
    fs::write(&modifiers_path, MODIFIERS).unwrap();

    let config = ConfigLoader::load(&config_path).unwrap();
    let catalogs = Catalogs::load(&gems_path, &modifiers_path, &config).unwrap();
    assert_eq!(catalogs.gems.len(), 3);
    assert_eq!(catalogs.modifiers.len(), 4);
}

#[test]
fn missing_file_reports_path() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("nope.json");
    let err = Catalogs::load(&missing, &missing, &CatalogConfig::default()).unwrap_err();
    assert!(err.to_string().contains("nope.json"));
}

#[test]
fn shipped_config_matches_defaults() {
    let path = std::path::Path::new(env!("CARGO_MANIFEST_DIR")).join("../../../config/catalog.toml");
    assert_eq!(ConfigLoader::load(&path).unwrap(), CatalogConfig::default());
}
