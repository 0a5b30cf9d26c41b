//! Modifier matcher.
//!
//! Filters a modifier catalog down to the modifiers that apply to one gem and
//! annotates each survivor with its level bonus and display priority.
//!
//! Matching is total: missing input or malformed records shrink the output,
//! they never produce an error.

pub mod priority;
pub mod rules;

pub use priority::{level_of, priority_of};
pub use rules::{MatchKind, classify};

use crate::catalog::{Entity, ModifierRecord};
use crate::error::RecordError;
use crate::text;

/// A catalog modifier that applies to the selected gem.
///
/// Created fresh for every matching pass and never persisted.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MatchedModifier {
    /// Verbatim `stat_text_raw` of the record.
    pub text: String,
    pub name: String,
    pub id: String,
    /// Non-empty influence, if any.
    pub influence: Option<String>,
    /// Level bonus, at least one.
    pub level: u32,
    /// Display priority, lower is more general.
    pub priority: u8,
}

impl MatchedModifier {
    /// Annotates a record without checking applicability.
    pub fn from_record(record: &ModifierRecord) -> Result<Self, RecordError> {
        let raw = record.stat_text()?;
        Ok(Self {
            text: raw.to_owned(),
            name: record.name.clone(),
            id: record.id.clone(),
            influence: record
                .influence
                .as_ref()
                .filter(|influence| !influence.trim().is_empty())
                .cloned(),
            level: level_of(raw),
            priority: priority_of(raw),
        })
    }

    /// Applies to every gem ("all skill gems", not spell-restricted).
    pub fn is_universal(&self) -> bool {
        text::is_universal(&text::lower(&self.text))
    }

    /// Restricted to one damage type ("all <type> skill gems").
    pub fn is_damage_restricted(&self) -> bool {
        text::restricted_damage_type(&text::lower(&self.text)).is_some()
    }

    pub fn is_influenced(&self) -> bool {
        self.influence.is_some()
    }
}

/// Returns the catalog modifiers applicable to `entity`, in catalog order.
///
/// A missing entity, a malformed entity or an empty catalog yields an empty
/// sequence. Malformed modifier records are skipped.
pub fn match_modifiers(entity: Option<&Entity>, catalog: &[ModifierRecord]) -> Vec<MatchedModifier> {
    let Some(entity) = entity else {
        tracing::debug!("No gem selected; nothing to match");
        return Vec::new();
    };
    if let Err(err) = entity.validate() {
        tracing::warn!(code = err.error_code(), "Skipping malformed gem: {}", err);
        return Vec::new();
    }

    let matched: Vec<MatchedModifier> = catalog
        .iter()
        .filter_map(|record| match_one(entity, record))
        .collect();

    tracing::debug!(
        "Gem {:?}: {} of {} modifiers apply",
        entity.name,
        matched.len(),
        catalog.len()
    );
    matched
}

fn match_one(entity: &Entity, record: &ModifierRecord) -> Option<MatchedModifier> {
    let raw = match record.stat_text() {
        Ok(raw) => raw,
        Err(err) => {
            tracing::debug!(code = err.error_code(), "Skipping malformed modifier: {}", err);
            return None;
        }
    };

    let lowered = text::lower(raw);
    let rule = rules::decisive_rule(&lowered)?;
    if !rule.admits(&lowered, entity) {
        return None;
    }

    tracing::trace!("Modifier {} matched {:?} by {} rule", record.id, entity.name, rule.kind);
    MatchedModifier::from_record(record).ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog() -> Vec<ModifierRecord> {
        vec![
            ModifierRecord::new("u", "Exalted", "+1 to Level of all Skill Gems"),
            ModifierRecord::new("f", "Flame", "+1 to Level of all Fire Skill Gems"),
            ModifierRecord::new("c", "Frost", "+1 to Level of all Cold Skill Gems"),
            ModifierRecord::new("s", "Arcane", "+1 to Level of all Spell Skill Gems"),
            ModifierRecord::new("m", "Necro", "+2 to Level of all Minion Skill Gems"),
            ModifierRecord::new("x", "Socket", "+1 to Level of Socketed Gems"),
        ]
    }

    #[test]
    fn fire_spell_matches_universal_fire_and_spell() {
        let fireball = Entity::new("Fireball", ["Spell", "Fire", "Projectile"]);
        let ids: Vec<_> = match_modifiers(Some(&fireball), &catalog())
            .into_iter()
            .map(|m| m.id)
            .collect();
        assert_eq!(ids, ["u", "f", "s"]);
    }

    #[test]
    fn damage_tag_comparison_ignores_case() {
        let gem = Entity::new("Odd Casing", ["fire"]);
        let ids: Vec<_> = match_modifiers(Some(&gem), &catalog())
            .into_iter()
            .map(|m| m.id)
            .collect();
        assert_eq!(ids, ["u", "f"]);
    }

    #[test]
    fn missing_entity_or_catalog_yields_nothing() {
        let gem = Entity::new("Fireball", ["Spell", "Fire"]);
        assert!(match_modifiers(None, &catalog()).is_empty());
        assert!(match_modifiers(Some(&gem), &[]).is_empty());

        let malformed = Entity {
            name: "Broken".into(),
            tags: None,
            primary_attribute: String::new(),
        };
        assert!(match_modifiers(Some(&malformed), &catalog()).is_empty());
    }

    #[test]
    fn malformed_records_are_skipped_without_disturbing_others() {
        let mut records = catalog();
        records.insert(
            1,
            ModifierRecord {
                id: "broken".into(),
                name: "Broken".into(),
                stat_text_raw: None,
                ..Default::default()
            },
        );
        let gem = Entity::new("Fireball", ["Spell", "Fire"]);
        let ids: Vec<_> = match_modifiers(Some(&gem), &records)
            .into_iter()
            .map(|m| m.id)
            .collect();
        assert_eq!(ids, ["u", "f", "s"]);
    }

    #[test]
    fn annotation_carries_level_priority_and_influence() {
        let record = ModifierRecord::new("m", "Necro", "+2 to Level of all Minion Skill Gems")
            .with_influence("Elder");
        let matched = MatchedModifier::from_record(&record).unwrap();
        assert_eq!(matched.level, 2);
        assert_eq!(matched.priority, 4);
        assert!(matched.is_influenced());
        assert!(!matched.is_universal());

        let blank = ModifierRecord::new("u", "Exalted", "+1 to Level of all Skill Gems")
            .with_influence("");
        assert!(!MatchedModifier::from_record(&blank).unwrap().is_influenced());
    }
}
