//! Applicability rule table.
//!
//! Each rule pairs a trigger over the lower-cased modifier text with an
//! admission check against the gem. Rules are evaluated top to bottom and the
//! first rule whose trigger fires decides the outcome, even when its admission
//! check then rejects the gem.

use crate::catalog::{Entity, MINION_TAG, SPELL_TAG};
use crate::text;

/// Which rule decided a modifier's applicability.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::AsRefStr)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case")]
pub enum MatchKind {
    Universal,
    DamageType,
    Spell,
    Attribute,
    Minion,
    Spectre,
}

pub(crate) struct MatchRule {
    pub kind: MatchKind,
    fires: fn(&str) -> bool,
    admits: fn(&str, &Entity) -> bool,
}

impl MatchRule {
    pub fn fires(&self, text: &str) -> bool {
        (self.fires)(text)
    }

    pub fn admits(&self, text: &str, entity: &Entity) -> bool {
        (self.admits)(text, entity)
    }
}

pub(crate) static MATCH_RULES: &[MatchRule] = &[
    MatchRule {
        kind: MatchKind::Universal,
        fires: fires_universal,
        admits: admits_always,
    },
    MatchRule {
        kind: MatchKind::DamageType,
        fires: fires_damage_type,
        admits: admits_damage_type,
    },
    MatchRule {
        kind: MatchKind::Spell,
        fires: fires_spell,
        admits: admits_spell,
    },
    MatchRule {
        kind: MatchKind::Attribute,
        fires: fires_attribute,
        admits: admits_attribute,
    },
    MatchRule {
        kind: MatchKind::Minion,
        fires: fires_minion,
        admits: admits_minion,
    },
    MatchRule {
        kind: MatchKind::Spectre,
        fires: fires_spectre,
        admits: admits_spectre,
    },
];

/// Returns the rule whose trigger fires first for `text`, if any.
pub(crate) fn decisive_rule(text: &str) -> Option<&'static MatchRule> {
    MATCH_RULES.iter().find(|rule| rule.fires(text))
}

/// Classifies lower-cased modifier text by the rule that governs it.
pub fn classify(text: &str) -> Option<MatchKind> {
    decisive_rule(&text::lower(text)).map(|rule| rule.kind)
}

// ============================================================================
// Triggers
// ============================================================================

fn fires_universal(text: &str) -> bool {
    text.contains(text::ALL_SKILL_GEMS)
}

fn fires_damage_type(text: &str) -> bool {
    text::restricted_damage_type(text).is_some()
}

fn fires_spell(text: &str) -> bool {
    text.contains("spell skill gems")
}

fn fires_attribute(text: &str) -> bool {
    text::restricted_attribute(text).is_some()
}

fn fires_minion(text: &str) -> bool {
    text.contains("minion skill gems")
}

fn fires_spectre(text: &str) -> bool {
    text.contains("raise spectre gems")
}

// ============================================================================
// Admission checks
// ============================================================================

fn admits_always(_text: &str, _entity: &Entity) -> bool {
    true
}

fn admits_damage_type(text: &str, entity: &Entity) -> bool {
    text::restricted_damage_type(text).is_some_and(|dt| entity.has_tag_ignore_case(dt.keyword()))
}

fn admits_spell(text: &str, entity: &Entity) -> bool {
    if !entity.has_tag(SPELL_TAG) {
        return false;
    }
    match text::restricted_spell_damage_type(text) {
        Some(dt) => entity.has_tag_ignore_case(dt.keyword()),
        None => text.contains("all spell skill gems"),
    }
}

fn admits_attribute(text: &str, entity: &Entity) -> bool {
    text::restricted_attribute(text).is_some_and(|attr| entity.primary_attribute == attr.keyword())
}

fn admits_minion(_text: &str, entity: &Entity) -> bool {
    entity.has_tag(MINION_TAG)
}

fn admits_spectre(_text: &str, entity: &Entity) -> bool {
    entity.name.to_lowercase().contains("raise spectre")
}
