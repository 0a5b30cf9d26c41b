//! Substring policy shared by the matcher, the compatibility rule and display.
//!
//! All predicates take text that has already been lower-cased.

use std::sync::LazyLock;

use regex::Regex;
use strum::IntoEnumIterator;

use crate::catalog::{Attribute, DamageType};

/// Phrase of a modifier that applies to every gem.
pub const ALL_SKILL_GEMS: &str = "all skill gems";

/// `+<digits>` numeric token, e.g. the `+1` of `+1 to Level of ...`.
pub(crate) static LEVEL_TOKEN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\+(\d+)").expect("level token pattern is valid"));

pub(crate) fn lower(text: &str) -> String {
    text.to_lowercase()
}

/// Universal non-spell modifier: "all skill gems" and no mention of spells.
pub(crate) fn is_universal(text: &str) -> bool {
    text.contains(ALL_SKILL_GEMS) && !text.contains("spell")
}

/// First damage type named as `all <type> skill gems`.
pub(crate) fn restricted_damage_type(text: &str) -> Option<DamageType> {
    DamageType::iter().find(|dt| text.contains(dt.all_skill_gems_phrase()))
}

/// First damage type named as `<type> spell skill gems`.
pub(crate) fn restricted_spell_damage_type(text: &str) -> Option<DamageType> {
    DamageType::iter().find(|dt| text.contains(dt.spell_skill_gems_phrase()))
}

/// First attribute named as `<attribute> skill gems`.
pub(crate) fn restricted_attribute(text: &str) -> Option<Attribute> {
    Attribute::iter().find(|attr| text.contains(attr.skill_gems_phrase()))
}

pub(crate) fn mentions_damage_type(text: &str) -> bool {
    DamageType::iter().any(|dt| text.contains(dt.keyword()))
}

pub(crate) fn mentions_attribute(text: &str) -> bool {
    Attribute::iter().any(|attr| text.contains(attr.keyword()))
}

/// First `+<digits>` value in the text, if it fits in a `u32`.
pub(crate) fn first_level_token(text: &str) -> Option<u32> {
    LEVEL_TOKEN
        .captures(text)
        .and_then(|caps| caps.get(1))
        .and_then(|digits| digits.as_str().parse().ok())
}
