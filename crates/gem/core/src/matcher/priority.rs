//! Level and display priority derived from modifier text.
//!
//! Priority is computed from the text alone and is independent of which
//! applicability rule matched the modifier.

use crate::text;

/// Priority of a modifier none of the table entries describe.
pub const FALLBACK_PRIORITY: u8 = 5;

/// Level of a modifier whose text carries no `+<digits>` token.
pub const DEFAULT_LEVEL: u32 = 1;

/// Ordered `(predicate, priority)` table, first match wins.
static PRIORITY_RULES: &[(fn(&str) -> bool, u8)] = &[
    (text::is_universal, 0),
    (text::mentions_damage_type, 1),
    (mentions_spell, 2),
    (text::mentions_attribute, 3),
    (mentions_minion, 4),
];

fn mentions_spell(text: &str) -> bool {
    text.contains("spell")
}

fn mentions_minion(text: &str) -> bool {
    text.contains("minion")
}

/// Display priority of raw modifier text (lower sorts first).
pub fn priority_of(raw: &str) -> u8 {
    let lowered = text::lower(raw);
    PRIORITY_RULES
        .iter()
        .find(|(predicate, _)| predicate(lowered.as_str()))
        .map_or(FALLBACK_PRIORITY, |&(_, priority)| priority)
}

/// Level bonus of raw modifier text, never below one.
pub fn level_of(raw: &str) -> u32 {
    text::first_level_token(raw).map_or(DEFAULT_LEVEL, |level| level.max(1))
}
