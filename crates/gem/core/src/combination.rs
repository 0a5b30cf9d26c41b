//! Combination generator.
//!
//! Every matched modifier is emitted alone, and every legal pair of distinct
//! modifiers is emitted together, once per equipment variant.

use arrayvec::ArrayVec;
use strum::{EnumCount, IntoEnumIterator};

use crate::compat::can_combine;
use crate::display::scaled_text;
use crate::matcher::MatchedModifier;

/// Maximum number of modifiers in one combination.
pub const MAX_MODIFIERS: usize = 2;

/// Equipment/crafting state scaling every modifier's effect.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
    strum::EnumIter,
    strum::EnumCount,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "kebab-case", ascii_case_insensitive)]
pub enum Variant {
    Regular,
    Focused,
    ReflectingMist,
    FocusedReflecting,
}

impl Variant {
    /// Effect multiplier of this variant.
    pub const fn multiplier(self) -> u32 {
        match self {
            Self::Regular => 1,
            Self::Focused | Self::ReflectingMist => 2,
            Self::FocusedReflecting => 4,
        }
    }

    /// Human-readable label.
    pub const fn label(self) -> &'static str {
        match self {
            Self::Regular => "Regular",
            Self::Focused => "Focused",
            Self::ReflectingMist => "Reflecting Mist",
            Self::FocusedReflecting => "Focused + Reflecting Mist",
        }
    }
}

/// One or two compatible modifiers evaluated under one variant.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Combination {
    /// Members in catalog order.
    pub modifiers: ArrayVec<MatchedModifier, MAX_MODIFIERS>,
    /// Sum of member levels times the variant multiplier.
    pub total_level: u32,
    /// `name` for singles, `"{name_a} + {name_b}"` for pairs.
    pub display_text: String,
    pub variant: Variant,
}

impl Combination {
    pub fn single(modifier: MatchedModifier, variant: Variant) -> Self {
        let total_level = modifier.level.saturating_mul(variant.multiplier());
        let display_text = modifier.name.clone();
        let mut modifiers = ArrayVec::new();
        modifiers.push(modifier);
        Self {
            modifiers,
            total_level,
            display_text,
            variant,
        }
    }

    /// Pairs two modifiers; the caller has already checked [`can_combine`].
    pub fn pair(first: MatchedModifier, second: MatchedModifier, variant: Variant) -> Self {
        let total_level = first
            .level
            .saturating_add(second.level)
            .saturating_mul(variant.multiplier());
        let display_text = format!("{} + {}", first.name, second.name);
        Self {
            modifiers: ArrayVec::from([first, second]),
            total_level,
            display_text,
            variant,
        }
    }

    /// Sum of member levels before the variant multiplier.
    pub fn base_level(&self) -> u32 {
        self.modifiers.iter().map(|m| m.level).sum()
    }

    pub fn is_pair(&self) -> bool {
        self.modifiers.len() == MAX_MODIFIERS
    }

    /// Some member is the universal non-spell modifier.
    pub fn has_universal(&self) -> bool {
        self.modifiers.iter().any(MatchedModifier::is_universal)
    }

    /// Some member carries an influence.
    pub fn has_influence(&self) -> bool {
        self.modifiers.iter().any(MatchedModifier::is_influenced)
    }

    pub fn member_ids(&self) -> impl Iterator<Item = &str> {
        self.modifiers.iter().map(|m| m.id.as_str())
    }

    /// Member texts with their numbers scaled by this combination's variant.
    pub fn scaled_texts(&self) -> Vec<String> {
        self.modifiers
            .iter()
            .map(|m| scaled_text(m, self.variant))
            .collect()
    }
}

/// Index pairs `(i, j)`, `i < j`, of modifiers that may be combined.
///
/// Entries sharing an id are never paired with each other.
fn legal_pairs(matched: &[MatchedModifier]) -> Vec<(usize, usize)> {
    let mut pairs = Vec::new();
    for (i, a) in matched.iter().enumerate() {
        for (j, b) in matched.iter().enumerate().skip(i + 1) {
            if a.id == b.id {
                tracing::debug!("Not pairing duplicate modifier id {}", a.id);
                continue;
            }
            if can_combine(a, b) {
                pairs.push((i, j));
            }
        }
    }
    pairs
}

/// Enumerates singles and legal pairs under every variant.
///
/// Produces `Variant::COUNT * (N + P)` combinations for `N` modifiers and `P`
/// legal pairs, variant by variant.
pub fn generate(matched: &[MatchedModifier]) -> Vec<Combination> {
    let pairs = legal_pairs(matched);
    let mut combinations = Vec::with_capacity(Variant::COUNT * (matched.len() + pairs.len()));

    for variant in Variant::iter() {
        combinations.extend(
            matched
                .iter()
                .map(|modifier| Combination::single(modifier.clone(), variant)),
        );
        combinations.extend(pairs.iter().map(|&(i, j)| {
            Combination::pair(matched[i].clone(), matched[j].clone(), variant)
        }));
    }

    tracing::debug!(
        "Generated {} combinations ({} modifiers, {} legal pairs)",
        combinations.len(),
        matched.len(),
        pairs.len()
    );
    combinations
}
