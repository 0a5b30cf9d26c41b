//! Level grouper and sorter.
//!
//! Combinations are bucketed by total level, then by variant, and each bucket
//! is sorted with [`compare_combinations`].

use std::cmp::Ordering;
use std::collections::BTreeMap;

use strum::IntoEnumIterator;

use crate::combination::{Combination, Variant};

/// Sorted combinations of one total level, split by variant.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct VariantBuckets {
    pub regular: Vec<Combination>,
    pub focused: Vec<Combination>,
    pub reflecting_mist: Vec<Combination>,
    pub focused_reflecting: Vec<Combination>,
}

impl VariantBuckets {
    pub fn get(&self, variant: Variant) -> &[Combination] {
        match variant {
            Variant::Regular => &self.regular,
            Variant::Focused => &self.focused,
            Variant::ReflectingMist => &self.reflecting_mist,
            Variant::FocusedReflecting => &self.focused_reflecting,
        }
    }

    fn get_mut(&mut self, variant: Variant) -> &mut Vec<Combination> {
        match variant {
            Variant::Regular => &mut self.regular,
            Variant::Focused => &mut self.focused,
            Variant::ReflectingMist => &mut self.reflecting_mist,
            Variant::FocusedReflecting => &mut self.focused_reflecting,
        }
    }

    /// Buckets in variant order, empty ones included.
    pub fn iter(&self) -> impl Iterator<Item = (Variant, &[Combination])> {
        Variant::iter().map(move |variant| (variant, self.get(variant)))
    }

    pub fn len(&self) -> usize {
        self.iter().map(|(_, bucket)| bucket.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn sort(&mut self) {
        for variant in Variant::iter() {
            self.get_mut(variant).sort_by(compare_combinations);
        }
    }
}

/// Combinations keyed by total level.
///
/// An empty result means no modifier applies to the gem; it is not an error.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct GroupedResult {
    levels: BTreeMap<u32, VariantBuckets>,
}

impl GroupedResult {
    pub fn is_empty(&self) -> bool {
        self.levels.is_empty()
    }

    /// Number of distinct total levels.
    pub fn level_count(&self) -> usize {
        self.levels.len()
    }

    pub fn get(&self, total_level: u32) -> Option<&VariantBuckets> {
        self.levels.get(&total_level)
    }

    /// Bucket of one `(total_level, variant)` key, empty when absent.
    pub fn bucket(&self, total_level: u32, variant: Variant) -> &[Combination] {
        self.get(total_level)
            .map(|buckets| buckets.get(variant))
            .unwrap_or_default()
    }

    /// Levels in ascending order.
    pub fn levels(&self) -> impl DoubleEndedIterator<Item = (u32, &VariantBuckets)> {
        self.levels.iter().map(|(&level, buckets)| (level, buckets))
    }

    /// Levels in descending order, highest bonus first.
    pub fn levels_descending(&self) -> impl Iterator<Item = (u32, &VariantBuckets)> {
        self.levels().rev()
    }

    /// Total number of grouped combinations.
    pub fn total_combinations(&self) -> usize {
        self.levels.values().map(VariantBuckets::len).sum()
    }
}

/// Orders combinations within one `(total_level, variant)` bucket.
///
/// 1. combinations with a universal member first;
/// 2. then combinations without an influenced member;
/// 3. then `display_text`, case-sensitive;
/// 4. then member ids, so equal display texts still order reproducibly.
pub fn compare_combinations(a: &Combination, b: &Combination) -> Ordering {
    b.has_universal()
        .cmp(&a.has_universal())
        .then_with(|| a.has_influence().cmp(&b.has_influence()))
        .then_with(|| a.display_text.cmp(&b.display_text))
        .then_with(|| a.member_ids().cmp(b.member_ids()))
}

/// Buckets combinations by total level and variant and sorts every bucket.
pub fn group(combinations: impl IntoIterator<Item = Combination>) -> GroupedResult {
    let mut levels: BTreeMap<u32, VariantBuckets> = BTreeMap::new();
    for combination in combinations {
        levels
            .entry(combination.total_level)
            .or_default()
            .get_mut(combination.variant)
            .push(combination);
    }
    for buckets in levels.values_mut() {
        buckets.sort();
    }

    tracing::debug!("Grouped combinations into {} levels", levels.len());
    GroupedResult { levels }
}
