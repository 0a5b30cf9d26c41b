//! One matching pass: match, generate, group.

use crate::catalog::{Entity, ModifierRecord};
use crate::combination::generate;
use crate::group::{GroupedResult, group};
use crate::matcher::match_modifiers;

/// Runs a full pass for one gem against a read-only catalog.
///
/// Each call is independent; nothing is cached between passes.
pub fn find_combinations(entity: Option<&Entity>, catalog: &[ModifierRecord]) -> GroupedResult {
    let matched = match_modifiers(entity, catalog);
    if matched.is_empty() {
        tracing::debug!("No applicable modifiers");
        return GroupedResult::default();
    }

    let grouped = group(generate(&matched));
    tracing::debug!(
        "Pass complete: {} modifiers, {} combinations over {} levels",
        matched.len(),
        grouped.total_combinations(),
        grouped.level_count()
    );
    grouped
}
