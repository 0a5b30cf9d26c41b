//! Plain-text rendering of a grouped result.

use std::fmt::Write;

use gem_core::{Entity, GroupedResult, Variant};

pub const NO_MODIFIERS: &str = "No level modifiers available for this gem.";

/// Renders levels highest first, each followed by its non-empty variant
/// buckets. `only` restricts output to one variant.
pub fn render_text(gem: &Entity, grouped: &GroupedResult, only: Option<Variant>) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Path of Exile Gem Level Modifiers for: {}", gem.name);
    if !gem.tags().is_empty() {
        let _ = writeln!(out, "Tags: {}", gem.tags().join(", "));
    }
    out.push('\n');

    if grouped.is_empty() {
        out.push_str(NO_MODIFIERS);
        out.push('\n');
        return out;
    }

    for (level, buckets) in grouped.levels_descending() {
        let visible: Vec<_> = buckets
            .iter()
            .filter(|(variant, bucket)| !bucket.is_empty() && only.is_none_or(|v| v == *variant))
            .collect();
        if visible.is_empty() {
            continue;
        }

        let _ = writeln!(out, "+{level} levels");
        for (variant, bucket) in visible {
            let _ = writeln!(out, "  {} (x{})", variant.label(), variant.multiplier());
            for combination in bucket {
                let _ = writeln!(
                    out,
                    "    {}: {}",
                    combination.display_text,
                    combination.scaled_texts().join(" / ")
                );
            }
        }
    }
    out
}
