//! Variant-scaled modifier text for presenters.

use regex::Captures;

use crate::combination::Variant;
use crate::matcher::MatchedModifier;
use crate::text::LEVEL_TOKEN;

/// Modifier text with every `+<digits>` token multiplied by the variant.
///
/// `Regular` returns the text unchanged. Tokens too large to parse are left
/// as written.
pub fn scaled_text(modifier: &MatchedModifier, variant: Variant) -> String {
    scale_tokens(&modifier.text, variant.multiplier())
}

fn scale_tokens(text: &str, factor: u32) -> String {
    if factor == 1 {
        return text.to_owned();
    }
    LEVEL_TOKEN
        .replace_all(text, |caps: &Captures<'_>| match caps[1].parse::<u32>() {
            Ok(value) => format!("+{}", value.saturating_mul(factor)),
            Err(_) => caps[0].to_owned(),
        })
        .into_owned()
}
