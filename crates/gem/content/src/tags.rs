//! Gem tag list parsing.
//!
//! Gem tags are persisted either as a JSON list or as one wiki-formatted
//! string (`"Spell • Projectile • Fire"`, or comma separated).

use serde::{Deserialize, Serialize};

/// Bullet separator used by the wiki.
pub const TAG_BULLET: char = '•';

/// Splits a tag string on bullets when present, otherwise on commas.
///
/// Items are trimmed and empty items dropped.
pub fn parse_gem_tags(raw: &str) -> Vec<String> {
    let separator = if raw.contains(TAG_BULLET) { TAG_BULLET } else { ',' };
    raw.split(separator)
        .map(str::trim)
        .filter(|tag| !tag.is_empty())
        .map(str::to_owned)
        .collect()
}

/// Tags as found in a gem file.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawTags {
    List(Vec<String>),
    Text(String),
}

impl RawTags {
    pub fn into_tags(self) -> Vec<String> {
        match self {
            Self::List(tags) => tags
                .into_iter()
                .map(|tag| tag.trim().to_owned())
                .filter(|tag| !tag.is_empty())
                .collect(),
            Self::Text(text) => parse_gem_tags(&text),
        }
    }
}
