//! Catalog records consumed by the engine.
//!
//! Records are produced by the data-acquisition side (see `gem-content`) and
//! are read-only here. Validation only classifies a record as usable or
//! malformed; the matcher decides what to do with malformed ones.

use crate::error::RecordError;

/// Tag carried by every spell gem.
pub const SPELL_TAG: &str = "Spell";

/// Tag carried by every minion gem.
pub const MINION_TAG: &str = "Minion";

/// Damage-type keywords recognised in modifier text.
///
/// Iteration order is the order in which the matcher probes the text.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
    strum::IntoStaticStr,
    strum::EnumIter,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum DamageType {
    Lightning,
    Cold,
    Physical,
    Fire,
    Chaos,
}

impl DamageType {
    /// Lower-case keyword, e.g. `fire`.
    pub fn keyword(self) -> &'static str {
        self.into()
    }

    /// Lower-case phrase of a modifier restricted to this damage type.
    pub const fn all_skill_gems_phrase(self) -> &'static str {
        match self {
            Self::Lightning => "all lightning skill gems",
            Self::Cold => "all cold skill gems",
            Self::Physical => "all physical skill gems",
            Self::Fire => "all fire skill gems",
            Self::Chaos => "all chaos skill gems",
        }
    }

    /// Lower-case phrase of a spell modifier restricted to this damage type.
    pub const fn spell_skill_gems_phrase(self) -> &'static str {
        match self {
            Self::Lightning => "lightning spell skill gems",
            Self::Cold => "cold spell skill gems",
            Self::Physical => "physical spell skill gems",
            Self::Fire => "fire spell skill gems",
            Self::Chaos => "chaos spell skill gems",
        }
    }
}

/// Primary attribute of a gem.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
    strum::IntoStaticStr,
    strum::EnumIter,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum Attribute {
    Strength,
    Dexterity,
    Intelligence,
}

impl Attribute {
    /// Lower-case attribute name as persisted in gem records.
    pub fn keyword(self) -> &'static str {
        self.into()
    }

    /// Lower-case phrase of a modifier restricted to gems of this attribute.
    pub const fn skill_gems_phrase(self) -> &'static str {
        match self {
            Self::Strength => "strength skill gems",
            Self::Dexterity => "dexterity skill gems",
            Self::Intelligence => "intelligence skill gems",
        }
    }
}

/// A selectable skill gem.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Entity {
    pub name: String,

    /// Category labels such as `Spell`, `Fire`, `Minion`.
    ///
    /// `None` marks a malformed record; an empty list is valid.
    #[cfg_attr(feature = "serde", serde(default))]
    pub tags: Option<Vec<String>>,

    /// Lower-case attribute name as persisted (`strength`, ...), or empty.
    #[cfg_attr(feature = "serde", serde(default))]
    pub primary_attribute: String,
}

impl Entity {
    pub fn new(name: impl Into<String>, tags: impl IntoIterator<Item = impl Into<String>>) -> Self {
        Self {
            name: name.into(),
            tags: Some(tags.into_iter().map(Into::into).collect()),
            primary_attribute: String::new(),
        }
    }

    /// Sets the primary attribute (builder pattern).
    #[must_use]
    pub fn with_primary_attribute(mut self, attribute: impl Into<String>) -> Self {
        self.primary_attribute = attribute.into();
        self
    }

    /// Tags of the gem, empty when the record carries none.
    pub fn tags(&self) -> &[String] {
        self.tags.as_deref().unwrap_or_default()
    }

    /// Exact tag lookup.
    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags().iter().any(|t| t == tag)
    }

    /// ASCII case-insensitive tag lookup.
    pub fn has_tag_ignore_case(&self, tag: &str) -> bool {
        self.tags().iter().any(|t| t.eq_ignore_ascii_case(tag))
    }

    pub fn validate(&self) -> Result<(), RecordError> {
        if self.tags.is_none() {
            return Err(RecordError::MissingTags {
                name: self.name.clone(),
            });
        }
        Ok(())
    }
}

/// A raw equipment modifier as stored in the catalog.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ModifierRecord {
    pub id: String,
    pub name: String,

    /// Canonical description; the only input to matching, level and priority.
    #[cfg_attr(feature = "serde", serde(default))]
    pub stat_text_raw: Option<String>,

    #[cfg_attr(feature = "serde", serde(default))]
    pub tags: String,

    #[cfg_attr(feature = "serde", serde(default))]
    pub influence: Option<String>,
}

impl ModifierRecord {
    pub fn new(id: impl Into<String>, name: impl Into<String>, stat_text_raw: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            stat_text_raw: Some(stat_text_raw.into()),
            tags: String::new(),
            influence: None,
        }
    }

    /// Attaches an influence (builder pattern).
    #[must_use]
    pub fn with_influence(mut self, influence: impl Into<String>) -> Self {
        self.influence = Some(influence.into());
        self
    }

    /// Returns the stat text, rejecting absent or blank text.
    pub fn stat_text(&self) -> Result<&str, RecordError> {
        match self.stat_text_raw.as_deref() {
            Some(text) if !text.trim().is_empty() => Ok(text),
            _ => Err(RecordError::MissingStatText {
                id: self.id.clone(),
            }),
        }
    }

    pub fn validate(&self) -> Result<(), RecordError> {
        self.stat_text().map(|_| ())
    }
}
