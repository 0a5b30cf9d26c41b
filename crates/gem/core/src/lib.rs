//! Deterministic gem/modifier matching engine.
//!
//! `gem-core` decides which equipment modifiers apply to a skill gem, pairs
//! compatible modifiers under every equipment variant, and groups the result
//! by total level in a stable display order. All APIs are pure functions over
//! caller-provided catalogs; loading and rendering live in other crates.
pub mod catalog;
pub mod combination;
pub mod compat;
pub mod display;
pub mod error;
pub mod group;
pub mod matcher;
pub mod pipeline;
mod text;

pub use catalog::{Attribute, DamageType, Entity, MINION_TAG, ModifierRecord, SPELL_TAG};
pub use combination::{Combination, MAX_MODIFIERS, Variant, generate};
pub use compat::can_combine;
pub use display::scaled_text;
pub use error::RecordError;
pub use group::{GroupedResult, VariantBuckets, compare_combinations, group};
pub use matcher::{MatchKind, MatchedModifier, classify, level_of, match_modifiers, priority_of};
pub use pipeline::find_combinations;
pub use text::ALL_SKILL_GEMS;
