//! Record validation errors.
//!
//! The engine itself never fails: these errors only classify catalog records
//! as malformed so the matcher can skip them and keep going.

/// Reason a catalog record cannot take part in matching.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum RecordError {
    /// Modifier has no usable `stat_text_raw`.
    #[error("modifier `{id}` has no stat text")]
    MissingStatText { id: String },

    /// Gem record carries no tag list.
    #[error("gem `{name}` has no tags")]
    MissingTags { name: String },
}

impl RecordError {
    /// Returns a static identifier for this error variant.
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::MissingStatText { .. } => "missing_stat_text",
            Self::MissingTags { .. } => "missing_tags",
        }
    }
}
