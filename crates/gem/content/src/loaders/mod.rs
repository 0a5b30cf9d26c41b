//! Content loaders for reading catalog data from files.
//!
//! Each loader has a `load` entry point taking a path and a `parse` entry
//! point taking file contents, so callers holding data in memory can skip the
//! filesystem.

pub mod config;
pub mod gems;
pub mod modifiers;

pub use config::ConfigLoader;
pub use gems::{GemEntry, GemFile, GemLoader};
pub use modifiers::{ModifierEntry, ModifierFile, ModifierLoader};

use std::path::Path;

use gem_core::{Entity, ModifierRecord};

use crate::catalog::GemCatalog;
use crate::config::CatalogConfig;

/// Common result type for loaders.
pub type LoadResult<T> = anyhow::Result<T>;

/// Helper function to read file contents.
pub(crate) fn read_file(path: &Path) -> LoadResult<String> {
    std::fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("Failed to read file {}: {}", path.display(), e))
}

/// Warns when a file's declared count disagrees with its contents.
pub(crate) fn check_total_count(kind: &str, declared: Option<usize>, actual: usize) {
    if let Some(declared) = declared.filter(|&declared| declared != actual) {
        tracing::warn!(
            "{} file declares {} records but contains {}",
            kind,
            declared,
            actual
        );
    }
}

/// Both catalogs, filtered and ready for matching.
#[derive(Clone, Debug, Default)]
pub struct Catalogs {
    pub gems: GemCatalog,
    pub modifiers: Vec<ModifierRecord>,
}

impl Catalogs {
    /// Loads the gem list and the modifier list with one configuration.
    pub fn load(gems: &Path, modifiers: &Path, config: &CatalogConfig) -> LoadResult<Self> {
        let gems = GemCatalog::new(GemLoader::load(gems, config)?);
        let modifiers = ModifierLoader::load(modifiers, config)?;
        tracing::info!(
            "Loaded {} gems and {} modifiers",
            gems.len(),
            modifiers.len()
        );
        Ok(Self { gems, modifiers })
    }

    /// Looks a gem up by name (see [`GemCatalog::find`]).
    pub fn gem(&self, name: &str) -> Option<&Entity> {
        self.gems.find(name)
    }
}
