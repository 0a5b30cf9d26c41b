//! Catalog configuration loader.

use std::path::Path;

use crate::config::CatalogConfig;
use crate::loaders::{LoadResult, read_file};

/// Loader for catalog configuration from TOML files.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load config data from a TOML file.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the TOML file containing CatalogConfig
    ///
    /// # Returns
    ///
    /// Returns a CatalogConfig. Keys missing from the file keep their defaults.
    pub fn load(path: &Path) -> LoadResult<CatalogConfig> {
        let content = read_file(path)?;
        Self::parse(&content)
    }

    /// Parse config data from TOML text.
    pub fn parse(content: &str) -> LoadResult<CatalogConfig> {
        let config: CatalogConfig = toml::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse config TOML: {}", e))?;

        Ok(config)
    }
}
