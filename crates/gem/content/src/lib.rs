//! Data-driven catalog definitions and loaders.
//!
//! This crate turns the persisted catalogs into engine inputs:
//! - Gem list (JSON, produced by the gem update script)
//! - Modifier list (JSON, produced by the modifier fetch script)
//! - Catalog filters (TOML)
//!
//! Content is consumed by the engine read-only and never modified by it.

pub mod catalog;
pub mod config;
pub mod loaders;
pub mod tags;

pub use catalog::GemCatalog;
pub use config::CatalogConfig;
pub use loaders::{
    Catalogs, ConfigLoader, GemEntry, GemFile, GemLoader, LoadResult, ModifierEntry, ModifierFile,
    ModifierLoader,
};
pub use tags::{RawTags, parse_gem_tags};
