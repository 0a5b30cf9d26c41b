//! Gem level modifier finder.
//!
//! Loads the persisted gem and modifier catalogs, runs one matching pass for
//! the named gem and prints the grouped combinations.

mod render;

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use gem_content::{CatalogConfig, Catalogs, ConfigLoader};
use gem_core::{Variant, find_combinations};

/// Find every modifier combination that raises a skill gem's level
#[derive(Parser, Debug)]
#[command(name = "gem-finder")]
#[command(about = "Gem level modifier finder", long_about = None)]
#[command(version)]
struct Cli {
    /// Gem name (case-insensitive)
    gem: String,

    /// Gem list JSON file
    #[arg(long, default_value = "data/gems_cleaned.json")]
    gems: PathBuf,

    /// Modifier list JSON file
    #[arg(long, default_value = "data/modifiers_amulet_level.json")]
    modifiers: PathBuf,

    /// Catalog filter configuration (TOML)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Only show one variant (regular, focused, reflecting-mist, focused-reflecting)
    #[arg(long)]
    variant: Option<Variant>,

    /// Print the grouped result as JSON
    #[arg(long)]
    json: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => ConfigLoader::load(path)?,
        None => CatalogConfig::default(),
    };
    let catalogs = Catalogs::load(&cli.gems, &cli.modifiers, &config)?;
    let gem = catalogs
        .gem(&cli.gem)
        .with_context(|| format!("Unknown gem: {}", cli.gem))?;

    tracing::debug!("Selected gem {:?} with tags {:?}", gem.name, gem.tags());

    let grouped = find_combinations(Some(gem), &catalogs.modifiers);
    if grouped.is_empty() {
        tracing::info!("No modifiers apply to {}", gem.name);
    }

    if cli.json {
        let json = serde_json::to_string_pretty(&grouped).context("Failed to encode result")?;
        println!("{json}");
    } else {
        print!("{}", render::render_text(gem, &grouped, cli.variant));
    }
    Ok(())
}
