use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Context;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use shelfview::catalog::{BundledCatalogSource, CatalogRepository};
use shelfview::config::Config;
use shelfview::favorites::FavoritesStore;
use shelfview::state::{CatalogDetailState, CatalogListState};
use shelfview::ui;

/// Browse and search a bundled catalog, with locally persisted favorites.
#[derive(Parser)]
#[command(version, about)]
struct Cli {
    /// Config file (default: platform config dir).
    #[arg(long)]
    config: Option<PathBuf>,

    /// Catalog JSON file (default: the embedded catalog).
    #[arg(long)]
    catalog: Option<PathBuf>,

    /// Favorites file (default: platform data dir).
    #[arg(long)]
    favorites: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };

    let catalog_path = cli.catalog.or(config.catalog.path);
    let favorites_path = cli
        .favorites
        .or(config.favorites.path)
        .unwrap_or_else(FavoritesStore::default_path);

    let runtime = tokio::runtime::Runtime::new().context("failed to start async runtime")?;
    let _enter = runtime.enter();

    let source = match catalog_path {
        Some(path) => BundledCatalogSource::from_path(path),
        None => BundledCatalogSource::embedded(),
    };
    let repository = CatalogRepository::new(Arc::new(source));
    let favorites = Arc::new(FavoritesStore::open(favorites_path));

    let list = CatalogListState::new(
        repository.clone(),
        Arc::clone(&favorites),
        Duration::from_millis(config.search.debounce_ms),
    );
    let detail = CatalogDetailState::new(repository, favorites);

    ui::runtime::run(list, detail, Duration::from_millis(config.ui.tick_ms))
        .context("terminal UI failed")?;
    Ok(())
}
