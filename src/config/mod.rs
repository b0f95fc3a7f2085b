//! Application configuration (TOML file + defaults).

mod loader;
mod types;

pub use loader::ConfigError;
pub use types::{CatalogConfig, Config, FavoritesConfig, SearchConfig, UiConfig};
