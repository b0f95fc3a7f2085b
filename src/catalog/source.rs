use std::future::Future;
use std::path::PathBuf;
use std::pin::Pin;

use thiserror::Error;

use crate::catalog::model::CatalogDocument;

/// Errors produced while loading or interrogating the catalog.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Failed to read catalog '{path}': {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse catalog: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Item not found")]
    ItemNotFound,
}

/// Boxed fetch future, so sources stay object-safe behind `Arc<dyn CatalogSource>`.
pub type CatalogFuture<'a> =
    Pin<Box<dyn Future<Output = Result<CatalogDocument, CatalogError>> + Send + 'a>>;

/// Source of the raw catalog document.
///
/// Deterministic for a given resource; implementations only need to
/// represent success or a read/parse failure with a message.
pub trait CatalogSource: Send + Sync {
    fn fetch_catalog(&self) -> CatalogFuture<'_>;
}

/// The catalog document shipped inside the binary.
const EMBEDDED_CATALOG: &str = include_str!("../../assets/catalog.json");

/// Reads the catalog from the embedded resource, or from a file when the
/// operator points one at us via config or `--catalog`.
pub struct BundledCatalogSource {
    path: Option<PathBuf>,
}

impl BundledCatalogSource {
    /// Source backed by the compiled-in `assets/catalog.json`.
    pub fn embedded() -> Self {
        Self { path: None }
    }

    /// Source backed by a catalog file on disk.
    pub fn from_path(path: impl Into<PathBuf>) -> Self {
        Self {
            path: Some(path.into()),
        }
    }
}

impl CatalogSource for BundledCatalogSource {
    fn fetch_catalog(&self) -> CatalogFuture<'_> {
        Box::pin(async move {
            let raw = match &self.path {
                Some(path) => tokio::fs::read_to_string(path).await.map_err(|source| {
                    CatalogError::Read {
                        path: path.clone(),
                        source,
                    }
                })?,
                None => EMBEDDED_CATALOG.to_string(),
            };

            let document: CatalogDocument = serde_json::from_str(&raw)?;
            tracing::debug!(items = document.items.len(), "catalog document loaded");
            Ok(document)
        })
    }
}
