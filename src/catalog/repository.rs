use std::sync::Arc;

use crate::catalog::model::{Catalog, CatalogItem};
use crate::catalog::source::{CatalogError, CatalogSource};

/// Thin pass-through over a [`CatalogSource`] that maps wire records into
/// domain items. Cheap to clone; state holders each keep their own handle.
#[derive(Clone)]
pub struct CatalogRepository {
    source: Arc<dyn CatalogSource>,
}

impl CatalogRepository {
    pub fn new(source: Arc<dyn CatalogSource>) -> Self {
        Self { source }
    }

    /// Fetch and map the full catalog, preserving document order.
    pub async fn get_catalog(&self) -> Result<Catalog, CatalogError> {
        let document = self.source.fetch_catalog().await?;
        Ok(Catalog {
            updated_at: document.updated_at,
            items: document.items.into_iter().map(CatalogItem::from).collect(),
        })
    }

    /// Fetch the catalog and look up a single item by id.
    pub async fn find_item(&self, id: &str) -> Result<CatalogItem, CatalogError> {
        let catalog = self.get_catalog().await?;
        catalog
            .items
            .into_iter()
            .find(|item| item.id == id)
            .ok_or(CatalogError::ItemNotFound)
    }
}
