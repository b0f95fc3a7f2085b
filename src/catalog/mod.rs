//! Catalog loading: bundled JSON document → domain items.

mod model;
mod repository;
mod source;

pub use model::{Catalog, CatalogDocument, CatalogItem, CatalogRecord};
pub use repository::CatalogRepository;
pub use source::{BundledCatalogSource, CatalogError, CatalogFuture, CatalogSource};
