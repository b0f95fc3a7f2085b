//! Locally persisted favorite item ids, exposed as a watch stream.

mod store;

pub use store::{FavoritesError, FavoritesStore};
