//! Reactive screen-state holders.
//!
//! Each holder owns the derivation of one screen's state from its async
//! inputs (catalog load, search query, favorites stream) and exposes the
//! results over `tokio::sync::watch` channels:
//!
//! ```text
//! intents ──→ holder ──→ watch channels ──→ view
//!    ↑                                       │
//!    └───────────────────────────────────────┘
//! ```
//!
//! Derived values are recomputed by pure functions on every input change;
//! nothing derived is ever stored as a source of truth.

mod debounce;
mod detail;
mod filter;
mod list;
mod screen;

pub use debounce::debounce;
pub use detail::CatalogDetailState;
pub use filter::filter_catalog;
pub use list::CatalogListState;
pub use screen::{DetailScreenState, ListScreenState};
