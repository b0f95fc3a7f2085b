use std::collections::HashSet;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;

use tokio::runtime::Handle;
use tokio::sync::watch;
use tokio::task::JoinHandle;

use crate::catalog::{CatalogError, CatalogItem, CatalogRepository};
use crate::favorites::FavoritesStore;
use crate::state::debounce::debounce;
use crate::state::filter::filter_catalog;
use crate::state::screen::ListScreenState;

/// State holder for the list/search/favorites screen.
///
/// Owns the derivation of [`ListScreenState`] and the filtered item
/// sequence from three inputs: the catalog load result, the debounced
/// search query, and the favorites stream. All observables are watch
/// channels; intents may be issued from a synchronous caller (the UI
/// thread) because async work is spawned onto the runtime handle captured
/// at construction.
///
/// Must be created within a Tokio runtime context. Construction starts the
/// initial catalog load; `load` re-runs it on explicit retry.
pub struct CatalogListState {
    repository: CatalogRepository,
    favorites: Arc<FavoritesStore>,
    handle: Handle,
    state_tx: watch::Sender<ListScreenState>,
    state_rx: watch::Receiver<ListScreenState>,
    query_tx: watch::Sender<String>,
    query_rx: watch::Receiver<String>,
    filtered_rx: watch::Receiver<Vec<CatalogItem>>,
    // Identity of the most recent load request; completions carrying an
    // older token are discarded so a slow early fetch can never clobber a
    // newer result.
    load_generation: Arc<AtomicU64>,
    tasks: Vec<JoinHandle<()>>,
}

impl CatalogListState {
    pub fn new(
        repository: CatalogRepository,
        favorites: Arc<FavoritesStore>,
        debounce_window: Duration,
    ) -> Self {
        let handle = Handle::current();
        let (state_tx, state_rx) = watch::channel(ListScreenState::Loading);
        let (query_tx, query_rx) = watch::channel(String::new());
        let (debounced_rx, debounce_task) = debounce(query_rx.clone(), debounce_window);
        let (filtered_tx, filtered_rx) = watch::channel(Vec::new());

        let combine_task = handle.spawn(derive_filtered(
            state_rx.clone(),
            debounced_rx,
            favorites.subscribe(),
            filtered_tx,
        ));

        let holder = Self {
            repository,
            favorites,
            handle,
            state_tx,
            state_rx,
            query_tx,
            query_rx,
            filtered_rx,
            load_generation: Arc::new(AtomicU64::new(0)),
            tasks: vec![debounce_task, combine_task],
        };
        holder.load();
        holder
    }

    /// (Re)fetch the catalog. Publishes `Loading` synchronously, then
    /// `Success` or `Error` when the fetch resolves. Safe to call
    /// repeatedly; the most recent call wins.
    pub fn load(&self) {
        let token = self.load_generation.fetch_add(1, Ordering::SeqCst) + 1;
        self.state_tx.send_replace(ListScreenState::Loading);

        let repository = self.repository.clone();
        let state_tx = self.state_tx.clone();
        let generation = Arc::clone(&self.load_generation);
        self.handle.spawn(async move {
            let result = repository.get_catalog().await;
            if generation.load(Ordering::SeqCst) != token {
                tracing::debug!(token, "discarding stale catalog load");
                return;
            }
            let next = match result {
                Ok(catalog) => {
                    tracing::debug!(items = catalog.items.len(), "catalog loaded");
                    ListScreenState::Success {
                        updated_at: catalog.updated_at,
                        items: catalog.items,
                    }
                }
                Err(err) => {
                    tracing::error!(error = %err, "catalog load failed");
                    ListScreenState::Error {
                        message: load_error_message(&err),
                    }
                }
            };
            state_tx.send_replace(next);
        });
    }

    /// Update the raw search query. Observers of `search_query` see the
    /// change immediately; the filtered list reacts only after the
    /// debounce window elapses without further edits.
    pub fn set_search_query(&self, query: impl Into<String>) {
        let query = query.into();
        self.query_tx.send_if_modified(|current| {
            if *current == query {
                false
            } else {
                *current = query;
                true
            }
        });
    }

    /// Ask the store to flip membership of `id`. No local favorite state
    /// is touched; the visible set changes only when the store re-emits.
    /// A persistence failure is logged and otherwise has no visible
    /// effect.
    pub fn toggle_favorite(&self, id: &str) {
        let favorites = Arc::clone(&self.favorites);
        let id = id.to_string();
        self.handle.spawn(async move {
            if let Err(err) = favorites.toggle(&id).await {
                tracing::warn!(error = %err, item = %id, "favorite toggle failed");
            }
        });
    }

    pub fn state(&self) -> watch::Receiver<ListScreenState> {
        self.state_rx.clone()
    }

    pub fn filtered_items(&self) -> watch::Receiver<Vec<CatalogItem>> {
        self.filtered_rx.clone()
    }

    pub fn search_query(&self) -> watch::Receiver<String> {
        self.query_rx.clone()
    }

    pub fn favorites(&self) -> watch::Receiver<HashSet<String>> {
        self.favorites.subscribe()
    }
}

impl Drop for CatalogListState {
    fn drop(&mut self) {
        // Invalidate in-flight loads, then stop the derivation tasks; no
        // completion may publish after teardown.
        self.load_generation.store(u64::MAX, Ordering::SeqCst);
        for task in &self.tasks {
            task.abort();
        }
    }
}

/// Recompute the filtered sequence whenever any of the three inputs
/// changes. The output is a pure function of the latest triple; identical
/// results are not re-emitted.
async fn derive_filtered(
    mut state_rx: watch::Receiver<ListScreenState>,
    mut query_rx: watch::Receiver<String>,
    mut favorites_rx: watch::Receiver<HashSet<String>>,
    filtered_tx: watch::Sender<Vec<CatalogItem>>,
) {
    loop {
        let next = {
            let state = state_rx.borrow_and_update();
            let query = query_rx.borrow_and_update();
            let favorites = favorites_rx.borrow_and_update();
            filter_catalog(&state, &query, &favorites)
        };
        filtered_tx.send_if_modified(|current| {
            if *current == next {
                false
            } else {
                *current = next;
                true
            }
        });

        tokio::select! {
            changed = state_rx.changed() => if changed.is_err() { break },
            changed = query_rx.changed() => if changed.is_err() { break },
            changed = favorites_rx.changed() => if changed.is_err() { break },
        }
    }
}

fn load_error_message(err: &CatalogError) -> String {
    let message = err.to_string();
    if message.is_empty() {
        "Failed to load catalog".to_string()
    } else {
        message
    }
}
