use std::collections::HashSet;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use tokio::runtime::Handle;
use tokio::sync::watch;
use tokio::task::JoinHandle;

use crate::catalog::{CatalogError, CatalogRepository};
use crate::favorites::FavoritesStore;
use crate::state::screen::DetailScreenState;

/// State holder for a single-item screen.
///
/// Tracks a mutable item identifier (settable after construction so a
/// two-pane layout can reuse one holder across selections) and keeps
/// `Success::is_favorite` equal to the favorites set's membership of the
/// tracked id on every observable update.
///
/// Must be created within a Tokio runtime context. Starts with no
/// selection: the empty id never loads, so the state stays `Loading`
/// until the first non-empty `set_item_id`.
pub struct CatalogDetailState {
    repository: CatalogRepository,
    favorites: Arc<FavoritesStore>,
    handle: Handle,
    state_tx: watch::Sender<DetailScreenState>,
    state_rx: watch::Receiver<DetailScreenState>,
    item_id_tx: watch::Sender<String>,
    item_id_rx: watch::Receiver<String>,
    load_generation: Arc<AtomicU64>,
    tasks: Vec<JoinHandle<()>>,
}

impl CatalogDetailState {
    pub fn new(repository: CatalogRepository, favorites: Arc<FavoritesStore>) -> Self {
        let handle = Handle::current();
        let (state_tx, state_rx) = watch::channel(DetailScreenState::Loading);
        let (item_id_tx, item_id_rx) = watch::channel(String::new());

        let sync_task = handle.spawn(sync_favorite_flag(
            item_id_rx.clone(),
            favorites.subscribe(),
            state_tx.clone(),
        ));

        Self {
            repository,
            favorites,
            handle,
            state_tx,
            state_rx,
            item_id_tx,
            item_id_rx,
            load_generation: Arc::new(AtomicU64::new(0)),
            tasks: vec![sync_task],
        }
    }

    /// Track `id` and load it. A repeat call with the already-tracked id
    /// is a no-op (no duplicate fetch). The empty id means "no item
    /// selected": it is accepted but never loads, leaving the state
    /// as-is.
    pub fn set_item_id(&self, id: &str) {
        let changed = self.item_id_tx.send_if_modified(|current| {
            if current == id {
                false
            } else {
                *current = id.to_string();
                true
            }
        });
        if !changed || id.is_empty() {
            return;
        }
        self.start_load(id.to_string());
    }

    /// Re-run the load for the tracked id (retry affordance). Does
    /// nothing while no item is selected.
    pub fn reload(&self) {
        let id = self.item_id_rx.borrow().clone();
        if !id.is_empty() {
            self.start_load(id);
        }
    }

    /// Flip the favorite for the id tracked at call time, so a rapid
    /// selection change right after the keypress cannot retarget the
    /// toggle. Failures are logged and leave the set unchanged.
    pub fn toggle_favorite(&self) {
        let id = self.item_id_rx.borrow().clone();
        if id.is_empty() {
            return;
        }
        let favorites = Arc::clone(&self.favorites);
        self.handle.spawn(async move {
            if let Err(err) = favorites.toggle(&id).await {
                tracing::warn!(error = %err, item = %id, "favorite toggle failed");
            }
        });
    }

    pub fn state(&self) -> watch::Receiver<DetailScreenState> {
        self.state_rx.clone()
    }

    pub fn item_id(&self) -> watch::Receiver<String> {
        self.item_id_rx.clone()
    }

    fn start_load(&self, id: String) {
        let token = self.load_generation.fetch_add(1, Ordering::SeqCst) + 1;
        self.state_tx.send_replace(DetailScreenState::Loading);

        let repository = self.repository.clone();
        let favorites = Arc::clone(&self.favorites);
        let state_tx = self.state_tx.clone();
        let generation = Arc::clone(&self.load_generation);
        self.handle.spawn(async move {
            let result = repository.find_item(&id).await;
            if generation.load(Ordering::SeqCst) != token {
                tracing::debug!(token, item = %id, "discarding stale item load");
                return;
            }
            let next = match result {
                Ok(item) => {
                    let is_favorite = favorites.current().contains(&id);
                    tracing::debug!(item = %id, "item loaded");
                    DetailScreenState::Success { item, is_favorite }
                }
                Err(err) => {
                    tracing::warn!(error = %err, item = %id, "item load failed");
                    DetailScreenState::Error {
                        message: item_error_message(&err),
                    }
                }
            };
            state_tx.send_replace(next);
        });
    }
}

impl Drop for CatalogDetailState {
    fn drop(&mut self) {
        self.load_generation.store(u64::MAX, Ordering::SeqCst);
        for task in &self.tasks {
            task.abort();
        }
    }
}

/// Keep `Success::is_favorite` in sync with the favorites set and the
/// tracked id. Only `Success` is rewritten, and only the flag; `Loading`
/// and `Error` are never touched by favorite changes.
async fn sync_favorite_flag(
    mut item_id_rx: watch::Receiver<String>,
    mut favorites_rx: watch::Receiver<HashSet<String>>,
    state_tx: watch::Sender<DetailScreenState>,
) {
    loop {
        {
            let id = item_id_rx.borrow_and_update().clone();
            let favorites = favorites_rx.borrow_and_update();
            if !id.is_empty() {
                state_tx.send_if_modified(|state| match state {
                    DetailScreenState::Success { is_favorite, .. } => {
                        let next = favorites.contains(&id);
                        if *is_favorite == next {
                            false
                        } else {
                            *is_favorite = next;
                            true
                        }
                    }
                    _ => false,
                });
            }
        }

        tokio::select! {
            changed = item_id_rx.changed() => if changed.is_err() { break },
            changed = favorites_rx.changed() => if changed.is_err() { break },
        }
    }
}

fn item_error_message(err: &CatalogError) -> String {
    let message = err.to_string();
    if message.is_empty() {
        "Failed to load item".to_string()
    } else {
        message
    }
}
