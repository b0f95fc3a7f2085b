//! Shared test helpers and the scripted catalog source double.

#![allow(dead_code)]

use std::collections::VecDeque;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use tempfile::TempDir;
use tokio::sync::watch;

use shelfview::catalog::{
    CatalogDocument, CatalogError, CatalogFuture, CatalogRecord, CatalogRepository, CatalogSource,
};
use shelfview::favorites::FavoritesStore;

/// Default quiescence window used by the holder tests.
pub const DEBOUNCE: Duration = Duration::from_millis(300);

pub fn record(id: &str, title: &str, category: &str, price: f64, rating: f64) -> CatalogRecord {
    CatalogRecord {
        id: id.to_string(),
        title: title.to_string(),
        category: category.to_string(),
        price,
        rating,
    }
}

/// The item set the bundled demo catalog is built around.
pub fn sample_records() -> Vec<CatalogRecord> {
    vec![
        record("bk_001", "The Blue Fox", "Fiction", 12.99, 4.4),
        record("bk_002", "Data Sketches", "Non-Fiction", 32.00, 4.8),
        record("bk_003", "Swift Patterns", "Tech", 24.50, 4.1),
        record("bk_004", "Kotlin by Example", "Tech", 21.00, 4.3),
    ]
}

pub fn document(records: Vec<CatalogRecord>) -> CatalogDocument {
    CatalogDocument {
        updated_at: "2025-06-18T09:00:00Z".to_string(),
        items: records,
    }
}

/// One planned response of a [`ScriptedSource`].
pub struct ScriptedFetch {
    pub delay: Duration,
    pub result: Result<CatalogDocument, String>,
}

pub fn fetch_ok(delay: Duration, records: Vec<CatalogRecord>) -> ScriptedFetch {
    ScriptedFetch {
        delay,
        result: Ok(document(records)),
    }
}

pub fn fetch_err(delay: Duration, message: &str) -> ScriptedFetch {
    ScriptedFetch {
        delay,
        result: Err(message.to_string()),
    }
}

/// Catalog source double that plays back planned responses in fetch
/// order, with per-fetch delays, and counts how often it was asked.
pub struct ScriptedSource {
    plan: Mutex<VecDeque<ScriptedFetch>>,
    fetches: AtomicUsize,
}

impl ScriptedSource {
    pub fn new(plan: Vec<ScriptedFetch>) -> Arc<Self> {
        Arc::new(Self {
            plan: Mutex::new(plan.into()),
            fetches: AtomicUsize::new(0),
        })
    }

    /// Single immediate successful fetch.
    pub fn ok(records: Vec<CatalogRecord>) -> Arc<Self> {
        Self::new(vec![fetch_ok(Duration::ZERO, records)])
    }

    pub fn fetch_count(&self) -> usize {
        self.fetches.load(Ordering::SeqCst)
    }
}

impl CatalogSource for ScriptedSource {
    fn fetch_catalog(&self) -> CatalogFuture<'_> {
        self.fetches.fetch_add(1, Ordering::SeqCst);
        let next = self.plan.lock().unwrap().pop_front();
        Box::pin(async move {
            let fetch = next.expect("scripted source ran out of planned fetches");
            if fetch.delay > Duration::ZERO {
                tokio::time::sleep(fetch.delay).await;
            }
            fetch.result.map_err(|message| CatalogError::Read {
                path: "scripted.json".into(),
                source: std::io::Error::new(std::io::ErrorKind::Other, message),
            })
        })
    }
}

pub fn repository(source: Arc<ScriptedSource>) -> CatalogRepository {
    CatalogRepository::new(source)
}

/// Favorites store on a fresh temp dir. Keep the dir alive for the test's
/// duration.
pub fn temp_store() -> (TempDir, Arc<FavoritesStore>) {
    let dir = TempDir::new().expect("tempdir");
    let store = Arc::new(FavoritesStore::open(dir.path().join("favorites.json")));
    (dir, store)
}

/// Favorites store whose writes can never succeed: the parent "directory"
/// is a plain file.
pub fn broken_store() -> (TempDir, Arc<FavoritesStore>) {
    let dir = TempDir::new().expect("tempdir");
    let blocker = dir.path().join("blocker");
    std::fs::write(&blocker, b"in the way").expect("write blocker");
    let store = Arc::new(FavoritesStore::open(blocker.join("favorites.json")));
    (dir, store)
}

/// Wait (bounded) until a watch channel carries a value matching `pred`.
pub async fn wait_until<T, F>(rx: &mut watch::Receiver<T>, mut pred: F) -> T
where
    T: Clone,
    F: FnMut(&T) -> bool,
{
    tokio::time::timeout(Duration::from_secs(5), async {
        loop {
            {
                let value = rx.borrow_and_update();
                if pred(&value) {
                    return value.clone();
                }
            }
            rx.changed().await.expect("watch channel closed");
        }
    })
    .await
    .expect("timed out waiting for watched value")
}
