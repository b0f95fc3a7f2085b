mod common;

use std::sync::Arc;

use common::{broken_store, temp_store, wait_until};
use shelfview::favorites::FavoritesStore;
use tempfile::TempDir;

#[tokio::test]
async fn toggle_flips_membership_and_reports_it() {
    let (_dir, store) = temp_store();

    assert!(store.toggle("bk_001").await.unwrap());
    assert!(store.current().contains("bk_001"));

    assert!(!store.toggle("bk_001").await.unwrap());
    assert!(store.current().is_empty());
}

#[tokio::test]
async fn favorites_persist_across_reopen() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("favorites.json");

    {
        let store = FavoritesStore::open(&path);
        store.toggle("bk_001").await.unwrap();
        store.toggle("bk_002").await.unwrap();
    }

    let reopened = FavoritesStore::open(&path);
    let current = reopened.current();
    assert!(current.contains("bk_001"));
    assert!(current.contains("bk_002"));
    assert_eq!(current.len(), 2);
}

#[tokio::test]
async fn new_subscribers_see_the_current_value_immediately() {
    let (_dir, store) = temp_store();
    store.toggle("bk_003").await.unwrap();

    let late = store.subscribe();
    assert!(late.borrow().contains("bk_003"));
}

#[tokio::test]
async fn subscribers_observe_every_change() {
    let (_dir, store) = temp_store();
    let mut rx = store.subscribe();
    assert!(rx.borrow().is_empty());

    store.toggle("bk_001").await.unwrap();
    let set = wait_until(&mut rx, |set| set.contains("bk_001")).await;
    assert_eq!(set.len(), 1);
}

#[tokio::test(flavor = "multi_thread")]
async fn concurrent_toggles_of_distinct_ids_all_land() {
    let (_dir, store) = temp_store();

    let mut handles = Vec::new();
    for index in 0..10 {
        let store = Arc::clone(&store);
        handles.push(tokio::spawn(async move {
            store.toggle(&format!("bk_{index:03}")).await.unwrap()
        }));
    }
    for handle in handles {
        assert!(handle.await.unwrap());
    }

    assert_eq!(store.current().len(), 10);
}

#[tokio::test]
async fn failed_write_keeps_the_visible_set_unchanged() {
    let (_dir, store) = broken_store();

    assert!(store.toggle("bk_001").await.is_err());
    assert!(store.current().is_empty());
    assert!(store.subscribe().borrow().is_empty());
}
