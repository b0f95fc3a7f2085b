use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;
use tokio::sync::{watch, Mutex};

/// Errors from favorites persistence.
#[derive(Debug, Error)]
pub enum FavoritesError {
    #[error("Failed to read favorites '{path}': {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write favorites '{path}': {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid favorites JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// Process-wide store of favorite item ids.
///
/// The persisted file is a JSON array of ids. The in-memory set is always
/// a snapshot of the latest successfully persisted value: `toggle` writes
/// the file first and only then publishes the new set on the watch
/// channel, so observers never see a speculative state that persistence
/// later rejects.
///
/// A corrupted or unreadable file is read as the empty set; the file is
/// left untouched until the next successful write.
pub struct FavoritesStore {
    path: PathBuf,
    set_tx: watch::Sender<HashSet<String>>,
    // Serializes read-modify-write cycles so concurrent toggles cannot
    // interleave between snapshot and persist.
    write_gate: Mutex<()>,
}

impl FavoritesStore {
    /// Open the store at `path`, loading whatever is currently persisted.
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let initial = match load_from_disk(&path) {
            Ok(set) => set,
            Err(FavoritesError::Read { source, .. })
                if source.kind() == std::io::ErrorKind::NotFound =>
            {
                HashSet::new()
            }
            Err(err) => {
                tracing::warn!(error = %err, "favorites storage unreadable, starting empty");
                HashSet::new()
            }
        };
        let (set_tx, _) = watch::channel(initial);
        Self {
            path,
            set_tx,
            write_gate: Mutex::new(()),
        }
    }

    /// Default location under the platform data directory.
    pub fn default_path() -> PathBuf {
        let data_dir = dirs::data_dir().unwrap_or_else(|| PathBuf::from("."));
        data_dir.join("shelfview").join("favorites.json")
    }

    /// Subscribe to the favorite set. The receiver replays the current
    /// value immediately and observes every subsequent change.
    pub fn subscribe(&self) -> watch::Receiver<HashSet<String>> {
        self.set_tx.subscribe()
    }

    /// Current snapshot of the persisted set.
    pub fn current(&self) -> HashSet<String> {
        self.set_tx.borrow().clone()
    }

    /// Flip membership of `id`, persist, then publish. Returns the
    /// resulting membership.
    ///
    /// A failed write is retried once after clearing the favorites file;
    /// if the retry also fails the error is returned and the visible set
    /// is unchanged.
    pub async fn toggle(&self, id: &str) -> Result<bool, FavoritesError> {
        let _gate = self.write_gate.lock().await;

        let mut next = self.set_tx.borrow().clone();
        let now_favorite = if next.remove(id) {
            false
        } else {
            next.insert(id.to_string());
            true
        };

        if let Err(err) = self.persist(&next).await {
            tracing::warn!(error = %err, "favorites write failed, clearing and retrying");
            let _ = tokio::fs::remove_file(&self.path).await;
            self.persist(&next).await?;
        }

        tracing::debug!(item = %id, favorite = now_favorite, "favorite toggled");
        self.set_tx.send_replace(next);
        Ok(now_favorite)
    }

    /// Write the set atomically: temp file in the same directory, then
    /// rename over the target.
    async fn persist(&self, set: &HashSet<String>) -> Result<(), FavoritesError> {
        let mut ids: Vec<&String> = set.iter().collect();
        ids.sort();
        let content = serde_json::to_string_pretty(&ids)?;

        let write_err = |source| FavoritesError::Write {
            path: self.path.clone(),
            source,
        };

        if let Some(parent) = self.path.parent() {
            tokio::fs::create_dir_all(parent).await.map_err(write_err)?;
        }

        let temp_path = self.path.with_extension("json.tmp");
        tokio::fs::write(&temp_path, content.as_bytes())
            .await
            .map_err(write_err)?;
        tokio::fs::rename(&temp_path, &self.path)
            .await
            .map_err(write_err)?;
        Ok(())
    }
}

fn load_from_disk(path: &Path) -> Result<HashSet<String>, FavoritesError> {
    let content = fs::read_to_string(path).map_err(|source| FavoritesError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let ids: Vec<String> = serde_json::from_str(&content)?;
    Ok(ids.into_iter().collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[tokio::test]
    async fn toggle_returns_resulting_membership() {
        let temp = TempDir::new().unwrap();
        let store = FavoritesStore::open(temp.path().join("favorites.json"));

        assert!(store.toggle("bk_001").await.unwrap());
        assert!(store.current().contains("bk_001"));
        assert!(!store.toggle("bk_001").await.unwrap());
        assert!(store.current().is_empty());
    }

    #[tokio::test]
    async fn corrupted_file_reads_empty_without_rewrite() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("favorites.json");
        fs::write(&path, "not json {").unwrap();

        let store = FavoritesStore::open(&path);
        assert!(store.current().is_empty());
        // Read-time recovery must not destroy what is on disk.
        assert_eq!(fs::read_to_string(&path).unwrap(), "not json {");

        store.toggle("bk_001").await.unwrap();
        let ids: Vec<String> =
            serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(ids, vec!["bk_001".to_string()]);
    }
}
