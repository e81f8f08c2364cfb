//! Server configuration loaded from environment variables.

use std::path::PathBuf;
use std::sync::Arc;

use crate::storage::{JsonFileStore, MemoryStore, ProductStore, StoreError};

/// Default port, matches the front-end's expected backend address.
pub const DEFAULT_PORT: u16 = 5001;

/// Which product store backend to use.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreKind {
    /// JSON document file at the given path.
    File(PathBuf),
    /// In-memory collection, empty on every start.
    Memory,
}

/// Server configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// Port to listen on.
    pub port: u16,
    /// Product store backend.
    pub store: StoreKind,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// - `PORT` (default 5001)
    /// - `CATALOG_STORE`: `file` (default) or `memory`
    /// - `CATALOG_PATH`: document path for the file store
    pub fn from_env() -> Self {
        let port = std::env::var("PORT")
            .ok()
            .and_then(|p| p.parse().ok())
            .unwrap_or(DEFAULT_PORT);

        let store = match std::env::var("CATALOG_STORE").as_deref() {
            Ok("memory") => StoreKind::Memory,
            _ => StoreKind::File(
                std::env::var("CATALOG_PATH")
                    .map(PathBuf::from)
                    .unwrap_or_else(|_| default_catalog_path()),
            ),
        };

        Self { port, store }
    }

    /// Open the configured product store.
    pub async fn open_store(&self) -> Result<Arc<dyn ProductStore>, StoreError> {
        match &self.store {
            StoreKind::File(path) => Ok(Arc::new(JsonFileStore::open(path.clone()).await?)),
            StoreKind::Memory => Ok(Arc::new(MemoryStore::new())),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}

/// `<data dir>/products.json`, or `./products.json` when no home is known.
fn default_catalog_path() -> PathBuf {
    directories::ProjectDirs::from("com", "arviewer", "ar-viewer")
        .map(|dirs| dirs.data_dir().join("products.json"))
        .unwrap_or_else(|| PathBuf::from("products.json"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_memory_store_opens_empty() {
        let config = Config {
            port: DEFAULT_PORT,
            store: StoreKind::Memory,
        };
        let store = config.open_store().await.unwrap();
        assert_eq!(store.count().await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_file_store_opens_at_path() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config {
            port: DEFAULT_PORT,
            store: StoreKind::File(dir.path().join("catalog.json")),
        };
        let store = config.open_store().await.unwrap();
        assert_eq!(store.count().await.unwrap(), 0);
    }

    #[test]
    fn test_default_path_is_json_document() {
        assert!(default_catalog_path().ends_with("products.json"));
    }
}
