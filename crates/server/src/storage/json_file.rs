use std::path::{Path, PathBuf};

use async_trait::async_trait;
use shared::{Product, ProductDraft};
use tokio::sync::Mutex;

use super::{stamp, ProductStore, StoreError};

/// Product collection persisted as one JSON array document.
///
/// The file is the source of truth: every call reads it again, so writes made
/// by another process (`catalog-admin`) are visible at once. Mutations
/// re-read the document under the write lock and rewrite it through a temp
/// file + rename, so a crash never leaves a half-written catalog.
pub struct JsonFileStore {
    path: PathBuf,
    write_lock: Mutex<()>,
}

impl JsonFileStore {
    /// Open the document at `path`. A missing file is an empty collection.
    pub async fn open(path: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let store = Self {
            path: path.into(),
            write_lock: Mutex::new(()),
        };
        let products = store.load().await?;
        tracing::debug!(path = %store.path.display(), count = products.len(), "Opened product store");
        Ok(store)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    async fn load(&self) -> Result<Vec<Product>, StoreError> {
        match tokio::fs::read_to_string(&self.path).await {
            Ok(json) if json.trim().is_empty() => Ok(Vec::new()),
            Ok(json) => Ok(serde_json::from_str(&json)?),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(Vec::new()),
            Err(e) => Err(e.into()),
        }
    }

    async fn persist(&self, products: &[Product]) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                tokio::fs::create_dir_all(parent).await?;
            }
        }
        let json = serde_json::to_string_pretty(products)?;
        let tmp = self.path.with_extension("json.tmp");
        tokio::fs::write(&tmp, json).await?;
        tokio::fs::rename(&tmp, &self.path).await?;
        Ok(())
    }
}

#[async_trait]
impl ProductStore for JsonFileStore {
    async fn list(&self) -> Result<Vec<Product>, StoreError> {
        self.load().await
    }

    async fn insert(&self, draft: ProductDraft) -> Result<Product, StoreError> {
        let _guard = self.write_lock.lock().await;
        let mut products = self.load().await?;
        let product = stamp(draft);
        products.push(product.clone());
        self.persist(&products).await?;
        Ok(product)
    }

    async fn insert_many(&self, drafts: Vec<ProductDraft>) -> Result<Vec<Product>, StoreError> {
        let _guard = self.write_lock.lock().await;
        let mut products = self.load().await?;
        let inserted: Vec<Product> = drafts.into_iter().map(stamp).collect();
        products.extend(inserted.iter().cloned());
        self.persist(&products).await?;
        Ok(inserted)
    }

    async fn clear(&self) -> Result<usize, StoreError> {
        let _guard = self.write_lock.lock().await;
        let removed = self.load().await?.len();
        self.persist(&[]).await?;
        Ok(removed)
    }
}
