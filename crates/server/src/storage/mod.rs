//! Product store adapters.
//!
//! The catalog keeps a single collection of product documents keyed by an
//! opaque store-assigned identifier. Two backends are provided: an in-memory
//! collection (tests, `CATALOG_STORE=memory`) and a JSON document file.

mod json_file;
mod memory;

pub use json_file::JsonFileStore;
pub use memory::MemoryStore;

use async_trait::async_trait;
use chrono::Utc;
use shared::{Product, ProductDraft};
use thiserror::Error;

/// Store errors.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("store I/O failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("store document is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// A collection of product documents.
#[async_trait]
pub trait ProductStore: Send + Sync {
    /// All products in insertion order.
    async fn list(&self) -> Result<Vec<Product>, StoreError>;

    /// Insert one product, assigning its identifier and timestamps.
    async fn insert(&self, draft: ProductDraft) -> Result<Product, StoreError>;

    /// Insert several products in one write.
    async fn insert_many(&self, drafts: Vec<ProductDraft>) -> Result<Vec<Product>, StoreError>;

    /// Remove every product, returning how many were removed.
    async fn clear(&self) -> Result<usize, StoreError>;

    async fn count(&self) -> Result<usize, StoreError> {
        Ok(self.list().await?.len())
    }
}

/// Assign a fresh identifier and creation time to a draft.
pub(crate) fn stamp(draft: ProductDraft) -> Product {
    let id = uuid::Uuid::new_v4().simple().to_string();
    draft.into_product(id, Utc::now())
}
