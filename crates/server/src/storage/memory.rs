use async_trait::async_trait;
use shared::{Product, ProductDraft};
use tokio::sync::RwLock;

use super::{stamp, ProductStore, StoreError};

/// In-memory product collection. Contents are lost on shutdown.
#[derive(Default)]
pub struct MemoryStore {
    products: RwLock<Vec<Product>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start with an existing set of products.
    pub fn with_products(products: Vec<Product>) -> Self {
        Self {
            products: RwLock::new(products),
        }
    }
}

#[async_trait]
impl ProductStore for MemoryStore {
    async fn list(&self) -> Result<Vec<Product>, StoreError> {
        Ok(self.products.read().await.clone())
    }

    async fn insert(&self, draft: ProductDraft) -> Result<Product, StoreError> {
        let product = stamp(draft);
        self.products.write().await.push(product.clone());
        Ok(product)
    }

    async fn insert_many(&self, drafts: Vec<ProductDraft>) -> Result<Vec<Product>, StoreError> {
        let inserted: Vec<Product> = drafts.into_iter().map(stamp).collect();
        self.products.write().await.extend(inserted.iter().cloned());
        Ok(inserted)
    }

    async fn clear(&self) -> Result<usize, StoreError> {
        let mut products = self.products.write().await;
        let removed = products.len();
        products.clear();
        Ok(removed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::NewProduct;

    fn draft(name: &str) -> ProductDraft {
        NewProduct::new(name, "desc", format!("/model/{name}.glb"))
            .validate()
            .unwrap()
    }

    #[tokio::test]
    async fn test_insert_assigns_unique_ids() {
        let store = MemoryStore::new();
        let a = store.insert(draft("a")).await.unwrap();
        let b = store.insert(draft("b")).await.unwrap();
        assert_ne!(a.id, b.id);
        assert!(a.created_at.is_some());
        assert_eq!(store.count().await.unwrap(), 2);
    }

    #[tokio::test]
    async fn test_list_preserves_insertion_order() {
        let store = MemoryStore::new();
        store
            .insert_many(vec![draft("first"), draft("second"), draft("third")])
            .await
            .unwrap();
        let names: Vec<String> = store
            .list()
            .await
            .unwrap()
            .into_iter()
            .map(|p| p.name)
            .collect();
        assert_eq!(names, vec!["first", "second", "third"]);
    }

    #[tokio::test]
    async fn test_clear_reports_removed() {
        let store = MemoryStore::new();
        store.insert_many(vec![draft("a"), draft("b")]).await.unwrap();
        assert_eq!(store.clear().await.unwrap(), 2);
        assert!(store.list().await.unwrap().is_empty());
    }
}
