//! Catalog client: fetches the product list from the catalog service.

mod filter;

pub use filter::{filter, matching_indices};

use async_trait::async_trait;
use shared::Product;
use thiserror::Error;

/// Why the initial catalog load failed.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// Transport failure or an undecodable response body
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    /// The service answered with a non-success status
    #[error("catalog service responded with status {0}")]
    Status(u16),

    /// The request succeeded but the catalog holds no products
    #[error("no products found")]
    Empty,

    /// Any other source failure (used by non-HTTP sources)
    #[error("{0}")]
    Other(String),
}

/// Something the viewer can load its product list from.
#[async_trait(?Send)]
pub trait CatalogSource {
    /// Fetch every product. An empty result is reported as [`CatalogError::Empty`].
    async fn fetch_all(&self) -> Result<Vec<Product>, CatalogError>;
}

/// HTTP client for `GET /api/products`.
#[derive(Clone)]
pub struct CatalogClient {
    http: reqwest::Client,
    base_url: String,
}

impl CatalogClient {
    /// `base_url` is the service root, e.g. `http://localhost:5001`.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn products_url(&self) -> String {
        format!("{}/api/products", self.base_url)
    }
}

#[async_trait(?Send)]
impl CatalogSource for CatalogClient {
    async fn fetch_all(&self) -> Result<Vec<Product>, CatalogError> {
        let url = self.products_url();
        tracing::debug!("Fetching products from {url}");

        let response = self.http.get(&url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(CatalogError::Status(status.as_u16()));
        }

        let products: Vec<Product> = response.json().await?;
        tracing::info!("Products fetched: {}", products.len());
        non_empty(products)
    }
}

/// Zero products is an error, not an empty state.
pub fn non_empty(products: Vec<Product>) -> Result<Vec<Product>, CatalogError> {
    if products.is_empty() {
        Err(CatalogError::Empty)
    } else {
        Ok(products)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::duck;

    #[test]
    fn test_products_url_strips_trailing_slash() {
        let client = CatalogClient::new("http://localhost:5001/");
        assert_eq!(client.products_url(), "http://localhost:5001/api/products");
        assert_eq!(client.base_url(), "http://localhost:5001");
    }

    #[test]
    fn test_non_empty() {
        assert!(matches!(non_empty(vec![]), Err(CatalogError::Empty)));
        assert_eq!(non_empty(vec![duck()]).unwrap().len(), 1);
    }
}
