//! Catalog state: load phase and the active selection.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use shared::Product;

use crate::catalog::{matching_indices, CatalogError};

/// Full-screen error shown when the catalog cannot be used. There is no
/// recovery path short of reloading the viewer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TerminalError {
    FetchFailure,
    EmptyCatalog,
}

impl TerminalError {
    pub fn message(&self) -> &'static str {
        match self {
            TerminalError::FetchFailure => "Failed to fetch products. Check backend.",
            TerminalError::EmptyCatalog => "No products found in database.",
        }
    }
}

impl From<&CatalogError> for TerminalError {
    fn from(err: &CatalogError) -> Self {
        match err {
            CatalogError::Empty => TerminalError::EmptyCatalog,
            _ => TerminalError::FetchFailure,
        }
    }
}

/// Where the catalog load stands
#[derive(Debug, Clone, PartialEq)]
pub enum CatalogPhase {
    Loading,
    Failed(TerminalError),
    Ready(Selection),
}

impl CatalogPhase {
    pub fn selection(&self) -> Option<&Selection> {
        match self {
            CatalogPhase::Ready(selection) => Some(selection),
            _ => None,
        }
    }
}

/// Fetched products, the filtered view and the current product.
///
/// The current product always belongs to the fetched set, but not
/// necessarily to the filtered view.
#[derive(Debug, Clone, PartialEq)]
pub struct Selection {
    products: Arc<[Product]>,
    /// Positions into `products`, in catalog order
    filtered: Vec<usize>,
    current: usize,
}

impl Selection {
    /// Unfiltered selection with the first product current.
    /// `None` for an empty catalog.
    pub fn new(products: Vec<Product>) -> Option<Self> {
        if products.is_empty() {
            return None;
        }
        let filtered = (0..products.len()).collect();
        Some(Self {
            products: products.into(),
            filtered,
            current: 0,
        })
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn filtered(&self) -> impl Iterator<Item = &Product> + '_ {
        self.filtered.iter().map(|&i| &self.products[i])
    }

    pub fn filtered_len(&self) -> usize {
        self.filtered.len()
    }

    /// The selector shows "no results"
    pub fn no_results(&self) -> bool {
        self.filtered.is_empty()
    }

    pub fn current(&self) -> &Product {
        &self.products[self.current]
    }

    pub fn is_current(&self, id: &str) -> bool {
        self.current().id == id
    }

    /// Refilter with new search text. If the current product drops out of a
    /// non-empty result, the first filtered product becomes current.
    #[must_use]
    pub fn with_search(&self, search: &str) -> Self {
        let filtered = matching_indices(&self.products, search);
        let current = match filtered.first() {
            Some(&first) if !filtered.contains(&self.current) => first,
            _ => self.current,
        };
        Self {
            products: Arc::clone(&self.products),
            filtered,
            current,
        }
    }

    /// Make `id` current. `None` if no fetched product has that id.
    #[must_use]
    pub fn with_current(&self, id: &str) -> Option<Self> {
        let current = self.products.iter().position(|p| p.id == id)?;
        Some(Self {
            products: Arc::clone(&self.products),
            filtered: self.filtered.clone(),
            current,
        })
    }
}
