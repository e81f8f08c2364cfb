//! Model loading flag, keyed by a load generation.
//!
//! Every product change starts a new generation. A completion signal only
//! clears the flag when it carries the current generation, so a slow load of a
//! product the user already switched away from cannot hide the spinner of the
//! product that replaced it.

use serde::{Deserialize, Serialize};
use shared::{Product, ProductId};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModelLoad {
    pub generation: u64,
    pub product_id: Option<ProductId>,
    pub model_path: Option<String>,
    pub loading: bool,
}

impl ModelLoad {
    /// Start loading `product`'s model under a fresh generation.
    #[must_use]
    pub fn begin(&self, product: &Product) -> Self {
        Self {
            generation: self.generation + 1,
            product_id: Some(product.id.clone()),
            model_path: Some(product.model_path.clone()),
            loading: true,
        }
    }

    /// Apply a completion signal. Stale generations leave the state unchanged.
    #[must_use]
    pub fn complete(&self, generation: u64) -> Self {
        if generation != self.generation || !self.loading {
            return self.clone();
        }
        Self {
            loading: false,
            ..self.clone()
        }
    }

    pub fn is_current(&self, generation: u64) -> bool {
        self.generation == generation
    }
}
