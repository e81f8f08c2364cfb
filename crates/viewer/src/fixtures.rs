//! Factory functions for creating test data.
//!
//! Provides product and catalog helpers used in tests and by the headless
//! harness.

use async_trait::async_trait;
use shared::Product;

use crate::catalog::{non_empty, CatalogError, CatalogSource};

// ── Product factories ───────────────────────────────────────────

/// Create a product without timestamps.
pub fn product(id: &str, name: &str, description: &str, model_path: &str) -> Product {
    Product {
        id: id.to_string(),
        name: name.to_string(),
        description: description.to_string(),
        model_path: model_path.to_string(),
        created_at: None,
        updated_at: None,
    }
}

/// The single-duck product used across scenarios.
pub fn duck() -> Product {
    product("1", "Duck", "toy", "/model/duck.glb")
}

/// A helmet whose description (not name) mentions "helmet".
pub fn armor() -> Product {
    product("2", "Space Armor", "Sci-fi damaged helmet", "/model/damaged_helmet.glb")
}

/// Eight products mirroring the seed catalog, ids "1" to "8".
pub fn sample_catalog() -> Vec<Product> {
    [
        ("Nissan GTR", "High detail 3D model of Nissan GTR sports car", "/model/Nissan GTR.glb"),
        ("Scene Model", "Detailed 3D scene with multiple textures and materials", "/model/scene.gltf"),
        ("Damaged Helmet", "Sci-fi damaged helmet 3D model", "/model/damaged_helmet.glb"),
        ("Boom Box", "Retro boom box 3D model", "/model/boombox.glb"),
        ("Cesium Man", "Cesium man character 3D model", "/model/cesium_man.glb"),
        ("Duck", "Rubber duck 3D model", "/model/duck.glb"),
        ("Iridescent Dish", "Iridescent dish 3D model", "/model/iridescent_dish.glb"),
        ("Metal Rough Spheres", "Metal rough spheres 3D model", "/model/metal_rough_spheres.glb"),
    ]
    .iter()
    .enumerate()
    .map(|(i, (name, description, path))| product(&(i + 1).to_string(), name, description, path))
    .collect()
}

// ── Catalog sources ─────────────────────────────────────────────

/// In-memory catalog source.
pub enum StaticCatalog {
    Products(Vec<Product>),
    /// Fails like an unreachable backend
    Unreachable,
}

#[async_trait(?Send)]
impl CatalogSource for StaticCatalog {
    async fn fetch_all(&self) -> Result<Vec<Product>, CatalogError> {
        match self {
            StaticCatalog::Products(products) => non_empty(products.clone()),
            StaticCatalog::Unreachable => Err(CatalogError::Other("connection refused".into())),
        }
    }
}
