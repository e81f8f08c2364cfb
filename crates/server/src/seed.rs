//! Fixed seed catalog used by `catalog-admin seed`.

use shared::ProductDraft;

use crate::storage::{ProductStore, StoreError};

const SEED: &[(&str, &str, &str)] = &[
    (
        "Nissan GTR",
        "High detail 3D model of Nissan GTR sports car",
        "/model/Nissan GTR.glb",
    ),
    (
        "Scene Model",
        "Detailed 3D scene with multiple textures and materials",
        "/model/scene.gltf",
    ),
    (
        "Damaged Helmet",
        "Sci-fi damaged helmet 3D model",
        "/model/damaged_helmet.glb",
    ),
    ("Boom Box", "Retro boom box 3D model", "/model/boombox.glb"),
    (
        "Cesium Man",
        "Cesium man character 3D model",
        "/model/cesium_man.glb",
    ),
    ("Duck", "Rubber duck 3D model", "/model/duck.glb"),
    (
        "Iridescent Dish",
        "Iridescent dish 3D model",
        "/model/iridescent_dish.glb",
    ),
    (
        "Metal Rough Spheres",
        "Metal rough spheres 3D model",
        "/model/metal_rough_spheres.glb",
    ),
];

/// The seed products, in display order.
pub fn seed_products() -> Vec<ProductDraft> {
    SEED.iter()
        .map(|(name, description, model_path)| ProductDraft {
            name: name.to_string(),
            description: description.to_string(),
            model_path: model_path.to_string(),
        })
        .collect()
}

/// Replace the store contents with the seed catalog.
/// Returns `(removed, inserted)` counts.
pub async fn reseed(store: &dyn ProductStore) -> Result<(usize, usize), StoreError> {
    let removed = store.clear().await?;
    let inserted = store.insert_many(seed_products()).await?;
    for product in &inserted {
        tracing::info!("  - {}", product.name);
    }
    Ok((removed, inserted.len()))
}
