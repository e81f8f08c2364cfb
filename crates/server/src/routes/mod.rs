use axum::{
    extract::{rejection::JsonRejection, State},
    response::Json,
};

use crate::error::ApiError;
use crate::AppState;
use shared::{NewProduct, Product, TestResponse};

/// Connectivity check
pub async fn test() -> Json<TestResponse> {
    Json(TestResponse {
        message: "Hello from the backend! 👋".to_string(),
    })
}

/// List every product in the catalog
pub async fn list_products(State(state): State<AppState>) -> Result<Json<Vec<Product>>, ApiError> {
    let products = state.store.list().await?;
    tracing::debug!("Listing {} products", products.len());
    Ok(Json(products))
}

/// Add a product to the catalog
pub async fn add_product(
    State(state): State<AppState>,
    body: Result<Json<NewProduct>, JsonRejection>,
) -> Result<Json<&'static str>, ApiError> {
    let Json(body) = body?;
    let draft = body.validate()?;
    let product = state.store.insert(draft).await?;
    tracing::info!(id = %product.id, name = %product.name, "Product added");
    Ok(Json("Product added!"))
}
