// Library crate: router, store adapters and seed data, shared by the
// `catalog-server` and `catalog-admin` binaries and the integration tests.

use std::net::SocketAddr;
use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

pub mod config;
pub mod error;
pub mod routes;
pub mod seed;
pub mod storage;

use storage::ProductStore;

#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn ProductStore>,
}

impl AppState {
    pub fn new(store: Arc<dyn ProductStore>) -> Self {
        Self { store }
    }
}

/// Build the catalog API router.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/api/test", get(routes::test))
        .route("/api/products", get(routes::list_products))
        .route("/api/products/add", post(routes::add_product))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// Serve the catalog API on an already bound listener until the task is dropped.
pub async fn serve(listener: tokio::net::TcpListener, state: AppState) -> std::io::Result<()> {
    if let Ok(addr) = listener.local_addr() {
        tracing::info!("Catalog server running on http://{}", addr);
    }
    axum::serve(listener, router(state)).await
}

/// Bind to `0.0.0.0:<port>`.
pub async fn bind(port: u16) -> std::io::Result<tokio::net::TcpListener> {
    tokio::net::TcpListener::bind(SocketAddr::from(([0, 0, 0, 0], port))).await
}
