//! Integration tests for the catalog client against a live catalog server.

use std::sync::Arc;

use ar_viewer_lib::catalog::{CatalogClient, CatalogError, CatalogSource};
use ar_viewer_lib::shell::{Screen, ViewerShell};
use catalog_server::storage::{MemoryStore, ProductStore};
use catalog_server::{seed, serve, AppState};
use shared::ProductDraft;

/// Start a catalog server on an ephemeral port and return its base URL.
async fn spawn_server(store: Arc<MemoryStore>) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(serve(listener, AppState::new(store)));
    format!("http://{addr}")
}

#[tokio::test]
async fn test_fetch_seeded_catalog() {
    let store = Arc::new(MemoryStore::new());
    seed::reseed(store.as_ref()).await.unwrap();
    let client = CatalogClient::new(spawn_server(store).await);

    let products = client.fetch_all().await.unwrap();
    assert_eq!(products.len(), 8);
    assert_eq!(products[0].name, "Nissan GTR");
    assert!(products.iter().all(|p| p.created_at.is_some()));
}

#[tokio::test]
async fn test_fetch_empty_catalog_is_error() {
    let client = CatalogClient::new(spawn_server(Arc::new(MemoryStore::new())).await);
    assert!(matches!(client.fetch_all().await, Err(CatalogError::Empty)));
}

#[tokio::test]
async fn test_fetch_unreachable_is_network_error() {
    // Bind then drop to get a port nothing listens on.
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let client = CatalogClient::new(format!("http://{addr}"));
    assert!(matches!(
        client.fetch_all().await,
        Err(CatalogError::Network(_))
    ));
}

#[tokio::test]
async fn test_shell_mounts_against_server() {
    let store = Arc::new(MemoryStore::new());
    store
        .insert(ProductDraft {
            name: "Duck".into(),
            description: "toy".into(),
            model_path: "/model/duck.glb".into(),
        })
        .await
        .unwrap();
    let client = CatalogClient::new(format!("{}/", spawn_server(store).await));

    let mut shell = ViewerShell::new();
    let effects = shell.mount(&client).await;
    assert_eq!(effects.len(), 1);

    let snapshot = shell.snapshot();
    assert_eq!(snapshot.screen, Screen::Viewer);
    let info = snapshot.current.unwrap();
    assert_eq!(info.name, "Duck");
    assert_eq!(info.model_format, "GLB");
    assert!(info.added_on.is_some());
}
