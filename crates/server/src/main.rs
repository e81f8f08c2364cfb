use catalog_server::{bind, config::Config, serve, AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "catalog_server=info,tower_http=debug".into()),
        )
        .init();

    let config = Config::from_env();
    tracing::info!(port = config.port, store = ?config.store, "Starting catalog server");

    let store = match config.open_store().await {
        Ok(store) => store,
        Err(e) => {
            tracing::error!("Failed to open product store: {e}");
            return Err(e.into());
        }
    };
    tracing::info!("Product store ready ({} products)", store.count().await?);

    let listener = bind(config.port).await?;
    serve(listener, AppState::new(store)).await?;
    Ok(())
}
