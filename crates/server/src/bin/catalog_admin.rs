//! Catalog maintenance: add a product, reseed the collection, check the store.

use clap::{Parser, Subcommand};

use catalog_server::config::Config;
use catalog_server::seed;
use shared::NewProduct;

#[derive(Parser)]
#[command(name = "catalog-admin", about = "Maintain the AR viewer product catalog")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Add a single product
    Add {
        name: String,
        description: String,
        /// Model path served by the front-end, e.g. "/model/duck.glb"
        model_path: String,
    },
    /// Clear the collection and insert the fixed seed catalog
    Seed,
    /// Open the store and report how many products it holds
    Check,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "catalog_server=info,catalog_admin=info".into()),
        )
        .init();

    let cli = Cli::parse();
    let config = Config::from_env();
    let store = config.open_store().await?;

    match cli.command {
        Command::Add {
            name,
            description,
            model_path,
        } => {
            let draft = NewProduct::new(name, description, model_path).validate()?;
            let product = store.insert(draft).await?;
            tracing::info!("Added product: {} ({})", product.name, product.id);
        }
        Command::Seed => {
            let (removed, inserted) = seed::reseed(store.as_ref()).await?;
            tracing::info!("Cleared {removed} existing products, added {inserted}");
        }
        Command::Check => {
            let count = store.count().await?;
            tracing::info!(store = ?config.store, "Store reachable: {count} products");
        }
    }

    Ok(())
}
