//! Headless viewer driver.
//!
//! Fetches the catalog, prints the initial snapshot, then reads one JSON
//! action per line from stdin and prints one JSON response per line.
//!
//! Usage: `ar-viewer [--api <url>]`

use anyhow::Context;
use ar_viewer_lib::catalog::CatalogClient;
use ar_viewer_lib::command;
use ar_viewer_lib::shell::ViewerShell;
use ar_viewer_lib::state::ViewerSettings;
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "ar_viewer=info,ar_viewer_lib=info".into()),
        )
        .init();

    let mut settings = ViewerSettings::load();
    if let Some(api) = parse_api_arg() {
        tracing::info!("Using catalog service at {api}");
        settings.api_base_url = api;
        settings.save();
    }

    let client = CatalogClient::new(settings.api_base_url.clone());
    let mut shell = ViewerShell::new();
    let effects = shell.mount(&client).await;

    let mut stdout = tokio::io::stdout();
    let initial = serde_json::json!({
        "effects": effects,
        "snapshot": shell.snapshot(),
    });
    write_line(&mut stdout, &serde_json::to_string(&initial)?).await?;

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await.context("Failed to read stdin")? {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        let response = match command::execute_json(&mut shell, line) {
            Ok(response) => response,
            Err(e) => {
                tracing::warn!("{e}");
                command::CommandResponse::err(e)
            }
        };
        write_line(&mut stdout, &serde_json::to_string(&response)?).await?;
    }

    Ok(())
}

async fn write_line(stdout: &mut tokio::io::Stdout, line: &str) -> anyhow::Result<()> {
    stdout.write_all(line.as_bytes()).await?;
    stdout.write_all(b"\n").await?;
    stdout.flush().await?;
    Ok(())
}

fn parse_api_arg() -> Option<String> {
    let args: Vec<String> = std::env::args().collect();
    let mut i = 1;
    while i < args.len() {
        if args[i] == "--api" && i + 1 < args.len() {
            return Some(args[i + 1].clone());
        }
        i += 1;
    }
    None
}
