//! Terminal client for the product storefront.
//!
//! Starts with a browse of the catalog, then reads actions from the
//! prompt: plain text searches, `/filter` manages the filter form,
//! `/chat` toggles the chat panel, `/quit` leaves.

mod config;
mod dispatch;
mod intent;
mod panels;
mod view;

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use dialoguer::{theme::ColorfulTheme, Input};
use tracing_subscriber::EnvFilter;

use storefront_data::ProductClient;

use config::AppConfig;
use dispatch::Dispatcher;
use intent::Intent;
use view::ConsoleView;

/// Storefront - search and browse the product catalog
#[derive(Parser)]
#[command(name = "storefront")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Config file path
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Product service base URL (overrides config)
    #[arg(long)]
    service_url: Option<String>,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let mut config = AppConfig::load(cli.config.as_deref())?;
    if let Some(url) = cli.service_url {
        config.service.base_url = url;
    }

    let client = ProductClient::new(&config.service.base_url, config.fetch_policy())?;
    let dispatcher = Dispatcher::new(Arc::new(client), Box::new(ConsoleView::new()));
    let intents = dispatcher.intents();
    let mut renders = dispatcher.renders();
    let worker = tokio::spawn(dispatcher.run());

    // First load goes through the same pipeline as any other query, with
    // no criteria active.
    intents.send(Intent::initial_browse()).await?;
    renders.changed().await?;

    loop {
        let Ok(line) = prompt().await else {
            // Closed or non-interactive input ends the session.
            break;
        };
        match Intent::parse_line(&line) {
            Some(Intent::Shutdown) => break,
            Some(intent) => {
                intents.send(intent).await?;
                renders.changed().await?;
            }
            None => println!("commands: /filter [field=value ...], /chat, /quit"),
        }
    }

    intents.send(Intent::Shutdown).await?;
    worker.await.context("dispatcher task failed")?;
    Ok(())
}

async fn prompt() -> Result<String> {
    tokio::task::spawn_blocking(|| {
        Input::<String>::with_theme(&ColorfulTheme::default())
            .with_prompt("search")
            .allow_empty(true)
            .interact_text()
            .map_err(anyhow::Error::from)
    })
    .await
    .context("prompt task failed")?
}

fn init_tracing(verbose: bool) {
    let default_filter = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
