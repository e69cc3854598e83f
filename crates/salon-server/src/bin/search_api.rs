//! Inventory search API for the Autosalon website.

use anyhow::{Context, Result};
use clap::Parser;
use salon_core::config::ServerConfig;
use salon_core::RecordStore;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::info;

#[derive(Parser, Debug)]
#[command(name = "search-api")]
#[command(about = "Vehicle inventory search API")]
struct Args {
    /// Port to listen on (0 = auto-assign)
    #[arg(short, long, env = "PORT", default_value = "8080")]
    port: u16,

    /// Host to bind to
    #[arg(long, env = "HOST", default_value = ServerConfig::DEFAULT_HOST)]
    host: String,

    /// Enable debug logging
    #[arg(short, long)]
    debug: bool,

    /// Inventory CSV file (defaults to the inventory built into the binary)
    #[arg(long, env = "INVENTORY_CSV")]
    data: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();
    salon_server::init_tracing(args.debug);

    info!("Starting inventory search API");

    let store = match &args.data {
        Some(path) => RecordStore::from_path(path)
            .with_context(|| format!("Failed to load inventory from {}", path.display()))?,
        None => RecordStore::embedded().context("Failed to load built-in inventory")?,
    };

    let addr = salon_server::start_search_server(Arc::new(store), &args.host, args.port).await?;
    info!("Search API ready at http://{}", addr);

    tokio::signal::ctrl_c().await?;
    info!("Shutting down");
    Ok(())
}
