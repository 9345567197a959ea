use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use tokio::net::TcpListener;
use tracing::info;

use parts_inventory::config::Config;
use parts_inventory::http;
use parts_inventory::lifecycle::{setup_tracing, InventorySystem};

#[derive(Parser, Debug)]
#[command(
    name = "parts-inventory",
    version,
    about = "Vehicle parts inventory with restock alerts"
)]
struct Cli {
    /// TOML configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Address to listen on (overrides `server.bind`)
    #[arg(short, long)]
    bind: Option<String>,

    /// Load the demo catalogue on startup
    #[arg(long)]
    seed: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut config = Config::load(cli.config.as_deref()).context("loading configuration")?;
    if let Some(bind) = cli.bind {
        config.server.bind = bind;
    }
    if cli.seed {
        config.inventory.seed_demo_catalog = true;
    }

    setup_tracing(&config.telemetry);

    let system = InventorySystem::start(&config.inventory)
        .await
        .context("starting inventory")?;
    let app = http::router(system.service(), &config);

    let listener = TcpListener::bind(&config.server.bind)
        .await
        .with_context(|| format!("binding {}", config.server.bind))?;
    info!(addr = %config.server.bind, "Listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("serving HTTP")?;

    system.shutdown().await.context("stopping inventory")?;
    Ok(())
}

async fn shutdown_signal() {
    if tokio::signal::ctrl_c().await.is_err() {
        // No signal handler; run until the process is killed.
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}
