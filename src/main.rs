//! Personnes gateway (v1)
//!
//! # Architecture Overview
//!
//! ```text
//!                         ┌──────────────────────────────────────────────┐
//!                         │               PERSONNES GATEWAY              │
//!                         │                                              │
//!   GET/POST/DELETE       │  ┌─────────┐    ┌─────────────┐              │
//!   /personnes[/{id}]  ───┼─▶│  http   │───▶│    store    │              │
//!                         │  │ server  │    │ (RwLock Vec)│              │
//!                         │  └────┬────┘    └─────────────┘              │
//!                         │       │                                      │
//!   GET /country/{name} ──┼───────┘                                      │
//!                         │       ▼                                      │
//!                         │  ┌──────────┐   ┌────────┐   ┌───────────┐   │
//!                         │  │ template │──▶│ client │──▶│ envelope  │   │
//!                         │  └──────────┘   └───┬────┘   └───────────┘   │
//!                         │                     │                        │
//!                         └─────────────────────┼────────────────────────┘
//!                                               ▼
//!                                     legacy SOAP service
//! ```

use std::path::PathBuf;

use clap::Parser;

use personnes_gateway::config::load_or_default;
use personnes_gateway::http::HttpServer;
use personnes_gateway::lifecycle::{signals, startup, Shutdown};
use personnes_gateway::observability::{logging, metrics};

#[derive(Parser)]
#[command(name = "personnes-gateway")]
#[command(about = "REST gateway over an in-memory person store and a legacy SOAP country service")]
struct Args {
    /// Path to a TOML configuration file. Defaults are used when omitted.
    #[arg(short, long)]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let config = load_or_default(args.config.as_deref())?;
    logging::init_logging(&config.observability.log_level);

    tracing::info!("personnes-gateway v{} starting", env!("CARGO_PKG_VERSION"));
    tracing::info!(
        bind_address = %config.listener.bind_address,
        legacy_endpoint = %config.legacy.endpoint_url,
        seed_demo_records = config.store.seed_demo_records,
        "Configuration loaded"
    );

    if config.observability.metrics_enabled {
        match config.observability.metrics_address.parse() {
            Ok(addr) => metrics::init_metrics(addr),
            Err(_) => tracing::error!(
                metrics_address = %config.observability.metrics_address,
                "Failed to parse metrics address"
            ),
        }
    }

    let server = HttpServer::new(config.clone())?;
    let listener = startup::bind_listener(&config.listener.bind_address).await?;

    let shutdown = Shutdown::new();
    let shutdown_rx = shutdown.subscribe();
    tokio::spawn(async move {
        signals::wait_for_termination().await;
        shutdown.trigger();
    });

    server.run(listener, shutdown_rx).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}
