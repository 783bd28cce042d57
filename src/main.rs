//! linkpage — a personal link-in-bio service.
//!
//! # Architecture Overview
//!
//! ```text
//!                    ┌──────────────────────────────────────────────┐
//!                    │                  LINKPAGE                     │
//!                    │                                               │
//!   Client Request   │  ┌─────────┐   ┌──────────┐   ┌───────────┐ │
//!   ─────────────────┼─▶│  http   │──▶│  links   │──▶│ resolver  │ │
//!                    │  │ server  │   │ registry │   │           │ │
//!                    │  └─────────┘   └──────────┘   └─────┬─────┘ │
//!                    │                                      │       │
//!                    │                                      ▼       │
//!   Client Response  │  ┌─────────┐   ┌──────────┐   ┌───────────┐ │
//!   ◀────────────────┼──│ cache   │◀──│   qr     │◀──│ resolved  │ │
//!                    │  │ policy  │   │ renderer │   │  links    │ │
//!                    │  └─────────┘   └──────────┘   └───────────┘ │
//!                    │                                               │
//!                    │  ┌─────────────────────────────────────────┐ │
//!                    │  │          Cross-Cutting Concerns          │ │
//!                    │  │  config · tracing · request IDs · scrape │ │
//!                    │  └─────────────────────────────────────────┘ │
//!                    └──────────────────────────────────────────────┘
//! ```

use std::path::PathBuf;

use clap::Parser;
use tokio::net::TcpListener;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use linkpage::config::load_config;
use linkpage::http::HttpServer;

#[derive(Parser, Debug)]
#[command(name = "linkpage", about = "Personal link-in-bio service")]
struct Args {
    /// Path to a TOML configuration file.
    #[arg(long)]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    // Initialize tracing subscriber
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "linkpage=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("linkpage v{} starting", env!("CARGO_PKG_VERSION"));

    let config = load_config(args.config.as_deref())?;

    tracing::info!(
        bind_address = %config.listener.bind_address,
        custom_links = config.links.custom.len(),
        scrape_enabled = config.scrape.enabled,
        "Configuration loaded"
    );

    let listener = TcpListener::bind(&config.listener.bind_address).await?;
    let local_addr = listener.local_addr()?;

    tracing::info!(address = %local_addr, "Listening for connections");

    let server = HttpServer::new(config);
    server.run(listener).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}
