//! Backup Agent API - Main entry point
//!
//! Serves status, logs, health and the backup trigger over HTTP.

use anyhow::Result;
use backup_agent_api::{api, config::Config, daemon::shutdown::ShutdownCoordinator, utils};
use clap::Parser;
use std::net::SocketAddr;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to configuration file
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Port to listen on (overrides config and API_PORT)
    #[arg(short, long)]
    port: Option<u16>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(short, long)]
    log_level: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    // Load configuration: file (or defaults), then environment, then flags
    let mut config = Config::load(args.config.as_deref())?;
    if let Some(port) = args.port {
        config.api.port = port;
    }
    if let Some(level) = args.log_level {
        config.log.level = level;
    }

    // Initialize logging
    utils::logger::init(&config.log)?;

    let addr = SocketAddr::from(([0, 0, 0, 0], config.api.port));

    tracing::info!(
        "Starting backup-agent-api v{} on port {}",
        env!("CARGO_PKG_VERSION"),
        config.api.port
    );
    tracing::info!("Dashboard: http://localhost:{}/", config.api.port);
    tracing::info!("API endpoints: /status /health /logs /backup");
    tracing::debug!("Effective configuration: {:?}", config);

    let app = api::create_router(config);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Listening on http://{}", addr);

    let shutdown_coordinator = ShutdownCoordinator::new();
    let mut shutdown_rx = shutdown_coordinator.subscribe();
    tokio::spawn(async move {
        shutdown_coordinator.wait_for_signal().await;
    });

    axum::serve(listener, app)
        .with_graceful_shutdown(async move {
            let _ = shutdown_rx.recv().await;
        })
        .await?;

    tracing::info!("API server stopped");
    Ok(())
}
