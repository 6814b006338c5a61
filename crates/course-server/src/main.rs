//! Course Catalog - REST API for courses and the users who own them

use anyhow::{Context, Result};
use clap::Parser;
use metrics_exporter_prometheus::PrometheusBuilder;
use std::net::SocketAddr;
use std::path::Path;
use std::sync::Arc;
use tower_http::trace::TraceLayer;
use tracing::{error, info};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

mod config;

use config::{Config, LoggingConfig};
use course_api::{AppState, create_router};
use course_auth::PasswordHasher;
use course_db::Database;

/// Course Catalog - REST API for courses and the users who own them
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Configuration file path
    #[arg(short, long, default_value = "config/default.toml")]
    config: String,

    /// Bind address
    #[arg(long, env = "COURSE_API_BIND")]
    bind: Option<String>,

    /// Port
    #[arg(short, long, env = "COURSE_API_PORT")]
    port: Option<u16>,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Parse command line arguments
    let args = Args::parse();

    // Load configuration
    let config = Config::load(&args.config)?;

    // Initialize logging
    init_logging(&config.logging);

    info!("Starting Course Catalog v{}", env!("CARGO_PKG_VERSION"));

    // Create the data directory
    if let Some(parent) = Path::new(&config.database.path).parent()
        && !parent.as_os_str().is_empty()
    {
        tokio::fs::create_dir_all(parent).await?;
    }

    // Initialize database
    let db_path = format!("sqlite:{}?mode=rwc", config.database.path);
    let db = Database::new(&db_path).await?;

    // Initialize password hashing
    let hasher = PasswordHasher::new(config.auth.hashing_params())
        .context("Invalid password hashing parameters")?;

    // Install the Prometheus recorder
    let metrics_handle = if config.metrics.enabled {
        let handle = PrometheusBuilder::new()
            .install_recorder()
            .context("Failed to install Prometheus recorder")?;
        Some(Arc::new(handle))
    } else {
        None
    };

    // Create application state
    let state = AppState::new(db, hasher).context("Failed to initialize authenticator")?;

    // Create router
    let app = create_router(state, metrics_handle).layer(TraceLayer::new_for_http());

    // Determine bind address
    let bind_addr = args.bind.unwrap_or(config.server.bind_address);
    let port = args.port.unwrap_or(config.server.port);
    let addr: SocketAddr = format!("{}:{}", bind_addr, port).parse()?;

    info!("Listening on {}", addr);

    // Start server
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped");
    Ok(())
}

/// Initialize logging
fn init_logging(logging: &LoggingConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&logging.level));

    let registry = tracing_subscriber::registry().with(filter);
    if logging.format == "json" {
        registry.with(fmt::layer().json()).init();
    } else {
        registry.with(fmt::layer()).init();
    }
}

/// Wait for shutdown signal
async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}
