//! Actor pub/sub performance test app entry point.

use std::net::SocketAddr;

use axum::{extract::Request, ServiceExt};
use clap::{Parser, Subcommand};
use tokio::net::TcpListener;
use tracing::{error, info};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use actor_pubsub_perf::api::{create_router, AppState};
use actor_pubsub_perf::config::Config;
use actor_pubsub_perf::metrics;
use actor_pubsub_perf::utils::shutdown_signal;

/// Actor pub/sub performance test app.
#[derive(Parser, Debug)]
#[command(name = "actor-pubsub-perf")]
#[command(about = "Test app hosting a single actor type for pub/sub perf runs")]
#[command(version)]
struct Args {
    /// Enable verbose logging.
    #[arg(short, long, global = true)]
    verbose: bool,

    /// HTTP port the actor runtime calls into (default 3000).
    #[arg(short, long, global = true)]
    port: Option<u16>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Serve the actor endpoints (default).
    Serve,

    /// Print the resolved configuration and the runtime config document.
    CheckConfig,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let mut config = Config::load().map_err(|e| {
        eprintln!("Failed to load configuration: {}", e);
        e
    })?;
    if let Some(port) = args.port {
        config.port = port;
    }

    // Initialize logging
    let filter = if args.verbose {
        EnvFilter::new("actor_pubsub_perf=debug,info")
    } else {
        EnvFilter::try_new(&config.rust_log).unwrap_or_else(|_| EnvFilter::new("info"))
    };

    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(filter)
        .init();

    match args.command {
        Some(Command::CheckConfig) => cmd_check_config(&config),
        Some(Command::Serve) | None => cmd_serve(config).await,
    }
}

/// Check configuration validity.
fn cmd_check_config(config: &Config) -> anyhow::Result<()> {
    println!("======================================================================");
    println!("ACTOR PUBSUB PERF APP - CONFIGURATION CHECK");
    println!("======================================================================");

    print!("Validating configuration... ");
    match config.validate() {
        Ok(()) => println!("OK"),
        Err(e) => {
            println!("FAILED");
            println!("  Error: {}", e);
            return Err(anyhow::anyhow!("Configuration validation failed"));
        }
    }

    let state = AppState::new(config)?;

    println!("----------------------------------------------------------------------");
    println!("Configuration Summary:");
    println!("  Actor Type: {}", state.actor_type);
    println!("  Port: {}", config.port);
    println!("  Metrics: {}", if config.metrics_enabled { "Enabled" } else { "Disabled" });
    println!("  Runtime Config: {}", String::from_utf8_lossy(state.config_body()));
    println!("======================================================================");

    Ok(())
}

/// Serve the actor endpoints until shutdown or listener failure.
async fn cmd_serve(config: Config) -> anyhow::Result<()> {
    if let Err(e) = config.validate() {
        error!("Invalid configuration: {}", e);
        return Err(e.into());
    }

    let mut app_state = AppState::new(&config)?;

    if config.metrics_enabled {
        let handle = metrics::install_recorder()?;
        metrics::init_metrics();
        app_state = app_state.with_metrics(handle);
    }

    info!("Registered actor type: {}", app_state.actor_type);

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    let listener = TcpListener::bind(addr).await.map_err(|e| {
        error!("Failed to bind {}: {}", addr, e);
        e
    })?;
    info!("Actor App - listening on http://localhost:{}", config.port);

    let app = create_router(app_state);

    if let Err(e) = axum::serve(listener, ServiceExt::<Request>::into_make_service(app))
        .with_graceful_shutdown(shutdown_signal())
        .await
    {
        error!("HTTP server failed: {}", e);
        return Err(e.into());
    }

    info!("Server stopped");
    Ok(())
}
