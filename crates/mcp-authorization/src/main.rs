//! MCP Authorization Metadata Server - Entry Point

use std::sync::Arc;

use clap::Parser;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use mcp_authorization::{config::Settings, server};

#[derive(Parser, Debug)]
#[command(name = "mcp-authorization")]
#[command(about = "OAuth 2.0 discovery metadata server for MCP")]
#[command(version)]
struct Cli {
    /// Address to bind
    #[arg(long, default_value = "0.0.0.0", env = "HOST")]
    host: String,

    /// HTTP server port
    #[arg(long, default_value = "8000", env = "PORT")]
    port: u16,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "info", env = "RUST_LOG")]
    log_level: String,

    /// Output logs as JSON
    #[arg(long)]
    json_logs: bool,
}

fn init_tracing(log_level: &str, json: bool) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));

    let subscriber = tracing_subscriber::registry().with(filter);

    if json {
        subscriber.with(tracing_subscriber::fmt::layer().json()).init();
    } else {
        subscriber.with(tracing_subscriber::fmt::layer().compact()).init();
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load a .env file before reading the environment, if one exists.
    dotenv::dotenv().ok();

    let cli = Cli::parse();

    init_tracing(&cli.log_level, cli.json_logs);

    // Fail fast: a malformed resource URL must abort before the socket binds.
    let settings = Arc::new(Settings::from_env().inspect_err(|e| {
        tracing::error!("Configuration error: {e}");
    })?);

    tracing::info!(
        version = env!("CARGO_PKG_VERSION"),
        app = %settings.app_name,
        debug = settings.debug,
        "Starting MCP authorization metadata server"
    );

    server::run(settings, &cli.host, cli.port).await
}
