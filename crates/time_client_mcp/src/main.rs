use std::time::Duration;

use clap::Parser;
use tracing_subscriber::EnvFilter;
use url::Url;

mod errors;
mod http_client;
mod models;
mod server;
mod service;

use crate::errors::TimeClientError;
use crate::service::{DEFAULT_TIME_SERVER_URL, RemoteTimeService};

#[derive(Parser, Debug)]
#[command(name = "mcp-server-argentina-time-client")]
#[command(about = "MCP server relaying the current Argentina time from a remote time server")]
#[command(version)]
struct Args {
    /// URL of the remote `/time` endpoint
    #[arg(long, env = "TIME_SERVER_URL", default_value = DEFAULT_TIME_SERVER_URL)]
    url: Url,

    /// Request timeout in seconds
    #[arg(long, default_value_t = 30)]
    timeout_secs: u64,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    // Initialize logging only if LOG_LEVEL environment variable is set
    if let Ok(log_level) = std::env::var("LOG_LEVEL") {
        tracing_subscriber::fmt()
            .with_env_filter(
                EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&log_level)),
            )
            .with_writer(std::io::stderr)
            .with_ansi(false)
            .try_init()
            .map_err(|e| TimeClientError::LoggingInitialization(e.to_string()))?;

        tracing::info!("Starting Argentina Time MCP client with log level: {}", log_level);
    }

    tracing::info!("Using time server: {}", args.url);

    let service = RemoteTimeService::new(args.url, Duration::from_secs(args.timeout_secs))?;

    if let Err(e) = server::run(service).await {
        tracing::error!("Failed to run MCP server: {}", e);
        return Err(e);
    }

    Ok(())
}
