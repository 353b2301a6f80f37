mod cli;
mod config;
mod core;
mod http;
mod logging;
mod server;

use crate::cli::Cli;
use crate::config::Transport;
use crate::core::{formatter::TimeFormatter, provider::TimeProvider};

/// Argentina Time MCP Server
///
/// Serves `get_current_time` over MCP stdio, or `/time` and `/health` over
/// HTTP when `--http` or a port is given.
///
/// Usage: npx @modelcontextprotocol/inspector cargo run --bin mcp-server-argentina-time
#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = Cli::parse_config()?;
    let logging_enabled = logging::init_logging()?;

    let provider = TimeProvider::new(config.defaults, TimeFormatter::new(config.iso_style));

    let result = match config.transport {
        Transport::Stdio => server::run(provider).await,
        Transport::Http { host, port } => http::run(provider, host, port)
            .await
            .map_err(|e| -> Box<dyn std::error::Error> { Box::new(e) }),
    };

    if let Err(e) = result {
        // Only log error if logging is initialized
        if logging_enabled {
            tracing::error!("Error running Argentina Time MCP server: {}", e);
        }
        return Err(e);
    }

    Ok(())
}
