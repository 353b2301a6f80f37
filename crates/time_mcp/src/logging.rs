use tracing_subscriber::EnvFilter;

use crate::core::error::{TimeServerError, TimeServerResult};

/// Initialize logging only if the `LOG_LEVEL` environment variable is set
///
/// Output goes to stderr; stdout carries the MCP stream in stdio mode.
/// `RUST_LOG` directives take precedence over `LOG_LEVEL` when present.
///
/// # Returns
/// - `Ok(true)` if logging was initialized, `Ok(false)` if it was skipped
/// - `Err(TimeServerError::LoggingInitialization)` if initialization fails
pub fn init_logging() -> TimeServerResult<bool> {
    let Ok(log_level) = std::env::var("LOG_LEVEL") else {
        return Ok(false);
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&log_level)),
        )
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .try_init()
        .map_err(|e| TimeServerError::LoggingInitialization(e.to_string()))?;

    tracing::info!("Starting Argentina Time MCP server with log level: {}", log_level);
    Ok(true)
}
