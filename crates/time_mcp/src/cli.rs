use clap::Parser;

use crate::config::{Config, DEFAULT_HOST, DEFAULT_PORT, TimeDefaults, Transport};
use crate::core::{
    error::TimeServerResult,
    formatter::parse_timezone,
    models::{IsoStyle, TimeFormat},
    utils::DEFAULT_TIMEZONE,
};

/// Argentina Time MCP Server
///
/// Reports the current time in Argentina, or any IANA timezone, through the
/// `get_current_time` tool.
///
/// ## Transports
/// - **stdio** (default): MCP over standard input/output
/// - **http**: `GET /time`, `GET /health` and CORS preflight; selected with
///   `--http` or whenever a port is configured (`--port` or `PORT`)
///
/// ## Development
/// ```bash
/// npx @modelcontextprotocol/inspector cargo run --bin mcp-server-argentina-time
/// ```
///
/// ## Environment Variables
/// - `LOG_LEVEL`: Enables logging at the given level (trace, debug, info, warn, error)
/// - `PORT`, `HOST`: HTTP bind address
#[derive(Parser, Debug, Clone)]
#[command(name = "mcp-server-argentina-time")]
#[command(about = "An MCP server reporting the current time for Argentina or any IANA timezone")]
#[command(version)]
pub struct Cli {
    /// Serve over HTTP instead of stdio
    #[arg(long)]
    pub http: bool,

    /// Address to bind in HTTP mode
    #[arg(long, env = "HOST", default_value = DEFAULT_HOST)]
    pub host: String,

    /// Port to bind in HTTP mode; setting it implies --http
    #[arg(long, env = "PORT")]
    pub port: Option<u16>,

    /// Timezone used when a request does not name one
    #[arg(long, env = "TIME_DEFAULT_TIMEZONE", default_value = DEFAULT_TIMEZONE)]
    pub timezone: String,

    /// Format used when a request does not name one
    #[arg(long, value_enum, default_value_t = TimeFormat::Locale)]
    pub format: TimeFormat,

    /// How `iso` output is rendered for zones other than UTC
    #[arg(long, value_enum, default_value_t = IsoStyle::WallClock)]
    pub iso_style: IsoStyle,
}

impl Cli {
    /// Parse CLI arguments and convert to configuration
    pub fn parse_config() -> TimeServerResult<Config> {
        Self::parse().into_config()
    }

    pub fn into_config(self) -> TimeServerResult<Config> {
        let timezone = self.timezone.trim().to_string();
        parse_timezone(&timezone)?;

        let transport = match (self.http, self.port) {
            (_, Some(port)) => Transport::Http {
                host: self.host,
                port,
            },
            (true, None) => Transport::Http {
                host: self.host,
                port: DEFAULT_PORT,
            },
            (false, None) => Transport::Stdio,
        };

        Ok(Config {
            transport,
            defaults: TimeDefaults {
                timezone,
                format: self.format,
            },
            iso_style: self.iso_style,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> TimeServerResult<Config> {
        let mut argv = vec!["mcp-server-argentina-time"];
        argv.extend_from_slice(args);
        Cli::try_parse_from(argv).unwrap().into_config()
    }

    #[test]
    fn test_http_flag_uses_default_port() {
        let config = parse(&["--http", "--host", "127.0.0.1"]).unwrap();
        assert_eq!(
            config.transport,
            Transport::Http {
                host: "127.0.0.1".to_string(),
                port: DEFAULT_PORT
            }
        );
    }

    #[test]
    fn test_port_implies_http() {
        let config = parse(&["--port", "8080", "--host", "127.0.0.1"]).unwrap();
        assert_eq!(
            config.transport,
            Transport::Http {
                host: "127.0.0.1".to_string(),
                port: 8080
            }
        );
    }

    #[test]
    fn test_defaults_from_arguments() {
        let config = parse(&[
            "--timezone",
            "Europe/London",
            "--format",
            "timestamp",
            "--iso-style",
            "offset-aware",
        ])
        .unwrap();

        assert_eq!(config.defaults.timezone, "Europe/London");
        assert_eq!(config.defaults.format, TimeFormat::Timestamp);
        assert_eq!(config.iso_style, IsoStyle::OffsetAware);
    }

    #[test]
    fn test_invalid_default_timezone_rejected() {
        assert!(parse(&["--timezone", "Not/ARealZone"]).is_err());
    }
}
