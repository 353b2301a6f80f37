use crate::core::models::{IsoStyle, TimeFormat};
use crate::core::utils::DEFAULT_TIMEZONE;

pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 3000;

/// Values used when a caller leaves a parameter out
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimeDefaults {
    pub timezone: String,
    pub format: TimeFormat,
}

impl Default for TimeDefaults {
    fn default() -> Self {
        Self {
            timezone: DEFAULT_TIMEZONE.to_string(),
            format: TimeFormat::Locale,
        }
    }
}

/// How the server talks to its clients
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Transport {
    Stdio,
    Http { host: String, port: u16 },
}

/// Configuration derived from CLI arguments
#[derive(Debug, Clone)]
pub struct Config {
    pub transport: Transport,
    pub defaults: TimeDefaults,
    pub iso_style: IsoStyle,
}
