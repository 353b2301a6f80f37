use rmcp::ErrorData as McpError;
use rmcp::serde_json::json;

use crate::core::utils::AVAILABLE_RESOURCES;

// Error codes
const ERROR_INVALID_TIMEZONE: &str = "invalid_timezone";
const ERROR_FORMATTING: &str = "formatting_failure";
const ERROR_RESOURCE_NOT_FOUND: &str = "resource_not_found";
const ERROR_LOGGING: &str = "logging_initialization";

/// Custom error types for better error handling
#[derive(Debug, thiserror::Error)]
pub enum TimeServerError {
    #[error("Invalid timezone: {timezone}")]
    InvalidTimezone { timezone: String },
    #[error("Could not format time with pattern '{pattern}'")]
    Formatting { pattern: &'static str },
    #[error("Resource not found: {uri}")]
    ResourceNotFound { uri: String },
    #[error("Failed to initialize logging: {0}")]
    LoggingInitialization(String),
}

impl From<TimeServerError> for McpError {
    fn from(err: TimeServerError) -> Self {
        match err {
            TimeServerError::InvalidTimezone { timezone } => McpError::invalid_params(
                ERROR_INVALID_TIMEZONE,
                Some(json!({"timezone": timezone})),
            ),
            TimeServerError::Formatting { pattern } => {
                McpError::internal_error(ERROR_FORMATTING, Some(json!({"pattern": pattern})))
            }
            TimeServerError::ResourceNotFound { uri } => McpError::resource_not_found(
                ERROR_RESOURCE_NOT_FOUND,
                Some(json!({
                    "uri": uri,
                    "available_resources": AVAILABLE_RESOURCES
                })),
            ),
            TimeServerError::LoggingInitialization(message) => {
                McpError::internal_error(ERROR_LOGGING, Some(json!({"message": message})))
            }
        }
    }
}

pub type TimeServerResult<T> = Result<T, TimeServerError>;
pub type McpResult<T> = Result<T, McpError>;
