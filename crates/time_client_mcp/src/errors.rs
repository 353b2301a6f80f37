use rmcp::ErrorData as McpError;
use serde_json::json;

/// Custom error types for better error handling
#[derive(Debug, thiserror::Error)]
pub enum TimeClientError {
    #[error("Failed to reach {url}: {message}")]
    Request { url: String, message: String },
    #[error("Invalid response format from time server")]
    InvalidResponse,
    #[error("HTTP client error: {message}")]
    Client { message: String },
    #[error("Failed to initialize logging: {0}")]
    LoggingInitialization(String),
}

// Error codes
const ERROR_REQUEST: &str = "request_error";
const ERROR_INVALID_RESPONSE: &str = "invalid_response";
const ERROR_CLIENT: &str = "client_error";
const ERROR_LOGGING: &str = "logging_initialization";

impl From<TimeClientError> for McpError {
    fn from(err: TimeClientError) -> Self {
        match err {
            TimeClientError::Request { url, message } => McpError::internal_error(
                ERROR_REQUEST,
                Some(json!({ "url": url, "message": message })),
            ),
            TimeClientError::InvalidResponse => {
                McpError::internal_error(ERROR_INVALID_RESPONSE, None)
            }
            TimeClientError::Client { message } => {
                McpError::internal_error(ERROR_CLIENT, Some(json!({ "message": message })))
            }
            TimeClientError::LoggingInitialization(message) => {
                McpError::internal_error(ERROR_LOGGING, Some(json!({ "message": message })))
            }
        }
    }
}

pub type TimeClientResult<T> = Result<T, TimeClientError>;
