/*
[INPUT]:  Error sources (configuration, arguments, transport, API, serialization)
[OUTPUT]: Structured error types for the Foxbit REST adapter
[POS]:    Error handling layer - unified error types for entire crate
[UPDATE]: When adding new error sources or improving error messages
*/

use reqwest::StatusCode;
use thiserror::Error;

/// Main error type for the Foxbit adapter
#[derive(Error, Debug)]
pub enum FoxbitError {
    /// Missing or malformed configuration (credentials, base URL, timeouts)
    #[error("Configuration error: {0}")]
    Config(String),

    /// Caller supplied an argument the client cannot honour
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Network-level failure (DNS, connection refused, timeout)
    #[error("Transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// API returned a non-success status
    #[error("API error (code {code}): {message}")]
    Api { code: i32, message: String },

    /// Serialization/deserialization failed
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// URL parsing failed
    #[error("Invalid URL: {0}")]
    UrlParse(#[from] url::ParseError),

    /// Response body did not have the expected shape
    #[error("Invalid response: {0}")]
    InvalidResponse(String),
}

impl FoxbitError {
    /// Check if the error came from the network layer
    pub fn is_transport(&self) -> bool {
        matches!(self, FoxbitError::Transport(_))
    }

    /// Check if the error is a configuration problem
    pub fn is_config(&self) -> bool {
        matches!(self, FoxbitError::Config(_))
    }

    /// Create an API error from status code and message
    pub fn api_error(status: StatusCode, message: impl Into<String>) -> Self {
        FoxbitError::Api {
            code: status.as_u16() as i32,
            message: message.into(),
        }
    }
}

/// Result type alias for Foxbit operations
pub type Result<T> = std::result::Result<T, FoxbitError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_classification() {
        let config_err = FoxbitError::Config("FOXBIT_API_SECRET is not set".to_string());
        assert!(config_err.is_config());
        assert!(!config_err.is_transport());

        let arg_err = FoxbitError::InvalidArgument("DELETE".to_string());
        assert!(!arg_err.is_config());
    }

    #[test]
    fn test_api_error_creation() {
        let err = FoxbitError::api_error(StatusCode::BAD_REQUEST, "Invalid market");
        match err {
            FoxbitError::Api { code, message } => {
                assert_eq!(code, 400);
                assert_eq!(message, "Invalid market");
            }
            _ => panic!("Expected Api error variant"),
        }
    }

    #[test]
    fn test_display_messages() {
        let err = FoxbitError::Config("FOXBIT_API_KEY is not set".to_string());
        assert_eq!(err.to_string(), "Configuration error: FOXBIT_API_KEY is not set");
    }
}
