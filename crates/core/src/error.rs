//! Error types for the chat service and widget configuration

use thiserror::Error;

/// Standard result type for chat service calls
pub type ChatResult<T> = std::result::Result<T, ChatError>;

/// Reasons a question could not be answered.
///
/// The widget treats every variant the same way: the user sees the fixed
/// failure message and the variant itself only reaches the log.
#[derive(Debug, Error)]
pub enum ChatError {
    /// Network or request error
    #[error("Request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// Server returned a non-success status
    #[error("Server error {status}: {message}")]
    ServerError { status: u16, message: String },

    /// Response body did not match the expected shape
    #[error("Malformed response: {0}")]
    Malformed(String),

    /// No reply arrived before the deadline
    #[error("No reply after {after_ms} ms")]
    TimedOut { after_ms: u64 },

    /// Invalid client configuration
    #[error("Invalid configuration: {0}")]
    Configuration(String),
}

impl ChatError {
    /// Create error from HTTP status code
    pub fn from_status(status: reqwest::StatusCode, message: String) -> Self {
        Self::ServerError {
            status: status.as_u16(),
            message,
        }
    }
}

impl From<serde_json::Error> for ChatError {
    fn from(err: serde_json::Error) -> Self {
        Self::Malformed(err.to_string())
    }
}

/// Configuration loading and validation errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to parse widget configuration: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Invalid api_base_url '{url}': {reason}")]
    InvalidBaseUrl { url: String, reason: String },

    #[error("Invalid chat_path '{0}': must start with '/'")]
    InvalidChatPath(String),

    #[error("request_timeout_ms {value} exceeds the maximum of {max}")]
    TimeoutTooLarge { value: u64, max: u64 },
}

/// Reasons a chart payload from the backend is rejected
#[derive(Debug, Error)]
pub enum ChartError {
    #[error("invalid base64 chart payload: {0}")]
    InvalidBase64(#[from] base64::DecodeError),

    #[error("chart payload is not a PNG image")]
    NotPng,
}

impl From<ConfigError> for ChatError {
    fn from(err: ConfigError) -> Self {
        Self::Configuration(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_status_keeps_code_and_body() {
        let err = ChatError::from_status(
            reqwest::StatusCode::SERVICE_UNAVAILABLE,
            "backend down".to_string(),
        );
        match err {
            ChatError::ServerError { status, message } => {
                assert_eq!(status, 503);
                assert_eq!(message, "backend down");
            }
            other => panic!("unexpected variant: {other:?}"),
        }
    }

    #[test]
    fn test_json_errors_are_malformed() {
        let parse_err = serde_json::from_str::<serde_json::Value>("{not json").unwrap_err();
        let err: ChatError = parse_err.into();
        assert!(matches!(err, ChatError::Malformed(_)));
    }

    #[test]
    fn test_timeout_display() {
        let err = ChatError::TimedOut { after_ms: 1500 };
        assert_eq!(err.to_string(), "No reply after 1500 ms");
    }

    #[test]
    fn test_chart_error_display() {
        assert_eq!(ChartError::NotPng.to_string(), "chart payload is not a PNG image");
    }
}
