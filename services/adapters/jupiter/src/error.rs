//! Error types for the Jupiter adapter

use thiserror::Error;

/// Result type alias for adapter operations
pub type Result<T> = std::result::Result<T, JupiterError>;

/// Main error type for Jupiter API operations
#[derive(Debug, Error)]
pub enum JupiterError {
    /// HTTP transport failure, including response-body decode errors
    #[error("HTTP transport error: {0}")]
    Http(#[from] reqwest::Error),

    /// A request rejected locally before any network traffic
    #[error("Invalid request: {field} {reason}")]
    InvalidRequest {
        /// The offending request field
        field: &'static str,
        /// Why the value was rejected
        reason: String,
    },

    /// Non-success HTTP status from the API
    #[error("Jupiter returned status {status} for {endpoint}")]
    Status {
        /// The endpoint path that failed
        endpoint: String,
        /// The HTTP status code
        status: u16,
    },

    /// A response that deserialized but failed semantic validation while
    /// strict validation is enabled
    #[error("Invalid response from {endpoint}: {findings} validation finding(s)")]
    InvalidResponse {
        /// The endpoint path that produced the payload
        endpoint: String,
        /// Number of validation findings (each already logged)
        findings: usize,
    },

    /// Configuration error in client settings
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Rate limiter could not be constructed from the configured quota
    #[error(transparent)]
    RateLimit(#[from] ratelimit::RateLimitError),
}
