//! Error types for limiter construction

use thiserror::Error;

/// Result type alias for limiter operations
pub type Result<T> = std::result::Result<T, RateLimitError>;

/// Errors surfaced while building a limiter
///
/// Acquisition itself never fails: once a limiter is constructed with a
/// positive rate, `acquire` only ever suspends or succeeds.
#[derive(Debug, Error)]
pub enum RateLimitError {
    /// A quota or period that would produce a zero, negative, or infinite
    /// refill rate. Accepting such a value would make `acquire` hang
    /// forever or admit everything, so it is rejected up front.
    #[error("Invalid rate limit configuration: {field} must be positive and finite, got {value}")]
    InvalidConfig {
        /// The offending configuration field
        field: &'static str,
        /// The rejected value
        value: f64,
    },
}
