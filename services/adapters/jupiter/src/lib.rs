//! # Jupiter Adapter - Rate-Governed Aggregator Client
//!
//! Client for the Jupiter DEX aggregation API: token search, swap-quote
//! retrieval, and swap-transaction construction, with every outbound call
//! admitted through a token-bucket limiter sized to the account's
//! published quota tier.
//!
//! ## Integration points
//!
//! - **Rate governance**: one token acquired per request via
//!   [`ratelimit::TokenBucketLimiter`]; a shared limiter (e.g. a
//!   [`ratelimit::LimiterPool`] member) can be injected so several clients
//!   draw from the same quota class.
//! - **Validation pipeline**: responses are deserialized into typed
//!   messages, then checked for semantic problems (unparseable amounts,
//!   empty mints, degenerate route plans). Findings are logged; under
//!   `strict_validation` they reject the response.
//! - **Configuration**: environment-driven with validated defaults, see
//!   [`JupiterConfig`].
//!
//! Out of scope by design: transaction parsing/signing, retry and backoff,
//! response caching, authentication.
//!
//! ## Example
//!
//! ```no_run
//! use jupiter_adapter::{JupiterClient, JupiterConfig, TokenSearchRequest};
//!
//! # async fn demo() -> jupiter_adapter::Result<()> {
//! let client = JupiterClient::new(JupiterConfig::from_env())?;
//! let tokens = client.search_tokens(&TokenSearchRequest::new("SOL")).await?;
//! for token in tokens {
//!     println!("{} ({})", token.name, token.symbol);
//! }
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod client;
pub mod config;
pub mod error;
pub mod messages;
pub mod validation;

pub use client::JupiterClient;
pub use config::{JupiterConfig, RateLimitSettings};
pub use error::{JupiterError, Result};
pub use messages::{
    QuoteRequest, QuoteResponse, RoutePlanStep, SwapInfo, SwapMode, SwapRequest, SwapResponse,
    TokenInfo, TokenSearchRequest,
};
pub use validation::Finding;

// Re-export the limiter types callers need to share quota across clients
pub use ratelimit::{create_limiters, LimiterPool, PoolConfig, Priority, TokenBucketLimiter};
