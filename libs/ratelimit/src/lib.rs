//! Token-bucket admission control for shared external API quotas
//!
//! Gates outbound calls against a quota published as "N requests per
//! period". Callers `acquire().await` a token before issuing a throttled
//! request; when the bucket is empty the caller suspends until enough
//! time has passed for a token to regenerate. Refill is computed lazily
//! from elapsed monotonic time at the moment of admission, so there is no
//! background timer.
//!
//! A [`LimiterPool`] splits one external ceiling into independent
//! high-priority and low-priority limiters sharing a refill period, so
//! latency-sensitive traffic is never starved by bulk traffic.
//!
//! ```no_run
//! use ratelimit::{LimiterConfig, TokenBucketLimiter};
//!
//! # async fn demo() -> Result<(), ratelimit::RateLimitError> {
//! // 60 requests per 60 seconds
//! let limiter = TokenBucketLimiter::new(LimiterConfig::new(60.0, 60.0))?;
//! limiter.acquire().await;
//! // ... issue the throttled request ...
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod error;
pub mod limiter;
pub mod pool;

pub use error::{RateLimitError, Result};
pub use limiter::{LimiterConfig, TokenBucketLimiter};
pub use pool::{create_limiters, LimiterPool, PoolConfig, Priority};
