//! Token-bucket limiter with lazy, timer-free refill
//!
//! Tokens regenerate as a pure function of elapsed monotonic time; the
//! bucket is brought up to date on demand before every admission check
//! rather than by a background task. Waiters sleep for the exact time
//! until one token will exist and then re-check, since a concurrent
//! caller may have consumed it in the meantime.

use std::future::Future;
use std::time::Duration;

use parking_lot::Mutex;
use tokio::time::Instant;
use tracing::{debug, trace};

use crate::error::{RateLimitError, Result};

/// Configuration for a [`TokenBucketLimiter`]
#[derive(Debug, Clone)]
pub struct LimiterConfig {
    /// Tokens allocated per period; also the bucket capacity (burst size)
    pub tokens_per_period: f64,

    /// Length of the allocation period in seconds
    pub period_secs: f64,

    /// Label used in diagnostic output
    pub name: Option<String>,

    /// Emit trace lines on refill, wait, and consumption
    pub detailed_logging: bool,
}

impl LimiterConfig {
    /// Configuration for `tokens_per_period` admissions every `period_secs`
    pub fn new(tokens_per_period: f64, period_secs: f64) -> Self {
        Self {
            tokens_per_period,
            period_secs,
            name: None,
            detailed_logging: false,
        }
    }

    /// Set the diagnostic label
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Enable per-operation trace output
    pub fn with_detailed_logging(mut self, enabled: bool) -> Self {
        self.detailed_logging = enabled;
        self
    }
}

/// Mutable bucket state, guarded as one unit so refill, sufficiency check,
/// and decrement form a single critical section.
#[derive(Debug)]
struct BucketState {
    tokens: f64,
    last_refill: Instant,
}

/// Token-bucket rate limiter for calls against a shared external quota
///
/// Admits at most `tokens_per_period` calls over any window of
/// `period_secs` (within timing tolerance), allowing bursts up to the full
/// allocation when the bucket is full. `acquire` waits, it never fails;
/// there is no "rate limit exceeded" error surfaced to callers.
///
/// All state lives behind one mutex and the lock is never held across an
/// await point, so a single instance can be shared across tasks (wrap it
/// in an `Arc`). No fairness is guaranteed among simultaneous waiters:
/// admission is first-ready-wins, not first-requested-wins.
pub struct TokenBucketLimiter {
    name: String,
    capacity: f64,
    refill_rate_per_ms: f64,
    detailed_logging: bool,
    state: Mutex<BucketState>,
}

impl std::fmt::Debug for TokenBucketLimiter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokenBucketLimiter")
            .field("name", &self.name)
            .field("capacity", &self.capacity)
            .field("refill_rate_per_ms", &self.refill_rate_per_ms)
            .finish()
    }
}

impl TokenBucketLimiter {
    /// Create a limiter with a full bucket
    ///
    /// Rejects non-positive or non-finite quota/period values, which would
    /// otherwise yield a refill rate that blocks forever or never blocks.
    pub fn new(config: LimiterConfig) -> Result<Self> {
        if !config.tokens_per_period.is_finite() || config.tokens_per_period <= 0.0 {
            return Err(RateLimitError::InvalidConfig {
                field: "tokens_per_period",
                value: config.tokens_per_period,
            });
        }
        if !config.period_secs.is_finite() || config.period_secs <= 0.0 {
            return Err(RateLimitError::InvalidConfig {
                field: "period_secs",
                value: config.period_secs,
            });
        }

        let name = config.name.unwrap_or_else(|| "ratelimit".to_string());
        let capacity = config.tokens_per_period;
        let refill_rate_per_ms = config.tokens_per_period / (config.period_secs * 1000.0);

        if config.detailed_logging {
            debug!(
                limiter = %name,
                tokens_per_period = config.tokens_per_period,
                period_secs = config.period_secs,
                "rate limiter initialized"
            );
        }

        Ok(Self {
            name,
            capacity,
            refill_rate_per_ms,
            detailed_logging: config.detailed_logging,
            state: Mutex::new(BucketState {
                tokens: capacity,
                last_refill: Instant::now(),
            }),
        })
    }

    /// Diagnostic label for this limiter
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Maximum number of buffered permits
    pub fn capacity(&self) -> f64 {
        self.capacity
    }

    /// Bring the bucket up to date with elapsed time, clamped to capacity.
    /// Zero elapsed time is skipped so repeated calls within one tick are
    /// no-ops.
    fn refill(&self, state: &mut BucketState) {
        let now = Instant::now();
        let elapsed = now.saturating_duration_since(state.last_refill);
        if elapsed.is_zero() {
            return;
        }

        let gained = elapsed.as_secs_f64() * 1000.0 * self.refill_rate_per_ms;
        let before = state.tokens;
        state.tokens = (state.tokens + gained).min(self.capacity);
        state.last_refill = now;

        if self.detailed_logging && state.tokens > before {
            trace!(
                limiter = %self.name,
                refilled = state.tokens - before,
                available = state.tokens,
                "tokens refilled"
            );
        }
    }

    /// Acquire one token, suspending until one is available
    ///
    /// Returns immediately when the bucket holds at least one token.
    /// Otherwise sleeps for exactly the time until one token will have
    /// regenerated and retries: the sleep releases the lock, so the state
    /// observed before suspending may no longer hold on wakeup and is
    /// always re-checked.
    pub async fn acquire(&self) {
        loop {
            let wait = {
                let mut state = self.state.lock();
                self.refill(&mut state);

                if state.tokens >= 1.0 {
                    state.tokens -= 1.0;
                    if self.detailed_logging {
                        trace!(
                            limiter = %self.name,
                            remaining = state.tokens,
                            "token acquired"
                        );
                    }
                    return;
                }

                let wait_ms = (1.0 - state.tokens) / self.refill_rate_per_ms;
                Duration::from_secs_f64(wait_ms / 1000.0)
            };

            if self.detailed_logging {
                trace!(
                    limiter = %self.name,
                    wait_ms = wait.as_millis() as u64,
                    "bucket empty, waiting for refill"
                );
            }
            tokio::time::sleep(wait).await;
        }
    }

    /// Acquire one token, then run `action` and pass its outcome through
    ///
    /// The action's result or failure propagates verbatim; no retry is
    /// added and the token stays consumed even when the action fails.
    pub async fn run_throttled<T, E, F, Fut>(&self, action: F) -> std::result::Result<T, E>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = std::result::Result<T, E>>,
    {
        self.acquire().await;
        action().await
    }

    /// Current token balance after bringing the bucket up to date
    ///
    /// Observational only; intended for diagnostics and monitoring. The
    /// value is in `[0, capacity]` at every observation point.
    pub fn available_tokens(&self) -> f64 {
        let mut state = self.state.lock();
        self.refill(&mut state);
        state.tokens
    }
}
