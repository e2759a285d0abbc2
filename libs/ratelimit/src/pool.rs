//! Priority pools: independent limiters carved out of one external quota
//!
//! An API plan grants one ceiling, e.g. 60 requests per 60 seconds. A
//! [`LimiterPool`] splits that ceiling into a high-priority and a
//! low-priority limiter with separate quotas over the same period, so
//! bulk traffic can never exhaust the budget reserved for
//! latency-sensitive calls. Pool members share nothing but their
//! configuration source; draining one leaves the other untouched.

use std::sync::Arc;

use crate::error::Result;
use crate::limiter::{LimiterConfig, TokenBucketLimiter};

/// Traffic class served by a pool member
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Priority {
    /// Latency-sensitive traffic (e.g. quotes on the hot path)
    High,
    /// Bulk or background traffic (e.g. token metadata refresh)
    Low,
}

impl Priority {
    /// Label used to tag the underlying limiter for diagnostics
    pub fn label(&self) -> &'static str {
        match self {
            Priority::High => "high-priority",
            Priority::Low => "low-priority",
        }
    }
}

/// Configuration for a two-class limiter pool
///
/// The period is an explicit value supplied by the caller's configuration
/// layer, not read from any process-wide table.
#[derive(Debug, Clone)]
pub struct PoolConfig {
    /// Tokens per period reserved for high-priority traffic
    pub high_priority_quota: f64,

    /// Tokens per period reserved for low-priority traffic
    pub low_priority_quota: f64,

    /// Shared refill period in seconds
    pub period_secs: f64,

    /// Enable per-operation trace output on both members
    pub detailed_logging: bool,
}

impl PoolConfig {
    /// Pool configuration with diagnostics disabled
    pub fn new(high_priority_quota: f64, low_priority_quota: f64, period_secs: f64) -> Self {
        Self {
            high_priority_quota,
            low_priority_quota,
            period_secs,
            detailed_logging: false,
        }
    }
}

/// Two independent limiters keyed by traffic class
///
/// Members are handed out as `Arc`s so many tasks can share one pool
/// member; the pool itself holds no mutable state.
#[derive(Debug)]
pub struct LimiterPool {
    high_priority: Arc<TokenBucketLimiter>,
    low_priority: Arc<TokenBucketLimiter>,
}

impl LimiterPool {
    /// Limiter for the given traffic class
    pub fn get(&self, priority: Priority) -> &Arc<TokenBucketLimiter> {
        match priority {
            Priority::High => &self.high_priority,
            Priority::Low => &self.low_priority,
        }
    }

    /// Limiter reserved for latency-sensitive traffic
    pub fn high_priority(&self) -> &Arc<TokenBucketLimiter> {
        &self.high_priority
    }

    /// Limiter reserved for bulk traffic
    pub fn low_priority(&self) -> &Arc<TokenBucketLimiter> {
        &self.low_priority
    }
}

/// Build a pool of two independently-stated limiters sharing one period
///
/// Pure construction: no I/O, and the returned limiters share no token
/// state. Fails only on a non-positive quota or period.
pub fn create_limiters(config: &PoolConfig) -> Result<LimiterPool> {
    let high_priority = TokenBucketLimiter::new(
        LimiterConfig::new(config.high_priority_quota, config.period_secs)
            .with_name(Priority::High.label())
            .with_detailed_logging(config.detailed_logging),
    )?;

    let low_priority = TokenBucketLimiter::new(
        LimiterConfig::new(config.low_priority_quota, config.period_secs)
            .with_name(Priority::Low.label())
            .with_detailed_logging(config.detailed_logging),
    )?;

    Ok(LimiterPool {
        high_priority: Arc::new(high_priority),
        low_priority: Arc::new(low_priority),
    })
}
