//! Configuration for the Jupiter adapter
//!
//! Environment-based configuration with validated defaults, plus the
//! published per-tier quota table as reference constants. Quotas are
//! passed explicitly into the client or pool factory; nothing here is
//! process-global.

use serde::{Deserialize, Serialize};
use std::env;

/// Default public endpoint (the free "Lite" plan host)
pub const DEFAULT_BASE_URL: &str = "https://lite-api.jup.ag";

/// Rate-limit quota: tokens allocated per refill period
///
/// The published tiers are available as associated constants, e.g.
/// `RateLimitSettings::PRO_II` allocates 500 tokens every 10 seconds
/// (roughly 3000 requests per minute).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RateLimitSettings {
    /// Tokens allocated per period
    pub tokens_per_period: f64,

    /// Allocation period in seconds
    pub period_secs: f64,
}

impl RateLimitSettings {
    /// Free tier: 60 tokens per 60 seconds
    pub const LITE: Self = Self {
        tokens_per_period: 60.0,
        period_secs: 60.0,
    };

    /// Pro I: 100 tokens per 10 seconds
    pub const PRO_I: Self = Self {
        tokens_per_period: 100.0,
        period_secs: 10.0,
    };

    /// Pro II: 500 tokens per 10 seconds
    pub const PRO_II: Self = Self {
        tokens_per_period: 500.0,
        period_secs: 10.0,
    };

    /// Pro III: 1000 tokens per 10 seconds
    pub const PRO_III: Self = Self {
        tokens_per_period: 1000.0,
        period_secs: 10.0,
    };

    /// Pro IV: 5000 tokens per 10 seconds
    pub const PRO_IV: Self = Self {
        tokens_per_period: 5000.0,
        period_secs: 10.0,
    };

    /// Approximate requests per minute this quota sustains
    pub fn requests_per_minute(&self) -> f64 {
        self.tokens_per_period / self.period_secs * 60.0
    }
}

impl Default for RateLimitSettings {
    fn default() -> Self {
        Self::LITE
    }
}

/// Client configuration for the Jupiter API
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JupiterConfig {
    /// Base URL of the API host
    pub base_url: String,

    /// Reject responses with semantic validation findings instead of
    /// logging them and passing the payload through
    pub strict_validation: bool,

    /// Quota the client's limiter is sized to
    pub rate_limit: RateLimitSettings,
}

impl Default for JupiterConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            strict_validation: false,
            rate_limit: RateLimitSettings::default(),
        }
    }
}

impl JupiterConfig {
    /// Load configuration from environment variables with defaults
    pub fn from_env() -> Self {
        Self {
            base_url: env::var("JUPITER_BASE_URL")
                .unwrap_or_else(|_| DEFAULT_BASE_URL.to_string()),

            strict_validation: env::var("JUPITER_STRICT_VALIDATION")
                .map(|s| s.to_lowercase() == "true")
                .unwrap_or(false),

            rate_limit: RateLimitSettings {
                tokens_per_period: env::var("JUPITER_RATE_TOKENS")
                    .ok()
                    .and_then(|s| s.parse().ok())
                    .unwrap_or(RateLimitSettings::LITE.tokens_per_period),

                period_secs: env::var("JUPITER_RATE_PERIOD_SECS")
                    .ok()
                    .and_then(|s| s.parse().ok())
                    .unwrap_or(RateLimitSettings::LITE.period_secs),
            },
        }
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.base_url.is_empty() {
            return Err("Base URL cannot be empty".to_string());
        }

        if !self.base_url.starts_with("http://") && !self.base_url.starts_with("https://") {
            return Err("Base URL must start with http:// or https://".to_string());
        }

        if !self.rate_limit.tokens_per_period.is_finite()
            || self.rate_limit.tokens_per_period <= 0.0
        {
            return Err("Rate limit tokens per period must be greater than 0".to_string());
        }

        if !self.rate_limit.period_secs.is_finite() || self.rate_limit.period_secs <= 0.0 {
            return Err("Rate limit period must be greater than 0".to_string());
        }

        Ok(())
    }
}
