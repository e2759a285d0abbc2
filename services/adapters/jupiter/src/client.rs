//! HTTP client issuing throttled calls against the Jupiter API
//!
//! Every operation validates its request locally, acquires one token
//! from the limiter, performs the HTTP call, and applies the response
//! validation policy. The token is spent even when the call fails; there
//! is no retry, caching, or authentication here.

use std::sync::Arc;

use ratelimit::{LimiterConfig, TokenBucketLimiter};
use tracing::debug;

use crate::config::JupiterConfig;
use crate::error::{JupiterError, Result};
use crate::messages::{
    QuoteRequest, QuoteResponse, SwapRequest, SwapResponse, TokenInfo, TokenSearchRequest,
};
use crate::validation::{
    log_findings, validate_quote, validate_swap, validate_token_list, Finding,
};

const TOKEN_SEARCH_PATH: &str = "tokens/v2/search";
const QUOTE_PATH: &str = "swap/v1/quote";
const SWAP_PATH: &str = "swap/v1/swap";

/// Rate-governed Jupiter API client
///
/// Cheap to share behind an `Arc`; the embedded limiter already
/// serializes admission across tasks.
pub struct JupiterClient {
    http: reqwest::Client,
    config: JupiterConfig,
    limiter: Arc<TokenBucketLimiter>,
}

impl JupiterClient {
    /// Build a client with its own limiter sized to the configured quota
    pub fn new(config: JupiterConfig) -> Result<Self> {
        let limiter = TokenBucketLimiter::new(
            LimiterConfig::new(
                config.rate_limit.tokens_per_period,
                config.rate_limit.period_secs,
            )
            .with_name("jupiter"),
        )?;
        Self::with_limiter(config, Arc::new(limiter))
    }

    /// Build a client drawing from an externally owned limiter
    ///
    /// Use this to share one quota class (e.g. a pool member) across
    /// several clients or with other callers of the same API key.
    pub fn with_limiter(config: JupiterConfig, limiter: Arc<TokenBucketLimiter>) -> Result<Self> {
        config.validate().map_err(JupiterError::Configuration)?;
        Ok(Self {
            http: reqwest::Client::new(),
            config,
            limiter,
        })
    }

    /// The limiter admissions are drawn from
    pub fn limiter(&self) -> &Arc<TokenBucketLimiter> {
        &self.limiter
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.config.base_url.trim_end_matches('/'), path)
    }

    /// Apply the validation policy: log findings, reject under strict mode
    fn enforce(&self, endpoint: &str, findings: Vec<Finding>) -> Result<()> {
        if findings.is_empty() {
            return Ok(());
        }
        log_findings(endpoint, &findings);
        if self.config.strict_validation {
            return Err(JupiterError::InvalidResponse {
                endpoint: endpoint.to_string(),
                findings: findings.len(),
            });
        }
        Ok(())
    }

    fn check_status(endpoint: &str, status: reqwest::StatusCode) -> Result<()> {
        if status.is_success() {
            return Ok(());
        }
        Err(JupiterError::Status {
            endpoint: endpoint.to_string(),
            status: status.as_u16(),
        })
    }

    /// Search tokens by symbol, name, or mint-address fragment
    pub async fn search_tokens(&self, request: &TokenSearchRequest) -> Result<Vec<TokenInfo>> {
        request.validate()?;
        self.limiter.acquire().await;

        debug!(query = %request.query, "searching tokens");
        let response = self
            .http
            .get(self.endpoint(TOKEN_SEARCH_PATH))
            .query(request)
            .send()
            .await?;
        Self::check_status(TOKEN_SEARCH_PATH, response.status())?;

        let tokens: Vec<TokenInfo> = response.json().await?;
        self.enforce(TOKEN_SEARCH_PATH, validate_token_list(&tokens))?;
        Ok(tokens)
    }

    /// Fetch a swap quote
    pub async fn quote(&self, request: &QuoteRequest) -> Result<QuoteResponse> {
        request.validate()?;
        self.limiter.acquire().await;

        debug!(
            input_mint = %request.input_mint,
            output_mint = %request.output_mint,
            amount = request.amount,
            "requesting quote"
        );
        let response = self
            .http
            .get(self.endpoint(QUOTE_PATH))
            .query(request)
            .send()
            .await?;
        Self::check_status(QUOTE_PATH, response.status())?;

        let quote: QuoteResponse = response.json().await?;
        self.enforce(QUOTE_PATH, validate_quote(&quote))?;
        Ok(quote)
    }

    /// Build a swap transaction from a previously fetched quote
    pub async fn swap(&self, request: &SwapRequest) -> Result<SwapResponse> {
        request.validate()?;
        self.limiter.acquire().await;

        debug!(user = %request.user_public_key, "building swap transaction");
        let response = self
            .http
            .post(self.endpoint(SWAP_PATH))
            .json(request)
            .send()
            .await?;
        Self::check_status(SWAP_PATH, response.status())?;

        let swap: SwapResponse = response.json().await?;
        self.enforce(SWAP_PATH, validate_swap(&swap))?;
        Ok(swap)
    }
}
