//! Typed request and response messages for the Jupiter API
//!
//! Field names follow the wire format (camelCase). Amount fields arrive
//! as decimal strings of raw base units and are kept as strings; the
//! validation layer checks they parse, interpreting them is the caller's
//! concern.

use serde::{Deserialize, Serialize};

use crate::error::{JupiterError, Result};

/// Request for the token search endpoint
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenSearchRequest {
    /// Symbol, name, or mint-address fragment to search for
    pub query: String,
}

impl TokenSearchRequest {
    /// Search request for the given query string
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
        }
    }

    pub(crate) fn validate(&self) -> Result<()> {
        if self.query.trim().is_empty() {
            return Err(JupiterError::InvalidRequest {
                field: "query",
                reason: "must not be empty".to_string(),
            });
        }
        Ok(())
    }
}

/// A token known to the aggregator
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenInfo {
    /// Mint address of the token
    pub id: String,
    /// Human-readable token name
    pub name: String,
    /// Ticker symbol
    pub symbol: String,
    /// Icon URL, when the registry has one
    #[serde(default)]
    pub icon: Option<String>,
}

/// Swap direction for quoting
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SwapMode {
    /// The input amount is fixed; output is quoted
    ExactIn,
    /// The output amount is fixed; input is quoted
    ExactOut,
}

/// Request for a swap quote
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QuoteRequest {
    /// Mint address of the token being sold
    pub input_mint: String,
    /// Mint address of the token being bought
    pub output_mint: String,
    /// Amount in raw base units of the fixed side
    pub amount: u64,
    /// Allowed slippage in basis points
    pub slippage_bps: u16,
    /// Which side of the swap is fixed; API defaults to `ExactIn`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub swap_mode: Option<SwapMode>,
}

impl QuoteRequest {
    pub(crate) fn validate(&self) -> Result<()> {
        if self.input_mint.trim().is_empty() {
            return Err(JupiterError::InvalidRequest {
                field: "input_mint",
                reason: "must not be empty".to_string(),
            });
        }
        if self.output_mint.trim().is_empty() {
            return Err(JupiterError::InvalidRequest {
                field: "output_mint",
                reason: "must not be empty".to_string(),
            });
        }
        if self.amount == 0 {
            return Err(JupiterError::InvalidRequest {
                field: "amount",
                reason: "must be greater than 0".to_string(),
            });
        }
        Ok(())
    }
}

/// One hop of a quoted route
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SwapInfo {
    /// Address of the AMM pool used for this hop
    pub amm_key: String,
    /// Venue label (e.g. "Orca", "Raydium")
    pub label: String,
    /// Input mint of this hop
    pub input_mint: String,
    /// Output mint of this hop
    pub output_mint: String,
    /// Input amount in raw base units
    pub in_amount: String,
    /// Output amount in raw base units
    pub out_amount: String,
    /// Fee charged by the venue, in raw base units
    pub fee_amount: String,
    /// Mint the fee is denominated in
    pub fee_mint: String,
}

/// A route step and the share of the order routed through it
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoutePlanStep {
    /// The hop details
    pub swap_info: SwapInfo,
    /// Percentage of the order flowing through this step
    pub percent: f64,
}

/// Quote returned by the aggregator
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuoteResponse {
    /// Mint address of the token being sold
    pub input_mint: String,
    /// Input amount in raw base units
    pub in_amount: String,
    /// Mint address of the token being bought
    pub output_mint: String,
    /// Quoted output amount in raw base units
    pub out_amount: String,
    /// Worst acceptable amount after slippage
    pub other_amount_threshold: String,
    /// Which side of the swap was fixed
    pub swap_mode: SwapMode,
    /// Slippage tolerance the quote was computed with
    pub slippage_bps: u16,
    /// Estimated price impact as a decimal-string percentage
    pub price_impact_pct: String,
    /// Venues the order is split across
    pub route_plan: Vec<RoutePlanStep>,
}

/// Request to build a swap transaction from a quote
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SwapRequest {
    /// Public key of the wallet that will sign the transaction
    pub user_public_key: String,
    /// The quote to execute, exactly as returned by the quote endpoint
    pub quote_response: QuoteResponse,
    /// Automatically wrap/unwrap SOL around the swap
    pub wrap_and_unwrap_sol: bool,
}

impl SwapRequest {
    /// Swap request with SOL wrapping enabled, the common case
    pub fn new(user_public_key: impl Into<String>, quote_response: QuoteResponse) -> Self {
        Self {
            user_public_key: user_public_key.into(),
            quote_response,
            wrap_and_unwrap_sol: true,
        }
    }

    pub(crate) fn validate(&self) -> Result<()> {
        if self.user_public_key.trim().is_empty() {
            return Err(JupiterError::InvalidRequest {
                field: "user_public_key",
                reason: "must not be empty".to_string(),
            });
        }
        Ok(())
    }
}

/// Built swap transaction, ready to sign and submit
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SwapResponse {
    /// Base64-encoded unsigned transaction
    pub swap_transaction: String,
    /// Last block height at which the transaction is valid
    pub last_valid_block_height: u64,
}
