//! Semantic validation of deserialized API responses
//!
//! Deserialization already enforces shape; these checks catch payloads
//! that are structurally valid but unusable: amounts that do not parse as
//! integers, empty mint addresses, degenerate route plans. Each problem
//! becomes a [`Finding`] with the field path it was observed at. The
//! client logs findings and, under strict validation, rejects the
//! response; in lenient mode the payload is passed through unchanged.

use tracing::warn;

use crate::messages::{QuoteResponse, SwapResponse, TokenInfo};

/// One validation problem, located by field path
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Finding {
    /// Path of the offending field, e.g. `routePlan[0].swapInfo.inAmount`
    pub path: String,
    /// What was wrong with the value
    pub message: String,
}

impl Finding {
    fn new(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            message: message.into(),
        }
    }
}

/// Log every finding for an endpoint at warn level
pub fn log_findings(endpoint: &str, findings: &[Finding]) {
    for finding in findings {
        warn!(
            endpoint,
            path = %finding.path,
            message = %finding.message,
            "response failed validation"
        );
    }
}

fn check_non_empty(path: &str, value: &str, findings: &mut Vec<Finding>) {
    if value.trim().is_empty() {
        findings.push(Finding::new(path, "must not be empty"));
    }
}

fn check_amount(path: &str, value: &str, findings: &mut Vec<Finding>) {
    if value.parse::<u64>().is_err() {
        findings.push(Finding::new(
            path,
            format!("expected a base-unit integer string, got {value:?}"),
        ));
    }
}

/// Validate a token search result list
pub fn validate_token_list(tokens: &[TokenInfo]) -> Vec<Finding> {
    let mut findings = Vec::new();
    for (i, token) in tokens.iter().enumerate() {
        check_non_empty(&format!("[{i}].id"), &token.id, &mut findings);
        check_non_empty(&format!("[{i}].symbol"), &token.symbol, &mut findings);
    }
    findings
}

/// Validate a quote response
pub fn validate_quote(quote: &QuoteResponse) -> Vec<Finding> {
    let mut findings = Vec::new();

    check_non_empty("inputMint", &quote.input_mint, &mut findings);
    check_non_empty("outputMint", &quote.output_mint, &mut findings);
    check_amount("inAmount", &quote.in_amount, &mut findings);
    check_amount("outAmount", &quote.out_amount, &mut findings);
    check_amount(
        "otherAmountThreshold",
        &quote.other_amount_threshold,
        &mut findings,
    );

    if quote.route_plan.is_empty() {
        findings.push(Finding::new("routePlan", "quote has no route"));
    }

    for (i, step) in quote.route_plan.iter().enumerate() {
        if !(step.percent > 0.0 && step.percent <= 100.0) {
            findings.push(Finding::new(
                format!("routePlan[{i}].percent"),
                format!("expected a share in (0, 100], got {}", step.percent),
            ));
        }
        let info = &step.swap_info;
        check_non_empty(&format!("routePlan[{i}].swapInfo.ammKey"), &info.amm_key, &mut findings);
        check_amount(
            &format!("routePlan[{i}].swapInfo.inAmount"),
            &info.in_amount,
            &mut findings,
        );
        check_amount(
            &format!("routePlan[{i}].swapInfo.outAmount"),
            &info.out_amount,
            &mut findings,
        );
        check_amount(
            &format!("routePlan[{i}].swapInfo.feeAmount"),
            &info.fee_amount,
            &mut findings,
        );
    }

    findings
}

/// Validate a swap-transaction response
pub fn validate_swap(swap: &SwapResponse) -> Vec<Finding> {
    let mut findings = Vec::new();
    check_non_empty("swapTransaction", &swap.swap_transaction, &mut findings);
    if swap.last_valid_block_height == 0 {
        findings.push(Finding::new(
            "lastValidBlockHeight",
            "must be greater than 0",
        ));
    }
    findings
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::messages::{RoutePlanStep, SwapInfo, SwapMode};

    fn valid_quote() -> QuoteResponse {
        QuoteResponse {
            input_mint: "So11111111111111111111111111111111111111112".to_string(),
            in_amount: "100000000".to_string(),
            output_mint: "EPjFWdd5AufqSSqeM2qN1xzybapC8G4wEGGkZwyTDt1v".to_string(),
            out_amount: "99000000".to_string(),
            other_amount_threshold: "98000000".to_string(),
            swap_mode: SwapMode::ExactIn,
            slippage_bps: 50,
            price_impact_pct: "0.1".to_string(),
            route_plan: vec![RoutePlanStep {
                swap_info: SwapInfo {
                    amm_key: "someAmmKey".to_string(),
                    label: "Orca".to_string(),
                    input_mint: "So11111111111111111111111111111111111111112".to_string(),
                    output_mint: "EPjFWdd5AufqSSqeM2qN1xzybapC8G4wEGGkZwyTDt1v".to_string(),
                    in_amount: "100000000".to_string(),
                    out_amount: "99000000".to_string(),
                    fee_amount: "100000".to_string(),
                    fee_mint: "So11111111111111111111111111111111111111112".to_string(),
                },
                percent: 100.0,
            }],
        }
    }

    #[test]
    fn clean_quote_has_no_findings() {
        assert!(validate_quote(&valid_quote()).is_empty());
    }

    #[test]
    fn unparseable_amount_is_reported_with_its_path() {
        let mut quote = valid_quote();
        quote.in_amount = "a lot".to_string();
        quote.route_plan[0].swap_info.fee_amount = "-3".to_string();

        let findings = validate_quote(&quote);
        let paths: Vec<&str> = findings.iter().map(|f| f.path.as_str()).collect();
        assert_eq!(paths, vec!["inAmount", "routePlan[0].swapInfo.feeAmount"]);
    }

    #[test]
    fn empty_route_plan_is_reported() {
        let mut quote = valid_quote();
        quote.route_plan.clear();

        let findings = validate_quote(&quote);
        assert_eq!(findings.len(), 1);
        assert_eq!(findings[0].path, "routePlan");
    }

    #[test]
    fn route_share_outside_range_is_reported() {
        let mut quote = valid_quote();
        quote.route_plan[0].percent = 0.0;
        assert_eq!(validate_quote(&quote)[0].path, "routePlan[0].percent");

        quote.route_plan[0].percent = 120.0;
        assert_eq!(validate_quote(&quote)[0].path, "routePlan[0].percent");
    }

    #[test]
    fn token_list_findings_are_indexed() {
        let tokens = vec![
            TokenInfo {
                id: "So11111111111111111111111111111111111111112".to_string(),
                name: "Solana".to_string(),
                symbol: "SOL".to_string(),
                icon: None,
            },
            TokenInfo {
                id: String::new(),
                name: "Mystery".to_string(),
                symbol: " ".to_string(),
                icon: None,
            },
        ];

        let findings = validate_token_list(&tokens);
        let paths: Vec<&str> = findings.iter().map(|f| f.path.as_str()).collect();
        assert_eq!(paths, vec!["[1].id", "[1].symbol"]);
    }

    #[test]
    fn swap_response_checks() {
        let swap = SwapResponse {
            swap_transaction: "AQAB...".to_string(),
            last_valid_block_height: 279_632_475,
        };
        assert!(validate_swap(&swap).is_empty());

        let swap = SwapResponse {
            swap_transaction: String::new(),
            last_valid_block_height: 0,
        };
        assert_eq!(validate_swap(&swap).len(), 2);
    }
}
