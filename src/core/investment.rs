//! Net investment and share purchase calculations.
use super::fund::FundCode;
use super::sales_load::compute_sales_load;
use tracing::debug;

/// A validated purchase order for a single fund.
#[derive(Debug, Clone, PartialEq)]
pub struct InvestmentRequest {
    pub investor_name: String,
    pub fund_code: FundCode,
    pub amount: f64,
}

/// Outcome of buying into a fund, derived from an [`InvestmentRequest`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TransactionResult {
    pub sales_load: f64,
    pub net_invested: f64,
    pub shares_purchased: f64,
}

pub fn net_amount_invested(amount: f64) -> f64 {
    amount - compute_sales_load(amount)
}

pub fn purchased_shares(amount: f64, price_per_share: f64) -> f64 {
    net_amount_invested(amount) / price_per_share
}

impl TransactionResult {
    /// Prices the request against the fund catalog.
    pub fn compute(request: &InvestmentRequest) -> Self {
        let price = request.fund_code.price_per_share();
        let result = TransactionResult {
            sales_load: compute_sales_load(request.amount),
            net_invested: net_amount_invested(request.amount),
            shares_purchased: purchased_shares(request.amount, price),
        };
        debug!(
            fund = %request.fund_code,
            amount = request.amount,
            ?result,
            "Computed transaction"
        );
        result
    }
}
