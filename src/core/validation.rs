//! Input validation for investment transactions.

use super::fund::FundCode;
use super::investment::InvestmentRequest;
use thiserror::Error;
use tracing::debug;

/// Reasons a transaction is rejected before any calculation happens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Invalid investment amount. Must be greater than zero.")]
    InvalidAmount,

    #[error("Invalid fund type. Choose SALEF, SALBF, or SALFIF.")]
    InvalidFundSelection,

    #[error("Invalid investor name. Must not be empty or contain digits.")]
    InvalidInvestorName,
}

/// Checks amount, then fund, then name. The first failing rule is reported.
pub fn validate(
    name: &str,
    fund_code: &str,
    amount: f64,
) -> Result<InvestmentRequest, ValidationError> {
    if !(amount.is_finite() && amount > 0.0) {
        return Err(ValidationError::InvalidAmount);
    }

    let fund_code: FundCode = fund_code.parse()?;

    let investor_name = name.trim();
    // U+FFFD marks console bytes that were not valid UTF-8
    if investor_name.is_empty()
        || investor_name
            .chars()
            .any(|c| c.is_ascii_digit() || c == char::REPLACEMENT_CHARACTER)
    {
        return Err(ValidationError::InvalidInvestorName);
    }

    let request = InvestmentRequest {
        investor_name: investor_name.to_string(),
        fund_code,
        amount,
    };
    debug!(?request, "Validated investment request");
    Ok(request)
}

/// Removes thousands separators from `text`. Returns `None` when commas do not
/// separate groups of three digits in the integer part, e.g. "1,2,3".
fn strip_grouping(text: &str) -> Option<String> {
    if !text.contains(',') {
        return Some(text.to_string());
    }
    let (int_part, frac_part) = match text.split_once('.') {
        Some((int_part, frac_part)) => (int_part, Some(frac_part)),
        None => (text, None),
    };
    if frac_part.is_some_and(|f| f.contains(',')) {
        return None;
    }

    let digits = int_part.strip_prefix(['-', '+']).unwrap_or(int_part);
    let is_digits = |group: &str| group.bytes().all(|b| b.is_ascii_digit());
    let mut groups = digits.split(',');
    let first = groups.next()?;
    let well_formed = (1..=3).contains(&first.len())
        && is_digits(first)
        && groups.all(|group| group.len() == 3 && is_digits(group));

    well_formed.then(|| text.replace(',', ""))
}

/// Parses console text into an amount. Unparseable text fails like a non-positive amount.
pub fn parse_amount(text: &str) -> Result<f64, ValidationError> {
    strip_grouping(text.trim())
        .and_then(|plain| plain.parse::<f64>().ok())
        .ok_or(ValidationError::InvalidAmount)
}
