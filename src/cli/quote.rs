use super::invest::{price_transaction, render_receipt};
use crate::core::config::AppConfig;
use anyhow::Result;

/// Prices a single transaction from command line arguments and prints the receipt.
pub fn run(name: &str, fund_code: &str, amount: &str, config: &AppConfig) -> Result<()> {
    println!("{}", quote(name, fund_code, amount, config)?);
    Ok(())
}

pub fn quote(name: &str, fund_code: &str, amount: &str, config: &AppConfig) -> Result<String> {
    let (request, result) = price_transaction(name, fund_code, amount)?;
    Ok(render_receipt(&request, &result, config))
}
