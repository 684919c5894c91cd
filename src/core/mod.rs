//! Core business logic: fund catalog, sales load, and validation

pub mod config;
pub mod fund;
pub mod investment;
pub mod log;
pub mod sales_load;
pub mod validation;

// Re-export main types for cleaner imports
pub use fund::{FundCode, FundProfile};
pub use investment::{InvestmentRequest, TransactionResult, net_amount_invested, purchased_shares};
pub use sales_load::compute_sales_load;
pub use validation::{ValidationError, validate};
