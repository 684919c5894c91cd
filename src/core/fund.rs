//! Fund catalog with fixed share prices

use std::fmt::Display;
use std::str::FromStr;

use super::validation::ValidationError;

/// Static description of a fund offered for investment.
#[derive(Debug, Clone, PartialEq)]
pub struct FundProfile {
    pub display_name: &'static str,
    /// Net asset value per share (NAVPS).
    pub price_per_share: f64,
}

const EQUITY: FundProfile = FundProfile {
    display_name: "Save and Learn Equity Fund",
    price_per_share: 4.5457,
};

const BALANCED: FundProfile = FundProfile {
    display_name: "Save and Learn Balanced Fund",
    price_per_share: 2.4679,
};

const FIXED_INCOME: FundProfile = FundProfile {
    display_name: "Save and Learn Fixed Income Fund",
    price_per_share: 2.4444,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FundCode {
    EquityFund,
    BalancedFund,
    FixedIncomeFund,
}

impl FundCode {
    /// All funds in catalog order.
    pub const ALL: [FundCode; 3] = [
        FundCode::EquityFund,
        FundCode::BalancedFund,
        FundCode::FixedIncomeFund,
    ];

    pub fn ticker(&self) -> &'static str {
        match self {
            FundCode::EquityFund => "SALEF",
            FundCode::BalancedFund => "SALBF",
            FundCode::FixedIncomeFund => "SALFIF",
        }
    }

    pub fn profile(&self) -> &'static FundProfile {
        match self {
            FundCode::EquityFund => &EQUITY,
            FundCode::BalancedFund => &BALANCED,
            FundCode::FixedIncomeFund => &FIXED_INCOME,
        }
    }

    pub fn display_name(&self) -> &'static str {
        self.profile().display_name
    }

    pub fn price_per_share(&self) -> f64 {
        self.profile().price_per_share
    }

    /// Tickers joined for prompts, e.g. "SALEF, SALBF, or SALFIF".
    pub fn ticker_list() -> String {
        let tickers: Vec<&str> = Self::ALL.iter().map(FundCode::ticker).collect();
        match tickers.split_last() {
            Some((last, rest)) if !rest.is_empty() => format!("{}, or {last}", rest.join(", ")),
            Some((last, _)) => last.to_string(),
            None => String::new(),
        }
    }
}

impl Display for FundCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.ticker())
    }
}

impl FromStr for FundCode {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        FundCode::ALL
            .into_iter()
            .find(|code| code.ticker().eq_ignore_ascii_case(wanted))
            .ok_or(ValidationError::InvalidFundSelection)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_profiles() {
        assert_eq!(
            FundCode::EquityFund.display_name(),
            "Save and Learn Equity Fund"
        );
        assert_eq!(FundCode::EquityFund.price_per_share(), 4.5457);
        assert_eq!(
            FundCode::BalancedFund.display_name(),
            "Save and Learn Balanced Fund"
        );
        assert_eq!(FundCode::BalancedFund.price_per_share(), 2.4679);
        assert_eq!(
            FundCode::FixedIncomeFund.display_name(),
            "Save and Learn Fixed Income Fund"
        );
        assert_eq!(FundCode::FixedIncomeFund.price_per_share(), 2.4444);
    }

    #[test]
    fn test_prices_are_positive() {
        for code in FundCode::ALL {
            assert!(code.price_per_share() > 0.0, "{code} has no price");
        }
    }

    #[test]
    fn test_from_str_is_case_insensitive() {
        assert_eq!("SALEF".parse::<FundCode>().unwrap(), FundCode::EquityFund);
        assert_eq!("salbf".parse::<FundCode>().unwrap(), FundCode::BalancedFund);
        assert_eq!(
            " SalFIF\n".parse::<FundCode>().unwrap(),
            FundCode::FixedIncomeFund
        );
    }

    #[test]
    fn test_from_str_rejects_unknown() {
        assert_eq!(
            "XYZ".parse::<FundCode>(),
            Err(ValidationError::InvalidFundSelection)
        );
        assert!("".parse::<FundCode>().is_err());
        assert!("SALEFX".parse::<FundCode>().is_err());
    }

    #[test]
    fn test_ticker_round_trips_through_display() {
        for code in FundCode::ALL {
            assert_eq!(code.to_string().parse::<FundCode>().unwrap(), code);
        }
    }

    #[test]
    fn test_ticker_list() {
        assert_eq!(FundCode::ticker_list(), "SALEF, SALBF, or SALFIF");
    }
}
