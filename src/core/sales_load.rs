//! Tiered sales load schedule shared by every fund in the catalog.

/// An amount band `[lower, upper)` charged at `rate`. `upper` of `None` is unbounded.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SalesLoadTier {
    pub lower: f64,
    pub upper: Option<f64>,
    pub rate: f64,
}

impl SalesLoadTier {
    pub fn contains(&self, amount: f64) -> bool {
        amount >= self.lower && self.upper.is_none_or(|upper| amount < upper)
    }
}

pub const SALES_LOAD_TIERS: [SalesLoadTier; 4] = [
    SalesLoadTier {
        lower: 1_000.0,
        upper: Some(100_000.0),
        rate: 0.02,
    },
    SalesLoadTier {
        lower: 100_000.0,
        upper: Some(500_000.0),
        rate: 0.015,
    },
    SalesLoadTier {
        lower: 500_000.0,
        upper: Some(2_000_000.0),
        rate: 0.01,
    },
    SalesLoadTier {
        lower: 2_000_000.0,
        upper: None,
        rate: 0.005,
    },
];

/// Rate charged for amounts that match no tier, which today means anything below 1000.
pub const FALLBACK_RATE: f64 = 0.005;

pub fn sales_load_rate(amount: f64) -> f64 {
    SALES_LOAD_TIERS
        .iter()
        .find(|tier| tier.contains(amount))
        .map_or(FALLBACK_RATE, |tier| tier.rate)
}

/// Fee deducted from `amount` before shares are bought. No rounding is applied.
pub fn compute_sales_load(amount: f64) -> f64 {
    amount * sales_load_rate(amount)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_tier_boundaries() {
        assert_eq!(sales_load_rate(999.99), 0.005);
        assert_eq!(sales_load_rate(1_000.0), 0.02);
        assert_eq!(sales_load_rate(99_999.99), 0.02);
        assert_eq!(sales_load_rate(100_000.0), 0.015);
        assert_eq!(sales_load_rate(499_999.99), 0.015);
        assert_eq!(sales_load_rate(500_000.0), 0.01);
        assert_eq!(sales_load_rate(1_999_999.99), 0.01);
        assert_eq!(sales_load_rate(2_000_000.0), 0.005);
    }

    #[test]
    fn test_small_amounts_use_fallback_rate() {
        assert_eq!(compute_sales_load(500.0), 500.0 * 0.005);
        assert_eq!(compute_sales_load(0.01), 0.01 * 0.005);
    }

    #[test]
    fn test_known_fees() {
        assert_eq!(compute_sales_load(150_000.0), 2_250.0);
        assert_eq!(compute_sales_load(10_000.0), 200.0);
        assert_eq!(compute_sales_load(1_000_000.0), 10_000.0);
        assert_eq!(compute_sales_load(4_000_000.0), 20_000.0);
    }

    #[test]
    fn test_tiers_are_contiguous() {
        for pair in SALES_LOAD_TIERS.windows(2) {
            assert_eq!(pair[0].upper, Some(pair[1].lower));
        }
        assert!(SALES_LOAD_TIERS.last().unwrap().upper.is_none());
    }

    proptest! {
        #[test]
        fn first_tier_charges_two_percent(a in 1_000.0f64..100_000.0) {
            prop_assert_eq!(compute_sales_load(a), a * 0.02);
        }

        #[test]
        fn second_tier_charges_one_and_a_half_percent(a in 100_000.0f64..500_000.0) {
            prop_assert_eq!(compute_sales_load(a), a * 0.015);
        }

        #[test]
        fn third_tier_charges_one_percent(a in 500_000.0f64..2_000_000.0) {
            prop_assert_eq!(compute_sales_load(a), a * 0.01);
        }

        #[test]
        fn top_tier_charges_half_percent(a in 2_000_000.0f64..1e12) {
            prop_assert_eq!(compute_sales_load(a), a * 0.005);
        }

        #[test]
        fn below_first_tier_charges_half_percent(a in 0.0001f64..1_000.0) {
            prop_assert_eq!(compute_sales_load(a), a * 0.005);
        }
    }
}
