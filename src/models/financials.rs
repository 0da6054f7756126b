//! Financial inputs for the NPV valuation engine.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::config::ValuationLimits;
use crate::error::{EngineError, EngineResult};

/// Inputs of a flat-benefit discounted cash flow.
///
/// # Example
///
/// ```
/// use demand_engine::config::ValuationLimits;
/// use demand_engine::models::NpvInput;
/// use rust_decimal::Decimal;
///
/// let input = NpvInput {
///     initial_cost: Decimal::new(100_000, 0),
///     annual_benefit: Decimal::new(50_000, 0),
///     project_years: 5,
///     discount_rate_percent: Decimal::new(10, 0),
/// };
/// assert!(input.validate(&ValuationLimits::default()).is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NpvInput {
    /// Upfront investment, treated as an outflow at year 0.
    pub initial_cost: Decimal,
    /// Benefit received at the end of each project year.
    pub annual_benefit: Decimal,
    /// Number of benefit years.
    pub project_years: i32,
    /// Discount rate as a percentage (10 means 10%).
    pub discount_rate_percent: Decimal,
}

impl NpvInput {
    /// Checks the input against the configured bounds.
    pub fn validate(&self, limits: &ValuationLimits) -> EngineResult<()> {
        check_amount("initial_cost", self.initial_cost, limits)?;
        check_amount("annual_benefit", self.annual_benefit, limits)?;

        if !(0..=limits.max_project_years).contains(&self.project_years) {
            return Err(EngineError::InvalidFinancialInput {
                field: "project_years".to_string(),
                message: format!(
                    "must be between 0 and {}, got {}",
                    limits.max_project_years, self.project_years
                ),
            });
        }

        if self.discount_rate_percent < Decimal::ZERO
            || self.discount_rate_percent > limits.max_discount_rate_percent
        {
            return Err(EngineError::InvalidFinancialInput {
                field: "discount_rate_percent".to_string(),
                message: format!(
                    "must be between 0 and {}, got {}",
                    limits.max_discount_rate_percent, self.discount_rate_percent
                ),
            });
        }

        Ok(())
    }
}

/// Checks that a monetary amount is non-negative and within the configured ceiling.
pub(crate) fn check_amount(
    field: &str,
    amount: Decimal,
    limits: &ValuationLimits,
) -> EngineResult<()> {
    if amount < Decimal::ZERO {
        return Err(EngineError::InvalidFinancialInput {
            field: field.to_string(),
            message: format!("must not be negative, got {}", amount),
        });
    }
    if amount > limits.max_monetary_amount {
        return Err(EngineError::InvalidFinancialInput {
            field: field.to_string(),
            message: format!(
                "must not exceed {}, got {}",
                limits.max_monetary_amount, amount
            ),
        });
    }
    Ok(())
}

/// Checks that a signed amount, such as an NPV, stays within the configured ceiling either side of zero.
pub(crate) fn check_signed_amount(
    field: &str,
    amount: Decimal,
    limits: &ValuationLimits,
) -> EngineResult<()> {
    if amount.abs() > limits.max_monetary_amount {
        return Err(EngineError::InvalidFinancialInput {
            field: field.to_string(),
            message: format!(
                "must be within +/-{}, got {}",
                limits.max_monetary_amount, amount
            ),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn valid_input() -> NpvInput {
        NpvInput {
            initial_cost: dec("100000"),
            annual_benefit: dec("50000"),
            project_years: 5,
            discount_rate_percent: dec("10"),
        }
    }

    fn field_of(result: EngineResult<()>) -> String {
        match result {
            Err(EngineError::InvalidFinancialInput { field, .. }) => field,
            other => panic!("Expected InvalidFinancialInput, got {:?}", other),
        }
    }

    #[test]
    fn test_valid_input_passes() {
        assert!(valid_input().validate(&ValuationLimits::default()).is_ok());
    }

    #[test]
    fn test_boundaries_are_inclusive() {
        let input = NpvInput {
            initial_cost: Decimal::ZERO,
            annual_benefit: Decimal::ZERO,
            project_years: 50,
            discount_rate_percent: dec("100"),
        };
        assert!(input.validate(&ValuationLimits::default()).is_ok());
    }

    #[test]
    fn test_negative_initial_cost_is_rejected() {
        let input = NpvInput {
            initial_cost: dec("-1"),
            ..valid_input()
        };
        assert_eq!(
            field_of(input.validate(&ValuationLimits::default())),
            "initial_cost"
        );
    }

    #[test]
    fn test_project_years_above_limit_is_rejected() {
        let input = NpvInput {
            project_years: 51,
            ..valid_input()
        };
        assert_eq!(
            field_of(input.validate(&ValuationLimits::default())),
            "project_years"
        );
    }

    #[test]
    fn test_negative_project_years_is_rejected() {
        let input = NpvInput {
            project_years: -3,
            ..valid_input()
        };
        assert_eq!(
            field_of(input.validate(&ValuationLimits::default())),
            "project_years"
        );
    }

    #[test]
    fn test_discount_rate_outside_range_is_rejected() {
        let negative = NpvInput {
            discount_rate_percent: dec("-0.5"),
            ..valid_input()
        };
        let too_high = NpvInput {
            discount_rate_percent: dec("100.01"),
            ..valid_input()
        };
        let limits = ValuationLimits::default();

        assert_eq!(field_of(negative.validate(&limits)), "discount_rate_percent");
        assert_eq!(field_of(too_high.validate(&limits)), "discount_rate_percent");
    }

    #[test]
    fn test_amount_above_ceiling_is_rejected() {
        let limits = ValuationLimits {
            max_monetary_amount: dec("1000000"),
            ..ValuationLimits::default()
        };
        let input = NpvInput {
            annual_benefit: dec("1000000.01"),
            ..valid_input()
        };
        assert_eq!(field_of(input.validate(&limits)), "annual_benefit");
    }

    #[test]
    fn test_amounts_deserialize_from_strings_and_numbers() {
        let json = r#"{
            "initial_cost": "100000.00",
            "annual_benefit": 33333,
            "project_years": 3,
            "discount_rate_percent": "7"
        }"#;
        let input: NpvInput = serde_json::from_str(json).unwrap();
        assert_eq!(input.initial_cost, dec("100000"));
        assert_eq!(input.annual_benefit, dec("33333"));
        assert_eq!(input.discount_rate_percent, dec("7"));
    }

    #[test]
    fn test_signed_amount_allows_negative_within_ceiling() {
        let limits = ValuationLimits::default();
        assert!(check_signed_amount("calculated_npv", dec("-54545.45"), &limits).is_ok());
        assert!(check_signed_amount("calculated_npv", -limits.max_monetary_amount, &limits).is_ok());
    }

    #[test]
    fn test_signed_amount_beyond_ceiling_is_rejected() {
        let limits = ValuationLimits::default();
        let below = -limits.max_monetary_amount - Decimal::ONE;
        assert_eq!(
            field_of(check_signed_amount("calculated_npv", below, &limits)),
            "calculated_npv"
        );
    }
}
