//! Configuration types for scoring and valuation.
//!
//! This module contains the strongly-typed configuration structures that
//! are deserialized from YAML configuration files.

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

/// How midpoints are resolved when a result is rounded to its output precision.
///
/// The default is [`RoundingConvention::HalfEven`] (banker's rounding).
///
/// # Example
///
/// ```
/// use demand_engine::config::RoundingConvention;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let value = Decimal::from_str("2.125").unwrap();
/// assert_eq!(RoundingConvention::HalfEven.round(value, 2).to_string(), "2.12");
/// assert_eq!(RoundingConvention::HalfAwayFromZero.round(value, 2).to_string(), "2.13");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RoundingConvention {
    /// Midpoints go to the nearest even digit.
    #[default]
    HalfEven,
    /// Midpoints go away from zero.
    HalfAwayFromZero,
}

impl RoundingConvention {
    /// Returns the matching `rust_decimal` strategy.
    pub fn strategy(self) -> RoundingStrategy {
        match self {
            RoundingConvention::HalfEven => RoundingStrategy::MidpointNearestEven,
            RoundingConvention::HalfAwayFromZero => RoundingStrategy::MidpointAwayFromZero,
        }
    }

    /// Rounds `value` to `dp` fraction digits.
    pub fn round(self, value: Decimal, dp: u32) -> Decimal {
        value.round_dp_with_strategy(dp, self.strategy())
    }
}

/// Weights applied to each term of the weighted score.
///
/// The three cost-like factors are weighted after inversion, so every weight
/// rewards a favourable assessment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoringWeights {
    /// Weight of the business value rating.
    pub business_value: Decimal,
    /// Weight of the strategic alignment rating.
    pub strategic_alignment: Decimal,
    /// Weight of the demand's urgency.
    pub urgency: Decimal,
    /// Weight of the inverted cost impact rating.
    pub cost: Decimal,
    /// Weight of the inverted risk rating.
    pub risk: Decimal,
    /// Weight of the inverted resource need rating.
    pub resource: Decimal,
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self {
            business_value: Decimal::new(30, 2),
            strategic_alignment: Decimal::new(25, 2),
            urgency: Decimal::new(15, 2),
            cost: Decimal::new(10, 2),
            risk: Decimal::new(10, 2),
            resource: Decimal::new(10, 2),
        }
    }
}

impl ScoringWeights {
    /// Returns the sum of all six weights.
    pub fn total(&self) -> Decimal {
        self.business_value
            + self.strategic_alignment
            + self.urgency
            + self.cost
            + self.risk
            + self.resource
    }

    /// Checks that every weight is non-negative and that they sum to exactly 1.
    pub fn validate(&self) -> EngineResult<()> {
        let named = [
            ("weights.business_value", self.business_value),
            ("weights.strategic_alignment", self.strategic_alignment),
            ("weights.urgency", self.urgency),
            ("weights.cost", self.cost),
            ("weights.risk", self.risk),
            ("weights.resource", self.resource),
        ];
        if let Some((field, value)) = named.iter().find(|(_, w)| *w < Decimal::ZERO) {
            return Err(EngineError::InvalidConfig {
                field: field.to_string(),
                message: format!("must not be negative, got {}", value),
            });
        }

        let total = self.total();
        if total != Decimal::ONE {
            return Err(EngineError::InvalidConfig {
                field: "weights".to_string(),
                message: format!("must sum to 1.0, got {}", total.normalize()),
            });
        }
        Ok(())
    }
}

/// Contents of `scoring.yaml`.
#[derive(Debug, Clone, Deserialize)]
pub struct ScoringConfig {
    /// The scoring weights.
    pub weights: ScoringWeights,
}

/// Upper bounds applied when validating financial inputs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValuationLimits {
    /// Longest accepted project horizon, in years.
    pub max_project_years: i32,
    /// Highest accepted discount rate, as a percentage.
    pub max_discount_rate_percent: Decimal,
    /// Largest accepted monetary amount for any single input.
    pub max_monetary_amount: Decimal,
}

impl Default for ValuationLimits {
    fn default() -> Self {
        Self {
            max_project_years: 50,
            max_discount_rate_percent: Decimal::ONE_HUNDRED,
            max_monetary_amount: Decimal::new(1_000_000_000_000_000, 0),
        }
    }
}

impl ValuationLimits {
    /// Rejects limits that would let a validated input overflow the engine.
    pub fn validate(&self) -> EngineResult<()> {
        if !(0..=50).contains(&self.max_project_years) {
            return Err(EngineError::InvalidConfig {
                field: "limits.max_project_years".to_string(),
                message: format!("must be between 0 and 50, got {}", self.max_project_years),
            });
        }
        if self.max_discount_rate_percent < Decimal::ZERO
            || self.max_discount_rate_percent > Decimal::ONE_HUNDRED
        {
            return Err(EngineError::InvalidConfig {
                field: "limits.max_discount_rate_percent".to_string(),
                message: format!(
                    "must be between 0 and 100, got {}",
                    self.max_discount_rate_percent
                ),
            });
        }
        if self.max_monetary_amount <= Decimal::ZERO
            || self.max_monetary_amount > Decimal::new(1_000_000_000_000_000, 0)
        {
            return Err(EngineError::InvalidConfig {
                field: "limits.max_monetary_amount".to_string(),
                message: format!(
                    "must be positive and at most 1000000000000000, got {}",
                    self.max_monetary_amount
                ),
            });
        }
        Ok(())
    }
}

/// Contents of `valuation.yaml`.
#[derive(Debug, Clone, Deserialize)]
pub struct ValuationConfig {
    /// Rounding applied to scores and NPVs.
    #[serde(default)]
    pub rounding: RoundingConvention,
    /// Input bounds.
    #[serde(default)]
    pub limits: ValuationLimits,
}

/// The complete engine configuration.
///
/// `EngineConfig::default()` is the built-in model: the standard weights,
/// a 50 year horizon, rates up to 100% and banker's rounding.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EngineConfig {
    weights: ScoringWeights,
    limits: ValuationLimits,
    rounding: RoundingConvention,
}

impl EngineConfig {
    /// Creates a validated configuration from its component parts.
    pub fn new(
        weights: ScoringWeights,
        limits: ValuationLimits,
        rounding: RoundingConvention,
    ) -> EngineResult<Self> {
        weights.validate()?;
        limits.validate()?;
        Ok(Self {
            weights,
            limits,
            rounding,
        })
    }

    /// Returns the scoring weights.
    pub fn weights(&self) -> &ScoringWeights {
        &self.weights
    }

    /// Returns the valuation limits.
    pub fn limits(&self) -> &ValuationLimits {
        &self.limits
    }

    /// Returns the rounding convention.
    pub fn rounding(&self) -> RoundingConvention {
        self.rounding
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_default_weights_sum_to_one() {
        assert_eq!(ScoringWeights::default().total(), Decimal::ONE);
        assert!(ScoringWeights::default().validate().is_ok());
    }

    #[test]
    fn test_weights_not_summing_to_one_are_rejected() {
        let weights = ScoringWeights {
            urgency: dec("0.10"),
            ..ScoringWeights::default()
        };

        match weights.validate() {
            Err(EngineError::InvalidConfig { field, message }) => {
                assert_eq!(field, "weights");
                assert!(message.contains("0.95"), "message was: {}", message);
            }
            other => panic!("Expected InvalidConfig, got {:?}", other),
        }
    }

    #[test]
    fn test_negative_weight_is_rejected() {
        let weights = ScoringWeights {
            business_value: dec("0.50"),
            risk: dec("-0.10"),
            ..ScoringWeights::default()
        };

        match weights.validate() {
            Err(EngineError::InvalidConfig { field, .. }) => {
                assert_eq!(field, "weights.risk");
            }
            other => panic!("Expected InvalidConfig, got {:?}", other),
        }
    }

    #[test]
    fn test_limits_above_engine_bounds_are_rejected() {
        let limits = ValuationLimits {
            max_project_years: 120,
            ..ValuationLimits::default()
        };
        assert!(limits.validate().is_err());

        let limits = ValuationLimits {
            max_discount_rate_percent: dec("150"),
            ..ValuationLimits::default()
        };
        assert!(limits.validate().is_err());
    }

    #[test]
    fn test_half_even_and_half_away_differ_on_midpoint() {
        assert_eq!(RoundingConvention::HalfEven.round(dec("0.125"), 2), dec("0.12"));
        assert_eq!(
            RoundingConvention::HalfAwayFromZero.round(dec("0.125"), 2),
            dec("0.13")
        );
        assert_eq!(
            RoundingConvention::HalfAwayFromZero.round(dec("-0.125"), 2),
            dec("-0.13")
        );
    }

    #[test]
    fn test_rounding_convention_deserializes_snake_case() {
        let convention: RoundingConvention =
            serde_yaml::from_str("half_away_from_zero").unwrap();
        assert_eq!(convention, RoundingConvention::HalfAwayFromZero);
    }

    #[test]
    fn test_engine_config_new_validates_weights() {
        let weights = ScoringWeights {
            cost: dec("0.20"),
            ..ScoringWeights::default()
        };
        let result = EngineConfig::new(
            weights,
            ValuationLimits::default(),
            RoundingConvention::HalfEven,
        );
        assert!(result.is_err());
    }
}
