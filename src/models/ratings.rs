//! Assessment rating inputs for the weighted scoring engine.

use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

/// Lowest value on the rating scale.
pub const RATING_MIN: i32 = 1;

/// Highest value on the rating scale.
pub const RATING_MAX: i32 = 5;

/// The six 1-5 ratings combined into a weighted score.
///
/// `urgency` comes from the demand itself; the other five come from the
/// assessment. Cost impact, risk and resource need are "bad when high".
///
/// The scoring engine accepts any values and stays deterministic outside the
/// scale; call [`ScoringInput::validate`] before scoring untrusted input.
///
/// # Example
///
/// ```
/// use demand_engine::models::ScoringInput;
///
/// let input = ScoringInput {
///     urgency: 4,
///     business_value: 5,
///     cost_impact: 2,
///     risk: 3,
///     resource_need: 2,
///     strategic_alignment: 4,
/// };
/// assert!(input.validate().is_ok());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoringInput {
    /// Urgency of the parent demand.
    pub urgency: i32,
    /// Business value rating (higher is better).
    pub business_value: i32,
    /// Cost impact rating (higher is more expensive).
    pub cost_impact: i32,
    /// Risk rating (higher is riskier).
    pub risk: i32,
    /// Resource need rating (higher needs more resources).
    pub resource_need: i32,
    /// Strategic alignment rating (higher is better aligned).
    pub strategic_alignment: i32,
}

impl ScoringInput {
    /// Returns each rating paired with its field name.
    pub fn named_ratings(&self) -> [(&'static str, i32); 6] {
        [
            ("urgency", self.urgency),
            ("business_value", self.business_value),
            ("cost_impact", self.cost_impact),
            ("risk", self.risk),
            ("resource_need", self.resource_need),
            ("strategic_alignment", self.strategic_alignment),
        ]
    }

    /// Checks that every rating lies in `[1, 5]`.
    ///
    /// The first offending rating, in field order, is reported.
    pub fn validate(&self) -> EngineResult<()> {
        match self
            .named_ratings()
            .into_iter()
            .find(|(_, value)| !(RATING_MIN..=RATING_MAX).contains(value))
        {
            Some((field, value)) => Err(EngineError::RatingOutOfRange {
                field: field.to_string(),
                value,
            }),
            None => Ok(()),
        }
    }
}
