//! Weighted priority score.
//!
//! Five assessment ratings and the demand's urgency, each on a 1-5 scale, are
//! combined linearly and rescaled to 0-100. Cost impact, risk and resource
//! need are inverted first (`6 - rating`) so a 5 is always the favourable end.
//!
//! All arithmetic is in `Decimal`. With the default weights every term has at
//! most two fraction digits, so the score is exact before rounding.

use rust_decimal::Decimal;

use crate::config::{RoundingConvention, ScoringWeights};
use crate::models::{AuditStep, RATING_MAX, ScoringInput};

/// Fraction digits kept in a weighted score.
pub const SCORE_DECIMAL_PLACES: u32 = 2;

/// The result of scoring an assessment, including the audit step.
#[derive(Debug, Clone)]
pub struct WeightedScoreResult {
    /// Score on the 0-100 scale, rounded to two places.
    pub score: Decimal,
    /// Weighted sum on the 1-5 rating scale, before rescaling.
    pub raw_score: Decimal,
    /// The audit step recording this calculation.
    pub audit_step: AuditStep,
}

struct ScoreTerm {
    name: &'static str,
    rating: i32,
    effective: i32,
    weight: Decimal,
}

impl ScoreTerm {
    fn contribution(&self) -> Decimal {
        Decimal::from(self.effective) * self.weight
    }
}

/// Maps a "bad when high" rating onto the "good when high" direction.
fn invert(rating: i32) -> i32 {
    RATING_MAX + 1 - rating
}

fn terms(input: &ScoringInput, weights: &ScoringWeights) -> [ScoreTerm; 6] {
    let direct = |name, rating, weight| ScoreTerm {
        name,
        rating,
        effective: rating,
        weight,
    };
    let inverted = |name, rating, weight| ScoreTerm {
        name,
        rating,
        effective: invert(rating),
        weight,
    };

    [
        direct("business_value", input.business_value, weights.business_value),
        direct(
            "strategic_alignment",
            input.strategic_alignment,
            weights.strategic_alignment,
        ),
        direct("urgency", input.urgency, weights.urgency),
        inverted("cost_impact", input.cost_impact, weights.cost),
        inverted("risk", input.risk, weights.risk),
        inverted("resource_need", input.resource_need, weights.resource),
    ]
}

fn rescale(raw: Decimal) -> Decimal {
    raw / Decimal::from(RATING_MAX) * Decimal::ONE_HUNDRED
}

/// Computes the 0-100 weighted score of an assessment.
///
/// Inputs are not range-checked. For ratings inside `[1, 5]` the result lies
/// in `[20, 100]` with the default weights; outside the scale the result is
/// still deterministic but leaves that range.
///
/// # Examples
///
/// ```
/// use demand_engine::calculation::weighted_score;
/// use demand_engine::config::{RoundingConvention, ScoringWeights};
/// use demand_engine::models::ScoringInput;
/// use rust_decimal::Decimal;
///
/// let input = ScoringInput {
///     urgency: 3,
///     business_value: 3,
///     cost_impact: 3,
///     risk: 3,
///     resource_need: 3,
///     strategic_alignment: 3,
/// };
/// let score = weighted_score(&input, &ScoringWeights::default(), RoundingConvention::HalfEven);
/// assert_eq!(score, Decimal::new(60, 0));
/// ```
pub fn weighted_score(
    input: &ScoringInput,
    weights: &ScoringWeights,
    rounding: RoundingConvention,
) -> Decimal {
    let raw: Decimal = terms(input, weights).iter().map(ScoreTerm::contribution).sum();
    rounding.round(rescale(raw), SCORE_DECIMAL_PLACES)
}

/// Computes the weighted score and records how it was reached.
pub fn calculate_weighted_score(
    input: &ScoringInput,
    weights: &ScoringWeights,
    rounding: RoundingConvention,
    step_number: u32,
) -> WeightedScoreResult {
    let terms = terms(input, weights);
    let raw_score: Decimal = terms.iter().map(ScoreTerm::contribution).sum();
    let score = rounding.round(rescale(raw_score), SCORE_DECIMAL_PLACES);

    let term_json: Vec<serde_json::Value> = terms
        .iter()
        .map(|term| {
            serde_json::json!({
                "factor": term.name,
                "rating": term.rating,
                "effective_rating": term.effective,
                "weight": term.weight.to_string(),
                "contribution": term.contribution().to_string(),
            })
        })
        .collect();

    let audit_step = AuditStep {
        step_number,
        rule_id: "weighted_score".to_string(),
        rule_name: "Weighted Score".to_string(),
        input: serde_json::json!({
            "urgency": input.urgency,
            "business_value": input.business_value,
            "cost_impact": input.cost_impact,
            "risk": input.risk,
            "resource_need": input.resource_need,
            "strategic_alignment": input.strategic_alignment,
            "rounding": rounding,
        }),
        output: serde_json::json!({
            "terms": term_json,
            "raw_score": raw_score.to_string(),
            "score": score.to_string(),
        }),
        reasoning: format!(
            "Weighted sum {} on the 1-{} scale rescaled to {} out of 100",
            raw_score.normalize(),
            RATING_MAX,
            score
        ),
    };

    WeightedScoreResult {
        score,
        raw_score,
        audit_step,
    }
}
