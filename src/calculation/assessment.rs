//! Assessment evaluation.
//!
//! Validates an assessor's submission against its demand, runs the valuation
//! and scoring engines independently and assembles everything the caller
//! persists: the two figures, the budget total, the status transition and a
//! timeline entry.

use std::time::Instant;

use chrono::Utc;
use rust_decimal::{Decimal, RoundingStrategy};
use tracing::debug;
use uuid::Uuid;

use crate::config::EngineConfig;
use crate::error::{EngineError, EngineResult};
use crate::models::{
    AssessmentInput, AssessmentOutcome, AuditTrace, AuditWarning, DemandContext, check_amount,
};

use super::npv::calculate_npv;
use super::weighted_score::calculate_weighted_score;

/// Shortest accepted assessor name, in characters.
pub const ASSESSOR_MIN_LEN: usize = 2;

/// Longest accepted assessor name, in characters.
pub const ASSESSOR_MAX_LEN: usize = 200;

fn validate_assessor(name: &str) -> EngineResult<()> {
    let trimmed = name.trim();
    let len = trimmed.chars().count();
    if len < ASSESSOR_MIN_LEN {
        return Err(EngineError::InvalidAssessor {
            message: format!(
                "name must be at least {} characters, got {}",
                ASSESSOR_MIN_LEN, len
            ),
        });
    }
    if len > ASSESSOR_MAX_LEN {
        return Err(EngineError::InvalidAssessor {
            message: format!(
                "name must be at most {} characters, got {}",
                ASSESSOR_MAX_LEN, len
            ),
        });
    }
    Ok(())
}

/// Checks every field of an assessment without computing anything.
pub fn validate_assessment(
    demand: &DemandContext,
    assessment: &AssessmentInput,
    config: &EngineConfig,
) -> EngineResult<()> {
    assessment.scoring_input(demand.urgency).validate()?;
    assessment.npv_input().validate(config.limits())?;
    check_amount("capex_amount", assessment.capex_amount, config.limits())?;
    check_amount("opex_amount", assessment.opex_amount, config.limits())?;
    validate_assessor(&assessment.assessed_by)?;
    Ok(())
}

/// Evaluates an assessment of a demand.
///
/// # Returns
///
/// Returns the [`AssessmentOutcome`] on success, or an error if:
/// - A rating or the demand's urgency is outside `[1, 5]` (`RatingOutOfRange`)
/// - A financial figure is negative or beyond its limit (`InvalidFinancialInput`)
/// - The assessor name is too short or too long (`InvalidAssessor`)
///
/// # Examples
///
/// ```
/// use demand_engine::calculation::evaluate_assessment;
/// use demand_engine::config::EngineConfig;
/// use demand_engine::models::{AssessmentInput, DemandContext, DemandStatus};
/// use rust_decimal::Decimal;
/// use uuid::Uuid;
///
/// let demand = DemandContext {
///     id: Uuid::new_v4(),
///     title: "Self-service onboarding".to_string(),
///     urgency: 3,
///     status: DemandStatus::Intake,
/// };
/// let assessment = AssessmentInput {
///     business_value: 3,
///     cost_impact: 3,
///     risk: 3,
///     resource_need: 3,
///     strategic_alignment: 3,
///     initial_cost: Decimal::new(100_000, 0),
///     annual_benefit: Decimal::new(50_000, 0),
///     project_years: 2,
///     discount_rate_percent: Decimal::ZERO,
///     capex_amount: Decimal::new(70_000, 0),
///     opex_amount: Decimal::new(30_000, 0),
///     assessed_by: "Avery".to_string(),
/// };
///
/// let outcome = evaluate_assessment(&demand, &assessment, &EngineConfig::default()).unwrap();
/// assert_eq!(outcome.weighted_score, Decimal::new(60, 0));
/// assert_eq!(outcome.calculated_npv, Decimal::ZERO);
/// assert_eq!(outcome.next_status, DemandStatus::UnderReview);
/// ```
pub fn evaluate_assessment(
    demand: &DemandContext,
    assessment: &AssessmentInput,
    config: &EngineConfig,
) -> EngineResult<AssessmentOutcome> {
    let start_time = Instant::now();

    validate_assessment(demand, assessment, config)?;
    let assessed_by = assessment.assessed_by.trim().to_string();

    let npv_input = assessment.npv_input();
    let valuation = calculate_npv(&npv_input, config.rounding(), 1);
    let scoring = calculate_weighted_score(
        &assessment.scoring_input(demand.urgency),
        config.weights(),
        config.rounding(),
        2,
    );

    let mut warnings = Vec::new();
    if valuation.npv < Decimal::ZERO {
        warnings.push(AuditWarning {
            code: "NEGATIVE_NPV".to_string(),
            message: format!(
                "Discounted benefits do not recover the initial cost (NPV {})",
                valuation.npv
            ),
            severity: "medium".to_string(),
        });
    }
    if npv_input.project_years == 0 {
        warnings.push(AuditWarning {
            code: "NO_PROJECT_HORIZON".to_string(),
            message: "Project horizon is zero years; no benefits were discounted".to_string(),
            severity: "low".to_string(),
        });
    }

    let next_status = demand.status.after_assessment();
    let display_score = scoring
        .score
        .round_dp_with_strategy(1, RoundingStrategy::MidpointAwayFromZero);
    let event_description = format!(
        "Assessment completed by {} (Score: {:.1})",
        assessed_by, display_score
    );

    let duration_us = start_time.elapsed().as_micros() as u64;
    debug!(
        demand_id = %demand.id,
        weighted_score = %scoring.score,
        calculated_npv = %valuation.npv,
        warnings = warnings.len(),
        duration_us,
        "Assessment evaluated"
    );

    Ok(AssessmentOutcome {
        calculation_id: Uuid::new_v4(),
        demand_id: demand.id,
        assessed_at: Utc::now(),
        assessed_by,
        engine_version: env!("CARGO_PKG_VERSION").to_string(),
        weighted_score: scoring.score,
        calculated_npv: valuation.npv,
        total_budget: assessment.capex_amount + assessment.opex_amount,
        previous_status: demand.status,
        next_status,
        event_description,
        audit_trace: AuditTrace {
            steps: vec![valuation.audit_step, scoring.audit_step],
            warnings,
            duration_us,
        },
    })
}
