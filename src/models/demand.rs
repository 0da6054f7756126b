//! Demand and assessment models.
//!
//! A demand request carries the urgency; its assessment carries the five
//! ratings, the financial inputs and the budget split. Evaluating the pair
//! yields an [`AssessmentOutcome`].

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{AuditTrace, NpvInput, ScoringInput};

/// Where a demand sits in the governance workflow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DemandStatus {
    /// Submitted, not yet assessed.
    #[default]
    Intake,
    /// Assessed and awaiting a decision.
    UnderReview,
    /// Ranked for delivery.
    Prioritized,
    /// Approved for delivery.
    Approved,
    /// Put on hold.
    Backlog,
    /// Rejected.
    Rejected,
}

impl DemandStatus {
    /// Returns the status after an assessment is recorded.
    ///
    /// Only demands still in intake move; every later status is kept.
    ///
    /// ```
    /// use demand_engine::models::DemandStatus;
    ///
    /// assert_eq!(DemandStatus::Intake.after_assessment(), DemandStatus::UnderReview);
    /// assert_eq!(DemandStatus::Approved.after_assessment(), DemandStatus::Approved);
    /// ```
    pub fn after_assessment(self) -> Self {
        match self {
            DemandStatus::Intake => DemandStatus::UnderReview,
            other => other,
        }
    }
}

/// The parts of a demand request the evaluation needs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DemandContext {
    /// The demand's identifier.
    pub id: Uuid,
    /// The demand's title.
    #[serde(default)]
    pub title: String,
    /// Urgency rating, 1-5.
    pub urgency: i32,
    /// Current workflow status.
    #[serde(default)]
    pub status: DemandStatus,
}

/// An assessor's ratings and financial estimates for one demand.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssessmentInput {
    /// Business value rating, 1-5.
    pub business_value: i32,
    /// Cost impact rating, 1-5 (higher is more expensive).
    pub cost_impact: i32,
    /// Risk rating, 1-5 (higher is riskier).
    pub risk: i32,
    /// Resource need rating, 1-5 (higher needs more).
    pub resource_need: i32,
    /// Strategic alignment rating, 1-5.
    pub strategic_alignment: i32,
    /// Upfront investment.
    #[serde(default)]
    pub initial_cost: Decimal,
    /// Expected benefit per year.
    #[serde(default)]
    pub annual_benefit: Decimal,
    /// Benefit horizon in years.
    #[serde(default)]
    pub project_years: i32,
    /// Discount rate as a percentage.
    #[serde(default)]
    pub discount_rate_percent: Decimal,
    /// Capital expenditure share of the budget.
    #[serde(default)]
    pub capex_amount: Decimal,
    /// Operating expenditure share of the budget.
    #[serde(default)]
    pub opex_amount: Decimal,
    /// Name of the assessor.
    pub assessed_by: String,
}

impl AssessmentInput {
    /// Combines the assessment ratings with the demand's urgency.
    pub fn scoring_input(&self, urgency: i32) -> ScoringInput {
        ScoringInput {
            urgency,
            business_value: self.business_value,
            cost_impact: self.cost_impact,
            risk: self.risk,
            resource_need: self.resource_need,
            strategic_alignment: self.strategic_alignment,
        }
    }

    /// Extracts the discounted cash flow inputs.
    pub fn npv_input(&self) -> NpvInput {
        NpvInput {
            initial_cost: self.initial_cost,
            annual_benefit: self.annual_benefit,
            project_years: self.project_years,
            discount_rate_percent: self.discount_rate_percent,
        }
    }
}

/// The result of evaluating an assessment, ready to be persisted by the caller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssessmentOutcome {
    /// Unique identifier for this evaluation.
    pub calculation_id: Uuid,
    /// The demand that was assessed.
    pub demand_id: Uuid,
    /// When the evaluation ran.
    pub assessed_at: DateTime<Utc>,
    /// Who assessed the demand (trimmed).
    pub assessed_by: String,
    /// Version of the engine that produced the result.
    pub engine_version: String,
    /// Priority score on the 0-100 scale.
    pub weighted_score: Decimal,
    /// Net present value of the demand.
    pub calculated_npv: Decimal,
    /// CapEx plus OpEx.
    pub total_budget: Decimal,
    /// Status before the assessment.
    pub previous_status: DemandStatus,
    /// Status the demand should move to.
    pub next_status: DemandStatus,
    /// Timeline entry describing the assessment.
    pub event_description: String,
    /// Audit trace of the evaluation.
    pub audit_trace: AuditTrace,
}
