//! Portfolio-level models: prioritization candidates and budget rollups.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{DemandStatus, check_amount, check_signed_amount};
use crate::config::ValuationLimits;
use crate::error::EngineResult;

/// A demand competing for priority.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriorityCandidate {
    /// The demand's identifier.
    pub demand_id: Uuid,
    /// The demand's title.
    #[serde(default)]
    pub title: String,
    /// Urgency rating, 1-5.
    pub urgency: i32,
    /// Persisted weighted score, absent until assessed.
    #[serde(default)]
    pub weighted_score: Option<Decimal>,
    /// Current status.
    #[serde(default)]
    pub status: DemandStatus,
    /// When the demand was submitted.
    pub created_at: DateTime<Utc>,
}

/// A candidate with its position in the priority list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RankedDemand {
    /// 1-based rank.
    pub rank: usize,
    /// The ranked candidate.
    #[serde(flatten)]
    pub candidate: PriorityCandidate,
}

/// Financial figures of one assessed demand.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PortfolioEntry {
    /// The demand's identifier.
    pub demand_id: Uuid,
    /// Capital expenditure.
    #[serde(default)]
    pub capex_amount: Decimal,
    /// Operating expenditure.
    #[serde(default)]
    pub opex_amount: Decimal,
    /// Calculated NPV.
    #[serde(default)]
    pub calculated_npv: Decimal,
    /// Planned spend recorded against the demand.
    #[serde(default)]
    pub planned_amount: Decimal,
    /// Actual spend recorded against the demand.
    #[serde(default)]
    pub actual_amount: Decimal,
}

impl PortfolioEntry {
    /// Checks every amount against the configured ceiling.
    ///
    /// Spend and budget figures must be non-negative; the NPV may be negative.
    pub fn validate(&self, limits: &ValuationLimits) -> EngineResult<()> {
        check_amount("capex_amount", self.capex_amount, limits)?;
        check_amount("opex_amount", self.opex_amount, limits)?;
        check_signed_amount("calculated_npv", self.calculated_npv, limits)?;
        check_amount("planned_amount", self.planned_amount, limits)?;
        check_amount("actual_amount", self.actual_amount, limits)?;
        Ok(())
    }
}

/// Totals over a set of assessed demands.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PortfolioSummary {
    /// Number of demands summarised.
    pub demand_count: usize,
    /// Total capital expenditure.
    pub total_capex: Decimal,
    /// Total operating expenditure.
    pub total_opex: Decimal,
    /// Sum of all NPVs.
    pub total_npv: Decimal,
    /// Total planned spend.
    pub total_planned: Decimal,
    /// Total actual spend.
    pub total_actual: Decimal,
    /// Planned minus actual.
    pub variance: Decimal,
}
