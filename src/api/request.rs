//! Request types for the demand engine API.
//!
//! This module defines the JSON request structures for each endpoint.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::config::ValuationLimits;
use crate::error::EngineResult;
use crate::models::{
    AssessmentInput, DemandContext, PortfolioEntry, PriorityCandidate, check_amount,
};

/// Request body for the `/assessments/evaluate` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EvaluateAssessmentRequest {
    /// The demand being assessed.
    pub demand: DemandContext,
    /// The assessor's submission.
    pub assessment: AssessmentInput,
}

/// Request body for the `/prioritize` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PrioritizeRequest {
    /// The competing demands.
    pub demands: Vec<PriorityCandidate>,
}

/// Resource capacity for a utilisation figure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CapacityRequest {
    /// Hours allocated to approved work.
    pub allocated_hours: Decimal,
    /// Hours available.
    pub capacity_hours: Decimal,
}

impl CapacityRequest {
    /// Checks both hour figures are non-negative and within the configured ceiling.
    pub fn validate(&self, limits: &ValuationLimits) -> EngineResult<()> {
        check_amount("allocated_hours", self.allocated_hours, limits)?;
        check_amount("capacity_hours", self.capacity_hours, limits)?;
        Ok(())
    }
}

/// Request body for the `/portfolio/summary` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PortfolioSummaryRequest {
    /// The assessed demands to roll up.
    #[serde(default)]
    pub entries: Vec<PortfolioEntry>,
    /// Optional capacity for a utilisation percentage.
    #[serde(default)]
    pub capacity: Option<CapacityRequest>,
}

impl PortfolioSummaryRequest {
    /// Validates every entry and the capacity figures, if present.
    pub fn validate(&self, limits: &ValuationLimits) -> EngineResult<()> {
        for entry in &self.entries {
            entry.validate(limits)?;
        }
        if let Some(capacity) = &self.capacity {
            capacity.validate(limits)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::DemandStatus;

    #[test]
    fn test_deserialize_evaluate_request() {
        let json = r#"{
            "demand": {
                "id": "0d3c2f4e-8d5b-4f6a-9b1e-2a7c5d9e0f13",
                "title": "Data warehouse refresh",
                "urgency": 4,
                "status": "intake"
            },
            "assessment": {
                "business_value": 5,
                "cost_impact": 2,
                "risk": 2,
                "resource_need": 3,
                "strategic_alignment": 4,
                "initial_cost": "250000",
                "annual_benefit": "90000",
                "project_years": 4,
                "discount_rate_percent": "8",
                "capex_amount": "200000",
                "opex_amount": "50000",
                "assessed_by": "Morgan"
            }
        }"#;

        let request: EvaluateAssessmentRequest = serde_json::from_str(json).unwrap();
        assert_eq!(request.demand.urgency, 4);
        assert_eq!(request.demand.status, DemandStatus::Intake);
        assert_eq!(request.assessment.project_years, 4);
        assert_eq!(request.assessment.assessed_by, "Morgan");
    }

    #[test]
    fn test_deserialize_prioritize_request() {
        let json = r#"{
            "demands": [
                {
                    "demand_id": "0d3c2f4e-8d5b-4f6a-9b1e-2a7c5d9e0f13",
                    "title": "A",
                    "urgency": 2,
                    "weighted_score": "71.5",
                    "created_at": "2026-02-01T10:00:00Z"
                },
                {
                    "demand_id": "5b2e4c1a-7f3d-4e9b-8a6c-1d0f2e3a4b5c",
                    "urgency": 5,
                    "created_at": "2026-02-03T10:00:00Z"
                }
            ]
        }"#;

        let request: PrioritizeRequest = serde_json::from_str(json).unwrap();
        assert_eq!(request.demands.len(), 2);
        assert!(request.demands[1].weighted_score.is_none());
    }

    #[test]
    fn test_portfolio_request_defaults() {
        let request: PortfolioSummaryRequest = serde_json::from_str("{}").unwrap();
        assert!(request.entries.is_empty());
        assert!(request.capacity.is_none());
    }

    #[test]
    fn test_capacity_hours_beyond_ceiling_are_rejected() {
        let request: PortfolioSummaryRequest = serde_json::from_str(
            r#"{"capacity": {"allocated_hours": "7e28", "capacity_hours": "0.001"}}"#,
        )
        .unwrap();

        match request.validate(&ValuationLimits::default()) {
            Err(crate::error::EngineError::InvalidFinancialInput { field, .. }) => {
                assert_eq!(field, "allocated_hours")
            }
            other => panic!("Expected InvalidFinancialInput, got {:?}", other),
        }
    }
}
