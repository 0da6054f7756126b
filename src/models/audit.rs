//! Audit trace models.
//!
//! Every evaluation records the rules it applied so a persisted score or NPV
//! can be explained after the fact.

use serde::{Deserialize, Serialize};

/// A single step in the audit trace.
///
/// # Example
///
/// ```
/// use demand_engine::models::AuditStep;
///
/// let step = AuditStep {
///     step_number: 1,
///     rule_id: "weighted_score".to_string(),
///     rule_name: "Weighted Score".to_string(),
///     input: serde_json::json!({"business_value": 3}),
///     output: serde_json::json!({"score": "60"}),
///     reasoning: "Raw score 3.00 rescaled to 60.00".to_string(),
/// };
/// assert_eq!(step.rule_id, "weighted_score");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditStep {
    /// The sequential step number.
    pub step_number: u32,
    /// The unique identifier of the rule that was applied.
    pub rule_id: String,
    /// The human-readable name of the rule.
    pub rule_name: String,
    /// The input data for this step.
    pub input: serde_json::Value,
    /// The output data from this step.
    pub output: serde_json::Value,
    /// Human-readable explanation of the result.
    pub reasoning: String,
}

/// A warning generated during evaluation.
///
/// Warnings flag outcomes worth a reviewer's attention without rejecting
/// the assessment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditWarning {
    /// A code identifying the type of warning.
    pub code: String,
    /// A human-readable description of the warning.
    pub message: String,
    /// The severity level (e.g., "low", "medium", "high").
    pub severity: String,
}

/// The complete audit trace for an evaluation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditTrace {
    /// The sequence of calculation steps.
    pub steps: Vec<AuditStep>,
    /// Any warnings generated during evaluation.
    pub warnings: Vec<AuditWarning>,
    /// The total evaluation duration in microseconds.
    pub duration_us: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_audit_step_serialization() {
        let step = AuditStep {
            step_number: 1,
            rule_id: "net_present_value".to_string(),
            rule_name: "Net Present Value".to_string(),
            input: serde_json::json!({"project_years": 1}),
            output: serde_json::json!({"npv": "-54545.45"}),
            reasoning: "Discounted 1 year".to_string(),
        };

        let json = serde_json::to_string(&step).unwrap();
        assert!(json.contains("\"step_number\":1"));
        assert!(json.contains("\"rule_id\":\"net_present_value\""));
        assert!(json.contains("\"rule_name\":\"Net Present Value\""));
    }

    #[test]
    fn test_audit_trace_round_trips_through_json() {
        let trace = AuditTrace {
            steps: vec![],
            warnings: vec![AuditWarning {
                code: "NEGATIVE_NPV".to_string(),
                message: "Benefits do not recover the initial cost".to_string(),
                severity: "medium".to_string(),
            }],
            duration_us: 42,
        };

        let json = serde_json::to_string(&trace).unwrap();
        let parsed: AuditTrace = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, trace);
    }
}
