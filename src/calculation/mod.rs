//! Calculation logic for the demand engine.
//!
//! This module contains the weighted scoring engine, the NPV valuation
//! engine, the assessment evaluation that runs both, priority ranking and
//! portfolio rollups.

mod assessment;
mod npv;
mod portfolio;
mod prioritization;
mod weighted_score;

pub use assessment::{
    ASSESSOR_MAX_LEN, ASSESSOR_MIN_LEN, evaluate_assessment, validate_assessment,
};
pub use npv::{MONEY_DECIMAL_PLACES, NpvResult, calculate_npv, net_present_value};
pub use portfolio::{capacity_utilization, summarize_portfolio};
pub use prioritization::rank_demands;
pub use weighted_score::{
    SCORE_DECIMAL_PLACES, WeightedScoreResult, calculate_weighted_score, weighted_score,
};
