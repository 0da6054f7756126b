//! Core data models for the demand engine.
//!
//! This module contains all the domain models used throughout the engine.

mod audit;
mod demand;
mod financials;
mod portfolio;
mod ratings;

pub use audit::{AuditStep, AuditTrace, AuditWarning};
pub use demand::{AssessmentInput, AssessmentOutcome, DemandContext, DemandStatus};
pub(crate) use financials::{check_amount, check_signed_amount};
pub use financials::NpvInput;
pub use portfolio::{PortfolioEntry, PortfolioSummary, PriorityCandidate, RankedDemand};
pub use ratings::{RATING_MAX, RATING_MIN, ScoringInput};
