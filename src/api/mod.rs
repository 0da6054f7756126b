//! HTTP API module for the demand engine.
//!
//! This module exposes the scoring and valuation engines as stateless JSON
//! endpoints.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::{
    CapacityRequest, EvaluateAssessmentRequest, PortfolioSummaryRequest, PrioritizeRequest,
};
pub use response::{
    ApiError, NpvResponse, PortfolioSummaryResponse, PrioritizeResponse, ScoreResponse,
};
pub use state::AppState;
