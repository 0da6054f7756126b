//! Response types for the demand engine API.
//!
//! This module defines the success bodies, the error response structure and
//! the mapping from engine errors to HTTP statuses.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::EngineError;
use crate::models::{AuditStep, PortfolioSummary, RankedDemand};

/// Response body for the `/score` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoreResponse {
    /// Score on the 0-100 scale.
    pub weighted_score: Decimal,
    /// Weighted sum on the 1-5 scale.
    pub raw_score: Decimal,
    /// The audit step for the calculation.
    pub audit_step: AuditStep,
}

/// Response body for the `/npv` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NpvResponse {
    /// Net present value, rounded to cents.
    pub calculated_npv: Decimal,
    /// Present value of each year's benefit.
    pub discounted_benefits: Vec<Decimal>,
    /// The audit step for the calculation.
    pub audit_step: AuditStep,
}

/// Response body for the `/prioritize` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PrioritizeResponse {
    /// Demands in priority order.
    pub ranked: Vec<RankedDemand>,
}

/// Response body for the `/portfolio/summary` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PortfolioSummaryResponse {
    /// Budget totals.
    pub summary: PortfolioSummary,
    /// Capacity utilisation percentage, when capacity was supplied.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub utilization_percent: Option<Decimal>,
}

/// API error response structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    /// Error code for programmatic handling.
    pub code: String,
    /// Human-readable error message.
    pub message: String,
    /// Optional details about the error.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: None,
        }
    }

    /// Creates a new API error with details.
    pub fn with_details(
        code: impl Into<String>,
        message: impl Into<String>,
        details: impl Into<String>,
    ) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: Some(details.into()),
        }
    }

    /// Creates a validation error response.
    pub fn validation_error(message: impl Into<String>) -> Self {
        Self::new("VALIDATION_ERROR", message)
    }

    /// Creates a malformed JSON error response.
    pub fn malformed_json(message: impl Into<String>) -> Self {
        Self::new("MALFORMED_JSON", message)
    }
}

/// API error with HTTP status code.
pub struct ApiErrorResponse {
    /// The HTTP status code.
    pub status: StatusCode,
    /// The error body.
    pub error: ApiError,
}

impl IntoResponse for ApiErrorResponse {
    fn into_response(self) -> Response {
        (self.status, Json(self.error)).into_response()
    }
}

impl From<EngineError> for ApiErrorResponse {
    fn from(error: EngineError) -> Self {
        let message = error.to_string();
        match error {
            EngineError::ConfigNotFound { path } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details(
                    "CONFIG_ERROR",
                    "Configuration error",
                    format!("Configuration file not found: {}", path),
                ),
            },
            EngineError::ConfigParseError { path, message } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details(
                    "CONFIG_ERROR",
                    "Configuration parse error",
                    format!("Failed to parse {}: {}", path, message),
                ),
            },
            EngineError::InvalidConfig { .. } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details("CONFIG_ERROR", "Invalid configuration", message),
            },
            EngineError::RatingOutOfRange { field, .. } => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::with_details(
                    "RATING_OUT_OF_RANGE",
                    message,
                    format!("Field '{}' uses the 1-5 rating scale", field),
                ),
            },
            EngineError::InvalidFinancialInput { field, .. } => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::with_details(
                    "INVALID_FINANCIAL_INPUT",
                    message,
                    format!("Field '{}' failed financial validation", field),
                ),
            },
            EngineError::InvalidAssessor { .. } => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::new("INVALID_ASSESSOR", message),
            },
        }
    }
}
