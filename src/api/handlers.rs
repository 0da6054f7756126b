//! HTTP request handlers for the demand engine API.
//!
//! This module contains the handler functions for all API endpoints.

use std::time::Instant;

use axum::{
    extract::{rejection::JsonRejection, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde::Serialize;
use tracing::{info, warn};
use uuid::Uuid;

use crate::calculation::{
    calculate_npv, calculate_weighted_score, capacity_utilization, evaluate_assessment,
    rank_demands, summarize_portfolio,
};
use crate::error::EngineError;
use crate::models::{NpvInput, ScoringInput};

use super::request::{EvaluateAssessmentRequest, PortfolioSummaryRequest, PrioritizeRequest};
use super::response::{
    ApiError, ApiErrorResponse, NpvResponse, PortfolioSummaryResponse, PrioritizeResponse,
    ScoreResponse,
};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_handler))
        .route("/score", post(score_handler))
        .route("/npv", post(npv_handler))
        .route("/assessments/evaluate", post(evaluate_handler))
        .route("/prioritize", post(prioritize_handler))
        .route("/portfolio/summary", post(portfolio_handler))
        .with_state(state)
}

fn json_response<T: Serialize>(status: StatusCode, body: T) -> Response {
    (status, [(header::CONTENT_TYPE, "application/json")], Json(body)).into_response()
}

fn engine_error_response(correlation_id: Uuid, err: EngineError) -> Response {
    warn!(correlation_id = %correlation_id, error = %err, "Request rejected");
    let api_error: ApiErrorResponse = err.into();
    json_response(api_error.status, api_error.error)
}

/// Unwraps a JSON body, turning extractor rejections into 400 responses.
fn parse_body<T>(
    correlation_id: Uuid,
    payload: Result<Json<T>, JsonRejection>,
) -> Result<T, Response> {
    let rejection = match payload {
        Ok(Json(body)) => return Ok(body),
        Err(rejection) => rejection,
    };

    let error = match rejection {
        JsonRejection::JsonDataError(err) => {
            let body_text = err.body_text();
            warn!(
                correlation_id = %correlation_id,
                error = %body_text,
                "JSON data error"
            );
            if body_text.contains("missing field") {
                ApiError::validation_error(body_text)
            } else {
                ApiError::malformed_json(body_text)
            }
        }
        JsonRejection::JsonSyntaxError(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "JSON syntax error"
            );
            ApiError::malformed_json(format!("Invalid JSON syntax: {}", err))
        }
        JsonRejection::MissingJsonContentType(_) => {
            ApiError::new("MISSING_CONTENT_TYPE", "Content-Type must be application/json")
        }
        _ => ApiError::malformed_json("Failed to parse request body"),
    };

    Err(json_response(StatusCode::BAD_REQUEST, error))
}

/// Handler for GET /health.
async fn health_handler() -> impl IntoResponse {
    json_response(StatusCode::OK, serde_json::json!({ "status": "ok" }))
}

/// Handler for POST /score.
///
/// Validates the six ratings and returns the weighted score.
async fn score_handler(
    State(state): State<AppState>,
    payload: Result<Json<ScoringInput>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing score request");

    let input = match parse_body(correlation_id, payload) {
        Ok(input) => input,
        Err(response) => return response,
    };
    if let Err(err) = input.validate() {
        return engine_error_response(correlation_id, err);
    }

    let config = state.config();
    let result = calculate_weighted_score(&input, config.weights(), config.rounding(), 1);
    info!(
        correlation_id = %correlation_id,
        weighted_score = %result.score,
        "Score calculated"
    );

    json_response(
        StatusCode::OK,
        ScoreResponse {
            weighted_score: result.score,
            raw_score: result.raw_score,
            audit_step: result.audit_step,
        },
    )
}

/// Handler for POST /npv.
///
/// Validates the financial inputs and returns the net present value.
async fn npv_handler(
    State(state): State<AppState>,
    payload: Result<Json<NpvInput>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing NPV request");

    let input = match parse_body(correlation_id, payload) {
        Ok(input) => input,
        Err(response) => return response,
    };
    let config = state.config();
    if let Err(err) = input.validate(config.limits()) {
        return engine_error_response(correlation_id, err);
    }

    let result = calculate_npv(&input, config.rounding(), 1);
    info!(
        correlation_id = %correlation_id,
        project_years = input.project_years,
        calculated_npv = %result.npv,
        "NPV calculated"
    );

    json_response(
        StatusCode::OK,
        NpvResponse {
            calculated_npv: result.npv,
            discounted_benefits: result.discounted_benefits,
            audit_step: result.audit_step,
        },
    )
}

/// Handler for POST /assessments/evaluate.
///
/// Runs the full assessment evaluation for one demand.
async fn evaluate_handler(
    State(state): State<AppState>,
    payload: Result<Json<EvaluateAssessmentRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing assessment evaluation");

    let request = match parse_body(correlation_id, payload) {
        Ok(request) => request,
        Err(response) => return response,
    };

    let start_time = Instant::now();
    match evaluate_assessment(&request.demand, &request.assessment, state.config().config()) {
        Ok(outcome) => {
            info!(
                correlation_id = %correlation_id,
                demand_id = %outcome.demand_id,
                weighted_score = %outcome.weighted_score,
                calculated_npv = %outcome.calculated_npv,
                next_status = ?outcome.next_status,
                duration_us = start_time.elapsed().as_micros(),
                "Assessment evaluated successfully"
            );
            json_response(StatusCode::OK, outcome)
        }
        Err(err) => engine_error_response(correlation_id, err),
    }
}

/// Handler for POST /prioritize.
async fn prioritize_handler(payload: Result<Json<PrioritizeRequest>, JsonRejection>) -> Response {
    let correlation_id = Uuid::new_v4();
    let request = match parse_body(correlation_id, payload) {
        Ok(request) => request,
        Err(response) => return response,
    };

    let count = request.demands.len();
    let ranked = rank_demands(request.demands);
    info!(correlation_id = %correlation_id, demands = count, "Demands ranked");

    json_response(StatusCode::OK, PrioritizeResponse { ranked })
}

/// Handler for POST /portfolio/summary.
///
/// Validates every amount before rolling the entries up.
async fn portfolio_handler(
    State(state): State<AppState>,
    payload: Result<Json<PortfolioSummaryRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    let request = match parse_body(correlation_id, payload) {
        Ok(request) => request,
        Err(response) => return response,
    };

    let config = state.config();
    if let Err(err) = request.validate(config.limits()) {
        return engine_error_response(correlation_id, err);
    }

    let summary = match summarize_portfolio(&request.entries) {
        Ok(summary) => summary,
        Err(err) => return engine_error_response(correlation_id, err),
    };
    let utilization_percent = match request
        .capacity
        .map(|capacity| {
            capacity_utilization(
                capacity.allocated_hours,
                capacity.capacity_hours,
                config.rounding(),
            )
        })
        .transpose()
    {
        Ok(utilization_percent) => utilization_percent,
        Err(err) => return engine_error_response(correlation_id, err),
    };
    info!(
        correlation_id = %correlation_id,
        demands = summary.demand_count,
        total_npv = %summary.total_npv,
        "Portfolio summarised"
    );

    json_response(
        StatusCode::OK,
        PortfolioSummaryResponse {
            summary,
            utilization_percent,
        },
    )
}
