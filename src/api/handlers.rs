//! HTTP request handlers for the Shift Rules Engine API.
//!
//! This module contains the handler functions for all API endpoints.

use std::time::{Duration, Instant};

use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
    routing::post,
};
use chrono::Utc;
use tracing::{info, warn};
use uuid::Uuid;

use crate::error::EngineError;
use crate::models::{AuditTrace, Enforcement, ValidationReport, WorkRule};
use crate::validation::{
    ValidationOutcome, assess_existing, assess_hypothetical, enforce, legacy_messages,
};

use super::request::{CandidateValidationRequest, ExistingValidationRequest};
use super::response::{ApiError, ApiErrorResponse};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/validate", post(validate_handler))
        .route("/validate/candidate", post(candidate_handler))
        .with_state(state)
}

/// Handler for POST /validate endpoint.
///
/// Validates an employee's existing shifts for the requested month.
async fn validate_handler(
    State(state): State<AppState>,
    payload: Result<Json<ExistingValidationRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing validation request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return rejection_response(correlation_id, rejection),
    };

    let config = state.config();
    if let Err(err) = request
        .validate()
        .and_then(|_| config.get_schedulable_employee(&request.employee_id).map(|_| ()))
    {
        return engine_error_response(correlation_id, err);
    }

    let rules = effective_rules(request.rules.as_ref(), config.work_rule());
    let start_time = Instant::now();
    let outcome = assess_existing(
        &request.shifts,
        &request.employee_id,
        request.month,
        request.year,
        rules,
    );
    let duration = start_time.elapsed();

    info!(
        correlation_id = %correlation_id,
        employee_id = %request.employee_id,
        shifts_count = request.shifts.len(),
        violations = outcome.violations.len(),
        duration_us = duration.as_micros(),
        "Validation completed"
    );

    let report = build_report(&request.employee_id, outcome, None, duration);
    json_response(StatusCode::OK, report)
}

/// Handler for POST /validate/candidate endpoint.
///
/// Validates a shift before it is saved and decides whether the save may
/// proceed.
async fn candidate_handler(
    State(state): State<AppState>,
    payload: Result<Json<CandidateValidationRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing candidate validation request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return rejection_response(correlation_id, rejection),
    };

    let config = state.config();
    let candidate = &request.candidate;
    if let Err(err) = request.validate().and_then(|_| {
        config
            .get_schedulable_employee(&candidate.employee_id)
            .map(|_| ())
    }) {
        return engine_error_response(correlation_id, err);
    }

    let rules = effective_rules(request.rules.as_ref(), config.work_rule());
    let start_time = Instant::now();
    let outcome = assess_hypothetical(candidate, &request.shifts, rules);
    let enforcement = enforce(&outcome.violations, candidate.manager_override);
    let duration = start_time.elapsed();

    if enforcement == Enforcement::Acknowledged {
        warn!(
            correlation_id = %correlation_id,
            employee_id = %candidate.employee_id,
            shift_id = %candidate.id,
            "Hard block overridden by manager"
        );
    }
    info!(
        correlation_id = %correlation_id,
        employee_id = %candidate.employee_id,
        shift_id = %candidate.id,
        violations = outcome.violations.len(),
        enforcement = ?enforcement,
        duration_us = duration.as_micros(),
        "Candidate validation completed"
    );

    let report = build_report(&candidate.employee_id, outcome, Some(enforcement), duration);
    json_response(StatusCode::OK, report)
}

/// Request overrides win over the organization's configured thresholds.
fn effective_rules<'a>(requested: Option<&'a WorkRule>, configured: &'a WorkRule) -> &'a WorkRule {
    requested.unwrap_or(configured)
}

fn build_report(
    employee_id: &str,
    outcome: ValidationOutcome,
    enforcement: Option<Enforcement>,
    duration: Duration,
) -> ValidationReport {
    let messages = legacy_messages(&outcome.violations);
    ValidationReport {
        validation_id: Uuid::new_v4(),
        timestamp: Utc::now(),
        engine_version: env!("CARGO_PKG_VERSION").to_string(),
        employee_id: employee_id.to_string(),
        month: outcome.month,
        year: outcome.year,
        violations: outcome.violations,
        messages,
        enforcement,
        audit_trace: AuditTrace {
            steps: outcome.audit_steps,
            duration_us: duration.as_micros() as u64,
        },
    }
}

fn json_response<T: serde::Serialize>(status: StatusCode, body: T) -> Response {
    (
        status,
        [(header::CONTENT_TYPE, "application/json")],
        Json(body),
    )
        .into_response()
}

fn engine_error_response(correlation_id: Uuid, err: EngineError) -> Response {
    warn!(
        correlation_id = %correlation_id,
        error = %err,
        "Validation request rejected"
    );
    let api_error: ApiErrorResponse = err.into();
    json_response(api_error.status, api_error.error)
}

/// Maps JSON extraction failures to API errors.
fn rejection_response(correlation_id: Uuid, rejection: JsonRejection) -> Response {
    let error = match rejection {
        JsonRejection::JsonDataError(err) => {
            // The body text carries serde's detailed message
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
        JsonRejection::MissingJsonContentType(_) => ApiError::missing_content_type(),
        _ => ApiError::malformed_json("Failed to parse request body"),
    };
    json_response(StatusCode::BAD_REQUEST, error)
}
