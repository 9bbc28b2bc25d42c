//! Error responses for the Shift Rules Engine API.
//!
//! Every failure leaves the API as `{ code, message, details? }`. Engine
//! errors map to a status and code through [`ApiErrorResponse::from`];
//! JSON extraction failures use the constructors on [`ApiError`].

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};

use crate::error::EngineError;

/// Error body returned by every endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    /// Stable machine-readable code, e.g. `INVALID_PERIOD`.
    pub code: String,
    /// Human-readable message.
    pub message: String,
    /// Hint about how to correct the request.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ApiError {
    fn bare(code: &str, message: impl Into<String>) -> Self {
        Self {
            code: code.to_string(),
            message: message.into(),
            details: None,
        }
    }

    /// A required field is missing from the request body.
    pub fn validation_error(message: impl Into<String>) -> Self {
        Self::bare("VALIDATION_ERROR", message)
    }

    /// The request body is not valid JSON or has the wrong shape.
    pub fn malformed_json(message: impl Into<String>) -> Self {
        Self::bare("MALFORMED_JSON", message)
    }

    /// The request was not sent as `application/json`.
    pub fn missing_content_type() -> Self {
        Self::bare(
            "MISSING_CONTENT_TYPE",
            "Content-Type must be application/json",
        )
    }
}

/// An [`ApiError`] paired with its HTTP status.
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
        let (status, code, details) = match &error {
            EngineError::ConfigNotFound { .. } | EngineError::ConfigParseError { .. } => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "CONFIG_ERROR",
                "The organization configuration could not be loaded",
            ),
            EngineError::EmployeeNotFound { .. } => (
                StatusCode::BAD_REQUEST,
                "EMPLOYEE_NOT_FOUND",
                "The employee is not on this organization's roster",
            ),
            EngineError::InvalidEmployee { .. } => (
                StatusCode::BAD_REQUEST,
                "INVALID_EMPLOYEE",
                "Shifts can only be validated for active employees",
            ),
            EngineError::InvalidPeriod { .. } => (
                StatusCode::BAD_REQUEST,
                "INVALID_PERIOD",
                "Send month as 1-12",
            ),
            EngineError::InvalidShift { .. } => (
                StatusCode::BAD_REQUEST,
                "INVALID_SHIFT",
                "Every shift needs an employee_id",
            ),
            EngineError::InvalidWorkRule { .. } => (
                StatusCode::BAD_REQUEST,
                "INVALID_WORK_RULE",
                "Omit rules to use the organization's configured thresholds",
            ),
        };

        ApiErrorResponse {
            status,
            error: ApiError {
                code: code.to_string(),
                message: error.to_string(),
                details: Some(details.to_string()),
            },
        }
    }
}
