//! HTTP API module for the Shift Rules Engine.
//!
//! This module provides the REST API endpoints for validating an employee's
//! schedule against the organization's work rules.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::{CandidateValidationRequest, ExistingValidationRequest};
pub use response::{ApiError, ApiErrorResponse};
pub use state::AppState;
