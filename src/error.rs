//! Error types for the Shift Rules Engine.
//!
//! The rule evaluators themselves never fail. These errors cover the fallible
//! edges around them: configuration loading and request validation.

use thiserror::Error;

/// The main error type for the Shift Rules Engine.
///
/// # Example
///
/// ```
/// use shift_rules_engine::error::EngineError;
///
/// let error = EngineError::ConfigNotFound {
///     path: "/missing/work_rules.yaml".to_string(),
/// };
/// assert_eq!(error.to_string(), "Configuration file not found: /missing/work_rules.yaml");
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// The employee is not part of the organization's roster.
    #[error("Employee not found: {employee_id}")]
    EmployeeNotFound {
        /// The employee ID that was not found.
        employee_id: String,
    },

    /// An employee record was invalid or cannot be scheduled.
    #[error("Invalid employee '{employee_id}': {message}")]
    InvalidEmployee {
        /// The ID of the employee.
        employee_id: String,
        /// A description of what made the employee invalid.
        message: String,
    },

    /// The requested month/year does not form a calendar month.
    #[error("Invalid period {month}/{year}: month must be between 1 and 12")]
    InvalidPeriod {
        /// The requested month.
        month: u32,
        /// The requested year.
        year: i32,
    },

    /// A shift was invalid or contained inconsistent data.
    #[error("Invalid shift '{shift_id}': {message}")]
    InvalidShift {
        /// The ID of the invalid shift.
        shift_id: String,
        /// A description of what made the shift invalid.
        message: String,
    },

    /// A work-rule threshold was outside its allowed range.
    #[error("Invalid work rule field '{field}': {message}")]
    InvalidWorkRule {
        /// The field that was invalid.
        field: String,
        /// A description of what made the field invalid.
        message: String,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;
