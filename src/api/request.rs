//! Request types for the Shift Rules Engine API.
//!
//! This module defines the JSON request structures for the `/validate` and
//! `/validate/candidate` endpoints.

use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};
use crate::models::{Shift, WorkRule};

/// Request body for the `/validate` endpoint.
///
/// Validates an employee's saved shifts for one month.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExistingValidationRequest {
    /// The employee whose shifts are validated.
    pub employee_id: String,
    /// Target month (1-12).
    pub month: u32,
    /// Target year.
    pub year: i32,
    /// Shift history covering at least the months the rules look back on.
    pub shifts: Vec<Shift>,
    /// Thresholds overriding the organization's configured rules.
    #[serde(default)]
    pub rules: Option<WorkRule>,
}

impl ExistingValidationRequest {
    /// Checks the target period and any rule overrides.
    pub fn validate(&self) -> EngineResult<()> {
        if !(1..=12).contains(&self.month) {
            return Err(EngineError::InvalidPeriod {
                month: self.month,
                year: self.year,
            });
        }
        if let Some(rules) = &self.rules {
            rules.validate()?;
        }
        Ok(())
    }
}

/// Request body for the `/validate/candidate` endpoint.
///
/// Validates a shift before it is saved.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CandidateValidationRequest {
    /// The shift about to be saved.
    pub candidate: Shift,
    /// The employee's existing shifts.
    pub shifts: Vec<Shift>,
    /// Thresholds overriding the organization's configured rules.
    #[serde(default)]
    pub rules: Option<WorkRule>,
}

impl CandidateValidationRequest {
    /// Checks the candidate and any rule overrides.
    pub fn validate(&self) -> EngineResult<()> {
        if self.candidate.employee_id.trim().is_empty() {
            return Err(EngineError::InvalidShift {
                shift_id: self.candidate.id.clone(),
                message: "employee_id must not be empty".to_string(),
            });
        }
        if let Some(rules) = &self.rules {
            rules.validate()?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_existing_request() {
        let json = r#"{
            "employee_id": "emp_001",
            "month": 3,
            "year": 2026,
            "shifts": [
                {
                    "id": "shift_001",
                    "employee_id": "emp_001",
                    "date": "2026-03-02",
                    "start_time": "08:00",
                    "end_time": "16:00",
                    "type": "work"
                }
            ]
        }"#;

        let request: ExistingValidationRequest = serde_json::from_str(json).unwrap();
        assert_eq!(request.shifts.len(), 1);
        assert!(request.rules.is_none());
        assert!(request.validate().is_ok());
    }

    #[test]
    fn test_month_out_of_range_is_invalid() {
        let request = ExistingValidationRequest {
            employee_id: "emp_001".to_string(),
            month: 13,
            year: 2026,
            shifts: vec![],
            rules: None,
        };
        assert!(matches!(
            request.validate(),
            Err(EngineError::InvalidPeriod { month: 13, .. })
        ));
    }

    #[test]
    fn test_invalid_rule_override_is_rejected() {
        let request = ExistingValidationRequest {
            employee_id: "emp_001".to_string(),
            month: 3,
            year: 2026,
            shifts: vec![],
            rules: Some(WorkRule {
                max_consecutive_days: 0,
                ..WorkRule::default()
            }),
        };
        assert!(matches!(
            request.validate(),
            Err(EngineError::InvalidWorkRule { .. })
        ));
    }

    #[test]
    fn test_candidate_without_employee_is_invalid() {
        let json = r#"{
            "candidate": {
                "id": "new",
                "employee_id": " ",
                "date": "2026-03-08",
                "type": "work"
            },
            "shifts": []
        }"#;

        let request: CandidateValidationRequest = serde_json::from_str(json).unwrap();
        assert!(matches!(
            request.validate(),
            Err(EngineError::InvalidShift { .. })
        ));
    }
}
