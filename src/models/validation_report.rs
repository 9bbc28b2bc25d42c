//! Validation report models.
//!
//! This module contains the [`ValidationReport`] returned by the HTTP layer,
//! the [`Enforcement`] decision derived from a violation list, and the audit
//! trace that records what each rule evaluator measured.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::Violation;

/// Whether the caller may save, given the violations and the override flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Enforcement {
    /// No violations.
    Allowed,
    /// Only soft warnings; saving is allowed with a warning banner.
    Warned,
    /// Hard blocks present but overridden by a manager.
    Acknowledged,
    /// Hard blocks present and not overridden.
    Blocked,
}

impl Enforcement {
    /// Returns true unless the decision is [`Enforcement::Blocked`].
    pub fn is_save_allowed(self) -> bool {
        self != Enforcement::Blocked
    }
}

/// A single step in the audit trace recording one evaluator run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditStep {
    /// The sequential step number.
    pub step_number: u32,
    /// The unique identifier of the rule that was evaluated.
    pub rule_id: String,
    /// The human-readable name of the rule.
    pub rule_name: String,
    /// Reference to the legal provision behind the rule.
    pub clause_ref: String,
    /// The input data for this step.
    pub input: serde_json::Value,
    /// The output data from this step.
    pub output: serde_json::Value,
    /// Human-readable explanation of the outcome.
    pub reasoning: String,
}

/// The complete audit trace for a validation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditTrace {
    /// The evaluator steps, in execution order.
    pub steps: Vec<AuditStep>,
    /// The total validation duration in microseconds.
    pub duration_us: u64,
}

/// The result of validating one employee's schedule.
///
/// # Example
///
/// ```
/// use shift_rules_engine::models::{AuditTrace, ValidationReport};
/// use chrono::Utc;
/// use uuid::Uuid;
///
/// let report = ValidationReport {
///     validation_id: Uuid::new_v4(),
///     timestamp: Utc::now(),
///     engine_version: "0.1.0".to_string(),
///     employee_id: "emp_001".to_string(),
///     month: 3,
///     year: 2026,
///     violations: vec![],
///     messages: vec![],
///     enforcement: None,
///     audit_trace: AuditTrace { steps: vec![], duration_us: 0 },
/// };
/// assert!(!report.has_hard_block());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationReport {
    /// Unique identifier for this validation.
    pub validation_id: Uuid,
    /// When the validation was performed.
    pub timestamp: DateTime<Utc>,
    /// The version of the engine that performed the validation.
    pub engine_version: String,
    /// The employee whose shifts were validated.
    pub employee_id: String,
    /// Target month (1-12).
    pub month: u32,
    /// Target year.
    pub year: i32,
    /// Structured violations.
    pub violations: Vec<Violation>,
    /// The same violations rendered as legacy strings.
    pub messages: Vec<String>,
    /// Save decision; only set when validating a candidate shift.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enforcement: Option<Enforcement>,
    /// Evaluator audit trace.
    pub audit_trace: AuditTrace,
}

impl ValidationReport {
    /// Returns true if any violation is a hard block.
    pub fn has_hard_block(&self) -> bool {
        self.violations.iter().any(Violation::is_hard_block)
    }
}
