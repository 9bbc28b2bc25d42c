//! Validation orchestrator.
//!
//! Runs the three rule evaluators for one employee and collects their
//! violations in a fixed order: consecutive days, consecutive Sundays, rest
//! between shifts. Every entry point is a pure function of its inputs.

use chrono::Datelike;
use tracing::debug;

use super::consecutive_days::evaluate_consecutive_days;
use super::consecutive_sundays::evaluate_consecutive_sundays;
use super::rest_period::evaluate_rest_periods;
use crate::models::{AuditStep, Shift, Violation, WorkRule};

/// Violations and audit steps from one validation run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationOutcome {
    /// Target month (1-12) the rules were evaluated for.
    pub month: u32,
    /// Target year.
    pub year: i32,
    /// All violations, in evaluator order.
    pub violations: Vec<Violation>,
    /// One audit step per evaluator.
    pub audit_steps: Vec<AuditStep>,
}

/// Runs every rule evaluator over a single employee's shifts.
pub fn run_rules(shifts: &[Shift], month: u32, year: i32, rules: &WorkRule) -> ValidationOutcome {
    let days = evaluate_consecutive_days(shifts, month, year, rules, 1);
    let sundays = evaluate_consecutive_sundays(shifts, month, year, rules, 2);
    let rest = evaluate_rest_periods(shifts, month, year, 3);

    debug!(
        month,
        year,
        shifts = shifts.len(),
        max_consecutive_days = days.max_streak,
        max_consecutive_sundays = sundays.max_streak,
        rest_violations = rest.violations.len(),
        "Evaluated work rules"
    );

    let violations = days
        .violation
        .into_iter()
        .chain(sundays.violation)
        .chain(rest.violations)
        .collect();

    ValidationOutcome {
        month,
        year,
        violations,
        audit_steps: vec![days.audit_step, sundays.audit_step, rest.audit_step],
    }
}

/// Validates already-persisted shifts of `employee_id` for `month/year`,
/// keeping the audit steps.
pub fn assess_existing(
    all_shifts: &[Shift],
    employee_id: &str,
    month: u32,
    year: i32,
    rules: &WorkRule,
) -> ValidationOutcome {
    let shifts: Vec<Shift> = all_shifts
        .iter()
        .filter(|shift| shift.employee_id == employee_id)
        .cloned()
        .collect();
    run_rules(&shifts, month, year, rules)
}

/// Validates already-persisted shifts of `employee_id` for `month/year`.
///
/// Shifts of other employees in `all_shifts` are ignored. An employee with
/// no history has no violations.
///
/// # Example
///
/// ```
/// use shift_rules_engine::models::WorkRule;
/// use shift_rules_engine::validation::validate_existing;
///
/// let violations = validate_existing(&[], "emp_001", 3, 2026, &WorkRule::default());
/// assert!(violations.is_empty());
/// ```
pub fn validate_existing(
    all_shifts: &[Shift],
    employee_id: &str,
    month: u32,
    year: i32,
    rules: &WorkRule,
) -> Vec<Violation> {
    assess_existing(all_shifts, employee_id, month, year, rules).violations
}

/// Validates a not-yet-saved shift against existing history, keeping the
/// audit steps.
pub fn assess_hypothetical(
    candidate: &Shift,
    existing_shifts: &[Shift],
    rules: &WorkRule,
) -> ValidationOutcome {
    let mut shifts: Vec<Shift> = existing_shifts
        .iter()
        .filter(|shift| shift.employee_id == candidate.employee_id && shift.is_work())
        // The row being edited is replaced by the candidate.
        .filter(|shift| candidate.id.is_empty() || shift.id != candidate.id)
        .cloned()
        .collect();
    shifts.push(candidate.clone());

    run_rules(&shifts, candidate.date.month(), candidate.date.year(), rules)
}

/// Validates a not-yet-saved shift against the employee's existing shifts.
///
/// The candidate's employee and date select the history and the target
/// month. An existing row with the same id as the candidate is treated as
/// the row being edited and left out.
///
/// # Example
///
/// ```
/// use shift_rules_engine::models::{Shift, ShiftType, WorkRule};
/// use shift_rules_engine::validation::validate_hypothetical;
/// use chrono::{Duration, NaiveDate};
///
/// let start = NaiveDate::from_ymd_opt(2026, 3, 2).unwrap();
/// let make = |offset: i64| Shift {
///     id: format!("shift_{}", offset),
///     employee_id: "emp_001".to_string(),
///     date: start + Duration::days(offset),
///     start_time: "08:00".to_string(),
///     end_time: "16:00".to_string(),
///     shift_type: ShiftType::Work,
///     description: None,
///     manager_override: false,
/// };
/// let existing: Vec<Shift> = (0..6).map(make).collect();
///
/// let violations = validate_hypothetical(&make(6), &existing, &WorkRule::default());
/// assert!(violations[0].to_string().contains("BLOQUEADO"));
/// ```
pub fn validate_hypothetical(
    candidate: &Shift,
    existing_shifts: &[Shift],
    rules: &WorkRule,
) -> Vec<Violation> {
    assess_hypothetical(candidate, existing_shifts, rules).violations
}

/// Renders violations in the legacy string form.
pub fn legacy_messages(violations: &[Violation]) -> Vec<String> {
    violations.iter().map(ToString::to_string).collect()
}
