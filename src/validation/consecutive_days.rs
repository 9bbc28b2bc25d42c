//! Consecutive working days rule.
//!
//! Scans the previous calendar month through the target month and measures
//! the longest run of worked days. A run of 7 or more is a hard block (the
//! weekly rest day was skipped); a run above the configured
//! `max_consecutive_days` but below 7 is a soft warning.

use chrono::NaiveDate;
use rust_decimal::Decimal;

use super::calendar::build_day_window;
use super::work_day::{longest_run, work_days};
use crate::models::{AuditStep, Severity, Shift, Violation, ViolationCode, WorkRule};

/// Streak length at which consecutive working days become a hard block.
pub const HARD_BLOCK_CONSECUTIVE_DAYS: u32 = 7;

/// Months scanned before the target month.
pub const CONSECUTIVE_DAYS_MONTHS_BACK: u32 = 1;

const CLAUSE_REF: &str = "CLT art. 67";

/// The outcome of the consecutive working days rule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConsecutiveDaysResult {
    /// The longest run of worked days in the window.
    pub max_streak: u32,
    /// The last day of that run, if any day was worked.
    pub streak_end: Option<NaiveDate>,
    /// The violation raised, if any.
    pub violation: Option<Violation>,
    /// The audit step recording this evaluation.
    pub audit_step: AuditStep,
}

/// Returns the longest run of consecutive worked days from the start of the
/// previous month through the end of `month/year`.
///
/// `shifts` must belong to a single employee.
///
/// # Example
///
/// ```
/// use shift_rules_engine::models::{Shift, ShiftType};
/// use shift_rules_engine::validation::count_consecutive_work_days;
/// use chrono::{Duration, NaiveDate};
///
/// let start = NaiveDate::from_ymd_opt(2026, 3, 2).unwrap();
/// let shifts: Vec<Shift> = (0..5)
///     .map(|offset| Shift {
///         id: format!("shift_{}", offset),
///         employee_id: "emp_001".to_string(),
///         date: start + Duration::days(offset),
///         start_time: "08:00".to_string(),
///         end_time: "16:00".to_string(),
///         shift_type: ShiftType::Work,
///         description: None,
///         manager_override: false,
///     })
///     .collect();
///
/// assert_eq!(count_consecutive_work_days(&shifts, 3, 2026), 5);
/// ```
pub fn count_consecutive_work_days(shifts: &[Shift], month: u32, year: i32) -> u32 {
    longest_streak(shifts, month, year).0
}

fn longest_streak(shifts: &[Shift], month: u32, year: i32) -> (u32, Option<NaiveDate>) {
    let window = build_day_window(month, year, CONSECUTIVE_DAYS_MONTHS_BACK);
    longest_run(window, &work_days(shifts))
}

/// Evaluates the consecutive working days rule and classifies its severity.
///
/// # Arguments
///
/// * `shifts` - The employee's shift history (any order)
/// * `month` - Target month (1-12)
/// * `year` - Target year
/// * `rules` - Work-rule thresholds; `max_consecutive_days` sets the warning level
/// * `step_number` - The step number for audit trail sequencing
pub fn evaluate_consecutive_days(
    shifts: &[Shift],
    month: u32,
    year: i32,
    rules: &WorkRule,
    step_number: u32,
) -> ConsecutiveDaysResult {
    let (max_streak, streak_end) = longest_streak(shifts, month, year);
    let ending = streak_end
        .map(|date| date.format("%d/%m/%Y").to_string())
        .unwrap_or_default();

    let violation = if max_streak >= HARD_BLOCK_CONSECUTIVE_DAYS {
        Some(Violation {
            code: ViolationCode::ConsecutiveDays,
            severity: Severity::Block,
            message: format!(
                "{} dias consecutivos de trabalho até {} (máximo legal {})",
                max_streak,
                ending,
                HARD_BLOCK_CONSECUTIVE_DAYS - 1
            ),
            observed: Decimal::from(max_streak),
            limit: Decimal::from(HARD_BLOCK_CONSECUTIVE_DAYS - 1),
        })
    } else if max_streak > rules.max_consecutive_days {
        Some(Violation {
            code: ViolationCode::ConsecutiveDays,
            severity: Severity::Warning,
            message: format!(
                "{} dias consecutivos de trabalho até {} (máximo configurado {})",
                max_streak, ending, rules.max_consecutive_days
            ),
            observed: Decimal::from(max_streak),
            limit: Decimal::from(rules.max_consecutive_days),
        })
    } else {
        None
    };

    let reasoning = match &violation {
        Some(v) if v.is_hard_block() => format!(
            "Longest streak of {} worked days reaches the hard limit of {}",
            max_streak, HARD_BLOCK_CONSECUTIVE_DAYS
        ),
        Some(_) => format!(
            "Longest streak of {} worked days exceeds the configured maximum of {}",
            max_streak, rules.max_consecutive_days
        ),
        None => format!(
            "Longest streak of {} worked days is within the configured maximum of {}",
            max_streak, rules.max_consecutive_days
        ),
    };

    let audit_step = AuditStep {
        step_number,
        rule_id: "consecutive_work_days".to_string(),
        rule_name: "Consecutive Working Days".to_string(),
        clause_ref: CLAUSE_REF.to_string(),
        input: serde_json::json!({
            "month": month,
            "year": year,
            "months_back": CONSECUTIVE_DAYS_MONTHS_BACK,
            "max_consecutive_days": rules.max_consecutive_days,
        }),
        output: serde_json::json!({
            "max_streak": max_streak,
            "streak_end": streak_end,
            "severity": violation.as_ref().map(|v| v.severity),
        }),
        reasoning,
    };

    ConsecutiveDaysResult {
        max_streak,
        streak_end,
        violation,
        audit_step,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ShiftType;
    use chrono::Duration;

    fn make_date(date_str: &str) -> NaiveDate {
        NaiveDate::parse_from_str(date_str, "%Y-%m-%d").unwrap()
    }

    fn make_shift(date: NaiveDate, shift_type: ShiftType) -> Shift {
        Shift {
            id: format!("shift_{}", date),
            employee_id: "emp_001".to_string(),
            date,
            start_time: "08:00".to_string(),
            end_time: "16:00".to_string(),
            shift_type,
            description: None,
            manager_override: false,
        }
    }

    fn work_run(start: &str, days: i64) -> Vec<Shift> {
        let start = make_date(start);
        (0..days)
            .map(|offset| make_shift(start + Duration::days(offset), ShiftType::Work))
            .collect()
    }

    // ==========================================================================
    // CD-001: N consecutive days followed by a break returns N
    // ==========================================================================
    #[test]
    fn test_cd_001_streak_of_n_days() {
        let mut shifts = work_run("2026-03-02", 5);
        shifts.push(make_shift(make_date("2026-03-07"), ShiftType::DayOff));
        shifts.extend(work_run("2026-03-08", 3));

        assert_eq!(count_consecutive_work_days(&shifts, 3, 2026), 5);
    }

    // ==========================================================================
    // CD-002: streak carried over from the previous month
    // ==========================================================================
    #[test]
    fn test_cd_002_streak_crosses_month_boundary() {
        let shifts = work_run("2026-02-25", 8); // Feb 25 .. Mar 4

        let result = evaluate_consecutive_days(&shifts, 3, 2026, &WorkRule::default(), 1);
        assert_eq!(result.max_streak, 8);
        assert_eq!(result.streak_end, Some(make_date("2026-03-04")));
        assert!(result.violation.unwrap().is_hard_block());
    }

    // ==========================================================================
    // CD-003: streak older than the window is ignored
    // ==========================================================================
    #[test]
    fn test_cd_003_days_before_window_are_ignored() {
        let shifts = work_run("2026-01-10", 10);
        assert_eq!(count_consecutive_work_days(&shifts, 3, 2026), 0);
    }

    // ==========================================================================
    // CD-004: six days is within the default rules
    // ==========================================================================
    #[test]
    fn test_cd_004_six_days_no_violation() {
        let shifts = work_run("2026-03-02", 6);

        let result = evaluate_consecutive_days(&shifts, 3, 2026, &WorkRule::default(), 1);
        assert_eq!(result.max_streak, 6);
        assert!(result.violation.is_none());
    }

    // ==========================================================================
    // CD-005: seven days is a hard block
    // ==========================================================================
    #[test]
    fn test_cd_005_seven_days_hard_block() {
        let shifts = work_run("2026-03-02", 7);

        let result = evaluate_consecutive_days(&shifts, 3, 2026, &WorkRule::default(), 1);
        let violation = result.violation.unwrap();
        assert_eq!(violation.severity, Severity::Block);
        assert_eq!(violation.code, ViolationCode::ConsecutiveDays);
        assert_eq!(violation.observed, Decimal::from(7));
        assert!(violation.to_string().starts_with("BLOQUEADO:"));
        assert!(violation.message.contains("08/03/2026"));
    }

    // ==========================================================================
    // CD-006: above configured maximum but below 7 is a warning
    // ==========================================================================
    #[test]
    fn test_cd_006_soft_warning_below_hard_limit() {
        let rules = WorkRule {
            max_consecutive_days: 4,
            ..WorkRule::default()
        };
        let shifts = work_run("2026-03-02", 5);

        let result = evaluate_consecutive_days(&shifts, 3, 2026, &rules, 1);
        let violation = result.violation.unwrap();
        assert_eq!(violation.severity, Severity::Warning);
        assert_eq!(violation.limit, Decimal::from(4));
        assert!(!violation.to_string().contains("BLOQUEADO"));
    }

    #[test]
    fn test_hard_block_applies_even_with_lenient_rules() {
        let rules = WorkRule {
            max_consecutive_days: 10,
            ..WorkRule::default()
        };
        let shifts = work_run("2026-03-02", 8);

        let result = evaluate_consecutive_days(&shifts, 3, 2026, &rules, 1);
        assert!(result.violation.unwrap().is_hard_block());
    }

    #[test]
    fn test_leave_types_break_the_streak() {
        let mut shifts = work_run("2026-03-02", 4);
        shifts.push(make_shift(make_date("2026-03-06"), ShiftType::Vacation));
        shifts.extend(work_run("2026-03-07", 4));

        assert_eq!(count_consecutive_work_days(&shifts, 3, 2026), 4);
    }

    #[test]
    fn test_double_shift_day_counts_once() {
        let mut shifts = work_run("2026-03-02", 3);
        shifts.push(make_shift(make_date("2026-03-03"), ShiftType::Work));

        assert_eq!(count_consecutive_work_days(&shifts, 3, 2026), 3);
    }

    #[test]
    fn test_no_history_is_zero() {
        let result = evaluate_consecutive_days(&[], 3, 2026, &WorkRule::default(), 1);
        assert_eq!(result.max_streak, 0);
        assert_eq!(result.streak_end, None);
        assert!(result.violation.is_none());
    }

    #[test]
    fn test_audit_step_records_streak() {
        let shifts = work_run("2026-03-02", 7);

        let result = evaluate_consecutive_days(&shifts, 3, 2026, &WorkRule::default(), 2);
        assert_eq!(result.audit_step.step_number, 2);
        assert_eq!(result.audit_step.rule_id, "consecutive_work_days");
        assert_eq!(result.audit_step.clause_ref, "CLT art. 67");
        assert_eq!(result.audit_step.output["max_streak"], 7);
        assert_eq!(result.audit_step.output["streak_end"], "2026-03-08");
        assert_eq!(result.audit_step.output["severity"], "block");
    }
}
