//! Minimum rest between shifts (interjornada).
//!
//! Two working shifts on different dates must be separated by at least 11
//! hours of rest. Shifts are taken from the previous month through the next
//! month relative to the target month and checked pairwise in date order.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use tracing::debug;

use super::calendar::{month_bounds, shift_month};
use crate::models::{AuditStep, Severity, Shift, Violation, ViolationCode};

/// Minimum rest between two shifts, in hours.
pub const MIN_REST_HOURS: Decimal = Decimal::from_parts(11, 0, 0, false, 0);

const CLAUSE_REF: &str = "CLT art. 66";

/// The outcome of the interjornada rule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RestPeriodResult {
    /// One violation per adjacent pair with insufficient rest.
    pub violations: Vec<Violation>,
    /// Number of adjacent pairs whose gap was measured.
    pub pairs_checked: u32,
    /// Number of adjacent pairs skipped (same date, malformed time, or negative gap).
    pub pairs_skipped: u32,
    /// The audit step recording this evaluation.
    pub audit_step: AuditStep,
}

/// Returns the rest in hours between the end of `first` and the start of `second`.
///
/// `None` when either relevant time is not a valid `HH:MM`. The result is
/// negative when the shifts overlap or are out of order.
///
/// # Example
///
/// ```
/// use shift_rules_engine::models::{Shift, ShiftType};
/// use shift_rules_engine::validation::rest_gap_hours;
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// let make = |day: u32, start: &str, end: &str| Shift {
///     id: format!("shift_{}", day),
///     employee_id: "emp_001".to_string(),
///     date: NaiveDate::from_ymd_opt(2026, 3, day).unwrap(),
///     start_time: start.to_string(),
///     end_time: end.to_string(),
///     shift_type: ShiftType::Work,
///     description: None,
///     manager_override: false,
/// };
///
/// let gap = rest_gap_hours(&make(10, "14:00", "22:00"), &make(11, "05:00", "13:00"));
/// assert_eq!(gap, Some(Decimal::new(7, 0)));
/// ```
pub fn rest_gap_hours(first: &Shift, second: &Shift) -> Option<Decimal> {
    let rest = second.start_instant()? - first.end_instant()?;
    Some(Decimal::from(rest.num_minutes()) / Decimal::from(60))
}

/// Returns the inclusive date range scanned for `month/year`.
pub fn rest_window(month: u32, year: i32) -> Option<(NaiveDate, NaiveDate)> {
    let (prev_month, prev_year) = shift_month(month, year, -1);
    let (next_month, next_year) = shift_month(month, year, 1);
    month_bounds(month, year)?;
    let (start, _) = month_bounds(prev_month, prev_year)?;
    let (_, end) = month_bounds(next_month, next_year)?;
    Some((start, end))
}

/// Returns the interjornada violations for `month/year`.
///
/// `shifts` must belong to a single employee.
pub fn find_rest_violations(shifts: &[Shift], month: u32, year: i32) -> Vec<Violation> {
    evaluate_rest_periods(shifts, month, year, 0).violations
}

/// Evaluates the interjornada rule.
///
/// # Arguments
///
/// * `shifts` - The employee's shift history (any order)
/// * `month` - Target month (1-12)
/// * `year` - Target year
/// * `step_number` - The step number for audit trail sequencing
///
/// # Behavior
///
/// - Only `work` shifts inside the window take part
/// - Shifts are ordered by date; same-date shifts keep their input order
/// - Adjacent shifts on the same date are never compared
/// - A pair with a malformed time or a negative gap is skipped
/// - A gap of at least 0 and under 11 hours is a blocking violation
pub fn evaluate_rest_periods(
    shifts: &[Shift],
    month: u32,
    year: i32,
    step_number: u32,
) -> RestPeriodResult {
    let mut violations = Vec::new();
    let mut pairs_checked = 0;
    let mut pairs_skipped = 0;

    let window = rest_window(month, year);
    let mut work: Vec<&Shift> = match window {
        Some((start, end)) => shifts
            .iter()
            .filter(|shift| shift.is_work() && shift.date >= start && shift.date <= end)
            .collect(),
        None => Vec::new(),
    };
    work.sort_by_key(|shift| shift.date);

    for pair in work.windows(2) {
        let (first, second) = (pair[0], pair[1]);

        if first.date == second.date {
            pairs_skipped += 1;
            continue;
        }

        let Some(gap) = rest_gap_hours(first, second) else {
            pairs_skipped += 1;
            continue;
        };

        if gap < Decimal::ZERO {
            debug!(
                employee_id = %first.employee_id,
                first_shift = %first.id,
                second_shift = %second.id,
                gap_hours = %gap.round_dp(2),
                "Skipping overlapping shifts in rest check"
            );
            pairs_skipped += 1;
            continue;
        }

        pairs_checked += 1;
        if gap < MIN_REST_HOURS {
            violations.push(Violation {
                code: ViolationCode::InsufficientRest,
                severity: Severity::Block,
                message: format!(
                    "Interjornada de {:.1}h entre {} {} e {} {} (mínimo {}h)",
                    gap.round_dp(1),
                    first.date.format("%d/%m/%Y"),
                    first.end_time.trim(),
                    second.date.format("%d/%m/%Y"),
                    second.start_time.trim(),
                    MIN_REST_HOURS
                ),
                observed: gap.round_dp(2),
                limit: MIN_REST_HOURS,
            });
        }
    }

    let reasoning = if violations.is_empty() {
        format!(
            "All {} measured gaps between work shifts are at least {} hours",
            pairs_checked, MIN_REST_HOURS
        )
    } else {
        format!(
            "{} of {} measured gaps between work shifts are under {} hours",
            violations.len(),
            pairs_checked,
            MIN_REST_HOURS
        )
    };

    let audit_step = AuditStep {
        step_number,
        rule_id: "interjornada".to_string(),
        rule_name: "Minimum Rest Between Shifts".to_string(),
        clause_ref: CLAUSE_REF.to_string(),
        input: serde_json::json!({
            "month": month,
            "year": year,
            "window_start": window.map(|(start, _)| start),
            "window_end": window.map(|(_, end)| end),
            "work_shifts": work.len(),
            "min_rest_hours": MIN_REST_HOURS.to_string(),
        }),
        output: serde_json::json!({
            "pairs_checked": pairs_checked,
            "pairs_skipped": pairs_skipped,
            "violations": violations.len(),
        }),
        reasoning,
    };

    RestPeriodResult {
        violations,
        pairs_checked,
        pairs_skipped,
        audit_step,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ShiftType;

    fn make_date(date_str: &str) -> NaiveDate {
        NaiveDate::parse_from_str(date_str, "%Y-%m-%d").unwrap()
    }

    fn make_shift(id: &str, date: &str, start: &str, end: &str) -> Shift {
        Shift {
            id: id.to_string(),
            employee_id: "emp_001".to_string(),
            date: make_date(date),
            start_time: start.to_string(),
            end_time: end.to_string(),
            shift_type: ShiftType::Work,
            description: None,
            manager_override: false,
        }
    }

    fn dec(value: i64, scale: u32) -> Decimal {
        Decimal::new(value, scale)
    }

    // ==========================================================================
    // IJ-001: 22:00 end, 05:00 next-day start is 7 hours
    // ==========================================================================
    #[test]
    fn test_ij_001_seven_hour_gap_is_violation() {
        let shifts = vec![
            make_shift("s1", "2026-03-10", "14:00", "22:00"),
            make_shift("s2", "2026-03-11", "05:00", "13:00"),
        ];

        let violations = find_rest_violations(&shifts, 3, 2026);
        assert_eq!(violations.len(), 1);
        let violation = &violations[0];
        assert_eq!(violation.code, ViolationCode::InsufficientRest);
        assert_eq!(violation.observed, dec(7, 0));
        assert_eq!(violation.limit, dec(11, 0));
        assert!(violation.message.contains("7.0h"));
        assert!(violation.message.contains("10/03/2026 22:00"));
        assert!(violation.message.contains("11/03/2026 05:00"));
        assert!(violation.is_hard_block());
    }

    // ==========================================================================
    // IJ-002: 17:00 end, 08:00 next-day start is 15 hours
    // ==========================================================================
    #[test]
    fn test_ij_002_fifteen_hour_gap_is_fine() {
        let shifts = vec![
            make_shift("s1", "2026-03-10", "08:00", "17:00"),
            make_shift("s2", "2026-03-11", "08:00", "17:00"),
        ];

        let result = evaluate_rest_periods(&shifts, 3, 2026, 1);
        assert!(result.violations.is_empty());
        assert_eq!(result.pairs_checked, 1);
    }

    // ==========================================================================
    // IJ-003: same-date shifts are never compared
    // ==========================================================================
    #[test]
    fn test_ij_003_same_day_double_shift_is_skipped() {
        let shifts = vec![
            make_shift("s1", "2026-03-10", "06:00", "10:00"),
            make_shift("s2", "2026-03-10", "11:00", "15:00"),
        ];

        let result = evaluate_rest_periods(&shifts, 3, 2026, 1);
        assert!(result.violations.is_empty());
        assert_eq!(result.pairs_checked, 0);
        assert_eq!(result.pairs_skipped, 1);
    }

    // ==========================================================================
    // IJ-004: overnight shift end rolls into the next day
    // ==========================================================================
    #[test]
    fn test_ij_004_overnight_shift_reduces_rest() {
        // Ends 2026-03-11 06:00, next starts 2026-03-11 14:00: 8 hours
        let shifts = vec![
            make_shift("s1", "2026-03-10", "22:00", "06:00"),
            make_shift("s2", "2026-03-11", "14:00", "22:00"),
        ];

        let violations = find_rest_violations(&shifts, 3, 2026);
        assert_eq!(violations.len(), 1);
        assert_eq!(violations[0].observed, dec(8, 0));
    }

    // ==========================================================================
    // IJ-005: exactly 11 hours is allowed
    // ==========================================================================
    #[test]
    fn test_ij_005_exactly_eleven_hours_is_allowed() {
        let shifts = vec![
            make_shift("s1", "2026-03-10", "13:00", "21:00"),
            make_shift("s2", "2026-03-11", "08:00", "16:00"),
        ];

        assert!(find_rest_violations(&shifts, 3, 2026).is_empty());
    }

    // ==========================================================================
    // IJ-006: negative gaps are skipped
    // ==========================================================================
    #[test]
    fn test_ij_006_negative_gap_is_skipped() {
        // Overnight until 10:00 on the 11th, next shift starts 08:00 on the 11th
        let shifts = vec![
            make_shift("s1", "2026-03-10", "20:00", "10:00"),
            make_shift("s2", "2026-03-11", "08:00", "16:00"),
        ];

        let result = evaluate_rest_periods(&shifts, 3, 2026, 1);
        assert!(result.violations.is_empty());
        assert_eq!(result.pairs_skipped, 1);
    }

    // ==========================================================================
    // IJ-007: malformed times never panic and report nothing
    // ==========================================================================
    #[test]
    fn test_ij_007_malformed_times_are_tolerated() {
        let shifts = vec![
            make_shift("s1", "2026-03-10", "14:00", "22h"),
            make_shift("s2", "2026-03-11", "", "13:00"),
            make_shift("s3", "2026-03-12", "ab:cd", "99:99"),
        ];

        let result = evaluate_rest_periods(&shifts, 3, 2026, 1);
        assert!(result.violations.is_empty());
        assert_eq!(result.pairs_skipped, 2);
    }

    #[test]
    fn test_fractional_gap_is_rounded_in_message() {
        // 22:40 to 09:00 next day is 10h20m
        let shifts = vec![
            make_shift("s1", "2026-03-10", "14:40", "22:40"),
            make_shift("s2", "2026-03-11", "09:00", "17:00"),
        ];

        let violations = find_rest_violations(&shifts, 3, 2026);
        assert_eq!(violations.len(), 1);
        assert_eq!(violations[0].observed, dec(1033, 2));
        assert!(violations[0].message.contains("10.3h"));
    }

    #[test]
    fn test_input_order_does_not_matter() {
        let shifts = vec![
            make_shift("s2", "2026-03-11", "05:00", "13:00"),
            make_shift("s1", "2026-03-10", "14:00", "22:00"),
        ];

        assert_eq!(find_rest_violations(&shifts, 3, 2026).len(), 1);
    }

    #[test]
    fn test_non_work_shifts_are_ignored() {
        let mut day_off = make_shift("s2", "2026-03-11", "05:00", "13:00");
        day_off.shift_type = ShiftType::Training;
        let shifts = vec![make_shift("s1", "2026-03-10", "14:00", "22:00"), day_off];

        assert!(find_rest_violations(&shifts, 3, 2026).is_empty());
    }

    #[test]
    fn test_window_spans_previous_through_next_month() {
        assert_eq!(
            rest_window(1, 2026),
            Some((make_date("2025-12-01"), make_date("2026-02-28")))
        );
        assert_eq!(rest_window(13, 2026), None);
    }

    #[test]
    fn test_shifts_outside_window_are_ignored() {
        let shifts = vec![
            make_shift("s1", "2026-05-31", "14:00", "22:00"),
            make_shift("s2", "2026-06-01", "05:00", "13:00"),
        ];

        assert!(find_rest_violations(&shifts, 3, 2026).is_empty());
        assert_eq!(find_rest_violations(&shifts, 5, 2026).len(), 1);
    }

    #[test]
    fn test_gap_across_month_boundary() {
        let shifts = vec![
            make_shift("s1", "2026-02-28", "15:00", "23:00"),
            make_shift("s2", "2026-03-01", "06:00", "14:00"),
        ];

        let violations = find_rest_violations(&shifts, 3, 2026);
        assert_eq!(violations.len(), 1);
        assert_eq!(violations[0].observed, dec(7, 0));
    }

    #[test]
    fn test_audit_step_counts_pairs() {
        let shifts = vec![
            make_shift("s1", "2026-03-10", "14:00", "22:00"),
            make_shift("s2", "2026-03-11", "05:00", "13:00"),
            make_shift("s3", "2026-03-11", "15:00", "19:00"),
        ];

        let result = evaluate_rest_periods(&shifts, 3, 2026, 3);
        assert_eq!(result.audit_step.step_number, 3);
        assert_eq!(result.audit_step.rule_id, "interjornada");
        assert_eq!(result.audit_step.output["pairs_checked"], 1);
        assert_eq!(result.audit_step.output["pairs_skipped"], 1);
        assert_eq!(result.audit_step.output["violations"], 1);
        assert_eq!(result.audit_step.input["window_start"], "2026-02-01");
    }
}
