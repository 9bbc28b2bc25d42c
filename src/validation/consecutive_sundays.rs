//! Consecutive Sundays worked rule.
//!
//! Enumerates every Sunday from three months before the target month through
//! the target month and measures the longest run of adjacent Sundays that
//! were worked. The weeks between them do not matter. Weekly rest must fall
//! on a Sunday at least once every three weeks, so a run of 4 is a hard
//! block. There is no soft tier; `max_sundays_per_month` is only recorded in
//! the audit step.

use chrono::NaiveDate;
use rust_decimal::Decimal;

use super::calendar::{build_day_window, is_sunday};
use super::work_day::{longest_run, work_days};
use crate::models::{AuditStep, Severity, Shift, Violation, ViolationCode, WorkRule};

/// Run of worked Sundays at which the rule becomes a hard block.
pub const HARD_BLOCK_CONSECUTIVE_SUNDAYS: u32 = 4;

/// Months scanned before the target month.
pub const CONSECUTIVE_SUNDAYS_MONTHS_BACK: u32 = 3;

const CLAUSE_REF: &str = "Lei 10.101/2000 art. 6";

/// The outcome of the consecutive Sundays rule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConsecutiveSundaysResult {
    /// The longest run of adjacent worked Sundays in the window.
    pub max_streak: u32,
    /// The last Sunday of that run, if any Sunday was worked.
    pub streak_end: Option<NaiveDate>,
    /// The violation raised, if any.
    pub violation: Option<Violation>,
    /// The audit step recording this evaluation.
    pub audit_step: AuditStep,
}

/// Returns every Sunday in the scan window for `month/year`, ascending.
pub fn sundays_in_window(month: u32, year: i32) -> Vec<NaiveDate> {
    build_day_window(month, year, CONSECUTIVE_SUNDAYS_MONTHS_BACK)
        .into_iter()
        .filter(|date| is_sunday(*date))
        .collect()
}

/// Returns the longest run of adjacent worked Sundays in the window ending
/// with `month/year`.
pub fn count_consecutive_sundays(shifts: &[Shift], month: u32, year: i32) -> u32 {
    longest_streak(shifts, month, year).0
}

fn longest_streak(shifts: &[Shift], month: u32, year: i32) -> (u32, Option<NaiveDate>) {
    longest_run(sundays_in_window(month, year), &work_days(shifts))
}

/// Evaluates the consecutive Sundays rule.
///
/// # Arguments
///
/// * `shifts` - The employee's shift history (any order)
/// * `month` - Target month (1-12)
/// * `year` - Target year
/// * `rules` - Work-rule thresholds (recorded for audit only)
/// * `step_number` - The step number for audit trail sequencing
pub fn evaluate_consecutive_sundays(
    shifts: &[Shift],
    month: u32,
    year: i32,
    rules: &WorkRule,
    step_number: u32,
) -> ConsecutiveSundaysResult {
    let (max_streak, streak_end) = longest_streak(shifts, month, year);
    let limit = HARD_BLOCK_CONSECUTIVE_SUNDAYS - 1;

    let violation = (max_streak >= HARD_BLOCK_CONSECUTIVE_SUNDAYS).then(|| Violation {
        code: ViolationCode::ConsecutiveSundays,
        severity: Severity::Block,
        message: format!(
            "{} domingos consecutivos trabalhados até {} (máximo {})",
            max_streak,
            streak_end
                .map(|date| date.format("%d/%m/%Y").to_string())
                .unwrap_or_default(),
            limit
        ),
        observed: Decimal::from(max_streak),
        limit: Decimal::from(limit),
    });

    let reasoning = if violation.is_some() {
        format!(
            "{} consecutive Sundays worked; rest must fall on a Sunday within every {} weeks",
            max_streak, limit
        )
    } else {
        format!(
            "Longest run of {} consecutive Sundays worked is below the limit of {}",
            max_streak, HARD_BLOCK_CONSECUTIVE_SUNDAYS
        )
    };

    let audit_step = AuditStep {
        step_number,
        rule_id: "consecutive_sundays".to_string(),
        rule_name: "Consecutive Sundays Worked".to_string(),
        clause_ref: CLAUSE_REF.to_string(),
        input: serde_json::json!({
            "month": month,
            "year": year,
            "months_back": CONSECUTIVE_SUNDAYS_MONTHS_BACK,
            "max_sundays_per_month": rules.max_sundays_per_month,
        }),
        output: serde_json::json!({
            "max_streak": max_streak,
            "streak_end": streak_end,
            "severity": violation.as_ref().map(|v| v.severity),
        }),
        reasoning,
    };

    ConsecutiveSundaysResult {
        max_streak,
        streak_end,
        violation,
        audit_step,
    }
}
