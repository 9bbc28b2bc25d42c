//! Shift classification for rule purposes.
//!
//! A date counts as worked only if at least one `work` shift falls on it.
//! Leave types, day-offs and missing rows all break a streak.

use std::collections::HashSet;

use chrono::NaiveDate;

use crate::models::Shift;

/// Returns true iff at least one shift on `date` has type `work`.
///
/// `shifts` is expected to belong to a single employee.
///
/// # Example
///
/// ```
/// use shift_rules_engine::models::{Shift, ShiftType};
/// use shift_rules_engine::validation::is_work_day;
/// use chrono::NaiveDate;
///
/// let date = NaiveDate::from_ymd_opt(2026, 3, 10).unwrap();
/// let day_off = Shift {
///     id: "shift_001".to_string(),
///     employee_id: "emp_001".to_string(),
///     date,
///     start_time: String::new(),
///     end_time: String::new(),
///     shift_type: ShiftType::DayOff,
///     description: None,
///     manager_override: false,
/// };
/// assert!(!is_work_day(&[day_off], date));
/// ```
pub fn is_work_day(shifts: &[Shift], date: NaiveDate) -> bool {
    shifts
        .iter()
        .any(|shift| shift.date == date && shift.is_work())
}

/// Collects every date that has at least one `work` shift.
pub fn work_days<'a, I>(shifts: I) -> HashSet<NaiveDate>
where
    I: IntoIterator<Item = &'a Shift>,
{
    shifts
        .into_iter()
        .filter(|shift| shift.is_work())
        .map(|shift| shift.date)
        .collect()
}

/// Scans `days` in order and returns the longest run of worked dates,
/// together with the date that run ended on.
pub(crate) fn longest_run<I>(days: I, worked: &HashSet<NaiveDate>) -> (u32, Option<NaiveDate>)
where
    I: IntoIterator<Item = NaiveDate>,
{
    let mut current = 0;
    let mut longest = 0;
    let mut longest_end = None;

    for day in days {
        if worked.contains(&day) {
            current += 1;
            if current > longest {
                longest = current;
                longest_end = Some(day);
            }
        } else {
            current = 0;
        }
    }

    (longest, longest_end)
}
