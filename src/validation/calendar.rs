//! Calendar date utilities.
//!
//! Builds contiguous day windows across month boundaries for streak scanning.
//! Months are 1-based (January = 1). Out-of-range months never panic: they
//! produce zero days or an empty window.

use chrono::{Datelike, NaiveDate, Weekday};

/// Moves `month/year` by `delta` months, rolling the year as needed.
///
/// # Example
///
/// ```
/// use shift_rules_engine::validation::shift_month;
///
/// assert_eq!(shift_month(1, 2026, -1), (12, 2025));
/// assert_eq!(shift_month(11, 2026, 3), (2, 2027));
/// ```
pub fn shift_month(month: u32, year: i32, delta: i32) -> (u32, i32) {
    let index = i64::from(year) * 12 + i64::from(month) - 1 + i64::from(delta);
    let shifted_month = index.rem_euclid(12) as u32 + 1;
    let shifted_year = index.div_euclid(12) as i32;
    (shifted_month, shifted_year)
}

/// Returns the first and last day of `month/year`, or `None` for an invalid month.
pub fn month_bounds(month: u32, year: i32) -> Option<(NaiveDate, NaiveDate)> {
    let first = NaiveDate::from_ymd_opt(year, month, 1)?;
    let (next_month, next_year) = shift_month(month, year, 1);
    // Day 0 of the next month is the last day of this one.
    let last = NaiveDate::from_ymd_opt(next_year, next_month, 1)?.pred_opt()?;
    Some((first, last))
}

/// Number of days in `month/year`, accounting for leap years.
///
/// Returns 0 for a month outside 1-12.
///
/// # Example
///
/// ```
/// use shift_rules_engine::validation::days_in_month;
///
/// assert_eq!(days_in_month(2, 2024), 29);
/// assert_eq!(days_in_month(2, 2026), 28);
/// assert_eq!(days_in_month(4, 2026), 30);
/// ```
pub fn days_in_month(month: u32, year: i32) -> u32 {
    month_bounds(month, year).map_or(0, |(_, last)| last.day())
}

/// Builds the ascending list of dates from the first day of the month
/// `months_back` months before `month/year` through the last day of
/// `month/year`, inclusive.
///
/// # Example
///
/// ```
/// use shift_rules_engine::validation::build_day_window;
/// use chrono::NaiveDate;
///
/// let window = build_day_window(1, 2026, 1);
/// assert_eq!(window.len(), 31 + 31);
/// assert_eq!(window[0], NaiveDate::from_ymd_opt(2025, 12, 1).unwrap());
/// assert_eq!(window[61], NaiveDate::from_ymd_opt(2026, 1, 31).unwrap());
/// ```
pub fn build_day_window(month: u32, year: i32, months_back: u32) -> Vec<NaiveDate> {
    let Some((_, last)) = month_bounds(month, year) else {
        return Vec::new();
    };
    let back = i32::try_from(months_back).unwrap_or(i32::MAX);
    let (start_month, start_year) = shift_month(month, year, -back);
    let Some((first, _)) = month_bounds(start_month, start_year) else {
        return Vec::new();
    };

    first.iter_days().take_while(|day| *day <= last).collect()
}

/// Weekday number with 0 = Sunday through 6 = Saturday.
pub fn weekday_number(date: NaiveDate) -> u32 {
    date.weekday().num_days_from_sunday()
}

/// Returns true if `date` is a Sunday.
pub fn is_sunday(date: NaiveDate) -> bool {
    date.weekday() == Weekday::Sun
}
