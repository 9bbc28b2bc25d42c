//! Work-rule validation for the Shift Rules Engine.
//!
//! This module contains the calendar utilities, the work-day classification,
//! the three rule evaluators (consecutive working days, consecutive Sundays
//! worked, minimum rest between shifts), the orchestrator that runs them for
//! one employee, and the enforcement policy that turns violations plus the
//! manager-override flag into a save decision.

mod calendar;
mod consecutive_days;
mod consecutive_sundays;
mod enforcement;
mod rest_period;
mod validator;
mod work_day;

pub use calendar::{
    build_day_window, days_in_month, is_sunday, month_bounds, shift_month, weekday_number,
};
pub use consecutive_days::{
    CONSECUTIVE_DAYS_MONTHS_BACK, ConsecutiveDaysResult, HARD_BLOCK_CONSECUTIVE_DAYS,
    count_consecutive_work_days, evaluate_consecutive_days,
};
pub use consecutive_sundays::{
    CONSECUTIVE_SUNDAYS_MONTHS_BACK, ConsecutiveSundaysResult, HARD_BLOCK_CONSECUTIVE_SUNDAYS,
    count_consecutive_sundays, evaluate_consecutive_sundays, sundays_in_window,
};
pub use enforcement::enforce;
pub use rest_period::{
    MIN_REST_HOURS, RestPeriodResult, evaluate_rest_periods, find_rest_violations,
    rest_gap_hours, rest_window,
};
pub use validator::{
    ValidationOutcome, assess_existing, assess_hypothetical, legacy_messages, run_rules,
    validate_existing, validate_hypothetical,
};
pub use work_day::{is_work_day, work_days};
