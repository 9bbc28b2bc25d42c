//! Configurable work-rule thresholds.
//!
//! Only `max_consecutive_days` changes evaluator output (it sets the soft
//! warning threshold for consecutive working days). The hard-block limits and
//! the 11 hour interjornada are fixed by law and live next to their
//! evaluators in [`crate::validation`].

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

/// Work-rule thresholds for an organization.
///
/// # Example
///
/// ```
/// use shift_rules_engine::models::WorkRule;
///
/// let rules = WorkRule::default();
/// assert_eq!(rules.max_consecutive_days, 6);
/// assert_eq!(rules.max_sundays_per_month, 3);
/// assert!(rules.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WorkRule {
    /// Consecutive working days above which a soft warning is raised.
    pub max_consecutive_days: u32,
    /// Sundays per month an employee may work. Informational.
    pub max_sundays_per_month: u32,
    /// Contracted hours per working day. Informational.
    pub work_hours_per_day: Decimal,
    /// Whether holidays are counted as worked days. Informational; only
    /// `work` shifts count toward streaks.
    pub holiday_counts_as_work: bool,
}

impl Default for WorkRule {
    fn default() -> Self {
        Self {
            max_consecutive_days: 6,
            max_sundays_per_month: 3,
            work_hours_per_day: Decimal::new(8, 0),
            holiday_counts_as_work: false,
        }
    }
}

impl WorkRule {
    /// Checks that every threshold is within its allowed range.
    pub fn validate(&self) -> EngineResult<()> {
        if self.max_consecutive_days == 0 {
            return Err(invalid("max_consecutive_days", "must be at least 1"));
        }
        if self.max_sundays_per_month > 5 {
            return Err(invalid(
                "max_sundays_per_month",
                "a month has at most 5 Sundays",
            ));
        }
        if self.work_hours_per_day <= Decimal::ZERO || self.work_hours_per_day > Decimal::new(24, 0)
        {
            return Err(invalid(
                "work_hours_per_day",
                "must be greater than 0 and at most 24",
            ));
        }
        Ok(())
    }
}

fn invalid(field: &str, message: &str) -> EngineError {
    EngineError::InvalidWorkRule {
        field: field.to_string(),
        message: message.to_string(),
    }
}
