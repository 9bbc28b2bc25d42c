//! Rule violation types.
//!
//! Violations are produced per validation call and never persisted. They are
//! structured (`code`, `severity`, `message`) but render through `Display` as
//! the legacy string form, where blocking violations start with
//! [`HARD_BLOCK_MARKER`].

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Marker that prefixes blocking violations in their string form.
pub const HARD_BLOCK_MARKER: &str = "BLOQUEADO";

/// How a violation gates the save action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    /// Prevents saving unless a manager override is set.
    Block,
    /// Shown to the user, never prevents saving.
    Warning,
}

/// Identifies the rule that produced a violation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ViolationCode {
    /// Too many consecutive working days.
    ConsecutiveDays,
    /// Too many consecutive Sundays worked.
    ConsecutiveSundays,
    /// Less than the minimum rest between two shifts.
    InsufficientRest,
}

/// A single rule violation.
///
/// # Example
///
/// ```
/// use shift_rules_engine::models::{Severity, Violation, ViolationCode};
/// use rust_decimal::Decimal;
///
/// let violation = Violation {
///     code: ViolationCode::ConsecutiveDays,
///     severity: Severity::Block,
///     message: "7 dias consecutivos de trabalho (máximo 6)".to_string(),
///     observed: Decimal::new(7, 0),
///     limit: Decimal::new(6, 0),
/// };
/// assert!(violation.is_hard_block());
/// assert_eq!(
///     violation.to_string(),
///     "BLOQUEADO: 7 dias consecutivos de trabalho (máximo 6)"
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Violation {
    /// The rule that was violated.
    pub code: ViolationCode,
    /// Whether the violation blocks saving.
    pub severity: Severity,
    /// Human-readable description shown to the manager.
    pub message: String,
    /// The measured value (streak length, rest hours).
    pub observed: Decimal,
    /// The limit the measured value was compared against.
    pub limit: Decimal,
}

impl Violation {
    /// Returns true if this violation blocks saving.
    pub fn is_hard_block(&self) -> bool {
        self.severity == Severity::Block
    }
}

impl std::fmt::Display for Violation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.severity {
            Severity::Block => write!(f, "{}: {}", HARD_BLOCK_MARKER, self.message),
            Severity::Warning => f.write_str(&self.message),
        }
    }
}

/// Returns true if a legacy violation string denotes a hard block.
///
/// # Example
///
/// ```
/// use shift_rules_engine::models::is_blocking_message;
///
/// assert!(is_blocking_message("BLOQUEADO: 4 domingos consecutivos"));
/// assert!(!is_blocking_message("7 dias consecutivos"));
/// ```
pub fn is_blocking_message(message: &str) -> bool {
    message.starts_with(HARD_BLOCK_MARKER)
}
