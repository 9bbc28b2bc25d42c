//! Save enforcement policy.
//!
//! Violations are always computed in full. This module only decides what a
//! caller may do with them, given the shift's manager-override flag.

use crate::models::{Enforcement, Violation};

/// Maps a violation list and the manager-override flag to a save decision.
///
/// | violations           | override | decision                        |
/// |----------------------|----------|---------------------------------|
/// | none                 | any      | [`Enforcement::Allowed`]        |
/// | warnings only        | any      | [`Enforcement::Warned`]         |
/// | at least one block   | `true`   | [`Enforcement::Acknowledged`]   |
/// | at least one block   | `false`  | [`Enforcement::Blocked`]        |
///
/// # Example
///
/// ```
/// use shift_rules_engine::models::{Enforcement, Severity, Violation, ViolationCode};
/// use shift_rules_engine::validation::enforce;
/// use rust_decimal::Decimal;
///
/// let block = Violation {
///     code: ViolationCode::InsufficientRest,
///     severity: Severity::Block,
///     message: "Interjornada de 7.0h".to_string(),
///     observed: Decimal::new(7, 0),
///     limit: Decimal::new(11, 0),
/// };
///
/// assert_eq!(enforce(&[block.clone()], false), Enforcement::Blocked);
/// assert_eq!(enforce(&[block], true), Enforcement::Acknowledged);
/// assert_eq!(enforce(&[], false), Enforcement::Allowed);
/// ```
pub fn enforce(violations: &[Violation], manager_override: bool) -> Enforcement {
    if violations.is_empty() {
        return Enforcement::Allowed;
    }
    if !violations.iter().any(Violation::is_hard_block) {
        return Enforcement::Warned;
    }
    if manager_override {
        Enforcement::Acknowledged
    } else {
        Enforcement::Blocked
    }
}
