//! Core data models for the Shift Rules Engine.
//!
//! This module contains all the domain models used throughout the engine.

mod employee;
mod shift;
mod validation_report;
mod violation;
mod work_rule;

pub use employee::Employee;
pub use shift::{Shift, ShiftType, ShiftTypeDisplay, parse_clock};
pub use validation_report::{AuditStep, AuditTrace, Enforcement, ValidationReport};
pub use violation::{HARD_BLOCK_MARKER, Severity, Violation, ViolationCode, is_blocking_message};
pub use work_rule::WorkRule;
