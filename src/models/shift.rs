//! Shift model and shift type classification.
//!
//! A [`Shift`] is one dated assignment for one employee. Its [`ShiftType`]
//! covers the known work and leave kinds, each mapped through a single table
//! to the label, calendar code and colour used by the scheduling UI. Kinds
//! this engine does not know deserialize as [`ShiftType::Other`].

use chrono::{Datelike, Duration, NaiveDate, NaiveDateTime, NaiveTime, Timelike, Weekday};
use serde::{Deserialize, Serialize};

/// The kind of assignment a shift represents.
///
/// Only [`ShiftType::Work`] counts as a worked day for rule evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ShiftType {
    /// A regular working shift.
    Work,
    /// Weekly rest day.
    #[serde(alias = "dayoff")]
    DayOff,
    /// Public or company holiday.
    Holiday,
    /// Paid vacation.
    Vacation,
    /// Medical certificate leave.
    Medical,
    /// Unjustified absence.
    Absence,
    /// Time off compensating hours banked earlier.
    CompensatoryOff,
    /// Training or course day.
    Training,
    /// Bereavement leave.
    BereavementLeave,
    /// Maternity leave.
    MaternityLeave,
    /// Paternity leave.
    PaternityLeave,
    /// Unpaid leave.
    UnpaidLeave,
    /// Disciplinary suspension.
    Suspension,
    /// Remote work day (not scheduled on site).
    RemoteWork,
    /// On-call availability without a scheduled shift.
    OnCall,
    /// Temporarily transferred to another unit.
    Transfer,
    /// Any kind this engine does not recognise. Never counts as worked.
    #[serde(other)]
    Other,
}

/// Display attributes for a [`ShiftType`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShiftTypeDisplay {
    /// Human-readable label.
    pub label: &'static str,
    /// Short code printed in calendar cells.
    pub code: &'static str,
    /// Background colour as a hex string.
    pub color: &'static str,
}

impl ShiftType {
    /// Every shift type, in calendar legend order.
    pub const ALL: [ShiftType; 17] = [
        ShiftType::Work,
        ShiftType::DayOff,
        ShiftType::Holiday,
        ShiftType::Vacation,
        ShiftType::Medical,
        ShiftType::Absence,
        ShiftType::CompensatoryOff,
        ShiftType::Training,
        ShiftType::BereavementLeave,
        ShiftType::MaternityLeave,
        ShiftType::PaternityLeave,
        ShiftType::UnpaidLeave,
        ShiftType::Suspension,
        ShiftType::RemoteWork,
        ShiftType::OnCall,
        ShiftType::Transfer,
        ShiftType::Other,
    ];

    /// Returns the display attributes for this shift type.
    ///
    /// # Example
    ///
    /// ```
    /// use shift_rules_engine::models::ShiftType;
    ///
    /// assert_eq!(ShiftType::DayOff.display().code, "F");
    /// assert_eq!(ShiftType::Work.display().label, "Trabalho");
    /// ```
    pub const fn display(self) -> ShiftTypeDisplay {
        let (label, code, color) = match self {
            ShiftType::Work => ("Trabalho", "T", "#2563eb"),
            ShiftType::DayOff => ("Folga", "F", "#16a34a"),
            ShiftType::Holiday => ("Feriado", "FER", "#dc2626"),
            ShiftType::Vacation => ("Férias", "FE", "#f59e0b"),
            ShiftType::Medical => ("Atestado", "AT", "#db2777"),
            ShiftType::Absence => ("Falta", "FA", "#7f1d1d"),
            ShiftType::CompensatoryOff => ("Folga compensatória", "FC", "#4ade80"),
            ShiftType::Training => ("Treinamento", "TR", "#0891b2"),
            ShiftType::BereavementLeave => ("Licença nojo", "LN", "#525252"),
            ShiftType::MaternityLeave => ("Licença maternidade", "LM", "#c026d3"),
            ShiftType::PaternityLeave => ("Licença paternidade", "LP", "#9333ea"),
            ShiftType::UnpaidLeave => ("Licença não remunerada", "LNR", "#a3a3a3"),
            ShiftType::Suspension => ("Suspensão", "S", "#991b1b"),
            ShiftType::RemoteWork => ("Home office", "HO", "#0ea5e9"),
            ShiftType::OnCall => ("Sobreaviso", "SA", "#ca8a04"),
            ShiftType::Transfer => ("Transferência", "TF", "#64748b"),
            ShiftType::Other => ("Outro", "O", "#94a3b8"),
        };
        ShiftTypeDisplay { label, code, color }
    }

    /// Returns true if this type counts as a worked day.
    pub fn is_work(self) -> bool {
        self == ShiftType::Work
    }
}

impl std::fmt::Display for ShiftType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.display().label)
    }
}

/// One assignment for one employee on one date.
///
/// Times are kept as the `HH:MM` strings entered in the UI. They may be empty
/// (leave types) or malformed; accessors return `None` instead of failing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Shift {
    /// Unique identifier for the shift.
    pub id: String,
    /// The employee this shift belongs to.
    pub employee_id: String,
    /// The calendar date of the shift.
    pub date: NaiveDate,
    /// Start time as `HH:MM` (24h).
    #[serde(default)]
    pub start_time: String,
    /// End time as `HH:MM` (24h). Earlier hours than the start mean the shift ends next day.
    #[serde(default)]
    pub end_time: String,
    /// The kind of assignment.
    #[serde(rename = "type")]
    pub shift_type: ShiftType,
    /// Free-text note.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Set by a manager to save despite hard-block violations.
    #[serde(default)]
    pub manager_override: bool,
}

/// Parses an `HH:MM` clock string, returning `None` for anything else.
///
/// # Example
///
/// ```
/// use shift_rules_engine::models::parse_clock;
/// use chrono::NaiveTime;
///
/// assert_eq!(parse_clock("22:00"), NaiveTime::from_hms_opt(22, 0, 0));
/// assert_eq!(parse_clock("25:00"), None);
/// assert_eq!(parse_clock(""), None);
/// ```
pub fn parse_clock(value: &str) -> Option<NaiveTime> {
    NaiveTime::parse_from_str(value.trim(), "%H:%M").ok()
}

impl Shift {
    /// Returns true if this shift is a working shift.
    pub fn is_work(&self) -> bool {
        self.shift_type.is_work()
    }

    /// Parsed start time, if well-formed.
    pub fn start_clock(&self) -> Option<NaiveTime> {
        parse_clock(&self.start_time)
    }

    /// Parsed end time, if well-formed.
    pub fn end_clock(&self) -> Option<NaiveTime> {
        parse_clock(&self.end_time)
    }

    /// Returns true if the end hour is earlier than the start hour.
    ///
    /// Only hours are compared, so `22:30`–`22:10` is not treated as overnight.
    pub fn crosses_midnight(&self) -> bool {
        match (self.start_clock(), self.end_clock()) {
            (Some(start), Some(end)) => end.hour() < start.hour(),
            _ => false,
        }
    }

    /// The instant the shift starts, combining its date and start time.
    pub fn start_instant(&self) -> Option<NaiveDateTime> {
        self.start_clock().map(|start| self.date.and_time(start))
    }

    /// The instant the shift ends, rolled to the next day for overnight shifts.
    ///
    /// # Example
    ///
    /// ```
    /// use shift_rules_engine::models::{Shift, ShiftType};
    /// use chrono::{NaiveDate, NaiveDateTime};
    ///
    /// let shift = Shift {
    ///     id: "shift_001".to_string(),
    ///     employee_id: "emp_001".to_string(),
    ///     date: NaiveDate::from_ymd_opt(2026, 3, 10).unwrap(),
    ///     start_time: "22:00".to_string(),
    ///     end_time: "06:00".to_string(),
    ///     shift_type: ShiftType::Work,
    ///     description: None,
    ///     manager_override: false,
    /// };
    /// let expected = NaiveDateTime::parse_from_str("2026-03-11 06:00", "%Y-%m-%d %H:%M").unwrap();
    /// assert_eq!(shift.end_instant(), Some(expected));
    /// ```
    pub fn end_instant(&self) -> Option<NaiveDateTime> {
        let end = self.date.and_time(self.end_clock()?);
        if self.crosses_midnight() {
            Some(end + Duration::days(1))
        } else {
            Some(end)
        }
    }

    /// Returns the day of the week for the shift.
    pub fn day_of_week(&self) -> Weekday {
        self.date.weekday()
    }
}
