//! Employee model.
//!
//! Employees identify whose shift history the rule evaluators scan. They
//! belong to a single organization and are never shared across tenants.

use serde::{Deserialize, Serialize};

/// Represents an employee on the organization's roster.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Employee {
    /// Unique identifier for the employee.
    pub id: String,
    /// The employee's display name.
    pub name: String,
    /// Job title or role (e.g., "Caixa", "Repositor").
    pub position: String,
    /// Whether the employee can currently be scheduled.
    #[serde(default = "default_active")]
    pub active: bool,
}

fn default_active() -> bool {
    true
}

impl Employee {
    /// Returns true if shifts can be scheduled for this employee.
    ///
    /// # Examples
    ///
    /// ```
    /// use shift_rules_engine::models::Employee;
    ///
    /// let employee = Employee {
    ///     id: "emp_001".to_string(),
    ///     name: "Ana Souza".to_string(),
    ///     position: "Caixa".to_string(),
    ///     active: true,
    /// };
    /// assert!(employee.is_schedulable());
    /// ```
    pub fn is_schedulable(&self) -> bool {
        self.active
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_employee() {
        let json = r#"{
            "id": "emp_001",
            "name": "Ana Souza",
            "position": "Caixa",
            "active": true
        }"#;

        let employee: Employee = serde_json::from_str(json).unwrap();
        assert_eq!(employee.id, "emp_001");
        assert_eq!(employee.name, "Ana Souza");
        assert_eq!(employee.position, "Caixa");
        assert!(employee.active);
    }

    #[test]
    fn test_active_defaults_to_true() {
        let json = r#"{"id": "emp_002", "name": "Bruno Lima", "position": "Repositor"}"#;

        let employee: Employee = serde_json::from_str(json).unwrap();
        assert!(employee.active);
        assert!(employee.is_schedulable());
    }

    #[test]
    fn test_inactive_employee_is_not_schedulable() {
        let employee = Employee {
            id: "emp_003".to_string(),
            name: "Carla Dias".to_string(),
            position: "Fiscal".to_string(),
            active: false,
        };
        assert!(!employee.is_schedulable());
    }
}
