//! Configuration types for the Shift Rules Engine.
//!
//! This module contains the strongly-typed configuration structures that
//! are deserialized from YAML configuration files.

use std::collections::HashMap;

use serde::Deserialize;

use crate::models::{Employee, WorkRule};

/// Metadata about the organization whose schedules are validated.
#[derive(Debug, Clone, Deserialize)]
pub struct OrganizationMetadata {
    /// Short tenant code (e.g., "loja-centro").
    pub code: String,
    /// The organization's display name.
    pub name: String,
}

/// Employee roster file structure.
#[derive(Debug, Clone, Deserialize)]
pub struct EmployeesConfig {
    /// All employees, active or not.
    pub employees: Vec<Employee>,
}

/// The complete organization configuration loaded from YAML files.
#[derive(Debug, Clone)]
pub struct OrganizationConfig {
    metadata: OrganizationMetadata,
    work_rule: WorkRule,
    employees: HashMap<String, Employee>,
}

impl OrganizationConfig {
    /// Creates a new OrganizationConfig from its component parts.
    pub fn new(
        metadata: OrganizationMetadata,
        work_rule: WorkRule,
        employees: Vec<Employee>,
    ) -> Self {
        let employees = employees
            .into_iter()
            .map(|employee| (employee.id.clone(), employee))
            .collect();
        Self {
            metadata,
            work_rule,
            employees,
        }
    }

    /// Returns the organization metadata.
    pub fn organization(&self) -> &OrganizationMetadata {
        &self.metadata
    }

    /// Returns the configured work-rule thresholds.
    pub fn work_rule(&self) -> &WorkRule {
        &self.work_rule
    }

    /// Returns the roster keyed by employee id.
    pub fn employees(&self) -> &HashMap<String, Employee> {
        &self.employees
    }
}
