//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading an
//! organization's configuration from YAML files.

use std::fs;
use std::path::Path;

use crate::error::{EngineError, EngineResult};
use crate::models::{Employee, WorkRule};

use super::types::{EmployeesConfig, OrganizationConfig, OrganizationMetadata};

/// Loads and provides access to organization configuration.
///
/// # Directory Structure
///
/// ```text
/// config/default/
/// ├── organization.yaml  # Organization metadata
/// ├── work_rules.yaml    # Work-rule thresholds
/// └── employees.yaml     # Employee roster
/// ```
///
/// # Example
///
/// ```no_run
/// use shift_rules_engine::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/default").unwrap();
/// let employee = loader.get_employee("emp_001").unwrap();
/// println!("{} works as {}", employee.name, employee.position);
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    config: OrganizationConfig,
}

impl ConfigLoader {
    /// Loads configuration from the specified directory.
    ///
    /// Returns an error if any file is missing, contains invalid YAML, or
    /// holds a work-rule threshold outside its allowed range.
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();

        let metadata = Self::load_yaml::<OrganizationMetadata>(&path.join("organization.yaml"))?;
        let work_rule = Self::load_yaml::<WorkRule>(&path.join("work_rules.yaml"))?;
        work_rule.validate()?;
        let roster = Self::load_yaml::<EmployeesConfig>(&path.join("employees.yaml"))?;

        Ok(Self {
            config: OrganizationConfig::new(metadata, work_rule, roster.employees),
        })
    }

    /// Builds a loader from already-parsed parts.
    pub fn from_parts(
        metadata: OrganizationMetadata,
        work_rule: WorkRule,
        employees: Vec<Employee>,
    ) -> EngineResult<Self> {
        work_rule.validate()?;
        Ok(Self {
            config: OrganizationConfig::new(metadata, work_rule, employees),
        })
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> EngineResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }

    /// Returns the underlying organization configuration.
    pub fn config(&self) -> &OrganizationConfig {
        &self.config
    }

    /// Returns the organization metadata.
    pub fn organization(&self) -> &OrganizationMetadata {
        self.config.organization()
    }

    /// Returns the configured work-rule thresholds.
    pub fn work_rule(&self) -> &WorkRule {
        self.config.work_rule()
    }

    /// Gets an employee by id.
    ///
    /// Returns `EmployeeNotFound` if the id is not on the roster.
    pub fn get_employee(&self, employee_id: &str) -> EngineResult<&Employee> {
        self.config
            .employees()
            .get(employee_id)
            .ok_or_else(|| EngineError::EmployeeNotFound {
                employee_id: employee_id.to_string(),
            })
    }

    /// Gets an employee that can currently be scheduled.
    ///
    /// Returns `EmployeeNotFound` for unknown ids and `InvalidEmployee` for
    /// inactive employees.
    pub fn get_schedulable_employee(&self, employee_id: &str) -> EngineResult<&Employee> {
        let employee = self.get_employee(employee_id)?;
        if !employee.is_schedulable() {
            return Err(EngineError::InvalidEmployee {
                employee_id: employee_id.to_string(),
                message: "employee is inactive".to_string(),
            });
        }
        Ok(employee)
    }

    /// Returns active employees sorted by name.
    pub fn active_employees(&self) -> Vec<&Employee> {
        let mut active: Vec<&Employee> = self
            .config
            .employees()
            .values()
            .filter(|employee| employee.is_schedulable())
            .collect();
        active.sort_by(|a, b| a.name.cmp(&b.name));
        active
    }
}
