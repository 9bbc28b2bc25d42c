//! Configuration loading and management for the Shift Rules Engine.
//!
//! This module loads an organization's configuration from YAML files:
//! metadata, work-rule thresholds and the employee roster.
//!
//! # Example
//!
//! ```no_run
//! use shift_rules_engine::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config/default").unwrap();
//! println!("Loaded organization: {}", config.organization().name);
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{EmployeesConfig, OrganizationConfig, OrganizationMetadata};
