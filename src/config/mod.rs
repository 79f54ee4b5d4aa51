//! Configuration for the Compensation Calculation Engine.
//!
//! This module provides loading and access to the organization policy
//! and holiday configuration from YAML files.

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{HolidayFile, OrganizationConfig, PolicyFile};
