//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading the
//! organization policy and holiday lists from YAML files.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use chrono::Datelike;

use crate::error::{EngineError, EngineResult};
use crate::models::{Holiday, OrganizationPolicy};

use super::types::{HolidayFile, OrganizationConfig, PolicyFile};

/// Loads and provides access to the organization configuration.
///
/// The `ConfigLoader` reads YAML configuration files from a directory
/// and provides access to the weekly-off policy, fine policy, and
/// per-year holiday lists.
///
/// # Directory Structure
///
/// The configuration directory should have the following structure:
/// ```text
/// config/organization/
/// ├── policy.yaml      # Weekly-off policy, fine policy, include_leaves
/// └── holidays/
///     └── 2025.yaml    # Holidays for this calendar year
/// ```
///
/// # Example
///
/// ```no_run
/// use payroll_engine::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/organization").unwrap();
///
/// let policy = loader.policy();
/// println!("Leaves counted: {}", policy.include_leaves);
///
/// let holidays = loader.holidays_for_month(2025, 1);
/// println!("January holidays: {}", holidays.len());
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    config: OrganizationConfig,
}

impl ConfigLoader {
    /// Loads configuration from the specified directory.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the configuration directory (e.g., "./config/organization")
    ///
    /// # Returns
    ///
    /// Returns a `ConfigLoader` instance on success, or an error if:
    /// - `policy.yaml` or the `holidays/` directory is missing
    /// - Any file contains invalid YAML
    /// - The fine policy is inconsistent (`InvalidFinePolicy`)
    ///
    /// # Example
    ///
    /// ```no_run
    /// use payroll_engine::config::ConfigLoader;
    ///
    /// let loader = ConfigLoader::load("./config/organization")?;
    /// # Ok::<(), payroll_engine::error::EngineError>(())
    /// ```
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();

        // Load policy.yaml
        let policy_path = path.join("policy.yaml");
        let policy_file = Self::load_yaml::<PolicyFile>(&policy_path)?;

        // Load all holiday files from the holidays directory
        let holidays_dir = path.join("holidays");
        let holidays = Self::load_holidays(&holidays_dir)?;

        let config = OrganizationConfig::new(policy_file.into(), holidays)?;

        Ok(Self { config })
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

    /// Loads all holiday files from the holidays directory.
    fn load_holidays(holidays_dir: &Path) -> EngineResult<BTreeMap<i32, Vec<Holiday>>> {
        let holidays_dir_str = holidays_dir.display().to_string();

        if !holidays_dir.exists() {
            return Err(EngineError::ConfigNotFound {
                path: holidays_dir_str,
            });
        }

        let entries = fs::read_dir(holidays_dir).map_err(|_| EngineError::ConfigNotFound {
            path: holidays_dir_str.clone(),
        })?;

        let mut holidays = BTreeMap::new();

        for entry in entries {
            let entry = entry.map_err(|_| EngineError::ConfigNotFound {
                path: holidays_dir_str.clone(),
            })?;

            let path = entry.path();
            if path.extension().is_some_and(|ext| ext == "yaml") {
                let holiday_file = Self::load_yaml::<HolidayFile>(&path)?;
                holidays.insert(holiday_file.year, holiday_file.holidays);
            }
        }

        Ok(holidays)
    }

    /// Returns the underlying organization configuration.
    pub fn config(&self) -> &OrganizationConfig {
        &self.config
    }

    /// Returns the organization policy.
    pub fn policy(&self) -> &OrganizationPolicy {
        self.config.policy()
    }

    /// Returns the holidays configured for a year, empty when none are.
    ///
    /// An unconfigured year is indistinguishable from a year with no
    /// holidays; the engine treats both as an empty list.
    pub fn holidays_for_year(&self, year: i32) -> &[Holiday] {
        self.config.holidays_for_year(year)
    }

    /// Returns the holidays falling within a specific month.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use payroll_engine::config::ConfigLoader;
    ///
    /// let loader = ConfigLoader::load("./config/organization")?;
    /// let january = loader.holidays_for_month(2025, 1);
    /// # Ok::<(), payroll_engine::error::EngineError>(())
    /// ```
    pub fn holidays_for_month(&self, year: i32, month: u32) -> Vec<Holiday> {
        self.holidays_for_year(year)
            .iter()
            .filter(|h| h.date.month() == month)
            .cloned()
            .collect()
    }
}
