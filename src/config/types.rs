//! Configuration types for the organization policy.
//!
//! This module contains the strongly-typed configuration structures that
//! are deserialized from YAML configuration files, and the aggregated
//! [`OrganizationConfig`] they build.

use std::collections::BTreeMap;

use rust_decimal::Decimal;
use serde::Deserialize;

use crate::error::{EngineError, EngineResult};
use crate::models::{
    FineMethod, FineMultiplier, FinePolicy, Holiday, OrganizationPolicy, WeeklyOffPolicy,
};

/// The `policy.yaml` file structure.
///
/// Field types are the domain policy types themselves; there is no
/// separate configuration dialect to keep in sync.
#[derive(Debug, Clone, Deserialize)]
pub struct PolicyFile {
    /// The weekly-off rule set.
    pub weekly_off: WeeklyOffPolicy,
    /// Whether approved leaves count as presence for proration.
    pub include_leaves: bool,
    /// The fine policy.
    pub fine_policy: FinePolicy,
}

impl From<PolicyFile> for OrganizationPolicy {
    fn from(file: PolicyFile) -> Self {
        OrganizationPolicy {
            weekly_off: file.weekly_off,
            fine_policy: file.fine_policy,
            include_leaves: file.include_leaves,
        }
    }
}

/// A per-year holiday file under the `holidays/` directory.
#[derive(Debug, Clone, Deserialize)]
pub struct HolidayFile {
    /// The calendar year the holidays belong to.
    pub year: i32,
    /// The holidays for that year.
    pub holidays: Vec<Holiday>,
}

/// The complete organization configuration loaded from YAML files.
///
/// Aggregates the organization policy with per-year holiday lists.
#[derive(Debug, Clone)]
pub struct OrganizationConfig {
    /// The organization policy.
    policy: OrganizationPolicy,
    /// Holiday lists keyed by calendar year.
    holidays: BTreeMap<i32, Vec<Holiday>>,
}

impl OrganizationConfig {
    /// Creates a new OrganizationConfig from its component parts.
    ///
    /// The fine policy is validated up front so an inconsistent
    /// configuration fails at load time rather than on the first payroll
    /// run that hits it.
    pub fn new(
        policy: OrganizationPolicy,
        holidays: BTreeMap<i32, Vec<Holiday>>,
    ) -> EngineResult<Self> {
        validate_fine_policy(&policy)?;
        Ok(Self { policy, holidays })
    }

    /// Returns the organization policy.
    pub fn policy(&self) -> &OrganizationPolicy {
        &self.policy
    }

    /// Returns the holidays configured for a year, empty when none are.
    pub fn holidays_for_year(&self, year: i32) -> &[Holiday] {
        self.holidays.get(&year).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Returns the years with configured holiday lists.
    pub fn holiday_years(&self) -> impl Iterator<Item = i32> + '_ {
        self.holidays.keys().copied()
    }
}

/// Rejects fine policies that cannot be evaluated.
fn validate_fine_policy(policy: &OrganizationPolicy) -> EngineResult<()> {
    let fine_policy = &policy.fine_policy;
    if !fine_policy.enabled {
        return Ok(());
    }

    match fine_policy.method {
        FineMethod::ShiftBased => {
            if !fine_policy
                .shift_hours
                .is_some_and(|h| h > Decimal::ZERO)
            {
                return Err(EngineError::InvalidFinePolicy {
                    message: "shift_hours must be positive for shift-based fines".to_string(),
                });
            }
        }
        FineMethod::RuleBased => {
            if let Some(rule) = fine_policy
                .rules
                .iter()
                .find(|r| r.multiplier == FineMultiplier::FixedAmount && r.fixed_amount.is_none())
            {
                return Err(EngineError::InvalidFinePolicy {
                    message: format!(
                        "fixed-amount rule for {:?} has no fixed_amount configured",
                        rule.applies_to
                    ),
                });
            }
        }
    }

    Ok(())
}
