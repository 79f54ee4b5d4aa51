//! Salary structure model and related types.
//!
//! This module defines the SalaryComponent and SalaryStructure types that
//! describe an employee's monthly compensation as an ordered list of
//! earning and deduction components.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Whether a salary component adds to or subtracts from pay.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ComponentKind {
    /// Adds to gross pay (e.g., basic, house rent allowance).
    Earning,
    /// Subtracts from net pay (e.g., provident fund, tax withholding).
    Deduction,
}

/// A single named component of a monthly salary.
///
/// Components are immutable once part of a [`SalaryStructure`] for a given
/// month; a revision replaces the whole structure rather than mutating
/// individual components.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SalaryComponent {
    /// The component name (e.g., "basic", "medical_allowance").
    pub name: String,
    /// The full monthly amount for this component.
    pub monthly_amount: Decimal,
    /// Whether this component is an earning or a deduction.
    pub kind: ComponentKind,
}

/// An employee's salary structure: an ordered list of components.
///
/// Gross and net figures are derived from the components rather than
/// stored, so `gross == sum(earnings)` and `net == gross - sum(deductions)`
/// hold by construction.
///
/// # Example
///
/// ```
/// use payroll_engine::models::{ComponentKind, SalaryComponent, SalaryStructure};
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let structure = SalaryStructure {
///     components: vec![
///         SalaryComponent {
///             name: "basic".to_string(),
///             monthly_amount: Decimal::from_str("25000").unwrap(),
///             kind: ComponentKind::Earning,
///         },
///         SalaryComponent {
///             name: "provident_fund".to_string(),
///             monthly_amount: Decimal::from_str("2000").unwrap(),
///             kind: ComponentKind::Deduction,
///         },
///     ],
/// };
///
/// assert_eq!(structure.gross_monthly(), Decimal::from_str("25000").unwrap());
/// assert_eq!(structure.net_monthly(), Decimal::from_str("23000").unwrap());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SalaryStructure {
    /// The ordered list of salary components.
    pub components: Vec<SalaryComponent>,
}

impl SalaryStructure {
    /// Returns the monthly gross: the sum of all earning components.
    pub fn gross_monthly(&self) -> Decimal {
        self.components
            .iter()
            .filter(|c| c.kind == ComponentKind::Earning)
            .map(|c| c.monthly_amount)
            .sum()
    }

    /// Returns the sum of all deduction components.
    pub fn deductions_monthly(&self) -> Decimal {
        self.components
            .iter()
            .filter(|c| c.kind == ComponentKind::Deduction)
            .map(|c| c.monthly_amount)
            .sum()
    }

    /// Returns the monthly net: gross minus deductions.
    pub fn net_monthly(&self) -> Decimal {
        self.gross_monthly() - self.deductions_monthly()
    }

    /// Returns true if the structure has no components.
    pub fn is_empty(&self) -> bool {
        self.components.is_empty()
    }
}
