//! Loan terms model.
//!
//! This module defines the LoanTerms struct consumed by the loan
//! amortizer.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// The terms of an employee loan.
///
/// # Example
///
/// ```
/// use payroll_engine::models::LoanTerms;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let terms = LoanTerms {
///     principal: Decimal::from_str("100000").unwrap(),
///     tenure_months: 12,
///     annual_interest_rate_pct: Decimal::from_str("10").unwrap(),
/// };
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoanTerms {
    /// The amount borrowed; must be greater than zero.
    pub principal: Decimal,
    /// The repayment tenure in months; must be greater than zero.
    pub tenure_months: u32,
    /// The annual interest rate in percent; zero means straight-line.
    pub annual_interest_rate_pct: Decimal,
}
