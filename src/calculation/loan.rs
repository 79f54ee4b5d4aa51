//! Loan amortization.
//!
//! This module converts loan terms into a fixed monthly installment and,
//! when a schedule view is required, a month-by-month amortization
//! schedule. All arithmetic stays in exact decimals; there is no float
//! round-trip.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};
use crate::models::LoanTerms;

use super::round_currency;

/// The longest tenure the amortizer accepts, in months.
pub const MAX_TENURE_MONTHS: u32 = 600;

/// One month of an amortization schedule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleEntry {
    /// The month number, starting at 1.
    pub month: u32,
    /// The portion of the installment repaying principal.
    pub principal_portion: Decimal,
    /// The portion of the installment paying interest.
    pub interest_portion: Decimal,
    /// The principal remaining after this installment.
    pub remaining_balance: Decimal,
}

/// A full amortization schedule.
///
/// The final month repays the exact remaining balance, so the principal
/// portions always sum to the original principal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoanSchedule {
    /// The fixed monthly installment.
    pub installment: Decimal,
    /// The month-by-month breakdown.
    pub entries: Vec<ScheduleEntry>,
}

/// Computes the fixed monthly installment for a loan.
///
/// A zero interest rate divides the principal straight-line across the
/// tenure. Otherwise the standard amortization formula applies:
/// `installment = P x r x (1+r)^n / ((1+r)^n - 1)` with
/// `r = annual_rate_pct / 100 / 12`. The result is rounded to currency
/// precision, half-up.
///
/// # Errors
///
/// `ValidationError` when `principal <= 0`, `tenure_months` is zero or
/// exceeds [`MAX_TENURE_MONTHS`], or the rate is negative. Validation
/// happens before any computation.
///
/// # Example
///
/// ```
/// use payroll_engine::calculation::calculate_installment;
/// use payroll_engine::models::LoanTerms;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let terms = LoanTerms {
///     principal: Decimal::from_str("120000").unwrap(),
///     tenure_months: 12,
///     annual_interest_rate_pct: Decimal::ZERO,
/// };
/// assert_eq!(calculate_installment(&terms).unwrap(), Decimal::from_str("10000").unwrap());
/// ```
pub fn calculate_installment(terms: &LoanTerms) -> EngineResult<Decimal> {
    validate_terms(terms)?;

    let tenure = Decimal::from(terms.tenure_months);

    if terms.annual_interest_rate_pct.is_zero() {
        return Ok(round_currency(terms.principal / tenure));
    }

    let monthly_rate = monthly_rate(terms);
    let growth = compound_factor(monthly_rate, terms.tenure_months);
    let installment = terms.principal * monthly_rate * growth / (growth - Decimal::ONE);

    Ok(round_currency(installment))
}

/// Generates the full amortization schedule for a loan.
///
/// Each month's interest is `round(balance x monthly_rate)` and the
/// principal portion is the installment minus that interest; the final
/// month instead repays the exact remaining balance, absorbing the
/// accumulated rounding drift.
///
/// # Example
///
/// ```
/// use payroll_engine::calculation::amortization_schedule;
/// use payroll_engine::models::LoanTerms;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let terms = LoanTerms {
///     principal: Decimal::from_str("100000").unwrap(),
///     tenure_months: 12,
///     annual_interest_rate_pct: Decimal::from_str("10").unwrap(),
/// };
///
/// let schedule = amortization_schedule(&terms).unwrap();
/// let repaid: Decimal = schedule.entries.iter().map(|e| e.principal_portion).sum();
/// assert_eq!(repaid, terms.principal);
/// ```
pub fn amortization_schedule(terms: &LoanTerms) -> EngineResult<LoanSchedule> {
    let installment = calculate_installment(terms)?;
    let rate = monthly_rate(terms);

    let mut entries = Vec::with_capacity(terms.tenure_months as usize);
    let mut balance = terms.principal;

    for month in 1..=terms.tenure_months {
        let interest_portion = if rate.is_zero() {
            Decimal::ZERO
        } else {
            round_currency(balance * rate)
        };

        let principal_portion = if month == terms.tenure_months {
            balance
        } else {
            installment - interest_portion
        };

        balance -= principal_portion;
        entries.push(ScheduleEntry {
            month,
            principal_portion,
            interest_portion,
            remaining_balance: balance,
        });
    }

    Ok(LoanSchedule {
        installment,
        entries,
    })
}

/// Rejects malformed loan terms before any computation.
fn validate_terms(terms: &LoanTerms) -> EngineResult<()> {
    if terms.principal <= Decimal::ZERO {
        return Err(EngineError::ValidationError {
            field: "principal".to_string(),
            message: "must be greater than zero".to_string(),
        });
    }

    if terms.tenure_months == 0 || terms.tenure_months > MAX_TENURE_MONTHS {
        return Err(EngineError::ValidationError {
            field: "tenure_months".to_string(),
            message: format!("must be between 1 and {}", MAX_TENURE_MONTHS),
        });
    }

    if terms.annual_interest_rate_pct < Decimal::ZERO {
        return Err(EngineError::ValidationError {
            field: "annual_interest_rate_pct".to_string(),
            message: "cannot be negative".to_string(),
        });
    }

    Ok(())
}

/// The monthly rate implied by the annual percentage rate.
fn monthly_rate(terms: &LoanTerms) -> Decimal {
    terms.annual_interest_rate_pct / Decimal::from(100) / Decimal::from(12)
}

/// `(1 + rate)^months` by repeated multiplication, staying in decimals.
fn compound_factor(rate: Decimal, months: u32) -> Decimal {
    let base = Decimal::ONE + rate;
    let mut factor = Decimal::ONE;
    for _ in 0..months {
        factor *= base;
    }
    factor
}
