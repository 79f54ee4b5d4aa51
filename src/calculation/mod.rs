//! Calculation logic for the Compensation Calculation Engine.
//!
//! This module contains all the calculation functions for determining
//! pay, including weekend-date classification, working-days calculation,
//! attendance aggregation, salary proration, fine assessment for
//! late-arrival/early-exit violations, loan amortization, and the
//! monthly payroll orchestration that ties the stages together.

use rust_decimal::{Decimal, RoundingStrategy};

mod attendance_summary;
mod calendar_policy;
mod fines;
mod loan;
mod payroll_run;
mod proration;
mod working_days;

pub use attendance_summary::{AttendanceAggregation, aggregate_attendance};
pub use calendar_policy::{days_in_month, weekend_dates};
pub use fines::{FineAssessment, assess_monthly_fines, calculate_daily_fine};
pub use loan::{
    LoanSchedule, MAX_TENURE_MONTHS, ScheduleEntry, amortization_schedule, calculate_installment,
};
pub use payroll_run::compute_payroll;
pub use proration::{ProrationResult, prorate_salary};
pub use working_days::{WorkingDaysResult, calculate_working_days};

/// The number of decimal places carried by monetary amounts.
pub const CURRENCY_DP: u32 = 2;

/// Rounds a monetary amount to currency precision, half-up.
///
/// Every stage rounds through this function so repeated proration never
/// drifts between components and totals.
///
/// # Example
///
/// ```
/// use payroll_engine::calculation::round_currency;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let amount = Decimal::from_str("23478.265").unwrap();
/// assert_eq!(round_currency(amount), Decimal::from_str("23478.27").unwrap());
/// ```
pub fn round_currency(amount: Decimal) -> Decimal {
    amount.round_dp_with_strategy(CURRENCY_DP, RoundingStrategy::MidpointAwayFromZero)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_round_currency_half_up() {
        assert_eq!(round_currency(dec("1.005")), dec("1.01"));
        assert_eq!(round_currency(dec("1.004")), dec("1.00"));
        assert_eq!(round_currency(dec("1.995")), dec("2.00"));
    }

    #[test]
    fn test_round_currency_negative_rounds_away_from_zero() {
        assert_eq!(round_currency(dec("-1.005")), dec("-1.01"));
    }

    #[test]
    fn test_round_currency_leaves_exact_values() {
        assert_eq!(round_currency(dec("100")), dec("100"));
        assert_eq!(round_currency(dec("99.99")), dec("99.99"));
    }
}
