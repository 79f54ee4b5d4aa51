//! Fine calculation for attendance violations.
//!
//! This module computes fines for late arrivals and early exits under a
//! shift-based or rule-based policy, and aggregates them across a month.

use rust_decimal::Decimal;

use crate::error::{EngineError, EngineResult};
use crate::models::{
    AuditStep, DailyFine, FineAppliesTo, FineMethod, FinePolicy, FineRule, FineSummary,
    SalaryBasis, Violation,
};

use super::round_currency;

/// The result of a monthly fine assessment, including the audit step.
#[derive(Debug, Clone)]
pub struct FineAssessment {
    /// The aggregated fines for the month.
    pub summary: FineSummary,
    /// The audit step recording this assessment.
    pub audit_step: AuditStep,
}

/// Computes the fine for one violation day.
///
/// Returns zero when the policy is disabled or the violation carries no
/// minutes. Late arrivals and early exits on the same day are evaluated
/// independently and their amounts summed; the policy does not collapse
/// them into one event.
///
/// # Behavior
///
/// - **Shift-based**: `hourly_rate = daily_salary / shift_hours`; the fine
///   is `hourly_rate x late_minutes / 60`. Early-exit minutes are charged
///   the same way only when the policy's `shift_based_early_exit`
///   configuration point is set; by default only late arrivals trigger a
///   shift-based fine.
/// - **Rule-based**: rules are evaluated in configured order and the first
///   rule whose `applies_to` covers the violation kind wins; later
///   matching rules are ignored for that violation.
///
/// # Errors
///
/// - `InvalidFinePolicy` when a shift-based policy has no positive
///   `shift_hours`, or a `FixedAmount` rule has no (or a negative)
///   `fixed_amount`.
///
/// # Example
///
/// ```
/// use payroll_engine::calculation::calculate_daily_fine;
/// use payroll_engine::models::{
///     FineAppliesTo, FineMethod, FineMultiplier, FinePolicy, FineRule, SalaryBasis, Violation,
/// };
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let policy = FinePolicy {
///     enabled: true,
///     apply_to_payroll: true,
///     method: FineMethod::RuleBased,
///     rules: vec![FineRule {
///         multiplier: FineMultiplier::TwoXSalary,
///         fixed_amount: None,
///         applies_to: FineAppliesTo::LateArrival,
///     }],
///     shift_hours: None,
///     shift_based_early_exit: false,
///     salary_basis: SalaryBasis::MonthlyGross,
/// };
/// let violation = Violation {
///     date: NaiveDate::from_ymd_opt(2025, 1, 6).unwrap(),
///     late_minutes: 20,
///     early_minutes: 0,
/// };
///
/// let fine = calculate_daily_fine(&policy, Decimal::from_str("1000").unwrap(), &violation).unwrap();
/// assert_eq!(fine, Decimal::from_str("2000.00").unwrap());
/// ```
pub fn calculate_daily_fine(
    policy: &FinePolicy,
    daily_salary: Decimal,
    violation: &Violation,
) -> EngineResult<Decimal> {
    if !policy.enabled {
        return Ok(Decimal::ZERO);
    }

    let amount = match policy.method {
        FineMethod::ShiftBased => shift_based_fine(policy, daily_salary, violation)?,
        FineMethod::RuleBased => rule_based_fine(policy, daily_salary, violation)?,
    };

    Ok(round_currency(amount.max(Decimal::ZERO)))
}

/// Shift-based fine: lateness charged at the hourly rate implied by the
/// configured shift length.
fn shift_based_fine(
    policy: &FinePolicy,
    daily_salary: Decimal,
    violation: &Violation,
) -> EngineResult<Decimal> {
    let shift_hours = policy
        .shift_hours
        .filter(|h| *h > Decimal::ZERO)
        .ok_or_else(|| EngineError::InvalidFinePolicy {
            message: "shift_hours must be positive for shift-based fines".to_string(),
        })?;

    let hourly_rate = daily_salary / shift_hours;
    let sixty = Decimal::from(60);

    let mut fine = hourly_rate * Decimal::from(violation.late_minutes) / sixty;
    if policy.shift_based_early_exit {
        fine += hourly_rate * Decimal::from(violation.early_minutes) / sixty;
    }

    Ok(fine)
}

/// Rule-based fine: the first matching rule per violation kind wins.
fn rule_based_fine(
    policy: &FinePolicy,
    daily_salary: Decimal,
    violation: &Violation,
) -> EngineResult<Decimal> {
    let mut fine = Decimal::ZERO;

    if violation.late_minutes > 0 {
        if let Some(rule) = first_matching_rule(&policy.rules, FineAppliesTo::LateArrival) {
            fine += resolve_multiplier(rule, daily_salary)?;
        }
    }

    if violation.early_minutes > 0 {
        if let Some(rule) = first_matching_rule(&policy.rules, FineAppliesTo::EarlyExit) {
            fine += resolve_multiplier(rule, daily_salary)?;
        }
    }

    Ok(fine)
}

/// Finds the first rule covering the given violation kind.
fn first_matching_rule(rules: &[FineRule], kind: FineAppliesTo) -> Option<&FineRule> {
    rules
        .iter()
        .find(|r| r.applies_to == kind || r.applies_to == FineAppliesTo::Both)
}

/// Resolves a rule's multiplier against the daily salary.
fn resolve_multiplier(rule: &FineRule, daily_salary: Decimal) -> EngineResult<Decimal> {
    use crate::models::FineMultiplier::*;

    let amount = match rule.multiplier {
        OneXSalary | FullDay => daily_salary,
        TwoXSalary => daily_salary * Decimal::from(2),
        ThreeXSalary => daily_salary * Decimal::from(3),
        HalfDay => daily_salary * Decimal::new(5, 1),
        FixedAmount => rule
            .fixed_amount
            .filter(|a| *a >= Decimal::ZERO)
            .ok_or_else(|| EngineError::InvalidFinePolicy {
                message: "fixed_amount is required and must be non-negative for fixed-amount rules"
                    .to_string(),
            })?,
    };

    Ok(amount)
}

/// Aggregates fines across a month of violations.
///
/// The daily salary divides the monthly gross by the working days for
/// shift-based policies (always, so the fine never feeds back into the
/// proration it derives from), and for rule-based policies whichever
/// gross the policy's `salary_basis` selects.
///
/// A disabled policy or a month with zero working days produces a zero
/// total. When `apply_to_payroll` is false the total is still reported so
/// callers can display it without deducting it.
///
/// # Arguments
///
/// * `policy` - The fine policy
/// * `monthly_gross` - The full monthly gross salary
/// * `prorated_gross` - The attendance-prorated gross salary
/// * `working_days` - Working days in the month
/// * `violations` - The month's violations in date order
/// * `step_number` - The step number for audit trail sequencing
pub fn assess_monthly_fines(
    policy: &FinePolicy,
    monthly_gross: Decimal,
    prorated_gross: Decimal,
    working_days: u32,
    violations: &[Violation],
    step_number: u32,
) -> EngineResult<FineAssessment> {
    let mut daily_fines = Vec::new();
    let mut total = Decimal::ZERO;

    let computable = policy.enabled && working_days > 0;
    if computable {
        let basis = match policy.method {
            FineMethod::ShiftBased => monthly_gross,
            FineMethod::RuleBased => match policy.salary_basis {
                SalaryBasis::MonthlyGross => monthly_gross,
                SalaryBasis::ProratedGross => prorated_gross,
            },
        };
        let daily_salary = basis / Decimal::from(working_days);

        for violation in violations {
            let amount = calculate_daily_fine(policy, daily_salary, violation)?;
            total += amount;
            daily_fines.push(DailyFine {
                date: violation.date,
                late_minutes: violation.late_minutes,
                early_minutes: violation.early_minutes,
                amount,
            });
        }
    }

    let reasoning = if !policy.enabled {
        "Fine policy disabled; no fines assessed".to_string()
    } else if working_days == 0 {
        "Month has no working days; no daily salary to fine against".to_string()
    } else {
        format!(
            "{} violations fined a total of {}{}",
            violations.len(),
            total,
            if policy.apply_to_payroll {
                ""
            } else {
                " (reported only; not applied to payroll)"
            }
        )
    };

    let audit_step = AuditStep {
        step_number,
        rule_id: "fine_assessment".to_string(),
        rule_name: "Fine Assessment".to_string(),
        input: serde_json::json!({
            "enabled": policy.enabled,
            "method": policy.method,
            "violations": violations.len(),
            "monthly_gross": monthly_gross.to_string(),
            "working_days": working_days
        }),
        output: serde_json::json!({
            "total": total.to_string(),
            "apply_to_payroll": policy.apply_to_payroll,
            "daily_fines": daily_fines.len()
        }),
        reasoning,
    };

    Ok(FineAssessment {
        summary: FineSummary {
            total,
            apply_to_payroll: policy.apply_to_payroll,
            daily_fines,
        },
        audit_step,
    })
}
