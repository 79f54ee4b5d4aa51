//! Salary proration for a month.
//!
//! This module scales a salary structure by the ratio of present days to
//! working days, producing a per-component breakdown whose rounded
//! amounts sum exactly to the reported totals.

use rust_decimal::Decimal;

use crate::error::{EngineError, EngineResult};
use crate::models::{
    AuditStep, ComponentKind, ProratedComponent, SalaryProration, SalaryStructure,
    WorkingDaysSummary,
};

use super::round_currency;

/// The result of a salary proration, including the audit step.
#[derive(Debug, Clone)]
pub struct ProrationResult {
    /// The prorated salary breakdown.
    pub proration: SalaryProration,
    /// The audit step recording this calculation.
    pub audit_step: AuditStep,
}

/// Prorates a salary structure by attendance.
///
/// The attendance ratio is `min(1, present_days / working_days)`; more
/// present days than working days clamp to a full month rather than
/// overpaying. Each component is rounded to currency precision
/// independently and the totals are sums of the rounded amounts, so the
/// reported breakdown always reconciles exactly.
///
/// A month with zero working days is a valid organizational state: the
/// result carries zero amounts and the `degenerate_month` flag instead of
/// dividing by zero.
///
/// # Arguments
///
/// * `structure` - The salary structure to prorate
/// * `summary` - The working-days summary for the month
/// * `present_days` - Days present, fractional when half days occurred
/// * `step_number` - The step number for audit trail sequencing
///
/// # Returns
///
/// Returns a [`ProrationResult`], or an error if:
/// - The structure has no components (`NoSalaryStructure`)
/// - Any component amount is negative (`ValidationError`)
///
/// # Example
///
/// ```
/// use payroll_engine::calculation::prorate_salary;
/// use payroll_engine::models::{
///     ComponentKind, SalaryComponent, SalaryStructure, WorkingDaysSummary,
/// };
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let structure = SalaryStructure {
///     components: vec![SalaryComponent {
///         name: "basic".to_string(),
///         monthly_amount: Decimal::from_str("30000").unwrap(),
///         kind: ComponentKind::Earning,
///     }],
/// };
/// let summary = WorkingDaysSummary {
///     total_days_in_month: 31,
///     weekend_count: 8,
///     holiday_count: 0,
///     working_days: 23,
/// };
///
/// let result = prorate_salary(&structure, &summary, Decimal::from_str("18").unwrap(), 1).unwrap();
/// assert_eq!(result.proration.prorated_gross, Decimal::from_str("23478.26").unwrap());
/// ```
pub fn prorate_salary(
    structure: &SalaryStructure,
    summary: &WorkingDaysSummary,
    present_days: Decimal,
    step_number: u32,
) -> EngineResult<ProrationResult> {
    if structure.is_empty() {
        return Err(EngineError::NoSalaryStructure);
    }

    if let Some(component) = structure
        .components
        .iter()
        .find(|c| c.monthly_amount < Decimal::ZERO)
    {
        return Err(EngineError::ValidationError {
            field: format!("components.{}", component.name),
            message: "monthly amount cannot be negative".to_string(),
        });
    }

    let degenerate_month = summary.working_days == 0;
    let attendance_ratio = if degenerate_month {
        Decimal::ZERO
    } else {
        (present_days / Decimal::from(summary.working_days)).min(Decimal::ONE)
    };

    let components: Vec<ProratedComponent> = structure
        .components
        .iter()
        .map(|c| ProratedComponent {
            name: c.name.clone(),
            kind: c.kind,
            monthly_amount: c.monthly_amount,
            prorated_amount: round_currency(c.monthly_amount * attendance_ratio),
        })
        .collect();

    let prorated_gross: Decimal = components
        .iter()
        .filter(|c| c.kind == ComponentKind::Earning)
        .map(|c| c.prorated_amount)
        .sum();
    let prorated_deductions: Decimal = components
        .iter()
        .filter(|c| c.kind == ComponentKind::Deduction)
        .map(|c| c.prorated_amount)
        .sum();
    let prorated_net = prorated_gross - prorated_deductions;

    let audit_step = AuditStep {
        step_number,
        rule_id: "salary_proration".to_string(),
        rule_name: "Salary Proration".to_string(),
        input: serde_json::json!({
            "components": structure.components.len(),
            "gross_monthly": structure.gross_monthly().to_string(),
            "present_days": present_days.to_string(),
            "working_days": summary.working_days
        }),
        output: serde_json::json!({
            "attendance_ratio": attendance_ratio.to_string(),
            "prorated_gross": prorated_gross.to_string(),
            "prorated_net": prorated_net.to_string(),
            "degenerate_month": degenerate_month
        }),
        reasoning: if degenerate_month {
            "Month has no working days; all prorated amounts are zero".to_string()
        } else {
            format!(
                "{} / {} working days -> ratio {}; gross {} -> {}",
                present_days,
                summary.working_days,
                attendance_ratio,
                structure.gross_monthly(),
                prorated_gross
            )
        },
    };

    Ok(ProrationResult {
        proration: SalaryProration {
            attendance_ratio,
            prorated_gross,
            prorated_net,
            degenerate_month,
            components,
        },
        audit_step,
    })
}
