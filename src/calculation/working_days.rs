//! Working-days calculation for a month.
//!
//! This module combines the calendar policy's weekend classification with
//! the organization holiday list to produce a [`WorkingDaysSummary`].

use std::collections::BTreeSet;

use chrono::Datelike;

use crate::error::EngineResult;
use crate::models::{AuditStep, AuditWarning, Holiday, WeeklyOffPolicy, WorkingDaysSummary};

use super::calendar_policy::{days_in_month, weekend_dates};

/// The result of a working-days calculation, including the audit step.
#[derive(Debug, Clone)]
pub struct WorkingDaysResult {
    /// The computed summary.
    pub summary: WorkingDaysSummary,
    /// The audit step recording this calculation.
    pub audit_step: AuditStep,
    /// A data-quality warning, set when the raw working-days figure was
    /// negative and had to be clamped to zero.
    pub warning: Option<AuditWarning>,
}

/// Computes the working-days summary for a month.
///
/// `holiday_count` counts distinct holiday dates inside the month that are
/// not already classified as weekend, so a holiday falling on a weekly off
/// is never subtracted twice. Holidays outside the month are ignored.
///
/// # Arguments
///
/// * `year` - The calendar year
/// * `month` - The month, 1 through 12
/// * `policy` - The weekly-off policy
/// * `holidays` - The organization holiday list (any scope; filtered here)
/// * `step_number` - The step number for audit trail sequencing
///
/// # Returns
///
/// Returns a [`WorkingDaysResult`], or an error when the (year, month)
/// pair is invalid. A pathological holiday list that would push working
/// days negative clamps to zero and surfaces a warning instead of failing.
///
/// # Example
///
/// ```
/// use payroll_engine::calculation::calculate_working_days;
/// use payroll_engine::models::WeeklyOffPolicy;
///
/// let result = calculate_working_days(2025, 1, &WeeklyOffPolicy::Standard, &[], 1).unwrap();
/// assert_eq!(result.summary.working_days, 23);
/// ```
pub fn calculate_working_days(
    year: i32,
    month: u32,
    policy: &WeeklyOffPolicy,
    holidays: &[Holiday],
    step_number: u32,
) -> EngineResult<WorkingDaysResult> {
    let total_days_in_month = days_in_month(year, month)?;
    let weekends = weekend_dates(year, month, policy)?;

    let holiday_dates: BTreeSet<_> = holidays
        .iter()
        .map(|h| h.date)
        .filter(|d| d.year() == year && d.month() == month)
        .filter(|d| !weekends.contains(d))
        .collect();

    let weekend_count = weekends.len() as u32;
    let holiday_count = holiday_dates.len() as u32;

    let raw_working_days =
        total_days_in_month as i64 - weekend_count as i64 - holiday_count as i64;
    let clamped = raw_working_days < 0;
    let working_days = raw_working_days.max(0) as u32;

    let warning = clamped.then(|| AuditWarning {
        code: "data_quality".to_string(),
        message: format!(
            "Holiday list for {}-{:02} pushes working days to {}; clamped to 0",
            year, month, raw_working_days
        ),
        severity: "high".to_string(),
    });

    let summary = WorkingDaysSummary {
        total_days_in_month,
        weekend_count,
        holiday_count,
        working_days,
    };

    let audit_step = AuditStep {
        step_number,
        rule_id: "working_days".to_string(),
        rule_name: "Working Days Calculation".to_string(),
        input: serde_json::json!({
            "year": year,
            "month": month,
            "weekly_off_policy": policy,
            "holidays_supplied": holidays.len()
        }),
        output: serde_json::json!({
            "total_days_in_month": total_days_in_month,
            "weekend_count": weekend_count,
            "holiday_count": holiday_count,
            "working_days": working_days,
            "clamped": clamped
        }),
        reasoning: format!(
            "{} days - {} weekends - {} holidays = {} working days",
            total_days_in_month, weekend_count, holiday_count, working_days
        ),
    };

    Ok(WorkingDaysResult {
        summary,
        audit_step,
        warning,
    })
}
