//! Monthly payroll orchestration.
//!
//! This module chains the working-days calculation, attendance
//! aggregation, salary proration, and fine assessment into one
//! [`PayrollComputationResult`]. The function is pure: identical inputs
//! always yield identical outputs, which is what makes batch re-runs and
//! audits safe.

use chrono::Datelike;
use rust_decimal::Decimal;

use crate::error::{EngineError, EngineResult};
use crate::models::{
    AttendanceDay, AuditTrace, AuditWarning, Holiday, OrganizationPolicy,
    PayrollComputationResult, SalaryStructure,
};

use super::attendance_summary::aggregate_attendance;
use super::fines::assess_monthly_fines;
use super::proration::prorate_salary;
use super::working_days::calculate_working_days;

/// Computes one employee's payroll for one month.
///
/// The engine consumes its inputs read-only and performs no I/O; any
/// waiting (fetching attendance, holiday lists) happens in the calling
/// layer. Attendance records outside the target month are dropped with a
/// data-quality warning rather than rejected.
///
/// The net payable figure is the prorated net minus the fine total when
/// the fine policy applies to payroll; otherwise the fine total is
/// reported in the result without being deducted.
///
/// # Arguments
///
/// * `employee_id` - The employee the computation is for
/// * `year` - The calendar year
/// * `month` - The month, 1 through 12
/// * `structure` - The employee's salary structure for the month
/// * `attendance` - The employee's attendance records for the month
/// * `holidays` - The organization holiday list (any scope)
/// * `policy` - The organization policy, passed explicitly
///
/// # Errors
///
/// - `NoAttendanceData` when no attendance records are supplied
/// - `NoSalaryStructure` when the structure has no components
/// - `InvalidPeriod` / `ValidationError` / `InvalidFinePolicy` from the
///   underlying stages
///
/// # Example
///
/// ```
/// use payroll_engine::calculation::compute_payroll;
/// use payroll_engine::models::{
///     AttendanceDay, AttendanceStatus, ComponentKind, FinePolicy, OrganizationPolicy,
///     SalaryComponent, SalaryStructure, WeeklyOffPolicy,
/// };
/// use chrono::NaiveDate;
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
/// let attendance = vec![AttendanceDay {
///     date: NaiveDate::from_ymd_opt(2025, 1, 6).unwrap(),
///     status: AttendanceStatus::Present,
///     punch_in: None,
///     punch_out: None,
///     late_minutes: None,
///     early_minutes: None,
///     leave_approved: false,
/// }];
/// let policy = OrganizationPolicy {
///     weekly_off: WeeklyOffPolicy::Standard,
///     fine_policy: FinePolicy::disabled(),
///     include_leaves: false,
/// };
///
/// let result = compute_payroll("emp_001", 2025, 1, &structure, &attendance, &[], &policy).unwrap();
/// assert_eq!(result.working_days.working_days, 23);
/// ```
pub fn compute_payroll(
    employee_id: &str,
    year: i32,
    month: u32,
    structure: &SalaryStructure,
    attendance: &[AttendanceDay],
    holidays: &[Holiday],
    policy: &OrganizationPolicy,
) -> EngineResult<PayrollComputationResult> {
    if attendance.is_empty() {
        return Err(EngineError::NoAttendanceData { year, month });
    }

    let mut steps = Vec::new();
    let mut warnings = Vec::new();
    let mut step_number = 1;

    // Working days for the month under the weekly-off policy.
    let working_days = calculate_working_days(year, month, &policy.weekly_off, holidays, step_number)?;
    steps.push(working_days.audit_step);
    warnings.extend(working_days.warning);
    step_number += 1;

    // Drop records that belong to a different month before aggregating.
    let in_month: Vec<AttendanceDay> = attendance
        .iter()
        .filter(|d| d.date.year() == year && d.date.month() == month)
        .cloned()
        .collect();
    let dropped = attendance.len() - in_month.len();
    if dropped > 0 {
        warnings.push(AuditWarning {
            code: "data_quality".to_string(),
            message: format!(
                "{} attendance record(s) outside {}-{:02} were ignored",
                dropped, year, month
            ),
            severity: "medium".to_string(),
        });
    }
    if in_month.is_empty() {
        return Err(EngineError::NoAttendanceData { year, month });
    }

    let aggregation = aggregate_attendance(&in_month, policy.include_leaves, step_number);
    steps.push(aggregation.audit_step);
    step_number += 1;

    let proration = prorate_salary(
        structure,
        &working_days.summary,
        aggregation.summary.present_days,
        step_number,
    )?;
    steps.push(proration.audit_step);
    step_number += 1;

    let fines = assess_monthly_fines(
        &policy.fine_policy,
        structure.gross_monthly(),
        proration.proration.prorated_gross,
        working_days.summary.working_days,
        &aggregation.summary.violations,
        step_number,
    )?;
    steps.push(fines.audit_step);

    let deduction = if fines.summary.apply_to_payroll {
        fines.summary.total
    } else {
        Decimal::ZERO
    };
    let net_payable = proration.proration.prorated_net - deduction;

    Ok(PayrollComputationResult {
        employee_id: employee_id.to_string(),
        year,
        month,
        working_days: working_days.summary,
        attendance: aggregation.summary,
        proration: proration.proration,
        fines: fines.summary,
        net_payable,
        audit: AuditTrace { steps, warnings },
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{
        AttendanceStatus, ComponentKind, FineAppliesTo, FineMethod, FineMultiplier, FinePolicy,
        FineRule, SalaryBasis, SalaryComponent, WeeklyOffPolicy,
    };
    use chrono::NaiveDate;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn structure(amount: &str) -> SalaryStructure {
        SalaryStructure {
            components: vec![SalaryComponent {
                name: "basic".to_string(),
                monthly_amount: dec(amount),
                kind: ComponentKind::Earning,
            }],
        }
    }

    fn day(year: i32, month: u32, day_of_month: u32, status: AttendanceStatus) -> AttendanceDay {
        AttendanceDay {
            date: NaiveDate::from_ymd_opt(year, month, day_of_month).unwrap(),
            status,
            punch_in: None,
            punch_out: None,
            late_minutes: None,
            early_minutes: None,
            leave_approved: false,
        }
    }

    fn present_days(count: u32) -> Vec<AttendanceDay> {
        // January 2025 weekdays starting Monday the 6th.
        let weekdays = [
            6, 7, 8, 9, 10, 13, 14, 15, 16, 17, 20, 21, 22, 23, 24, 27, 28, 29, 30, 31, 1, 2, 3,
        ];
        weekdays
            .iter()
            .take(count as usize)
            .map(|d| day(2025, 1, *d, AttendanceStatus::Present))
            .collect()
    }

    fn base_policy() -> OrganizationPolicy {
        OrganizationPolicy {
            weekly_off: WeeklyOffPolicy::Standard,
            fine_policy: FinePolicy::disabled(),
            include_leaves: false,
        }
    }

    /// PRL-001: the reference scenario computes end to end
    #[test]
    fn test_reference_scenario() {
        let result = compute_payroll(
            "emp_001",
            2025,
            1,
            &structure("30000"),
            &present_days(18),
            &[],
            &base_policy(),
        )
        .unwrap();

        assert_eq!(result.working_days.working_days, 23);
        assert_eq!(result.attendance.present_days, dec("18"));
        assert_eq!(result.proration.prorated_gross, dec("23478.26"));
        assert_eq!(result.net_payable, dec("23478.26"));
        assert_eq!(result.audit.steps.len(), 4);
    }

    /// PRL-002: fines applied to payroll reduce the net figure
    #[test]
    fn test_fines_reduce_net_payable() {
        let mut policy = base_policy();
        policy.fine_policy = FinePolicy {
            enabled: true,
            apply_to_payroll: true,
            method: FineMethod::RuleBased,
            rules: vec![FineRule {
                multiplier: FineMultiplier::OneXSalary,
                fixed_amount: None,
                applies_to: FineAppliesTo::Both,
            }],
            shift_hours: None,
            shift_based_early_exit: false,
            salary_basis: SalaryBasis::MonthlyGross,
        };

        let mut attendance = present_days(23);
        attendance[0].late_minutes = Some(25);

        let result = compute_payroll(
            "emp_001",
            2025,
            1,
            &structure("23000"),
            &attendance,
            &[],
            &policy,
        )
        .unwrap();

        // Full attendance nets 23000; one 1x-daily-salary fine of 1000.
        assert_eq!(result.fines.total, dec("1000.00"));
        assert_eq!(result.net_payable, dec("22000.00"));
    }

    /// PRL-003: visibility-only fines leave the net figure untouched
    #[test]
    fn test_report_only_fines_do_not_reduce_net() {
        let mut policy = base_policy();
        policy.fine_policy = FinePolicy {
            enabled: true,
            apply_to_payroll: false,
            method: FineMethod::RuleBased,
            rules: vec![FineRule {
                multiplier: FineMultiplier::OneXSalary,
                fixed_amount: None,
                applies_to: FineAppliesTo::Both,
            }],
            shift_hours: None,
            shift_based_early_exit: false,
            salary_basis: SalaryBasis::MonthlyGross,
        };

        let mut attendance = present_days(23);
        attendance[0].late_minutes = Some(25);

        let result = compute_payroll(
            "emp_001",
            2025,
            1,
            &structure("23000"),
            &attendance,
            &[],
            &policy,
        )
        .unwrap();

        assert_eq!(result.fines.total, dec("1000.00"));
        assert_eq!(result.net_payable, dec("23000.00"));
    }

    /// PRL-004: empty attendance is reported, not defaulted
    #[test]
    fn test_empty_attendance_is_an_error() {
        let result = compute_payroll(
            "emp_001",
            2025,
            1,
            &structure("30000"),
            &[],
            &[],
            &base_policy(),
        );

        assert!(matches!(
            result,
            Err(EngineError::NoAttendanceData { year: 2025, month: 1 })
        ));
    }

    /// PRL-005: out-of-month records are dropped with a warning
    #[test]
    fn test_out_of_month_records_dropped_with_warning() {
        let mut attendance = present_days(18);
        attendance.push(day(2025, 2, 3, AttendanceStatus::Present));

        let result = compute_payroll(
            "emp_001",
            2025,
            1,
            &structure("30000"),
            &attendance,
            &[],
            &base_policy(),
        )
        .unwrap();

        assert_eq!(result.attendance.present_days, dec("18"));
        assert!(
            result
                .audit
                .warnings
                .iter()
                .any(|w| w.code == "data_quality")
        );
    }

    /// PRL-006: only out-of-month records means no attendance data
    #[test]
    fn test_only_out_of_month_records_is_an_error() {
        let attendance = vec![day(2025, 2, 3, AttendanceStatus::Present)];

        let result = compute_payroll(
            "emp_001",
            2025,
            1,
            &structure("30000"),
            &attendance,
            &[],
            &base_policy(),
        );

        assert!(matches!(result, Err(EngineError::NoAttendanceData { .. })));
    }

    /// PRL-007: identical inputs yield identical outputs
    #[test]
    fn test_idempotent_across_reruns() {
        let attendance = present_days(18);
        let holidays = vec![Holiday {
            date: NaiveDate::from_ymd_opt(2025, 1, 1).unwrap(),
            name: "New Year's Day".to_string(),
            category: "national".to_string(),
        }];

        let first = compute_payroll(
            "emp_001",
            2025,
            1,
            &structure("30000"),
            &attendance,
            &holidays,
            &base_policy(),
        )
        .unwrap();
        let second = compute_payroll(
            "emp_001",
            2025,
            1,
            &structure("30000"),
            &attendance,
            &holidays,
            &base_policy(),
        )
        .unwrap();

        assert_eq!(first, second);
    }

    /// PRL-008: empty salary structure propagates upward
    #[test]
    fn test_empty_structure_propagates() {
        let result = compute_payroll(
            "emp_001",
            2025,
            1,
            &SalaryStructure { components: vec![] },
            &present_days(18),
            &[],
            &base_policy(),
        );

        assert!(matches!(result, Err(EngineError::NoSalaryStructure)));
    }

    #[test]
    fn test_audit_steps_are_sequential() {
        let result = compute_payroll(
            "emp_001",
            2025,
            1,
            &structure("30000"),
            &present_days(10),
            &[],
            &base_policy(),
        )
        .unwrap();

        let numbers: Vec<u32> = result.audit.steps.iter().map(|s| s.step_number).collect();
        assert_eq!(numbers, vec![1, 2, 3, 4]);
    }
}
