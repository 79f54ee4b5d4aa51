//! Payroll computation result models.
//!
//! This module contains the [`PayrollComputationResult`] type and its
//! associated structures that capture all outputs from a payroll run:
//! the working-days summary, attendance summary, prorated salary
//! breakdown, fine detail, net payable figure, and audit trace.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::ComponentKind;

/// The working-days summary for one month under one weekly-off policy.
///
/// Always recomputed per (year, month, policy, holiday list) rather than
/// persisted, so it can never go stale against a changed holiday list.
///
/// # Example
///
/// ```
/// use payroll_engine::models::WorkingDaysSummary;
///
/// let summary = WorkingDaysSummary {
///     total_days_in_month: 31,
///     weekend_count: 8,
///     holiday_count: 0,
///     working_days: 23,
/// };
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkingDaysSummary {
    /// The calendar length of the month.
    pub total_days_in_month: u32,
    /// The number of weekend dates under the weekly-off policy.
    pub weekend_count: u32,
    /// The number of holiday dates not already counted as weekend.
    pub holiday_count: u32,
    /// Total days minus weekends minus holidays, clamped at zero.
    pub working_days: u32,
}

/// A late-arrival/early-exit violation on one attended day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Violation {
    /// The date of the violation.
    pub date: NaiveDate,
    /// Minutes of late arrival; zero when none.
    pub late_minutes: u32,
    /// Minutes of early exit; zero when none.
    pub early_minutes: u32,
}

/// The reduction of one month of attendance records.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttendanceSummary {
    /// Days counted as present for proration; half days contribute 0.5.
    pub present_days: Decimal,
    /// Days recorded as absent.
    pub absent_days: u32,
    /// Number of half-day records.
    pub half_day_count: u32,
    /// Days recorded as on leave (approved or not).
    pub leave_days: u32,
    /// Days recorded as pending or not marked.
    pub unmarked_days: u32,
    /// Late-arrival/early-exit violations in date order.
    pub violations: Vec<Violation>,
}

/// One salary component scaled by the attendance ratio.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProratedComponent {
    /// The component name.
    pub name: String,
    /// Whether the component is an earning or a deduction.
    pub kind: ComponentKind,
    /// The full monthly amount.
    pub monthly_amount: Decimal,
    /// The amount after proration, rounded to currency precision.
    pub prorated_amount: Decimal,
}

/// The prorated salary for one month.
///
/// Each component is rounded independently, so the breakdown always sums
/// exactly to the reported totals.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SalaryProration {
    /// The ratio of present days to working days, clamped to [0, 1].
    pub attendance_ratio: Decimal,
    /// Sum of prorated earning components.
    pub prorated_gross: Decimal,
    /// Prorated gross minus prorated deductions.
    pub prorated_net: Decimal,
    /// True when the month has zero working days; amounts are then zero.
    pub degenerate_month: bool,
    /// The per-component breakdown in structure order.
    pub components: Vec<ProratedComponent>,
}

/// The fine computed for a single violation day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailyFine {
    /// The date of the violation.
    pub date: NaiveDate,
    /// Minutes of late arrival on that day.
    pub late_minutes: u32,
    /// Minutes of early exit on that day.
    pub early_minutes: u32,
    /// The fine amount for the day, rounded to currency precision.
    pub amount: Decimal,
}

/// The month's aggregated fines.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FineSummary {
    /// The sum of all daily fines.
    pub total: Decimal,
    /// Whether the total is subtracted from net pay. When false the
    /// amount is reported for visibility only.
    pub apply_to_payroll: bool,
    /// The per-day fine detail in date order.
    pub daily_fines: Vec<DailyFine>,
}

/// A single step in the audit trace recording a calculation decision.
///
/// Each step captures the input, output, and reasoning for one stage of
/// the payroll pipeline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditStep {
    /// The sequential step number.
    pub step_number: u32,
    /// The unique identifier of the rule that was applied.
    pub rule_id: String,
    /// The human-readable name of the rule.
    pub rule_name: String,
    /// The input data for this step.
    pub input: serde_json::Value,
    /// The output data from this step.
    pub output: serde_json::Value,
    /// Human-readable explanation of the decision.
    pub reasoning: String,
}

/// A warning generated during calculation.
///
/// Warnings indicate data-quality issues that don't prevent calculation
/// but may require attention.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditWarning {
    /// A code identifying the type of warning.
    pub code: String,
    /// A human-readable description of the warning.
    pub message: String,
    /// The severity level (e.g., "low", "medium", "high").
    pub severity: String,
}

/// The complete audit trace for a payroll run.
///
/// Records every decision made during the computation so a reviewer can
/// reconstruct how the net figure was reached.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditTrace {
    /// The sequence of calculation steps.
    pub steps: Vec<AuditStep>,
    /// Any warnings generated during calculation.
    pub warnings: Vec<AuditWarning>,
}

/// The complete result of one employee's payroll computation for a month.
///
/// This is the engine's produced interface, consumed by payslip rendering
/// and payroll persistence. It is a pure function of its inputs: no
/// timestamps, identifiers, or other ambient reads are embedded here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayrollComputationResult {
    /// The employee the computation is for.
    pub employee_id: String,
    /// The year of the computed month.
    pub year: i32,
    /// The computed month (1-12).
    pub month: u32,
    /// The working-days summary for the month.
    pub working_days: WorkingDaysSummary,
    /// The attendance reduction for the month.
    pub attendance: AttendanceSummary,
    /// The prorated salary breakdown.
    pub proration: SalaryProration,
    /// The aggregated fines.
    pub fines: FineSummary,
    /// Prorated net minus the fine total when the policy applies fines
    /// to payroll; otherwise equal to the prorated net.
    pub net_payable: Decimal,
    /// The audit trace for the run.
    pub audit: AuditTrace,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn sample_result() -> PayrollComputationResult {
        PayrollComputationResult {
            employee_id: "emp_001".to_string(),
            year: 2025,
            month: 1,
            working_days: WorkingDaysSummary {
                total_days_in_month: 31,
                weekend_count: 8,
                holiday_count: 0,
                working_days: 23,
            },
            attendance: AttendanceSummary {
                present_days: dec("18"),
                absent_days: 5,
                half_day_count: 0,
                leave_days: 0,
                unmarked_days: 0,
                violations: vec![],
            },
            proration: SalaryProration {
                attendance_ratio: dec("18") / dec("23"),
                prorated_gross: dec("23478.26"),
                prorated_net: dec("23478.26"),
                degenerate_month: false,
                components: vec![ProratedComponent {
                    name: "basic".to_string(),
                    kind: ComponentKind::Earning,
                    monthly_amount: dec("30000"),
                    prorated_amount: dec("23478.26"),
                }],
            },
            fines: FineSummary {
                total: Decimal::ZERO,
                apply_to_payroll: true,
                daily_fines: vec![],
            },
            net_payable: dec("23478.26"),
            audit: AuditTrace::default(),
        }
    }

    #[test]
    fn test_result_serialization_round_trip() {
        let result = sample_result();
        let json = serde_json::to_string(&result).unwrap();
        let deserialized: PayrollComputationResult = serde_json::from_str(&json).unwrap();
        assert_eq!(result, deserialized);
    }

    #[test]
    fn test_decimal_fields_serialize_as_strings() {
        let result = sample_result();
        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["proration"]["prorated_gross"], "23478.26");
        assert_eq!(json["net_payable"], "23478.26");
    }

    #[test]
    fn test_audit_trace_default_is_empty() {
        let trace = AuditTrace::default();
        assert!(trace.steps.is_empty());
        assert!(trace.warnings.is_empty());
    }

    #[test]
    fn test_violation_serialization() {
        let violation = Violation {
            date: NaiveDate::from_ymd_opt(2025, 1, 6).unwrap(),
            late_minutes: 20,
            early_minutes: 0,
        };
        let json = serde_json::to_string(&violation).unwrap();
        assert!(json.contains("\"date\":\"2025-01-06\""));
        assert!(json.contains("\"late_minutes\":20"));
    }

    #[test]
    fn test_working_days_summary_is_copy() {
        fn assert_copy<T: Copy>() {}
        assert_copy::<WorkingDaysSummary>();
    }
}
