//! Attendance aggregation for a month.
//!
//! This module reduces a list of per-day attendance records into
//! present/absent/leave counts and the list of late-arrival/early-exit
//! violations consumed by the fine engine.

use rust_decimal::Decimal;

use crate::models::{AttendanceDay, AttendanceStatus, AttendanceSummary, AuditStep, Violation};

/// The result of an attendance aggregation, including the audit step.
#[derive(Debug, Clone)]
pub struct AttendanceAggregation {
    /// The computed summary.
    pub summary: AttendanceSummary,
    /// The audit step recording this reduction.
    pub audit_step: AuditStep,
}

/// Reduces one month of attendance records into an [`AttendanceSummary`].
///
/// Counting rules:
/// - `Present` adds 1 to `present_days`.
/// - `HalfDay` adds 0.5 to `present_days` and 1 to `half_day_count`.
/// - `OnLeave` adds 1 to `leave_days`, and adds 1 to `present_days` only
///   when the record is approved AND the organization's `include_leaves`
///   setting is on. The setting is owned by the organization policy and
///   passed in, not read from any ambient store.
/// - `Absent` adds 1 to `absent_days`.
/// - `Pending` and `NotMarked` add 1 to `unmarked_days` and never count
///   as presence.
///
/// Violations are collected from attended days (`Present`/`HalfDay`) with
/// nonzero late or early minutes, in input order.
///
/// # Example
///
/// ```
/// use payroll_engine::calculation::aggregate_attendance;
/// use payroll_engine::models::{AttendanceDay, AttendanceStatus};
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// let days = vec![AttendanceDay {
///     date: NaiveDate::from_ymd_opt(2025, 1, 6).unwrap(),
///     status: AttendanceStatus::Present,
///     punch_in: None,
///     punch_out: None,
///     late_minutes: None,
///     early_minutes: None,
///     leave_approved: false,
/// }];
///
/// let result = aggregate_attendance(&days, false, 1);
/// assert_eq!(result.summary.present_days, Decimal::ONE);
/// ```
pub fn aggregate_attendance(
    days: &[AttendanceDay],
    include_leaves: bool,
    step_number: u32,
) -> AttendanceAggregation {
    let mut present_days = Decimal::ZERO;
    let mut absent_days = 0u32;
    let mut half_day_count = 0u32;
    let mut leave_days = 0u32;
    let mut unmarked_days = 0u32;
    let mut violations = Vec::new();

    let half = Decimal::new(5, 1);

    for day in days {
        match day.status {
            AttendanceStatus::Present => present_days += Decimal::ONE,
            AttendanceStatus::HalfDay => {
                present_days += half;
                half_day_count += 1;
            }
            AttendanceStatus::OnLeave => {
                leave_days += 1;
                if day.leave_approved && include_leaves {
                    present_days += Decimal::ONE;
                }
            }
            AttendanceStatus::Absent => absent_days += 1,
            AttendanceStatus::Pending | AttendanceStatus::NotMarked => unmarked_days += 1,
        }

        if day.is_violation() {
            violations.push(Violation {
                date: day.date,
                late_minutes: day.late(),
                early_minutes: day.early(),
            });
        }
    }

    let summary = AttendanceSummary {
        present_days,
        absent_days,
        half_day_count,
        leave_days,
        unmarked_days,
        violations,
    };

    let audit_step = AuditStep {
        step_number,
        rule_id: "attendance_aggregation".to_string(),
        rule_name: "Attendance Aggregation".to_string(),
        input: serde_json::json!({
            "records": days.len(),
            "include_leaves": include_leaves
        }),
        output: serde_json::json!({
            "present_days": summary.present_days.to_string(),
            "absent_days": summary.absent_days,
            "half_day_count": summary.half_day_count,
            "leave_days": summary.leave_days,
            "unmarked_days": summary.unmarked_days,
            "violations": summary.violations.len()
        }),
        reasoning: format!(
            "{} records reduced to {} present days with {} violations",
            days.len(),
            summary.present_days,
            summary.violations.len()
        ),
    };

    AttendanceAggregation {
        summary,
        audit_step,
    }
}
