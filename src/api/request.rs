//! Request types for the Compensation Calculation Engine API.
//!
//! This module defines the JSON request structures for the
//! `/payroll/calculate` and `/loan/schedule` endpoints.

use chrono::{NaiveDate, NaiveDateTime};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::{
    AttendanceDay, AttendanceStatus, ComponentKind, LoanTerms, SalaryComponent, SalaryStructure,
};

/// Request body for the `/payroll/calculate` endpoint.
///
/// Contains the employee's salary structure and attendance for one month.
/// The organization policy and holiday list come from the loaded server
/// configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PayrollCalculationRequest {
    /// The employee the computation is for.
    pub employee_id: String,
    /// The calendar year.
    pub year: i32,
    /// The month, 1 through 12.
    pub month: u32,
    /// The employee's salary structure for the month.
    pub salary_structure: SalaryStructureRequest,
    /// The employee's attendance records for the month.
    pub attendance: Vec<AttendanceDayRequest>,
}

/// Salary structure information in a calculation request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SalaryStructureRequest {
    /// The ordered list of salary components.
    pub components: Vec<SalaryComponentRequest>,
}

/// A salary component in a calculation request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SalaryComponentRequest {
    /// The component name (e.g., "basic").
    pub name: String,
    /// The full monthly amount for this component.
    pub monthly_amount: Decimal,
    /// Whether this component is an earning or a deduction.
    pub kind: ComponentKind,
}

/// An attendance record in a calculation request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AttendanceDayRequest {
    /// The calendar date of the record.
    pub date: NaiveDate,
    /// The recorded status for the day.
    pub status: AttendanceStatus,
    /// The punch-in time, if captured.
    #[serde(default)]
    pub punch_in: Option<NaiveDateTime>,
    /// The punch-out time, if captured.
    #[serde(default)]
    pub punch_out: Option<NaiveDateTime>,
    /// Minutes of late arrival, if any.
    #[serde(default)]
    pub late_minutes: Option<u32>,
    /// Minutes of early exit, if any.
    #[serde(default)]
    pub early_minutes: Option<u32>,
    /// Whether an on-leave day was approved.
    #[serde(default)]
    pub leave_approved: bool,
}

/// Request body for the `/loan/schedule` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoanScheduleRequest {
    /// The amount borrowed.
    pub principal: Decimal,
    /// The repayment tenure in months.
    pub tenure_months: u32,
    /// The annual interest rate in percent.
    pub annual_interest_rate_pct: Decimal,
}

impl From<SalaryStructureRequest> for SalaryStructure {
    fn from(req: SalaryStructureRequest) -> Self {
        SalaryStructure {
            components: req.components.into_iter().map(Into::into).collect(),
        }
    }
}

impl From<SalaryComponentRequest> for SalaryComponent {
    fn from(req: SalaryComponentRequest) -> Self {
        SalaryComponent {
            name: req.name,
            monthly_amount: req.monthly_amount,
            kind: req.kind,
        }
    }
}

impl From<AttendanceDayRequest> for AttendanceDay {
    fn from(req: AttendanceDayRequest) -> Self {
        AttendanceDay {
            date: req.date,
            status: req.status,
            punch_in: req.punch_in,
            punch_out: req.punch_out,
            late_minutes: req.late_minutes,
            early_minutes: req.early_minutes,
            leave_approved: req.leave_approved,
        }
    }
}

impl From<LoanScheduleRequest> for LoanTerms {
    fn from(req: LoanScheduleRequest) -> Self {
        LoanTerms {
            principal: req.principal,
            tenure_months: req.tenure_months,
            annual_interest_rate_pct: req.annual_interest_rate_pct,
        }
    }
}
