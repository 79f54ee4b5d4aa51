//! Core data models for the Compensation Calculation Engine.
//!
//! This module contains all the domain models used throughout the engine.

mod attendance;
mod loan;
mod payroll_result;
mod policy;
mod salary;

pub use attendance::{AttendanceDay, AttendanceStatus};
pub use loan::LoanTerms;
pub use payroll_result::{
    AttendanceSummary, AuditStep, AuditTrace, AuditWarning, DailyFine, FineSummary,
    PayrollComputationResult, ProratedComponent, SalaryProration, Violation, WorkingDaysSummary,
};
pub use policy::{
    DayOfWeek, FineAppliesTo, FineMethod, FineMultiplier, FinePolicy, FineRule, Holiday,
    OrganizationPolicy, SalaryBasis, SaturdayParity, WeeklyOffPolicy,
};
pub use salary::{ComponentKind, SalaryComponent, SalaryStructure};
