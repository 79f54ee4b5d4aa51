//! Attendance model and related types.
//!
//! This module defines the AttendanceDay struct and AttendanceStatus enum
//! consumed read-only by the engine for one employee and month. Records
//! are produced by attendance capture, which is outside the engine.

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

/// The recorded status of a single attendance day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AttendanceStatus {
    /// The employee was present for the full day.
    Present,
    /// The employee was absent without leave.
    Absent,
    /// The employee was present for half of the day.
    HalfDay,
    /// The employee was on leave for the day.
    OnLeave,
    /// The record awaits approval and does not count as presence.
    Pending,
    /// No attendance was recorded for the day.
    NotMarked,
}

/// One day of attendance for a single employee.
///
/// # Example
///
/// ```
/// use payroll_engine::models::{AttendanceDay, AttendanceStatus};
/// use chrono::NaiveDate;
///
/// let day = AttendanceDay {
///     date: NaiveDate::from_ymd_opt(2025, 1, 6).unwrap(),
///     status: AttendanceStatus::Present,
///     punch_in: None,
///     punch_out: None,
///     late_minutes: Some(20),
///     early_minutes: None,
///     leave_approved: false,
/// };
/// assert!(day.is_violation());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttendanceDay {
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
    /// Minutes of late arrival past the shift start, if any.
    #[serde(default)]
    pub late_minutes: Option<u32>,
    /// Minutes of early exit before the shift end, if any.
    #[serde(default)]
    pub early_minutes: Option<u32>,
    /// Whether an on-leave day was approved by the organization.
    #[serde(default)]
    pub leave_approved: bool,
}

impl AttendanceDay {
    /// Returns the late-arrival minutes, defaulting to zero.
    pub fn late(&self) -> u32 {
        self.late_minutes.unwrap_or(0)
    }

    /// Returns the early-exit minutes, defaulting to zero.
    pub fn early(&self) -> u32 {
        self.early_minutes.unwrap_or(0)
    }

    /// Returns true if the day carries a late-arrival or early-exit
    /// violation on an attended day.
    pub fn is_violation(&self) -> bool {
        matches!(
            self.status,
            AttendanceStatus::Present | AttendanceStatus::HalfDay
        ) && (self.late() > 0 || self.early() > 0)
    }
}
