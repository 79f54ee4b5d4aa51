//! Calendar policy: weekend-date classification for a month.
//!
//! This module determines, for a given year/month and weekly-off
//! configuration, which calendar dates count as weekends. All downstream
//! working-days arithmetic builds on the date set produced here.

use std::collections::BTreeSet;

use chrono::{Datelike, NaiveDate, Weekday};

use crate::error::{EngineError, EngineResult};
use crate::models::{SaturdayParity, WeeklyOffPolicy};

/// Returns the calendar length of a month.
///
/// # Arguments
///
/// * `year` - The calendar year
/// * `month` - The month, 1 through 12
///
/// # Returns
///
/// The number of days in the month, or [`EngineError::InvalidPeriod`] when
/// the (year, month) pair is outside the representable calendar range.
///
/// # Example
///
/// ```
/// use payroll_engine::calculation::days_in_month;
///
/// assert_eq!(days_in_month(2025, 1).unwrap(), 31);
/// assert_eq!(days_in_month(2024, 2).unwrap(), 29); // leap year
/// assert!(days_in_month(2025, 13).is_err());
/// ```
pub fn days_in_month(year: i32, month: u32) -> EngineResult<u32> {
    let first = first_of_month(year, month)?;
    let first_of_next = if month == 12 {
        NaiveDate::from_ymd_opt(year + 1, 1, 1)
    } else {
        NaiveDate::from_ymd_opt(year, month + 1, 1)
    }
    .ok_or(EngineError::InvalidPeriod { year, month })?;

    Ok(first_of_next.signed_duration_since(first).num_days() as u32)
}

/// Returns the set of dates in a month classified as weekend.
///
/// # Arguments
///
/// * `year` - The calendar year
/// * `month` - The month, 1 through 12
/// * `policy` - The weekly-off policy to classify against
///
/// # Behavior
///
/// - [`WeeklyOffPolicy::Standard`]: every Saturday and Sunday.
/// - [`WeeklyOffPolicy::OddEvenSaturday`]: every Sunday, plus the
///   Saturdays whose ordinal in the month (`1 + (day - 1) / 7`) matches
///   the configured parity.
/// - [`WeeklyOffPolicy::CustomDays`]: every date whose weekday is in the
///   configured set.
///
/// # Example
///
/// ```
/// use payroll_engine::calculation::weekend_dates;
/// use payroll_engine::models::WeeklyOffPolicy;
///
/// // January 2025 has 4 Saturdays and 4 Sundays.
/// let weekends = weekend_dates(2025, 1, &WeeklyOffPolicy::Standard).unwrap();
/// assert_eq!(weekends.len(), 8);
/// ```
pub fn weekend_dates(
    year: i32,
    month: u32,
    policy: &WeeklyOffPolicy,
) -> EngineResult<BTreeSet<NaiveDate>> {
    let total_days = days_in_month(year, month)?;
    let mut weekends = BTreeSet::new();

    for day in 1..=total_days {
        let date =
            NaiveDate::from_ymd_opt(year, month, day).ok_or(EngineError::InvalidPeriod {
                year,
                month,
            })?;

        if is_weekly_off(date, policy) {
            weekends.insert(date);
        }
    }

    Ok(weekends)
}

/// First day of the month, validating the (year, month) pair.
fn first_of_month(year: i32, month: u32) -> EngineResult<NaiveDate> {
    NaiveDate::from_ymd_opt(year, month, 1).ok_or(EngineError::InvalidPeriod { year, month })
}

/// Classifies a single date against the weekly-off policy.
fn is_weekly_off(date: NaiveDate, policy: &WeeklyOffPolicy) -> bool {
    match policy {
        WeeklyOffPolicy::Standard => {
            matches!(date.weekday(), Weekday::Sat | Weekday::Sun)
        }
        WeeklyOffPolicy::OddEvenSaturday { parity } => match date.weekday() {
            Weekday::Sun => true,
            Weekday::Sat => saturday_ordinal_matches(date.day(), *parity),
            _ => false,
        },
        WeeklyOffPolicy::CustomDays { days } => {
            days.iter().any(|d| d.to_weekday() == date.weekday())
        }
    }
}

/// Whether a Saturday's ordinal in the month matches the configured parity.
///
/// Ordinal = `1 + (day - 1) / 7`, so the 1st-7th are ordinal 1, the
/// 8th-14th ordinal 2, and so on.
fn saturday_ordinal_matches(day: u32, parity: SaturdayParity) -> bool {
    let ordinal = 1 + (day - 1) / 7;
    match parity {
        SaturdayParity::Odd => ordinal % 2 == 1,
        SaturdayParity::Even => ordinal % 2 == 0,
    }
}
