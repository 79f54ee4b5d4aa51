//! Organization policy models.
//!
//! This module contains the weekly-off policy, holiday, and fine policy
//! types that together form the [`OrganizationPolicy`]. The policy is
//! process-wide per organization, changed rarely, and read by every
//! calculation; the engine receives it as an explicit parameter rather
//! than through any ambient settings lookup.

use chrono::{NaiveDate, Weekday};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A day of the week, in configuration-friendly spelling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DayOfWeek {
    /// Monday.
    Monday,
    /// Tuesday.
    Tuesday,
    /// Wednesday.
    Wednesday,
    /// Thursday.
    Thursday,
    /// Friday.
    Friday,
    /// Saturday.
    Saturday,
    /// Sunday.
    Sunday,
}

impl DayOfWeek {
    /// Converts to the chrono weekday.
    pub fn to_weekday(self) -> Weekday {
        match self {
            DayOfWeek::Monday => Weekday::Mon,
            DayOfWeek::Tuesday => Weekday::Tue,
            DayOfWeek::Wednesday => Weekday::Wed,
            DayOfWeek::Thursday => Weekday::Thu,
            DayOfWeek::Friday => Weekday::Fri,
            DayOfWeek::Saturday => Weekday::Sat,
            DayOfWeek::Sunday => Weekday::Sun,
        }
    }
}

/// Which Saturdays of the month count as weekly offs.
///
/// The ordinal of a Saturday is `1 + (day - 1) / 7`, so `Odd` selects the
/// 1st/3rd/5th Saturday and `Even` the 2nd/4th.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SaturdayParity {
    /// 1st, 3rd, and 5th Saturdays are off.
    #[default]
    Odd,
    /// 2nd and 4th Saturdays are off.
    Even,
}

/// The rule set determining which weekdays are non-working by default.
///
/// # Example
///
/// ```
/// use payroll_engine::models::{DayOfWeek, WeeklyOffPolicy};
///
/// let policy = WeeklyOffPolicy::CustomDays {
///     days: vec![DayOfWeek::Friday],
/// };
/// assert_ne!(policy, WeeklyOffPolicy::Standard);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum WeeklyOffPolicy {
    /// Saturday and Sunday are off.
    Standard,
    /// Sunday plus alternating Saturdays are off.
    OddEvenSaturday {
        /// Which Saturday ordinals are off.
        #[serde(default)]
        parity: SaturdayParity,
    },
    /// An arbitrary set of weekdays is off.
    CustomDays {
        /// The weekdays that are off.
        days: Vec<DayOfWeek>,
    },
}

/// An organization holiday, scoped to a calendar year.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Holiday {
    /// The date of the holiday.
    pub date: NaiveDate,
    /// The name of the holiday (e.g., "Independence Day").
    pub name: String,
    /// The holiday category (e.g., "national", "religious", "optional").
    pub category: String,
}

/// How a fine amount is derived from the daily salary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FineMultiplier {
    /// One day's salary.
    OneXSalary,
    /// Two days' salary.
    TwoXSalary,
    /// Three days' salary.
    ThreeXSalary,
    /// Half a day's salary.
    HalfDay,
    /// A full day's salary.
    FullDay,
    /// A fixed configured amount, independent of salary.
    FixedAmount,
}

/// Which violation kinds a fine rule covers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FineAppliesTo {
    /// Late arrivals only.
    LateArrival,
    /// Early exits only.
    EarlyExit,
    /// Both late arrivals and early exits.
    Both,
}

/// A single fine rule; an ordered list of rules forms a rule-based policy.
///
/// Rules are evaluated in configured order and the first rule whose
/// `applies_to` covers the violation kind wins.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FineRule {
    /// How the fine amount is derived.
    pub multiplier: FineMultiplier,
    /// The fixed amount; required when `multiplier` is `FixedAmount`.
    #[serde(default)]
    pub fixed_amount: Option<Decimal>,
    /// The violation kinds this rule covers.
    pub applies_to: FineAppliesTo,
}

/// The method used to compute fines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FineMethod {
    /// Fines derive from an hourly rate implied by the shift length.
    ShiftBased,
    /// Fines derive from an ordered rule list.
    RuleBased,
}

/// Which gross figure the daily salary for rule-based fines divides.
///
/// Shift-based fines always use the monthly gross regardless of this
/// setting, so the fine cannot feed back into the proration it is
/// derived from.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SalaryBasis {
    /// Daily salary = monthly gross / working days.
    #[default]
    MonthlyGross,
    /// Daily salary = prorated gross / working days.
    ProratedGross,
}

/// The organization's fine policy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FinePolicy {
    /// Whether fines are computed at all.
    pub enabled: bool,
    /// Whether the computed total is subtracted from net pay. When false
    /// the amount is still reported for visibility.
    pub apply_to_payroll: bool,
    /// The computation method.
    pub method: FineMethod,
    /// The ordered rule list for rule-based fines.
    #[serde(default)]
    pub rules: Vec<FineRule>,
    /// The configured shift length in hours, for shift-based fines.
    #[serde(default)]
    pub shift_hours: Option<Decimal>,
    /// Whether early exits also trigger shift-based fines. Late arrivals
    /// always do.
    #[serde(default)]
    pub shift_based_early_exit: bool,
    /// Which gross figure rule-based daily salary derives from.
    #[serde(default)]
    pub salary_basis: SalaryBasis,
}

impl FinePolicy {
    /// A disabled policy that computes no fines.
    pub fn disabled() -> Self {
        Self {
            enabled: false,
            apply_to_payroll: false,
            method: FineMethod::RuleBased,
            rules: Vec::new(),
            shift_hours: None,
            shift_based_early_exit: false,
            salary_basis: SalaryBasis::MonthlyGross,
        }
    }
}

/// The complete organization policy consumed by every payroll run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrganizationPolicy {
    /// The weekly-off rule set.
    pub weekly_off: WeeklyOffPolicy,
    /// The fine policy.
    pub fine_policy: FinePolicy,
    /// Whether approved leaves count as presence for proration.
    pub include_leaves: bool,
}
