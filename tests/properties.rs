//! Property tests for the calculation invariants.
//!
//! These properties hold for every input the engine accepts, not just
//! the hand-picked scenarios in the integration suite:
//! - the prorated component breakdown sums exactly to the reported totals
//! - the attendance ratio stays within [0, 1]
//! - a degenerate month produces zero amounts without an error
//! - loan schedules repay exactly the principal borrowed
//! - fines are never negative

use proptest::prelude::*;
use rust_decimal::Decimal;

use payroll_engine::calculation::{
    amortization_schedule, calculate_daily_fine, calculate_installment, prorate_salary,
    round_currency,
};
use payroll_engine::models::{
    ComponentKind, FineAppliesTo, FineMethod, FineMultiplier, FinePolicy, FineRule, LoanTerms,
    SalaryBasis, SalaryComponent, SalaryStructure, Violation, WorkingDaysSummary,
};

/// A monetary amount between 0 and 1,000,000.00 with two decimal places.
fn money() -> impl Strategy<Value = Decimal> {
    (0i64..=100_000_000).prop_map(|cents| Decimal::new(cents, 2))
}

fn component_kind() -> impl Strategy<Value = ComponentKind> {
    prop_oneof![
        Just(ComponentKind::Earning),
        Just(ComponentKind::Deduction),
    ]
}

fn salary_structure() -> impl Strategy<Value = SalaryStructure> {
    prop::collection::vec((money(), component_kind()), 1..8).prop_map(|parts| SalaryStructure {
        components: parts
            .into_iter()
            .enumerate()
            .map(|(i, (amount, kind))| SalaryComponent {
                name: format!("component_{}", i),
                monthly_amount: amount,
                kind,
            })
            .collect(),
    })
}

fn working_days_summary(working_days: u32) -> WorkingDaysSummary {
    WorkingDaysSummary {
        total_days_in_month: 31,
        weekend_count: 8,
        holiday_count: 0,
        working_days,
    }
}

/// Present days between 0 and 31 in half-day steps.
fn present_days() -> impl Strategy<Value = Decimal> {
    (0i64..=62).prop_map(|halves| Decimal::new(halves * 5, 1))
}

fn fine_multiplier() -> impl Strategy<Value = FineMultiplier> {
    prop_oneof![
        Just(FineMultiplier::OneXSalary),
        Just(FineMultiplier::TwoXSalary),
        Just(FineMultiplier::ThreeXSalary),
        Just(FineMultiplier::HalfDay),
        Just(FineMultiplier::FullDay),
    ]
}

fn fine_applies_to() -> impl Strategy<Value = FineAppliesTo> {
    prop_oneof![
        Just(FineAppliesTo::LateArrival),
        Just(FineAppliesTo::EarlyExit),
        Just(FineAppliesTo::Both),
    ]
}

fn rule_based_policy() -> impl Strategy<Value = FinePolicy> {
    prop::collection::vec((fine_multiplier(), fine_applies_to()), 0..5).prop_map(|rules| {
        FinePolicy {
            enabled: true,
            apply_to_payroll: true,
            method: FineMethod::RuleBased,
            rules: rules
                .into_iter()
                .map(|(multiplier, applies_to)| FineRule {
                    multiplier,
                    fixed_amount: None,
                    applies_to,
                })
                .collect(),
            shift_hours: None,
            shift_based_early_exit: false,
            salary_basis: SalaryBasis::MonthlyGross,
        }
    })
}

proptest! {
    /// The rounded component breakdown always reconciles with the totals.
    #[test]
    fn prop_component_breakdown_sums_to_totals(
        structure in salary_structure(),
        working_days in 1u32..=27,
        present in present_days(),
    ) {
        let result =
            prorate_salary(&structure, &working_days_summary(working_days), present, 1).unwrap();
        let proration = result.proration;

        let earning_sum: Decimal = proration
            .components
            .iter()
            .filter(|c| c.kind == ComponentKind::Earning)
            .map(|c| c.prorated_amount)
            .sum();
        let deduction_sum: Decimal = proration
            .components
            .iter()
            .filter(|c| c.kind == ComponentKind::Deduction)
            .map(|c| c.prorated_amount)
            .sum();

        prop_assert_eq!(earning_sum, proration.prorated_gross);
        prop_assert_eq!(earning_sum - deduction_sum, proration.prorated_net);
    }

    /// The attendance ratio is clamped into [0, 1].
    #[test]
    fn prop_attendance_ratio_is_bounded(
        structure in salary_structure(),
        working_days in 1u32..=27,
        present in present_days(),
    ) {
        let result =
            prorate_salary(&structure, &working_days_summary(working_days), present, 1).unwrap();

        prop_assert!(result.proration.attendance_ratio >= Decimal::ZERO);
        prop_assert!(result.proration.attendance_ratio <= Decimal::ONE);
    }

    /// No prorated component ever exceeds its monthly amount.
    #[test]
    fn prop_prorated_amount_never_exceeds_monthly(
        structure in salary_structure(),
        working_days in 1u32..=27,
        present in present_days(),
    ) {
        let result =
            prorate_salary(&structure, &working_days_summary(working_days), present, 1).unwrap();

        for component in &result.proration.components {
            prop_assert!(component.prorated_amount <= component.monthly_amount);
            prop_assert!(component.prorated_amount >= Decimal::ZERO);
        }
    }

    /// Zero working days produce zero amounts and the degenerate flag,
    /// never an error.
    #[test]
    fn prop_degenerate_month_is_zero_not_error(
        structure in salary_structure(),
        present in present_days(),
    ) {
        let result =
            prorate_salary(&structure, &working_days_summary(0), present, 1).unwrap();

        prop_assert!(result.proration.degenerate_month);
        prop_assert_eq!(result.proration.prorated_gross, Decimal::ZERO);
        prop_assert_eq!(result.proration.attendance_ratio, Decimal::ZERO);
    }

    /// A zero-rate installment is exactly the rounded straight-line split.
    #[test]
    fn prop_zero_rate_installment_is_straight_line(
        principal_cents in 1i64..=1_000_000_000,
        tenure in 1u32..=120,
    ) {
        let principal = Decimal::new(principal_cents, 2);
        let terms = LoanTerms {
            principal,
            tenure_months: tenure,
            annual_interest_rate_pct: Decimal::ZERO,
        };

        let installment = calculate_installment(&terms).unwrap();
        prop_assert_eq!(installment, round_currency(principal / Decimal::from(tenure)));
    }

    /// Every schedule's principal portions sum exactly to the principal.
    #[test]
    fn prop_schedule_repays_exactly_the_principal(
        principal_cents in 10_000i64..=1_000_000_000,
        tenure in 1u32..=120,
        rate_bp in 0i64..=3600,
    ) {
        let terms = LoanTerms {
            principal: Decimal::new(principal_cents, 2),
            tenure_months: tenure,
            annual_interest_rate_pct: Decimal::new(rate_bp, 2),
        };

        let schedule = amortization_schedule(&terms).unwrap();
        let repaid: Decimal = schedule.entries.iter().map(|e| e.principal_portion).sum();

        prop_assert_eq!(repaid, terms.principal);
        prop_assert_eq!(
            schedule.entries.last().unwrap().remaining_balance,
            Decimal::ZERO
        );
        prop_assert_eq!(schedule.entries.len() as u32, tenure);
    }

    /// Daily fines are never negative, whatever the rule list.
    #[test]
    fn prop_daily_fines_are_non_negative(
        policy in rule_based_policy(),
        daily_salary in money(),
        late in 0u32..=240,
        early in 0u32..=240,
    ) {
        let violation = Violation {
            date: chrono::NaiveDate::from_ymd_opt(2025, 1, 6).unwrap(),
            late_minutes: late,
            early_minutes: early,
        };

        let fine = calculate_daily_fine(&policy, daily_salary, &violation).unwrap();
        prop_assert!(fine >= Decimal::ZERO);
    }
}
