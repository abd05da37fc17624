//! Property tests for the accrual calculations.

use chrono::{Datelike, Days, Months, NaiveDate};
use proptest::prelude::*;

use annual_leave_engine::calculation::{
    calculate_fiscal_year_leave, calculate_hire_anniversary_leave, compute_entitlements,
    compute_schedule, elapsed_months,
};
use annual_leave_engine::config::{AccrualRules, ScheduleRules};

fn any_date() -> impl Strategy<Value = NaiveDate> {
    (1990i32..2040, 1u32..=12, 1u32..=28)
        .prop_map(|(y, m, d)| NaiveDate::from_ymd_opt(y, m, d).unwrap())
}

proptest! {
    #[test]
    fn same_day_is_zero_months_and_zero_anniversary_days(hire in any_date()) {
        let months = elapsed_months(hire, hire);
        prop_assert_eq!(months, 0);
        prop_assert_eq!(compute_entitlements(hire, hire, &AccrualRules::default()).hire_anniversary_total, 0);
    }

    #[test]
    fn first_year_anniversary_days_equal_months(hire in any_date(), months in 0u32..12) {
        let end = hire.checked_add_months(Months::new(months)).unwrap();
        let elapsed = elapsed_months(hire, end);

        prop_assert_eq!(elapsed, months as i32);
        prop_assert_eq!(
            calculate_hire_anniversary_leave(elapsed, &AccrualRules::default(), 1).total_days,
            months
        );
    }

    #[test]
    fn whole_years_give_canonical_totals(hire in any_date()) {
        let rules = AccrualRules::default();
        for (years, expected) in [(1u32, 11u32), (2, 26), (3, 42)] {
            let end = hire.checked_add_months(Months::new(12 * years)).unwrap();
            prop_assert_eq!(elapsed_months(hire, end), 12 * years as i32);
            prop_assert_eq!(compute_entitlements(hire, end, &rules).hire_anniversary_total, expected);
        }
    }

    #[test]
    fn compute_entitlements_is_idempotent(hire in any_date(), offset in 0u64..8000) {
        let end = hire.checked_add_days(Days::new(offset)).unwrap();
        let rules = AccrualRules::default();

        prop_assert_eq!(
            compute_entitlements(hire, end, &rules),
            compute_entitlements(hire, end, &rules)
        );
    }

    #[test]
    fn anniversary_total_never_decreases(hire in any_date(), offset in 0u64..8000) {
        let rules = AccrualRules::default();
        let end = hire.checked_add_days(Days::new(offset)).unwrap();
        let later = end.checked_add_days(Days::new(31)).unwrap();

        prop_assert!(
            compute_entitlements(hire, end, &rules).hire_anniversary_total
                <= compute_entitlements(hire, later, &rules).hire_anniversary_total
        );
    }

    #[test]
    fn fiscal_breakdown_covers_each_calendar_year(hire in any_date(), offset in 0u64..8000) {
        let end = hire.checked_add_days(Days::new(offset)).unwrap();
        let result = calculate_fiscal_year_leave(hire, end, &AccrualRules::default(), 1);

        prop_assert_eq!(result.years.len() as i32, end.year() - hire.year() + 1);
        prop_assert_eq!(result.years.iter().map(|y| y.days).sum::<u32>(), result.total_days);
        prop_assert!(result.years.iter().all(|y| y.days <= 25));
    }

    #[test]
    fn inverted_ranges_clamp_to_zero(hire in any_date(), back in 1u64..5000) {
        let end = hire.checked_sub_days(Days::new(back)).unwrap();
        let totals = compute_entitlements(hire, end, &AccrualRules::default());

        prop_assert_eq!(totals.hire_anniversary_total, 0);
        prop_assert_eq!(totals.fiscal_year_total, 0);
    }

    #[test]
    fn schedule_has_horizon_entries_with_increasing_dates(hire in any_date(), horizon in 1u32..15) {
        let schedule = compute_schedule(hire, hire, horizon, &ScheduleRules::default());

        for entries in [&schedule.hire_anniversary, &schedule.fiscal_year] {
            prop_assert_eq!(entries.len(), horizon as usize);
            prop_assert!(entries.windows(2).all(|w| w[0].accrual_date < w[1].accrual_date));
        }
    }
}
