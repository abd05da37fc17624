//! Entitlement totals under both policies.

use chrono::NaiveDate;

use super::{calculate_fiscal_year_leave, calculate_hire_anniversary_leave, elapsed_months};
use crate::config::AccrualRules;
use crate::models::Entitlements;

/// Computes the hire-date anniversary and fiscal-year totals for a tenure.
///
/// Pure and deterministic: identical inputs always give identical output.
/// An end date before the hire date yields zero for both totals.
///
/// # Examples
///
/// ```
/// use annual_leave_engine::calculation::compute_entitlements;
/// use annual_leave_engine::config::AccrualRules;
/// use chrono::NaiveDate;
///
/// let hire = NaiveDate::from_ymd_opt(2021, 1, 1).unwrap();
/// let end = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
/// let totals = compute_entitlements(hire, end, &AccrualRules::default());
///
/// assert_eq!(totals.hire_anniversary_total, 42);
/// assert_eq!(totals.fiscal_year_total, 11 + 15 + 16);
/// ```
pub fn compute_entitlements(
    hire_date: NaiveDate,
    end_date: NaiveDate,
    rules: &AccrualRules,
) -> Entitlements {
    let months = elapsed_months(hire_date, end_date);

    Entitlements {
        hire_anniversary_total: calculate_hire_anniversary_leave(months, rules, 1).total_days,
        fiscal_year_total: calculate_fiscal_year_leave(hire_date, end_date, rules, 2).total_days,
    }
}
