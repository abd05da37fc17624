//! Accrual schedule preview.
//!
//! Produces a fixed, forward-looking grant schedule for each policy: one
//! grant per tenure year, starting at the hire date (anniversary method) or
//! on January 1 of the hire year (fiscal-year method). The preview uses its
//! own simplified day counts and is never used for entitlement totals.

use chrono::{Datelike, NaiveDate};

use super::date_math::add_years;
use crate::config::ScheduleRules;
use crate::models::{AccrualSchedule, AccrualScheduleEntry, LeavePolicy};

fn accrual_date(hire_date: NaiveDate, policy: LeavePolicy, years_after_hire: u32) -> Option<NaiveDate> {
    let years = i32::try_from(years_after_hire).ok()?;
    match policy {
        LeavePolicy::HireAnniversary => add_years(hire_date, years),
        LeavePolicy::FiscalYear => {
            NaiveDate::from_ymd_opt(hire_date.year().checked_add(years)?, 1, 1)
        }
    }
}

/// The anniversary date of the last entry in a `horizon_years` preview, or
/// `None` when that date cannot be represented.
///
/// Fiscal-year entries fall on January 1 of the same years, so a `Some`
/// here means both previews are complete.
///
/// ```
/// use annual_leave_engine::calculation::last_accrual_date;
/// use chrono::{Datelike, NaiveDate};
///
/// let hire = NaiveDate::from_ymd_opt(2021, 6, 15).unwrap();
/// assert_eq!(last_accrual_date(hire, 5), NaiveDate::from_ymd_opt(2025, 6, 15));
///
/// let near_max = NaiveDate::from_ymd_opt(NaiveDate::MAX.year(), 1, 1).unwrap();
/// assert_eq!(last_accrual_date(near_max, 2), None);
/// ```
pub fn last_accrual_date(hire_date: NaiveDate, horizon_years: u32) -> Option<NaiveDate> {
    accrual_date(
        hire_date,
        LeavePolicy::HireAnniversary,
        horizon_years.saturating_sub(1),
    )
}

/// Generates `horizon_years` schedule entries for one policy.
///
/// Entry `i` (1-based) grants `first_year_days + (i - 1) * yearly_increment`
/// days. The sequence stops early at the first entry whose date or day count
/// cannot be represented, so dates are always strictly increasing.
///
/// # Examples
///
/// ```
/// use annual_leave_engine::calculation::generate_schedule;
/// use annual_leave_engine::config::ScheduleRules;
/// use annual_leave_engine::models::LeavePolicy;
/// use chrono::NaiveDate;
///
/// let hire = NaiveDate::from_ymd_opt(2022, 8, 16).unwrap();
/// let entries = generate_schedule(hire, LeavePolicy::FiscalYear, 3, &ScheduleRules::default());
///
/// assert_eq!(entries[0].accrual_date, NaiveDate::from_ymd_opt(2022, 1, 1).unwrap());
/// assert_eq!(entries[2].accrual_date, NaiveDate::from_ymd_opt(2024, 1, 1).unwrap());
/// assert_eq!(entries[2].days_granted, 13);
/// ```
pub fn generate_schedule(
    hire_date: NaiveDate,
    policy: LeavePolicy,
    horizon_years: u32,
    rules: &ScheduleRules,
) -> Vec<AccrualScheduleEntry> {
    (1..=horizon_years)
        .map_while(|index| {
            Some(AccrualScheduleEntry {
                tenure_year_index: index,
                accrual_date: accrual_date(hire_date, policy, index - 1)?,
                days_granted: rules.days_granted(index)?,
            })
        })
        .collect()
}

/// Generates the schedule preview for both policies.
///
/// The preview is fixed and does not depend on `end_date`.
///
/// # Examples
///
/// ```
/// use annual_leave_engine::calculation::compute_schedule;
/// use annual_leave_engine::config::ScheduleRules;
/// use chrono::NaiveDate;
///
/// let hire = NaiveDate::from_ymd_opt(2021, 1, 1).unwrap();
/// let end = NaiveDate::from_ymd_opt(2025, 4, 1).unwrap();
/// let schedule = compute_schedule(hire, end, 5, &ScheduleRules::default());
///
/// assert_eq!(schedule.hire_anniversary.len(), 5);
/// assert_eq!(schedule.fiscal_year.len(), 5);
/// assert_eq!(schedule.hire_anniversary[4].days_granted, 15);
/// ```
pub fn compute_schedule(
    hire_date: NaiveDate,
    _end_date: NaiveDate,
    horizon_years: u32,
    rules: &ScheduleRules,
) -> AccrualSchedule {
    AccrualSchedule {
        hire_anniversary: generate_schedule(
            hire_date,
            LeavePolicy::HireAnniversary,
            horizon_years,
            rules,
        ),
        fiscal_year: generate_schedule(hire_date, LeavePolicy::FiscalYear, horizon_years, rules),
    }
}
