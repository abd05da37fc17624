//! Calendar month arithmetic.
//!
//! Tenure is measured in calendar months. [`elapsed_months`] deliberately
//! ignores the day of month; the fiscal-year policy uses the day-aware
//! helpers in this module for its year boundaries.

use chrono::{Datelike, NaiveDate};

/// Returns the whole-month difference between two dates, ignoring day of month.
///
/// Computed as `(end.year - start.year) * 12 + (end.month - start.month)`.
/// The result is negative when `end` is in an earlier month than `start`.
///
/// # Examples
///
/// ```
/// use annual_leave_engine::calculation::elapsed_months;
/// use chrono::NaiveDate;
///
/// let hire = NaiveDate::from_ymd_opt(2021, 1, 31).unwrap();
/// let end = NaiveDate::from_ymd_opt(2021, 2, 1).unwrap();
///
/// // One calendar month apart even though only a day has passed.
/// assert_eq!(elapsed_months(hire, end), 1);
/// assert_eq!(elapsed_months(end, hire), -1);
/// ```
pub fn elapsed_months(start: NaiveDate, end: NaiveDate) -> i32 {
    (end.year() - start.year()) * 12 + (end.month() as i32 - start.month() as i32)
}

/// Months between two dates, counting the starting month as worked when the
/// end date's day of month has reached the start date's.
///
/// A hire on the 1st through to the 31st of the same month counts as one
/// month; a hire on the 15th through to the 10th of the next month counts
/// as one.
///
/// ```
/// use annual_leave_engine::calculation::inclusive_months;
/// use chrono::NaiveDate;
///
/// let hire = NaiveDate::from_ymd_opt(2021, 3, 15).unwrap();
/// let year_end = NaiveDate::from_ymd_opt(2021, 12, 31).unwrap();
/// assert_eq!(inclusive_months(hire, year_end), 10);
/// ```
pub fn inclusive_months(start: NaiveDate, end: NaiveDate) -> i32 {
    let months = elapsed_months(start, end);
    if start.day() <= end.day() {
        months + 1
    } else {
        months
    }
}

/// Complete calendar months from January 1 of `end`'s year up to `end`.
///
/// The month containing `end` only counts once `end` is its last day, so
/// December 31 yields 12.
pub fn completed_months_since_year_start(end: NaiveDate) -> i32 {
    let months = end.month0() as i32;
    if is_last_day_of_month(end) {
        months + 1
    } else {
        months
    }
}

/// Returns true when `date` is the last day of its month.
pub fn is_last_day_of_month(date: NaiveDate) -> bool {
    date.succ_opt().is_none_or(|next| next.month() != date.month())
}

/// Shifts `date` by whole years, clamping February 29 to February 28 in
/// non-leap target years.
///
/// Returns `None` when the target year is outside the range `NaiveDate`
/// can represent.
pub fn add_years(date: NaiveDate, years: i32) -> Option<NaiveDate> {
    let year = date.year().checked_add(years)?;
    NaiveDate::from_ymd_opt(year, date.month(), date.day())
        .or_else(|| NaiveDate::from_ymd_opt(year, date.month(), date.day() - 1))
}
