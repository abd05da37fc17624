//! Accrual schedule models.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::LeavePolicy;

/// One grant event in an accrual schedule.
///
/// # Example
///
/// ```
/// use annual_leave_engine::models::AccrualScheduleEntry;
/// use chrono::NaiveDate;
///
/// let entry = AccrualScheduleEntry {
///     tenure_year_index: 1,
///     accrual_date: NaiveDate::from_ymd_opt(2021, 1, 1).unwrap(),
///     days_granted: 11,
/// };
/// assert_eq!(entry.tenure_year_index, 1);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccrualScheduleEntry {
    /// 1-based tenure year.
    pub tenure_year_index: u32,
    /// The date the days are granted.
    pub accrual_date: NaiveDate,
    /// Days granted on that date.
    pub days_granted: u32,
}

/// Grant previews for both policies, ordered by accrual date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccrualSchedule {
    /// Grants anchored on the hire-date anniversary.
    pub hire_anniversary: Vec<AccrualScheduleEntry>,
    /// Grants anchored on January 1.
    pub fiscal_year: Vec<AccrualScheduleEntry>,
}

impl AccrualSchedule {
    /// Returns the entries for one policy.
    pub fn entries(&self, policy: LeavePolicy) -> &[AccrualScheduleEntry] {
        match policy {
            LeavePolicy::HireAnniversary => &self.hire_anniversary,
            LeavePolicy::FiscalYear => &self.fiscal_year,
        }
    }

    /// Sum of days granted over the previewed horizon for one policy.
    pub fn total_days(&self, policy: LeavePolicy) -> u32 {
        self.entries(policy).iter().map(|e| e.days_granted).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(index: u32, y: i32, days: u32) -> AccrualScheduleEntry {
        AccrualScheduleEntry {
            tenure_year_index: index,
            accrual_date: NaiveDate::from_ymd_opt(y, 1, 1).unwrap(),
            days_granted: days,
        }
    }

    #[test]
    fn test_entries_and_totals_per_policy() {
        let schedule = AccrualSchedule {
            hire_anniversary: vec![entry(1, 2021, 11), entry(2, 2022, 12)],
            fiscal_year: vec![entry(1, 2021, 11)],
        };

        assert_eq!(schedule.entries(LeavePolicy::HireAnniversary).len(), 2);
        assert_eq!(schedule.total_days(LeavePolicy::HireAnniversary), 23);
        assert_eq!(schedule.total_days(LeavePolicy::FiscalYear), 11);
    }
}
