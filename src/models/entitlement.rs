//! Leave entitlement models.
//!
//! This module contains the per-policy entitlement totals and the
//! per-calendar-year breakdown behind the fiscal-year total.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// The accrual policy an entitlement was computed under.
///
/// # Example
///
/// ```
/// use annual_leave_engine::models::LeavePolicy;
///
/// assert_eq!(LeavePolicy::HireAnniversary.label(), "입사일 기준 연차");
/// assert_eq!(LeavePolicy::FiscalYear.label(), "회계연도 기준 연차");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LeavePolicy {
    /// Accrual tied to the employee's personal hire-date anniversary.
    HireAnniversary,
    /// Accrual aligned to calendar-year boundaries.
    FiscalYear,
}

impl LeavePolicy {
    /// Both policies, in display order.
    pub const ALL: [LeavePolicy; 2] = [LeavePolicy::HireAnniversary, LeavePolicy::FiscalYear];

    /// The Korean label used in reports.
    pub fn label(self) -> &'static str {
        match self {
            LeavePolicy::HireAnniversary => "입사일 기준 연차",
            LeavePolicy::FiscalYear => "회계연도 기준 연차",
        }
    }
}

/// A total number of leave days under one policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeaveEntitlement {
    /// The policy this total was computed under.
    pub policy: LeavePolicy,
    /// Total leave days.
    pub days: u32,
}

/// The pair of totals returned by
/// [`compute_entitlements`](crate::calculation::compute_entitlements).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entitlements {
    /// Total under the hire-date anniversary method.
    pub hire_anniversary_total: u32,
    /// Total under the fiscal-year method.
    pub fiscal_year_total: u32,
}

impl Entitlements {
    /// Returns the total for a single policy.
    pub fn for_policy(&self, policy: LeavePolicy) -> LeaveEntitlement {
        let days = match policy {
            LeavePolicy::HireAnniversary => self.hire_anniversary_total,
            LeavePolicy::FiscalYear => self.fiscal_year_total,
        };
        LeaveEntitlement { policy, days }
    }

    /// Returns both totals as named entitlements.
    pub fn to_vec(&self) -> Vec<LeaveEntitlement> {
        LeavePolicy::ALL
            .iter()
            .map(|policy| self.for_policy(*policy))
            .collect()
    }
}

/// How a calendar year was treated by the fiscal-year method.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FiscalYearKind {
    /// The year the employee was hired, always a partial first year.
    HireYear,
    /// A complete calendar year of service.
    FullYear,
    /// The calendar year containing the end date, cut short.
    FinalYear,
}

/// Leave earned in one calendar year under the fiscal-year method.
///
/// # Example
///
/// ```
/// use annual_leave_engine::models::{FiscalYearAccrual, FiscalYearKind};
/// use chrono::NaiveDate;
///
/// let accrual = FiscalYearAccrual {
///     year: 2021,
///     period_start: NaiveDate::from_ymd_opt(2021, 3, 15).unwrap(),
///     period_end: NaiveDate::from_ymd_opt(2021, 12, 31).unwrap(),
///     work_months: 10,
///     days: 10,
///     kind: FiscalYearKind::HireYear,
/// };
/// assert_eq!(accrual.days, 10);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FiscalYearAccrual {
    /// The calendar year.
    pub year: i32,
    /// First day of service counted in this year.
    pub period_start: NaiveDate,
    /// Last day of service counted in this year.
    pub period_end: NaiveDate,
    /// Months of service credited within the year.
    pub work_months: i32,
    /// Leave days earned for the year.
    pub days: u32,
    /// How the year was classified.
    pub kind: FiscalYearKind,
}
