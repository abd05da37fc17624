//! Fiscal-year (calendar-year) leave calculation.
//!
//! This method ignores the personal hire anniversary and splits the tenure
//! into calendar years running January 1 to December 31. The hire year is
//! credited by the month as a partial first year; each complete calendar
//! year after it earns a yearly grant; the year containing the end date is
//! credited by completed month until it is itself complete.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use super::date_math::{completed_months_since_year_start, inclusive_months};
use crate::config::AccrualRules;
use crate::models::{AuditStep, FiscalYearAccrual, FiscalYearKind};

/// Rule identifier recorded in the audit trace.
pub const FISCAL_YEAR_RULE_ID: &str = "fiscal_year_leave";

/// The result of the fiscal-year calculation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FiscalYearResult {
    /// Total leave days accrued across all calendar years.
    pub total_days: u32,
    /// Per-calendar-year breakdown, oldest first.
    pub years: Vec<FiscalYearAccrual>,
    /// The audit step recording this calculation.
    pub audit_step: AuditStep,
}

fn calendar_year_bounds(year: i32) -> Option<(NaiveDate, NaiveDate)> {
    Some((
        NaiveDate::from_ymd_opt(year, 1, 1)?,
        NaiveDate::from_ymd_opt(year, 12, 31)?,
    ))
}

/// Days granted for a complete calendar year `years_after_hire` years after
/// the hire year.
fn full_year_days(years_after_hire: i32, rules: &AccrualRules) -> u32 {
    let days = if years_after_hire == 1 {
        rules.first_full_year_days
    } else {
        rules.subsequent_year_days
    };
    days.min(rules.max_annual_days)
}

fn partial_year_days(work_months: i32, rules: &AccrualRules) -> u32 {
    (work_months.max(0) as u32).min(rules.first_year_monthly_cap)
}

/// Builds the per-calendar-year breakdown for a tenure.
///
/// Returns an empty breakdown when `end_date` precedes `hire_date`.
pub fn fiscal_year_breakdown(
    hire_date: NaiveDate,
    end_date: NaiveDate,
    rules: &AccrualRules,
) -> Vec<FiscalYearAccrual> {
    let mut years = Vec::new();
    if end_date < hire_date {
        return years;
    }

    for year in hire_date.year()..=end_date.year() {
        let Some((year_start, year_end)) = calendar_year_bounds(year) else {
            break;
        };
        let years_after_hire = year - hire_date.year();

        let accrual = if years_after_hire == 0 {
            let period_end = year_end.min(end_date);
            let work_months = inclusive_months(hire_date, period_end);
            FiscalYearAccrual {
                year,
                period_start: hire_date,
                period_end,
                work_months,
                days: partial_year_days(work_months, rules),
                kind: FiscalYearKind::HireYear,
            }
        } else if year == end_date.year() {
            let work_months = completed_months_since_year_start(end_date);
            let (days, kind) = if work_months < 12 {
                (
                    partial_year_days(work_months, rules),
                    FiscalYearKind::FinalYear,
                )
            } else {
                (
                    full_year_days(years_after_hire, rules),
                    FiscalYearKind::FullYear,
                )
            };
            FiscalYearAccrual {
                year,
                period_start: year_start,
                period_end: end_date,
                work_months,
                days,
                kind,
            }
        } else {
            FiscalYearAccrual {
                year,
                period_start: year_start,
                period_end: year_end,
                work_months: 12,
                days: full_year_days(years_after_hire, rules),
                kind: FiscalYearKind::FullYear,
            }
        };

        years.push(accrual);
    }

    years
}

/// Calculates leave under the fiscal-year method.
///
/// # Arguments
///
/// * `hire_date` - The date employment started
/// * `end_date` - The as-of or termination date
/// * `rules` - The accrual rules
/// * `step_number` - The step number for audit trail sequencing
///
/// # Rules
///
/// - Hire year: months from the hire date to the earlier of December 31 and
///   the end date, counting the hire month, capped at
///   `first_year_monthly_cap`.
/// - Complete calendar years: `first_full_year_days` for the first year
///   after the hire year, `subsequent_year_days` after that.
/// - Final year: completed months since January 1, capped at
///   `first_year_monthly_cap`, unless the end date is December 31 in which
///   case it is a complete year.
///
/// An end date before the hire date yields zero days and no breakdown.
///
/// # Examples
///
/// ```
/// use annual_leave_engine::calculation::calculate_fiscal_year_leave;
/// use annual_leave_engine::config::AccrualRules;
/// use chrono::NaiveDate;
///
/// let hire = NaiveDate::from_ymd_opt(2021, 1, 1).unwrap();
/// let end = NaiveDate::from_ymd_opt(2021, 12, 31).unwrap();
///
/// let result = calculate_fiscal_year_leave(hire, end, &AccrualRules::default(), 1);
/// assert_eq!(result.total_days, 11);
/// ```
pub fn calculate_fiscal_year_leave(
    hire_date: NaiveDate,
    end_date: NaiveDate,
    rules: &AccrualRules,
    step_number: u32,
) -> FiscalYearResult {
    let years = fiscal_year_breakdown(hire_date, end_date, rules);
    let total_days: u32 = years.iter().map(|y| y.days).sum();

    let reasoning = if years.is_empty() {
        format!(
            "End date {} precedes hire date {}; no leave accrued",
            end_date, hire_date
        )
    } else {
        let parts = years
            .iter()
            .map(|y| {
                let label = match y.kind {
                    FiscalYearKind::HireYear => "hire year",
                    FiscalYearKind::FullYear => "full year",
                    FiscalYearKind::FinalYear => "final year",
                };
                format!("{}: {} months ({}) = {} days", y.year, y.work_months, label, y.days)
            })
            .collect::<Vec<_>>()
            .join("; ");
        format!("{}; total {} days", parts, total_days)
    };

    let audit_step = AuditStep {
        step_number,
        rule_id: FISCAL_YEAR_RULE_ID.to_string(),
        rule_name: "Fiscal-Year Leave".to_string(),
        clause_ref: "60(1), 60(2), 60(4)".to_string(),
        input: serde_json::json!({
            "hire_date": hire_date.to_string(),
            "end_date": end_date.to_string()
        }),
        output: serde_json::json!({
            "years": years
                .iter()
                .map(|y| serde_json::json!({"year": y.year, "work_months": y.work_months, "days": y.days}))
                .collect::<Vec<_>>(),
            "total_days": total_days
        }),
        reasoning,
    };

    FiscalYearResult {
        total_days,
        years,
        audit_step,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn total(hire: NaiveDate, end: NaiveDate) -> u32 {
        calculate_fiscal_year_leave(hire, end, &AccrualRules::default(), 1).total_days
    }

    /// FY-001: a full hire year is capped at eleven days
    #[test]
    fn test_full_hire_year_is_capped_at_eleven() {
        assert_eq!(total(date(2021, 1, 1), date(2021, 12, 31)), 11);
    }

    /// FY-002: hire year counts the hire month
    #[test]
    fn test_mid_year_hire_counts_hire_month() {
        let result = calculate_fiscal_year_leave(
            date(2021, 3, 15),
            date(2021, 12, 31),
            &AccrualRules::default(),
            1,
        );

        assert_eq!(result.years.len(), 1);
        assert_eq!(result.years[0].work_months, 10);
        assert_eq!(result.years[0].days, 10);
        assert_eq!(result.years[0].kind, FiscalYearKind::HireYear);
    }

    /// FY-003: hire and end in the same year stop at the end date
    #[test]
    fn test_same_year_stops_at_end_date() {
        let result = calculate_fiscal_year_leave(
            date(2021, 3, 15),
            date(2021, 6, 10),
            &AccrualRules::default(),
            1,
        );

        assert_eq!(result.years[0].period_end, date(2021, 6, 10));
        assert_eq!(result.years[0].work_months, 3);
        assert_eq!(result.total_days, 3);
    }

    /// FY-004: first full year after the hire year earns fifteen
    #[test]
    fn test_multi_year_span() {
        let result = calculate_fiscal_year_leave(
            date(2021, 3, 15),
            date(2023, 6, 10),
            &AccrualRules::default(),
            1,
        );
        let days: Vec<u32> = result.years.iter().map(|y| y.days).collect();

        assert_eq!(days, vec![10, 15, 5]);
        assert_eq!(result.total_days, 30);
        assert_eq!(result.years[2].kind, FiscalYearKind::FinalYear);
    }

    /// FY-005: later full years earn sixteen
    #[test]
    fn test_later_full_years_earn_sixteen() {
        let result = calculate_fiscal_year_leave(
            date(2020, 7, 1),
            date(2024, 2, 1),
            &AccrualRules::default(),
            1,
        );
        let days: Vec<u32> = result.years.iter().map(|y| y.days).collect();

        // 2020: Jul-Dec = 6; 2021: 15; 2022: 16; 2023: 16; 2024: January complete, February not.
        assert_eq!(days, vec![6, 15, 16, 16, 1]);
        assert_eq!(result.total_days, 54);
    }

    #[test]
    fn test_final_year_ending_december_31_is_full() {
        let result = calculate_fiscal_year_leave(
            date(2021, 1, 1),
            date(2022, 12, 31),
            &AccrualRules::default(),
            1,
        );

        assert_eq!(result.years[1].kind, FiscalYearKind::FullYear);
        assert_eq!(result.years[1].days, 15);
        assert_eq!(result.total_days, 26);
    }

    #[test]
    fn test_final_year_early_january_earns_nothing() {
        let result = calculate_fiscal_year_leave(
            date(2021, 1, 1),
            date(2022, 1, 5),
            &AccrualRules::default(),
            1,
        );

        assert_eq!(result.years[1].work_months, 0);
        assert_eq!(result.years[1].days, 0);
        assert_eq!(result.total_days, 11);
    }

    #[test]
    fn test_breakdown_sums_to_total() {
        let result = calculate_fiscal_year_leave(
            date(2015, 9, 20),
            date(2025, 8, 31),
            &AccrualRules::default(),
            1,
        );
        let sum: u32 = result.years.iter().map(|y| y.days).sum();

        assert_eq!(result.years.len(), 11);
        assert_eq!(sum, result.total_days);
    }

    #[test]
    fn test_inverted_range_is_zero_with_no_years() {
        let result = calculate_fiscal_year_leave(
            date(2022, 1, 1),
            date(2021, 1, 1),
            &AccrualRules::default(),
            1,
        );

        assert_eq!(result.total_days, 0);
        assert!(result.years.is_empty());
        assert!(result.audit_step.reasoning.contains("precedes hire date"));
    }

    #[test]
    fn test_audit_step_lists_each_year() {
        let result = calculate_fiscal_year_leave(
            date(2021, 3, 15),
            date(2023, 6, 10),
            &AccrualRules::default(),
            4,
        );

        assert_eq!(result.audit_step.step_number, 4);
        assert_eq!(result.audit_step.rule_id, FISCAL_YEAR_RULE_ID);
        assert_eq!(result.audit_step.output["years"].as_array().unwrap().len(), 3);
        assert!(result.audit_step.reasoning.contains("2022: 12 months (full year) = 15 days"));
        assert!(result.audit_step.reasoning.contains("total 30 days"));
    }
}
