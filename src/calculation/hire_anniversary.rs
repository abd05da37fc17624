//! Hire-date anniversary leave calculation.
//!
//! Under this method leave accrues relative to the employee's own hire date:
//! one day per completed month during the first year (Labor Standards Act
//! Article 60(2)), then a yearly grant for every further completed year of
//! service (Article 60(1) and 60(4)).

use serde::{Deserialize, Serialize};

use crate::config::{AccrualRules, AnniversaryIncrement};
use crate::models::AuditStep;

/// Rule identifier recorded in the audit trace.
pub const HIRE_ANNIVERSARY_RULE_ID: &str = "hire_anniversary_leave";

/// The result of the hire-date anniversary calculation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HireAnniversaryResult {
    /// Total leave days accrued.
    pub total_days: u32,
    /// Completed years of service (`elapsed_months / 12`).
    pub completed_years: u32,
    /// Days credited for each completed year, first year first.
    pub yearly_days: Vec<u32>,
    /// The audit step recording this calculation.
    pub audit_step: AuditStep,
}

/// Days credited for the `year`-th completed year of service (`year >= 2`).
///
/// Year 2 always grants `first_full_year_days`. Later years grant
/// `subsequent_year_days` under the flat rule, or one extra day per year
/// under the incrementing rule. The grant never exceeds `max_annual_days`.
///
/// ```
/// use annual_leave_engine::calculation::anniversary_year_days;
/// use annual_leave_engine::config::{AccrualRules, AnniversaryIncrement};
///
/// let flat = AccrualRules::default();
/// assert_eq!(anniversary_year_days(2, &flat), 15);
/// assert_eq!(anniversary_year_days(7, &flat), 16);
///
/// let incrementing = AccrualRules {
///     anniversary_increment: AnniversaryIncrement::Incrementing,
///     ..AccrualRules::default()
/// };
/// assert_eq!(anniversary_year_days(4, &incrementing), 17);
/// assert_eq!(anniversary_year_days(30, &incrementing), 25);
/// ```
pub fn anniversary_year_days(year: u32, rules: &AccrualRules) -> u32 {
    let days = match (year, rules.anniversary_increment) {
        (0..=2, _) => rules.first_full_year_days,
        (_, AnniversaryIncrement::Flat) => rules.subsequent_year_days,
        (_, AnniversaryIncrement::Incrementing) => rules.first_full_year_days + (year - 2),
    };
    days.min(rules.max_annual_days)
}

/// Returns the days credited per completed year for the given tenure.
///
/// Empty while the first year is still running; otherwise the first element
/// is the first-year allowance (`first_year_monthly_cap`).
fn yearly_breakdown(completed_years: u32, rules: &AccrualRules) -> Vec<u32> {
    if completed_years == 0 {
        return Vec::new();
    }

    std::iter::once(rules.first_year_monthly_cap)
        .chain((2..=completed_years).map(|year| anniversary_year_days(year, rules)))
        .collect()
}

/// Calculates leave under the hire-date anniversary method.
///
/// # Arguments
///
/// * `elapsed_months` - Whole months of service from
///   [`elapsed_months`](super::elapsed_months)
/// * `rules` - The accrual rules
/// * `step_number` - The step number for audit trail sequencing
///
/// # Rules
///
/// - Fewer than 12 months: one day per month, capped at
///   `first_year_monthly_cap`. Negative tenure clamps to zero.
/// - 12 months or more: `first_year_monthly_cap` for the first year plus
///   [`anniversary_year_days`] for every further completed year. A multiple
///   of 12 months counts as that many completed years.
///
/// # Examples
///
/// ```
/// use annual_leave_engine::calculation::calculate_hire_anniversary_leave;
/// use annual_leave_engine::config::AccrualRules;
///
/// let rules = AccrualRules::default();
///
/// assert_eq!(calculate_hire_anniversary_leave(7, &rules, 1).total_days, 7);
/// assert_eq!(calculate_hire_anniversary_leave(12, &rules, 1).total_days, 11);
/// assert_eq!(calculate_hire_anniversary_leave(24, &rules, 1).total_days, 26);
/// assert_eq!(calculate_hire_anniversary_leave(36, &rules, 1).total_days, 42);
/// ```
pub fn calculate_hire_anniversary_leave(
    elapsed_months: i32,
    rules: &AccrualRules,
    step_number: u32,
) -> HireAnniversaryResult {
    let months = elapsed_months.max(0) as u32;
    let completed_years = months / 12;

    let (total_days, yearly_days, clause_ref, reasoning) = if completed_years == 0 {
        let days = months.min(rules.first_year_monthly_cap);
        let reasoning = if elapsed_months < 0 {
            format!("End date precedes hire date ({} months); no leave accrued", elapsed_months)
        } else {
            format!(
                "{} months of first-year service at 1 day per month = {} days",
                months, days
            )
        };
        (days, Vec::new(), "60(2)", reasoning)
    } else {
        let yearly = yearly_breakdown(completed_years, rules);
        let total: u32 = yearly.iter().sum();
        let terms = yearly
            .iter()
            .map(|d| d.to_string())
            .collect::<Vec<_>>()
            .join(" + ");
        let reasoning = format!(
            "{} months = {} completed years: {} = {} days",
            months, completed_years, terms, total
        );
        let clause_ref = if completed_years >= 3 {
            "60(1), 60(2), 60(4)"
        } else {
            "60(1), 60(2)"
        };
        (total, yearly, clause_ref, reasoning)
    };

    let increment = match rules.anniversary_increment {
        AnniversaryIncrement::Flat => "flat",
        AnniversaryIncrement::Incrementing => "incrementing",
    };

    let audit_step = AuditStep {
        step_number,
        rule_id: HIRE_ANNIVERSARY_RULE_ID.to_string(),
        rule_name: "Hire-Date Anniversary Leave".to_string(),
        clause_ref: clause_ref.to_string(),
        input: serde_json::json!({
            "elapsed_months": elapsed_months,
            "anniversary_increment": increment
        }),
        output: serde_json::json!({
            "completed_years": completed_years,
            "yearly_days": yearly_days,
            "total_days": total_days
        }),
        reasoning,
    };

    HireAnniversaryResult {
        total_days,
        completed_years,
        yearly_days,
        audit_step,
    }
}
