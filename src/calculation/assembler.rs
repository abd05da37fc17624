//! Result assembly.
//!
//! Runs the date math and both accrual policies for a tenure period and
//! packages the outputs, with their audit trail, into a
//! [`LeaveCalculationResult`].

use std::time::Instant;

use chrono::{Datelike, Utc};
use tracing::debug;
use uuid::Uuid;

use super::{
    calculate_fiscal_year_leave, calculate_hire_anniversary_leave, compute_schedule,
    elapsed_months, is_last_day_of_month,
};
use crate::config::{AnniversaryIncrement, LeavePolicyConfig};
use crate::models::{
    AuditStep, AuditTrace, AuditWarning, Entitlements, LeaveCalculationResult, TenurePeriod,
};

/// Warning code raised when ignoring day of month inflates the month count.
pub const MONTH_APPROXIMATION_WARNING: &str = "MONTH_COUNT_APPROXIMATION";

/// Warning code raised when a non-default accrual variant is configured.
pub const INCREMENTING_RULE_WARNING: &str = "INCREMENTING_ANNIVERSARY_RULE";

/// Options controlling what goes into a result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CalculationOptions {
    /// Whether to include the schedule preview.
    pub include_schedule: bool,
    /// Overrides the configured schedule horizon.
    pub schedule_horizon: Option<u32>,
}

fn elapsed_months_step(period: &TenurePeriod, months: i32, step_number: u32) -> AuditStep {
    let hire = period.hire_date();
    let end = period.end_date();

    AuditStep {
        step_number,
        rule_id: "elapsed_months".to_string(),
        rule_name: "Elapsed Months".to_string(),
        clause_ref: "60(2)".to_string(),
        input: serde_json::json!({
            "hire_date": hire.to_string(),
            "end_date": end.to_string()
        }),
        output: serde_json::json!({
            "elapsed_months": months
        }),
        reasoning: format!(
            "({} - {}) x 12 + ({} - {}) = {} months",
            end.year(),
            hire.year(),
            end.month(),
            hire.month(),
            months
        ),
    }
}

fn collect_warnings(period: &TenurePeriod, months: i32, config: &LeavePolicyConfig) -> Vec<AuditWarning> {
    let mut warnings = Vec::new();

    if months > 0
        && period.end_date().day() < period.hire_date().day()
        && !is_last_day_of_month(period.end_date())
    {
        warnings.push(AuditWarning {
            code: MONTH_APPROXIMATION_WARNING.to_string(),
            message: format!(
                "Day of month is ignored: {} to {} counts as {} months although the last month is incomplete",
                period.hire_date(),
                period.end_date(),
                months
            ),
            severity: "low".to_string(),
        });
    }

    if config.accrual().anniversary_increment == AnniversaryIncrement::Incrementing {
        warnings.push(AuditWarning {
            code: INCREMENTING_RULE_WARNING.to_string(),
            message: "Anniversary totals use the incrementing rule (15, 16, 17, ...) instead of the flat 15/16 rule".to_string(),
            severity: "medium".to_string(),
        });
    }

    warnings
}

/// Computes every figure for a tenure period and assembles the result.
///
/// # Examples
///
/// ```
/// use annual_leave_engine::calculation::{assemble_result, CalculationOptions};
/// use annual_leave_engine::config::LeavePolicyConfig;
/// use annual_leave_engine::models::TenurePeriod;
/// use chrono::NaiveDate;
///
/// let period = TenurePeriod::new(
///     NaiveDate::from_ymd_opt(2021, 1, 1).unwrap(),
///     NaiveDate::from_ymd_opt(2023, 1, 1).unwrap(),
/// )
/// .unwrap();
///
/// let options = CalculationOptions { include_schedule: true, schedule_horizon: None };
/// let result = assemble_result(&period, &LeavePolicyConfig::default(), options);
///
/// assert_eq!(result.elapsed_months, 24);
/// assert_eq!(result.entitlements.hire_anniversary_total, 26);
/// assert_eq!(result.schedule.unwrap().fiscal_year.len(), 5);
/// ```
pub fn assemble_result(
    period: &TenurePeriod,
    config: &LeavePolicyConfig,
    options: CalculationOptions,
) -> LeaveCalculationResult {
    let start_time = Instant::now();
    let rules = config.accrual();
    let mut steps = Vec::new();
    let mut step_number: u32 = 1;

    let months = elapsed_months(period.hire_date(), period.end_date());
    steps.push(elapsed_months_step(period, months, step_number));
    step_number += 1;

    let anniversary = calculate_hire_anniversary_leave(months, rules, step_number);
    steps.push(anniversary.audit_step);
    step_number += 1;

    let fiscal = calculate_fiscal_year_leave(period.hire_date(), period.end_date(), rules, step_number);
    steps.push(fiscal.audit_step);
    step_number += 1;

    let schedule = options.include_schedule.then(|| {
        let horizon = options
            .schedule_horizon
            .unwrap_or(config.schedule().horizon_years);
        let schedule = compute_schedule(
            period.hire_date(),
            period.end_date(),
            horizon,
            config.schedule(),
        );
        steps.push(AuditStep {
            step_number,
            rule_id: "accrual_schedule_preview".to_string(),
            rule_name: "Accrual Schedule Preview".to_string(),
            clause_ref: "60(1), 60(4)".to_string(),
            input: serde_json::json!({
                "hire_date": period.hire_date().to_string(),
                "horizon_years": horizon
            }),
            output: serde_json::json!({
                "hire_anniversary_entries": schedule.hire_anniversary.len(),
                "fiscal_year_entries": schedule.fiscal_year.len()
            }),
            reasoning: format!(
                "{}-year preview starting at {} days, +{} per year",
                horizon,
                config.schedule().first_year_days,
                config.schedule().yearly_increment
            ),
        });
        schedule
    });

    let warnings = collect_warnings(period, months, config);

    debug!(
        hire_date = %period.hire_date(),
        end_date = %period.end_date(),
        elapsed_months = months,
        hire_anniversary_total = anniversary.total_days,
        fiscal_year_total = fiscal.total_days,
        "Assembled leave calculation"
    );

    LeaveCalculationResult {
        calculation_id: Uuid::new_v4(),
        timestamp: Utc::now(),
        engine_version: env!("CARGO_PKG_VERSION").to_string(),
        policy_code: config.policy().code.clone(),
        tenure: *period,
        elapsed_months: months,
        entitlements: Entitlements {
            hire_anniversary_total: anniversary.total_days,
            fiscal_year_total: fiscal.total_days,
        },
        fiscal_years: fiscal.years,
        schedule,
        audit_trace: AuditTrace {
            steps,
            warnings,
            duration_us: start_time.elapsed().as_micros() as u64,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{AccrualRules, PolicyMetadata, ScheduleRules};
    use chrono::NaiveDate;

    fn period(hire: (i32, u32, u32), end: (i32, u32, u32)) -> TenurePeriod {
        TenurePeriod::new(
            NaiveDate::from_ymd_opt(hire.0, hire.1, hire.2).unwrap(),
            NaiveDate::from_ymd_opt(end.0, end.1, end.2).unwrap(),
        )
        .unwrap()
    }

    #[test]
    fn test_result_carries_months_and_totals() {
        let result = assemble_result(
            &period((2021, 1, 1), (2024, 1, 1)),
            &LeavePolicyConfig::default(),
            CalculationOptions::default(),
        );

        assert_eq!(result.elapsed_months, 36);
        assert_eq!(result.entitlements.hire_anniversary_total, 42);
        assert_eq!(result.entitlements.fiscal_year_total, 42);
        assert_eq!(result.fiscal_years.len(), 4);
        assert_eq!(result.policy_code, "KR-LSA-60");
        assert!(result.schedule.is_none());
    }

    #[test]
    fn test_audit_steps_are_numbered_in_order() {
        let result = assemble_result(
            &period((2021, 1, 1), (2024, 1, 1)),
            &LeavePolicyConfig::default(),
            CalculationOptions {
                include_schedule: true,
                schedule_horizon: None,
            },
        );
        let ids: Vec<&str> = result
            .audit_trace
            .steps
            .iter()
            .map(|s| s.rule_id.as_str())
            .collect();
        let numbers: Vec<u32> = result.audit_trace.steps.iter().map(|s| s.step_number).collect();

        assert_eq!(
            ids,
            vec![
                "elapsed_months",
                "hire_anniversary_leave",
                "fiscal_year_leave",
                "accrual_schedule_preview"
            ]
        );
        assert_eq!(numbers, vec![1, 2, 3, 4]);
    }

    #[test]
    fn test_elapsed_months_reasoning_shows_formula() {
        let result = assemble_result(
            &period((2021, 1, 1), (2025, 4, 1)),
            &LeavePolicyConfig::default(),
            CalculationOptions::default(),
        );

        assert_eq!(
            result.audit_trace.steps[0].reasoning,
            "(2025 - 2021) x 12 + (4 - 1) = 51 months"
        );
    }

    #[test]
    fn test_schedule_horizon_override() {
        let result = assemble_result(
            &period((2021, 1, 1), (2021, 6, 1)),
            &LeavePolicyConfig::default(),
            CalculationOptions {
                include_schedule: true,
                schedule_horizon: Some(3),
            },
        );
        let schedule = result.schedule.unwrap();

        assert_eq!(schedule.hire_anniversary.len(), 3);
        assert_eq!(schedule.fiscal_year.len(), 3);
    }

    #[test]
    fn test_month_approximation_warning() {
        let result = assemble_result(
            &period((2021, 1, 31), (2022, 1, 1)),
            &LeavePolicyConfig::default(),
            CalculationOptions::default(),
        );

        assert_eq!(result.elapsed_months, 12);
        assert_eq!(result.audit_trace.warnings.len(), 1);
        assert_eq!(result.audit_trace.warnings[0].code, MONTH_APPROXIMATION_WARNING);
        assert_eq!(result.audit_trace.warnings[0].severity, "low");
    }

    #[test]
    fn test_no_warning_when_day_reached() {
        let result = assemble_result(
            &period((2021, 1, 15), (2022, 1, 15)),
            &LeavePolicyConfig::default(),
            CalculationOptions::default(),
        );

        assert!(result.audit_trace.warnings.is_empty());
    }

    #[test]
    fn test_no_warning_when_end_closes_its_month() {
        for (hire, end) in [
            ((2021, 1, 31), (2021, 2, 28)),
            ((2020, 1, 31), (2020, 2, 29)),
            ((2021, 3, 31), (2021, 4, 30)),
        ] {
            let result = assemble_result(
                &period(hire, end),
                &LeavePolicyConfig::default(),
                CalculationOptions::default(),
            );

            assert!(
                result.audit_trace.warnings.is_empty(),
                "unexpected warning for {:?} -> {:?}",
                hire,
                end
            );
        }
    }

    #[test]
    fn test_incrementing_rule_raises_warning() {
        let config = LeavePolicyConfig::new(
            PolicyMetadata::default(),
            AccrualRules {
                anniversary_increment: AnniversaryIncrement::Incrementing,
                ..AccrualRules::default()
            },
            ScheduleRules::default(),
        );
        let result = assemble_result(
            &period((2020, 1, 1), (2024, 1, 1)),
            &config,
            CalculationOptions::default(),
        );

        assert_eq!(result.entitlements.hire_anniversary_total, 59);
        assert!(
            result
                .audit_trace
                .warnings
                .iter()
                .any(|w| w.code == INCREMENTING_RULE_WARNING)
        );
    }
}
