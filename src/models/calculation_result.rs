//! Calculation result models for the Annual Leave Engine.
//!
//! This module contains the [`LeaveCalculationResult`] type and its associated
//! structures that capture all outputs from a leave calculation, including
//! the entitlement totals, the fiscal-year breakdown, the optional schedule
//! preview and the audit trace.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{
    AccrualSchedule, Entitlements, FiscalYearAccrual, LeavePolicy, ReportTable, TenurePeriod,
};

/// A single step in the audit trace recording a calculation decision.
///
/// Each step captures the input, output, and reasoning for a rule application.
///
/// # Example
///
/// ```
/// use annual_leave_engine::models::AuditStep;
///
/// let step = AuditStep {
///     step_number: 1,
///     rule_id: "elapsed_months".to_string(),
///     rule_name: "Elapsed Months".to_string(),
///     clause_ref: "60(2)".to_string(),
///     input: serde_json::json!({"hire_date": "2021-01-01", "end_date": "2025-04-01"}),
///     output: serde_json::json!({"elapsed_months": 51}),
///     reasoning: "(2025 - 2021) x 12 + (4 - 1) = 51 months".to_string(),
/// };
/// assert_eq!(step.rule_id, "elapsed_months");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditStep {
    /// The sequential step number.
    pub step_number: u32,
    /// The unique identifier of the rule that was applied.
    pub rule_id: String,
    /// The human-readable name of the rule.
    pub rule_name: String,
    /// Reference to the statute clause for this rule.
    pub clause_ref: String,
    /// The input data for this step.
    pub input: serde_json::Value,
    /// The output data from this step.
    pub output: serde_json::Value,
    /// Human-readable explanation of the decision.
    pub reasoning: String,
}

/// A warning generated during calculation.
///
/// Warnings flag known approximations that don't prevent calculation
/// but may require attention.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditWarning {
    /// A code identifying the type of warning.
    pub code: String,
    /// A human-readable description of the warning.
    pub message: String,
    /// The severity level (e.g., "low", "medium", "high").
    pub severity: String,
}

/// The complete audit trace for a calculation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditTrace {
    /// The sequence of calculation steps.
    pub steps: Vec<AuditStep>,
    /// Any warnings generated during calculation.
    pub warnings: Vec<AuditWarning>,
    /// The total calculation duration in microseconds.
    pub duration_us: u64,
}

/// The complete result of a leave calculation.
///
/// This is the only object handed to presentation and export collaborators.
/// Everything in it is derived from the tenure period and the accrual rules.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeaveCalculationResult {
    /// Unique identifier for this calculation.
    pub calculation_id: Uuid,
    /// When the calculation was performed.
    pub timestamp: DateTime<Utc>,
    /// The version of the engine that performed the calculation.
    pub engine_version: String,
    /// Code of the policy configuration used.
    pub policy_code: String,
    /// The tenure period the calculation covers.
    pub tenure: TenurePeriod,
    /// Whole calendar months of service, ignoring day of month.
    pub elapsed_months: i32,
    /// Entitlement totals under both policies.
    pub entitlements: Entitlements,
    /// Per-calendar-year breakdown of the fiscal-year total.
    pub fiscal_years: Vec<FiscalYearAccrual>,
    /// Optional grant preview for both policies.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub schedule: Option<AccrualSchedule>,
    /// Complete audit trace of calculation decisions.
    pub audit_trace: AuditTrace,
}

impl LeaveCalculationResult {
    /// Lays the result out as labelled tables for export.
    ///
    /// The summary table always comes first, followed by the fiscal-year
    /// breakdown and, when present, one table per schedule.
    pub fn report_tables(&self) -> Vec<ReportTable> {
        let mut tables = Vec::new();

        let mut summary = ReportTable::new("summary", "결과", &["구분", "값"]);
        summary.push_row(["입사일".to_string(), self.tenure.hire_date().to_string()]);
        summary.push_row(["퇴직일".to_string(), self.tenure.end_date().to_string()]);
        summary.push_row(["근속개월".to_string(), self.elapsed_months.to_string()]);
        for entitlement in self.entitlements.to_vec() {
            summary.push_row([
                entitlement.policy.label().to_string(),
                entitlement.days.to_string(),
            ]);
        }
        tables.push(summary);

        let mut fiscal = ReportTable::new(
            "fiscal_years",
            "회계연도",
            &["연도", "시작일", "종료일", "근무개월", "연차"],
        );
        for year in &self.fiscal_years {
            fiscal.push_row([
                year.year.to_string(),
                year.period_start.to_string(),
                year.period_end.to_string(),
                year.work_months.to_string(),
                year.days.to_string(),
            ]);
        }
        tables.push(fiscal);

        if let Some(schedule) = &self.schedule {
            for policy in LeavePolicy::ALL {
                let (key, title) = match policy {
                    LeavePolicy::HireAnniversary => {
                        ("schedule_hire_anniversary", "입사일 기준 스케줄")
                    }
                    LeavePolicy::FiscalYear => ("schedule_fiscal_year", "회계연도 기준 스케줄"),
                };
                let mut table = ReportTable::new(key, title, &["연차", "부여일", "부여일수"]);
                for entry in schedule.entries(policy) {
                    table.push_row([
                        format!("{}년차", entry.tenure_year_index),
                        entry.accrual_date.to_string(),
                        entry.days_granted.to_string(),
                    ]);
                }
                tables.push(table);
            }
        }

        tables
    }
}
