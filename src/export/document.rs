//! Document export.
//!
//! Renders a result as a plain UTF-8 text document: a title block, one
//! section per report table (header row, separator, data rows), and a
//! closing summary panel with any audit warnings.

use std::path::Path;

use tracing::info;

use super::write_atomically;
use crate::error::EngineResult;
use crate::models::{LeaveCalculationResult, LeavePolicy, ReportTable};

const TITLE: &str = "연차 계산 결과";

/// Renders leave calculation results as a sectioned text document.
///
/// # Example
///
/// ```
/// use annual_leave_engine::calculation::{assemble_result, CalculationOptions};
/// use annual_leave_engine::config::LeavePolicyConfig;
/// use annual_leave_engine::export::DocumentRenderer;
/// use annual_leave_engine::models::TenurePeriod;
/// use chrono::NaiveDate;
///
/// let period = TenurePeriod::new(
///     NaiveDate::from_ymd_opt(2021, 1, 1).unwrap(),
///     NaiveDate::from_ymd_opt(2021, 12, 31).unwrap(),
/// )
/// .unwrap();
/// let result = assemble_result(&period, &LeavePolicyConfig::default(), CalculationOptions::default());
///
/// let document = DocumentRenderer::new().render(&result);
/// assert!(document.starts_with("연차 계산 결과"));
/// assert!(document.contains("회계연도 기준 연차 | 11"));
/// ```
#[derive(Debug, Clone, Default)]
pub struct DocumentRenderer;

impl DocumentRenderer {
    /// Creates a renderer.
    pub fn new() -> Self {
        Self
    }

    fn push_line(out: &mut String, line: &str) {
        out.push_str(line);
        out.push('\n');
    }

    fn render_section(out: &mut String, table: &ReportTable) {
        let header = table.columns.join(" | ");

        Self::push_line(out, &format!("[{}]", table.title));
        Self::push_line(out, &header);
        Self::push_line(out, &"-".repeat(header.chars().count()));
        if table.rows.is_empty() {
            Self::push_line(out, "(없음)");
        }
        for row in &table.rows {
            Self::push_line(out, &row.join(" | "));
        }
        out.push('\n');
    }

    fn render_summary(out: &mut String, result: &LeaveCalculationResult) {
        Self::push_line(out, "[요약]");
        Self::push_line(out, &format!("근속개월: {}", result.elapsed_months));
        for policy in LeavePolicy::ALL {
            let days = result.entitlements.for_policy(policy).days;
            Self::push_line(out, &format!("{}: {}일", policy.label(), days));
        }
        for warning in &result.audit_trace.warnings {
            Self::push_line(out, &format!("참고 ({}): {}", warning.code, warning.message));
        }
    }

    /// Renders the full document.
    pub fn render(&self, result: &LeaveCalculationResult) -> String {
        let mut out = String::new();

        Self::push_line(&mut out, TITLE);
        Self::push_line(&mut out, &"=".repeat(TITLE.chars().count() * 2));
        Self::push_line(&mut out, &format!("입사일: {}", result.tenure.hire_date()));
        Self::push_line(&mut out, &format!("퇴직일: {}", result.tenure.end_date()));
        Self::push_line(&mut out, &format!("계산 ID: {}", result.calculation_id));
        Self::push_line(
            &mut out,
            &format!("기준: {} (v{})", result.policy_code, result.engine_version),
        );
        out.push('\n');

        for table in result.report_tables() {
            Self::render_section(&mut out, &table);
        }

        Self::render_summary(&mut out, result);

        out
    }

    /// Renders the document and writes it to `path` atomically.
    pub fn export_to_file(&self, result: &LeaveCalculationResult, path: &Path) -> EngineResult<()> {
        let document = self.render(result);
        write_atomically(path, document.as_bytes())?;

        info!(
            path = %path.display(),
            calculation_id = %result.calculation_id,
            "Exported leave document"
        );

        Ok(())
    }
}
