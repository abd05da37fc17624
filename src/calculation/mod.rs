//! Calculation logic for the Annual Leave Engine.
//!
//! This module contains the calendar month arithmetic, the hire-date
//! anniversary and fiscal-year accrual policies, the fixed schedule preview,
//! and the assembly of all of these into a single result.

mod assembler;
mod date_math;
mod entitlements;
mod fiscal_year;
mod hire_anniversary;
mod schedule;

pub use assembler::{
    CalculationOptions, INCREMENTING_RULE_WARNING, MONTH_APPROXIMATION_WARNING, assemble_result,
};
pub use date_math::{
    add_years, completed_months_since_year_start, elapsed_months, inclusive_months,
    is_last_day_of_month,
};
pub use entitlements::compute_entitlements;
pub use fiscal_year::{
    FISCAL_YEAR_RULE_ID, FiscalYearResult, calculate_fiscal_year_leave, fiscal_year_breakdown,
};
pub use hire_anniversary::{
    HIRE_ANNIVERSARY_RULE_ID, HireAnniversaryResult, anniversary_year_days,
    calculate_hire_anniversary_leave,
};
pub use schedule::{compute_schedule, generate_schedule, last_accrual_date};
