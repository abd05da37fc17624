//! Core data models for the Annual Leave Engine.
//!
//! This module contains all the value objects used throughout the engine.

mod accrual_schedule;
mod calculation_result;
mod entitlement;
mod report_table;
mod tenure_period;

pub use accrual_schedule::{AccrualSchedule, AccrualScheduleEntry};
pub use calculation_result::{AuditStep, AuditTrace, AuditWarning, LeaveCalculationResult};
pub use entitlement::{
    Entitlements, FiscalYearAccrual, FiscalYearKind, LeaveEntitlement, LeavePolicy,
};
pub use report_table::ReportTable;
pub use tenure_period::TenurePeriod;
