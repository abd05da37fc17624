//! Request types for the Annual Leave Engine API.
//!
//! This module defines the JSON request body shared by the `/calculate` and
//! `/export/*` endpoints.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::calculation::{CalculationOptions, last_accrual_date};
use crate::error::EngineResult;
use crate::models::TenurePeriod;

use super::response::ApiError;

pub use crate::config::MAX_SCHEDULE_HORIZON;

/// Request body for the calculation endpoints.
///
/// Only `hire_date` is required. A missing `end_date` means "as of today".
///
/// # Example
///
/// ```
/// use annual_leave_engine::api::CalculationRequest;
/// use chrono::NaiveDate;
///
/// let request: CalculationRequest =
///     serde_json::from_str(r#"{"hire_date": "2021-01-01"}"#).unwrap();
/// let today = NaiveDate::from_ymd_opt(2025, 4, 1).unwrap();
///
/// assert_eq!(request.resolve_end_date(today), today);
/// assert!(!request.include_schedule);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalculationRequest {
    /// The date employment started.
    pub hire_date: NaiveDate,
    /// The as-of or termination date; defaults to today.
    #[serde(default)]
    pub end_date: Option<NaiveDate>,
    /// Whether to include the schedule preview.
    #[serde(default)]
    pub include_schedule: bool,
    /// Overrides the configured schedule horizon.
    #[serde(default)]
    pub schedule_horizon: Option<u32>,
}

impl CalculationRequest {
    /// Returns the end date, falling back to `today`.
    pub fn resolve_end_date(&self, today: NaiveDate) -> NaiveDate {
        self.end_date.unwrap_or(today)
    }

    /// Builds the validated tenure period.
    pub fn tenure_period(&self, today: NaiveDate) -> EngineResult<TenurePeriod> {
        TenurePeriod::new(self.hire_date, self.resolve_end_date(today))
    }

    /// Checks request-level constraints that the types cannot express.
    ///
    /// `default_horizon` is the configured horizon used when the request
    /// does not override it.
    pub fn validate(&self, default_horizon: u32) -> Result<(), ApiError> {
        if let Some(horizon) = self
            .schedule_horizon
            .filter(|h| *h == 0 || *h > MAX_SCHEDULE_HORIZON)
        {
            return Err(ApiError::validation_error(format!(
                "schedule_horizon must be between 1 and {}, got {}",
                MAX_SCHEDULE_HORIZON, horizon
            )));
        }

        let horizon = self.schedule_horizon.unwrap_or(default_horizon);
        if self.include_schedule && last_accrual_date(self.hire_date, horizon).is_none() {
            return Err(ApiError::validation_error(format!(
                "a {}-year schedule from hire_date {} runs past the last supported date",
                horizon, self.hire_date
            )));
        }

        Ok(())
    }

    /// The assembly options this request asks for.
    pub fn options(&self) -> CalculationOptions {
        CalculationOptions {
            include_schedule: self.include_schedule,
            schedule_horizon: self.schedule_horizon,
        }
    }
}
