//! Tenure period model.
//!
//! This module contains the [`TenurePeriod`] type: the validated pair of
//! dates every leave calculation starts from.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

/// An employee's period of service, from hire date to an as-of or
/// termination date.
///
/// Both dates are calendar dates without a time of day. The end date may
/// equal the hire date but never precede it.
///
/// # Example
///
/// ```
/// use annual_leave_engine::models::TenurePeriod;
/// use chrono::NaiveDate;
///
/// let period = TenurePeriod::new(
///     NaiveDate::from_ymd_opt(2021, 1, 1).unwrap(),
///     NaiveDate::from_ymd_opt(2025, 4, 1).unwrap(),
/// )
/// .unwrap();
///
/// assert_eq!(period.elapsed_months(), 51);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawTenurePeriod")]
pub struct TenurePeriod {
    hire_date: NaiveDate,
    end_date: NaiveDate,
}

#[derive(Deserialize)]
struct RawTenurePeriod {
    hire_date: NaiveDate,
    end_date: NaiveDate,
}

impl TryFrom<RawTenurePeriod> for TenurePeriod {
    type Error = EngineError;

    fn try_from(raw: RawTenurePeriod) -> Result<Self, Self::Error> {
        TenurePeriod::new(raw.hire_date, raw.end_date)
    }
}

impl TenurePeriod {
    /// Creates a tenure period, rejecting an end date before the hire date.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InvalidDateRange`] when `end_date < hire_date`.
    pub fn new(hire_date: NaiveDate, end_date: NaiveDate) -> EngineResult<Self> {
        if end_date < hire_date {
            return Err(EngineError::InvalidDateRange {
                hire_date,
                end_date,
            });
        }

        Ok(Self {
            hire_date,
            end_date,
        })
    }

    /// The date employment started.
    pub fn hire_date(&self) -> NaiveDate {
        self.hire_date
    }

    /// The as-of or termination date.
    pub fn end_date(&self) -> NaiveDate {
        self.end_date
    }

    /// Whole calendar months between the two dates, ignoring day of month.
    pub fn elapsed_months(&self) -> i32 {
        crate::calculation::elapsed_months(self.hire_date, self.end_date)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_same_day_period_is_valid() {
        let period = TenurePeriod::new(date(2024, 5, 10), date(2024, 5, 10)).unwrap();
        assert_eq!(period.elapsed_months(), 0);
    }

    #[test]
    fn test_inverted_period_is_rejected() {
        let result = TenurePeriod::new(date(2024, 5, 10), date(2024, 5, 9));

        match result {
            Err(EngineError::InvalidDateRange {
                hire_date,
                end_date,
            }) => {
                assert_eq!(hire_date, date(2024, 5, 10));
                assert_eq!(end_date, date(2024, 5, 9));
            }
            _ => panic!("Expected InvalidDateRange error"),
        }
    }

    #[test]
    fn test_accessors_return_dates() {
        let period = TenurePeriod::new(date(2020, 3, 2), date(2023, 7, 15)).unwrap();

        assert_eq!(period.hire_date(), date(2020, 3, 2));
        assert_eq!(period.end_date(), date(2023, 7, 15));
        assert_eq!(period.elapsed_months(), 40);
    }

    #[test]
    fn test_serialization_round_trip_keeps_dates() {
        let period = TenurePeriod::new(date(2021, 1, 1), date(2021, 12, 31)).unwrap();
        let json = serde_json::to_string(&period).unwrap();

        assert_eq!(json, r#"{"hire_date":"2021-01-01","end_date":"2021-12-31"}"#);

        let parsed: TenurePeriod = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, period);
    }

    #[test]
    fn test_deserializing_inverted_period_fails() {
        let json = r#"{"hire_date":"2022-06-01","end_date":"2022-01-01"}"#;
        let result: Result<TenurePeriod, _> = serde_json::from_str(json);

        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("precedes hire date"));
    }
}
