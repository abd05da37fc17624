//! Configuration types for leave accrual.
//!
//! This module contains the strongly-typed configuration structures that
//! are deserialized from YAML configuration files.

use serde::{Deserialize, Serialize};

/// Metadata about the leave policy.
///
/// Contains identifying information about the statute the rules implement.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PolicyMetadata {
    /// Short policy code (e.g., "KR-LSA-60").
    pub code: String,
    /// The human-readable name of the policy.
    pub name: String,
    /// The version or effective date of the rules.
    pub version: String,
    /// URL to the official statute text.
    pub source_url: String,
}

impl Default for PolicyMetadata {
    fn default() -> Self {
        Self {
            code: "KR-LSA-60".to_string(),
            name: "Labor Standards Act Article 60 annual paid leave".to_string(),
            version: "2018-05-29".to_string(),
            source_url: "https://www.law.go.kr/법령/근로기준법/제60조".to_string(),
        }
    }
}

/// How each completed year after the second is credited under the
/// hire-date anniversary method.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AnniversaryIncrement {
    /// Year 2 grants `first_full_year_days`, every later year grants
    /// `subsequent_year_days`.
    Flat,
    /// Year 2 grants `first_full_year_days` and each later year one more
    /// day than the year before (15, 16, 17, ...).
    Incrementing,
}

/// Entitlement rules shared by both accrual policies.
///
/// # Example
///
/// ```
/// use annual_leave_engine::config::{AccrualRules, AnniversaryIncrement};
///
/// let rules = AccrualRules::default();
/// assert_eq!(rules.first_year_monthly_cap, 11);
/// assert_eq!(rules.first_full_year_days, 15);
/// assert_eq!(rules.subsequent_year_days, 16);
/// assert_eq!(rules.anniversary_increment, AnniversaryIncrement::Flat);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccrualRules {
    /// Maximum days earned at one per month before the first year completes.
    pub first_year_monthly_cap: u32,
    /// Days granted for the first full year after the first.
    pub first_full_year_days: u32,
    /// Days granted for each later full year under the flat rule.
    pub subsequent_year_days: u32,
    /// Statutory ceiling on days granted for any single year.
    pub max_annual_days: u32,
    /// Which anniversary increment rule applies.
    pub anniversary_increment: AnniversaryIncrement,
}

impl Default for AccrualRules {
    fn default() -> Self {
        Self {
            first_year_monthly_cap: 11,
            first_full_year_days: 15,
            subsequent_year_days: 16,
            max_annual_days: 25,
            anniversary_increment: AnniversaryIncrement::Flat,
        }
    }
}

/// Largest schedule horizon, in tenure years, a preview may cover.
pub const MAX_SCHEDULE_HORIZON: u32 = 40;

/// Parameters of the fixed accrual-schedule preview.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleRules {
    /// Number of tenure years previewed.
    pub horizon_years: u32,
    /// Days granted in the first previewed year.
    pub first_year_days: u32,
    /// Additional days granted per subsequent year.
    pub yearly_increment: u32,
}

impl Default for ScheduleRules {
    fn default() -> Self {
        Self {
            horizon_years: 5,
            first_year_days: 11,
            yearly_increment: 1,
        }
    }
}

impl ScheduleRules {
    /// Days granted in the given 1-based tenure year, or `None` if the count
    /// does not fit in a `u32`.
    ///
    /// ```
    /// use annual_leave_engine::config::ScheduleRules;
    ///
    /// let rules = ScheduleRules::default();
    /// assert_eq!(rules.days_granted(1), Some(11));
    /// assert_eq!(rules.days_granted(5), Some(15));
    /// ```
    pub fn days_granted(&self, tenure_year_index: u32) -> Option<u32> {
        tenure_year_index
            .saturating_sub(1)
            .checked_mul(self.yearly_increment)?
            .checked_add(self.first_year_days)
    }
}

/// Accrual configuration file structure (`accrual.yaml`).
#[derive(Debug, Clone, Deserialize)]
pub struct AccrualConfigFile {
    /// Entitlement rules.
    pub accrual: AccrualRules,
    /// Schedule preview rules.
    pub schedule: ScheduleRules,
}

/// The complete leave policy configuration loaded from YAML files.
///
/// `LeavePolicyConfig::default()` carries the statutory values, so the
/// engine can run without any configuration directory.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LeavePolicyConfig {
    metadata: PolicyMetadata,
    accrual: AccrualRules,
    schedule: ScheduleRules,
}

impl LeavePolicyConfig {
    /// Creates a new LeavePolicyConfig from its component parts.
    pub fn new(metadata: PolicyMetadata, accrual: AccrualRules, schedule: ScheduleRules) -> Self {
        Self {
            metadata,
            accrual,
            schedule,
        }
    }

    /// Returns the policy metadata.
    pub fn policy(&self) -> &PolicyMetadata {
        &self.metadata
    }

    /// Returns the accrual rules.
    pub fn accrual(&self) -> &AccrualRules {
        &self.accrual
    }

    /// Returns the schedule preview rules.
    pub fn schedule(&self) -> &ScheduleRules {
        &self.schedule
    }
}
