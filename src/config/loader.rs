//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading leave policy
//! configurations from YAML files.

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::error::{EngineError, EngineResult};

use super::types::{
    AccrualConfigFile, AccrualRules, LeavePolicyConfig, MAX_SCHEDULE_HORIZON, PolicyMetadata,
    ScheduleRules,
};

/// Loads and provides access to leave policy configuration.
///
/// # Directory Structure
///
/// ```text
/// config/kr_annual_leave/
/// ├── policy.yaml   # Statute metadata
/// └── accrual.yaml  # Accrual and schedule rules
/// ```
///
/// # Example
///
/// ```no_run
/// use annual_leave_engine::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/kr_annual_leave").unwrap();
/// println!("Policy: {}", loader.policy().name);
/// println!("Second-year days: {}", loader.accrual_rules().first_full_year_days);
/// ```
#[derive(Debug, Clone, Default)]
pub struct ConfigLoader {
    config: LeavePolicyConfig,
}

impl ConfigLoader {
    /// Loads configuration from the specified directory.
    ///
    /// # Returns
    ///
    /// Returns a `ConfigLoader` instance on success, or an error if:
    /// - Any required file is missing
    /// - Any file contains invalid YAML
    /// - Any rule value is unusable (see [`ConfigLoader::validate`])
    ///
    /// # Example
    ///
    /// ```no_run
    /// use annual_leave_engine::config::ConfigLoader;
    ///
    /// let loader = ConfigLoader::load("./config/kr_annual_leave")?;
    /// # Ok::<(), annual_leave_engine::error::EngineError>(())
    /// ```
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();

        let metadata = Self::load_yaml::<PolicyMetadata>(&path.join("policy.yaml"))?;
        let accrual_file = Self::load_yaml::<AccrualConfigFile>(&path.join("accrual.yaml"))?;

        Self::validate(&accrual_file.accrual, &accrual_file.schedule)?;

        debug!(
            policy = %metadata.code,
            version = %metadata.version,
            "Loaded leave policy configuration"
        );

        Ok(Self {
            config: LeavePolicyConfig::new(metadata, accrual_file.accrual, accrual_file.schedule),
        })
    }

    /// Wraps an already-built configuration.
    pub fn from_config(config: LeavePolicyConfig) -> Self {
        Self { config }
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> EngineResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }

    /// Checks rule values that would make the accrual arithmetic meaningless.
    pub fn validate(accrual: &AccrualRules, schedule: &ScheduleRules) -> EngineResult<()> {
        if accrual.max_annual_days == 0 {
            return Err(EngineError::InvalidConfig {
                field: "accrual.max_annual_days".to_string(),
                message: "must be at least 1".to_string(),
            });
        }

        for (field, value) in [
            ("accrual.first_year_monthly_cap", accrual.first_year_monthly_cap),
            ("accrual.first_full_year_days", accrual.first_full_year_days),
            ("accrual.subsequent_year_days", accrual.subsequent_year_days),
        ] {
            if value > accrual.max_annual_days {
                return Err(EngineError::InvalidConfig {
                    field: field.to_string(),
                    message: format!(
                        "{} exceeds max_annual_days {}",
                        value, accrual.max_annual_days
                    ),
                });
            }
        }

        if schedule.horizon_years == 0 || schedule.horizon_years > MAX_SCHEDULE_HORIZON {
            return Err(EngineError::InvalidConfig {
                field: "schedule.horizon_years".to_string(),
                message: format!(
                    "must be between 1 and {}, got {}",
                    MAX_SCHEDULE_HORIZON, schedule.horizon_years
                ),
            });
        }

        // Requests may override the horizon up to the maximum.
        if schedule.days_granted(MAX_SCHEDULE_HORIZON).is_none() {
            return Err(EngineError::InvalidConfig {
                field: "schedule.yearly_increment".to_string(),
                message: format!(
                    "{} + {} x {} overflows the day count",
                    schedule.first_year_days,
                    MAX_SCHEDULE_HORIZON - 1,
                    schedule.yearly_increment
                ),
            });
        }

        Ok(())
    }

    /// Returns the underlying policy configuration.
    pub fn config(&self) -> &LeavePolicyConfig {
        &self.config
    }

    /// Returns the policy metadata.
    pub fn policy(&self) -> &PolicyMetadata {
        self.config.policy()
    }

    /// Returns the accrual rules.
    pub fn accrual_rules(&self) -> &AccrualRules {
        self.config.accrual()
    }

    /// Returns the schedule preview rules.
    pub fn schedule_rules(&self) -> &ScheduleRules {
        self.config.schedule()
    }
}
