//! Configuration loading and management for the Annual Leave Engine.
//!
//! This module loads leave policy configuration from YAML files: statute
//! metadata, the per-year entitlement rules and the schedule preview.
//!
//! # Example
//!
//! ```no_run
//! use annual_leave_engine::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config/kr_annual_leave").unwrap();
//! println!("Loaded policy: {}", config.policy().name);
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{
    AccrualConfigFile, AccrualRules, AnniversaryIncrement, LeavePolicyConfig,
    MAX_SCHEDULE_HORIZON, PolicyMetadata, ScheduleRules,
};
