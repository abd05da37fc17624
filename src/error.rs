//! Error types for the Annual Leave Engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for all error conditions that can occur while computing and exporting
//! leave entitlements.

use chrono::NaiveDate;
use thiserror::Error;

/// The main error type for the Annual Leave Engine.
///
/// The accrual functions themselves never fail for valid calendar dates;
/// errors come from input validation, configuration loading and export.
///
/// # Example
///
/// ```
/// use annual_leave_engine::error::EngineError;
///
/// let error = EngineError::ConfigNotFound {
///     path: "/missing/accrual.yaml".to_string(),
/// };
/// assert_eq!(error.to_string(), "Configuration file not found: /missing/accrual.yaml");
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// The end date precedes the hire date.
    #[error("Invalid date range: end date {end_date} precedes hire date {hire_date}")]
    InvalidDateRange {
        /// The employee's hire date.
        hire_date: NaiveDate,
        /// The as-of or termination date.
        end_date: NaiveDate,
    },

    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// Configuration parsed but holds a value the engine cannot use.
    #[error("Invalid configuration value '{field}': {message}")]
    InvalidConfig {
        /// The offending field.
        field: String,
        /// What is wrong with it.
        message: String,
    },

    /// Rendering or writing an export failed.
    #[error("Export to '{target}' failed: {message}")]
    ExportError {
        /// The export target (file, directory or format).
        target: String,
        /// A description of the failure.
        message: String,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;
