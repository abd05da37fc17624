//! Application state for the Annual Leave Engine API.
//!
//! This module defines the shared application state that is available
//! to all request handlers.

use std::sync::Arc;

use chrono::{Local, NaiveDate};

use crate::config::ConfigLoader;

type TodayFn = dyn Fn() -> NaiveDate + Send + Sync;

/// Shared application state.
///
/// Holds the loaded policy configuration and the source of "today" used
/// when a request omits its end date.
#[derive(Clone)]
pub struct AppState {
    /// The loaded leave policy configuration.
    config: Arc<ConfigLoader>,
    today: Arc<TodayFn>,
}

impl AppState {
    /// Creates a new application state that resolves "today" from the local clock.
    pub fn new(config: ConfigLoader) -> Self {
        Self {
            config: Arc::new(config),
            today: Arc::new(|| Local::now().date_naive()),
        }
    }

    /// Creates a state whose "today" is always `today`.
    pub fn with_fixed_today(config: ConfigLoader, today: NaiveDate) -> Self {
        Self {
            config: Arc::new(config),
            today: Arc::new(move || today),
        }
    }

    /// Returns a reference to the configuration loader.
    pub fn config(&self) -> &ConfigLoader {
        &self.config
    }

    /// Returns today's date.
    pub fn today(&self) -> NaiveDate {
        (self.today)()
    }
}
