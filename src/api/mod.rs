//! HTTP API module for the Annual Leave Engine.
//!
//! This module provides the REST endpoints that take a hire date and an
//! optional end date and return, or export, the leave calculation.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::{CalculationRequest, MAX_SCHEDULE_HORIZON};
pub use response::{ApiError, ApiErrorResponse};
pub use state::AppState;
