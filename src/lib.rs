//! Annual Leave Engine for the Korean Labor Standards Act
//!
//! This crate computes statutory annual-leave entitlements from a hire date
//! and an as-of or termination date, under both the hire-date anniversary
//! method and the fiscal-year method, and exports the results.

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod config;
pub mod error;
pub mod export;
pub mod models;
