//! Demand scoring and valuation engine.
//!
//! This crate scores demand requests on a 0-100 priority scale from their
//! assessment ratings and values them by net present value, using decimal
//! arithmetic throughout.

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod config;
pub mod error;
pub mod models;
pub mod telemetry;
