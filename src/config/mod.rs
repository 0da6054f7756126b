//! Configuration loading and management for the demand engine.
//!
//! This module provides functionality to load the scoring weights, valuation
//! limits and rounding convention from YAML files.
//!
//! # Example
//!
//! ```no_run
//! use demand_engine::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config/default").unwrap();
//! println!("Rounding: {:?}", config.rounding());
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{
    EngineConfig, RoundingConvention, ScoringConfig, ScoringWeights, ValuationConfig,
    ValuationLimits,
};
