//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading engine
//! configurations from YAML files.

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::error::{EngineError, EngineResult};

use super::types::{
    EngineConfig, RoundingConvention, ScoringConfig, ScoringWeights, ValuationConfig,
    ValuationLimits,
};

/// Loads and provides access to engine configuration.
///
/// # Directory Structure
///
/// ```text
/// config/default/
/// ├── scoring.yaml    # Weighted score weights
/// └── valuation.yaml  # Rounding convention and input limits
/// ```
///
/// # Example
///
/// ```no_run
/// use demand_engine::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/default").unwrap();
/// println!("Business value weight: {}", loader.weights().business_value);
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    config: EngineConfig,
}

impl ConfigLoader {
    /// Loads configuration from the specified directory.
    ///
    /// # Returns
    ///
    /// Returns a `ConfigLoader` instance on success, or an error if:
    /// - Any required file is missing (`ConfigNotFound`)
    /// - Any file contains invalid YAML (`ConfigParseError`)
    /// - The weights or limits are unusable (`InvalidConfig`)
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();

        let scoring = Self::load_yaml::<ScoringConfig>(&path.join("scoring.yaml"))?;
        let valuation = Self::load_yaml::<ValuationConfig>(&path.join("valuation.yaml"))?;

        let config = EngineConfig::new(scoring.weights, valuation.limits, valuation.rounding)?;
        debug!(
            path = %path.display(),
            rounding = ?config.rounding(),
            max_project_years = config.limits().max_project_years,
            "Loaded engine configuration"
        );

        Ok(Self { config })
    }

    /// Wraps an already-built configuration.
    pub fn from_config(config: EngineConfig) -> Self {
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

    /// Returns the underlying engine configuration.
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Returns the scoring weights.
    pub fn weights(&self) -> &ScoringWeights {
        self.config.weights()
    }

    /// Returns the valuation limits.
    pub fn limits(&self) -> &ValuationLimits {
        self.config.limits()
    }

    /// Returns the rounding convention.
    pub fn rounding(&self) -> RoundingConvention {
        self.config.rounding()
    }
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self::from_config(EngineConfig::default())
    }
}
