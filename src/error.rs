//! Error types for the demand scoring and valuation engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for the conditions the validation and configuration layers can reject.
//! The scalar engines themselves never fail.

use thiserror::Error;

/// The main error type for the demand engine.
///
/// # Example
///
/// ```
/// use demand_engine::error::EngineError;
///
/// let error = EngineError::RatingOutOfRange {
///     field: "risk".to_string(),
///     value: 7,
/// };
/// assert_eq!(error.to_string(), "Rating 'risk' must be between 1 and 5, got 7");
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
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

    /// Configuration parsed but holds values the engine cannot use.
    #[error("Invalid configuration '{field}': {message}")]
    InvalidConfig {
        /// The offending configuration key.
        field: String,
        /// What is wrong with it.
        message: String,
    },

    /// A 1-5 rating was outside its scale.
    #[error("Rating '{field}' must be between 1 and 5, got {value}")]
    RatingOutOfRange {
        /// The rating name.
        field: String,
        /// The rejected value.
        value: i32,
    },

    /// A financial input failed validation.
    #[error("Invalid financial input '{field}': {message}")]
    InvalidFinancialInput {
        /// The field that was invalid.
        field: String,
        /// A description of what made the field invalid.
        message: String,
    },

    /// The assessor name was missing or too long.
    #[error("Invalid assessor: {message}")]
    InvalidAssessor {
        /// A description of the problem.
        message: String,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_not_found_displays_path() {
        let error = EngineError::ConfigNotFound {
            path: "/missing/scoring.yaml".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Configuration file not found: /missing/scoring.yaml"
        );
    }

    #[test]
    fn test_config_parse_error_displays_path_and_message() {
        let error = EngineError::ConfigParseError {
            path: "/config/bad.yaml".to_string(),
            message: "invalid YAML syntax".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Failed to parse configuration file '/config/bad.yaml': invalid YAML syntax"
        );
    }

    #[test]
    fn test_invalid_config_displays_field_and_message() {
        let error = EngineError::InvalidConfig {
            field: "weights".to_string(),
            message: "must sum to 1.0, got 0.95".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Invalid configuration 'weights': must sum to 1.0, got 0.95"
        );
    }

    #[test]
    fn test_rating_out_of_range_displays_field_and_value() {
        let error = EngineError::RatingOutOfRange {
            field: "business_value".to_string(),
            value: 0,
        };
        assert_eq!(
            error.to_string(),
            "Rating 'business_value' must be between 1 and 5, got 0"
        );
    }

    #[test]
    fn test_invalid_financial_input_displays_field_and_message() {
        let error = EngineError::InvalidFinancialInput {
            field: "project_years".to_string(),
            message: "must be between 0 and 50".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Invalid financial input 'project_years': must be between 0 and 50"
        );
    }

    #[test]
    fn test_invalid_assessor_displays_message() {
        let error = EngineError::InvalidAssessor {
            message: "name is required".to_string(),
        };
        assert_eq!(error.to_string(), "Invalid assessor: name is required");
    }

    #[test]
    fn test_errors_implement_std_error() {
        fn assert_error<T: std::error::Error>() {}
        assert_error::<EngineError>();
    }

    #[test]
    fn test_error_propagation_with_question_mark() {
        fn returns_rating_error() -> EngineResult<()> {
            Err(EngineError::RatingOutOfRange {
                field: "urgency".to_string(),
                value: 9,
            })
        }

        fn propagates_error() -> EngineResult<()> {
            returns_rating_error()?;
            Ok(())
        }

        assert!(propagates_error().is_err());
    }
}
