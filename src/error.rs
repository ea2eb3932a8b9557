//! Error types for the Quote Pricing Engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for all error conditions that can occur while loading configuration or
//! validating a quote request. The pricing rules themselves never fail.

use thiserror::Error;

/// The main error type for the Quote Pricing Engine.
///
/// # Example
///
/// ```
/// use quote_engine::error::EngineError;
///
/// let error = EngineError::ConfigNotFound {
///     path: "/missing/pricing.yaml".to_string(),
/// };
/// assert_eq!(error.to_string(), "Configuration file not found: /missing/pricing.yaml");
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

    /// Configuration parsed but holds values the engine cannot price with.
    #[error("Invalid configuration value '{field}': {message}")]
    InvalidConfig {
        /// The offending configuration key.
        field: String,
        /// Why the value was rejected.
        message: String,
    },

    /// A quote request field was missing its contract.
    #[error("Invalid quote request field '{field}': {message}")]
    InvalidQuoteRequest {
        /// The field that was invalid.
        field: String,
        /// A description of what made the field invalid.
        message: String,
    },

    /// The travel dates were empty or out of order.
    #[error("Invalid travel dates: {message}")]
    InvalidTravelDates {
        /// A description of the problem.
        message: String,
    },

    /// The requested currency is not one the engine quotes in.
    #[error("Unsupported currency: {code}")]
    UnsupportedCurrency {
        /// The currency code that was requested.
        code: String,
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
            path: "/missing/engine.yaml".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Configuration file not found: /missing/engine.yaml"
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
            field: "early_bird.min_days_ahead".to_string(),
            message: "must not be below last_minute.within_days".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Invalid configuration value 'early_bird.min_days_ahead': must not be below last_minute.within_days"
        );
    }

    #[test]
    fn test_invalid_quote_request_displays_field_and_message() {
        let error = EngineError::InvalidQuoteRequest {
            field: "travellers".to_string(),
            message: "must be at least 1".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Invalid quote request field 'travellers': must be at least 1"
        );
    }

    #[test]
    fn test_invalid_travel_dates_displays_message() {
        let error = EngineError::InvalidTravelDates {
            message: "end date is before start date".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Invalid travel dates: end date is before start date"
        );
    }

    #[test]
    fn test_unsupported_currency_displays_code() {
        let error = EngineError::UnsupportedCurrency {
            code: "XYZ".to_string(),
        };
        assert_eq!(error.to_string(), "Unsupported currency: XYZ");
    }

    #[test]
    fn test_errors_implement_std_error() {
        fn assert_error<T: std::error::Error>() {}
        assert_error::<EngineError>();
    }

    #[test]
    fn test_error_propagation_with_question_mark() {
        fn returns_invalid_dates() -> EngineResult<()> {
            Err(EngineError::InvalidTravelDates {
                message: "no dates".to_string(),
            })
        }

        fn propagates_error() -> EngineResult<()> {
            returns_invalid_dates()?;
            Ok(())
        }

        assert!(propagates_error().is_err());
    }
}
