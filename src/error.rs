//! Error types for the self-service derivation engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for every condition a derivation can reject.

use thiserror::Error;

/// The main error type for the derivation engine.
///
/// # Example
///
/// ```
/// use ess_engine::error::EngineError;
///
/// let error = EngineError::UnknownMonth { month: 13 };
/// assert_eq!(error.to_string(), "Unknown month number: 13");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EngineError {
    /// A date range was reversed or one of its ends could not be parsed.
    #[error("Invalid date range '{from}' to '{to}': {message}")]
    InvalidDateRange {
        /// The start of the range as supplied.
        from: String,
        /// The end of the range as supplied.
        to: String,
        /// Why the range was rejected.
        message: String,
    },

    /// A field the computation depends on was absent.
    #[error("Missing required field: {field}")]
    MissingRequiredField {
        /// The wire name of the missing field.
        field: String,
    },

    /// A check-out instant preceded its check-in.
    #[error("Invalid time range: check-out {check_out} is before check-in {check_in}")]
    InvalidTimeRange {
        /// The check-in instant (RFC 3339).
        check_in: String,
        /// The check-out instant (RFC 3339).
        check_out: String,
    },

    /// An attendance action is not permitted from the current state.
    #[error("Cannot {action} while {state}")]
    InvalidTransition {
        /// The state the day was in.
        state: &'static str,
        /// The action that was attempted.
        action: &'static str,
    },

    /// A month number outside 1-12.
    #[error("Unknown month number: {month}")]
    UnknownMonth {
        /// The offending month number.
        month: u32,
    },

    /// A record source could not provide the requested records.
    #[error("Failed to load {resource}: {message}")]
    SourceUnavailable {
        /// The kind of record that was requested (e.g. "attendance").
        resource: String,
        /// What the source reported.
        message: String,
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
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_date_range_displays_both_ends() {
        let error = EngineError::InvalidDateRange {
            from: "2024-03-10".to_string(),
            to: "2024-03-05".to_string(),
            message: "end date is before start date".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Invalid date range '2024-03-10' to '2024-03-05': end date is before start date"
        );
    }

    #[test]
    fn test_missing_required_field_displays_field() {
        let error = EngineError::MissingRequiredField {
            field: "checkIn".to_string(),
        };
        assert_eq!(error.to_string(), "Missing required field: checkIn");
    }

    #[test]
    fn test_invalid_transition_reads_as_sentence() {
        let error = EngineError::InvalidTransition {
            state: "checked out",
            action: "check in",
        };
        assert_eq!(error.to_string(), "Cannot check in while checked out");
    }

    #[test]
    fn test_config_not_found_displays_path() {
        let error = EngineError::ConfigNotFound {
            path: "/missing/display.yaml".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Configuration file not found: /missing/display.yaml"
        );
    }

    #[test]
    fn test_errors_implement_std_error() {
        fn assert_error<T: std::error::Error + Send + Sync>() {}
        assert_error::<EngineError>();
    }

    #[test]
    fn test_error_propagation_with_question_mark() {
        fn returns_unknown_month() -> EngineResult<()> {
            Err(EngineError::UnknownMonth { month: 0 })
        }

        fn propagates_error() -> EngineResult<()> {
            returns_unknown_month()?;
            Ok(())
        }

        assert_eq!(
            propagates_error(),
            Err(EngineError::UnknownMonth { month: 0 })
        );
    }
}
