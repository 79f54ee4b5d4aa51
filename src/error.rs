//! Error types for the Compensation Calculation Engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for all error conditions that can occur during payroll computation.

use thiserror::Error;

/// The main error type for the Compensation Calculation Engine.
///
/// All operations in the engine return this error type, making it easy
/// to handle errors consistently throughout the application. Nothing in
/// the engine is retried; errors propagate to the orchestrating layer
/// verbatim so the caller can decide whether to block a payroll run or
/// flag one employee for manual review.
///
/// # Example
///
/// ```
/// use payroll_engine::error::EngineError;
///
/// let error = EngineError::ConfigNotFound {
///     path: "/missing/policy.yaml".to_string(),
/// };
/// assert_eq!(error.to_string(), "Configuration file not found: /missing/policy.yaml");
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

    /// A (year, month) pair was outside the representable calendar range.
    #[error("Invalid calculation period: year {year}, month {month}")]
    InvalidPeriod {
        /// The rejected year.
        year: i32,
        /// The rejected month (expected 1-12).
        month: u32,
    },

    /// An input value was malformed or out of range.
    #[error("Invalid value for '{field}': {message}")]
    ValidationError {
        /// The field that was invalid.
        field: String,
        /// A description of what made the value invalid.
        message: String,
    },

    /// The fine policy configuration is inconsistent with its method.
    #[error("Invalid fine policy: {message}")]
    InvalidFinePolicy {
        /// A description of the inconsistency.
        message: String,
    },

    /// The salary structure has no components to prorate.
    #[error("Salary structure has no components")]
    NoSalaryStructure,

    /// No attendance records were supplied for the target month.
    #[error("No attendance data for year {year}, month {month}")]
    NoAttendanceData {
        /// The year of the requested payroll run.
        year: i32,
        /// The month of the requested payroll run.
        month: u32,
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
            path: "/missing/policy.yaml".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Configuration file not found: /missing/policy.yaml"
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
    fn test_invalid_period_displays_year_and_month() {
        let error = EngineError::InvalidPeriod {
            year: 2025,
            month: 13,
        };
        assert_eq!(
            error.to_string(),
            "Invalid calculation period: year 2025, month 13"
        );
    }

    #[test]
    fn test_validation_error_displays_field_and_message() {
        let error = EngineError::ValidationError {
            field: "principal".to_string(),
            message: "must be greater than zero".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Invalid value for 'principal': must be greater than zero"
        );
    }

    #[test]
    fn test_invalid_fine_policy_displays_message() {
        let error = EngineError::InvalidFinePolicy {
            message: "shift_hours is required for shift-based fines".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Invalid fine policy: shift_hours is required for shift-based fines"
        );
    }

    #[test]
    fn test_no_salary_structure_display() {
        let error = EngineError::NoSalaryStructure;
        assert_eq!(error.to_string(), "Salary structure has no components");
    }

    #[test]
    fn test_no_attendance_data_displays_period() {
        let error = EngineError::NoAttendanceData {
            year: 2025,
            month: 1,
        };
        assert_eq!(error.to_string(), "No attendance data for year 2025, month 1");
    }

    #[test]
    fn test_errors_implement_std_error() {
        fn assert_error<T: std::error::Error>() {}
        assert_error::<EngineError>();
    }

    #[test]
    fn test_error_propagation_with_question_mark() {
        fn returns_no_salary_structure() -> EngineResult<()> {
            Err(EngineError::NoSalaryStructure)
        }

        fn propagates_error() -> EngineResult<()> {
            returns_no_salary_structure()?;
            Ok(())
        }

        assert!(propagates_error().is_err());
    }
}
