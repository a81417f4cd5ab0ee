//! Error types for the shift reconciliation engine.
//!
//! The calculation functions themselves are total and never fail. Errors only
//! arise at the boundaries: loading the shift policy configuration, validating
//! the attendance records handed to the engine, and parsing record filters.

use chrono::NaiveDate;
use thiserror::Error;

/// The main error type for the shift reconciliation engine.
///
/// # Example
///
/// ```
/// use shift_reconciler::error::EngineError;
///
/// let error = EngineError::ConfigNotFound {
///     path: "/missing/shifts.yaml".to_string(),
/// };
/// assert_eq!(error.to_string(), "Configuration file not found: /missing/shifts.yaml");
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

    /// A shift policy entry in the configuration was unusable.
    #[error("Invalid shift policy for '{shift_name}': {message}")]
    InvalidShiftPolicy {
        /// The shift name whose policy is invalid.
        shift_name: String,
        /// A description of what made the entry invalid.
        message: String,
    },

    /// An attendance record contained inconsistent data.
    #[error("Invalid attendance record for '{user_id}' on {work_date}: {message}")]
    InvalidRecord {
        /// The employee the record belongs to.
        user_id: String,
        /// The work date of the record.
        work_date: NaiveDate,
        /// A description of what made the record invalid.
        message: String,
    },

    /// Two attendance records share the same employee and work date.
    #[error("Duplicate attendance record for '{user_id}' on {work_date}")]
    DuplicateRecord {
        /// The employee with the duplicated record.
        user_id: String,
        /// The duplicated work date.
        work_date: NaiveDate,
    },

    /// A record filter could not be applied.
    #[error("Invalid record filter: {message}")]
    InvalidFilter {
        /// A description of the filter problem.
        message: String,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;
