//! Error types for the Payroll and Quotation Engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for all error conditions that can occur during calculation and
//! configuration loading.

use thiserror::Error;

/// The main error type for the engine.
///
/// All operations in the engine return this error type, making it easy
/// to handle errors consistently throughout the application.
///
/// # Example
///
/// ```
/// use cadastral_engine::error::EngineError;
///
/// let error = EngineError::ConfigNotFound {
///     path: "/missing/file.yaml".to_string(),
/// };
/// assert_eq!(error.to_string(), "Configuration file not found: /missing/file.yaml");
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

    /// Two ranges in a rule table overlap.
    #[error("Rule table '{table}' has overlapping ranges '{first}' and '{second}'")]
    OverlappingRules {
        /// The name of the rule table.
        table: String,
        /// The id of the first overlapping range.
        first: String,
        /// The id of the second overlapping range.
        second: String,
    },

    /// A calendar month string could not be interpreted.
    #[error("Invalid month '{month}': expected YYYY-MM")]
    InvalidMonth {
        /// The month string that failed to parse.
        month: String,
    },

    /// A day-of-month was outside the month being edited.
    #[error("Day {day} is outside month {month} (1..={days_in_month})")]
    DayOutOfRange {
        /// The rejected day number.
        day: u32,
        /// The month being edited, as YYYY-MM.
        month: String,
        /// The number of days in that month.
        days_in_month: u32,
    },

    /// An attendance work multiplier was outside the supported 1..=3 range.
    #[error("Invalid work multiplier {multiplier}: must be 1, 2 or 3")]
    InvalidMultiplier {
        /// The rejected multiplier.
        multiplier: u32,
    },

    /// Payroll for a month was already finalized.
    #[error("Payroll for month {month} has already been finalized")]
    PayrollAlreadyFinalized {
        /// The month, as YYYY-MM.
        month: String,
    },

    /// No item template exists for the requested quote kind.
    #[error("No quote item template configured for kind '{kind}'")]
    TemplateNotFound {
        /// The requested quote kind.
        kind: String,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;
