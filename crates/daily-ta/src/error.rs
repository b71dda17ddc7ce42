//! Error types for daily-ta.
//!
//! Warm-up gating is never an error: rows before an indicator's first defined
//! position are simply absent. Errors are reserved for malformed input and for
//! the one unguarded division in the engine (stochastic %K).

use thiserror::Error;

/// The main error type for daily-ta operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// The period parameter is invalid.
    ///
    /// Zero is always invalid. Indicators that take a sample standard
    /// deviation, or that read the oldest row of a prior window, need at
    /// least 2.
    #[error("invalid period {period}: {reason}")]
    InvalidPeriod {
        /// The invalid period value that was provided.
        period: usize,
        /// Description of why the period is invalid.
        reason: &'static str,
    },

    /// Parallel input series have different lengths.
    #[error("length mismatch: {description}")]
    LengthMismatch {
        /// Which series disagree and by how much.
        description: String,
    },

    /// A required input column is not present on the frame.
    #[error("missing column '{column}'")]
    MissingColumn {
        /// Name of the absent column.
        column: String,
    },

    /// A required input cell is absent.
    #[error("missing value in column '{column}' at row {index}")]
    MissingValue {
        /// Name of the column holding the gap.
        column: String,
        /// Row position of the gap.
        index: usize,
    },

    /// The computation hit a zero denominator that has no pseudo-zero guard.
    ///
    /// Raised by stochastic %K when the trailing high and low coincide.
    #[error("indeterminate value in {indicator} at row {index}: zero high-low range")]
    IndeterminateValue {
        /// Indicator that produced the division.
        indicator: &'static str,
        /// Row position where the window range collapsed.
        index: usize,
    },

    /// Failed to convert a numeric value to the target type.
    #[error("numeric conversion failed: {context}")]
    NumericConversion {
        /// Description of the conversion that failed.
        context: &'static str,
    },

    /// The engine configuration could not be read.
    #[error("invalid configuration: {message}")]
    Config {
        /// Parser or I/O message.
        message: String,
    },
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Self::Config {
            message: err.to_string(),
        }
    }
}

/// Convenience type alias for Results using the daily-ta Error type.
pub type Result<T> = std::result::Result<T, Error>;
