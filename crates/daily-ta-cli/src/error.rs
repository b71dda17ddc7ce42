//! CLI error types for file I/O, CSV parsing, and engine errors.
//!
//! [`CliError`] wraps everything that can go wrong between reading the input
//! CSV and writing the augmented one. Messages say what failed and where.

use std::io;

use thiserror::Error;

/// CLI error type encompassing all possible error conditions.
#[derive(Debug, Error)]
pub enum CliError {
    /// An I/O error occurred while reading or writing a file.
    #[error("I/O error with '{path}': {source}. Check that the path exists and is accessible")]
    IoError {
        /// The underlying I/O error.
        #[source]
        source: io::Error,
        /// Path that caused the error.
        path: String,
    },

    /// The CSV data could not be read or written.
    #[error(
        "CSV error{}: {message}",
        .line.map(|l| format!(" on line {l}")).unwrap_or_default()
    )]
    CsvError {
        /// Description of the parse error.
        message: String,
        /// Line number where the error occurred, if known.
        line: Option<u64>,
    },

    /// The engine rejected the configuration or failed while computing.
    #[error("indicator computation error: {0}")]
    IndicatorError(#[from] daily_ta::Error),

    /// An invalid argument was provided.
    #[error("invalid argument '{argument}': {reason}")]
    InvalidArgument {
        /// Name of the invalid argument.
        argument: String,
        /// Why it was rejected.
        reason: String,
    },
}

impl CliError {
    /// Attaches a path to an I/O error.
    pub fn io(source: io::Error, path: impl Into<String>) -> Self {
        CliError::IoError {
            source,
            path: path.into(),
        }
    }
}

impl From<csv::Error> for CliError {
    fn from(err: csv::Error) -> Self {
        let line = err.position().map(csv::Position::line);
        CliError::CsvError {
            message: err.to_string(),
            line,
        }
    }
}

/// Result type alias for CLI operations.
pub type Result<T> = std::result::Result<T, CliError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_io_error_message_names_path() {
        let err = CliError::io(
            io::Error::new(io::ErrorKind::NotFound, "file not found"),
            "/data/spx.csv",
        );
        let msg = err.to_string();
        assert!(msg.contains("/data/spx.csv"));
        assert!(msg.contains("file not found"));
    }

    #[test]
    fn test_csv_error_line() {
        let err = CliError::CsvError {
            message: "cannot parse 'abc' as number".to_string(),
            line: Some(4),
        };
        assert_eq!(
            err.to_string(),
            "CSV error on line 4: cannot parse 'abc' as number"
        );

        let err = CliError::CsvError {
            message: "no headers".to_string(),
            line: None,
        };
        assert_eq!(err.to_string(), "CSV error: no headers");
    }

    #[test]
    fn test_engine_error_conversion() {
        let err: CliError = daily_ta::Error::MissingColumn {
            column: "Close".to_string(),
        }
        .into();
        assert!(matches!(err, CliError::IndicatorError(_)));
        assert!(err.to_string().contains("Close"));
    }
}
