//! Error types for transaction processing
//!
//! This module defines all error conditions that can occur while
//! reading, validating, aggregating, and reporting transaction data.
//!
//! # Error Categories
//!
//! - **File I/O errors**: file not found, permission denied, etc. Fatal.
//! - **Parse errors**: structurally unreadable CSV/JSON input. Fatal.
//! - **Malformed records**: a required field is missing or cannot be
//!   coerced (non-numeric amount, unparseable date). Fatal to the run:
//!   surfaced immediately, no partial results.
//! - **Invalid records**: a field-level validation reject (negative
//!   amount, unknown transaction type). Recoverable: the pipeline logs
//!   a warning and skips the record.
//! - **Query errors**: statistics lookup for a transaction type that
//!   was never seen. Surfaced to the caller, never retried.

use thiserror::Error;

/// Main error type for the transaction analytics pipeline
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ProcessingError {
    /// Input file not found at the specified path
    #[error("File not found: {path}")]
    FileNotFound {
        /// The path that was not found
        path: String,
    },

    /// I/O error occurred while reading input or writing reports
    #[error("I/O error: {message}")]
    Io {
        /// Description of the I/O error
        message: String,
    },

    /// Input could not be parsed as CSV or JSON
    #[error("Parse error{}: {message}", line.map(|l| format!(" at line {}", l)).unwrap_or_default())]
    Parse {
        /// Line number where the error occurred (if available)
        line: Option<u64>,
        /// Description of the parsing error
        message: String,
    },

    /// A required record field is missing or cannot be coerced
    ///
    /// Fatal: running totals would silently corrupt if a record were
    /// half-counted, so the run aborts without partial results.
    #[error("Malformed record '{tx}': {message}")]
    MalformedRecord {
        /// Transaction identifier of the offending record
        tx: String,
        /// What failed to coerce
        message: String,
    },

    /// A record failed field-level validation
    ///
    /// Recoverable: the record is logged and skipped before it reaches
    /// the aggregation engine.
    #[error("Invalid record '{tx}': {message}")]
    InvalidRecord {
        /// Transaction identifier of the offending record
        tx: String,
        /// Which validation rule rejected it
        message: String,
    },

    /// Statistics were queried for a transaction type never ingested
    #[error("No statistics recorded for transaction type '{kind}'")]
    StatisticsNotFound {
        /// The queried type string
        kind: String,
    },

    /// The input file extension maps to no supported reader
    #[error("Unsupported input format '{extension}' (expected csv or json)")]
    UnsupportedFormat {
        /// The unrecognized extension
        extension: String,
    },
}

impl From<std::io::Error> for ProcessingError {
    fn from(error: std::io::Error) -> Self {
        ProcessingError::Io {
            message: error.to_string(),
        }
    }
}

impl From<csv::Error> for ProcessingError {
    fn from(error: csv::Error) -> Self {
        let line = error.position().map(|pos| pos.line());

        ProcessingError::Parse {
            line,
            message: error.to_string(),
        }
    }
}

impl From<serde_json::Error> for ProcessingError {
    fn from(error: serde_json::Error) -> Self {
        ProcessingError::Parse {
            line: Some(error.line() as u64),
            message: error.to_string(),
        }
    }
}

// Helper functions for creating common errors

impl ProcessingError {
    /// Create a FileNotFound error
    pub fn file_not_found(path: impl Into<String>) -> Self {
        ProcessingError::FileNotFound { path: path.into() }
    }

    /// Create a MalformedRecord error
    pub fn malformed_record(tx: impl Into<String>, message: impl Into<String>) -> Self {
        ProcessingError::MalformedRecord {
            tx: tx.into(),
            message: message.into(),
        }
    }

    /// Create an InvalidRecord error
    pub fn invalid_record(tx: impl Into<String>, message: impl Into<String>) -> Self {
        ProcessingError::InvalidRecord {
            tx: tx.into(),
            message: message.into(),
        }
    }

    /// Create a StatisticsNotFound error
    pub fn statistics_not_found(kind: impl Into<String>) -> Self {
        ProcessingError::StatisticsNotFound { kind: kind.into() }
    }

    /// Create an UnsupportedFormat error
    pub fn unsupported_format(extension: impl Into<String>) -> Self {
        ProcessingError::UnsupportedFormat {
            extension: extension.into(),
        }
    }
}
