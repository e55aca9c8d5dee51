//! I/O module
//!
//! Handles input reading and report output.
//!
//! # Components
//!
//! - `record_format` - record coercion and field-level validation
//! - `csv_reader` - streaming CSV reader with iterator interface
//! - `json_reader` - JSON array reader with string-or-number fields
//! - `report` - report writers and the account-summary filter

pub mod csv_reader;
pub mod json_reader;
pub mod record_format;
pub mod report;

pub use csv_reader::CsvReader;
pub use json_reader::read_json_records;
pub use record_format::{convert_csv_record, validate_record, CsvRecord};
pub use report::{
    filter_account_summaries, sorted_account_summaries, write_account_summaries_csv,
    write_suspicious_transactions_csv, write_transaction_statistics_csv, FilterMode, SummaryField,
};

use crate::types::{ProcessingError, Record};
use clap::ValueEnum;
use std::path::Path;

/// Supported input file formats
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum InputFormat {
    Csv,
    Json,
}

impl InputFormat {
    /// Infer the format from a file extension
    ///
    /// # Errors
    ///
    /// Returns `UnsupportedFormat` for anything other than `.csv` or
    /// `.json`; an unreadable extension must not silently produce an
    /// empty report.
    pub fn from_path(path: &Path) -> Result<Self, ProcessingError> {
        let extension = path
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or_default();

        match extension.to_ascii_lowercase().as_str() {
            "csv" => Ok(InputFormat::Csv),
            "json" => Ok(InputFormat::Json),
            other => Err(ProcessingError::unsupported_format(other)),
        }
    }
}

/// Read the full record sequence from an input file
///
/// Dispatches to the reader for the given format. Any malformed or
/// structurally unreadable record aborts the read; no partial
/// sequences are returned.
pub fn read_input_data(path: &Path, format: InputFormat) -> Result<Vec<Record>, ProcessingError> {
    match format {
        InputFormat::Csv => CsvReader::new(path)?.collect(),
        InputFormat::Json => read_json_records(path),
    }
}
