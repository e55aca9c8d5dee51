//! Streaming CSV reader with iterator interface
//!
//! Provides a record-at-a-time iterator over transactions from a CSV
//! file, delegating format concerns to the `record_format` module.
//!
//! # Error Handling
//!
//! - Fatal open errors (file not found, I/O) are returned from `new()`
//! - Structural CSV errors carry their line number via the
//!   `ProcessingError::Parse` conversion
//! - Coercion failures are yielded as `MalformedRecord` items; the
//!   pipeline treats them as fatal
//!
//! # Memory Efficiency
//!
//! Records are read one at a time; memory usage is O(1) per record,
//! not O(file size).

use crate::io::record_format::{convert_csv_record, CsvRecord};
use crate::types::{ProcessingError, Record};
use csv::{ReaderBuilder, Trim};
use std::fs::File;
use std::io::ErrorKind;
use std::path::Path;

/// Streaming CSV transaction reader
#[derive(Debug)]
pub struct CsvReader {
    reader: csv::Reader<File>,
}

impl CsvReader {
    /// Open a CSV file for streaming iteration
    ///
    /// The reader trims whitespace from all fields and uses an 8KB
    /// buffer.
    ///
    /// # Errors
    ///
    /// Returns `FileNotFound` or `Io` if the file cannot be opened.
    pub fn new(path: &Path) -> Result<Self, ProcessingError> {
        let file = File::open(path).map_err(|e| {
            if e.kind() == ErrorKind::NotFound {
                ProcessingError::file_not_found(path.display().to_string())
            } else {
                ProcessingError::from(e)
            }
        })?;

        let reader = ReaderBuilder::new()
            .trim(Trim::All)
            .buffer_capacity(8 * 1024)
            .from_reader(file);

        Ok(Self { reader })
    }
}

impl Iterator for CsvReader {
    type Item = Result<Record, ProcessingError>;

    fn next(&mut self) -> Option<Self::Item> {
        let mut deserializer = self.reader.deserialize::<CsvRecord>();

        match deserializer.next()? {
            Ok(csv_record) => Some(convert_csv_record(csv_record)),
            Err(e) => Some(Err(e.into())),
        }
    }
}
