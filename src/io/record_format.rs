//! Record coercion and validation
//!
//! This module centralizes the boundary between stringly-typed input
//! and the typed [`Record`]:
//! - the CSV record shape for deserialization
//! - coercion from raw field text to domain types
//! - field-level validation rules
//!
//! All functions are pure (no I/O) for easy testing. Coercion failures
//! are [`ProcessingError::MalformedRecord`] and abort the run;
//! validation failures are [`ProcessingError::InvalidRecord`] and are
//! skipped by the pipeline.

use crate::types::{ProcessingError, Record, TransactionKind};
use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Deserialize;
use std::str::FromStr;

/// Date format used by the input files
const DATE_FORMAT: &str = "%Y-%m-%d";

/// CSV record structure for deserialization
///
/// Matches the input CSV header: `Transaction ID,Account number,Date,
/// Transaction type,Amount,Currency,Description`. All fields arrive as
/// text; coercion happens in [`convert_csv_record`].
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct CsvRecord {
    #[serde(rename = "Transaction ID")]
    pub transaction_id: String,
    #[serde(rename = "Account number")]
    pub account_number: String,
    #[serde(rename = "Date")]
    pub date: String,
    #[serde(rename = "Transaction type")]
    pub transaction_type: String,
    #[serde(rename = "Amount")]
    pub amount: String,
    #[serde(rename = "Currency")]
    pub currency: String,
    #[serde(rename = "Description")]
    pub description: Option<String>,
}

/// Convert a CsvRecord to a typed Record
///
/// Coerces the amount to a decimal and the date to a calendar date,
/// and parses the transaction type (unknown strings are preserved as
/// [`TransactionKind::Other`], not rejected here).
///
/// # Errors
///
/// Returns `MalformedRecord` if the account number is empty or the
/// amount/date cannot be coerced.
pub fn convert_csv_record(csv_record: CsvRecord) -> Result<Record, ProcessingError> {
    let tx = csv_record.transaction_id;

    if csv_record.account_number.is_empty() {
        return Err(ProcessingError::malformed_record(
            tx,
            "missing account number",
        ));
    }

    let amount = parse_amount(&csv_record.amount, &tx)?;
    let date = parse_date(&csv_record.date, &tx)?;

    // Unknown type strings become Other, not a reject
    let kind = TransactionKind::parse(&csv_record.transaction_type);

    Ok(Record {
        transaction_id: tx,
        account_number: csv_record.account_number,
        date,
        kind,
        amount,
        currency: csv_record.currency,
        description: csv_record.description.unwrap_or_default(),
    })
}

/// Coerce an amount field to a decimal
///
/// Accepts surrounding whitespace. An empty or non-numeric value is a
/// malformed record, not a validation reject. The upstream file is
/// structurally broken and running totals must not be half-counted.
pub fn parse_amount(text: &str, tx: &str) -> Result<Decimal, ProcessingError> {
    let trimmed = text.trim();

    if trimmed.is_empty() {
        return Err(ProcessingError::malformed_record(tx, "missing amount"));
    }

    Decimal::from_str(trimmed).map_err(|_| {
        ProcessingError::malformed_record(tx, format!("non-numeric amount '{}'", text))
    })
}

/// Coerce a date field (`%Y-%m-%d`)
pub fn parse_date(text: &str, tx: &str) -> Result<NaiveDate, ProcessingError> {
    NaiveDate::parse_from_str(text.trim(), DATE_FORMAT)
        .map_err(|_| ProcessingError::malformed_record(tx, format!("invalid date '{}'", text)))
}

/// Field-level validation applied before records reach the engine
///
/// Rejects negative amounts and transaction types outside the
/// validated vocabulary (deposit, withdrawal, transfer). Rejected
/// records are recoverable: the pipeline logs and skips them.
pub fn validate_record(record: &Record) -> Result<(), ProcessingError> {
    if record.amount < Decimal::ZERO {
        return Err(ProcessingError::invalid_record(
            &record.transaction_id,
            format!("negative amount {}", record.amount),
        ));
    }

    if !record.kind.is_known() {
        return Err(ProcessingError::invalid_record(
            &record.transaction_id,
            format!("unknown transaction type '{}'", record.kind),
        ));
    }

    Ok(())
}
