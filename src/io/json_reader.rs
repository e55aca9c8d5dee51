//! JSON input reading
//!
//! Reads a JSON array of transaction objects using the same field
//! names as the CSV header. Identifier and amount fields tolerate
//! both string and number encodings, which real exports mix freely;
//! everything is normalized to the typed [`Record`] during coercion.

use crate::io::record_format::{parse_amount, parse_date};
use crate::types::{ProcessingError, Record, TransactionKind};
use serde::Deserialize;
use std::fs::File;
use std::io::{BufReader, ErrorKind};
use std::path::Path;

/// A field that may arrive as a JSON string or number
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
enum FieldValue {
    Text(String),
    Number(serde_json::Number),
}

impl FieldValue {
    /// Normalize to the textual form shared with the CSV path
    fn into_text(self) -> String {
        match self {
            FieldValue::Text(s) => s,
            FieldValue::Number(n) => n.to_string(),
        }
    }
}

/// JSON record structure for deserialization
#[derive(Debug, Deserialize)]
struct JsonRecord {
    #[serde(rename = "Transaction ID")]
    transaction_id: FieldValue,
    #[serde(rename = "Account number")]
    account_number: FieldValue,
    #[serde(rename = "Date")]
    date: String,
    #[serde(rename = "Transaction type")]
    transaction_type: String,
    #[serde(rename = "Amount")]
    amount: FieldValue,
    #[serde(rename = "Currency")]
    currency: String,
    #[serde(rename = "Description", default)]
    description: Option<String>,
}

/// Read all records from a JSON file
///
/// The whole array is deserialized up front; JSON has no streaming
/// row boundary to exploit the way CSV does.
///
/// # Errors
///
/// Returns `FileNotFound`/`Io` for open failures, `Parse` for
/// structurally invalid JSON (including missing required keys), and
/// `MalformedRecord` for uncoercible field values.
pub fn read_json_records(path: &Path) -> Result<Vec<Record>, ProcessingError> {
    let file = File::open(path).map_err(|e| {
        if e.kind() == ErrorKind::NotFound {
            ProcessingError::file_not_found(path.display().to_string())
        } else {
            ProcessingError::from(e)
        }
    })?;

    let raw: Vec<JsonRecord> = serde_json::from_reader(BufReader::new(file))?;

    raw.into_iter().map(convert_json_record).collect()
}

fn convert_json_record(raw: JsonRecord) -> Result<Record, ProcessingError> {
    let tx = raw.transaction_id.into_text();
    let account_number = raw.account_number.into_text();

    if account_number.is_empty() {
        return Err(ProcessingError::malformed_record(
            tx,
            "missing account number",
        ));
    }

    let amount = parse_amount(&raw.amount.into_text(), &tx)?;
    let date = parse_date(&raw.date, &tx)?;
    let kind = TransactionKind::parse(&raw.transaction_type);

    Ok(Record {
        transaction_id: tx,
        account_number,
        date,
        kind,
        amount,
        currency: raw.currency,
        description: raw.description.unwrap_or_default(),
    })
}
