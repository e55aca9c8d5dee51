//! Report output and filtering
//!
//! CSV serialization for the three derived stores plus the generic
//! numeric-field filter over account summaries. All functions write to
//! a `dyn Write` and are pure apart from that, for easy testing.
//!
//! Map-backed stores are sorted before writing so output is
//! deterministic; the suspicious-transaction report keeps ingestion
//! order, which is an observable guarantee.

use crate::types::{AccountSummary, ProcessingError, Record, TransactionKind, TypeStats};
use clap::ValueEnum;
use rust_decimal::Decimal;
use std::collections::HashMap;
use std::io::Write;

/// Numeric fields of an account summary that reports can filter on
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum SummaryField {
    Balance,
    TotalDeposits,
    TotalWithdrawals,
}

impl SummaryField {
    /// Read this field's value from a summary
    pub fn value_of(&self, summary: &AccountSummary) -> Decimal {
        match self {
            SummaryField::Balance => summary.balance,
            SummaryField::TotalDeposits => summary.total_deposits,
            SummaryField::TotalWithdrawals => summary.total_withdrawals,
        }
    }
}

/// Direction of a threshold filter
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum FilterMode {
    /// Keep summaries whose field is >= the threshold
    AtLeast,
    /// Keep summaries whose field is <= the threshold
    AtMost,
}

/// Select the summaries whose field passes the threshold
///
/// Order is preserved from the input slice; no copy of the summaries
/// is made.
pub fn filter_account_summaries<'a>(
    summaries: &[&'a AccountSummary],
    field: SummaryField,
    threshold: Decimal,
    mode: FilterMode,
) -> Vec<&'a AccountSummary> {
    summaries
        .iter()
        .copied()
        .filter(|summary| {
            let value = field.value_of(summary);
            match mode {
                FilterMode::AtLeast => value >= threshold,
                FilterMode::AtMost => value <= threshold,
            }
        })
        .collect()
}

/// Collect account summaries sorted by account number
///
/// Provides deterministic row order for report generation.
pub fn sorted_account_summaries(
    summaries: &HashMap<String, AccountSummary>,
) -> Vec<&AccountSummary> {
    let mut sorted: Vec<&AccountSummary> = summaries.values().collect();
    sorted.sort_by(|a, b| a.account_number.cmp(&b.account_number));
    sorted
}

/// Write account summaries as CSV
///
/// Header: `Account number,Balance,Total Deposits,Total Withdrawals`.
pub fn write_account_summaries_csv(
    summaries: &[&AccountSummary],
    output: &mut dyn Write,
) -> Result<(), ProcessingError> {
    let mut writer = csv::Writer::from_writer(output);

    writer
        .write_record([
            "Account number",
            "Balance",
            "Total Deposits",
            "Total Withdrawals",
        ])
        .map_err(write_error)?;

    for summary in summaries {
        writer
            .write_record(&[
                summary.account_number.clone(),
                summary.balance.to_string(),
                summary.total_deposits.to_string(),
                summary.total_withdrawals.to_string(),
            ])
            .map_err(write_error)?;
    }

    writer.flush().map_err(ProcessingError::from)
}

/// Write suspicious transactions as CSV, in ingestion order
pub fn write_suspicious_transactions_csv(
    records: &[Record],
    output: &mut dyn Write,
) -> Result<(), ProcessingError> {
    let mut writer = csv::Writer::from_writer(output);

    writer
        .write_record([
            "Transaction ID",
            "Account number",
            "Date",
            "Transaction type",
            "Amount",
            "Currency",
            "Description",
        ])
        .map_err(write_error)?;

    for record in records {
        writer
            .write_record(&[
                record.transaction_id.clone(),
                record.account_number.clone(),
                record.date.format("%Y-%m-%d").to_string(),
                record.kind.to_string(),
                record.amount.to_string(),
                record.currency.clone(),
                record.description.clone(),
            ])
            .map_err(write_error)?;
    }

    writer.flush().map_err(ProcessingError::from)
}

/// Write per-type statistics as CSV, sorted by type string
///
/// The average column repeats the engine's zero-count guard and is
/// rounded to 2 decimal places.
pub fn write_transaction_statistics_csv(
    statistics: &HashMap<TransactionKind, TypeStats>,
    output: &mut dyn Write,
) -> Result<(), ProcessingError> {
    let mut writer = csv::Writer::from_writer(output);

    writer
        .write_record([
            "Transaction type",
            "Total Amount",
            "Transaction Count",
            "Average Amount",
        ])
        .map_err(write_error)?;

    let mut sorted: Vec<(&TransactionKind, &TypeStats)> = statistics.iter().collect();
    sorted.sort_by(|a, b| a.0.as_str().cmp(b.0.as_str()));

    for (kind, stats) in sorted {
        let average = if stats.transaction_count == 0 {
            Decimal::ZERO
        } else {
            (stats.total_amount / Decimal::from(stats.transaction_count)).round_dp(2)
        };

        writer
            .write_record(&[
                kind.to_string(),
                stats.total_amount.to_string(),
                stats.transaction_count.to_string(),
                average.to_string(),
            ])
            .map_err(write_error)?;
    }

    writer.flush().map_err(ProcessingError::from)
}

fn write_error(error: csv::Error) -> ProcessingError {
    ProcessingError::Io {
        message: format!("Failed to write report: {}", error),
    }
}
