//! End-to-end processing pipeline
//!
//! Orchestrates one complete run: read records from the input file,
//! validate them (unless disabled), fold them through the aggregation
//! engine, and write the report files. The pipeline owns no business
//! rules of its own; it wires the reader, validator, engine, and
//! report writers together.
//!
//! # Error Handling
//!
//! Fatal errors (unreadable input, malformed records, write failures)
//! are returned immediately and no report files are left half-written
//! for the failing store. Validation rejects are logged at `warn` and
//! skipped, and processing continues with the next record.

use crate::core::{AggregationEngine, SuspicionPolicy};
use crate::io::record_format::validate_record;
use crate::io::report::{
    filter_account_summaries, sorted_account_summaries, write_account_summaries_csv,
    write_suspicious_transactions_csv, write_transaction_statistics_csv, FilterMode, SummaryField,
};
use crate::io::{read_input_data, InputFormat};
use crate::types::ProcessingError;
use rust_decimal::Decimal;
use std::fs::{self, File};
use std::path::PathBuf;

/// An optional filtered-summaries report requested on the CLI
#[derive(Clone, Copy, Debug)]
pub struct FilterSpec {
    /// Summary field the threshold applies to
    pub field: SummaryField,
    /// Threshold value
    pub threshold: Decimal,
    /// Keep values at least (or at most) the threshold
    pub mode: FilterMode,
}

/// Configuration for one pipeline run
#[derive(Debug)]
pub struct PipelineConfig {
    /// Input file containing transaction records
    pub input: PathBuf,
    /// Input format; inferred from the extension when `None`
    pub format: Option<InputFormat>,
    /// Directory the report files are written to (created if missing)
    pub output_dir: PathBuf,
    /// Prefix for generated report file names
    pub file_prefix: String,
    /// Suspicion classification policy for this run
    pub policy: SuspicionPolicy,
    /// Whether to apply field-level validation before aggregation
    pub validate: bool,
    /// Optional filtered account-summaries report
    pub filter: Option<FilterSpec>,
}

/// Run the full pipeline once
///
/// Writes `{prefix}_account_summaries.csv`,
/// `{prefix}_suspicious_transactions.csv` and
/// `{prefix}_transaction_statistics.csv` into the output directory,
/// plus `{prefix}_filtered_account_summaries.csv` when a filter is
/// configured.
pub fn run(config: &PipelineConfig) -> Result<(), ProcessingError> {
    let format = match config.format {
        Some(format) => format,
        None => InputFormat::from_path(&config.input)?,
    };

    let records = read_input_data(&config.input, format)?;
    let total = records.len();

    let records = if config.validate {
        let mut kept = Vec::with_capacity(records.len());
        for record in records {
            match validate_record(&record) {
                Ok(()) => kept.push(record),
                Err(e) => log::warn!("Skipping record: {}", e),
            }
        }
        kept
    } else {
        records
    };

    log::info!(
        "Processing {} of {} records from {}",
        records.len(),
        total,
        config.input.display()
    );

    let mut engine = AggregationEngine::new(records, config.policy.clone());
    let report = engine.process_data();

    fs::create_dir_all(&config.output_dir)?;

    let sorted = sorted_account_summaries(report.account_summaries);

    let mut output = File::create(report_path(config, "account_summaries"))?;
    write_account_summaries_csv(&sorted, &mut output)?;

    let mut output = File::create(report_path(config, "suspicious_transactions"))?;
    write_suspicious_transactions_csv(report.suspicious_transactions, &mut output)?;

    let mut output = File::create(report_path(config, "transaction_statistics"))?;
    write_transaction_statistics_csv(report.transaction_statistics, &mut output)?;

    if let Some(filter) = &config.filter {
        let filtered =
            filter_account_summaries(&sorted, filter.field, filter.threshold, filter.mode);

        let mut output = File::create(report_path(config, "filtered_account_summaries"))?;
        write_account_summaries_csv(&filtered, &mut output)?;
    }

    log::info!(
        "Wrote reports for {} accounts, {} suspicious transactions, {} transaction types",
        report.account_summaries.len(),
        report.suspicious_transactions.len(),
        report.transaction_statistics.len()
    );

    Ok(())
}

/// Build `{output_dir}/{prefix}_{report_name}.csv`
fn report_path(config: &PipelineConfig, report_name: &str) -> PathBuf {
    config
        .output_dir
        .join(format!("{}_{}.csv", config.file_prefix, report_name))
}

/// Convenience constructor used by tests and simple callers
impl PipelineConfig {
    /// Defaults: inferred format, `output/` directory, `output_data`
    /// prefix, default policy, validation on, no filter
    pub fn new(input: impl Into<PathBuf>) -> Self {
        PipelineConfig {
            input: input.into(),
            format: None,
            output_dir: PathBuf::from("output"),
            file_prefix: "output_data".to_string(),
            policy: SuspicionPolicy::default(),
            validate: true,
            filter: None,
        }
    }
}
