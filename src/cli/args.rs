use crate::core::SuspicionPolicy;
use crate::io::report::{FilterMode, SummaryField};
use crate::io::InputFormat;
use crate::pipeline::{FilterSpec, PipelineConfig};
use clap::Parser;
use rust_decimal::Decimal;
use std::path::PathBuf;

/// Aggregate transaction records into account, suspicion and
/// statistics reports
#[derive(Parser, Debug)]
#[command(name = "transaction-analytics")]
#[command(
    about = "Aggregate transaction records into account summaries, suspicious transactions and type statistics",
    long_about = None
)]
pub struct CliArgs {
    /// Input file containing transaction records
    #[arg(value_name = "INPUT", help = "Path to the input CSV or JSON file")]
    pub input_file: PathBuf,

    /// Input format override
    #[arg(
        long = "format",
        value_name = "FORMAT",
        help = "Input format; inferred from the file extension when omitted"
    )]
    pub format: Option<InputFormat>,

    /// Directory the report files are written to
    #[arg(
        long = "output-dir",
        value_name = "DIR",
        default_value = "output",
        help = "Directory the report files are written to (created if missing)"
    )]
    pub output_dir: PathBuf,

    /// Prefix for generated report file names
    #[arg(
        long = "file-prefix",
        value_name = "PREFIX",
        default_value = "output_data",
        help = "Prefix for generated report file names"
    )]
    pub file_prefix: String,

    /// Suspicious-amount threshold override
    #[arg(
        long = "large-threshold",
        value_name = "AMOUNT",
        help = "Amounts strictly greater than this are flagged as suspicious (default: 10000)"
    )]
    pub large_threshold: Option<Decimal>,

    /// Currency watch-list override (repeatable)
    #[arg(
        long = "uncommon-currency",
        value_name = "CODE",
        help = "Currency code flagged regardless of amount (default: XRP, LTC; repeatable)"
    )]
    pub uncommon_currencies: Vec<String>,

    /// Disable field-level validation
    #[arg(
        long = "skip-validation",
        help = "Pass records to the engine without field-level validation"
    )]
    pub skip_validation: bool,

    /// Field for the optional filtered-summaries report
    #[arg(
        long = "filter-field",
        value_name = "FIELD",
        requires = "filter_threshold",
        help = "Write an additional filtered account-summaries report on this field"
    )]
    pub filter_field: Option<SummaryField>,

    /// Threshold for the filtered-summaries report
    #[arg(
        long = "filter-threshold",
        value_name = "AMOUNT",
        requires = "filter_field",
        help = "Threshold for the filtered account-summaries report"
    )]
    pub filter_threshold: Option<Decimal>,

    /// Direction of the filtered-summaries comparison
    #[arg(
        long = "filter-mode",
        value_name = "MODE",
        default_value = "at-least",
        help = "Keep summaries at-least or at-most the filter threshold"
    )]
    pub filter_mode: FilterMode,
}

impl CliArgs {
    /// Build the suspicion policy from CLI overrides
    ///
    /// Omitted options fall back to the default threshold and
    /// currency watch-list.
    pub fn to_policy(&self) -> SuspicionPolicy {
        let default = SuspicionPolicy::default();

        SuspicionPolicy {
            large_transaction_threshold: self
                .large_threshold
                .unwrap_or(default.large_transaction_threshold),
            uncommon_currencies: if self.uncommon_currencies.is_empty() {
                default.uncommon_currencies
            } else {
                self.uncommon_currencies.iter().cloned().collect()
            },
        }
    }

    /// Build the full pipeline configuration from the parsed arguments
    pub fn to_pipeline_config(&self) -> PipelineConfig {
        let filter = match (self.filter_field, self.filter_threshold) {
            (Some(field), Some(threshold)) => Some(FilterSpec {
                field,
                threshold,
                mode: self.filter_mode,
            }),
            _ => None,
        };

        PipelineConfig {
            input: self.input_file.clone(),
            format: self.format,
            output_dir: self.output_dir.clone(),
            file_prefix: self.file_prefix.clone(),
            policy: self.to_policy(),
            validate: !self.skip_validation,
            filter,
        }
    }
}
