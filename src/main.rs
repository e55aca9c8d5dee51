//! Transaction Analytics CLI
//!
//! Command-line interface for aggregating financial transaction
//! records from CSV or JSON files into report files.
//!
//! # Usage
//!
//! ```bash
//! cargo run -- input/input_data.csv
//! cargo run -- --format json exported.txt
//! cargo run -- --output-dir reports --file-prefix march input.csv
//! cargo run -- --filter-field balance --filter-threshold 100 input.csv
//! ```
//!
//! The program reads transaction records from the input file, folds
//! them through the aggregation engine, and writes the account
//! summaries, suspicious transactions and transaction statistics as
//! CSV files into the output directory.
//!
//! Log verbosity follows `RUST_LOG` (default `info`); suspicious
//! transactions are logged at `warn` as they are detected.
//!
//! # Exit Codes
//!
//! - 0: Success
//! - 1: Error (file not found, malformed records, write failure, etc.)

use std::process;
use transaction_analytics::cli;
use transaction_analytics::pipeline;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    // Parse command-line arguments using clap
    let args = cli::parse_args();
    let config = args.to_pipeline_config();

    if let Err(e) = pipeline::run(&config) {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}
