//! End-to-end integration tests
//!
//! These tests validate the complete pipeline: an input file is
//! written to a temporary directory, processed through the aggregation
//! engine, and the generated report files are compared byte-for-byte
//! with the expected CSV output.
//!
//! The CSV and JSON variants carry the same transactions, so both
//! formats must produce identical reports.

use rust_decimal::Decimal;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::TempDir;
use transaction_analytics::io::report::{FilterMode, SummaryField};
use transaction_analytics::pipeline::{self, FilterSpec, PipelineConfig};
use transaction_analytics::SuspicionPolicy;

/// Fourteen transactions over two accounts: mixed kinds, one EUR
/// deposit, two over-threshold amounts and two uncommon-currency
/// records. Account 1002 ends with a negative balance.
const INPUT_CSV: &str = "\
Transaction ID,Account number,Date,Transaction type,Amount,Currency,Description
1,1001,2023-03-01,deposit,1000,CAD,Salary
2,1002,2023-03-01,deposit,1500,CAD,Salary
3,1001,2023-03-02,withdrawal,200,CAD,Groceries
4,1001,2023-03-03,transfer,500,CAD,Transfer to Savings
5,1002,2023-03-03,withdrawal,300,CAD,Shopping
6,1002,2023-03-05,deposit,100,EUR,Gift
7,1001,2023-03-07,withdrawal,100,CAD,Bills
8,1002,2023-03-10,deposit,200,CAD,Refund
9,1001,2023-03-12,withdrawal,150,CAD,Entertainment
10,1002,2023-03-12,transfer,250,CAD,Transfer to Savings
11,1001,2023-03-13,deposit,12000,CAD,Car Sale
12,1002,2023-03-14,withdrawal,11000,CAD,House Down Payment
13,1001,2023-03-14,deposit,250,XRP,Crypto Investment
14,1002,2023-03-14,deposit,450,LTC,Crypto Investment
";

/// The same fourteen transactions as a JSON export with numeric IDs
/// and amounts
const INPUT_JSON: &str = r#"[
  {"Transaction ID": 1, "Account number": 1001, "Date": "2023-03-01", "Transaction type": "deposit", "Amount": 1000, "Currency": "CAD", "Description": "Salary"},
  {"Transaction ID": 2, "Account number": 1002, "Date": "2023-03-01", "Transaction type": "deposit", "Amount": 1500, "Currency": "CAD", "Description": "Salary"},
  {"Transaction ID": 3, "Account number": 1001, "Date": "2023-03-02", "Transaction type": "withdrawal", "Amount": 200, "Currency": "CAD", "Description": "Groceries"},
  {"Transaction ID": 4, "Account number": 1001, "Date": "2023-03-03", "Transaction type": "transfer", "Amount": 500, "Currency": "CAD", "Description": "Transfer to Savings"},
  {"Transaction ID": 5, "Account number": 1002, "Date": "2023-03-03", "Transaction type": "withdrawal", "Amount": 300, "Currency": "CAD", "Description": "Shopping"},
  {"Transaction ID": 6, "Account number": 1002, "Date": "2023-03-05", "Transaction type": "deposit", "Amount": 100, "Currency": "EUR", "Description": "Gift"},
  {"Transaction ID": 7, "Account number": 1001, "Date": "2023-03-07", "Transaction type": "withdrawal", "Amount": 100, "Currency": "CAD", "Description": "Bills"},
  {"Transaction ID": 8, "Account number": 1002, "Date": "2023-03-10", "Transaction type": "deposit", "Amount": 200, "Currency": "CAD", "Description": "Refund"},
  {"Transaction ID": 9, "Account number": 1001, "Date": "2023-03-12", "Transaction type": "withdrawal", "Amount": 150, "Currency": "CAD", "Description": "Entertainment"},
  {"Transaction ID": 10, "Account number": 1002, "Date": "2023-03-12", "Transaction type": "transfer", "Amount": 250, "Currency": "CAD", "Description": "Transfer to Savings"},
  {"Transaction ID": 11, "Account number": 1001, "Date": "2023-03-13", "Transaction type": "deposit", "Amount": 12000, "Currency": "CAD", "Description": "Car Sale"},
  {"Transaction ID": 12, "Account number": 1002, "Date": "2023-03-14", "Transaction type": "withdrawal", "Amount": 11000, "Currency": "CAD", "Description": "House Down Payment"},
  {"Transaction ID": "13", "Account number": "1001", "Date": "2023-03-14", "Transaction type": "deposit", "Amount": "250", "Currency": "XRP", "Description": "Crypto Investment"},
  {"Transaction ID": "14", "Account number": "1002", "Date": "2023-03-14", "Transaction type": "deposit", "Amount": "450", "Currency": "LTC", "Description": "Crypto Investment"}
]"#;

const EXPECTED_SUMMARIES: &str = "\
Account number,Balance,Total Deposits,Total Withdrawals
1001,12800,13250,450
1002,-9050,2250,11300
";

const EXPECTED_SUSPICIOUS: &str = "\
Transaction ID,Account number,Date,Transaction type,Amount,Currency,Description
11,1001,2023-03-13,deposit,12000,CAD,Car Sale
12,1002,2023-03-14,withdrawal,11000,CAD,House Down Payment
13,1001,2023-03-14,deposit,250,XRP,Crypto Investment
14,1002,2023-03-14,deposit,450,LTC,Crypto Investment
";

const EXPECTED_STATISTICS: &str = "\
Transaction type,Total Amount,Transaction Count,Average Amount
deposit,15500,7,2214.29
transfer,750,2,375
withdrawal,11750,5,2350
";

fn write_input(dir: &Path, name: &str, content: &str) -> PathBuf {
    let path = dir.join(name);
    let mut file = fs::File::create(&path).expect("Failed to create input file");
    file.write_all(content.as_bytes())
        .expect("Failed to write input file");
    file.flush().expect("Failed to flush input file");
    path
}

fn read_report(dir: &Path, name: &str) -> String {
    fs::read_to_string(dir.join(name))
        .unwrap_or_else(|e| panic!("Failed to read report {}: {}", name, e))
}

#[test]
fn test_csv_pipeline_produces_expected_reports() {
    let dir = TempDir::new().unwrap();
    let input = write_input(dir.path(), "input_data.csv", INPUT_CSV);

    let config = PipelineConfig {
        output_dir: dir.path().to_path_buf(),
        ..PipelineConfig::new(input)
    };
    pipeline::run(&config).unwrap();

    assert_eq!(
        read_report(dir.path(), "output_data_account_summaries.csv"),
        EXPECTED_SUMMARIES
    );
    assert_eq!(
        read_report(dir.path(), "output_data_suspicious_transactions.csv"),
        EXPECTED_SUSPICIOUS
    );
    assert_eq!(
        read_report(dir.path(), "output_data_transaction_statistics.csv"),
        EXPECTED_STATISTICS
    );
}

#[test]
fn test_json_pipeline_matches_csv_pipeline() {
    let dir = TempDir::new().unwrap();
    let input = write_input(dir.path(), "input_data.json", INPUT_JSON);

    let config = PipelineConfig {
        output_dir: dir.path().to_path_buf(),
        ..PipelineConfig::new(input)
    };
    pipeline::run(&config).unwrap();

    assert_eq!(
        read_report(dir.path(), "output_data_account_summaries.csv"),
        EXPECTED_SUMMARIES
    );
    assert_eq!(
        read_report(dir.path(), "output_data_suspicious_transactions.csv"),
        EXPECTED_SUSPICIOUS
    );
    assert_eq!(
        read_report(dir.path(), "output_data_transaction_statistics.csv"),
        EXPECTED_STATISTICS
    );
}

#[test]
fn test_custom_policy_changes_flagging() {
    let dir = TempDir::new().unwrap();
    let input = write_input(dir.path(), "input_data.csv", INPUT_CSV);

    // EUR on the watch-list and a 1400 threshold flag much more
    let config = PipelineConfig {
        output_dir: dir.path().to_path_buf(),
        policy: SuspicionPolicy::new(Decimal::from(1400), ["EUR".to_string()]),
        ..PipelineConfig::new(input)
    };
    pipeline::run(&config).unwrap();

    let suspicious = read_report(dir.path(), "output_data_suspicious_transactions.csv");
    let flagged_ids: Vec<&str> = suspicious
        .lines()
        .skip(1)
        .map(|line| line.split(',').next().unwrap())
        .collect();

    // 2 (1500 > 1400), 6 (EUR), 11 and 12 (amounts); XRP/LTC are no
    // longer watched and 250/450 are below the threshold
    assert_eq!(flagged_ids, ["2", "6", "11", "12"]);
}

#[test]
fn test_filtered_report_selects_by_balance() {
    let dir = TempDir::new().unwrap();
    let input = write_input(dir.path(), "input_data.csv", INPUT_CSV);

    let config = PipelineConfig {
        output_dir: dir.path().to_path_buf(),
        filter: Some(FilterSpec {
            field: SummaryField::Balance,
            threshold: Decimal::ZERO,
            mode: FilterMode::AtLeast,
        }),
        ..PipelineConfig::new(input)
    };
    pipeline::run(&config).unwrap();

    // Only account 1001 has a non-negative balance
    assert_eq!(
        read_report(dir.path(), "output_data_filtered_account_summaries.csv"),
        "Account number,Balance,Total Deposits,Total Withdrawals\n1001,12800,13250,450\n"
    );
}

#[test]
fn test_file_prefix_is_applied() {
    let dir = TempDir::new().unwrap();
    let input = write_input(dir.path(), "input_data.csv", INPUT_CSV);

    let config = PipelineConfig {
        output_dir: dir.path().to_path_buf(),
        file_prefix: "march_run".to_string(),
        ..PipelineConfig::new(input)
    };
    pipeline::run(&config).unwrap();

    assert!(dir.path().join("march_run_account_summaries.csv").exists());
    assert!(dir
        .path()
        .join("march_run_suspicious_transactions.csv")
        .exists());
    assert!(dir
        .path()
        .join("march_run_transaction_statistics.csv")
        .exists());
}
