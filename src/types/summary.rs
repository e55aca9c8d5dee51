//! Aggregate value types
//!
//! This module defines the per-account summary and per-type statistics
//! structures accumulated by the aggregation engine.

use rust_decimal::Decimal;

/// Per-account running totals
///
/// Created lazily on the first transaction that references an account
/// and mutated on every subsequent deposit or withdrawal for it.
/// Invariant: `balance == total_deposits - total_withdrawals` for any
/// account that has seen at least one deposit or withdrawal. Balances
/// may go negative; no floor is enforced.
#[derive(Debug, Clone, PartialEq)]
pub struct AccountSummary {
    /// Account the summary belongs to
    pub account_number: String,

    /// Signed running balance
    pub balance: Decimal,

    /// Sum of all deposit amounts, monotonically non-decreasing
    pub total_deposits: Decimal,

    /// Sum of all withdrawal amounts, monotonically non-decreasing
    pub total_withdrawals: Decimal,
}

impl AccountSummary {
    /// Create a zeroed summary for an account
    pub fn new(account_number: impl Into<String>) -> Self {
        AccountSummary {
            account_number: account_number.into(),
            balance: Decimal::ZERO,
            total_deposits: Decimal::ZERO,
            total_withdrawals: Decimal::ZERO,
        }
    }
}

/// Per-transaction-type running sum and count
///
/// Invariant: `transaction_count` equals the number of ingested records
/// of the type and `total_amount` equals the sum of their amounts.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TypeStats {
    /// Running sum of amounts for this type
    pub total_amount: Decimal,

    /// Number of records seen for this type
    pub transaction_count: u64,
}
