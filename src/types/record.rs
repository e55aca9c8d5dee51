//! Transaction record types
//!
//! This module defines the typed transaction record and the transaction
//! kind vocabulary used throughout the system. Records are parsed and
//! coerced at the I/O boundary; once constructed they are immutable.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use std::fmt;
use std::str::FromStr;

/// Transaction kinds recognized by the aggregation engine
///
/// The named variants carry aggregation semantics: deposits and
/// withdrawals move account balances, transfers are tracked in the
/// type statistics only. Any other type string is preserved verbatim
/// in `Other` so that statistics can still bucket it.
///
/// Matching is exact and case-sensitive: `"DEPOSIT"` parses to
/// `Other("DEPOSIT")`, which accumulates its own statistics bucket and
/// never touches an account balance.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum TransactionKind {
    /// Credit funds to an account
    Deposit,

    /// Debit funds from an account
    Withdrawal,

    /// Move funds between accounts
    ///
    /// A single-sided record has no counter-account, so transfers are
    /// counted in the type statistics but leave balances unchanged.
    Transfer,

    /// Any type string outside the known vocabulary, kept verbatim
    Other(String),
}

impl TransactionKind {
    /// Parse a type string, preserving unknown strings as `Other`
    pub fn parse(text: &str) -> Self {
        match text {
            "deposit" => TransactionKind::Deposit,
            "withdrawal" => TransactionKind::Withdrawal,
            "transfer" => TransactionKind::Transfer,
            other => TransactionKind::Other(other.to_string()),
        }
    }

    /// Whether this kind is part of the validated vocabulary
    /// (deposit, withdrawal, transfer)
    pub fn is_known(&self) -> bool {
        !matches!(self, TransactionKind::Other(_))
    }

    /// The type string as it appears in input and report files
    pub fn as_str(&self) -> &str {
        match self {
            TransactionKind::Deposit => "deposit",
            TransactionKind::Withdrawal => "withdrawal",
            TransactionKind::Transfer => "transfer",
            TransactionKind::Other(s) => s,
        }
    }
}

impl FromStr for TransactionKind {
    type Err = std::convert::Infallible;

    /// Never fails: unknown strings map to `Other` with the original
    /// text preserved
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(TransactionKind::parse(s))
    }
}

impl fmt::Display for TransactionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single ingested transaction
///
/// Produced by the input readers after coercion and (optionally)
/// validation. Immutable once ingested; the aggregation engine takes
/// ownership of the record sequence for the lifetime of a run.
#[derive(Debug, Clone, PartialEq)]
pub struct Record {
    /// Opaque transaction identifier, normalized to a string
    pub transaction_id: String,

    /// Account the transaction applies to, normalized to a string
    ///
    /// Used as the account-summary map key; numeric and string input
    /// forms normalize to the same key.
    pub account_number: String,

    /// Calendar date of the transaction (not used in aggregation)
    pub date: NaiveDate,

    /// Transaction kind
    pub kind: TransactionKind,

    /// Transaction amount, non-negative after validation
    pub amount: Decimal,

    /// Currency code, e.g. "CAD" or "XRP"
    pub currency: String,

    /// Free-text description
    pub description: String,
}
