//! Suspicion policy configuration
//!
//! Holds the classification constants as per-engine configuration.
//! Each engine instance owns its policy, so tests can run many engines
//! with different thresholds deterministically and in parallel.

use crate::types::Record;
use rust_decimal::Decimal;
use std::collections::HashSet;

/// Default threshold above which an amount is suspicious
const DEFAULT_LARGE_TRANSACTION_THRESHOLD: i64 = 10_000;

/// Default watch-list of currency codes treated as inherently
/// risk-flagged
const DEFAULT_UNCOMMON_CURRENCIES: [&str; 2] = ["XRP", "LTC"];

/// Classification rules for suspicious transactions
///
/// A record is suspicious if its amount is strictly greater than
/// `large_transaction_threshold` or its currency is in
/// `uncommon_currencies`. An amount exactly equal to the threshold is
/// not suspicious.
#[derive(Clone, Debug, PartialEq)]
pub struct SuspicionPolicy {
    /// Amounts strictly greater than this are suspicious
    pub large_transaction_threshold: Decimal,
    /// Currency codes whose mere presence flags a record, regardless
    /// of amount
    pub uncommon_currencies: HashSet<String>,
}

impl Default for SuspicionPolicy {
    fn default() -> Self {
        Self {
            large_transaction_threshold: Decimal::from(DEFAULT_LARGE_TRANSACTION_THRESHOLD),
            uncommon_currencies: DEFAULT_UNCOMMON_CURRENCIES
                .iter()
                .map(|c| c.to_string())
                .collect(),
        }
    }
}

impl SuspicionPolicy {
    /// Create a policy with custom values
    pub fn new(
        large_transaction_threshold: Decimal,
        uncommon_currencies: impl IntoIterator<Item = String>,
    ) -> Self {
        Self {
            large_transaction_threshold,
            uncommon_currencies: uncommon_currencies.into_iter().collect(),
        }
    }

    /// Apply the classification rule to a single record
    ///
    /// Independent of transaction kind; either condition alone
    /// suffices.
    pub fn is_suspicious(&self, record: &Record) -> bool {
        record.amount > self.large_transaction_threshold
            || self.uncommon_currencies.contains(&record.currency)
    }
}
