//! Aggregation engine
//!
//! This module provides the AggregationEngine, the single stateful,
//! rule-bearing component of the system. It folds an ordered sequence
//! of validated transaction records into three derived stores:
//!
//! - account summaries (running balance and deposit/withdrawal totals)
//! - the suspicious-transaction list (insertion order preserved)
//! - per-transaction-type statistics (sum and count, any type string)
//!
//! Summary accumulation reacts only to deposits and withdrawals, while
//! statistics accumulation buckets every kind it sees, including
//! unrecognized ones. This asymmetry is deliberate: a transfer affects
//! type-level reporting but not balances, because a single-sided record
//! carries no counter-account.

use crate::core::events::{EngineEvents, LogEvents};
use crate::core::policy::SuspicionPolicy;
use crate::types::{AccountSummary, ProcessingError, Record, TransactionKind, TypeStats};
use rust_decimal::Decimal;
use std::collections::HashMap;

/// Read-only views over the three derived stores
///
/// Returned by [`AggregationEngine::process_data`]; borrows the engine,
/// so the stores cannot be mutated while a report is held.
#[derive(Debug)]
pub struct ProcessedReport<'a> {
    /// Account summaries keyed by account number
    pub account_summaries: &'a HashMap<String, AccountSummary>,

    /// Flagged records in ingestion order
    pub suspicious_transactions: &'a [Record],

    /// Statistics keyed by transaction kind
    pub transaction_statistics: &'a HashMap<TransactionKind, TypeStats>,
}

/// The aggregation/classification engine
///
/// Constructed with the full record sequence and a suspicion policy;
/// one call to [`process_data`](Self::process_data) consumes the
/// sequence in input order and populates the three stores. The engine
/// exclusively owns its stores for the lifetime of a run and exposes
/// them read-only.
pub struct AggregationEngine {
    records: Vec<Record>,
    account_summaries: HashMap<String, AccountSummary>,
    suspicious_transactions: Vec<Record>,
    transaction_statistics: HashMap<TransactionKind, TypeStats>,
    policy: SuspicionPolicy,
    events: Box<dyn EngineEvents>,
}

impl AggregationEngine {
    /// Create an engine over a record sequence with the given policy
    ///
    /// Events go to the default [`LogEvents`] observer. The sequence
    /// may be empty.
    pub fn new(records: Vec<Record>, policy: SuspicionPolicy) -> Self {
        Self::with_events(records, policy, Box::new(LogEvents))
    }

    /// Create an engine with an injected event observer
    pub fn with_events(
        records: Vec<Record>,
        policy: SuspicionPolicy,
        events: Box<dyn EngineEvents>,
    ) -> Self {
        AggregationEngine {
            records,
            account_summaries: HashMap::new(),
            suspicious_transactions: Vec::new(),
            transaction_statistics: HashMap::new(),
            policy,
            events,
        }
    }

    /// Process the configured record sequence and return the stores
    ///
    /// Each record is evaluated exactly once, in input order: summary
    /// accumulation, statistics accumulation, then suspicion
    /// classification. The input sequence is drained by the first
    /// call, so calling again processes nothing and the stores are
    /// unchanged. One engine instance corresponds to one run.
    pub fn process_data(&mut self) -> ProcessedReport<'_> {
        for record in std::mem::take(&mut self.records) {
            self.update_account_summary(&record);
            self.update_transaction_statistics(&record);

            // Classification runs last so a flagged record can move
            // into the list without a copy.
            if self.policy.is_suspicious(&record) {
                self.events.suspicious_detected(&record);
                self.suspicious_transactions.push(record);
            }
        }

        self.report()
    }

    /// Apply a record to its account summary
    ///
    /// Creates the summary lazily for unseen accounts. Only exact
    /// deposits and withdrawals change balances; every other kind
    /// leaves the summary untouched. No balance floor is enforced;
    /// negative balances are accepted behavior, not an error.
    fn update_account_summary(&mut self, record: &Record) {
        let summary = self
            .account_summaries
            .entry(record.account_number.clone())
            .or_insert_with(|| AccountSummary::new(record.account_number.clone()));

        match record.kind {
            TransactionKind::Deposit => {
                summary.balance += record.amount;
                summary.total_deposits += record.amount;
            }
            TransactionKind::Withdrawal => {
                summary.balance -= record.amount;
                summary.total_withdrawals += record.amount;
            }
            _ => return,
        }

        self.events
            .account_updated(&record.account_number, summary.balance);
    }

    /// Fold a record into the statistics for its kind
    ///
    /// Type-agnostic: lazily creates a zeroed bucket for any kind not
    /// seen before, including `Other` kinds outside the validated
    /// vocabulary.
    fn update_transaction_statistics(&mut self, record: &Record) {
        let stats = self
            .transaction_statistics
            .entry(record.kind.clone())
            .or_default();

        stats.total_amount += record.amount;
        stats.transaction_count += 1;
    }

    /// Average amount for a transaction kind
    ///
    /// Existence is checked before the count guard: querying a kind
    /// that was never ingested is a lookup miss, while a present entry
    /// with a zero count yields zero rather than dividing by zero.
    pub fn get_average_transaction_amount(
        &self,
        kind: &TransactionKind,
    ) -> Result<Decimal, ProcessingError> {
        let stats = self
            .transaction_statistics
            .get(kind)
            .ok_or_else(|| ProcessingError::statistics_not_found(kind.as_str()))?;

        if stats.transaction_count == 0 {
            return Ok(Decimal::ZERO);
        }

        Ok(stats.total_amount / Decimal::from(stats.transaction_count))
    }

    /// Read-only views over all three stores
    pub fn report(&self) -> ProcessedReport<'_> {
        ProcessedReport {
            account_summaries: &self.account_summaries,
            suspicious_transactions: &self.suspicious_transactions,
            transaction_statistics: &self.transaction_statistics,
        }
    }

    /// Account summaries keyed by account number
    pub fn account_summaries(&self) -> &HashMap<String, AccountSummary> {
        &self.account_summaries
    }

    /// Flagged records in ingestion order
    pub fn suspicious_transactions(&self) -> &[Record] {
        &self.suspicious_transactions
    }

    /// Statistics keyed by transaction kind
    pub fn transaction_statistics(&self) -> &HashMap<TransactionKind, TypeStats> {
        &self.transaction_statistics
    }
}
