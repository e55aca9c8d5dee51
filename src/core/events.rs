//! Engine observability
//!
//! The aggregation engine reports what it does through an injected
//! collaborator instead of a process-wide logger, so tests can capture
//! events and parallel engines never share mutable logging state.

use crate::types::Record;
use rust_decimal::Decimal;

/// Observer for structured engine events
///
/// Implementations decide where events go; the engine only states what
/// happened.
pub trait EngineEvents {
    /// A deposit or withdrawal changed an account balance
    fn account_updated(&self, account_number: &str, balance: Decimal);

    /// A record matched the suspicion rule and was appended to the
    /// suspicious list
    fn suspicious_detected(&self, record: &Record);
}

/// Default observer backed by the `log` facade
///
/// Suspicious transactions are warnings; routine balance updates are
/// debug-level to keep large runs quiet.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogEvents;

impl EngineEvents for LogEvents {
    fn account_updated(&self, account_number: &str, balance: Decimal) {
        log::debug!("account {} updated, balance {}", account_number, balance);
    }

    fn suspicious_detected(&self, record: &Record) {
        log::warn!(
            "Suspicious transaction: id={} account={} amount={} currency={}",
            record.transaction_id,
            record.account_number,
            record.amount,
            record.currency
        );
    }
}

/// Observer that discards all events
#[derive(Debug, Clone, Copy, Default)]
pub struct NullEvents;

impl EngineEvents for NullEvents {
    fn account_updated(&self, _account_number: &str, _balance: Decimal) {}

    fn suspicious_detected(&self, _record: &Record) {}
}
