//! Types module
//!
//! Contains core data structures used throughout the application:
//! - `record`: transaction records and the transaction kind vocabulary
//! - `summary`: per-account and per-type aggregate values
//! - `error`: error types for the processing pipeline

pub mod error;
pub mod record;
pub mod summary;

pub use error::ProcessingError;
pub use record::{Record, TransactionKind};
pub use summary::{AccountSummary, TypeStats};
