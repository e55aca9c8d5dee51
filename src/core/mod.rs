//! Core business logic module
//!
//! This module contains the aggregation/classification components:
//! - `aggregator` - the stateful engine that folds records into the
//!   three derived stores
//! - `policy` - suspicion classification configuration
//! - `events` - injected observability collaborator

pub mod aggregator;
pub mod events;
pub mod policy;

pub use aggregator::{AggregationEngine, ProcessedReport};
pub use events::{EngineEvents, LogEvents, NullEvents};
pub use policy::SuspicionPolicy;
