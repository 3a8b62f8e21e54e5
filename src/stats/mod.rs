//! Statistics module
//!
//! Running counters over observed records and fetch calls. Nothing here keeps
//! the records themselves, so an aggregator can sit on an unbounded stream.

mod aggregator;
mod types;

pub use aggregator::StatsAggregator;
pub use types::{CategoryCount, CategoryTally, StatsSnapshot};
