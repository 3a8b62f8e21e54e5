//! Running statistics aggregator

use super::types::{CategoryTally, StatsSnapshot};
use crate::record::Record;
use std::time::Duration;

/// Folds records and call latencies into running counters
#[derive(Debug, Clone, Default)]
pub struct StatsAggregator {
    total_calls: u64,
    total_latency: Duration,
    records_observed: u64,
    timezones: CategoryTally,
    roles: CategoryTally,
}

impl StatsAggregator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold a batch of records into the categorical counters
    ///
    /// Records without a role or timezone are counted as observed but add
    /// nothing to that category.
    pub fn observe(&mut self, records: &[Record]) {
        for record in records {
            if let Some(timezone) = record.timezone() {
                self.timezones.add(timezone);
            }
            if let Some(role) = record.role() {
                self.roles.add(role);
            }
        }
        self.records_observed += records.len() as u64;
    }

    /// Account for one fetch call and how long it took
    pub fn record_call(&mut self, latency: Duration) {
        self.total_calls += 1;
        self.total_latency += latency;
    }

    pub fn total_calls(&self) -> u64 {
        self.total_calls
    }

    pub fn records_observed(&self) -> u64 {
        self.records_observed
    }

    /// `total_latency / total_calls`, or `None` before the first call
    pub fn average_latency(&self) -> Option<Duration> {
        if self.total_calls == 0 {
            return None;
        }
        let nanos = self.total_latency.as_nanos() / u128::from(self.total_calls);
        Some(Duration::from_nanos(u64::try_from(nanos).unwrap_or(u64::MAX)))
    }

    /// Forget categorical tallies; call counters are kept
    pub fn reset_categories(&mut self) {
        self.timezones.clear();
        self.roles.clear();
        self.records_observed = 0;
    }

    /// Current view, each category optionally cut to its `top_n` values
    pub fn snapshot(&self, top_n: Option<usize>) -> StatsSnapshot {
        StatsSnapshot {
            total_calls: self.total_calls,
            average_latency: self.average_latency(),
            records_observed: self.records_observed,
            by_timezone: self.timezones.ranked(top_n),
            by_role: self.roles.ranked(top_n),
        }
    }
}
