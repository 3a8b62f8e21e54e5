//! Statistics types

use serde::Serialize;
use std::collections::HashMap;
use std::time::Duration;

/// One distinct value and how often it was seen
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryCount {
    pub value: String,
    pub count: u64,
}

/// Per-value counts that remember first-seen order
#[derive(Debug, Clone, Default)]
pub struct CategoryTally {
    order: Vec<String>,
    counts: HashMap<String, u64>,
}

impl CategoryTally {
    pub fn new() -> Self {
        Self::default()
    }

    /// Count one occurrence of `value`
    pub fn add(&mut self, value: &str) {
        if let Some(count) = self.counts.get_mut(value) {
            *count += 1;
        } else {
            self.order.push(value.to_string());
            self.counts.insert(value.to_string(), 1);
        }
    }

    pub fn get(&self, value: &str) -> u64 {
        self.counts.get(value).copied().unwrap_or(0)
    }

    /// Number of distinct values
    pub fn distinct(&self) -> usize {
        self.order.len()
    }

    pub fn clear(&mut self) {
        self.order.clear();
        self.counts.clear();
    }

    /// Values by descending count, ties in first-seen order
    pub fn ranked(&self, top_n: Option<usize>) -> Vec<CategoryCount> {
        let mut ranked: Vec<CategoryCount> = self
            .order
            .iter()
            .map(|value| CategoryCount {
                value: value.clone(),
                count: self.get(value),
            })
            .collect();
        // stable sort keeps first-seen order among equal counts
        ranked.sort_by(|a, b| b.count.cmp(&a.count));
        if let Some(n) = top_n {
            ranked.truncate(n);
        }
        ranked
    }
}

/// Point-in-time view of an aggregator
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StatsSnapshot {
    /// Fetch calls made, successful or not
    pub total_calls: u64,
    /// `None` until at least one call was made
    pub average_latency: Option<Duration>,
    /// Records folded in since the last reset
    pub records_observed: u64,
    pub by_timezone: Vec<CategoryCount>,
    pub by_role: Vec<CategoryCount>,
}

impl StatsSnapshot {
    /// Average latency in whole milliseconds, when defined
    pub fn average_latency_ms(&self) -> Option<u128> {
        self.average_latency.map(|d| d.as_millis())
    }
}
