//! Pagination types

use crate::error::{Error, Result};
use crate::page::Page;
use crate::types::DEFAULT_PAGE_SIZE;
use std::time::Duration;
use tokio::time::Instant;
use tokio_util::sync::CancellationToken;

/// Parameters for one traversal
#[derive(Debug, Clone)]
pub struct TraversalConfig {
    /// Offset of the first page requested
    pub start_offset: u64,
    /// Requested page size (`1..=100`)
    pub page_size: u32,
    /// Minimum time between the starts of two successive requests
    pub min_delay: Duration,
    /// Stop before the next fetch once this is cancelled
    pub cancel: Option<CancellationToken>,
}

impl Default for TraversalConfig {
    fn default() -> Self {
        Self {
            start_offset: 0,
            page_size: DEFAULT_PAGE_SIZE,
            min_delay: Duration::ZERO,
            cancel: None,
        }
    }
}

impl TraversalConfig {
    /// Traverse from `start_offset` with `page_size` items per request
    pub fn new(start_offset: u64, page_size: u32) -> Self {
        Self {
            start_offset,
            page_size,
            ..Self::default()
        }
    }

    /// Set the pacing delay between requests
    #[must_use]
    pub fn with_min_delay(mut self, delay: Duration) -> Self {
        self.min_delay = delay;
        self
    }

    /// Attach a cancellation token
    #[must_use]
    pub fn with_cancellation(mut self, token: CancellationToken) -> Self {
        self.cancel = Some(token);
        self
    }

    pub(crate) fn is_cancelled(&self) -> bool {
        self.cancel
            .as_ref()
            .is_some_and(CancellationToken::is_cancelled)
    }
}

/// Tracks progress during one traversal
#[derive(Debug, Clone, Default)]
pub struct PaginationState {
    /// Offset of the next request
    pub offset: u64,
    /// Pages fetched so far
    pub pages_fetched: u64,
    /// Records fetched so far
    pub records_fetched: u64,
    /// When the previous request started
    pub last_request: Option<Instant>,
    /// Is traversal complete?
    pub done: bool,
    /// The server said `more` but its limit cannot advance the offset
    pub stalled: bool,
}

impl PaginationState {
    /// Create state positioned at `offset`
    pub fn starting_at(offset: u64) -> Self {
        Self {
            offset,
            ..Self::default()
        }
    }

    /// Mark traversal as complete
    pub fn mark_done(&mut self) {
        self.done = true;
    }

    /// Account for a fetched page and decide where to go next
    pub fn advance<T>(&mut self, page: &Page<T>) {
        self.pages_fetched += 1;
        self.records_fetched += page.item_count() as u64;

        if !page.has_more() {
            self.mark_done();
        } else if page.limit() == 0 {
            self.stalled = true;
        } else {
            self.offset = page.next_offset();
        }
    }
}

/// One traversal step: a decoded page or the error that ended the walk
#[derive(Debug)]
pub struct TraversalStep {
    /// Time spent in the fetch, `None` when no request was made
    pub latency: Option<Duration>,
    pub result: Result<Page>,
}

impl TraversalStep {
    pub(crate) fn fetched(result: Result<Page>, latency: Duration) -> Self {
        Self {
            latency: Some(latency),
            result,
        }
    }

    pub(crate) fn without_request(error: Error) -> Self {
        Self {
            latency: None,
            result: Err(error),
        }
    }
}
