//! Session types

use crate::export::{ExportSummary, ExporterConfig};
use crate::record::Record;
use crate::stats::StatsSnapshot;
use crate::types::{ExportFormat, DEFAULT_PAGE_SIZE, MAX_PAGE_SIZE};
use std::fmt;
use std::time::Duration;

/// Where the session is in its lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SessionState {
    /// No page fetched yet
    #[default]
    Idle,
    /// A current page is available
    PageLoaded,
    /// Matching the accumulated corpus
    Searching,
    /// Running a full traversal
    BulkLoading,
    /// Writing the accumulated corpus to disk
    Exporting,
    /// `Quit` was executed; nothing else is accepted
    Terminated,
}

impl fmt::Display for SessionState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            SessionState::Idle => "idle",
            SessionState::PageLoaded => "page-loaded",
            SessionState::Searching => "searching",
            SessionState::BulkLoading => "bulk-loading",
            SessionState::Exporting => "exporting",
            SessionState::Terminated => "terminated",
        };
        f.write_str(name)
    }
}

/// Everything a session can be asked to do
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    ViewPage,
    NextPage,
    PreviousPage,
    /// 1-based page number
    JumpToPage(u64),
    ChangePageSize(u32),
    Search(String),
    LoadAll,
    ShowStats,
    Export(ExportFormat),
    /// Fetch one record by id
    Lookup(String),
    Quit,
}

/// Settings for a session
#[derive(Debug, Clone)]
pub struct SessionConfig {
    /// Initial page size for navigation
    pub page_size: u32,
    /// Page size used by `LoadAll`
    pub bulk_page_size: u32,
    /// Minimum delay between `LoadAll` requests
    pub pacing: Duration,
    /// Wait after a 429 before the error is reported
    pub rate_limit_backoff: Duration,
    pub export: ExporterConfig,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            page_size: DEFAULT_PAGE_SIZE,
            bulk_page_size: MAX_PAGE_SIZE,
            pacing: Duration::from_millis(100),
            rate_limit_backoff: Duration::from_secs(30),
            export: ExporterConfig::default(),
        }
    }
}

impl SessionConfig {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_page_size(mut self, page_size: u32) -> Self {
        self.page_size = page_size;
        self
    }

    #[must_use]
    pub fn with_bulk_page_size(mut self, page_size: u32) -> Self {
        self.bulk_page_size = page_size;
        self
    }

    #[must_use]
    pub fn with_pacing(mut self, pacing: Duration) -> Self {
        self.pacing = pacing;
        self
    }

    #[must_use]
    pub fn with_rate_limit_backoff(mut self, backoff: Duration) -> Self {
        self.rate_limit_backoff = backoff;
        self
    }

    #[must_use]
    pub fn with_export(mut self, export: ExporterConfig) -> Self {
        self.export = export;
        self
    }
}

/// The current page as shown to the operator
#[derive(Debug, Clone, PartialEq)]
pub struct PageView {
    /// 1-based page number at the session's page size
    pub page_number: u64,
    pub offset: u64,
    pub page_size: u32,
    pub total: Option<u64>,
    pub has_more: bool,
    pub records: Vec<Record>,
    /// Latency of the fetch that produced this view, if one was made
    pub latency: Option<Duration>,
}

impl PageView {
    pub fn has_previous(&self) -> bool {
        self.offset > 0
    }

    /// 1-based ordinal of the first record, `None` on an empty page
    pub fn first_ordinal(&self) -> Option<u64> {
        (!self.records.is_empty()).then_some(self.offset + 1)
    }

    /// 1-based ordinal of the last record, `None` on an empty page
    pub fn last_ordinal(&self) -> Option<u64> {
        (!self.records.is_empty()).then(|| self.offset + self.records.len() as u64)
    }
}

/// Result of a search over the accumulated corpus
#[derive(Debug, Clone, PartialEq)]
pub struct SearchResults {
    pub term: String,
    pub matches: Vec<Record>,
    /// Whether the corpus was fully loaded when searching
    pub complete: bool,
    /// Set when results may be partial
    pub notice: Option<String>,
}

/// Result of a `LoadAll`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadSummary {
    pub records: usize,
    pub pages: u64,
    pub cancelled: bool,
}

/// Statistics plus the size of the corpus
#[derive(Debug, Clone, PartialEq)]
pub struct StatsReport {
    pub snapshot: StatsSnapshot,
    pub records_loaded: usize,
}

/// Closing numbers reported by `Quit`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionSummary {
    pub total_calls: u64,
    pub records_loaded: usize,
    pub average_latency: Option<Duration>,
}

/// What a command produced
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    Page(PageView),
    /// The command was valid but had nothing to do
    Warning(String),
    Search(SearchResults),
    Loaded(LoadSummary),
    Stats(StatsReport),
    Exported(ExportSummary),
    Record(Box<Record>),
    Goodbye(SessionSummary),
}
