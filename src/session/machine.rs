//! Session state machine

use super::types::{
    Command, LoadSummary, Outcome, PageView, SearchResults, SessionConfig, SessionState,
    SessionSummary, StatsReport,
};
use crate::error::{Error, Result};
use crate::export::Exporter;
use crate::page::Page;
use crate::pagination::{Paginator, TraversalConfig};
use crate::record::Record;
use crate::repository::{InMemoryRepository, Repository};
use crate::stats::StatsAggregator;
use crate::types::{check_page_size, ExportFormat};
use futures::StreamExt;
use std::time::Duration;
use tokio::time::Instant;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};

/// One interactive exploration of a collection
pub struct Session {
    paginator: Paginator,
    config: SessionConfig,
    exporter: Exporter,
    corpus: Box<dyn Repository<Record>>,
    stats: StatsAggregator,
    state: SessionState,
    current_offset: u64,
    page_size: u32,
    current_page: Option<Page>,
    corpus_complete: bool,
    cancel: CancellationToken,
}

impl Session {
    /// Create a session that accumulates into memory
    pub fn new(paginator: Paginator, config: SessionConfig) -> Result<Self> {
        Self::with_repository(paginator, config, Box::new(InMemoryRepository::new()))
    }

    /// Create a session over a caller-supplied corpus store
    pub fn with_repository(
        paginator: Paginator,
        config: SessionConfig,
        corpus: Box<dyn Repository<Record>>,
    ) -> Result<Self> {
        let page_size = check_page_size(config.page_size)?;
        check_page_size(config.bulk_page_size)?;

        Ok(Self {
            paginator,
            exporter: Exporter::new(config.export.clone()),
            config,
            corpus,
            stats: StatsAggregator::new(),
            state: SessionState::Idle,
            current_offset: 0,
            page_size,
            current_page: None,
            corpus_complete: false,
            cancel: CancellationToken::new(),
        })
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn current_offset(&self) -> u64 {
        self.current_offset
    }

    pub fn page_size(&self) -> u32 {
        self.page_size
    }

    pub fn current_page(&self) -> Option<&Page> {
        self.current_page.as_ref()
    }

    /// Whether the last `LoadAll` ran to the end of the collection
    pub fn is_corpus_complete(&self) -> bool {
        self.corpus_complete
    }

    pub fn corpus_len(&self) -> usize {
        self.corpus.len()
    }

    /// Records accumulated by the last `LoadAll`, in traversal order
    pub fn corpus(&self) -> Result<Vec<Record>> {
        self.corpus.scan()
    }

    pub fn stats(&self) -> &StatsAggregator {
        &self.stats
    }

    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    /// Token that stops a running `LoadAll` before its next page
    ///
    /// A fresh token is installed after a load observes a cancellation, so
    /// fetch this right before issuing `LoadAll`.
    pub fn cancel_token(&self) -> CancellationToken {
        self.cancel.clone()
    }

    /// 1-based page number of the current offset at the current page size
    pub fn page_number(&self) -> u64 {
        self.current_offset / u64::from(self.page_size) + 1
    }

    /// Run one command to completion
    pub async fn execute(&mut self, command: Command) -> Result<Outcome> {
        if self.state == SessionState::Terminated {
            return Err(Error::SessionTerminated);
        }
        debug!(?command, state = %self.state, "Executing command");

        let outcome = match command {
            Command::ViewPage => self.view_page().await,
            Command::NextPage => self.next_page().await,
            Command::PreviousPage => self.previous_page().await,
            Command::JumpToPage(n) => self.jump_to_page(n).await,
            Command::ChangePageSize(n) => self.change_page_size(n).await,
            Command::Search(term) => self.search(&term),
            Command::LoadAll => self.load_all().await,
            Command::ShowStats => Ok(self.show_stats()),
            Command::Export(format) => self.export(format),
            Command::Lookup(id) => self.lookup(&id).await,
            Command::Quit => return Ok(self.quit()),
        };

        self.state = self.resting_state();
        outcome
    }

    fn resting_state(&self) -> SessionState {
        if self.current_page.is_some() {
            SessionState::PageLoaded
        } else {
            SessionState::Idle
        }
    }

    // ------------------------------------------------------------------------
    // Navigation
    // ------------------------------------------------------------------------

    async fn view_page(&mut self) -> Result<Outcome> {
        match &self.current_page {
            Some(page) => Ok(Outcome::Page(self.view_of(page, None))),
            None => self.load_page(self.current_offset, self.page_size).await,
        }
    }

    async fn next_page(&mut self) -> Result<Outcome> {
        match &self.current_page {
            Some(page) if page.has_more() => {
                let offset = page.next_offset();
                self.load_page(offset, self.page_size).await
            }
            _ => Ok(Outcome::Warning("Already on last page".to_string())),
        }
    }

    async fn previous_page(&mut self) -> Result<Outcome> {
        if self.current_offset == 0 {
            return Ok(Outcome::Warning("Already on first page".to_string()));
        }
        let offset = self
            .current_offset
            .saturating_sub(u64::from(self.page_size));
        self.load_page(offset, self.page_size).await
    }

    async fn jump_to_page(&mut self, page_number: u64) -> Result<Outcome> {
        if page_number < 1 {
            return Err(Error::precondition(format!(
                "page number must be at least 1, got {page_number}"
            )));
        }
        let offset = (page_number - 1)
            .checked_mul(u64::from(self.page_size))
            .ok_or_else(|| Error::precondition(format!("page {page_number} is out of range")))?;
        self.load_page(offset, self.page_size).await
    }

    async fn change_page_size(&mut self, page_size: u32) -> Result<Outcome> {
        let page_size = check_page_size(page_size)?;
        // offsets are not comparable across page sizes
        self.load_page(0, page_size).await
    }

    /// Fetch a page and, only on success, make it the current one
    async fn load_page(&mut self, offset: u64, page_size: u32) -> Result<Outcome> {
        let started = Instant::now();
        let result = self.paginator.fetch_page(offset, page_size).await;
        let latency = started.elapsed();
        self.stats.record_call(latency);

        let page = self.back_off_if_rate_limited(result).await?;
        info!(offset, page_size, latency_ms = latency.as_millis() as u64, "Loaded page");

        self.current_offset = offset;
        self.page_size = page_size;
        let view = self.view_of(&page, Some(latency));
        self.current_page = Some(page);
        Ok(Outcome::Page(view))
    }

    fn view_of(&self, page: &Page, latency: Option<Duration>) -> PageView {
        PageView {
            page_number: self.page_number(),
            offset: self.current_offset,
            page_size: self.page_size,
            total: page.total(),
            has_more: page.has_more(),
            records: page.items().to_vec(),
            latency,
        }
    }

    async fn lookup(&mut self, id: &str) -> Result<Outcome> {
        let id = id.trim();
        if id.is_empty() {
            return Err(Error::precondition("record id cannot be blank"));
        }

        let started = Instant::now();
        let result = self.paginator.fetch_one(id).await;
        self.stats.record_call(started.elapsed());

        let record = self.back_off_if_rate_limited(result).await?;
        Ok(Outcome::Record(Box::new(record)))
    }

    /// Wait out the fixed backoff on a 429, then hand the result back as is
    async fn back_off_if_rate_limited<T>(&self, result: Result<T>) -> Result<T> {
        if let Err(e) = &result {
            if e.is_rate_limited() {
                warn!(
                    backoff_secs = self.config.rate_limit_backoff.as_secs(),
                    "Rate limited; backing off before reporting"
                );
                tokio::time::sleep(self.config.rate_limit_backoff).await;
            }
        }
        result
    }

    // ------------------------------------------------------------------------
    // Corpus operations
    // ------------------------------------------------------------------------

    async fn load_all(&mut self) -> Result<Outcome> {
        self.state = SessionState::BulkLoading;
        self.corpus.clear()?;
        self.stats.reset_categories();
        self.corpus_complete = false;

        let config = TraversalConfig::new(0, self.config.bulk_page_size)
            .with_min_delay(self.config.pacing)
            .with_cancellation(self.cancel.clone());
        let mut steps = self.paginator.traverse_timed(config);

        let mut pages = 0u64;
        let mut failure = None;
        while let Some(step) = steps.next().await {
            if let Some(latency) = step.latency {
                self.stats.record_call(latency);
            }
            match step.result {
                Ok(page) => {
                    pages += 1;
                    let records = page.into_items();
                    self.stats.observe(&records);
                    self.corpus.extend(records)?;
                    debug!(pages, records = self.corpus.len(), "Accumulated page");
                }
                Err(e) => {
                    failure = Some(e);
                    break;
                }
            }
        }
        drop(steps);

        let cancelled = self.cancel.is_cancelled();
        if cancelled {
            self.cancel = CancellationToken::new();
        }

        if let Some(e) = failure {
            warn!(pages, records = self.corpus.len(), error = %e, "Load all failed");
            return self.back_off_if_rate_limited(Err(e)).await;
        }

        self.corpus_complete = !cancelled;
        info!(
            records = self.corpus.len(),
            pages, cancelled, "Load all finished"
        );
        Ok(Outcome::Loaded(LoadSummary {
            records: self.corpus.len(),
            pages,
            cancelled,
        }))
    }

    fn search(&mut self, term: &str) -> Result<Outcome> {
        let term = term.trim();
        if term.is_empty() {
            return Ok(Outcome::Warning("Search term cannot be empty".to_string()));
        }
        self.state = SessionState::Searching;

        let needle = term.to_lowercase();
        let matches: Vec<Record> = self
            .corpus
            .scan()?
            .into_iter()
            .filter(|record| record.matches_lowercase(&needle))
            .collect();

        let complete = self.corpus_complete;
        let notice = (!complete).then(|| {
            format!(
                "Only {} loaded records were searched; load all records for a full search",
                self.corpus.len()
            )
        });

        Ok(Outcome::Search(SearchResults {
            term: term.to_string(),
            matches,
            complete,
            notice,
        }))
    }

    fn show_stats(&self) -> Outcome {
        Outcome::Stats(StatsReport {
            snapshot: self.stats.snapshot(None),
            records_loaded: self.corpus.len(),
        })
    }

    fn export(&mut self, format: ExportFormat) -> Result<Outcome> {
        if self.corpus.is_empty() {
            return Ok(Outcome::Warning(
                "No data to export. Load all records first".to_string(),
            ));
        }
        self.state = SessionState::Exporting;

        let records = self.corpus.scan()?;
        let summary = self.exporter.export(&records, format)?;
        Ok(Outcome::Exported(summary))
    }

    fn quit(&mut self) -> Outcome {
        self.state = SessionState::Terminated;
        info!(calls = self.stats.total_calls(), "Session terminated");
        Outcome::Goodbye(SessionSummary {
            total_calls: self.stats.total_calls(),
            records_loaded: self.corpus.len(),
            average_latency: self.stats.average_latency(),
        })
    }
}

impl std::fmt::Debug for Session {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Session")
            .field("state", &self.state)
            .field("current_offset", &self.current_offset)
            .field("page_size", &self.page_size)
            .field("corpus_len", &self.corpus.len())
            .field("corpus_complete", &self.corpus_complete)
            .finish_non_exhaustive()
    }
}
