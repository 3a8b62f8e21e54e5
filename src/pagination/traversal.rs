//! Offset/limit traversal

use super::types::{PaginationState, TraversalConfig, TraversalStep};
use crate::decode::ResponseDecoder;
use crate::error::{Error, Result};
use crate::page::Page;
use crate::record::Record;
use crate::transport::Transport;
use futures::stream::{self, BoxStream, StreamExt};
use std::sync::Arc;
use tokio::time::Instant;
use tracing::{debug, info};

/// Lazy sequence of pages produced by one traversal
pub type PageStream = BoxStream<'static, Result<Page>>;

/// Lazy sequence of timed traversal steps
pub type StepStream = BoxStream<'static, TraversalStep>;

/// Fetches and decodes pages over a `Transport`
#[derive(Clone)]
pub struct Paginator {
    transport: Arc<dyn Transport>,
    decoder: Arc<dyn ResponseDecoder>,
}

impl Paginator {
    /// Create a paginator
    pub fn new(transport: Arc<dyn Transport>, decoder: Arc<dyn ResponseDecoder>) -> Self {
        Self { transport, decoder }
    }

    /// Fetch and decode a single page
    pub async fn fetch_page(&self, offset: u64, limit: u32) -> Result<Page> {
        fetch_and_decode(&*self.transport, &*self.decoder, offset, limit).await
    }

    /// Fetch and decode a single entity
    pub async fn fetch_one(&self, id: &str) -> Result<Record> {
        let body = self.transport.fetch_one(id).await?;
        self.decoder.decode_entity(&body)
    }

    /// Walk the collection page by page
    ///
    /// The stream ends after the first page whose `more` flag is false,
    /// after the first error (which is yielded), or when the configured
    /// cancellation token fires between two fetches. Each call returns a
    /// fresh stream.
    pub fn traverse(&self, config: TraversalConfig) -> PageStream {
        self.traverse_timed(config)
            .map(|step| step.result)
            .boxed()
    }

    /// Same walk as `traverse`, reporting how long each fetch took
    ///
    /// Pacing waits are not part of the reported latency.
    pub fn traverse_timed(&self, config: TraversalConfig) -> StepStream {
        let transport = Arc::clone(&self.transport);
        let decoder = Arc::clone(&self.decoder);
        let state = PaginationState::starting_at(config.start_offset);

        stream::unfold(state, move |mut state| {
            let transport = Arc::clone(&transport);
            let decoder = Arc::clone(&decoder);
            let config = config.clone();

            async move {
                if state.done {
                    return None;
                }
                if state.stalled {
                    state.mark_done();
                    let err = Error::validation(format!(
                        "server reported more pages after offset {} with limit 0; offset cannot advance",
                        state.offset
                    ));
                    return Some((TraversalStep::without_request(err), state));
                }

                if let Some(last) = state.last_request {
                    tokio::time::sleep_until(last + config.min_delay).await;
                }
                if config.is_cancelled() {
                    info!(
                        offset = state.offset,
                        pages = state.pages_fetched,
                        "Traversal cancelled"
                    );
                    return None;
                }

                let started = Instant::now();
                state.last_request = Some(started);
                let result =
                    fetch_and_decode(&*transport, &*decoder, state.offset, config.page_size).await;
                let latency = started.elapsed();

                match &result {
                    Ok(page) => state.advance(page),
                    Err(_) => state.mark_done(),
                }
                Some((TraversalStep::fetched(result, latency), state))
            }
        })
        .boxed()
    }
}

impl std::fmt::Debug for Paginator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Paginator").finish_non_exhaustive()
    }
}

async fn fetch_and_decode(
    transport: &dyn Transport,
    decoder: &dyn ResponseDecoder,
    offset: u64,
    limit: u32,
) -> Result<Page> {
    let body = transport.fetch_page(offset, limit).await?;
    let page = decoder.decode_page(&body)?;
    debug!(summary = %page.pagination_summary(), "Fetched page");
    Ok(page)
}
