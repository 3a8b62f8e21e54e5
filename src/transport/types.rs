//! Transport trait

use crate::error::Result;
use crate::types::check_page_size;
use async_trait::async_trait;

/// Source of raw page and entity responses
///
/// Implementations are stateless from the caller's point of view and may be
/// shared between sessions.
#[async_trait]
pub trait Transport: Send + Sync {
    /// Fetch the window starting at `offset` with at most `limit` items
    async fn fetch_page(&self, offset: u64, limit: u32) -> Result<String>;

    /// Fetch a single entity by id
    async fn fetch_one(&self, id: &str) -> Result<String>;
}

/// Validate a page limit before any request is made
pub fn check_fetch_limit(limit: u32) -> Result<u32> {
    check_page_size(limit)
}
