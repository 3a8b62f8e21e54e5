//! HTTP transport

use super::types::{check_fetch_limit, Transport};
use crate::error::{Error, Result};
use crate::http::{HttpClient, RequestConfig};
use async_trait::async_trait;
use tracing::debug;
use url::Url;

/// Transport over the collection's REST endpoint
///
/// Lists with `GET {base}{collection_path}?offset=..&limit=..` and fetches
/// one entity with `GET {base}{collection_path}/{id}`.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: HttpClient,
    collection_path: String,
}

impl HttpTransport {
    /// Create a transport for the given collection path (e.g. `/users`)
    pub fn new(client: HttpClient, collection_path: impl Into<String>) -> Self {
        Self {
            client,
            collection_path: collection_path.into(),
        }
    }

    pub fn collection_path(&self) -> &str {
        &self.collection_path
    }

    fn entity_url(&self, id: &str) -> Result<String> {
        let base = self.client.build_url(&self.collection_path);
        let mut url = Url::parse(&base)?;
        url.path_segments_mut()
            .map_err(|()| Error::config(format!("base URL cannot carry a path: {base}")))?
            .pop_if_empty()
            .push(id);
        Ok(url.into())
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn fetch_page(&self, offset: u64, limit: u32) -> Result<String> {
        check_fetch_limit(limit)?;
        debug!(offset, limit, path = %self.collection_path, "Fetching page");

        let request = RequestConfig::new()
            .query("offset", offset)
            .query("limit", limit);
        self.client.get_text(&self.collection_path, request).await
    }

    async fn fetch_one(&self, id: &str) -> Result<String> {
        if id.trim().is_empty() {
            return Err(Error::precondition("entity id must not be empty"));
        }
        let url = self.entity_url(id)?;
        debug!(id, "Fetching entity");

        self.client.get_text(&url, RequestConfig::new()).await
    }
}
