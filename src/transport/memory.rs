//! In-memory transport

use super::types::{check_fetch_limit, Transport};
use crate::decode::EnvelopeConfig;
use crate::error::{Error, Result};
use crate::record::{self, Record};
use crate::types::{JsonObject, JsonValue};
use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Mutex, MutexGuard, PoisonError};

/// One request seen by an `InMemoryTransport`
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RequestLogEntry {
    /// A page request
    Page { offset: u64, limit: u32 },
    /// A single-entity request
    Entity { id: String },
}

/// Serves a fixed collection in the endpoint's wire shape
///
/// Queued failures are returned, one per request, before any real response,
/// which makes rate-limit and error paths easy to drive from tests.
#[derive(Debug, Default)]
pub struct InMemoryTransport {
    records: Vec<Record>,
    envelope: EnvelopeConfig,
    report_total: bool,
    failures: Mutex<VecDeque<(u16, String)>>,
    log: Mutex<Vec<RequestLogEntry>>,
    calls: AtomicUsize,
}

impl InMemoryTransport {
    /// Serve `records` under the default envelope, reporting totals
    pub fn new(records: Vec<Record>) -> Self {
        Self {
            records,
            report_total: true,
            ..Self::default()
        }
    }

    /// Use custom envelope keys
    #[must_use]
    pub fn with_envelope(mut self, envelope: EnvelopeConfig) -> Self {
        self.envelope = envelope;
        self
    }

    /// Report `total: null`, as servers do when counting is expensive
    #[must_use]
    pub fn without_total(mut self) -> Self {
        self.report_total = false;
        self
    }

    /// Queue a failure for the next request
    pub fn push_failure(&self, status: u16, body: impl Into<String>) {
        lock(&self.failures).push_back((status, body.into()));
    }

    /// Number of requests that reached this transport (including failures)
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    /// Requests seen so far, in order
    pub fn requests(&self) -> Vec<RequestLogEntry> {
        lock(&self.log).clone()
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    fn begin(&self, entry: RequestLogEntry) -> Result<()> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        lock(&self.log).push(entry);
        match lock(&self.failures).pop_front() {
            Some((status, body)) => Err(Error::transport(status, body)),
            None => Ok(()),
        }
    }

    fn page_body(&self, offset: u64, limit: u32) -> JsonValue {
        let len = self.records.len();
        let start = usize::try_from(offset).unwrap_or(usize::MAX).min(len);
        let end = start.saturating_add(limit as usize).min(len);
        let items: Vec<JsonValue> = self.records[start..end].iter().map(record::encode).collect();

        let mut envelope = JsonObject::new();
        envelope.insert(self.envelope.collection_key.clone(), JsonValue::Array(items));
        envelope.insert("limit".into(), limit.into());
        envelope.insert("offset".into(), offset.into());
        envelope.insert("more".into(), (end < len).into());
        envelope.insert(
            "total".into(),
            if self.report_total {
                (len as u64).into()
            } else {
                JsonValue::Null
            },
        );
        JsonValue::Object(envelope)
    }
}

#[async_trait]
impl Transport for InMemoryTransport {
    async fn fetch_page(&self, offset: u64, limit: u32) -> Result<String> {
        check_fetch_limit(limit)?;
        self.begin(RequestLogEntry::Page { offset, limit })?;
        Ok(self.page_body(offset, limit).to_string())
    }

    async fn fetch_one(&self, id: &str) -> Result<String> {
        if id.trim().is_empty() {
            return Err(Error::precondition("entity id must not be empty"));
        }
        self.begin(RequestLogEntry::Entity { id: id.to_string() })?;

        let found = self
            .records
            .iter()
            .find(|r| r.id() == id)
            .ok_or_else(|| Error::transport(404, format!("{{\"error\":\"{id} not found\"}}")))?;

        let mut envelope = JsonObject::new();
        envelope.insert(self.envelope.entity_key.clone(), record::encode(found));
        Ok(JsonValue::Object(envelope).to_string())
    }
}

const DEMO_ROLES: [&str; 4] = ["admin", "user", "limited_user", "observer"];
const DEMO_TIMEZONES: [&str; 3] = ["America/New_York", "Europe/London", "Asia/Tokyo"];

/// Generate `count` plausible user records for offline runs
///
/// Every fifth record carries an attribute the record model does not know,
/// so the unknown-field display paths get exercised too.
pub fn demo_records(count: usize) -> Vec<Record> {
    (1..=count)
        .map(|n| {
            let record = Record::new(format!("PDEMO{n:03}"), "user")
                .with_name(format!("Demo User {n}"))
                .with_email(format!("demo.user{n}@example.com"))
                .with_role(DEMO_ROLES[n % DEMO_ROLES.len()])
                .with_timezone(DEMO_TIMEZONES[n % DEMO_TIMEZONES.len()])
                .with_invitation_sent(n % 7 == 0);
            if n % 5 == 0 {
                record.with_unknown_field("license", "full_user")
            } else {
                record
            }
        })
        .collect()
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}
