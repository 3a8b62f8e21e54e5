//! Decoder types and traits
//!
//! Defines the core decoder abstractions.

use crate::error::Result;
use crate::page::Page;
use crate::record::Record;
use serde::{Deserialize, Serialize};

/// Names of the wrapper keys used by the endpoint
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnvelopeConfig {
    /// Key holding the item array in a list response
    pub collection_key: String,
    /// Key holding the record in a single-entity response
    pub entity_key: String,
}

impl Default for EnvelopeConfig {
    fn default() -> Self {
        Self {
            collection_key: "users".to_string(),
            entity_key: "user".to_string(),
        }
    }
}

impl EnvelopeConfig {
    /// Create an envelope config with custom keys
    pub fn new(collection_key: impl Into<String>, entity_key: impl Into<String>) -> Self {
        Self {
            collection_key: collection_key.into(),
            entity_key: entity_key.into(),
        }
    }
}

/// Trait for decoding response bodies into the page/record model
pub trait ResponseDecoder: Send + Sync {
    /// Decode a list response into a page of records
    fn decode_page(&self, body: &str) -> Result<Page>;

    /// Decode a single-entity response into a record
    fn decode_entity(&self, body: &str) -> Result<Record>;
}
