//! Decoder implementations

use super::types::{EnvelopeConfig, ResponseDecoder};
use crate::error::{Error, Result};
use crate::page::Page;
use crate::record::{self, Record};
use crate::types::{JsonObject, JsonValue};

/// JSON envelope decoder
#[derive(Debug, Clone, Default)]
pub struct EnvelopeDecoder {
    config: EnvelopeConfig,
}

impl EnvelopeDecoder {
    /// Create a decoder for the default `users` / `user` envelope
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a decoder with custom wrapper keys
    pub fn with_config(config: EnvelopeConfig) -> Self {
        Self { config }
    }

    /// Get the envelope configuration
    pub fn config(&self) -> &EnvelopeConfig {
        &self.config
    }

    fn parse_object(body: &str) -> Result<JsonObject> {
        let value: JsonValue = serde_json::from_str(body).map_err(|e| Error::Decode {
            message: format!("Failed to parse JSON: {e}"),
        })?;
        match value {
            JsonValue::Object(map) => Ok(map),
            other => Err(Error::decode(format!(
                "expected a JSON object at the top level, got {}",
                type_name(&other)
            ))),
        }
    }
}

impl ResponseDecoder for EnvelopeDecoder {
    fn decode_page(&self, body: &str) -> Result<Page> {
        let envelope = Self::parse_object(body)?;

        let items = match envelope.get(&self.config.collection_key) {
            Some(JsonValue::Array(raw_items)) => raw_items
                .iter()
                .map(record::decode)
                .collect::<Result<Vec<_>>>()?,
            Some(JsonValue::Null) | None => Vec::new(),
            Some(other) => {
                return Err(Error::decode(format!(
                    "'{}' must be an array, got {}",
                    self.config.collection_key,
                    type_name(other)
                )))
            }
        };

        let limit = integer_field(&envelope, "limit")?.unwrap_or(0);
        let offset = integer_field(&envelope, "offset")?.unwrap_or(0);
        let total = integer_field(&envelope, "total")?;
        let more = match envelope.get("more") {
            Some(JsonValue::Bool(b)) => *b,
            Some(JsonValue::Null) | None => false,
            Some(other) => {
                return Err(Error::decode(format!(
                    "'more' must be a boolean, got {}",
                    type_name(other)
                )))
            }
        };

        Page::new(limit, offset, more, total, items)
    }

    fn decode_entity(&self, body: &str) -> Result<Record> {
        let envelope = Self::parse_object(body)?;
        let raw = envelope.get(&self.config.entity_key).ok_or_else(|| {
            Error::decode(format!(
                "response has no '{}' field",
                self.config.entity_key
            ))
        })?;
        record::decode(raw)
    }
}

/// Read an optional integer metadata field; `null` counts as absent
fn integer_field(envelope: &JsonObject, key: &str) -> Result<Option<i64>> {
    match envelope.get(key) {
        None | Some(JsonValue::Null) => Ok(None),
        Some(value) => value
            .as_i64()
            .map(Some)
            .ok_or_else(|| Error::decode(format!("'{key}' must be an integer, got {value}"))),
    }
}

fn type_name(value: &JsonValue) -> &'static str {
    match value {
        JsonValue::Null => "null",
        JsonValue::Bool(_) => "boolean",
        JsonValue::Number(_) => "number",
        JsonValue::String(_) => "string",
        JsonValue::Array(_) => "array",
        JsonValue::Object(_) => "object",
    }
}
