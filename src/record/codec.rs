//! Wire translation for records
//!
//! Known fields are mapped through a fixed name table. Everything else,
//! including a known field whose value is `null` or has an unexpected shape,
//! is kept in `unknown_fields` under its original name so `encode(decode(raw))`
//! reproduces the same set of fields.

use super::types::Record;
use crate::error::{Error, Result};
use crate::types::{JsonObject, JsonValue};
use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// External names of the fields mapped onto typed attributes, in the order
/// [`encode`] emits them
pub const KNOWN_FIELDS: &[&str] = &[
    "id",
    "type",
    "name",
    "email",
    "summary",
    "self",
    "html_url",
    "avatar_url",
    "color",
    "role",
    "description",
    "invitation_sent",
    "job_title",
    "time_zone",
];

/// Check whether an external field name is mapped onto a typed attribute
pub fn is_known_field(name: &str) -> bool {
    KNOWN_FIELDS.contains(&name)
}

/// Decode a record from a JSON value
///
/// The value must be an object carrying non-empty string `id` and `type`.
pub fn decode(raw: &JsonValue) -> Result<Record> {
    let object = raw
        .as_object()
        .ok_or_else(|| Error::validation("record must be a JSON object"))?;
    decode_object(object)
}

/// Decode a record from a JSON object
pub fn decode_object(object: &JsonObject) -> Result<Record> {
    let id = required_identity(object, "id")?;
    let kind = required_identity(object, "type")?;
    let mut record = Record::new(id, kind);

    for (key, value) in object {
        if key == "id" || key == "type" {
            continue;
        }
        if !assign_known(&mut record, key, value) {
            record.unknown_fields.insert(key.clone(), value.clone());
        }
    }

    Ok(record)
}

/// Encode a record back into one flat JSON object
///
/// Absent known fields are omitted. Unknown entries are merged into the same
/// object; an unknown entry never overrides a known field that is present.
pub fn encode(record: &Record) -> JsonValue {
    let mut object = JsonObject::new();
    object.insert("id".into(), record.id.clone().into());
    object.insert("type".into(), record.kind.clone().into());

    let strings = [
        ("name", &record.name),
        ("email", &record.email),
        ("summary", &record.summary),
        ("self", &record.self_url),
        ("html_url", &record.html_url),
        ("avatar_url", &record.avatar_url),
        ("color", &record.color),
        ("role", &record.role),
        ("description", &record.description),
    ];
    for (key, value) in strings {
        if let Some(value) = value {
            object.insert(key.into(), value.clone().into());
        }
    }
    if let Some(sent) = record.invitation_sent {
        object.insert("invitation_sent".into(), sent.into());
    }
    if let Some(job_title) = &record.job_title {
        object.insert("job_title".into(), job_title.clone().into());
    }
    if let Some(timezone) = &record.timezone {
        object.insert("time_zone".into(), timezone.clone().into());
    }

    for (key, value) in &record.unknown_fields {
        object
            .entry(key.clone())
            .or_insert_with(|| value.clone());
    }

    JsonValue::Object(object)
}

fn required_identity(object: &JsonObject, field: &str) -> Result<String> {
    match object.get(field) {
        Some(JsonValue::String(s)) if !s.is_empty() => Ok(s.clone()),
        Some(JsonValue::String(_)) => Err(Error::validation(format!(
            "record field '{field}' must not be empty"
        ))),
        Some(JsonValue::Null) | None => Err(Error::validation(format!(
            "record is missing required field '{field}'"
        ))),
        Some(other) => Err(Error::validation(format!(
            "record field '{field}' must be a string, got {other}"
        ))),
    }
}

/// Store `value` in the typed attribute for `key`.
/// Returns false when the key is unknown or the value has the wrong shape.
fn assign_known(record: &mut Record, key: &str, value: &JsonValue) -> bool {
    if key == "invitation_sent" {
        return match value.as_bool() {
            Some(sent) => {
                record.invitation_sent = Some(sent);
                true
            }
            None => false,
        };
    }

    let slot = match key {
        "name" => &mut record.name,
        "email" => &mut record.email,
        "summary" => &mut record.summary,
        "self" => &mut record.self_url,
        "html_url" => &mut record.html_url,
        "avatar_url" => &mut record.avatar_url,
        "color" => &mut record.color,
        "role" => &mut record.role,
        "description" => &mut record.description,
        "job_title" => &mut record.job_title,
        "time_zone" => &mut record.timezone,
        _ => return false,
    };

    match value.as_str() {
        Some(s) => {
            *slot = Some(s.to_string());
            true
        }
        None => false,
    }
}

impl Serialize for Record {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        encode(self).serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Record {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let raw = JsonValue::deserialize(deserializer)?;
        decode(&raw).map_err(D::Error::custom)
    }
}
