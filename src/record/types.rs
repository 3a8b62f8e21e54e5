//! Record type and accessors

use crate::repository::Keyed;
use crate::types::{JsonObject, JsonValue};

/// One remote entity (e.g. a user of the collection endpoint)
///
/// Constructed once per decode and immutable afterwards. Operations that
/// "change" a record, like [`Record::with_unknown_field`], return a new value.
#[derive(Debug, Clone, PartialEq)]
pub struct Record {
    pub(crate) id: String,
    pub(crate) kind: String,
    pub(crate) name: Option<String>,
    pub(crate) email: Option<String>,
    pub(crate) summary: Option<String>,
    pub(crate) self_url: Option<String>,
    pub(crate) html_url: Option<String>,
    pub(crate) avatar_url: Option<String>,
    pub(crate) color: Option<String>,
    pub(crate) role: Option<String>,
    pub(crate) description: Option<String>,
    pub(crate) invitation_sent: Option<bool>,
    pub(crate) job_title: Option<String>,
    pub(crate) timezone: Option<String>,
    pub(crate) unknown_fields: JsonObject,
}

impl Record {
    /// Create a record with only its identity fields set
    ///
    /// Callers are expected to pass non-empty values; decoding from the wire
    /// goes through [`crate::record::decode`], which enforces that.
    pub fn new(id: impl Into<String>, kind: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            kind: kind.into(),
            name: None,
            email: None,
            summary: None,
            self_url: None,
            html_url: None,
            avatar_url: None,
            color: None,
            role: None,
            description: None,
            invitation_sent: None,
            job_title: None,
            timezone: None,
            unknown_fields: JsonObject::new(),
        }
    }

    /// Set the display name
    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Set the email address
    #[must_use]
    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }

    /// Set the role
    #[must_use]
    pub fn with_role(mut self, role: impl Into<String>) -> Self {
        self.role = Some(role.into());
        self
    }

    /// Set the timezone
    #[must_use]
    pub fn with_timezone(mut self, timezone: impl Into<String>) -> Self {
        self.timezone = Some(timezone.into());
        self
    }

    /// Set the job title
    #[must_use]
    pub fn with_job_title(mut self, job_title: impl Into<String>) -> Self {
        self.job_title = Some(job_title.into());
        self
    }

    /// Set the activation flag
    #[must_use]
    pub fn with_invitation_sent(mut self, sent: bool) -> Self {
        self.invitation_sent = Some(sent);
        self
    }

    /// Set the free-text summary
    #[must_use]
    pub fn with_summary(mut self, summary: impl Into<String>) -> Self {
        self.summary = Some(summary.into());
        self
    }

    /// Set the description
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Return a copy of this record with one more unrecognized field
    ///
    /// The original record is left untouched.
    #[must_use]
    pub fn with_unknown_field(&self, key: impl Into<String>, value: impl Into<JsonValue>) -> Self {
        let mut copy = self.clone();
        copy.unknown_fields.insert(key.into(), value.into());
        copy
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    /// Discriminator of the record shape (`type` on the wire)
    pub fn kind(&self) -> &str {
        &self.kind
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn email(&self) -> Option<&str> {
        self.email.as_deref()
    }

    pub fn summary(&self) -> Option<&str> {
        self.summary.as_deref()
    }

    /// API URL of the entity (`self` on the wire)
    pub fn self_url(&self) -> Option<&str> {
        self.self_url.as_deref()
    }

    pub fn html_url(&self) -> Option<&str> {
        self.html_url.as_deref()
    }

    pub fn avatar_url(&self) -> Option<&str> {
        self.avatar_url.as_deref()
    }

    pub fn color(&self) -> Option<&str> {
        self.color.as_deref()
    }

    pub fn role(&self) -> Option<&str> {
        self.role.as_deref()
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn invitation_sent(&self) -> Option<bool> {
        self.invitation_sent
    }

    pub fn job_title(&self) -> Option<&str> {
        self.job_title.as_deref()
    }

    /// Timezone (`time_zone` on the wire)
    pub fn timezone(&self) -> Option<&str> {
        self.timezone.as_deref()
    }

    /// Fields present on the wire that the client schema does not map
    pub fn unknown_fields(&self) -> &JsonObject {
        &self.unknown_fields
    }

    /// Whether the server sent anything this client does not understand.
    /// Useful for spotting API changes.
    pub fn has_unknown_fields(&self) -> bool {
        !self.unknown_fields.is_empty()
    }

    /// Get a specific unrecognized field by its original name
    pub fn unknown_field(&self, name: &str) -> Option<&JsonValue> {
        self.unknown_fields.get(name)
    }

    /// Names of the unrecognized fields, in arrival order
    pub fn unknown_field_names(&self) -> Vec<&str> {
        self.unknown_fields.keys().map(String::as_str).collect()
    }

    /// Human-readable activation status derived from `invitation_sent`
    pub fn status_label(&self) -> Option<&'static str> {
        self.invitation_sent
            .map(|sent| if sent { "Active" } else { "Invitation Pending" })
    }

    /// Case-insensitive substring match against name or email.
    /// `needle` must already be lowercase.
    pub(crate) fn matches_lowercase(&self, needle: &str) -> bool {
        [self.name.as_deref(), self.email.as_deref()]
            .into_iter()
            .flatten()
            .any(|value| value.to_lowercase().contains(needle))
    }
}

impl Keyed for Record {
    fn key(&self) -> &str {
        &self.id
    }
}
