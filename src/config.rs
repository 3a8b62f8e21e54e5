//! Explorer configuration
//!
//! Settings for reaching the collection endpoint and for interactive
//! sessions, loaded from YAML or JSON. Every field has a default, so an empty
//! document is a valid configuration.

use crate::auth::{AuthConfig, AuthScheme};
use crate::decode::EnvelopeConfig;
use crate::error::{Error, Result};
use crate::export::ExporterConfig;
use crate::http::{HttpClientConfig, ThrottleConfig};
use crate::session::SessionConfig;
use crate::types::check_page_size;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Environment variable holding the API token
pub const TOKEN_ENV_VAR: &str = "PAGERDUTY_API_TOKEN";

/// Complete explorer configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExplorerConfig {
    /// API root, e.g. `https://api.pagerduty.com`
    pub base_url: String,

    /// Path of the collection below `base_url`
    pub collection_path: String,

    /// Key holding the item array in list responses
    pub collection_key: String,

    /// Key wrapping the record in single-entity responses
    pub entity_key: String,

    /// How the token is rendered into the `Authorization` header
    pub auth_scheme: AuthScheme,

    /// Request timeout in seconds
    pub timeout_secs: u64,

    /// Initial navigation page size
    pub page_size: u32,

    /// Page size used when loading the whole collection
    pub bulk_page_size: u32,

    /// Minimum delay between bulk-load requests, in milliseconds
    pub pacing_ms: u64,

    /// Wait after a 429 before the error is reported, in seconds
    pub rate_limit_backoff_secs: u64,

    /// Directory for exported files
    pub export_dir: PathBuf,

    /// File name prefix for exported files
    pub export_prefix: String,

    /// Optional client-side request rate cap
    pub requests_per_second: Option<u32>,
}

impl Default for ExplorerConfig {
    fn default() -> Self {
        Self {
            base_url: "https://api.pagerduty.com".to_string(),
            collection_path: "/users".to_string(),
            collection_key: "users".to_string(),
            entity_key: "user".to_string(),
            auth_scheme: AuthScheme::Token,
            timeout_secs: 30,
            page_size: 10,
            bulk_page_size: 100,
            pacing_ms: 100,
            rate_limit_backoff_secs: 30,
            export_dir: PathBuf::from("."),
            export_prefix: "pagerduty_users".to_string(),
            requests_per_second: None,
        }
    }
}

impl ExplorerConfig {
    /// Load from a file; `.json` is parsed as JSON, anything else as YAML
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| {
            Error::config(format!(
                "Failed to read config file '{}': {e}",
                path.display()
            ))
        })?;

        let is_json = path
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));
        if is_json {
            Self::from_json_str(&content)
        } else {
            Self::from_yaml_str(&content)
        }
    }

    /// Parse and validate a YAML document
    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        // an empty YAML document deserializes as unit, not as a map
        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }
        let config: Self = serde_yaml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    /// Parse and validate a JSON document
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Check ranges and required values
    pub fn validate(&self) -> Result<()> {
        if self.base_url.trim().is_empty() {
            return Err(Error::config("base_url cannot be empty"));
        }
        url::Url::parse(&self.base_url)?;

        for (name, value) in [
            ("collection_path", &self.collection_path),
            ("collection_key", &self.collection_key),
            ("entity_key", &self.entity_key),
            ("export_prefix", &self.export_prefix),
        ] {
            if value.trim().is_empty() {
                return Err(Error::config(format!("{name} cannot be empty")));
            }
        }

        check_page_size(self.page_size)
            .map_err(|e| Error::config(format!("page_size: {e}")))?;
        check_page_size(self.bulk_page_size)
            .map_err(|e| Error::config(format!("bulk_page_size: {e}")))?;

        if self.timeout_secs == 0 {
            return Err(Error::config("timeout_secs must be positive"));
        }
        if self.requests_per_second == Some(0) {
            return Err(Error::config("requests_per_second must be positive"));
        }
        Ok(())
    }

    /// Credential header for `token`
    pub fn auth(&self, token: impl Into<String>) -> AuthConfig {
        AuthConfig::with_scheme(self.auth_scheme, token)
    }

    pub fn envelope(&self) -> EnvelopeConfig {
        EnvelopeConfig {
            collection_key: self.collection_key.clone(),
            entity_key: self.entity_key.clone(),
        }
    }

    pub fn http_client(&self) -> HttpClientConfig {
        let mut builder = HttpClientConfig::builder()
            .base_url(&self.base_url)
            .timeout(Duration::from_secs(self.timeout_secs));
        if let Some(rps) = self.requests_per_second {
            builder = builder.throttle(ThrottleConfig::per_second(rps));
        }
        builder.build()
    }

    pub fn exporter(&self) -> ExporterConfig {
        ExporterConfig::new(&self.export_dir, &self.export_prefix)
    }

    pub fn session(&self) -> SessionConfig {
        SessionConfig::new()
            .with_page_size(self.page_size)
            .with_bulk_page_size(self.bulk_page_size)
            .with_pacing(Duration::from_millis(self.pacing_ms))
            .with_rate_limit_backoff(Duration::from_secs(self.rate_limit_backoff_secs))
            .with_export(self.exporter())
    }
}
