//! Authenticator implementation

use super::types::{AuthConfig, AuthScheme};
use reqwest::RequestBuilder;

/// Applies an `AuthConfig` to outgoing requests
#[derive(Debug, Clone, Default)]
pub struct Authenticator {
    config: AuthConfig,
}

impl Authenticator {
    /// Create a new authenticator
    pub fn new(config: AuthConfig) -> Self {
        Self { config }
    }

    /// Apply authentication to a request
    pub fn apply(&self, req: RequestBuilder) -> RequestBuilder {
        match &self.config {
            AuthConfig::None => req,
            AuthConfig::Authorization {
                scheme: AuthScheme::Bearer,
                credential,
            } => req.bearer_auth(credential),
            AuthConfig::Authorization {
                scheme: AuthScheme::Token,
                credential,
            } => req.header(
                reqwest::header::AUTHORIZATION,
                format!("Token token={credential}"),
            ),
            AuthConfig::Header { name, value } => req.header(name.as_str(), value.as_str()),
        }
    }

    /// Get the auth configuration
    pub fn config(&self) -> &AuthConfig {
        &self.config
    }
}
