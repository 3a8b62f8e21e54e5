//! Auth configuration types

use serde::{Deserialize, Serialize};
use std::fmt;

/// How the credential string is rendered into the `Authorization` header
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AuthScheme {
    /// `Authorization: Token token=<credential>`
    #[default]
    Token,
    /// `Authorization: Bearer <credential>`
    Bearer,
}

/// Authentication configuration
#[derive(Clone, Default)]
pub enum AuthConfig {
    /// No authentication required
    #[default]
    None,

    /// Credential sent in the `Authorization` header
    Authorization {
        /// Header rendering scheme
        scheme: AuthScheme,
        /// The credential string
        credential: String,
    },

    /// Credential sent verbatim in a custom header
    Header {
        /// Header name
        name: String,
        /// Header value
        value: String,
    },
}

impl AuthConfig {
    /// Token-scheme credential
    pub fn token(credential: impl Into<String>) -> Self {
        Self::Authorization {
            scheme: AuthScheme::Token,
            credential: credential.into(),
        }
    }

    /// Bearer-scheme credential
    pub fn bearer(credential: impl Into<String>) -> Self {
        Self::Authorization {
            scheme: AuthScheme::Bearer,
            credential: credential.into(),
        }
    }

    /// Credential for the given scheme
    pub fn with_scheme(scheme: AuthScheme, credential: impl Into<String>) -> Self {
        Self::Authorization {
            scheme,
            credential: credential.into(),
        }
    }

    /// Check if this config carries a credential
    pub fn is_none(&self) -> bool {
        matches!(self, Self::None)
    }
}

// Keep credentials out of debug output and logs.
impl fmt::Debug for AuthConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::None => f.write_str("None"),
            Self::Authorization { scheme, .. } => f
                .debug_struct("Authorization")
                .field("scheme", scheme)
                .field("credential", &"***")
                .finish(),
            Self::Header { name, .. } => f
                .debug_struct("Header")
                .field("name", name)
                .field("value", &"***")
                .finish(),
        }
    }
}
