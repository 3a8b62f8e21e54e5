//! Authentication module
//!
//! Supports: Token (`Authorization: Token token=...`), Bearer, custom header
//!
//! The credential is opaque to the rest of the crate: it is injected into
//! outgoing requests here and never inspected or logged anywhere else.

mod authenticator;
mod types;

pub use authenticator::Authenticator;
pub use types::{AuthConfig, AuthScheme};

#[cfg(test)]
mod tests;
