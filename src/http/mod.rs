//! HTTP client module
//!
//! Thin GET client used by the transport adapter.
//!
//! # Features
//!
//! - **Status mapping**: any non-2xx response becomes `Error::Transport`
//!   carrying the status code and raw body
//! - **No retries**: retry policy lives in the session, where it is visible
//!   and testable independent of the network
//! - **Throttling**: optional token bucket (governor) that paces requests
//!   client-side before they are sent
//! - **Authentication**: integration with the auth module

mod client;
mod throttle;

pub use client::{HttpClient, HttpClientConfig, HttpClientConfigBuilder, RequestConfig};
pub use throttle::{Throttle, ThrottleConfig};
